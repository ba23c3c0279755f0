// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: toolbar above the browser, with the
//! toast overlay stacked on top.

use super::config::BrowserConfig;
use super::Message;
use crate::application::session::TitleSession;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::browser;
use crate::ui::notifications::{self, Toast};
use crate::ui::toolbar;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a TitleSession,
    pub date_input: &'a str,
    pub thumbnails: &'a [Option<ImageData>],
    pub preview: Option<&'a ImageData>,
    pub captured_date: Option<&'a str>,
    pub layout: &'a BrowserConfig,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toolbar_view = toolbar::view(toolbar::ViewContext {
        i18n: ctx.i18n,
        date_input: ctx.date_input,
        has_images: !ctx.session.is_empty(),
    })
    .map(Message::Toolbar);

    let browser_view = browser::view(browser::ViewContext {
        i18n: ctx.i18n,
        images: ctx.session.images(),
        thumbnails: ctx.thumbnails,
        preview: ctx.preview,
        title_input: ctx.session.title_input(),
        selection: ctx.session.selection_info(),
        captured_date: ctx.captured_date,
        layout: ctx.layout,
    })
    .map(Message::Browser);

    let column = Column::new()
        .push(toolbar_view)
        .push(
            Container::new(browser_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(column)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
