// SPDX-License-Identifier: MPL-2.0
//! Image browser: large preview of the selected image, the title editor
//! with navigation buttons, and the thumbnail carousel.
//!
//! When no image is open an empty state with a short hint is shown instead.

pub mod carousel;

use crate::app::config::BrowserConfig;
use crate::application::session::SelectionInfo;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image, text_input, Column, Container, Row, Space, Text},
    ContentFit, Element, Length,
};
use std::path::PathBuf;

/// Contextual data needed to render the browser.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a [PathBuf],
    pub thumbnails: &'a [Option<ImageData>],
    pub preview: Option<&'a ImageData>,
    pub title_input: &'a str,
    pub selection: SelectionInfo,
    /// Raw EXIF capture timestamp of the selected image, if it has one.
    pub captured_date: Option<&'a str>,
    pub layout: &'a BrowserConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    TitleInputChanged(String),
    CopyTitleAndNext,
    Select(usize),
    Next,
    Prev,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.images.is_empty() {
        return empty_state(ctx.i18n);
    }

    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .width(Length::Fill)
        .push(preview(&ctx))
        .push(info_row(&ctx))
        .push(title_editor(&ctx))
        .push(carousel::view(carousel::ViewContext {
            images: ctx.images,
            thumbnails: ctx.thumbnails,
            selected: ctx.selection.current_index,
            layout: ctx.layout,
        }));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn empty_state<'a>(i18n: &I18n) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("empty-state-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("empty-state-hint")).size(typography::BODY));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn preview<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let height = Length::Fixed(ctx.layout.preview_height as f32);

    let content: Element<'a, Message> = match ctx.preview {
        Some(data) => image(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(height)
            .into(),
        None => Space::new().width(Length::Fill).height(height).into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .style(styles::container::preview)
        .into()
}

/// "3 / 12" and the capture timestamp of the selected image.
fn info_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let position = ctx.selection.current_index.map_or_else(String::new, |index| {
        let current = (index + 1).to_string();
        let total = ctx.selection.total_count.to_string();
        ctx.i18n.tr_with_args(
            "position-indicator",
            &[("current", current.as_str()), ("total", total.as_str())],
        )
    });

    let captured = match ctx.captured_date {
        Some(timestamp) => ctx
            .i18n
            .tr_with_args("captured-at", &[("timestamp", timestamp)]),
        None => ctx.i18n.tr("captured-unknown"),
    };

    Row::new()
        .spacing(spacing::MD)
        .push(Text::new(position).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(captured).size(typography::CAPTION))
        .into()
}

fn title_editor<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("title-label")).size(typography::BODY);

    let placeholder = ctx.i18n.tr("title-placeholder");
    let input = text_input(placeholder.as_str(), ctx.title_input)
        .on_input(Message::TitleInputChanged)
        .width(Length::Fixed(sizing::TITLE_INPUT_WIDTH))
        .padding(spacing::XS);

    let previous = button(Text::new(ctx.i18n.tr("button-previous")).size(typography::BODY))
        .on_press_maybe(ctx.selection.has_previous.then_some(Message::Prev))
        .padding(spacing::XS);
    let next = button(Text::new(ctx.i18n.tr("button-next")).size(typography::BODY))
        .on_press_maybe(ctx.selection.has_next.then_some(Message::Next))
        .padding(spacing::XS);
    let copy_next = button(Text::new(ctx.i18n.tr("button-copy-next")).size(typography::BODY))
        .on_press_maybe(ctx.selection.has_next.then_some(Message::CopyTitleAndNext))
        .padding(spacing::XS);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(label)
        .push(input)
        .push(previous)
        .push(next)
        .push(copy_next)
        .into()
}
