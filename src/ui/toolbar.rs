// SPDX-License-Identifier: MPL-2.0
//! Top toolbar: open/close the image set, the capture date field with its
//! Set Date button, and Save.

use crate::domain::metadata::DATE_INPUT_PLACEHOLDER;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text_input, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Raw contents of the date field.
    pub date_input: &'a str,
    /// Close, Set Date and Save only act on an open set.
    pub has_images: bool,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Open,
    Close,
    DateInputChanged(String),
    SetDate,
    Save,
}

/// Render the toolbar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let open_button = button(Text::new(ctx.i18n.tr("toolbar-open")).size(typography::BODY))
        .on_press(Message::Open)
        .padding(spacing::XS);

    let close_button = button(Text::new(ctx.i18n.tr("toolbar-close")).size(typography::BODY))
        .on_press_maybe(ctx.has_images.then_some(Message::Close))
        .padding(spacing::XS);

    let date_label = Text::new(ctx.i18n.tr("toolbar-date-label")).size(typography::BODY);

    let mut date_input = text_input(DATE_INPUT_PLACEHOLDER, ctx.date_input)
        .on_input(Message::DateInputChanged)
        .width(Length::Fixed(sizing::DATE_INPUT_WIDTH))
        .padding(spacing::XS);
    if ctx.has_images {
        date_input = date_input.on_submit(Message::SetDate);
    }

    let set_date_button =
        button(Text::new(ctx.i18n.tr("toolbar-set-date")).size(typography::BODY))
            .on_press_maybe(ctx.has_images.then_some(Message::SetDate))
            .padding(spacing::XS);

    let save_button = button(Text::new(ctx.i18n.tr("toolbar-save")).size(typography::BODY))
        .on_press_maybe(ctx.has_images.then_some(Message::Save))
        .padding(spacing::XS)
        .style(button::primary);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(open_button)
        .push(close_button)
        .push(Space::new().width(Length::Fixed(spacing::LG)))
        .push(date_label)
        .push(date_input)
        .push(set_date_button)
        .push(Space::new().width(Length::Fill))
        .push(save_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}

/// Returns `true` for messages that need an open image set to do anything.
#[must_use]
pub fn requires_images(message: &Message) -> bool {
    matches!(message, Message::Close | Message::SetDate | Message::Save)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_actions_require_images() {
        assert!(requires_images(&Message::Save));
        assert!(requires_images(&Message::SetDate));
        assert!(requires_images(&Message::Close));
        assert!(!requires_images(&Message::Open));
        assert!(!requires_images(&Message::DateInputChanged(String::new())));
    }
}
