// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Top toolbar surface.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r, base.g, base.b, 0.95,
        ))),
        border: Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark backdrop behind the preview so letterboxing is visible.
pub fn preview(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        ..Default::default()
    }
}
