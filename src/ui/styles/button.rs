// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Frame around a carousel thumbnail. The selected one gets the brand
/// color and a thicker border.
pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background;

        let border_color = if selected {
            palette::PRIMARY_500
        } else {
            base.strong.color
        };
        let background = match status {
            button::Status::Hovered if !selected => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            })),
            button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            })),
            _ if selected => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            })),
            _ => None,
        };

        button::Style {
            background,
            text_color: base.base.text,
            border: Border {
                color: border_color,
                width: if selected {
                    border::WIDTH_MD
                } else {
                    border::WIDTH_SM
                },
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_thumbnail_uses_brand_border() {
        let style = thumbnail(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, palette::PRIMARY_500);
        assert_eq!(style.border.width, border::WIDTH_MD);
        assert!(style.background.is_some());
    }

    #[test]
    fn idle_thumbnail_has_no_background() {
        let style = thumbnail(false)(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.border.width, border::WIDTH_SM);
    }
}
