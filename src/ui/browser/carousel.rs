// SPDX-License-Identifier: MPL-2.0
//! Horizontal strip of thumbnails, one button per open image.

use super::Message;
use crate::app::config::BrowserConfig;
use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, RelativeOffset, Scrollbar};
use iced::widget::{button, image, Container, Id, Row, Scrollable, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::{Path, PathBuf};

/// Widget id of the carousel scrollable, used to keep the selection in view.
pub const CAROUSEL_ID: &str = "thumbnail-carousel";

pub struct ViewContext<'a> {
    pub images: &'a [PathBuf],
    /// Parallel to `images`; `None` when the file could not be decoded.
    pub thumbnails: &'a [Option<ImageData>],
    pub selected: Option<usize>,
    pub layout: &'a BrowserConfig,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let width = ctx.layout.thumbnail_width as f32;
    let height = ctx.layout.thumbnail_height as f32;

    let row = Row::with_children(ctx.images.iter().enumerate().map(|(index, path)| {
        let content: Element<'a, Message> = match ctx.thumbnails.get(index).and_then(Option::as_ref) {
            Some(thumbnail) => image(thumbnail.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .into(),
            None => Container::new(Text::new(file_label(path)).size(typography::CAPTION))
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .into(),
        };

        button(content)
            .on_press(Message::Select(index))
            .padding(sizing::THUMBNAIL_FRAME / 2.0)
            .style(styles::button::thumbnail(ctx.selected == Some(index)))
            .into()
    }))
    .spacing(spacing::XS)
    .padding(spacing::XS)
    .align_y(alignment::Vertical::Center);

    Scrollable::new(row)
        .id(Id::new(CAROUSEL_ID))
        .direction(Direction::Horizontal(Scrollbar::new()))
        .width(Length::Fill)
        .into()
}

/// Horizontal offset that brings thumbnail `index` of `len` into view.
#[must_use]
pub fn scroll_offset(index: usize, len: usize) -> RelativeOffset {
    let x = if len <= 1 {
        0.0
    } else {
        index.min(len - 1) as f32 / (len - 1) as f32
    };
    RelativeOffset { x, y: 0.0 }
}

fn file_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
