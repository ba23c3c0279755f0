// SPDX-License-Identifier: MPL-2.0
//! Update handlers for toolbar, browser and dialog messages.
//!
//! All metadata I/O runs synchronously here. The file dialog is the only
//! asynchronous step and it returns through [`Message::OpenDialogResult`]
//! before the session is touched.

use super::config::BrowserConfig;
use super::persisted_state::AppState;
use super::Message;
use crate::application::batch::{self, BatchReport};
use crate::application::session::TitleSession;
use crate::domain::metadata::DateInputError;
use crate::i18n::fluent::I18n;
use crate::media::{self, ExifMetadataStore, ImageData};
use crate::ui::browser::{self, carousel};
use crate::ui::notifications::{self, Notification};
use crate::ui::toolbar;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::{Path, PathBuf};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a mut TitleSession,
    pub store: &'a ExifMetadataStore,
    pub date_input: &'a mut String,
    pub thumbnails: &'a mut Vec<Option<ImageData>>,
    pub preview: &'a mut Option<ImageData>,
    pub captured_date: &'a mut Option<String>,
    pub layout: &'a BrowserConfig,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

// =============================================================================
// Toolbar
// =============================================================================

/// Handles toolbar messages.
pub fn handle_toolbar_message(
    ctx: &mut UpdateContext<'_>,
    message: toolbar::Message,
) -> Task<Message> {
    if toolbar::requires_images(&message) && ctx.session.is_empty() {
        return Task::none();
    }

    match message {
        toolbar::Message::Open => {
            handle_open_file_dialog(ctx.i18n, ctx.app_state.last_open_directory.clone())
        }
        toolbar::Message::Close => {
            handle_close(ctx);
            Task::none()
        }
        toolbar::Message::DateInputChanged(value) => {
            *ctx.date_input = value;
            Task::none()
        }
        toolbar::Message::SetDate => {
            handle_set_date(ctx);
            Task::none()
        }
        toolbar::Message::Save => {
            handle_save(ctx);
            Task::none()
        }
    }
}

/// Opens the native multi-select dialog filtered to supported images.
pub fn handle_open_file_dialog(i18n: &I18n, last_directory: Option<PathBuf>) -> Task<Message> {
    let title = i18n.tr("dialog-open-title");
    let filter_name = i18n.tr("dialog-filter-images");

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, media::extensions::IMAGE_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_files().await.map(|handles| {
                handles
                    .into_iter()
                    .map(|handle| handle.path().to_path_buf())
                    .collect()
            })
        },
        Message::OpenDialogResult,
    )
}

/// Handles the result of the open file dialog.
pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    paths: Option<Vec<PathBuf>>,
) -> Task<Message> {
    // Cancelled, or nothing picked
    match paths {
        Some(paths) if !paths.is_empty() => open_images(ctx, paths),
        _ => Task::none(),
    }
}

/// Replaces the open set with `paths` and selects the first image.
pub fn open_images(ctx: &mut UpdateContext<'_>, paths: Vec<PathBuf>) -> Task<Message> {
    tracing::info!(count = paths.len(), "opening images");

    if ctx.app_state.remember_open_directory(&paths) {
        if let Err(err) = ctx.app_state.save() {
            tracing::warn!(error = %err, "could not save application state");
        }
    }

    ctx.session.open(paths, ctx.store);
    *ctx.thumbnails = ctx
        .session
        .images()
        .iter()
        .map(|path| load_thumbnail(path, ctx.layout))
        .collect();

    refresh_current(ctx);
    scroll_to_selection(ctx.session)
}

fn handle_close(ctx: &mut UpdateContext<'_>) {
    tracing::info!(count = ctx.session.len(), "closing images");
    ctx.session.close();
    ctx.thumbnails.clear();
    *ctx.preview = None;
    *ctx.captured_date = None;
}

fn handle_save(ctx: &mut UpdateContext<'_>) {
    let report = batch::save_titles(ctx.session, ctx.store);
    notify_report(
        ctx.notifications,
        &report,
        "notification-save-error",
        "notification-save-success",
    );
}

fn handle_set_date(ctx: &mut UpdateContext<'_>) {
    match batch::set_capture_date(ctx.session, ctx.date_input.as_str(), ctx.store) {
        Ok(report) => {
            notify_report(
                ctx.notifications,
                &report,
                "notification-set-date-error",
                "notification-set-date-success",
            );
            refresh_captured_date(ctx);
        }
        Err(DateInputError::Malformed(input)) => {
            tracing::debug!(%input, "rejected capture date");
            ctx.notifications.push(
                Notification::error("notification-date-invalid").with_arg("input", input),
            );
        }
    }
}

/// One error toast per failed file, then the success toast.
///
/// The success toast is shown even when some files failed.
fn notify_report(
    notifications: &mut notifications::Manager,
    report: &BatchReport,
    error_key: &str,
    success_key: &str,
) {
    for failure in &report.failures {
        notifications.push(
            Notification::error(error_key)
                .with_file(&failure.path)
                .with_arg("error", failure.error.to_string()),
        );
    }
    notifications.push(Notification::success(success_key));
}

// =============================================================================
// Browser
// =============================================================================

/// Handles browser messages.
pub fn handle_browser_message(
    ctx: &mut UpdateContext<'_>,
    message: browser::Message,
) -> Task<Message> {
    let before = ctx.session.selection();

    match message {
        browser::Message::TitleInputChanged(value) => {
            ctx.session.set_title_input(value);
            return Task::none();
        }
        browser::Message::CopyTitleAndNext => ctx.session.copy_title_forward_and_advance(),
        browser::Message::Select(index) => ctx.session.select(index),
        browser::Message::Next => ctx.session.next(),
        browser::Message::Prev => ctx.session.prev(),
    }

    if ctx.session.selection() == before {
        return Task::none();
    }
    refresh_current(ctx);
    scroll_to_selection(ctx.session)
}

// =============================================================================
// Helpers
// =============================================================================

fn load_thumbnail(path: &Path, layout: &BrowserConfig) -> Option<ImageData> {
    media::load_thumbnail(path, layout.thumbnail_width, layout.thumbnail_height)
        .map_err(|err| {
            tracing::debug!(path = %path.display(), error = %err, "no thumbnail");
        })
        .ok()
}

/// Reloads the preview and capture date of the selected image.
fn refresh_current(ctx: &mut UpdateContext<'_>) {
    let Some(path) = ctx.session.current_path() else {
        *ctx.preview = None;
        *ctx.captured_date = None;
        return;
    };

    *ctx.preview = media::load_preview(path, ctx.layout.preview_height)
        .map_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "could not load preview");
        })
        .ok();
    *ctx.captured_date = media::metadata::read_captured_date(path).ok();
}

fn refresh_captured_date(ctx: &mut UpdateContext<'_>) {
    *ctx.captured_date = ctx
        .session
        .current_path()
        .and_then(|path| media::metadata::read_captured_date(path).ok());
}

fn scroll_to_selection(session: &TitleSession) -> Task<Message> {
    match session.selection() {
        Some(index) => operation::snap_to(
            Id::new(carousel::CAROUSEL_ID),
            carousel::scroll_offset(index, session.len()),
        ),
        None => Task::none(),
    }
}
