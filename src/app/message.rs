// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::browser;
use crate::ui::notifications;
use crate::ui::toolbar;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(toolbar::Message),
    Browser(browser::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog; `None` when cancelled.
    OpenDialogResult(Option<Vec<PathBuf>>),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Images to open on startup, in the order given.
    pub file_paths: Vec<String>,
    /// Optional data directory override (for `state.cbor`).
    /// Takes precedence over the `ICED_CAPTION_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over the `ICED_CAPTION_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
