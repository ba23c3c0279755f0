// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for batch results and configuration warnings.
//!
//! Save and Set Date report one error toast per file that could not be
//! written, followed by a summary toast. Errors stay until dismissed; the
//! other severities fade on their own.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::error("notification-save-error").with_file(&path));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, Notification, NotificationId, Severity};
pub use toast::Toast;
