// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Arrow keys move the selection, but only when no widget captured the key
//! first, so the cursor still moves inside a focused text field.

use super::Message;
use crate::ui::browser;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Routes Left/Right arrow presses to previous/next image.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                navigation_for_key(&key).map(Message::Browser)
            }
            _ => None,
        }
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn navigation_for_key(key: &keyboard::Key) -> Option<browser::Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(browser::Message::Prev),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(browser::Message::Next),
        _ => None,
    }
}
