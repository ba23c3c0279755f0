// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the toolbar, the image
//! browser and the notification overlay.
//!
//! The `App` struct owns the editing session and translates messages into
//! metadata reads and writes, image decoding and toast notifications.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::session::TitleSession;
use crate::i18n::fluent::I18n;
use crate::media::{self, ExifMetadataStore, ImageData};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use config::BrowserConfig;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
#[derive(Default)]
pub struct App {
    pub i18n: I18n,
    session: TitleSession,
    store: ExifMetadataStore,
    /// Contents of the capture date field.
    date_input: String,
    /// One entry per open image; `None` when it could not be decoded.
    thumbnails: Vec<Option<ImageData>>,
    preview: Option<ImageData>,
    /// Raw capture timestamp of the selected image.
    captured_date: Option<String>,
    browser: BrowserConfig,
    theme_mode: ThemeMode,
    app_state: persisted_state::AppState,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.session.len())
            .field("selection", &self.session.selection())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 760;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(mut flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.take(), flags.config_dir.take());

    // iced 0.14 requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and state, then opens any images passed on the
    /// command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            browser: config.browser.clamped(),
            theme_mode: config.general.theme_mode,
            app_state: persisted_state::AppState::load(),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let files = media::filter_supported(flags.file_paths.into_iter().map(PathBuf::from));
        let task = if files.is_empty() {
            Task::none()
        } else {
            update::open_images(&mut app.update_context(), files)
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            session: &mut self.session,
            store: &self.store,
            date_input: &mut self.date_input,
            thumbnails: &mut self.thumbnails,
            preview: &mut self.preview,
            captured_date: &mut self.captured_date,
            layout: &self.browser,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");

        match self.session.current_path().and_then(|path| path.file_name()) {
            Some(name) => format!("{} - {app_name}", name.to_string_lossy()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toolbar(toolbar_message) => {
                update::handle_toolbar_message(&mut self.update_context(), toolbar_message)
            }
            Message::Browser(browser_message) => {
                update::handle_browser_message(&mut self.update_context(), browser_message)
            }
            Message::OpenDialogResult(paths) => {
                update::handle_open_file_dialog_result(&mut self.update_context(), paths)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            date_input: &self.date_input,
            thumbnails: &self.thumbnails,
            preview: self.preview.as_ref(),
            captured_date: self.captured_date.as_deref(),
            layout: &self.browser,
            notifications: &self.notifications,
        })
    }
}
