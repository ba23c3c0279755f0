// SPDX-License-Identifier: MPL-2.0
use iced_caption::app::config::{self, BrowserConfig, Config, GeneralConfig};
use iced_caption::application::batch::{save_titles, set_capture_date};
use iced_caption::application::port::{MetadataError, MetadataPort};
use iced_caption::application::session::TitleSession;
use iced_caption::domain::metadata::{CaptureDate, DateInputError};
use iced_caption::i18n::fluent::I18n;
use iced_caption::ui::theming::ThemeMode;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Stores titles in memory and logs every write, failing for listed paths.
#[derive(Default)]
struct FakeStore {
    titles: RefCell<HashMap<PathBuf, String>>,
    dates: RefCell<Vec<(PathBuf, String)>>,
    broken: Vec<PathBuf>,
}

impl FakeStore {
    fn check(&self, path: &Path) -> Result<(), MetadataError> {
        if self.broken.iter().any(|p| p == path) {
            Err(MetadataError::WriteFailed("read-only".into()))
        } else {
            Ok(())
        }
    }
}

impl MetadataPort for FakeStore {
    fn read_title(&self, path: &Path) -> Result<String, MetadataError> {
        self.titles
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| MetadataError::FieldNotFound("ImageDescription".into()))
    }

    fn write_title(&self, path: &Path, title: &str) -> Result<(), MetadataError> {
        self.check(path)?;
        self.titles
            .borrow_mut()
            .insert(path.to_path_buf(), title.to_string());
        Ok(())
    }

    fn write_captured_date(
        &self,
        path: &Path,
        date: CaptureDate,
        sequence_index: u32,
    ) -> Result<(), MetadataError> {
        self.check(path)?;
        let timestamp = date
            .timestamp_for(sequence_index)
            .ok_or_else(|| MetadataError::WriteFailed("out of range".into()))?;
        self.dates
            .borrow_mut()
            .push((path.to_path_buf(), timestamp.into_string()));
        Ok(())
    }
}

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|n| PathBuf::from(format!("/album/{n}"))).collect()
}

#[test]
fn edit_copy_forward_and_save() {
    let images = paths(&["a.jpg", "b.jpg", "c.jpg"]);
    let store = FakeStore::default();
    store
        .titles
        .borrow_mut()
        .insert(images[2].clone(), "Old".to_string());

    let mut session = TitleSession::new();
    session.open(images.clone(), &store);
    assert_eq!(session.title_input(), "");

    session.set_title_input("Lighthouse");
    session.copy_title_forward_and_advance();
    session.next();
    assert_eq!(session.title_input(), "Old");
    session.set_title_input("Pier");

    let report = save_titles(&mut session, &store);

    assert_eq!(report.succeeded, 3);
    assert!(report.failures.is_empty());
    let titles = store.titles.borrow();
    assert_eq!(titles[&images[0]], "Lighthouse");
    assert_eq!(titles[&images[1]], "Lighthouse");
    assert_eq!(titles[&images[2]], "Pier");
}

#[test]
fn set_date_continues_past_a_failing_file() {
    let images = paths(&["a.jpg", "b.jpg", "c.jpg"]);
    let store = FakeStore {
        broken: vec![images[1].clone()],
        ..FakeStore::default()
    };
    let mut session = TitleSession::new();
    session.open(images.clone(), &store);

    let report = set_capture_date(&session, "1/2/2024", &store).expect("valid date");

    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, images[1]);
    assert_eq!(
        *store.dates.borrow(),
        vec![
            (images[0].clone(), "2024:02:01 12:00:00".to_string()),
            (images[2].clone(), "2024:02:01 12:00:02".to_string()),
        ]
    );
}

#[test]
fn invalid_date_writes_nothing() {
    let images = paths(&["a.jpg", "b.jpg"]);
    let store = FakeStore::default();
    let mut session = TitleSession::new();
    session.open(images, &store);

    let result = set_capture_date(&session, "2024-02-01", &store);

    assert_eq!(
        result,
        Err(DateInputError::Malformed("2024-02-01".to_string()))
    );
    assert!(store.dates.borrow().is_empty());
}

#[test]
fn language_follows_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    std::fs::write(
        &config_path,
        "[general]\nlanguage = \"fr\"\ntheme_mode = \"dark\"\n",
    )
    .expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(
        loaded,
        Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            browser: BrowserConfig::default(),
        }
    );
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("toolbar-save"), "Enregistrer");

    // The command line wins over the config file
    let i18n_cli = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n_cli.current_locale().to_string(), "en-US");
}
