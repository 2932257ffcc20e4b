// SPDX-License-Identifier: MPL-2.0
use pet_manager::app::config::{self, Config, LayoutConfig, ToastsConfig, MAX_TOAST_LIMIT};
use pet_manager::ui::notifications::{ToastOptions, ToastStore};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn saved_settings_configure_a_new_store() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let saved = Config {
        toasts: ToastsConfig {
            limit: Some(2),
            remove_delay_ms: Some(750),
        },
        layout: LayoutConfig {
            sidebar_open: Some(false),
        },
    };
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, saved);
    assert!(!loaded.sidebar_open());

    let store = ToastStore::new(loaded.store_config());
    assert_eq!(store.limit(), 2);
    assert_eq!(store.remove_delay(), Duration::from_millis(750));

    for title in ["A", "B", "C"] {
        store.toast(ToastOptions::titled(title));
    }
    assert_eq!(store.len(), 2);
}

#[test]
fn oversized_limit_in_file_is_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[toasts]\nlimit = 1000\n",
    )
    .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(ToastStore::new(loaded.store_config()).limit(), MAX_TOAST_LIMIT);
}
