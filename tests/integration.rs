// SPDX-License-Identifier: MPL-2.0
use image_rs::{Rgba, RgbaImage};
use manga_reader::config::{self, Config, ScanConfig};
use manga_reader::directory_scanner::{sort_by_leading_number, PageList};
use manga_reader::ui::state::{clamp_vertical_offset, PixelSize};
use manga_reader::ui::viewer::{component, Effect, InputMode};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([200, 200, 200, 255]))
        .save(path)
        .expect("failed to write png");
}

#[test]
fn opening_a_file_selects_it_in_numeric_order() {
    let dir = tempdir().expect("failed to create temp dir");
    for name in ["page2.jpg", "page10.jpg", "page1.jpg"] {
        std::fs::write(dir.path().join(name), b"fake").expect("write page");
    }

    let list = PageList::open(&dir.path().join("page10.jpg"), &ScanConfig::default())
        .expect("failed to open");

    let names: Vec<_> = list
        .pages()
        .iter()
        .map(|p| p.file_name().unwrap().to_owned())
        .collect();
    assert_eq!(names, ["page1.jpg", "page2.jpg", "page10.jpg"]);
    assert_eq!(list.current_index(), Some(2));

    let from_dir = PageList::open(dir.path(), &ScanConfig::default()).expect("failed to open");
    assert_eq!(from_dir.current_index(), Some(0));
}

#[test]
fn sort_fallback_keeps_input_order() {
    let original: Vec<PathBuf> = ["z9.png", "a1.png", "title.png", "b5.png"]
        .iter()
        .map(PathBuf::from)
        .collect();
    let mut pages = original.clone();

    sort_by_leading_number(&mut pages, Path::new(""));

    assert_eq!(pages, original);
}

#[test]
fn clamp_rule_properties_hold_over_a_range() {
    for viewport in [480, 1080, 1440] {
        for content in (27..4000).step_by(97) {
            for y in (-5000..5000).step_by(250) {
                let clamped = clamp_vertical_offset(content, viewport, y);
                if content < viewport {
                    assert_eq!(clamped, (viewport - content) / 2);
                } else {
                    assert!(viewport - content <= clamped && clamped <= 0);
                }
            }
        }
    }
}

#[test]
fn viewer_reads_real_pages_and_navigates() {
    let dir = tempdir().expect("failed to create temp dir");
    write_png(&dir.path().join("001.png"), 40, 60);
    write_png(&dir.path().join("002.png"), 60, 40);
    let config_dir = tempdir().expect("failed to create config dir");
    let (config, warning) = config::load_with_override(Some(config_dir.path().to_path_buf()));
    assert!(warning.is_none());

    let mut viewer = component::State::new(&config);
    viewer
        .handle_message(component::Message::OpenPath(dir.path().join("002.png")));

    assert_eq!(viewer.pages().current_index(), Some(1));
    assert_eq!(viewer.displayed_page(), Some(dir.path().join("002.png").as_path()));

    viewer.change_page(1);
    assert_eq!(viewer.displayed_page(), Some(dir.path().join("001.png").as_path()));

    viewer.change_page_size(-1, 3);
    assert_eq!(viewer.geometry().size(), PixelSize::new(1920 - 144, 1080 - 81));
}

#[test]
fn custom_config_changes_scan_and_steps() {
    let config_dir = tempdir().expect("failed to create config dir");
    let mut custom = Config::default();
    custom.scan.extension_pattern = "gif".to_string();
    custom.controls.zoom_step_width = 100;
    custom.controls.zoom_step_height = 50;
    config::save_to_path(&custom, &config_dir.path().join("settings.toml"))
        .expect("failed to save config");

    let (loaded, warning) = config::load_with_override(Some(config_dir.path().to_path_buf()));
    assert!(warning.is_none());

    let pages_dir = tempdir().expect("failed to create temp dir");
    std::fs::write(pages_dir.path().join("1.gif"), b"fake").expect("write page");
    std::fs::write(pages_dir.path().join("2.png"), b"fake").expect("write page");

    let mut viewer = component::State::new(&loaded);
    viewer
        .open(pages_dir.path())
        .expect("failed to open pages");
    assert_eq!(viewer.pages().len(), 1);

    viewer.change_page_size(1, 1);
    assert_eq!(viewer.geometry().size(), PixelSize::new(2020, 1130));
}

#[test]
fn viewer_starts_in_normal_mode_with_no_effect_on_open_path() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut viewer = component::State::default();

    let effect = viewer.handle_message(component::Message::OpenPath(dir.path().to_path_buf()));

    assert_eq!(effect, Effect::None);
    assert_eq!(viewer.mode(), InputMode::Normal);
    assert!(viewer.pages().is_empty());
    assert!(viewer.displayed_page().is_none());
}
