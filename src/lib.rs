// SPDX-License-Identifier: MPL-2.0
//! `manga_reader` is a minimal full-screen image viewer for reading manga,
//! built with the Iced GUI framework.
//!
//! It opens an image or a folder, collects the images below it in page
//! order, and pages, scrolls and resizes them from the keyboard and mouse.

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod ui;
