// SPDX-License-Identifier: MPL-2.0
//! `photo_grid` is a photo search and browse application built with the Iced
//! GUI framework.
//!
//! It fetches photos from an Unsplash-style API, shows them in a responsive
//! grid and lets the user search by text. Localization uses Fluent and
//! preferences live in a small `settings.toml`.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
