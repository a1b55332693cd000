//! egui shims: build common containers straight from a [`Symbol`](crate::Symbol).
//!
//! Each function here forwards a symbol's resolved file into an existing egui
//! entry point plus egui's own parameters. Nothing in this module validates,
//! keeps state, or fails on its own; a symbol in hand is already known good,
//! and everything else is egui's problem.
//!
//! Displaying the images is on the host application's loaders: install
//! `egui_extras` loaders with the `image` and `svg` features (themes ship a
//! mix of PNGs and SVGs), or any custom loader that handles `file://` URIs.
//!
//! ```no_run
//! use symbol::{FAVORITE, widget};
//!
//! fn show(ui: &mut egui::Ui) {
//!     if widget::button(ui, &FAVORITE).clicked() {
//!         // mark it
//!     }
//!     widget::label(ui, "Favorites", &FAVORITE);
//! }
//! ```

mod button;
mod disclosure;
mod image;
mod label;
mod labeled;
mod menu;
mod nav;
mod placeholder;
mod tab;

pub use button::button;
pub use disclosure::{disclosure, disclosure_with};
pub use image::{image, image_sized};
pub use label::label;
pub use labeled::labeled;
pub use menu::menu_button;
pub use nav::nav_link;
pub use placeholder::content_unavailable;
pub use tab::tab_item;

/// The default edge length symbols render at, in points.
pub const ICON_SIZE: f32 = 16.0;
