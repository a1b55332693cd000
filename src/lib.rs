//! Type-safe freedesktop icon names, and egui widgets built straight from them.
//!
//! An icon name like `"edit-copy"` is a stringly-typed reference into
//! whatever icon themes happen to be installed. Misspell it, or pick a name
//! only some themes ship, and nothing complains until a blank space renders,
//! usually on someone else's machine. [`Symbol`] moves that failure to
//! construction: holding one means the name resolved against the catalog.
//!
//! # Quick start
//!
//! ```no_run
//! use symbol::Symbol;
//!
//! // panics right here on an unknown name, not at render time
//! let copy = Symbol::new("edit-copy");
//!
//! // names from config or other dynamic input get the recoverable path
//! if Symbol::is_valid("maybe-installed") {
//!     let sym = Symbol::try_new("maybe-installed").unwrap();
//! }
//!
//! assert_eq!(copy.name(), "edit-copy");
//! println!("renders from {}", copy.uri());
//! ```
//!
//! A few ubiquitous names ship predefined: [`FAVORITE`], [`STARRED`],
//! [`NOTIFICATION`]. With the default `widgets` feature, [`widget`] builds
//! egui buttons, labels, menus, tab items, disclosure groups and empty-state
//! placeholders from a symbol directly.
//!
//! # How names resolve
//!
//! Validation is a real lookup, not a list check: the crate scans the XDG
//! icon search paths ([`SearchPaths`]), parses each theme's `index.theme`
//! ([`theme`]), and walks theme inheritance down to `hicolor` and the loose
//! icons in `/usr/share/pixmaps` ([`Catalog`]). A name is valid exactly when
//! that walk finds a file for it.
//!
//! The string-only constructors use one process-wide catalog, scanned lazily.
//! Applications with their own icon directories or a preferred theme should
//! [`install`] a configured catalog at startup:
//!
//! ```no_run
//! let catalog = symbol::Catalog::system().prefer("Adwaita");
//! symbol::install(catalog).expect("installed before first use");
//! ```
//!
//! Rendering stays the host's job. The widgets hand egui `file://` URIs;
//! install `egui_extras` image loaders with the `image` and `svg` features
//! (themes ship a mix of both), or any loader that handles file URIs.

mod catalog;
mod icon;
mod scan;
mod symbol;
pub mod theme;
#[cfg(feature = "widgets")]
pub mod widget;

pub use catalog::{AlreadyInstalled, Catalog, install, installed};
pub use icon::{IconFile, IconFormat};
pub use scan::{Scan, SearchPaths};
pub use symbol::{FAVORITE, NOTIFICATION, STARRED, Symbol, UnknownSymbol};
