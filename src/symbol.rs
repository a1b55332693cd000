use crate::catalog::{Catalog, PROBE_SIZE, installed};
use crate::icon::IconFile;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

/// A freedesktop icon name that is guaranteed to resolve.
///
/// Holding a `Symbol` means the name was looked up in the icon catalog when
/// the value was constructed, so "blank icon at render time" turns into an
/// error at the place the name was written down. Two symbols are equal iff
/// their names are equal; the resolved file plays no part in identity.
///
/// For names known at development time, construct with [`Symbol::new`] and
/// let an unknown name fail loudly. For names from configuration or other
/// dynamic input, use [`Symbol::try_new`] (or check [`Symbol::is_valid`]
/// first) and fall back in ordinary control flow.
#[derive(Debug, Clone)]
pub struct Symbol {
    name: String,
    icon: IconFile,
}

impl Symbol {
    /// Creates a symbol, treating an unknown name as a programmer error.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not present in the installed catalog. This is the
    /// fail-fast path for literal, known-good catalog names; anything dynamic
    /// belongs on [`Symbol::try_new`].
    pub fn new(name: &str) -> Symbol {
        match Symbol::try_new(name) {
            Ok(symbol) => symbol,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a symbol if `name` resolves in the installed catalog.
    pub fn try_new(name: &str) -> Result<Symbol, UnknownSymbol> {
        Symbol::try_new_in(installed(), name)
    }

    /// Creates a symbol against an explicit catalog instead of the installed one.
    pub fn try_new_in(catalog: &Catalog, name: &str) -> Result<Symbol, UnknownSymbol> {
        match catalog.locate(name, PROBE_SIZE, 1) {
            Some(icon) => Ok(Symbol {
                name: name.to_owned(),
                icon,
            }),
            None => {
                #[cfg(feature = "log")]
                log::debug!("icon name {name:?} did not resolve in the catalog");

                Err(UnknownSymbol {
                    name: name.to_owned(),
                })
            }
        }
    }

    /// Whether `name` exists in the installed catalog. Never panics; the
    /// recoverable twin of the check [`Symbol::new`] enforces.
    pub fn is_valid(name: &str) -> bool {
        installed().contains(name)
    }

    /// [`Symbol::is_valid`] against an explicit catalog.
    pub fn is_valid_in(catalog: &Catalog, name: &str) -> bool {
        catalog.contains(name)
    }

    /// The catalog key this symbol was constructed from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file the name resolved to at construction time.
    pub fn icon(&self) -> &IconFile {
        &self.icon
    }

    /// `file://` URI of the resolved file, as egui's file loader takes it.
    pub fn uri(&self) -> String {
        self.icon.uri()
    }

    /// Re-resolves the symbol at a specific size and scale against the
    /// installed catalog, for call sites that want a density-correct pixmap.
    ///
    /// Falls back to the construction-time file, so a held symbol always
    /// yields something renderable.
    pub fn locate(&self, size: u32, scale: u32) -> IconFile {
        installed()
            .locate(&self.name, size, scale)
            .unwrap_or_else(|| self.icon.clone())
    }

    /// [`Symbol::locate`] against an explicit catalog.
    pub fn locate_in(&self, catalog: &Catalog, size: u32, scale: u32) -> IconFile {
        catalog
            .locate(&self.name, size, scale)
            .unwrap_or_else(|| self.icon.clone())
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The one error this crate produces: a name with no entry in the catalog.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown icon name `{name}`: not found in any installed icon theme or loose icon directory")]
pub struct UnknownSymbol {
    pub name: String,
}

// Common names provided for convenience. Each resolves through the installed
// catalog on first use; the names are stable entries every mainstream theme
// carries, so failing to resolve one is treated like any other bad literal.

/// The heart emblem, for favorites.
pub static FAVORITE: LazyLock<Symbol> = LazyLock::new(|| Symbol::new("emblem-favorite"));

/// The star, for ratings and starred items.
pub static STARRED: LazyLock<Symbol> = LazyLock::new(|| Symbol::new("starred"));

/// The notification bell.
pub static NOTIFICATION: LazyLock<Symbol> =
    LazyLock::new(|| Symbol::new("preferences-system-notifications"));
