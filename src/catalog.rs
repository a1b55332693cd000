use crate::icon::IconFile;
use crate::scan::{Scan, SearchPaths};
use crate::theme::Theme;
use std::collections::{HashMap, VecDeque};
use std::sync::OnceLock;

/// Nominal lookup size used when all that matters is whether a name resolves.
pub(crate) const PROBE_SIZE: u32 = 48;

/// Every icon theme and loose icon found on a set of search paths, ready to
/// answer "does this name exist" and "which file renders it".
pub struct Catalog {
    themes: HashMap<String, Theme>,
    loose_icons: Vec<IconFile>,
    preferred: Vec<String>,
}

impl Catalog {
    /// Scans the standard search directories.
    pub fn system() -> Self {
        SearchPaths::default().scan().into_catalog()
    }

    /// Scans the given directories only.
    pub fn with_paths(paths: impl Into<SearchPaths>) -> Self {
        paths.into().scan().into_catalog()
    }

    /// Adds a theme to the front of the lookup order. Themes are consulted in
    /// the order given, each through its full inheritance chain, before the
    /// `hicolor` default. Naming a theme that isn't installed is harmless.
    pub fn prefer(mut self, theme: impl Into<String>) -> Self {
        self.preferred.push(theme.into());

        self
    }

    pub(crate) fn from_scan(scan: Scan) -> Self {
        let Scan {
            theme_dirs,
            loose_icons,
        } = scan;

        let mut themes = HashMap::new();

        for (name, dirs) in theme_dirs {
            match Theme::from_dirs(name.clone(), dirs) {
                Ok(theme) => {
                    themes.insert(name, theme);
                }
                Err(_e) => {
                    #[cfg(feature = "log")]
                    log::debug!("skipping theme candidate {name:?}: {_e}");
                }
            }
        }

        let chains: Vec<(String, Vec<String>)> = themes
            .keys()
            .map(|name| (name.clone(), flatten_ancestry(name, &themes)))
            .collect();

        for (name, chain) in chains {
            if let Some(theme) = themes.get_mut(&name) {
                theme.ancestry = chain;
            }
        }

        Catalog {
            themes,
            loose_icons,
            preferred: Vec::new(),
        }
    }

    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Whether `icon_name` resolves to anything at all: the existence check
    /// that backs [`Symbol`](crate::Symbol) validation.
    pub fn contains(&self, icon_name: &str) -> bool {
        self.locate(icon_name, PROBE_SIZE, 1).is_some()
    }

    /// Looks an icon up through the preferred themes (in order), then
    /// `hicolor`, then the loose icons.
    pub fn locate(&self, icon_name: &str, size: u32, scale: u32) -> Option<IconFile> {
        for theme in self.theme_order() {
            if let Some(file) = self.find_through(theme, icon_name, size, scale) {
                return Some(file);
            }
        }

        self.loose_icon(icon_name).cloned()
    }

    /// Looks an icon up in one named theme and its inheritance chain.
    ///
    /// If no theme by that name exists, `hicolor` is checked. Loose icons are
    /// still the fallback of last resort.
    pub fn locate_in_theme(
        &self,
        theme_name: &str,
        icon_name: &str,
        size: u32,
        scale: u32,
    ) -> Option<IconFile> {
        let theme = self.theme(theme_name).or_else(|| self.theme("hicolor"))?;

        self.find_through(theme, icon_name, size, scale)
            .or_else(|| self.loose_icon(icon_name).cloned())
    }

    pub fn loose_icon(&self, icon_name: &str) -> Option<&IconFile> {
        self.loose_icons
            .iter()
            .find(|icon| icon.path.file_stem().is_some_and(|stem| stem == icon_name))
    }

    fn theme_order(&self) -> impl Iterator<Item = &Theme> {
        self.preferred
            .iter()
            .map(String::as_str)
            .chain(std::iter::once("hicolor"))
            .filter_map(|name| self.themes.get(name))
    }

    fn find_through(
        &self,
        theme: &Theme,
        icon_name: &str,
        size: u32,
        scale: u32,
    ) -> Option<IconFile> {
        theme.find_here(icon_name, size, scale).or_else(|| {
            theme
                .ancestry
                .iter()
                .filter_map(|name| self.themes.get(name))
                .find_map(|ancestor| ancestor.find_here(icon_name, size, scale))
        })
    }
}

/// Flattens a theme's `Inherits` graph into a search order.
///
/// Breadth-first: hicolor has every icon an application ships, and most themes
/// inherit it at shallow depth; depth-first would reach it before ever trying
/// the second entry of an `Inherits` list. The spec leaves the order open.
fn flatten_ancestry(start: &str, themes: &HashMap<String, Theme>) -> Vec<String> {
    let mut chain: Vec<String> = Vec::new();
    let mut queue: VecDeque<String> = match themes.get(start) {
        Some(theme) => theme.index.inherits.iter().cloned().collect(),
        None => VecDeque::new(),
    };

    while let Some(name) = queue.pop_front() {
        if name == start || chain.contains(&name) {
            continue;
        }

        // a parent that isn't installed can't be searched, and its own
        // parents are unknowable without an index
        let Some(theme) = themes.get(&name) else {
            continue;
        };

        queue.extend(theme.index.inherits.iter().cloned());
        chain.push(name);
    }

    // "If no theme is specified, implementations are required to add the
    // 'hicolor' theme to the inheritance tree."
    if start != "hicolor" && !chain.iter().any(|c| c == "hicolor") && themes.contains_key("hicolor")
    {
        chain.push("hicolor".to_owned());
    }

    chain
}

static INSTALLED: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
#[error("an icon catalog is already installed for this process")]
pub struct AlreadyInstalled;

/// Installs the catalog that backs the string-only [`Symbol`](crate::Symbol)
/// operations and the predefined instances.
///
/// Call it early, before anything constructs a `Symbol`, to substitute custom
/// search paths or a preferred theme. Once a catalog is installed (explicitly,
/// or implicitly by the first lookup) it is fixed for the life of the process.
pub fn install(catalog: Catalog) -> Result<(), AlreadyInstalled> {
    INSTALLED.set(catalog).map_err(|_| AlreadyInstalled)
}

/// The process-wide catalog, scanning the system search paths on first use.
pub fn installed() -> &'static Catalog {
    INSTALLED.get_or_init(Catalog::system)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn touch(path: &Path) {
        write(path, "");
    }

    /// Three themes and a loose icon:
    /// `Acorn` inherits `oak`, `oak` inherits nothing, `hicolor` is present.
    fn fixture(root: &Path) {
        write(
            &root.join("Acorn/index.theme"),
            "[Icon Theme]\nName=Acorn\nInherits=oak\nDirectories=16x16/actions,48x48/actions\n\n\
             [16x16/actions]\nSize=16\nType=Fixed\n\n\
             [48x48/actions]\nSize=48\nType=Fixed\n",
        );
        touch(&root.join("Acorn/16x16/actions/edit-copy.png"));
        touch(&root.join("Acorn/48x48/actions/edit-copy.png"));

        write(
            &root.join("oak/index.theme"),
            "[Icon Theme]\nName=Oak\nDirectories=32x32/actions\n\n\
             [32x32/actions]\nSize=32\nType=Fixed\n",
        );
        touch(&root.join("oak/32x32/actions/go-home.png"));

        write(
            &root.join("hicolor/index.theme"),
            "[Icon Theme]\nName=Hicolor\nDirectories=48x48/apps\n\n\
             [48x48/apps]\nSize=48\nType=Fixed\n",
        );
        touch(&root.join("hicolor/48x48/apps/system-default.png"));

        touch(&root.join("htop.png"));
    }

    fn catalog(root: &Path) -> Catalog {
        Catalog::with_paths([root]).prefer("Acorn")
    }

    #[test]
    fn exact_size_match_wins() {
        let dir = tempfile::tempdir().unwrap();
        fixture(dir.path());
        let catalog = catalog(dir.path());

        let file = catalog.locate("edit-copy", 16, 1).unwrap();
        assert!(file.path.ends_with("16x16/actions/edit-copy.png"));

        let file = catalog.locate("edit-copy", 48, 1).unwrap();
        assert!(file.path.ends_with("48x48/actions/edit-copy.png"));
    }

    #[test]
    fn closest_size_is_used_when_nothing_matches() {
        let dir = tempfile::tempdir().unwrap();
        fixture(dir.path());
        let catalog = catalog(dir.path());

        // 40px fits neither fixed directory; 48 is 8 away, 16 is 24 away
        let file = catalog.locate("edit-copy", 40, 1).unwrap();
        assert!(file.path.ends_with("48x48/actions/edit-copy.png"));
    }

    #[test]
    fn inherited_themes_are_searched() {
        let dir = tempfile::tempdir().unwrap();
        fixture(dir.path());
        let catalog = catalog(dir.path());

        // go-home only exists in oak, Acorn's parent
        let file = catalog.locate("go-home", 32, 1).unwrap();
        assert!(file.path.ends_with("oak/32x32/actions/go-home.png"));
    }

    #[test]
    fn hicolor_is_appended_to_every_ancestry() {
        let dir = tempfile::tempdir().unwrap();
        fixture(dir.path());
        let catalog = catalog(dir.path());

        // Acorn's Inherits never mentions hicolor, yet its chain reaches it
        assert_eq!(catalog.theme("Acorn").unwrap().ancestry, ["oak", "hicolor"]);
        assert!(catalog.locate("system-default", 48, 1).is_some());
    }

    #[test]
    fn loose_icons_are_the_last_resort() {
        let dir = tempfile::tempdir().unwrap();
        fixture(dir.path());
        let catalog = catalog(dir.path());

        let file = catalog.locate("htop", 48, 1).unwrap();
        assert_eq!(file.path, dir.path().join("htop.png"));
    }

    #[test]
    fn contains_reports_existence() {
        let dir = tempfile::tempdir().unwrap();
        fixture(dir.path());
        let catalog = catalog(dir.path());

        assert!(catalog.contains("edit-copy"));
        assert!(catalog.contains("htop"));
        assert!(!catalog.contains("this-name-does-not-exist-xyz"));
    }

    #[test]
    fn unknown_preferred_theme_falls_back_to_hicolor() {
        let dir = tempfile::tempdir().unwrap();
        fixture(dir.path());
        let catalog = Catalog::with_paths([dir.path()]).prefer("Missing");

        assert!(catalog.locate("system-default", 48, 1).is_some());
    }

    #[test]
    fn locate_in_theme_ignores_preference_order() {
        let dir = tempfile::tempdir().unwrap();
        fixture(dir.path());
        let catalog = Catalog::with_paths([dir.path()]);

        let file = catalog.locate_in_theme("oak", "go-home", 32, 1).unwrap();
        assert!(file.path.ends_with("go-home.png"));

        // unknown theme name degrades to hicolor
        assert!(
            catalog
                .locate_in_theme("Missing", "system-default", 48, 1)
                .is_some()
        );
    }

    #[test]
    fn invalid_candidates_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fixture(dir.path());
        // a directory without an index.theme is not a theme
        fs::create_dir_all(dir.path().join("not-a-theme/48x48")).unwrap();

        let catalog = catalog(dir.path());
        assert!(catalog.theme("not-a-theme").is_none());
    }
}
