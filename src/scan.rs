use crate::icon::IconFile;
use std::collections::HashMap;
use std::path::PathBuf;

/// The directories icons and icon themes are looked for in.
///
/// "By default, apps should look in $HOME/.icons (for backwards compatibility),
/// in $XDG_DATA_DIRS/icons and in /usr/share/pixmaps (in that order)."
/// Icons the user installed under `$XDG_DATA_HOME/icons` are searched too.
///
/// Applications may add their own directories with [`SearchPaths::append`],
/// or build the whole list by hand from anything that iterates into paths:
///
/// ```
/// use symbol::SearchPaths;
///
/// let paths = SearchPaths::default().append(["/opt/myapp/icons"]);
/// let just_mine = SearchPaths::from(["/opt/myapp/icons"]);
/// ```
#[derive(Debug, Clone)]
pub struct SearchPaths {
    pub paths: Vec<PathBuf>,
}

impl SearchPaths {
    /// Adds directories to the end of the search order.
    pub fn append<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));

        self
    }

    /// Reads every search path once, splitting what's there into loose icons
    /// and candidate theme directories.
    ///
    /// "Each theme is stored as subdirectories of the base directories."
    /// Unreadable or missing search paths are skipped silently; that is the
    /// normal state of most of the default list.
    pub fn scan(&self) -> Scan {
        let mut scan = Scan::default();

        for entry in self.paths.iter().flat_map(|p| p.read_dir()).flatten().flatten() {
            let path = entry.path();

            if path.is_file() {
                // icons at the top level of a search path belong to no theme,
                // but must still be findable
                if let Some(icon) = IconFile::from_path(&path) {
                    scan.loose_icons.push(icon);
                }
            } else if path.is_dir() {
                let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                    // internal names appear inside index.theme files, which are
                    // utf-8; a non-utf-8 directory name can't belong to a theme
                    continue;
                };

                scan.theme_dirs.entry(name).or_default().push(path);
            }
        }

        scan
    }
}

/// Anything that turns into an iterator of things that can become paths,
/// can be turned into a `SearchPaths`.
impl<I, P> From<I> for SearchPaths
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    fn from(value: I) -> Self {
        let paths = value.into_iter().map(Into::into).collect();

        SearchPaths { paths }
    }
}

impl Default for SearchPaths {
    fn default() -> Self {
        let xdg = xdg::BaseDirectories::new();

        let mut paths = vec![];

        if let Some(home) = std::env::home_dir() {
            paths.push(home.join(".icons"));
        }

        if let Some(data_home) = xdg.data_home {
            paths.push(data_home.join("icons"));
        }

        xdg.data_dirs
            .into_iter()
            .map(|data_dir| data_dir.join("icons"))
            .for_each(|dir| paths.push(dir));

        paths.push("/usr/share/pixmaps".into());

        paths.into()
    }
}

/// What one pass over the search paths turned up.
#[derive(Debug, Default)]
pub struct Scan {
    /// Candidate theme directories, grouped by internal name. Whether a
    /// candidate really is a theme is only known once its `index.theme`
    /// parses; that happens when a [`Catalog`](crate::Catalog) is built.
    pub theme_dirs: HashMap<String, Vec<PathBuf>>,
    /// Icons found at the top level of a search path, outside any theme.
    pub loose_icons: Vec<IconFile>,
}

impl Scan {
    pub fn loose_icon(&self, icon_name: &str) -> Option<&IconFile> {
        self.loose_icons
            .iter()
            .find(|icon| icon.path.file_stem().is_some_and(|stem| stem == icon_name))
    }

    /// Parses every candidate theme and produces a ready-to-query catalog.
    pub fn into_catalog(self) -> crate::Catalog {
        crate::Catalog::from_scan(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn scan_partitions_loose_icons_and_theme_candidates() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("htop.png"));
        touch(&root.path().join("README"));
        touch(&root.path().join("Acorn/index.theme"));
        touch(&root.path().join("Acorn/48x48/actions/edit-copy.png"));

        let scan = SearchPaths::from([root.path()]).scan();

        assert_eq!(scan.loose_icons.len(), 1);
        assert!(scan.loose_icon("htop").is_some());
        assert!(scan.loose_icon("edit-copy").is_none());
        assert_eq!(scan.theme_dirs.len(), 1);
        assert!(scan.theme_dirs.contains_key("Acorn"));
    }

    #[test]
    fn same_theme_across_two_roots_is_grouped() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        touch(&a.path().join("Acorn/index.theme"));
        touch(&b.path().join("Acorn/48x48/actions/edit-copy.png"));

        let scan = SearchPaths::from([a.path(), b.path()]).scan();

        assert_eq!(scan.theme_dirs["Acorn"].len(), 2);
    }

    #[test]
    fn missing_paths_are_skipped() {
        let scan = SearchPaths::from(["/definitely/not/a/real/path"]).scan();

        assert!(scan.loose_icons.is_empty());
        assert!(scan.theme_dirs.is_empty());
    }
}
