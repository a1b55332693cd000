use crate::icon::IconFile;
use freedesktop_entry_parser::low_level::{EntryIter, SectionBytes};
use std::path::{Path, PathBuf};

/// Lookup happens on file names with these extensions, in this order of preference.
const EXTENSIONS: [&str; 3] = ["png", "svg", "xpm"];

/// One icon theme, ready for lookups.
///
/// A theme is identified by its _internal name_: the name of the directory it
/// lives in, inside one or more of the search paths. Looking an icon up in a
/// theme only searches the theme itself; walking [`ancestry`](Self::ancestry)
/// is the catalog's job.
pub struct Theme {
    /// The internal name, e.g. `Adwaita`.
    pub name: String,
    /// Every directory named after the theme across the search paths.
    ///
    /// "The data for the theme is merged from all the theme directories".
    pub base_dirs: Vec<PathBuf>,
    pub index: ThemeIndex,
    /// Internal names of the themes this one inherits from, flattened into
    /// search order, with `hicolor` last. Filled in while the catalog is built.
    pub ancestry: Vec<String>,
}

impl Theme {
    /// Reads a theme from the directories carrying its internal name.
    ///
    /// "In at least one of the theme directories there must be a file called
    /// index.theme that describes the theme. The first index.theme found
    /// while searching the base directories in order is used."
    pub fn from_dirs(name: impl Into<String>, base_dirs: Vec<PathBuf>) -> std::io::Result<Theme> {
        let index_path = base_dirs
            .iter()
            .map(|dir| dir.join("index.theme"))
            .find(|path| path.exists())
            .ok_or_else(|| std::io::Error::other(ThemeParseError::NotAnIconTheme))?;

        let index = ThemeIndex::parse_from_file(&index_path)?;

        Ok(Theme {
            name: name.into(),
            base_dirs,
            index,
            ancestry: Vec::new(),
        })
    }

    /// Looks for an icon in this theme alone, ignoring ancestry.
    ///
    /// Sized directories that match exactly win; otherwise the candidate with
    /// the smallest size distance is taken, so a theme that has the icon at
    /// all always yields something.
    pub fn find_here(&self, icon_name: &str, size: u32, scale: u32) -> Option<IconFile> {
        let candidates = EXTENSIONS.map(|ext| format!("{icon_name}.{ext}"));

        for dir in self.index.directories.iter().filter(|d| d.matches(size, scale)) {
            if let Some(file) = self.probe(dir, &candidates) {
                return Some(file);
            }
        }

        let mut best: Option<(u32, IconFile)> = None;

        for dir in &self.index.directories {
            let distance = dir.distance(size, scale);

            if best.as_ref().is_none_or(|(closest, _)| distance < *closest) {
                if let Some(file) = self.probe(dir, &candidates) {
                    best = Some((distance, file));
                }
            }
        }

        best.map(|(_, file)| file)
    }

    fn probe(&self, dir: &IconDir, candidates: &[String]) -> Option<IconFile> {
        for base in &self.base_dirs {
            for file_name in candidates {
                let path = base.join(&dir.dir).join(file_name);

                if path.exists() {
                    if let Some(file) = IconFile::from_path(&path) {
                        return Some(file);
                    }
                }
            }
        }

        None
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeParseError {
    #[error("missing `[Icon Theme]` section")]
    NotAnIconTheme,
    #[error("missing attribute `{0}`")]
    MissingAttribute(&'static str),
    #[error("the index wasn't valid utf-8")]
    NotUtf8(#[from] std::str::Utf8Error),
    #[error("a bool was expected but failed to parse")]
    InvalidBool(#[from] std::str::ParseBoolError),
    #[error("a number was expected but failed to parse")]
    InvalidNumber(#[from] std::num::ParseIntError),
    #[error("`{0}` is not a directory type")]
    InvalidSizeKind(String),
    #[error("invalid format for a freedesktop entry file")]
    Entry(#[from] freedesktop_entry_parser::ParseError),
}

/// The parsed contents of an `index.theme` file.
#[derive(Debug)]
pub struct ThemeIndex {
    pub name: String,
    pub comment: String,
    pub inherits: Vec<String>,
    pub directories: Vec<IconDir>,
    pub hidden: bool,
    pub example: Option<String>,
}

impl ThemeIndex {
    pub fn parse_from_file(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;

        ThemeIndex::parse(&bytes).map_err(std::io::Error::other)
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, ThemeParseError> {
        let mut entry: EntryIter = freedesktop_entry_parser::low_level::parse_entry(bytes);

        let header: SectionBytes = entry.next().ok_or(ThemeParseError::NotAnIconTheme)??;
        if header.title != b"Icon Theme" {
            return Err(ThemeParseError::NotAnIconTheme);
        }

        let name: &str = req_attr(&header, "Name")?;
        // `Comment` is required by the spec, but plenty of themes in the wild
        // ship without one. Default to empty rather than rejecting them.
        let comment = opt_attr(&header, "Comment")?.unwrap_or("");
        // A comma-separated list. May legitimately be absent; hicolor is
        // appended to the ancestry later regardless.
        let inherits = opt_attr(&header, "Inherits")?
            .iter()
            .flat_map(|s| s.split(','))
            .map(Into::into)
            .collect::<Vec<String>>();
        let listed = req_attr(&header, "Directories")?
            .split(',')
            .collect::<Vec<_>>();
        let scaled = opt_attr(&header, "ScaledDirectories")?
            .map(|s| s.split(',').collect::<Vec<_>>())
            .unwrap_or_default();
        let hidden = opt_attr(&header, "Hidden")?
            .map(|s| s.parse())
            .transpose()?
            .unwrap_or(false);
        let example = opt_attr(&header, "Example")?;

        // every remaining section should describe one of the listed directories;
        // anything else is ignored
        let directories = entry
            .filter_map(Result::ok)
            .filter_map(|section| {
                let title = std::str::from_utf8(section.title).ok()?;

                let in_scaled = scaled.contains(&title);

                if !listed.contains(&title) && !in_scaled {
                    return None;
                }

                let dir = IconDir::parse(section).map(|mut dir| {
                    dir.scaled |= in_scaled;
                    dir
                });

                Some(dir)
            })
            .collect::<Result<Vec<_>, ThemeParseError>>()?;

        Ok(Self {
            name: name.into(),
            comment: comment.into(),
            inherits,
            directories,
            hidden,
            example: example.map(Into::into),
        })
    }
}

/// One sized directory section of an `index.theme`.
#[derive(Debug)]
pub struct IconDir {
    /// The directory path relative to the theme's base dirs, e.g. `48x48/actions`.
    pub dir: String,
    pub scaled: bool,
    pub size: u32,
    pub scale: u32,
    pub context: Option<String>,
    pub kind: SizeKind,
    pub max_size: u32,
    pub min_size: u32,
    pub threshold: u32,
}

impl IconDir {
    fn parse(section: SectionBytes) -> Result<Self, ThemeParseError> {
        let dir = std::str::from_utf8(section.title)?;
        let size: u32 = req_attr(&section, "Size")?.parse()?;
        let scale: u32 = opt_attr(&section, "Scale")?
            .map(|s| s.parse())
            .transpose()?
            .unwrap_or(1);
        let context = opt_attr(&section, "Context")?;
        // "If not specified, the default is Threshold"
        let kind = opt_attr(&section, "Type")?
            .map(SizeKind::parse)
            .transpose()?
            .unwrap_or(SizeKind::Threshold);
        let max_size = opt_attr(&section, "MaxSize")?
            .map(|s| s.parse())
            .transpose()?
            .unwrap_or(size);
        let min_size = opt_attr(&section, "MinSize")?
            .map(|s| s.parse())
            .transpose()?
            .unwrap_or(size);
        let threshold = opt_attr(&section, "Threshold")?
            .map(|s| s.parse())
            .transpose()?
            .unwrap_or(2);

        Ok(Self {
            dir: dir.into(),
            scaled: scale != 1,
            size,
            scale,
            context: context.map(Into::into),
            kind,
            max_size,
            min_size,
            threshold,
        })
    }

    /// Whether icons in this directory fit the requested size exactly.
    pub fn matches(&self, icon_size: u32, icon_scale: u32) -> bool {
        if self.scale != icon_scale {
            return false;
        }

        match self.kind {
            SizeKind::Fixed => self.size == icon_size,
            SizeKind::Scalable => (self.min_size..=self.max_size).contains(&icon_size),
            SizeKind::Threshold => self.size.abs_diff(icon_size) <= self.threshold,
        }
    }

    /// How far off this directory is from the requested size, in physical pixels.
    pub fn distance(&self, icon_size: u32, icon_scale: u32) -> u32 {
        let wanted = icon_size * icon_scale;

        match self.kind {
            SizeKind::Fixed | SizeKind::Scalable => (self.size * self.scale).abs_diff(wanted),
            SizeKind::Threshold => {
                let lower = self.size.saturating_sub(self.threshold) * self.scale;
                let higher = (self.size + self.threshold) * self.scale;

                if wanted < lower {
                    wanted.abs_diff(self.min_size * self.scale)
                } else if wanted > higher {
                    wanted.abs_diff(self.max_size * self.scale)
                } else {
                    0
                }
            }
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SizeKind {
    Fixed,
    Scalable,
    Threshold,
}

impl SizeKind {
    fn parse(value: &str) -> Result<Self, ThemeParseError> {
        match value {
            "Fixed" => Ok(SizeKind::Fixed),
            "Scalable" => Ok(SizeKind::Scalable),
            "Threshold" => Ok(SizeKind::Threshold),
            other => Err(ThemeParseError::InvalidSizeKind(other.into())),
        }
    }
}

fn opt_attr<'a>(
    section: &'a SectionBytes,
    name: &str,
) -> Result<Option<&'a str>, std::str::Utf8Error> {
    section
        .attrs
        .iter()
        .find(|attr| attr.name == name.as_bytes() && attr.param.is_none())
        .map(|attr| std::str::from_utf8(attr.value))
        .transpose()
}

fn req_attr<'a>(
    section: &'a SectionBytes,
    name: &'static str,
) -> Result<&'a str, ThemeParseError> {
    opt_attr(section, name)?.ok_or(ThemeParseError::MissingAttribute(name))
}

#[cfg(test)]
mod test {
    use super::*;

    static ACORN: &str = include_str!("../resources/acorn.index.theme");

    #[test]
    fn parse_acorn_index() {
        let index = ThemeIndex::parse(ACORN.as_bytes()).unwrap();

        assert_eq!(index.name, "Acorn");
        assert_eq!(index.comment, "Flat icons with an autumn palette");
        assert_eq!(index.inherits, vec!["oak", "hicolor"]);
        assert!(!index.hidden);
        assert_eq!(index.example, None);

        let dirs = index.directories;
        assert_eq!(dirs.len(), 5);

        let fixed = &dirs[0];
        assert_eq!(fixed.dir, "16x16/actions");
        assert_eq!(fixed.kind, SizeKind::Fixed);
        assert_eq!(fixed.size, 16);
        assert_eq!(fixed.scale, 1);
        assert!(!fixed.scaled);
        assert_eq!(fixed.context.as_deref(), Some("Actions"));

        let scalable = &dirs[3];
        assert_eq!(scalable.kind, SizeKind::Scalable);
        assert_eq!(scalable.min_size, 8);
        assert_eq!(scalable.max_size, 512);

        // listed under ScaledDirectories only
        let retina = &dirs[2];
        assert_eq!(retina.dir, "48x48@2/actions");
        assert_eq!(retina.scale, 2);
        assert!(retina.scaled);
    }

    #[test]
    fn missing_header_is_rejected() {
        let err = ThemeIndex::parse(b"[Desktop Entry]\nName=Nope\n").unwrap_err();
        assert!(matches!(err, ThemeParseError::NotAnIconTheme));
    }

    #[test]
    fn directories_attribute_is_required() {
        let err = ThemeIndex::parse(b"[Icon Theme]\nName=Bare\n").unwrap_err();
        assert!(matches!(err, ThemeParseError::MissingAttribute("Directories")));
    }

    #[test]
    fn fixed_dirs_match_their_size_only() {
        let index = ThemeIndex::parse(ACORN.as_bytes()).unwrap();
        let fixed = &index.directories[0];

        assert!(fixed.matches(16, 1));
        assert!(!fixed.matches(17, 1));
        assert!(!fixed.matches(16, 2));
        assert_eq!(fixed.distance(32, 1), 16);
    }

    #[test]
    fn threshold_dirs_match_within_threshold() {
        let index = ThemeIndex::parse(ACORN.as_bytes()).unwrap();
        let threshold = &index.directories[1];

        assert!(threshold.matches(48, 1));
        assert!(threshold.matches(44, 1));
        assert!(threshold.matches(52, 1));
        assert!(!threshold.matches(53, 1));
        assert_eq!(threshold.distance(48, 1), 0);
        assert_eq!(threshold.distance(50, 1), 0);
    }

    #[test]
    fn scalable_dirs_match_their_range() {
        let index = ThemeIndex::parse(ACORN.as_bytes()).unwrap();
        let scalable = &index.directories[3];

        assert!(scalable.matches(8, 1));
        assert!(scalable.matches(512, 1));
        assert!(!scalable.matches(513, 1));
    }

    #[test]
    fn threshold_distance_does_not_underflow() {
        // a Threshold larger than Size used to be able to underflow the lower bound
        let index = ThemeIndex::parse(
            b"[Icon Theme]\nName=T\nDirectories=tiny\n\n[tiny]\nSize=2\nThreshold=8\n",
        )
        .unwrap();
        let dir = &index.directories[0];

        // saturates to a lower bound of zero, so anything undersized is in range
        assert_eq!(dir.distance(1, 1), 0);
    }
}
