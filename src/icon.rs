use std::path::{Path, PathBuf};

/// A renderable icon resource on disk: the file a catalog key resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFile {
    pub path: PathBuf,
    pub format: IconFormat,
}

impl IconFile {
    /// Accepts the path only if its extension is one of the formats the
    /// icon theme spec allows (`png`, `svg`, `xpm`).
    pub fn from_path(path: &Path) -> Option<IconFile> {
        let format = IconFormat::from_path_ext(path)?;

        Some(IconFile {
            path: path.to_owned(),
            format,
        })
    }

    /// The `file://` form of the path, as consumed by egui's file loader.
    pub fn uri(&self) -> String {
        format!("file://{}", self.path.display())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IconFormat {
    Png,
    Svg,
    Xpm,
}

impl IconFormat {
    pub fn from_path_ext(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;

        if ext.eq_ignore_ascii_case("png") {
            Some(IconFormat::Png)
        } else if ext.eq_ignore_ascii_case("svg") {
            Some(IconFormat::Svg)
        } else if ext.eq_ignore_ascii_case("xpm") {
            Some(IconFormat::Xpm)
        } else {
            None
        }
    }
}
