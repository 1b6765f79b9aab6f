//! The UI font, read once at startup.

use crate::error::DashboardError;
use ab_glyph::FontRef;
use std::io;
use std::path::{Path, PathBuf};

/// Default font location, relative to the working directory.
pub const DEFAULT_FONT_PATH: &str = "font.ttf";

/// Raw font file bytes plus where they came from.
#[derive(Clone)]
pub struct FontResource {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl FontResource {
    /// Read the whole font file. A missing, unreadable or empty file, or one
    /// that does not parse as TrueType/OpenType, is a
    /// [`DashboardError::ResourceLoad`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let path = path.as_ref();
        let fail = |source| DashboardError::ResourceLoad {
            path: path.to_path_buf(),
            source,
        };

        let bytes = std::fs::read(path).map_err(fail)?;
        if bytes.is_empty() {
            return Err(fail(io::Error::new(io::ErrorKind::InvalidData, "file is empty")));
        }
        if let Err(err) = FontRef::try_from_slice(&bytes) {
            return Err(fail(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("not a TrueType/OpenType font: {err}"),
            )));
        }

        tracing::info!(path = %path.display(), bytes = bytes.len(), "Loaded font");
        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    /// File stem, used as the font family key.
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dashboard-font".to_owned())
    }
}

impl std::fmt::Debug for FontResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontResource")
            .field("path", &self.path)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}
