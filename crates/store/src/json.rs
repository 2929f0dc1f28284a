use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use shelfy_core::catalog::Catalog;
use shelfy_core::snapshot::{decode_catalog, encode_catalog, SnapshotError, SnapshotStore};

/// Catalog snapshot in a single JSON file. A missing file means no snapshot;
/// saves create parent directories and rewrite the whole file.
#[derive(Clone, Debug)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Existing snapshot if present, otherwise the starter catalog, written
    /// out immediately so the file exists from the first run on.
    pub fn load_or_seed(&self) -> Result<Catalog, SnapshotError> {
        if let Some(catalog) = self.load()? {
            return Ok(catalog);
        }

        let catalog = Catalog::starter();
        self.save(&catalog)?;
        Ok(catalog)
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<Option<Catalog>, SnapshotError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SnapshotError::Read { path: self.path.clone(), source })
            }
        };

        Ok(Some(decode_catalog(&raw)?))
    }

    fn save(&self, catalog: &Catalog) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|source| SnapshotError::Write { path: self.path.clone(), source })?;
            }
        }

        fs::write(&self.path, encode_catalog(catalog)?)
            .map_err(|source| SnapshotError::Write { path: self.path.clone(), source })
    }
}
