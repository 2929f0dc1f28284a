use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::Catalog;

/// Whole-catalog persistence. Implementations replace the entire snapshot on
/// every save; there is no partial update, so loading what was saved always
/// reproduces the catalog exactly.
pub trait SnapshotStore {
    /// `Ok(None)` means no snapshot exists yet and the caller decides how to
    /// seed one.
    fn load(&self) -> Result<Option<Catalog>, SnapshotError>;

    fn save(&self, catalog: &Catalog) -> Result<(), SnapshotError>;
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("could not read snapshot `{path}`: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write snapshot `{path}`: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("snapshot JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Canonical snapshot form: a pretty-printed JSON array with a trailing
/// newline. Stores share this so snapshots stay diffable across backends.
pub fn encode_catalog(catalog: &Catalog) -> Result<String, SnapshotError> {
    let mut body = serde_json::to_string_pretty(catalog)?;
    body.push('\n');
    Ok(body)
}

pub fn decode_catalog(raw: &str) -> Result<Catalog, SnapshotError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_then_decode_is_identity() {
        let catalog = Catalog::starter();

        let encoded = encode_catalog(&catalog).expect("encode");
        assert!(encoded.ends_with('\n'));

        let decoded = decode_catalog(&encoded).expect("decode");
        assert_eq!(decoded, catalog);
    }

    #[test]
    fn decoding_accepts_the_documented_snapshot_shape() {
        let raw = r#"[
  {
    "title": "Cotton Saree",
    "price": 500,
    "category": "Clothing",
    "ordered": false,
    "quantity": 5
  }
]"#;

        let catalog = decode_catalog(raw).expect("decode documented shape");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].title, "Cotton Saree");
    }

    #[test]
    fn decoding_garbage_reports_a_json_error() {
        let error = decode_catalog("not json").expect_err("garbage must fail");
        assert!(matches!(error, SnapshotError::Json(_)));
    }
}
