use std::path::PathBuf;

use shelfy_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use shelfy_core::snapshot::SnapshotStore;
use shelfy_core::Catalog;
use shelfy_store::JsonSnapshotStore;

use crate::commands::CommandResult;

/// Write the starter catalog to the configured snapshot path. Refuses to
/// clobber an existing snapshot unless `--force` is passed.
pub fn run(force: bool, catalog_override: Option<PathBuf>) -> CommandResult {
    let options = LoadOptions {
        overrides: ConfigOverrides { catalog_path: catalog_override, ..ConfigOverrides::default() },
        ..LoadOptions::default()
    };
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "seed",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let store = JsonSnapshotStore::new(&config.catalog.path);

    if !force {
        match store.load() {
            Ok(Some(_)) => {
                return CommandResult::failure(
                    "seed",
                    "snapshot_exists",
                    format!(
                        "a catalog snapshot already exists at `{}`; pass --force to overwrite",
                        store.path().display()
                    ),
                    4,
                );
            }
            Ok(None) => {}
            Err(error) => {
                return CommandResult::failure(
                    "seed",
                    "snapshot",
                    format!("could not inspect the existing snapshot: {error}; pass --force to overwrite"),
                    4,
                );
            }
        }
    }

    let catalog = Catalog::starter();
    match store.save(&catalog) {
        Ok(()) => CommandResult::success(
            "seed",
            format!(
                "wrote starter catalog with {} products to `{}`",
                catalog.len(),
                store.path().display()
            ),
        ),
        Err(error) => CommandResult::failure("seed", "persistence", error.to_string(), 5),
    }
}
