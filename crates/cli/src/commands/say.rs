use std::path::PathBuf;

use shelfy_agent::router::Role;
use shelfy_agent::runtime::AgentRuntime;
use shelfy_agent::tagger::LexiconTagger;
use shelfy_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use shelfy_store::JsonSnapshotStore;
use uuid::Uuid;

use crate::commands::CommandResult;
use crate::logging;

/// Dispatch a single typed command and print the spoken reply. This is the
/// scripted cousin of `repl`: same interpreter, one turn, then exit.
pub fn run(role: &str, text: &str, catalog_override: Option<PathBuf>) -> CommandResult {
    let role = match role.parse::<Role>() {
        Ok(role) => role,
        Err(error) => {
            return CommandResult::failure("say", "role_parse", error.to_string(), 2);
        }
    };

    let options = LoadOptions {
        overrides: ConfigOverrides { catalog_path: catalog_override, ..ConfigOverrides::default() },
        ..LoadOptions::default()
    };
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "say",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    logging::init(&config);

    let tagger = match LexiconTagger::from_config(&config.tagger) {
        Ok(tagger) => tagger,
        Err(error) => {
            return CommandResult::failure(
                "say",
                "tagger_init",
                format!("failed to initialize the tagger: {error}"),
                3,
            );
        }
    };

    let store = JsonSnapshotStore::new(&config.catalog.path);
    let mut catalog = match store.load_or_seed() {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("say", "snapshot", error.to_string(), 4);
        }
    };

    // Typed text goes through the same normalization a transcriber applies.
    let command = text.to_lowercase();
    let runtime = AgentRuntime::new(store, tagger);
    let interaction_id = Uuid::new_v4();
    tracing::info!(
        event_name = "say.command.received",
        role = role.as_str(),
        interaction_id = %interaction_id,
        "dispatching one command"
    );

    match runtime.dispatch(role, &command, &mut catalog) {
        Ok(reply) => {
            tracing::info!(
                event_name = "say.command.replied",
                interaction_id = %interaction_id,
                mutated = reply.mutates(),
                "reply rendered"
            );
            CommandResult::plain(0, reply.render())
        }
        Err(error) => CommandResult::failure("say", "persistence", error.to_string(), 5),
    }
}
