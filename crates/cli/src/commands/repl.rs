use std::io;
use std::path::PathBuf;

use shelfy_agent::router::Role;
use shelfy_agent::runtime::AgentRuntime;
use shelfy_agent::tagger::LexiconTagger;
use shelfy_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use shelfy_store::JsonSnapshotStore;
use shelfy_voice::{LineTranscriber, NullSynthesizer};

use crate::commands::CommandResult;
use crate::logging;
use crate::session::{Session, SessionTurn};

/// Run an interactive session over stdin. Each line is treated as one spoken
/// command; `/role` and `/quit` are control lines.
pub fn run(role: &str, catalog_override: Option<PathBuf>) -> CommandResult {
    let role = match role.parse::<Role>() {
        Ok(role) => role,
        Err(error) => {
            return CommandResult::failure("repl", "role_parse", error.to_string(), 2);
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
                "repl",
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
                "repl",
                "tagger_init",
                format!("failed to initialize the tagger: {error}"),
                3,
            );
        }
    };

    let store = JsonSnapshotStore::new(&config.catalog.path);
    let catalog = match store.load_or_seed() {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("repl", "snapshot", error.to_string(), 4);
        }
    };

    let mut session = Session::new(
        AgentRuntime::new(store, tagger),
        catalog,
        role,
        Box::new(LineTranscriber::new(io::stdin().lock())),
        Box::new(NullSynthesizer),
    );

    println!("shelfy session as {}; say a command, `/role seller|buyer` to switch, `/quit` to leave.", role.as_str());

    loop {
        match session.step() {
            Ok(SessionTurn::Reply { transcript, reply_text, .. }) => {
                println!("You said: {transcript}");
                println!("{reply_text}");
            }
            Ok(SessionTurn::RoleChanged(role)) => {
                println!("role is now {}", role.as_str());
            }
            Ok(SessionTurn::Apology(apology)) => {
                println!("{apology}");
            }
            Ok(SessionTurn::Ended) => break,
            Err(error) => {
                return CommandResult::failure("repl", "persistence", error.to_string(), 5);
            }
        }
    }

    CommandResult::success("repl", format!("session closed after {} turns", session.turns()))
}
