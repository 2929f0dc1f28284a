use shelfy_core::snapshot::{SnapshotError, SnapshotStore};
use shelfy_core::{Catalog, CategorySuggester};
use thiserror::Error;

use crate::handlers;
use crate::reply::{Reply, UsageHint};
use crate::router::{classify, Intent, Role};
use crate::tagger::{LexiconTagger, Tagger};

/// Dispatch failure. Anything a speaker can get wrong comes back as a
/// `Reply`; only persistence can fail here, and the session treats that as
/// fatal.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("could not persist the catalog: {0}")]
    Persist(#[from] SnapshotError),
}

/// Runs one command through route, handle and persist. The catalog lives
/// with the caller; the runtime only writes snapshots of it.
pub struct AgentRuntime<S, T = LexiconTagger> {
    store: S,
    tagger: T,
    suggester: CategorySuggester,
}

impl<S> AgentRuntime<S, LexiconTagger>
where
    S: SnapshotStore,
{
    pub fn with_builtin_tagger(store: S) -> Self {
        Self::new(store, LexiconTagger::new())
    }
}

impl<S, T> AgentRuntime<S, T>
where
    S: SnapshotStore,
    T: Tagger,
{
    pub fn new(store: S, tagger: T) -> Self {
        Self { store, tagger, suggester: CategorySuggester::default() }
    }

    pub fn with_suggester(mut self, suggester: CategorySuggester) -> Self {
        self.suggester = suggester;
        self
    }

    /// One command, end to end. The reply is rendered by the caller; the
    /// snapshot is already written by the time this returns.
    pub fn dispatch(
        &self,
        role: Role,
        command: &str,
        catalog: &mut Catalog,
    ) -> Result<Reply, DispatchError> {
        let reply = match classify(role, command) {
            Some(Intent::Add) => handlers::add(command, catalog, &self.suggester),
            Some(Intent::Remove) => handlers::remove(command, catalog, &self.tagger),
            Some(Intent::AssignQuantity) => {
                handlers::assign_quantity(command, catalog, &self.tagger)
            }
            Some(Intent::ChangePrice) => handlers::change_price(command, catalog, &self.tagger),
            Some(Intent::Search) => handlers::search(command, catalog, &self.tagger),
            Some(Intent::PlaceOrder) => handlers::place_order(command, catalog, &self.tagger),
            None => Reply::Usage(role_help(role)),
        };

        if reply.mutates() {
            self.store.save(catalog)?;
        }

        Ok(reply)
    }
}

fn role_help(role: Role) -> UsageHint {
    match role {
        Role::Seller => UsageHint::SellerHelp,
        Role::Buyer => UsageHint::BuyerHelp,
    }
}
