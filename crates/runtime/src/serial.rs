//! Per-actor execution serialization layered above the engine.
//!
//! [`ReactionEngine`] does not stop two executions against the same actor
//! from interleaving their `has_items`/`consume` calls. [`ActorSerializer`]
//! holds one async mutex per actor for the whole execution. Different actors
//! still run concurrently.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use reaction_core::{ActorId, ReactionContext, ReactionId, ReactionResult};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::engine::ReactionEngine;
use crate::error::Result;

type ActorLocks = HashMap<ActorId, Arc<AsyncMutex<()>>>;

pub struct ActorSerializer {
    engine: Arc<ReactionEngine>,
    locks: Mutex<ActorLocks>,
}

impl ActorSerializer {
    pub fn new(engine: Arc<ReactionEngine>) -> Self {
        Self {
            engine,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Runs [`ReactionEngine::execute`] while holding `actor_id`'s lock.
    pub async fn execute(
        &self,
        reaction_id: &ReactionId,
        actor_id: ActorId,
        context: &ReactionContext,
    ) -> Result<ReactionResult> {
        let lock = self.lock_for(actor_id);
        let guard = lock.lock_owned().await;
        let _lease = Lease {
            owner: self,
            actor_id,
            guard: Some(guard),
        };
        self.engine.execute(reaction_id, actor_id, context).await
    }

    /// Actors with a lock entry right now (held or awaited).
    pub fn tracked_actors(&self) -> usize {
        self.locks().len()
    }

    fn locks(&self) -> std::sync::MutexGuard<'_, ActorLocks> {
        // The map stays consistent even if a holder panicked.
        self.locks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_for(&self, actor_id: ActorId) -> Arc<AsyncMutex<()>> {
        self.locks().entry(actor_id).or_default().clone()
    }

    fn prune(&self, actor_id: ActorId) {
        let mut locks = self.locks();
        if locks
            .get(&actor_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&actor_id);
        }
    }
}

/// Releases the actor lock and drops idle entries, also on cancellation.
struct Lease<'a> {
    owner: &'a ActorSerializer,
    actor_id: ActorId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for Lease<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.owner.prune(self.actor_id);
    }
}
