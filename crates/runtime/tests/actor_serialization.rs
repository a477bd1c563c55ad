use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reaction_core::{
    ActorId, ItemTag, Quantity, ReactionContext, ReactionDefinition, ReactionId, ReactionOutcome,
};
use reaction_runtime::{
    ActorSerializer, InMemoryInventory, InMemoryKnowledge, InMemoryReactions, InMemoryTooling,
    InventoryPort, PortError, PortKind, PortResult, ReactionEngine, RuntimeError, SequenceRandom,
};

const CRAFTER: ActorId = ActorId(1);
const OTHER: ActorId = ActorId(2);

/// Inventory that yields between checking and debiting, like a remote store.
struct SlowInventory {
    inner: InMemoryInventory,
}

#[async_trait]
impl InventoryPort for SlowInventory {
    async fn has_items(&self, actor: ActorId, items: &[Quantity]) -> PortResult<bool> {
        let held = self.inner.has_items(actor, items).await;
        tokio::time::sleep(Duration::from_millis(20)).await;
        held
    }

    async fn consume(&self, actor: ActorId, items: &[Quantity]) -> PortResult<()> {
        self.inner.consume(actor, items).await
    }

    async fn produce(&self, actor: ActorId, items: &[Quantity]) -> PortResult<()> {
        self.inner.produce(actor, items).await
    }
}

fn log() -> ItemTag {
    ItemTag::parse("log").unwrap()
}

fn reaction_id() -> ReactionId {
    ReactionId::parse("saw_planks").unwrap()
}

fn engine() -> (Arc<ReactionEngine>, Arc<SlowInventory>) {
    let definition = ReactionDefinition::builder(reaction_id(), "Saw planks")
        .input(Quantity::new(log(), 1).unwrap())
        .output(Quantity::new(ItemTag::parse("plank").unwrap(), 4).unwrap())
        .build()
        .unwrap();
    let reactions: InMemoryReactions = [definition].into_iter().collect();

    let inventory = Arc::new(SlowInventory {
        inner: InMemoryInventory::new(),
    });
    inventory.inner.deposit(CRAFTER, log(), 1).unwrap();
    inventory.inner.deposit(OTHER, log(), 1).unwrap();

    let engine = ReactionEngine::builder()
        .reactions(Arc::new(reactions))
        .knowledge(Arc::new(InMemoryKnowledge::new()))
        .tooling(Arc::new(InMemoryTooling::new()))
        .inventory(inventory.clone())
        .random(Arc::new(SequenceRandom::constant(0.0)))
        .build()
        .unwrap();

    (Arc::new(engine), inventory)
}

#[tokio::test]
async fn unserialized_executions_can_double_spend_the_check() {
    let (engine, inventory) = engine();
    let context = ReactionContext::new();
    let id = reaction_id();

    let (first, second) = tokio::join!(
        engine.execute(&id, CRAFTER, &context),
        engine.execute(&id, CRAFTER, &context),
    );

    // Both passed has_items before either consumed; the second debit fails.
    let results = [first, second];
    let succeeded = results
        .iter()
        .filter(|r| matches!(r, Ok(result) if result.succeeded))
        .count();
    let debit_failures = results
        .iter()
        .filter(|r| {
            matches!(
                r,
                Err(RuntimeError::Port {
                    port: PortKind::Inventory,
                    source: PortError::InsufficientItems { .. },
                })
            )
        })
        .count();
    assert_eq!(succeeded, 1);
    assert_eq!(debit_failures, 1);
    assert_eq!(inventory.inner.consume_calls(), 2);
}

#[tokio::test]
async fn serializer_orders_executions_per_actor() {
    let (engine, inventory) = engine();
    let serializer = ActorSerializer::new(engine);
    let context = ReactionContext::new();
    let id = reaction_id();

    let (first, second) = tokio::join!(
        serializer.execute(&id, CRAFTER, &context),
        serializer.execute(&id, CRAFTER, &context),
    );

    let mut outcomes = vec![first.unwrap().outcome, second.unwrap().outcome];
    outcomes.sort_by_key(|outcome| outcome.to_string());
    assert_eq!(
        outcomes,
        vec![ReactionOutcome::FailedInputs, ReactionOutcome::Succeeded]
    );
    assert_eq!(inventory.inner.consume_calls(), 1);
    assert_eq!(serializer.tracked_actors(), 0);
}

#[tokio::test]
async fn serializer_lets_different_actors_proceed() {
    let (engine, inventory) = engine();
    let serializer = ActorSerializer::new(engine);
    let context = ReactionContext::new();
    let id = reaction_id();

    let (first, second) = tokio::join!(
        serializer.execute(&id, CRAFTER, &context),
        serializer.execute(&id, OTHER, &context),
    );

    assert!(first.unwrap().succeeded);
    assert!(second.unwrap().succeeded);
    assert_eq!(inventory.inner.count(OTHER, &log()).unwrap(), 0);
    assert_eq!(serializer.tracked_actors(), 0);
}

#[tokio::test]
async fn cancelled_executions_release_their_lock() {
    let (engine, _inventory) = engine();
    let serializer = ActorSerializer::new(engine);
    let context = ReactionContext::new();
    let id = reaction_id();

    let timed_out = tokio::time::timeout(
        Duration::from_millis(1),
        serializer.execute(&id, CRAFTER, &context),
    )
    .await;
    assert!(timed_out.is_err());
    assert_eq!(serializer.tracked_actors(), 0);

    let result = serializer.execute(&id, CRAFTER, &context).await.unwrap();
    assert!(result.succeeded);
}
