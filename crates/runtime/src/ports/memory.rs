//! In-memory port adapters backed by `std::sync::RwLock`.
//!
//! Every method takes its lock once, so each call is atomic on its own. The
//! inventory adapter also counts calls so tests can assert which side effects
//! an execution performed.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use reaction_core::{
    ActorId, ItemTag, KnowledgeKey, Quantity, ReactionDefinition, ReactionId, ToolInstance,
};

use super::{
    InventoryPort, KnowledgeRepository, PortError, PortKind, PortResult, ReactionRepository,
    ToolingPort,
};

fn poisoned<T>(port: PortKind) -> impl FnOnce(T) -> PortError {
    move |_| PortError::LockPoisoned { port }
}

/// Reaction definitions keyed by id.
#[derive(Default)]
pub struct InMemoryReactions {
    definitions: RwLock<HashMap<ReactionId, Arc<ReactionDefinition>>>,
}

impl InMemoryReactions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `definition`, replacing any previous one with the same id.
    pub fn insert(&self, definition: ReactionDefinition) -> PortResult<()> {
        let mut definitions = self
            .definitions
            .write()
            .map_err(poisoned(PortKind::Reactions))?;
        definitions.insert(definition.id().clone(), Arc::new(definition));
        Ok(())
    }
}

impl FromIterator<ReactionDefinition> for InMemoryReactions {
    fn from_iter<I: IntoIterator<Item = ReactionDefinition>>(iter: I) -> Self {
        let definitions = iter
            .into_iter()
            .map(|definition| (definition.id().clone(), Arc::new(definition)))
            .collect();
        Self {
            definitions: RwLock::new(definitions),
        }
    }
}

#[async_trait]
impl ReactionRepository for InMemoryReactions {
    async fn find_by_id(&self, id: &ReactionId) -> PortResult<Option<Arc<ReactionDefinition>>> {
        let definitions = self
            .definitions
            .read()
            .map_err(poisoned(PortKind::Reactions))?;
        Ok(definitions.get(id).cloned())
    }
}

/// Learned knowledge per actor.
#[derive(Default)]
pub struct InMemoryKnowledge {
    known: RwLock<HashMap<ActorId, BTreeSet<KnowledgeKey>>>,
}

impl InMemoryKnowledge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn learn(&self, actor: ActorId, key: KnowledgeKey) -> PortResult<()> {
        let mut known = self.known.write().map_err(poisoned(PortKind::Knowledge))?;
        known.entry(actor).or_default().insert(key);
        Ok(())
    }

    pub fn forget(&self, actor: ActorId, key: &KnowledgeKey) -> PortResult<bool> {
        let mut known = self.known.write().map_err(poisoned(PortKind::Knowledge))?;
        Ok(known.get_mut(&actor).is_some_and(|keys| keys.remove(key)))
    }
}

#[async_trait]
impl KnowledgeRepository for InMemoryKnowledge {
    async fn knowledge_set(&self, actor: ActorId) -> PortResult<BTreeSet<KnowledgeKey>> {
        let known = self.known.read().map_err(poisoned(PortKind::Knowledge))?;
        Ok(known.get(&actor).cloned().unwrap_or_default())
    }
}

/// Held tools per actor, in the order they were given.
#[derive(Default)]
pub struct InMemoryTooling {
    tools: RwLock<HashMap<ActorId, Vec<ToolInstance>>>,
}

impl InMemoryTooling {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn give(&self, actor: ActorId, tool: ToolInstance) -> PortResult<()> {
        let mut tools = self.tools.write().map_err(poisoned(PortKind::Tooling))?;
        tools.entry(actor).or_default().push(tool);
        Ok(())
    }
}

#[async_trait]
impl ToolingPort for InMemoryTooling {
    async fn tools(&self, actor: ActorId) -> PortResult<Vec<ToolInstance>> {
        let tools = self.tools.read().map_err(poisoned(PortKind::Tooling))?;
        Ok(tools.get(&actor).cloned().unwrap_or_default())
    }
}

/// Item counts per actor.
#[derive(Default)]
pub struct InMemoryInventory {
    stock: RwLock<HashMap<ActorId, BTreeMap<ItemTag, i64>>>,
    has_items_calls: AtomicUsize,
    consume_calls: AtomicUsize,
    produce_calls: AtomicUsize,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds stock directly, bypassing the port and its call counters.
    pub fn deposit(&self, actor: ActorId, item: ItemTag, amount: i64) -> PortResult<()> {
        let mut stock = self.stock.write().map_err(poisoned(PortKind::Inventory))?;
        *stock.entry(actor).or_default().entry(item).or_insert(0) += amount;
        Ok(())
    }

    /// Current count of `item` held by `actor`.
    pub fn count(&self, actor: ActorId, item: &ItemTag) -> PortResult<i64> {
        let stock = self.stock.read().map_err(poisoned(PortKind::Inventory))?;
        Ok(stock
            .get(&actor)
            .and_then(|items| items.get(item))
            .copied()
            .unwrap_or(0))
    }

    pub fn has_items_calls(&self) -> usize {
        self.has_items_calls.load(Ordering::SeqCst)
    }

    pub fn consume_calls(&self) -> usize {
        self.consume_calls.load(Ordering::SeqCst)
    }

    pub fn produce_calls(&self) -> usize {
        self.produce_calls.load(Ordering::SeqCst)
    }
}

/// Sums requested amounts per item so repeated entries are checked together.
fn requirements(items: &[Quantity]) -> BTreeMap<&ItemTag, i64> {
    let mut totals = BTreeMap::new();
    for quantity in items {
        *totals.entry(quantity.item()).or_insert(0) += quantity.amount();
    }
    totals
}

fn first_shortfall<'a>(
    held: Option<&BTreeMap<ItemTag, i64>>,
    required: &BTreeMap<&'a ItemTag, i64>,
) -> Option<(&'a ItemTag, i64)> {
    required
        .iter()
        .find(|(item, amount)| {
            let available = held.and_then(|items| items.get(**item)).copied().unwrap_or(0);
            available < **amount
        })
        .map(|(item, amount)| (*item, *amount))
}

#[async_trait]
impl InventoryPort for InMemoryInventory {
    async fn has_items(&self, actor: ActorId, items: &[Quantity]) -> PortResult<bool> {
        self.has_items_calls.fetch_add(1, Ordering::SeqCst);
        let stock = self.stock.read().map_err(poisoned(PortKind::Inventory))?;
        Ok(first_shortfall(stock.get(&actor), &requirements(items)).is_none())
    }

    async fn consume(&self, actor: ActorId, items: &[Quantity]) -> PortResult<()> {
        self.consume_calls.fetch_add(1, Ordering::SeqCst);
        let mut stock = self.stock.write().map_err(poisoned(PortKind::Inventory))?;
        let required = requirements(items);

        if let Some((item, amount)) = first_shortfall(stock.get(&actor), &required) {
            return Err(PortError::InsufficientItems {
                actor,
                item: item.clone(),
                required: amount,
            });
        }

        let held = stock.entry(actor).or_default();
        for (item, amount) in required {
            if let Some(count) = held.get_mut(item) {
                *count -= amount;
                if *count == 0 {
                    held.remove(item);
                }
            }
        }
        Ok(())
    }

    async fn produce(&self, actor: ActorId, items: &[Quantity]) -> PortResult<()> {
        self.produce_calls.fetch_add(1, Ordering::SeqCst);
        let mut stock = self.stock.write().map_err(poisoned(PortKind::Inventory))?;
        let held = stock.entry(actor).or_default();
        for quantity in items {
            *held.entry(quantity.item().clone()).or_insert(0) += quantity.amount();
        }
        Ok(())
    }
}
