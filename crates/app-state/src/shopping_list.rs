//! Shopping list store
//!
//! [`ShoppingListStore`] owns the ordered list of shopping items. Every
//! mutation builds a new list from the current one and publishes it as an
//! immutable [`ShoppingListSnapshot`], so readers never observe a half-applied
//! change. Snapshots are returned from each mutation, pushed to a watch
//! channel for renderers, and summarized as [`ShoppingListEvent`]s on a
//! broadcast channel.
//!
//! Operations address items by id. When more than one item carries the same
//! id (possible only with [`IdStrategy::CollectionSize`]), the first one in
//! list order is the target.

use app_core::{ItemId, ShoppingItem};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

use crate::config::{self, IdStrategy, StoreConfig};

/// Shopping list errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShoppingListError {
    /// No item with this id exists
    #[error("Shopping item not found: {0}")]
    NotFound(ItemId),
}

/// Result type for shopping list operations
pub type Result<T> = std::result::Result<T, ShoppingListError>;

/// Immutable view of the list at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShoppingListSnapshot {
    items: Arc<Vec<ShoppingItem>>,
    version: u64,
}

impl ShoppingListSnapshot {
    /// Items in insertion order
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Number of successful mutations that led to this snapshot
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by id
    pub fn get(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The item currently in edit mode, if any
    pub fn editing_item(&self) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.is_editing)
    }

    /// Ids in list order
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    fn position(&self, id: ItemId) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ShoppingListError::NotFound(id))
    }
}

/// Change events broadcast after each successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoppingListEvent {
    /// A new item was appended
    ItemAdded(ShoppingItem),
    /// An item entered edit mode
    EditStarted(ItemId),
    /// An edit was committed, carrying the updated item
    EditCommitted(ShoppingItem),
    /// An edit was abandoned
    EditCancelled(ItemId),
    /// An item was removed
    ItemDeleted(ItemId),
}

#[derive(Debug)]
struct StoreState {
    snapshot: ShoppingListSnapshot,
    next_id: u64,
}

/// Authoritative in-memory shopping list
///
/// Clones share the same list.
///
/// # Example
///
/// ```
/// use app_state::ShoppingListStore;
///
/// let store = ShoppingListStore::new();
/// let milk = store.add("Milk", 2);
///
/// store.begin_edit(milk.id).unwrap();
/// let snapshot = store.commit_edit(milk.id, "Oat milk", 1).unwrap();
///
/// assert_eq!(snapshot.items()[0].name, "Oat milk");
/// assert!(snapshot.editing_item().is_none());
/// ```
#[derive(Clone)]
pub struct ShoppingListStore {
    config: StoreConfig,
    state: Arc<RwLock<StoreState>>,
    snapshot_tx: Arc<watch::Sender<ShoppingListSnapshot>>,
    events_tx: broadcast::Sender<ShoppingListEvent>,
}

impl ShoppingListStore {
    /// Create an empty store with the default configuration
    pub fn new() -> Self {
        Self::build(StoreConfig::default())
    }

    /// Create an empty store with a custom configuration
    pub fn with_config(config: StoreConfig) -> config::Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: StoreConfig) -> Self {
        let (snapshot_tx, _) = watch::channel(ShoppingListSnapshot::default());
        let (events_tx, _) = broadcast::channel(config.event_capacity);

        Self {
            config,
            state: Arc::new(RwLock::new(StoreState {
                snapshot: ShoppingListSnapshot::default(),
                next_id: 1,
            })),
            snapshot_tx: Arc::new(snapshot_tx),
            events_tx,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Append a new item
    ///
    /// The name and quantity are stored as given.
    pub fn add(&self, name: impl Into<String>, quantity: u32) -> ShoppingItem {
        let mut state = self.state.write();

        let id = match self.config.id_strategy {
            IdStrategy::Monotonic => {
                let id = state.next_id;
                state.next_id += 1;
                id
            }
            IdStrategy::CollectionSize => state.snapshot.len() as u64 + 1,
        };

        let item = ShoppingItem::new(ItemId::new(id), name, quantity);
        let mut items = state.snapshot.items().to_vec();
        items.push(item.clone());

        let snapshot = self.publish(&mut state, items);
        tracing::debug!(
            item_id = %item.id,
            version = snapshot.version(),
            "Added shopping item"
        );
        let _ = self.events_tx.send(ShoppingListEvent::ItemAdded(item.clone()));

        item
    }

    /// Put an item into edit mode
    ///
    /// Every other item leaves edit mode.
    pub fn begin_edit(&self, id: ItemId) -> Result<ShoppingListSnapshot> {
        let mut state = self.state.write();
        let target = self.locate(&state, id)?;

        let items = state
            .snapshot
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| item.with_editing(index == target))
            .collect();

        let snapshot = self.publish(&mut state, items);
        tracing::debug!(item_id = %id, version = snapshot.version(), "Began editing");
        let _ = self.events_tx.send(ShoppingListEvent::EditStarted(id));

        Ok(snapshot)
    }

    /// Replace an item's name and quantity and leave edit mode
    ///
    /// Every other item leaves edit mode too.
    pub fn commit_edit(
        &self,
        id: ItemId,
        name: impl Into<String>,
        quantity: u32,
    ) -> Result<ShoppingListSnapshot> {
        let mut state = self.state.write();
        let target = self.locate(&state, id)?;

        let updated = ShoppingItem::new(id, name, quantity);
        let items = state
            .snapshot
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                if index == target {
                    updated.clone()
                } else {
                    item.with_editing(false)
                }
            })
            .collect();

        let snapshot = self.publish(&mut state, items);
        tracing::debug!(item_id = %id, version = snapshot.version(), "Committed edit");
        let _ = self.events_tx.send(ShoppingListEvent::EditCommitted(updated));

        Ok(snapshot)
    }

    /// Leave edit mode without changing the item
    pub fn cancel_edit(&self, id: ItemId) -> Result<ShoppingListSnapshot> {
        let mut state = self.state.write();
        self.locate(&state, id)?;

        let items = state
            .snapshot
            .items()
            .iter()
            .map(|item| item.with_editing(false))
            .collect();

        let snapshot = self.publish(&mut state, items);
        tracing::debug!(item_id = %id, version = snapshot.version(), "Cancelled edit");
        let _ = self.events_tx.send(ShoppingListEvent::EditCancelled(id));

        Ok(snapshot)
    }

    /// Remove an item
    ///
    /// Remaining items keep their ids and order.
    pub fn delete(&self, id: ItemId) -> Result<ShoppingListSnapshot> {
        let mut state = self.state.write();
        let target = self.locate(&state, id)?;

        let mut items = state.snapshot.items().to_vec();
        items.remove(target);

        let snapshot = self.publish(&mut state, items);
        tracing::debug!(item_id = %id, version = snapshot.version(), "Deleted shopping item");
        let _ = self.events_tx.send(ShoppingListEvent::ItemDeleted(id));

        Ok(snapshot)
    }

    /// Current snapshot
    pub fn list(&self) -> ShoppingListSnapshot {
        self.state.read().snapshot.clone()
    }

    /// Find an item by id
    pub fn get(&self, id: ItemId) -> Option<ShoppingItem> {
        self.state.read().snapshot.get(id).cloned()
    }

    /// The item currently in edit mode, if any
    pub fn editing_item(&self) -> Option<ShoppingItem> {
        self.state.read().snapshot.editing_item().cloned()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.state.read().snapshot.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.state.read().snapshot.is_empty()
    }

    /// Subscribe to snapshot changes
    ///
    /// The receiver always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ShoppingListSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Subscribe to change events
    pub fn subscribe_events(&self) -> broadcast::Receiver<ShoppingListEvent> {
        self.events_tx.subscribe()
    }

    fn locate(&self, state: &StoreState, id: ItemId) -> Result<usize> {
        state.snapshot.position(id).inspect_err(|_| {
            tracing::debug!(item_id = %id, "No shopping item with this id");
        })
    }

    fn publish(&self, state: &mut StoreState, items: Vec<ShoppingItem>) -> ShoppingListSnapshot {
        let snapshot = ShoppingListSnapshot {
            items: Arc::new(items),
            version: state.snapshot.version + 1,
        };
        state.snapshot = snapshot.clone();
        self.snapshot_tx.send_replace(snapshot.clone());
        snapshot
    }
}

impl Default for ShoppingListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ShoppingListStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShoppingListStore")
            .field("config", &self.config)
            .field("snapshot", &self.list())
            .finish()
    }
}
