//! Client-side state container for the Savora storefront.
//!
//! [`StoreState`] holds all client-observable state and its transitions;
//! [`Store`] wraps it with snapshot persistence, writing the durable
//! slice (cart, theme, user) back to disk after every mutation and
//! rehydrating it on open.
//!
//! ```rust,ignore
//! let mut store = Store::open("storage.json")?;
//! store.add_to_cart(paratha)?;
//! store.toggle_theme()?;
//! // A later `Store::open` on the same path sees both changes.
//! ```

pub mod snapshot;
pub mod state;

pub use snapshot::{KvStore, Snapshot, SnapshotError, STORAGE_KEY};
pub use state::{StoreState, Theme};

use savora_commerce::account::{User, UserPreferences};
use savora_commerce::catalog::{Product, ProductFilter};
use savora_commerce::checkout::{Order, OrderStatus};
use savora_commerce::ids::{OrderId, ProductId};
use savora_commerce::offers::Offer;
use std::path::PathBuf;
use tracing::info;

/// The state container with snapshot persistence.
///
/// Every mutating method applies the state transition and then writes
/// the persisted slice. The in-memory state is the source of truth; a
/// failed write surfaces as an error but does not roll the state back,
/// matching the single-writer, best-effort durability model.
#[derive(Debug)]
pub struct Store {
    state: StoreState,
    kv: Option<KvStore>,
}

impl Store {
    /// Open a store backed by the given storage file, rehydrating the
    /// persisted slice if a snapshot exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let kv = KvStore::open(path)?;
        let mut state = StoreState::new();
        if let Some(snapshot) = kv.get::<Snapshot>(STORAGE_KEY) {
            info!("rehydrating persisted state");
            snapshot.restore_into(&mut state);
        }
        Ok(Self {
            state,
            kv: Some(kv),
        })
    }

    /// An unpersisted store, for tests and ephemeral sessions.
    pub fn in_memory() -> Self {
        Self {
            state: StoreState::new(),
            kv: None,
        }
    }

    /// Read access to the full state.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    fn persist(&mut self) -> Result<(), SnapshotError> {
        if let Some(kv) = self.kv.as_mut() {
            kv.set(STORAGE_KEY, &Snapshot::capture(&self.state))?;
        }
        Ok(())
    }

    fn mutate<R>(&mut self, f: impl FnOnce(&mut StoreState) -> R) -> Result<R, SnapshotError> {
        let out = f(&mut self.state);
        self.persist()?;
        Ok(out)
    }

    // Cart ---------------------------------------------------------------

    pub fn add_to_cart(&mut self, product: Product) -> Result<(), SnapshotError> {
        self.mutate(|s| s.add_to_cart(product))
    }

    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> Result<(), SnapshotError> {
        self.mutate(|s| s.remove_from_cart(product_id))
    }

    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<(), SnapshotError> {
        self.mutate(|s| s.update_quantity(product_id, quantity))
    }

    pub fn change_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<(), SnapshotError> {
        self.mutate(|s| s.change_quantity(product_id, quantity))
    }

    pub fn clear_cart(&mut self) -> Result<(), SnapshotError> {
        self.mutate(|s| s.clear_cart())
    }

    // User ---------------------------------------------------------------

    pub fn set_user(&mut self, user: Option<User>) -> Result<(), SnapshotError> {
        self.mutate(|s| s.set_user(user))
    }

    pub fn add_to_favorites(&mut self, product_id: ProductId) -> Result<(), SnapshotError> {
        self.mutate(|s| s.add_to_favorites(product_id))
    }

    pub fn remove_from_favorites(&mut self, product_id: &ProductId) -> Result<(), SnapshotError> {
        self.mutate(|s| s.remove_from_favorites(product_id))
    }

    pub fn update_user_preferences(
        &mut self,
        preferences: UserPreferences,
    ) -> Result<(), SnapshotError> {
        self.mutate(|s| s.update_user_preferences(preferences))
    }

    // Theme / search -----------------------------------------------------

    pub fn toggle_theme(&mut self) -> Result<Theme, SnapshotError> {
        self.mutate(|s| {
            s.toggle_theme();
            s.theme
        })
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) -> Result<(), SnapshotError> {
        self.mutate(|s| s.set_search_query(query))
    }

    pub fn set_filters(&mut self, filters: ProductFilter) -> Result<(), SnapshotError> {
        self.mutate(|s| s.set_filters(filters))
    }

    // Orders / offers ----------------------------------------------------

    pub fn add_order(&mut self, order: Order) -> Result<(), SnapshotError> {
        self.mutate(|s| s.add_order(order))
    }

    pub fn update_order_status(
        &mut self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), SnapshotError> {
        self.mutate(|s| s.update_order_status(order_id, status))
    }

    pub fn set_offers(&mut self, offers: Vec<Offer>) -> Result<(), SnapshotError> {
        self.mutate(|s| s.set_offers(offers))
    }

    /// Apply an offer code. Read-only; see [`StoreState::apply_offer`].
    pub fn apply_offer(&self, code: &str) -> bool {
        self.state.apply_offer(code)
    }
}
