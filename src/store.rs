//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The
//! catalog is only ever mutated through the helpers below; dialogs and
//! forms own their drafts until commit.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::Catalog;
use crate::models::{ItemDraft, ItemPatch};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The in-memory inventory catalog
    pub catalog: Catalog,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Commit a draft to the catalog; returns the new id when valid
pub fn store_add_item(store: &AppStore, draft: &ItemDraft, today: String) -> Option<u32> {
    store.catalog().write().add(draft, today)
}

/// Replace the fields of an existing item
pub fn store_update_item(store: &AppStore, id: u32, patch: &ItemPatch) {
    store.catalog().write().update(id, patch);
}

/// Remove an item from the catalog by id
pub fn store_remove_item(store: &AppStore, id: u32) {
    store.catalog().write().remove(id);
}
