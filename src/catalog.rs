//! Catalog Store
//!
//! In-memory collection of inventory items. Owns the item list for the
//! lifetime of the page; there is no durable store behind it.

use crate::models::{Item, ItemDraft, ItemPatch};

/// Shown for items committed without an uploaded image
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x300/png";

/// The in-memory item collection.
///
/// Ids are unique for the lifetime of the catalog and never reused.
/// Items keep insertion order; updates happen in place.
#[derive(Clone, Debug)]
pub struct Catalog {
    items: Vec<Item>,
    next_id: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Commit a draft. `name` and `category` must be non-empty and
    /// `quantity` must parse as a non-negative integer; otherwise the
    /// catalog is left unchanged and `None` is returned.
    ///
    /// On success the item gets a fresh id, `date` is stamped from
    /// `today`, and a missing image falls back to the placeholder.
    pub fn add(&mut self, draft: &ItemDraft, today: String) -> Option<u32> {
        let name = draft.name.trim();
        let category = draft.category.trim();
        if name.is_empty() || category.is_empty() {
            return None;
        }
        let quantity: u32 = draft.quantity.trim().parse().ok()?;

        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item {
            id,
            name: name.to_string(),
            quantity,
            category: category.to_string(),
            image: draft
                .image
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            date: today,
        });
        Some(id)
    }

    /// Replace the fields of the item matching `id`. `id` and `date`
    /// stay fixed. No-op when the id is unknown.
    pub fn update(&mut self, id: u32, patch: &ItemPatch) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.name = patch.name.clone();
            item.quantity = patch.quantity;
            item.category = patch.category.clone();
            item.image = patch.image.clone();
        }
    }

    /// Remove the item matching `id`; no-op when the id is unknown.
    pub fn remove(&mut self, id: u32) {
        self.items.retain(|item| item.id != id);
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items matching a category (exact, `None` = all) and a
    /// case-insensitive substring search on `name`, in insertion order.
    /// Recomputed on every call.
    pub fn filtered(&self, category: Option<&str>, search: &str) -> Vec<Item> {
        let needle = search.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                category.is_none_or(|c| item.category == c)
                    && item.name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, quantity: &str, category: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            quantity: quantity.to_string(),
            category: category.to_string(),
            image: None,
        }
    }

    #[test]
    fn add_assigns_unique_ids_and_defaults() {
        let mut catalog = Catalog::new();
        let a = catalog.add(&draft("פטיש", "2", "maintenance"), "2026-08-29".into());
        let b = catalog.add(&draft("מגב", "1", "housekeeping"), "2026-08-29".into());

        assert_eq!(catalog.len(), 2);
        assert_ne!(a, b);
        let first = catalog.get(a.unwrap()).unwrap();
        assert_eq!(first.image, PLACEHOLDER_IMAGE);
        assert_eq!(first.date, "2026-08-29");
    }

    #[test]
    fn add_rejects_incomplete_drafts() {
        let mut catalog = Catalog::new();
        assert!(catalog.add(&draft("", "3", "general"), "2026-08-29".into()).is_none());
        assert!(catalog.add(&draft("מברג", "3", ""), "2026-08-29".into()).is_none());
        assert!(catalog.add(&draft("מברג", "", "general"), "2026-08-29".into()).is_none());
        assert!(catalog.add(&draft("מברג", "-1", "general"), "2026-08-29".into()).is_none());
        assert!(catalog.is_empty());
    }

    #[test]
    fn update_changes_fields_but_not_id_or_date() {
        let mut catalog = Catalog::new();
        let id = catalog
            .add(&draft("כבל", "4", "av"), "2026-08-29".into())
            .unwrap();

        catalog.update(
            id,
            &ItemPatch {
                name: "כבל ארוך".to_string(),
                quantity: 7,
                category: "av".to_string(),
                image: "asset://localhost/images/1.png".to_string(),
            },
        );

        let item = catalog.get(id).unwrap();
        assert_eq!(item.name, "כבל ארוך");
        assert_eq!(item.quantity, 7);
        assert_eq!(item.image, "asset://localhost/images/1.png");
        assert_eq!(item.id, id);
        assert_eq!(item.date, "2026-08-29");
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut catalog = Catalog::new();
        catalog.add(&draft("כסא", "10", "general"), "2026-08-29".into());
        let before = catalog.items().to_vec();

        catalog.update(
            999,
            &ItemPatch {
                name: "x".to_string(),
                quantity: 0,
                category: "general".to_string(),
                image: PLACEHOLDER_IMAGE.to_string(),
            },
        );

        assert_eq!(catalog.items(), &before[..]);
    }

    #[test]
    fn remove_deletes_only_the_target() {
        let mut catalog = Catalog::new();
        let a = catalog.add(&draft("א", "1", "general"), "d".into()).unwrap();
        let b = catalog.add(&draft("ב", "1", "general"), "d".into()).unwrap();

        catalog.remove(a);
        assert!(catalog.get(a).is_none());
        assert!(catalog.get(b).is_some());

        // removing an unknown id is a no-op
        catalog.remove(a);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn filtered_applies_category_and_search() {
        let mut catalog = Catalog::new();
        catalog.add(&draft("Drill Bit", "3", "maintenance"), "d".into());
        catalog.add(&draft("מגב", "1", "housekeeping"), "d".into());
        catalog.add(&draft("drill press", "1", "maintenance"), "d".into());

        let all = catalog.filtered(None, "");
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Drill Bit"); // insertion order

        let maintenance = catalog.filtered(Some("maintenance"), "DRILL");
        assert_eq!(maintenance.len(), 2);

        assert!(catalog.filtered(Some("restaurant"), "").is_empty());
        assert!(catalog.filtered(Some("no-such-category"), "").is_empty());
    }

    #[test]
    fn full_lifecycle_scenario() {
        let mut catalog = Catalog::new();
        let id = catalog
            .add(&draft("מקדחה", "3", "maintenance"), "2026-08-29".into())
            .unwrap();

        assert_eq!(catalog.len(), 1);
        let item = catalog.get(id).unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.image, PLACEHOLDER_IMAGE);

        let mut patch = ItemPatch::from_draft(&ItemDraft::from_item(item));
        patch.quantity = 5;
        catalog.update(id, &patch);

        let item = catalog.get(id).unwrap();
        assert_eq!(item.quantity, 5);
        assert_eq!(item.name, "מקדחה");
        assert_eq!(item.category, "maintenance");
        assert_eq!(item.date, "2026-08-29");

        catalog.remove(id);
        assert!(catalog.is_empty());
    }
}
