//! Frontend Models
//!
//! Item data structures shared by the catalog and the UI.

/// A committed inventory item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    /// Category Registry id
    pub category: String,
    /// URL of a previously uploaded image (or the placeholder default)
    pub image: String,
    /// Creation date (YYYY-MM-DD), fixed at commit time
    pub date: String,
}

/// An in-progress item under construction in a form.
///
/// Quantity stays a raw string until commit so the form can hold
/// partial input; the catalog parses and validates at the boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: String,
    pub category: String,
    pub image: Option<String>,
}

impl ItemDraft {
    /// Seed an edit form from an existing item
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            category: item.category.clone(),
            image: Some(item.image.clone()),
        }
    }
}

/// Full field replacement for an existing item (`id`/`date` are untouchable)
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPatch {
    pub name: String,
    pub quantity: u32,
    pub category: String,
    pub image: String,
}

impl ItemPatch {
    /// Build a patch from an edit draft. Unparseable quantity falls back
    /// to 0, a missing image to the placeholder, matching the edit form.
    pub fn from_draft(draft: &ItemDraft) -> Self {
        Self {
            name: draft.name.clone(),
            quantity: draft.quantity.trim().parse().unwrap_or(0),
            category: draft.category.clone(),
            image: draft
                .image
                .clone()
                .unwrap_or_else(|| crate::catalog::PLACEHOLDER_IMAGE.to_string()),
        }
    }
}
