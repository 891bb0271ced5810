//! Category Registry
//!
//! Fixed, read-only classification table. The set never changes after
//! process start; unknown ids are an expected, recoverable miss.

/// A fixed classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { id: "housekeeping", name: "משק", icon: "🧹" },
    Category { id: "maintenance", name: "אחזקה", icon: "🔧" },
    Category { id: "management", name: "בעלים", icon: "👔" },
    Category { id: "unknown", name: "לא ידוע", icon: "❓" },
    Category { id: "av", name: "הגברה ותאורה", icon: "🎵" },
    Category { id: "restaurant", name: "מסעדה", icon: "🍽️" },
    Category { id: "general", name: "כללי", icon: "📦" },
];

/// Fallback label when a lookup misses
pub const UNKNOWN_CATEGORY_LABEL: &str = "קטגוריה לא ידועה";

pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}

/// Display label "name icon" for an id, with the unknown-category
/// fallback when the id is not in the registry.
pub fn category_label(id: &str) -> String {
    match category_by_id(id) {
        Some(category) => format!("{} {}", category.name, category.icon),
        None => UNKNOWN_CATEGORY_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_fixed_entries() {
        let maintenance = category_by_id("maintenance").unwrap();
        assert_eq!(maintenance.name, "אחזקה");
        assert_eq!(maintenance.icon, "🔧");
    }

    #[test]
    fn lookup_miss_returns_none() {
        assert!(category_by_id("nonexistent-category").is_none());
    }

    #[test]
    fn label_falls_back_for_unknown_ids() {
        assert_eq!(category_label("av"), "הגברה ותאורה 🎵");
        assert_eq!(category_label("nonexistent-category"), UNKNOWN_CATEGORY_LABEL);
    }
}
