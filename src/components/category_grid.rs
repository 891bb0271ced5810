//! Category Grid Component
//!
//! Registry categories as tappable filter buttons.

use leptos::prelude::*;

use crate::categories::CATEGORIES;

/// Two-column grid of the fixed categories
#[component]
pub fn CategoryGrid(#[prop(into)] on_select: Callback<&'static str>) -> impl IntoView {
    view! {
        <div class="category-grid">
            {CATEGORIES.iter().map(|category| {
                let id = category.id;
                view! {
                    <button
                        type="button"
                        class="category-btn"
                        on:click=move |_| on_select.run(id)
                    >
                        <span class="icon">{category.icon}</span>
                        <span class="label">{category.name}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
