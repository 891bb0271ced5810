//! Item Card Component
//!
//! One inventory item in the main list, with edit/delete actions.

use leptos::prelude::*;

use crate::categories::category_label;
use crate::models::Item;

#[component]
pub fn ItemCard(
    item: Item,
    #[prop(into)] on_edit: Callback<Item>,
    #[prop(into)] on_delete: Callback<Item>,
) -> impl IntoView {
    let edit_item = item.clone();
    let delete_item = item.clone();

    view! {
        <div class="item-card">
            <img class="item-thumb" src=item.image.clone() alt=item.name.clone() />
            <div class="item-info">
                <h3>{item.name.clone()}</h3>
                <p class="item-category">{category_label(&item.category)}</p>
                <p class="item-quantity">"כמות: " {item.quantity}</p>
                <div class="item-actions">
                    <button type="button" on:click=move |_| on_edit.run(edit_item.clone())>
                        "✎"
                    </button>
                    <button
                        type="button"
                        class="delete"
                        on:click=move |_| on_delete.run(delete_item.clone())
                    >
                        "🗑"
                    </button>
                </div>
            </div>
        </div>
    }
}
