//! Delete Confirmation Dialog
//!
//! Asks before removing an item from the catalog.

use leptos::prelude::*;

use super::modal::Modal;

#[component]
pub fn DeleteConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title="מחיקת פריט" open=open on_close=on_close>
            <div class="delete-warning">
                <span>"⚠"</span>
                <p>"האם אתה בטוח שברצונך למחוק פריט זה?"</p>
            </div>
            <div class="form-actions">
                <button type="button" on:click=move |_| on_close.run(())>"ביטול"</button>
                <button
                    type="button"
                    class="destructive"
                    on:click=move |_| on_confirm.run(())
                >
                    "מחיקה"
                </button>
            </div>
        </Modal>
    }
}
