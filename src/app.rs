//! Stocklist Frontend App
//!
//! Root component: passcode gate, then the inventory screen.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{passcode_required, InventoryApp, LoginPage};
use crate::context::{AppContext, ImageSlot};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Catalog store, provided to all children
    provide_context(Store::new(AppState::default()));

    // Image acquisition routing + supersession counter
    let image_slot = signal(None::<ImageSlot>);
    let upload_ticket = signal(0u32);
    provide_context(AppContext::new(image_slot, upload_ticket));

    // The gate only appears when a passcode is configured at build time
    let (logged_in, set_logged_in) = signal(!passcode_required());

    view! {
        <Show
            when=move || logged_in.get()
            fallback=move || view! {
                <LoginPage on_login=Callback::new(move |_| set_logged_in.set(true)) />
            }
        >
            <InventoryApp />
        </Show>
    }
}
