//! Modal Component
//!
//! Generic overlay dialog with a title bar and close button.

use leptos::prelude::*;

/// Overlay dialog. Clicking the backdrop or the × button closes it;
/// the body is only rendered while `open` is true.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{title.clone()}</h2>
                        <button class="modal-close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
