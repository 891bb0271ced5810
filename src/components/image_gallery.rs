//! Image Gallery Component
//!
//! Dialog listing previously uploaded images; picking one feeds it
//! into the active draft slot.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;

use super::modal::Modal;

#[component]
pub fn ImageGallery(
    open: ReadSignal<bool>,
    #[prop(into)] on_select: Callback<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (images, set_images) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(false);
    let (gallery_error, set_gallery_error) = signal(None::<String>);

    // refresh the listing every time the dialog opens
    Effect::new(move |_| {
        if open.get() {
            set_loading.set(true);
            set_gallery_error.set(None);
            spawn_local(async move {
                match commands::list_images().await {
                    Ok(list) => set_images.set(list),
                    Err(message) => set_gallery_error.set(Some(message)),
                }
                set_loading.set(false);
            });
        }
    });

    view! {
        <Modal title="בחר תמונה מהגלריה" open=open on_close=on_close>
            {move || gallery_error.get().map(|message| view! {
                <p class="inline-error">{message}</p>
            })}
            {move || if loading.get() {
                view! { <p class="gallery-status">"טוען תמונות..."</p> }.into_any()
            } else if images.with(Vec::is_empty) {
                view! { <p class="gallery-status">"אין תמונות בגלריה"</p> }.into_any()
            } else {
                view! {
                    <div class="gallery-grid">
                        <For
                            each=move || images.get()
                            key=|url| url.clone()
                            children=move |url| {
                                let selected = url.clone();
                                view! {
                                    <img
                                        src=url
                                        alt="תמונה מהגלריה"
                                        on:click=move |_| {
                                            on_select.run(selected.clone());
                                            on_close.run(());
                                        }
                                    />
                                }
                            }
                        />
                    </div>
                }.into_any()
            }}
        </Modal>
    }
}
