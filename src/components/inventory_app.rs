//! Inventory App Component
//!
//! Main screen: search, category filter, item list, and the add/edit/
//! delete/camera/gallery dialogs. Owns the form drafts; the catalog is
//! only touched through the store helpers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clock;
use crate::context::{use_app_context, ImageSlot};
use crate::models::{Item, ItemDraft, ItemPatch};
use crate::report;
use crate::store::{
    store_add_item, store_remove_item, store_update_item, use_app_store, AppStateStoreFields,
};
use crate::upload;

use super::camera_dialog::CameraDialog;
use super::category_grid::CategoryGrid;
use super::delete_confirm::DeleteConfirmDialog;
use super::image_gallery::ImageGallery;
use super::item_card::ItemCard;
use super::item_form::ItemForm;
use super::modal::Modal;

#[component]
pub fn InventoryApp() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (search_term, set_search_term) = signal(String::new());
    let (selected_category, set_selected_category) = signal(None::<String>);

    let (new_open, set_new_open) = signal(false);
    let (edit_open, set_edit_open) = signal(false);
    let (delete_open, set_delete_open) = signal(false);
    let (camera_open, set_camera_open) = signal(false);
    let (gallery_open, set_gallery_open) = signal(false);

    let new_draft = RwSignal::new(ItemDraft::default());
    let edit_draft = RwSignal::new(ItemDraft::default());
    let selected_id = RwSignal::new(None::<u32>);

    let (acquire_error, set_acquire_error) = signal(None::<String>);

    let filtered_items = move || {
        store
            .catalog()
            .read()
            .filtered(selected_category.get().as_deref(), &search_term.get())
    };

    // ---- add flow ----

    let open_new = move |_| {
        new_draft.set(ItemDraft::default());
        ctx.open_slot(ImageSlot::New);
        set_new_open.set(true);
    };

    let submit_new = move |_| {
        // invalid drafts silently keep the dialog open, unchanged
        if store_add_item(&store, &new_draft.get_untracked(), clock::today_iso()).is_some() {
            new_draft.set(ItemDraft::default());
            set_new_open.set(false);
            ctx.close_slot();
        }
    };

    let cancel_new = move |_| {
        new_draft.set(ItemDraft::default());
        set_new_open.set(false);
        ctx.close_slot();
    };

    // ---- edit flow ----

    let open_edit = move |item: Item| {
        selected_id.set(Some(item.id));
        edit_draft.set(ItemDraft::from_item(&item));
        ctx.open_slot(ImageSlot::Edit);
        set_edit_open.set(true);
    };

    let submit_edit = move |_| {
        if let Some(id) = selected_id.get_untracked() {
            let patch = ItemPatch::from_draft(&edit_draft.get_untracked());
            store_update_item(&store, id, &patch);
        }
        selected_id.set(None);
        set_edit_open.set(false);
        ctx.close_slot();
    };

    let cancel_edit = move |_| {
        selected_id.set(None);
        set_edit_open.set(false);
        ctx.close_slot();
    };

    // ---- delete flow ----

    let open_delete = move |item: Item| {
        selected_id.set(Some(item.id));
        set_delete_open.set(true);
    };

    let confirm_delete = move |_| {
        if let Some(id) = selected_id.get_untracked() {
            store_remove_item(&store, id);
        }
        // clear the selection so nothing keeps a stale id
        selected_id.set(None);
        set_delete_open.set(false);
    };

    let close_delete = move |_| {
        selected_id.set(None);
        set_delete_open.set(false);
    };

    // ---- image acquisition routing ----

    let apply_image = move |url: String| match ctx.image_slot.get_untracked() {
        Some(ImageSlot::New) => new_draft.update(|d| d.image = Some(url)),
        Some(ImageSlot::Edit) => edit_draft.update(|d| d.image = Some(url)),
        None => {}
    };

    let on_capture = move |data_url: String| {
        set_camera_open.set(false);
        set_acquire_error.set(None);
        let ticket = ctx.begin_acquisition();
        spawn_local(async move {
            match upload::upload_capture_frame(&data_url).await {
                Ok(url) => {
                    if ctx.is_current(ticket) {
                        apply_image(url);
                    }
                }
                Err(err) => {
                    if ctx.is_current(ticket) {
                        set_acquire_error.set(Some(err.to_string()));
                    }
                }
            }
        });
    };

    let on_gallery_select = move |url: String| {
        // a gallery pick supersedes any in-flight upload for the slot
        ctx.invalidate_uploads();
        set_acquire_error.set(None);
        apply_image(url);
    };

    // ---- report ----

    let generate_report = move |_| {
        let catalog = store.catalog().get_untracked();
        let html = report::render_report(catalog.items(), &clock::today_display());
        report::open_print_window(&html);
    };

    view! {
        <div class="inventory-screen">
            <div class="search-bar">
                <input
                    type="text"
                    placeholder="חיפוש..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="filter-toggle"
                    on:click=move |_| set_selected_category.set(None)
                >
                    {move || if selected_category.get().is_some() { "✕" } else { "▦" }}
                </button>
            </div>

            <Show when=move || selected_category.get().is_none()>
                <CategoryGrid on_select=Callback::new(move |id: &'static str| {
                    set_selected_category.set(Some(id.to_string()));
                }) />
            </Show>

            <div class="item-list">
                <For
                    each=filtered_items
                    key=|item| item.id
                    children=move |item| {
                        view! {
                            <ItemCard
                                item=item
                                on_edit=Callback::new(open_edit)
                                on_delete=Callback::new(open_delete)
                            />
                        }
                    }
                />
            </div>
            <Show when=move || filtered_items().is_empty()>
                <p class="empty-list">"לא נמצאו פריטים"</p>
            </Show>

            {move || acquire_error.get().map(|message| view! {
                <p class="inline-error">{message}</p>
            })}

            // Add Item Dialog
            <Modal title="הוספת פריט חדש" open=new_open on_close=Callback::new(cancel_new)>
                <ItemForm
                    draft=new_draft
                    image_slot=ImageSlot::New
                    submit_label="הוספה"
                    on_submit=Callback::new(submit_new)
                    on_cancel=Callback::new(cancel_new)
                    on_open_camera=Callback::new(move |_| {
                        ctx.open_slot(ImageSlot::New);
                        set_camera_open.set(true);
                    })
                    on_open_gallery=Callback::new(move |_| {
                        ctx.open_slot(ImageSlot::New);
                        set_gallery_open.set(true);
                    })
                />
            </Modal>

            // Edit Item Dialog
            <Modal title="עריכת פריט" open=edit_open on_close=Callback::new(cancel_edit)>
                <ItemForm
                    draft=edit_draft
                    image_slot=ImageSlot::Edit
                    submit_label="שמירה"
                    on_submit=Callback::new(submit_edit)
                    on_cancel=Callback::new(cancel_edit)
                    on_open_camera=Callback::new(move |_| {
                        ctx.open_slot(ImageSlot::Edit);
                        set_camera_open.set(true);
                    })
                    on_open_gallery=Callback::new(move |_| {
                        ctx.open_slot(ImageSlot::Edit);
                        set_gallery_open.set(true);
                    })
                />
            </Modal>

            <DeleteConfirmDialog
                open=delete_open
                on_confirm=Callback::new(confirm_delete)
                on_close=Callback::new(close_delete)
            />

            <CameraDialog
                open=camera_open
                on_capture=Callback::new(on_capture)
                on_close=Callback::new(move |_| set_camera_open.set(false))
            />

            <ImageGallery
                open=gallery_open
                on_select=Callback::new(on_gallery_select)
                on_close=Callback::new(move |_| set_gallery_open.set(false))
            />

            <div class="fab-bar">
                <button type="button" class="fab report" on:click=generate_report>"⎙"</button>
                <button type="button" class="fab add" on:click=open_new>"+"</button>
            </div>
        </div>
    }
}
