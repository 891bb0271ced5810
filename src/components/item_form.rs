//! Item Form Component
//!
//! Shared body of the add/edit dialogs: image pane with the three
//! acquisition paths (file upload, camera, gallery), then name,
//! quantity and category fields. The form owns its draft until commit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::categories::CATEGORIES;
use crate::context::{use_app_context, ImageSlot};
use crate::models::ItemDraft;
use crate::upload;

#[component]
pub fn ItemForm(
    /// Working draft, owned by the parent dialog
    draft: RwSignal<ItemDraft>,
    /// Which slot this form's images land in
    image_slot: ImageSlot,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_open_camera: Callback<()>,
    #[prop(into)] on_open_gallery: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (uploading, set_uploading) = signal(false);
    let (upload_error, set_upload_error) = signal(None::<String>);

    let input_id = match image_slot {
        ImageSlot::New => "new-item-image",
        ImageSlot::Edit => "edit-item-image",
    };

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // allow re-picking the same file later
        input.set_value("");

        set_upload_error.set(None);
        set_uploading.set(true);
        let ticket = ctx.begin_acquisition();

        spawn_local(async move {
            match upload::upload_from_file(file).await {
                Ok(url) => {
                    if ctx.is_current(ticket) {
                        draft.update(|d| d.image = Some(url));
                    }
                }
                Err(err) => {
                    if ctx.is_current(ticket) {
                        set_upload_error.set(Some(err.to_string()));
                    }
                }
            }
            set_uploading.set(false);
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="item-form" on:submit=submit>
            <div class="image-pane">
                {move || match draft.with(|d| d.image.clone()) {
                    Some(url) => view! {
                        <img src=url alt="תצוגה מקדימה" />
                    }.into_any(),
                    None => view! {
                        <div class="image-placeholder">"📷"</div>
                    }.into_any(),
                }}
                <div class="image-actions">
                    <input
                        type="file"
                        accept="image/*"
                        id=input_id
                        style="display: none"
                        disabled=move || uploading.get()
                        on:change=on_file_change
                    />
                    <label
                        for=input_id
                        class=move || if uploading.get() { "upload-label disabled" } else { "upload-label" }
                    >
                        {move || if uploading.get() { "מעלה..." } else { "העלה תמונה" }}
                    </label>
                    <button type="button" on:click=move |_| on_open_camera.run(())>
                        "📸"
                    </button>
                    <button type="button" on:click=move |_| on_open_gallery.run(())>
                        "🖼"
                    </button>
                </div>
            </div>

            {move || upload_error.get().map(|message| view! {
                <p class="inline-error">{message}</p>
            })}

            <input
                type="text"
                placeholder="שם הפריט"
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
            <input
                type="number"
                min="0"
                placeholder="כמות"
                prop:value=move || draft.with(|d| d.quantity.clone())
                on:input=move |ev| draft.update(|d| d.quantity = event_target_value(&ev))
            />
            <select
                prop:value=move || draft.with(|d| d.category.clone())
                on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
            >
                <option value="">"בחר קטגוריה"</option>
                {CATEGORIES.iter().map(|category| view! {
                    <option value=category.id>
                        {format!("{} {}", category.icon, category.name)}
                    </option>
                }).collect_view()}
            </select>

            <div class="form-actions">
                <button type="button" on:click=move |_| on_cancel.run(())>"ביטול"</button>
                <button type="submit" class="primary">{submit_label.clone()}</button>
            </div>
        </form>
    }
}
