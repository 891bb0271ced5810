//! Application Context
//!
//! Shared state provided via Leptos Context API: which draft the
//! camera/gallery feed into, and the upload supersession counter.

use leptos::prelude::*;

/// Which draft an acquired image lands in
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ImageSlot {
    New,
    Edit,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Draft slot currently receiving images (None = no open form) - read
    pub image_slot: ReadSignal<Option<ImageSlot>>,
    set_image_slot: WriteSignal<Option<ImageSlot>>,
    /// Monotonic ticket; an in-flight upload only applies if its ticket
    /// is still current when it resolves
    upload_ticket: ReadSignal<u32>,
    set_upload_ticket: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        image_slot: (ReadSignal<Option<ImageSlot>>, WriteSignal<Option<ImageSlot>>),
        upload_ticket: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            image_slot: image_slot.0,
            set_image_slot: image_slot.1,
            upload_ticket: upload_ticket.0,
            set_upload_ticket: upload_ticket.1,
        }
    }

    /// A form with an image pane became active
    pub fn open_slot(&self, slot: ImageSlot) {
        self.set_image_slot.set(Some(slot));
    }

    /// The active form went away; pending acquisitions must not land
    pub fn close_slot(&self) {
        self.set_image_slot.set(None);
        self.invalidate_uploads();
    }

    /// Start a new acquisition, superseding any in-flight one
    pub fn begin_acquisition(&self) -> u32 {
        let ticket = self.upload_ticket.get_untracked() + 1;
        self.set_upload_ticket.set(ticket);
        ticket
    }

    /// Whether a resolved acquisition may still be applied
    pub fn is_current(&self, ticket: u32) -> bool {
        self.upload_ticket.get_untracked() == ticket
    }

    pub fn invalidate_uploads(&self) {
        self.set_upload_ticket.update(|ticket| *ticket += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
