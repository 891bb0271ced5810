//! UI Components
//!
//! Reusable Leptos components.

mod camera_dialog;
mod category_grid;
mod delete_confirm;
mod image_gallery;
mod inventory_app;
mod item_card;
mod item_form;
mod login_page;
mod modal;

pub use camera_dialog::CameraDialog;
pub use category_grid::CategoryGrid;
pub use delete_confirm::DeleteConfirmDialog;
pub use image_gallery::ImageGallery;
pub use inventory_app::InventoryApp;
pub use item_card::ItemCard;
pub use item_form::ItemForm;
pub use login_page::{passcode_required, LoginPage};
pub use modal::Modal;
