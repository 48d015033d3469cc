//! Category form
//!
//! - model.rs: save call through the gateway
//! - view_model.rs: form state, edit-target sync, save command
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;
