//! List-management controller shared by the catalog screens.
//!
//! - gateway.rs: remote collection contract (paged read, single read, mutations)
//! - environment.rs: collaborators injected by the host (session, confirm, toasts, viewport)
//! - state.rs: page/sort/edit snapshot observed by the UI
//! - controller.rs: the state machine itself
//! - binding.rs: Leptos glue (signal mirror, task spawning)

mod binding;
mod controller;
mod environment;
mod gateway;
mod state;

pub use binding::{spawn_controller_task, use_list_state};
pub use controller::{ListController, LoadOutcome, DELETE_CONFIRMATION, DELETE_SUCCESS};
pub use environment::{
    ConfirmationPrompt, ListEnvironment, NotificationSink, SessionProvider, Viewport,
};
pub use gateway::{CollectionGateway, DeleteTarget, GatewayError, TransportError};
pub use state::{ListState, LoadStatus};
