use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use super::controller::ListController;
use super::gateway::{CollectionGateway, TransportError};
use super::state::ListState;

/// Mirrors controller snapshots into a reactive signal for the view
pub fn use_list_state<G>(controller: &ListController<G>) -> RwSignal<ListState<G::Entity>>
where
    G: CollectionGateway + 'static,
    G::Entity: Send + Sync,
{
    let state = RwSignal::new(controller.snapshot());
    controller.subscribe(move |snapshot| {
        // signal may already be disposed after the screen unmounts
        let _ = state.try_set(snapshot.clone());
    });
    state
}

/// Runs a controller operation in the background; transport failures end up in the console
pub fn spawn_controller_task<F>(fut: F)
where
    F: Future<Output = Result<(), TransportError>> + 'static,
{
    spawn_local(async move {
        if let Err(e) = fut.await {
            log::error!("request failed: {}", e);
        }
    });
}
