use leptos::prelude::*;

use super::context::AuthState;
use crate::shared::list_controller::SessionProvider;

/// Bearer token of the signed-in user, read from the auth context
#[derive(Clone, Copy)]
pub struct AuthSession {
    state: ReadSignal<AuthState>,
}

impl AuthSession {
    pub fn new(state: ReadSignal<AuthState>) -> Self {
        Self { state }
    }
}

impl SessionProvider for AuthSession {
    fn current_token(&self) -> Option<String> {
        self.state
            .try_with_untracked(|s| s.access_token.clone())
            .flatten()
    }
}
