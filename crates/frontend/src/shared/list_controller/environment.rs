use std::rc::Rc;

/// Source of the bearer token for the current session
pub trait SessionProvider {
    fn current_token(&self) -> Option<String>;
}

/// Synchronous yes/no gate before destructive actions
pub trait ConfirmationPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// User-facing messages. Two channels only.
pub trait NotificationSink {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Host viewport; the edit form sits above the list
pub trait Viewport {
    fn scroll_to_top(&self);
}

/// Collaborators a `ListController` is constructed with
#[derive(Clone)]
pub struct ListEnvironment {
    pub session: Rc<dyn SessionProvider>,
    pub confirm: Rc<dyn ConfirmationPrompt>,
    pub notify: Rc<dyn NotificationSink>,
    pub viewport: Rc<dyn Viewport>,
}
