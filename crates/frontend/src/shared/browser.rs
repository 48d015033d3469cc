//! Адаптеры окна браузера для контроллера списков

use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::shared::list_controller::{ConfirmationPrompt, Viewport};

/// `window.confirm` и прокрутка окна
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserWindow;

impl ConfirmationPrompt for BrowserWindow {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

impl Viewport for BrowserWindow {
    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
