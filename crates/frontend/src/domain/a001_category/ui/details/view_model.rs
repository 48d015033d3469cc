use super::model;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::list_controller::{GatewayError, NotificationSink, SessionProvider};
use crate::shared::notifications::NotificationService;
use crate::system::auth::session::AuthSession;

/// ViewModel for the category form
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDto>,
    /// Id of the record being edited; `None` in create mode
    pub editing_id: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    session: AuthSession,
    notify: NotificationService,
}

impl CategoryDetailsViewModel {
    pub fn new(session: AuthSession, notify: NotificationService) -> Self {
        Self {
            form: RwSignal::new(CategoryDto::default()),
            editing_id: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            session,
            notify,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.with(|id| id.is_some())
    }

    /// Follows the list's edit target: a different record refills the form,
    /// no record empties it.
    pub fn sync_with(&self, target: Option<Category>) {
        match target {
            Some(category) => {
                let same = self
                    .editing_id
                    .with_untracked(|id| id.as_deref() == Some(category.id.as_str()));
                if !same {
                    self.form.set(category.to_dto());
                    self.editing_id.set(Some(category.id));
                    self.error.set(None);
                }
            }
            None => {
                // create mode keeps whatever the user has typed so far
                if self.editing_id.with_untracked(|id| id.is_some()) {
                    self.reset();
                }
            }
        }
    }

    pub fn reset(&self) {
        self.form.set(CategoryDto::default());
        self.editing_id.set(None);
        self.error.set(None);
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }
        let Some(token) = self.session.current_token() else {
            return;
        };

        let id = self.editing_id.get_untracked();
        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            let was_edit = id.is_some();
            match model::save_form(id, current, token).await {
                Ok(saved) => {
                    log::info!("category {} saved", saved.id);
                    vm.notify.success(if was_edit {
                        "Category updated"
                    } else {
                        "Category created"
                    });
                    vm.reset();
                    on_saved.run(());
                }
                Err(GatewayError::Rejected(message)) => vm.notify.error(message.as_str()),
                Err(GatewayError::Transport(e)) => {
                    log::error!("category save failed: {}", e);
                    vm.notify.error(&e.to_string());
                }
            }
            vm.saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::context::AuthState;
    use contracts::domain::a001_category::aggregate::Banner;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            banner: Banner::default(),
            description: String::new(),
            active: true,
            position: 1,
        }
    }

    fn view_model() -> (Owner, CategoryDetailsViewModel) {
        let owner = Owner::new();
        owner.set();
        let (auth, _) = signal(AuthState::default());
        let vm = CategoryDetailsViewModel::new(AuthSession::new(auth), NotificationService::new());
        (owner, vm)
    }

    #[test]
    fn create_form_survives_repeated_empty_target() {
        let (_owner, vm) = view_model();
        vm.form.update(|f| f.name = "Half typed".to_string());

        vm.sync_with(None);
        vm.sync_with(None);

        assert_eq!(vm.form.get_untracked().name, "Half typed");
        assert!(!vm.is_edit_mode());
    }

    #[test]
    fn new_target_refills_form_and_same_target_keeps_edits() {
        let (_owner, vm) = view_model();
        vm.sync_with(Some(category("c1", "Novels")));
        assert_eq!(vm.form.get_untracked().name, "Novels");
        assert_eq!(vm.editing_id.get_untracked().as_deref(), Some("c1"));

        vm.form.update(|f| f.name = "Novels (edited)".to_string());
        vm.sync_with(Some(category("c1", "Novels")));
        assert_eq!(vm.form.get_untracked().name, "Novels (edited)");

        vm.sync_with(Some(category("c2", "Comics")));
        assert_eq!(vm.form.get_untracked().name, "Comics");
        assert_eq!(vm.editing_id.get_untracked().as_deref(), Some("c2"));
    }

    #[test]
    fn target_going_away_clears_edit_form() {
        let (_owner, vm) = view_model();
        vm.sync_with(Some(category("c1", "Novels")));
        vm.error.set(Some("Category name is required".to_string()));

        vm.sync_with(None);

        assert_eq!(vm.form.get_untracked(), CategoryDto::default());
        assert!(vm.editing_id.get_untracked().is_none());
        assert!(vm.error.get_untracked().is_none());
    }
}
