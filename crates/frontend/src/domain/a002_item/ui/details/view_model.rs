use super::model;
use contracts::domain::a002_item::aggregate::{CategoryRef, Item, ItemDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::list_controller::{GatewayError, NotificationSink, SessionProvider};
use crate::shared::notifications::NotificationService;
use crate::system::auth::session::AuthSession;

/// ViewModel for the item form
#[derive(Clone, Copy)]
pub struct ItemDetailsViewModel {
    pub form: RwSignal<ItemDto>,
    /// Raw comma-separated text of `pic`
    pub pic_text: RwSignal<String>,
    /// Raw comma-separated text of `detail_pic`
    pub detail_pic_text: RwSignal<String>,
    pub editing_id: RwSignal<Option<String>>,
    pub categories: RwSignal<Vec<CategoryRef>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    session: AuthSession,
    notify: NotificationService,
}

impl ItemDetailsViewModel {
    pub fn new(session: AuthSession, notify: NotificationService) -> Self {
        Self {
            form: RwSignal::new(ItemDto::default()),
            pic_text: RwSignal::new(String::new()),
            detail_pic_text: RwSignal::new(String::new()),
            editing_id: RwSignal::new(None),
            categories: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            session,
            notify,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.with(|id| id.is_some())
    }

    pub fn load_categories(&self) {
        let Some(token) = self.session.current_token() else {
            return;
        };
        let vm = *self;
        spawn_local(async move {
            match model::fetch_category_options(token).await {
                Ok(options) => vm.categories.set(options),
                Err(e) => log::warn!("category options: {}", e),
            }
        });
    }

    /// Refills the form when the edit target switches to another item,
    /// empties it when the target goes away.
    pub fn sync_with(&self, target: Option<Item>) {
        match target {
            Some(item) => {
                let same = self
                    .editing_id
                    .with_untracked(|id| id.as_deref() == Some(item.id.as_str()));
                if !same {
                    self.pic_text.set(model::join_list(&item.pic));
                    self.detail_pic_text.set(model::join_list(&item.detail_pic));
                    self.form.set(item.to_dto());
                    self.editing_id.set(Some(item.id));
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
        self.form.set(ItemDto::default());
        self.pic_text.set(String::new());
        self.detail_pic_text.set(String::new());
        self.editing_id.set(None);
        self.error.set(None);
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let mut current = self.form.get_untracked();
        current.pic = self.pic_text.with_untracked(|raw| model::split_list(raw));
        current.detail_pic = self
            .detail_pic_text
            .with_untracked(|raw| model::split_list(raw));
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
                    log::info!("item {} saved", saved.id);
                    vm.notify
                        .success(if was_edit { "Item updated" } else { "Item created" });
                    vm.reset();
                    on_saved.run(());
                }
                Err(GatewayError::Rejected(message)) => vm.notify.error(message.as_str()),
                Err(GatewayError::Transport(e)) => {
                    log::error!("item save failed: {}", e);
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

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            author: "Frank Herbert".to_string(),
            pic: vec!["a.png".to_string(), "b.png".to_string()],
            description: String::new(),
            price_pay: 1200,
            price_input: 900,
            slogan: String::new(),
            barcode: String::new(),
            count: 3,
            weight: 412,
            category: CategoryRef {
                id: "c1".to_string(),
                name: "sci-fi".to_string(),
            },
            detail_pic: Vec::new(),
        }
    }

    fn view_model() -> (Owner, ItemDetailsViewModel) {
        let owner = Owner::new();
        owner.set();
        let (auth, _) = signal(AuthState::default());
        let vm = ItemDetailsViewModel::new(AuthSession::new(auth), NotificationService::new());
        (owner, vm)
    }

    #[test]
    fn create_form_survives_repeated_empty_target() {
        let (_owner, vm) = view_model();
        vm.form.update(|f| f.name = "Half typed".to_string());
        vm.pic_text.set("x.png".to_string());

        vm.sync_with(None);

        assert_eq!(vm.form.get_untracked().name, "Half typed");
        assert_eq!(vm.pic_text.get_untracked(), "x.png");
    }

    #[test]
    fn switching_items_refills_picture_text() {
        let (_owner, vm) = view_model();
        vm.sync_with(Some(item("i1", "Dune")));
        assert_eq!(vm.pic_text.get_untracked(), "a.png, b.png");
        assert_eq!(vm.form.get_untracked().category_id, "c1");

        vm.pic_text.set("a.png".to_string());
        vm.sync_with(Some(item("i1", "Dune")));
        assert_eq!(vm.pic_text.get_untracked(), "a.png");

        vm.sync_with(Some(item("i2", "Hyperion")));
        assert_eq!(vm.form.get_untracked().name, "Hyperion");
        assert_eq!(vm.pic_text.get_untracked(), "a.png, b.png");
    }

    #[test]
    fn target_going_away_clears_edit_form() {
        let (_owner, vm) = view_model();
        vm.sync_with(Some(item("i1", "Dune")));

        vm.sync_with(None);

        assert_eq!(vm.form.get_untracked(), ItemDto::default());
        assert!(vm.pic_text.get_untracked().is_empty());
        assert!(!vm.is_edit_mode());
    }
}
