use contracts::domain::common::{ListQuery, SortParams};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::environment::ListEnvironment;
use super::gateway::{CollectionGateway, DeleteTarget, GatewayError, TransportError};
use super::state::{ListState, LoadStatus};

/// Question shown before a delete
pub const DELETE_CONFIRMATION: &str = "Are you sure?";
/// Toast shown after a confirmed delete
pub const DELETE_SUCCESS: &str = "You removed successfully";

/// What happened to a `load` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No session, nothing was sent
    Skipped,
    /// Page state replaced with the response
    Applied,
    /// Server refused; page state kept
    Rejected,
    /// A newer load was issued while this one was in flight
    Stale,
}

type Observer<E> = Rc<dyn Fn(&ListState<E>)>;

struct Inner<G: CollectionGateway> {
    gateway: G,
    env: ListEnvironment,
    page_size: u32,
    state: RefCell<ListState<G::Entity>>,
    latest_request: Cell<u64>,
    observers: RefCell<Vec<Observer<G::Entity>>>,
}

/// Paged/sorted list synchronized with a remote collection.
///
/// One instance per screen. Cloning shares the same state.
pub struct ListController<G: CollectionGateway> {
    inner: Rc<Inner<G>>,
}

impl<G: CollectionGateway> Clone for ListController<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<G: CollectionGateway> ListController<G> {
    pub fn new(gateway: G, env: ListEnvironment, page_size: u32) -> Self {
        Self {
            inner: Rc::new(Inner {
                gateway,
                env,
                page_size,
                state: RefCell::new(ListState::default()),
                latest_request: Cell::new(0),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.inner.gateway
    }

    pub fn environment(&self) -> &ListEnvironment {
        &self.inner.env
    }

    pub fn page_size(&self) -> u32 {
        self.inner.page_size
    }

    pub fn session_token(&self) -> Option<String> {
        self.inner.env.session.current_token()
    }

    pub fn snapshot(&self) -> ListState<G::Entity> {
        self.inner.state.borrow().clone()
    }

    /// Registers a callback invoked with the new snapshot after every state change
    pub fn subscribe(&self, observer: impl Fn(&ListState<G::Entity>) + 'static) {
        self.inner.observers.borrow_mut().push(Rc::new(observer));
    }

    fn update_state(&self, f: impl FnOnce(&mut ListState<G::Entity>)) {
        {
            let mut state = self.inner.state.borrow_mut();
            f(&mut state);
        }
        let snapshot = self.snapshot();
        let observers = self.inner.observers.borrow().clone();
        for observer in observers {
            observer(&snapshot);
        }
    }

    /// Initial load when the screen appears
    pub async fn mount(&self) -> Result<(), TransportError> {
        self.load(1, None).await.map(|_| ())
    }

    /// Reads one page and replaces the page state with it.
    ///
    /// `sort == None` asks the server for its default order.
    pub async fn load(
        &self,
        page: u32,
        sort: Option<SortParams>,
    ) -> Result<LoadOutcome, TransportError> {
        let Some(token) = self.session_token() else {
            log::debug!("load(page={}) skipped: no session", page);
            return Ok(LoadOutcome::Skipped);
        };

        let request_id = self.inner.latest_request.get() + 1;
        self.inner.latest_request.set(request_id);

        let mut query = ListQuery::page(page, self.inner.page_size);
        if let Some(sort) = sort {
            query = query.with_sort(sort.direction, sort.column);
        }

        self.update_state(|s| s.status = LoadStatus::Loading);
        let result = self.inner.gateway.list_page(query, &token).await;

        if self.inner.latest_request.get() != request_id {
            log::debug!("dropping stale response for page {}", page);
            return Ok(LoadOutcome::Stale);
        }

        match result {
            Ok(collection) => {
                self.update_state(|s| {
                    s.page = Some(collection);
                    s.status = LoadStatus::Loaded;
                });
                Ok(LoadOutcome::Applied)
            }
            Err(GatewayError::Rejected(message)) => {
                log::warn!("page {} rejected: {}", page, message);
                self.update_state(|s| s.status = LoadStatus::Failed(message.0));
                Ok(LoadOutcome::Rejected)
            }
            Err(GatewayError::Transport(e)) => {
                self.update_state(|s| s.status = LoadStatus::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Reloads the current page in default order (after a form submit)
    pub async fn refresh(&self) -> Result<(), TransportError> {
        let page = self.inner.state.borrow().current_page().unwrap_or(1);
        self.load(page, None).await.map(|_| ())
    }

    /// Loads the full record into the form and brings the form into view
    pub async fn request_edit(&self, id: &str) -> Result<(), TransportError> {
        let Some(token) = self.session_token() else {
            return Ok(());
        };

        match self.inner.gateway.fetch_one(id, &token).await {
            Ok(record) => {
                self.update_state(|s| s.edit_target = Some(record));
                self.inner.env.viewport.scroll_to_top();
                Ok(())
            }
            Err(GatewayError::Rejected(message)) => {
                log::warn!("edit fetch for {} rejected: {}", id, message);
                Ok(())
            }
            Err(GatewayError::Transport(e)) => Err(e),
        }
    }

    /// Back to create mode
    pub fn clear_edit_target(&self) {
        self.update_state(|s| s.edit_target = None);
    }

    /// Deletes after confirmation, then shows page 1 again
    pub async fn request_delete(
        &self,
        id: &str,
        auxiliary: Option<&str>,
    ) -> Result<(), TransportError> {
        if !self.inner.env.confirm.confirm(DELETE_CONFIRMATION) {
            return Ok(());
        }
        let Some(token) = self.session_token() else {
            return Ok(());
        };

        let target = DeleteTarget {
            id: id.to_string(),
            auxiliary: auxiliary.map(str::to_string),
        };

        match self.inner.gateway.delete(&target, &token).await {
            Ok(()) => {
                self.inner.env.notify.success(DELETE_SUCCESS);
                self.load(1, None).await?;
                Ok(())
            }
            Err(GatewayError::Rejected(message)) => {
                self.inner.env.notify.error(message.as_str());
                Ok(())
            }
            Err(GatewayError::Transport(e)) => Err(e),
        }
    }

    /// Flips the sort direction and reloads the loaded page with it
    pub async fn toggle_sort(&self, column: &str) -> Result<(), TransportError> {
        let (sort, current_page) = {
            let state = self.inner.state.borrow();
            (state.sort.toggle(column), state.current_page())
        };
        self.update_state(|s| s.sort = sort.clone());

        match (sort.params(), current_page) {
            (Some(params), Some(page)) => self.load(page, Some(params)).await.map(|_| ()),
            _ => Ok(()),
        }
    }

    pub async fn go_to_next_page(&self) -> Result<(), TransportError> {
        let target = self
            .inner
            .state
            .borrow()
            .page
            .as_ref()
            .filter(|p| p.has_next_page)
            .and_then(|p| p.current_page.checked_add(1));
        match target {
            Some(page) => self.load(page, None).await.map(|_| ()),
            None => Ok(()),
        }
    }

    pub async fn go_to_previous_page(&self) -> Result<(), TransportError> {
        let target = self
            .inner
            .state
            .borrow()
            .page
            .as_ref()
            .filter(|p| p.has_prev_page && p.current_page > 1)
            .map(|p| p.current_page - 1);
        match target {
            Some(page) => self.load(page, None).await.map(|_| ()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_controller::environment::{
        ConfirmationPrompt, NotificationSink, SessionProvider, Viewport,
    };
    use async_trait::async_trait;
    use contracts::domain::common::{ErrorMessage, PagedCollection, SortDirection, SortState};
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::collections::VecDeque;

    const LIMIT: u32 = 10;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        id: String,
        name: String,
    }

    fn record(id: &str) -> Record {
        Record {
            id: id.to_string(),
            name: format!("name-{}", id),
        }
    }

    fn page(current: u32, next: bool, prev: bool, total_pages: u32) -> PagedCollection<Record> {
        PagedCollection {
            records: vec![record(&format!("p{}-a", current)), record(&format!("p{}-b", current))],
            current_page: current,
            has_next_page: next,
            has_prev_page: prev,
            total_count: u64::from(total_pages) * u64::from(LIMIT),
            total_pages,
            overall_count: None,
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List(ListQuery),
        FetchOne(String),
        Delete(DeleteTarget),
    }

    type PageResult = Result<PagedCollection<Record>, GatewayError>;

    enum Scripted {
        Ready(PageResult),
        Deferred(oneshot::Receiver<PageResult>),
    }

    #[derive(Default)]
    struct FakeGateway {
        calls: RefCell<Vec<Call>>,
        pages: RefCell<VecDeque<Scripted>>,
        records: RefCell<VecDeque<Result<Record, GatewayError>>>,
        deletes: RefCell<VecDeque<Result<(), GatewayError>>>,
    }

    impl FakeGateway {
        fn push_page(&self, result: PageResult) {
            self.pages.borrow_mut().push_back(Scripted::Ready(result));
        }

        fn defer_page(&self) -> oneshot::Sender<PageResult> {
            let (tx, rx) = oneshot::channel();
            self.pages.borrow_mut().push_back(Scripted::Deferred(rx));
            tx
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn list_calls(&self) -> Vec<ListQuery> {
            self.calls()
                .into_iter()
                .filter_map(|c| match c {
                    Call::List(q) => Some(q),
                    _ => None,
                })
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl CollectionGateway for FakeGateway {
        type Entity = Record;
        type Form = String;

        async fn list_page(&self, query: ListQuery, token: &str) -> PageResult {
            assert_eq!(token, "token-1");
            self.calls.borrow_mut().push(Call::List(query));
            let next = self.pages.borrow_mut().pop_front();
            match next.expect("unexpected list_page call") {
                Scripted::Ready(result) => result,
                Scripted::Deferred(rx) => rx.await.expect("deferred page dropped"),
            }
        }

        async fn fetch_one(&self, id: &str, _token: &str) -> Result<Record, GatewayError> {
            self.calls.borrow_mut().push(Call::FetchOne(id.to_string()));
            self.records
                .borrow_mut()
                .pop_front()
                .expect("unexpected fetch_one call")
        }

        async fn create(&self, _form: &String, _token: &str) -> Result<Record, GatewayError> {
            unreachable!("controller never creates")
        }

        async fn update(
            &self,
            _id: &str,
            _form: &String,
            _token: &str,
        ) -> Result<Record, GatewayError> {
            unreachable!("controller never updates")
        }

        async fn delete(&self, target: &DeleteTarget, _token: &str) -> Result<(), GatewayError> {
            self.calls.borrow_mut().push(Call::Delete(target.clone()));
            self.deletes
                .borrow_mut()
                .pop_front()
                .expect("unexpected delete call")
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Notice {
        Success(String),
        Error(String),
    }

    struct FakeHost {
        token: RefCell<Option<String>>,
        answer: Cell<bool>,
        prompts: Cell<u32>,
        notices: RefCell<Vec<Notice>>,
        scrolls: Cell<u32>,
    }

    impl FakeHost {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                token: RefCell::new(Some("token-1".to_string())),
                answer: Cell::new(true),
                prompts: Cell::new(0),
                notices: RefCell::new(Vec::new()),
                scrolls: Cell::new(0),
            })
        }

        fn notices(&self) -> Vec<Notice> {
            self.notices.borrow().clone()
        }
    }

    impl SessionProvider for FakeHost {
        fn current_token(&self) -> Option<String> {
            self.token.borrow().clone()
        }
    }

    impl ConfirmationPrompt for FakeHost {
        fn confirm(&self, message: &str) -> bool {
            assert_eq!(message, DELETE_CONFIRMATION);
            self.prompts.set(self.prompts.get() + 1);
            self.answer.get()
        }
    }

    impl NotificationSink for FakeHost {
        fn success(&self, message: &str) {
            self.notices
                .borrow_mut()
                .push(Notice::Success(message.to_string()));
        }

        fn error(&self, message: &str) {
            self.notices
                .borrow_mut()
                .push(Notice::Error(message.to_string()));
        }
    }

    impl Viewport for FakeHost {
        fn scroll_to_top(&self) {
            self.scrolls.set(self.scrolls.get() + 1);
        }
    }

    fn setup() -> (ListController<FakeGateway>, Rc<FakeHost>) {
        let host = FakeHost::new();
        let env = ListEnvironment {
            session: host.clone(),
            confirm: host.clone(),
            notify: host.clone(),
            viewport: host.clone(),
        };
        (ListController::new(FakeGateway::default(), env, LIMIT), host)
    }

    /// Controller with `page` already loaded; the load call is cleared from the log
    fn loaded_at(p: PagedCollection<Record>) -> (ListController<FakeGateway>, Rc<FakeHost>) {
        let (controller, host) = setup();
        let current = p.current_page;
        controller.gateway().push_page(Ok(p));
        block_on(controller.load(current, None)).unwrap();
        controller.gateway().calls.borrow_mut().clear();
        (controller, host)
    }

    fn rejected(message: &str) -> GatewayError {
        GatewayError::Rejected(ErrorMessage::new(message))
    }

    #[test]
    fn mount_loads_first_page_in_default_order() {
        let (controller, _) = setup();
        controller.gateway().push_page(Ok(page(1, true, false, 3)));

        block_on(controller.mount()).unwrap();

        assert_eq!(
            controller.gateway().calls(),
            vec![Call::List(ListQuery::page(1, LIMIT))]
        );
        let state = controller.snapshot();
        assert_eq!(state.current_page(), Some(1));
        assert_eq!(state.status, LoadStatus::Loaded);
        assert_eq!(state.records().len(), 2);
    }

    #[test]
    fn next_page_issues_one_load_for_following_page() {
        let (controller, _) = loaded_at(page(2, true, true, 5));
        controller.gateway().push_page(Ok(page(3, true, true, 5)));

        block_on(controller.go_to_next_page()).unwrap();

        assert_eq!(
            controller.gateway().list_calls(),
            vec![ListQuery::page(3, LIMIT)]
        );
        assert_eq!(controller.snapshot().current_page(), Some(3));
    }

    #[test]
    fn next_page_is_noop_without_next_flag() {
        let (controller, _) = loaded_at(page(5, false, true, 5));
        block_on(controller.go_to_next_page()).unwrap();
        assert!(controller.gateway().calls().is_empty());
    }

    #[test]
    fn next_page_stops_at_last_representable_page() {
        let (controller, _) = loaded_at(page(u32::MAX, true, true, u32::MAX));
        block_on(controller.go_to_next_page()).unwrap();
        assert!(controller.gateway().calls().is_empty());
    }

    #[test]
    fn previous_page_is_noop_without_flag_or_page() {
        let (controller, _) = setup();
        block_on(controller.go_to_previous_page()).unwrap();
        assert!(controller.gateway().calls().is_empty());

        let (controller, _) = loaded_at(page(1, true, false, 5));
        block_on(controller.go_to_previous_page()).unwrap();
        assert!(controller.gateway().calls().is_empty());
    }

    #[test]
    fn previous_page_loads_page_before() {
        let (controller, _) = loaded_at(page(4, true, true, 5));
        controller.gateway().push_page(Ok(page(3, true, true, 5)));

        block_on(controller.go_to_previous_page()).unwrap();

        assert_eq!(
            controller.gateway().list_calls(),
            vec![ListQuery::page(3, LIMIT)]
        );
    }

    #[test]
    fn toggle_sort_flips_desc_to_asc_and_reloads_current_page() {
        let (controller, _) = loaded_at(page(2, true, true, 5));
        controller.update_state(|s| {
            s.sort = SortState {
                direction: SortDirection::Desc,
                column: "name".into(),
            }
        });
        controller.gateway().push_page(Ok(page(2, true, true, 5)));

        block_on(controller.toggle_sort("name")).unwrap();

        assert_eq!(
            controller.snapshot().sort,
            SortState {
                direction: SortDirection::Asc,
                column: "name".into()
            }
        );
        assert_eq!(
            controller.gateway().list_calls(),
            vec![ListQuery::page(2, LIMIT).with_sort(SortDirection::Asc, "name")]
        );
    }

    #[test]
    fn sort_alternation_carries_over_between_columns() {
        let (controller, _) = loaded_at(page(1, false, false, 1));
        let mut seen = Vec::new();
        for column in ["name", "name", "name", "position", "name"] {
            controller.gateway().push_page(Ok(page(1, false, false, 1)));
            block_on(controller.toggle_sort(column)).unwrap();
            seen.push(controller.snapshot().sort.direction);
        }

        use SortDirection::*;
        assert_eq!(seen, vec![Desc, Asc, Desc, Asc, Desc]);
        assert_eq!(controller.gateway().list_calls().len(), 5);
    }

    #[test]
    fn toggle_sort_without_loaded_page_only_changes_state() {
        let (controller, _) = setup();
        block_on(controller.toggle_sort("name")).unwrap();
        assert_eq!(controller.snapshot().sort.direction, SortDirection::Desc);
        assert!(controller.gateway().calls().is_empty());
    }

    #[test]
    fn successful_delete_notifies_once_and_returns_to_page_one() {
        let (controller, host) = loaded_at(page(3, true, true, 5));
        controller.gateway().deletes.borrow_mut().push_back(Ok(()));
        controller.gateway().push_page(Ok(page(1, true, false, 5)));

        block_on(controller.request_delete("p3-a", None)).unwrap();

        assert_eq!(host.notices(), vec![Notice::Success(DELETE_SUCCESS.into())]);
        assert_eq!(
            controller.gateway().calls(),
            vec![
                Call::Delete(DeleteTarget {
                    id: "p3-a".into(),
                    auxiliary: None
                }),
                Call::List(ListQuery::page(1, LIMIT)),
            ]
        );
        assert_eq!(controller.snapshot().current_page(), Some(1));
    }

    #[test]
    fn rejected_delete_reports_server_message_and_keeps_page() {
        let (controller, host) = loaded_at(page(2, true, true, 5));
        let before = controller.snapshot().page;
        controller
            .gateway()
            .deletes
            .borrow_mut()
            .push_back(Err(rejected("Item in use")));

        block_on(controller.request_delete("p2-a", None)).unwrap();

        assert_eq!(host.notices(), vec![Notice::Error("Item in use".into())]);
        assert!(controller.gateway().list_calls().is_empty());
        assert_eq!(controller.snapshot().page, before);
    }

    #[test]
    fn declined_confirmation_sends_nothing() {
        let (controller, host) = loaded_at(page(1, false, false, 1));
        host.answer.set(false);

        block_on(controller.request_delete("p1-a", Some("banner-1"))).unwrap();

        assert_eq!(host.prompts.get(), 1);
        assert!(controller.gateway().calls().is_empty());
        assert!(host.notices().is_empty());
    }

    #[test]
    fn delete_passes_auxiliary_id_through() {
        let (controller, _) = loaded_at(page(1, false, false, 1));
        controller.gateway().deletes.borrow_mut().push_back(Ok(()));
        controller.gateway().push_page(Ok(page(1, false, false, 1)));

        block_on(controller.request_delete("p1-a", Some("banner-1"))).unwrap();

        assert_eq!(
            controller.gateway().calls()[0],
            Call::Delete(DeleteTarget {
                id: "p1-a".into(),
                auxiliary: Some("banner-1".into()),
            })
        );
    }

    #[test]
    fn request_edit_sets_target_without_touching_page() {
        let (controller, host) = loaded_at(page(2, true, true, 5));
        let before = controller.snapshot().page;
        controller
            .gateway()
            .records
            .borrow_mut()
            .push_back(Ok(record("x9")));

        block_on(controller.request_edit("x9")).unwrap();

        let state = controller.snapshot();
        assert_eq!(state.edit_target, Some(record("x9")));
        assert_eq!(state.page, before);
        assert_eq!(host.scrolls.get(), 1);
        assert_eq!(
            controller.gateway().calls(),
            vec![Call::FetchOne("x9".into())]
        );
    }

    #[test]
    fn rejected_edit_fetch_changes_nothing() {
        let (controller, host) = loaded_at(page(1, false, false, 1));
        controller
            .gateway()
            .records
            .borrow_mut()
            .push_back(Err(rejected("Not found")));

        block_on(controller.request_edit("gone")).unwrap();

        assert!(controller.snapshot().edit_target.is_none());
        assert_eq!(host.scrolls.get(), 0);
        assert!(host.notices().is_empty());
    }

    #[test]
    fn clear_edit_target_returns_to_create_mode() {
        let (controller, _) = loaded_at(page(1, false, false, 1));
        controller
            .gateway()
            .records
            .borrow_mut()
            .push_back(Ok(record("x1")));
        block_on(controller.request_edit("x1")).unwrap();
        assert!(controller.snapshot().is_edit_mode());

        controller.clear_edit_target();

        assert!(!controller.snapshot().is_edit_mode());
    }

    #[test]
    fn missing_session_skips_every_operation() {
        let (controller, host) = setup();
        *host.token.borrow_mut() = None;

        assert_eq!(
            block_on(controller.load(1, None)).unwrap(),
            LoadOutcome::Skipped
        );
        block_on(controller.mount()).unwrap();
        block_on(controller.request_edit("a")).unwrap();
        block_on(controller.request_delete("a", None)).unwrap();
        block_on(controller.refresh()).unwrap();

        assert!(controller.gateway().calls().is_empty());
        assert!(host.notices().is_empty());
        assert_eq!(controller.snapshot().status, LoadStatus::Idle);
    }

    #[test]
    fn rejected_load_is_silent_but_recorded() {
        let (controller, host) = loaded_at(page(2, true, true, 5));
        let before = controller.snapshot().page;
        controller.gateway().push_page(Err(rejected("Unknown column")));

        let outcome = block_on(controller.load(3, None)).unwrap();

        assert_eq!(outcome, LoadOutcome::Rejected);
        let state = controller.snapshot();
        assert_eq!(state.page, before);
        assert_eq!(state.status, LoadStatus::Failed("Unknown column".into()));
        assert!(host.notices().is_empty());
    }

    #[test]
    fn transport_failure_propagates() {
        let (controller, _) = setup();
        controller
            .gateway()
            .push_page(Err(GatewayError::Transport(TransportError(
                "connection refused".into(),
            ))));

        let err = block_on(controller.mount()).unwrap_err();

        assert_eq!(err, TransportError("connection refused".into()));
        assert!(matches!(controller.snapshot().status, LoadStatus::Failed(_)));
    }

    #[test]
    fn stale_response_is_discarded() {
        let (controller, _) = setup();
        let first = controller.gateway().defer_page();
        let second = controller.gateway().defer_page();

        let (older, newer, _) = block_on(async {
            futures::join!(controller.load(2, None), controller.load(3, None), async {
                second.send(Ok(page(3, true, true, 5))).ok();
                first.send(Ok(page(2, true, true, 5))).ok();
            })
        });

        assert_eq!(older.unwrap(), LoadOutcome::Stale);
        assert_eq!(newer.unwrap(), LoadOutcome::Applied);
        assert_eq!(controller.snapshot().current_page(), Some(3));
    }

    #[test]
    fn observers_see_every_replaced_page() {
        let (controller, _) = setup();
        let totals = Rc::new(RefCell::new(Vec::new()));
        {
            let totals = totals.clone();
            controller.subscribe(move |state| {
                if state.status == LoadStatus::Loaded {
                    totals.borrow_mut().push(state.total_count());
                }
            });
        }
        controller.gateway().push_page(Ok(page(1, true, false, 4)));

        block_on(controller.mount()).unwrap();

        assert_eq!(*totals.borrow(), vec![40]);
    }

    #[test]
    fn refresh_reloads_current_page_without_sort() {
        let (controller, _) = loaded_at(page(4, true, true, 5));
        controller.update_state(|s| {
            s.sort = SortState {
                direction: SortDirection::Asc,
                column: "name".into(),
            }
        });
        controller.gateway().push_page(Ok(page(4, true, true, 5)));

        block_on(controller.refresh()).unwrap();

        assert_eq!(
            controller.gateway().list_calls(),
            vec![ListQuery::page(4, LIMIT)]
        );
    }
}
