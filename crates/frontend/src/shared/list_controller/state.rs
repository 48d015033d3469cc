use contracts::domain::common::{PagedCollection, SortState};

/// Outcome of the latest page read, surfaced to the UI
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Snapshot of a list screen
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<E> {
    /// Last page confirmed by the server
    pub page: Option<PagedCollection<E>>,
    /// Record loaded into the form; `None` means create mode
    pub edit_target: Option<E>,
    pub sort: SortState,
    pub status: LoadStatus,
}

impl<E> Default for ListState<E> {
    fn default() -> Self {
        Self {
            page: None,
            edit_target: None,
            sort: SortState::default(),
            status: LoadStatus::Idle,
        }
    }
}

impl<E> ListState<E> {
    pub fn current_page(&self) -> Option<u32> {
        self.page.as_ref().map(|p| p.current_page)
    }

    pub fn records(&self) -> &[E] {
        self.page.as_ref().map(|p| p.records.as_slice()).unwrap_or(&[])
    }

    pub fn total_count(&self) -> u64 {
        self.page.as_ref().map(|p| p.total_count).unwrap_or(0)
    }

    pub fn total_pages(&self) -> u32 {
        self.page.as_ref().map(|p| p.total_pages).unwrap_or(0)
    }

    pub fn has_next_page(&self) -> bool {
        self.page.as_ref().is_some_and(|p| p.has_next_page)
    }

    pub fn has_prev_page(&self) -> bool {
        self.page.as_ref().is_some_and(|p| p.has_prev_page)
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_target.is_some()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }
}
