use crate::{
    components::error::MessageState,
    state::pager::{CursorPager, LastPageRule, Navigation, LAST_PAGE_NOTICE},
};

/// Everything a cursor-paginated table keeps between renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub rows: Vec<T>,
    pub pager: CursorPager,
    pub messages: MessageState,
    rule: LastPageRule,
}

impl<T> ListState<T> {
    pub fn new(rule: LastPageRule) -> Self {
        Self {
            rows: Vec::new(),
            pager: CursorPager::new(),
            messages: MessageState::default(),
            rule,
        }
    }

    pub fn next(&mut self) -> Navigation {
        let navigation = self.pager.next();
        match navigation {
            Navigation::LastPage => self.messages.set_info(LAST_PAGE_NOTICE),
            Navigation::Fetch(_) => self.messages.clear(),
            Navigation::Stay => {}
        }
        navigation
    }

    pub fn prev(&mut self) -> Navigation {
        let navigation = self.pager.prev();
        if matches!(navigation, Navigation::Fetch(_)) {
            self.messages.clear();
        }
        navigation
    }

    pub fn refresh_cursor(&self) -> Option<String> {
        self.pager.current_cursor().map(str::to_string)
    }

    /// Replaces the rows with a freshly fetched page. Rows are replaced even
    /// when an older request resolves after a newer one.
    pub fn page_loaded(&mut self, rows: Vec<T>, next_cursor: Option<String>) {
        log::debug!("page loaded with {} rows", rows.len());
        if self.pager.page_loaded(next_cursor, self.rule) {
            self.messages.set_info(LAST_PAGE_NOTICE);
        }
        self.rows = rows;
    }

    /// A write succeeded and the current page was fetched again.
    pub fn committed(&mut self, rows: Vec<T>, next_cursor: Option<String>) {
        self.messages.clear();
        self.page_loaded(rows, next_cursor);
    }

    /// Failures leave the rows untouched.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.messages.set_error(message);
    }
}
