//! Forward/back navigation over cursor-paginated listings.
//!
//! The pager only decides *what* to fetch; callers issue the request and feed
//! the outcome back through [`CursorPager::page_loaded`].

/// Where the pager currently is. `history` holds the cursors of every earlier
/// page, oldest first; the first page is recorded as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PagePosition {
    #[default]
    First,
    After { cursor: String, history: Vec<String> },
}

/// What the caller should do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Fetch the page starting at this cursor (`None` is the first page).
    Fetch(Option<String>),
    /// There is nothing further; show the last-page notice without a request.
    LastPage,
    Stay,
}

/// How a freshly loaded page affects the last-page flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastPageRule {
    /// A page without a next cursor is the last page, including the first one.
    MissingCursorEndsList,
    /// The flag is only raised when Next finds no cursor.
    OnNextOnly,
}

pub const LAST_PAGE_NOTICE: &str = "This is the last page.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CursorPager {
    position: PagePosition,
    next_cursor: Option<String>,
    last_page: bool,
}

impl CursorPager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> &PagePosition {
        &self.position
    }

    pub fn current_cursor(&self) -> Option<&str> {
        match &self.position {
            PagePosition::First => None,
            PagePosition::After { cursor, .. } => Some(cursor.as_str()),
        }
    }

    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    pub fn history(&self) -> &[String] {
        match &self.position {
            PagePosition::First => &[],
            PagePosition::After { history, .. } => history,
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.last_page
    }

    pub fn can_go_back(&self) -> bool {
        !self.history().is_empty()
    }

    /// The request that reloads the page currently shown.
    pub fn refresh(&self) -> Navigation {
        Navigation::Fetch(self.current_cursor().map(str::to_string))
    }

    pub fn next(&mut self) -> Navigation {
        let Some(next) = self.next_cursor.clone() else {
            self.last_page = true;
            return Navigation::LastPage;
        };
        let position = std::mem::take(&mut self.position);
        self.position = match position {
            PagePosition::First => PagePosition::After {
                cursor: next.clone(),
                history: vec![String::new()],
            },
            PagePosition::After { cursor, mut history } => {
                history.push(cursor);
                PagePosition::After {
                    cursor: next.clone(),
                    history,
                }
            }
        };
        Navigation::Fetch(Some(next))
    }

    pub fn prev(&mut self) -> Navigation {
        let position = std::mem::take(&mut self.position);
        let PagePosition::After { mut history, cursor } = position else {
            return Navigation::Stay;
        };
        let Some(previous) = history.pop() else {
            self.position = PagePosition::After { cursor, history };
            return Navigation::Stay;
        };
        self.last_page = false;
        if previous.is_empty() {
            self.position = PagePosition::First;
            Navigation::Fetch(None)
        } else {
            self.position = PagePosition::After {
                cursor: previous.clone(),
                history,
            };
            Navigation::Fetch(Some(previous))
        }
    }

    /// Records the next cursor of a page that just arrived. Returns `true` when
    /// the page should be announced as the last one.
    pub fn page_loaded(&mut self, next_cursor: Option<String>, rule: LastPageRule) -> bool {
        let next_cursor = next_cursor.filter(|cursor| !cursor.is_empty());
        match rule {
            LastPageRule::MissingCursorEndsList if next_cursor.is_none() => {
                self.next_cursor = None;
                self.last_page = true;
                true
            }
            _ => {
                self.next_cursor = next_cursor;
                false
            }
        }
    }
}
