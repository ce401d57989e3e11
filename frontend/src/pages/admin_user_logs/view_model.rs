use crate::api::{ApiClient, ApiError, UserLog, UserLogListResponse};
use crate::components::error::MessageState;
use crate::state::{
    listing::ListState,
    pager::{LastPageRule, Navigation},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct UserLogViewModel {
    pub state: RwSignal<ListState<UserLog>>,
    pub load_action: Action<Option<String>, Result<UserLogListResponse, ApiError>>,
}

impl UserLogViewModel {
    pub fn rows(&self) -> Signal<Vec<UserLog>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.rows.clone()))
    }

    pub fn messages(&self) -> Signal<MessageState> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.messages.clone()))
    }

    pub fn can_go_back(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.pager.can_go_back()))
    }

    pub fn is_last_page(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.pager.is_last_page()))
    }

    pub fn next(&self) {
        if let Some(Navigation::Fetch(cursor)) = self.state.try_update(|s| s.next()) {
            self.load_action.dispatch(cursor);
        }
    }

    pub fn prev(&self) {
        if let Some(Navigation::Fetch(cursor)) = self.state.try_update(|s| s.prev()) {
            self.load_action.dispatch(cursor);
        }
    }
}

pub fn use_user_log_view_model() -> UserLogViewModel {
    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let state = create_rw_signal(ListState::<UserLog>::new(LastPageRule::OnNextOnly));

    let load_action = create_action(move |cursor: &Option<String>| {
        let api = api_client.clone();
        let cursor = cursor.clone();
        async move { api.list_user_logs(cursor.as_deref()).await }
    });

    create_effect(move |_| {
        if let Some(result) = load_action.value().get() {
            match result {
                Ok(page) => state.update(|s| s.page_loaded(page.user_logs, page.next_cursor)),
                Err(err) => state.update(|s| s.failed(err.error)),
            }
        }
    });

    create_effect(move |previous: Option<()>| {
        if previous.is_none() {
            untrack(|| load_action.dispatch(None));
        }
    });

    UserLogViewModel { state, load_action }
}
