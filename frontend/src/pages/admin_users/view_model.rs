use super::{
    repository::AdminUsersRepository,
    utils::{apply_local_edit, DeleteConfirmation},
};
use crate::{
    api::{ApiClient, ApiError, UpdateUserRequest, User, UserField, UserListResponse},
    components::error::MessageState,
    state::{
        listing::ListState,
        pager::{LastPageRule, Navigation},
    },
};
use leptos::*;
use std::rc::Rc;

/// A field that lost focus, plus the page to reload once it is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommit {
    pub request: UpdateUserRequest,
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommit {
    pub id: String,
    pub cursor: Option<String>,
}

type PageResult = Result<UserListResponse, ApiError>;

#[derive(Clone, Copy)]
pub struct AdminUsersViewModel {
    pub state: RwSignal<ListState<User>>,
    pub confirmation: RwSignal<DeleteConfirmation>,
    pub load_action: Action<Option<String>, PageResult>,
    pub edit_action: Action<EditCommit, PageResult>,
    pub delete_action: Action<DeleteCommit, PageResult>,
}

impl AdminUsersViewModel {
    pub fn rows(&self) -> Signal<Vec<User>> {
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

    pub fn confirm_open(&self) -> Signal<bool> {
        let confirmation = self.confirmation;
        Signal::derive(move || confirmation.with(DeleteConfirmation::is_open))
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

    /// Keystrokes only touch the local row.
    pub fn edit_locally(&self, id: &str, field: UserField, value: &str) {
        self.state
            .update(|s| apply_local_edit(&mut s.rows, id, field, value));
    }

    /// Saves a single field, whether or not it changed.
    pub fn commit_field(&self, id: &str, field: UserField, value: String) {
        let cursor = self.state.with_untracked(|s| s.refresh_cursor());
        self.edit_action.dispatch(EditCommit {
            request: UpdateUserRequest::single_field(id, field, value),
            cursor,
        });
    }

    pub fn request_delete(&self, id: String) {
        self.confirmation.update(|c| c.request(id));
    }

    pub fn cancel_delete(&self) {
        self.confirmation.update(DeleteConfirmation::cancel);
    }

    pub fn confirm_delete(&self) {
        let Some(Some(id)) = self.confirmation.try_update(DeleteConfirmation::confirm) else {
            return;
        };
        let cursor = self.state.with_untracked(|s| s.refresh_cursor());
        self.delete_action.dispatch(DeleteCommit { id, cursor });
    }
}

/// Writes the change, then refetches the page the user is looking at.
pub async fn commit_edit(repo: &AdminUsersRepository, commit: EditCommit) -> PageResult {
    repo.update_user(&commit.request).await?;
    repo.fetch_users(commit.cursor).await
}

pub async fn commit_delete(repo: &AdminUsersRepository, commit: DeleteCommit) -> PageResult {
    repo.delete_user(&commit.id).await?;
    log::info!("deleted user {}", commit.id);
    repo.fetch_users(commit.cursor).await
}

pub fn use_admin_users_view_model() -> AdminUsersViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminUsersRepository::new_with_client(Rc::new(api));

    let state = create_rw_signal(ListState::<User>::new(LastPageRule::MissingCursorEndsList));
    let confirmation = create_rw_signal(DeleteConfirmation::default());

    let repo_for_load = repository.clone();
    let load_action = create_action(move |cursor: &Option<String>| {
        let repo = repo_for_load.clone();
        let cursor = cursor.clone();
        async move { repo.fetch_users(cursor).await }
    });

    let repo_for_edit = repository.clone();
    let edit_action = create_action(move |commit: &EditCommit| {
        let repo = repo_for_edit.clone();
        let commit = commit.clone();
        async move { commit_edit(&repo, commit).await }
    });

    let repo_for_delete = repository;
    let delete_action = create_action(move |commit: &DeleteCommit| {
        let repo = repo_for_delete.clone();
        let commit = commit.clone();
        async move { commit_delete(&repo, commit).await }
    });

    // Every completion lands, in whatever order the responses arrive.
    create_effect(move |_| {
        if let Some(result) = load_action.value().get() {
            match result {
                Ok(page) => state.update(|s| s.page_loaded(page.users, page.next_cursor)),
                Err(err) => state.update(|s| s.failed(err.error)),
            }
        }
    });

    for action in [edit_action.value(), delete_action.value()] {
        create_effect(move |_| {
            if let Some(result) = action.get() {
                match result {
                    Ok(page) => state.update(|s| s.committed(page.users, page.next_cursor)),
                    Err(err) => state.update(|s| s.failed(err.error)),
                }
            }
        });
    }

    create_effect(move |previous: Option<()>| {
        if previous.is_none() {
            untrack(|| load_action.dispatch(None));
        }
    });

    AdminUsersViewModel {
        state,
        confirmation,
        load_action,
        edit_action,
        delete_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::session::SessionStore;
    use crate::test_support::helpers::{provide_memory_session, sample_session};
    use crate::utils::storage::MemoryStorage;
    use serde_json::json;

    fn repository(server: &MockServer) -> AdminUsersRepository {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&sample_session()).unwrap();
        let api = ApiClient::new_with_base_url(server.url("")).with_session_store(store);
        AdminUsersRepository::new_with_client(Rc::new(api))
    }

    fn page_body() -> serde_json::Value {
        json!({
            "users": [{
                "id": "u1",
                "email": "one@example.com",
                "name": "New",
                "created_at": "2025-01-02T10:30:00Z"
            }],
            "next_cursor": "c2"
        })
    }

    #[tokio::test]
    async fn blur_commit_sends_one_field_then_refetches() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/admin/users");
            then.status(200);
        });
        server.mock(|when, then| {
            when.method(GET).path("/admin/users");
            then.status(200).json_body(page_body());
        });

        let page = commit_edit(
            &repository(&server),
            EditCommit {
                request: UpdateUserRequest::single_field("u1", UserField::Name, "New"),
                cursor: Some("c1".into()),
            },
        )
        .await
        .unwrap();

        let sent = server.received();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].method, PUT);
        assert_eq!(sent[0].body, Some(json!({ "id": "u1", "name": "New" })));
        assert_eq!(sent[0].authorization.as_deref(), Some("Bearer T"));
        assert_eq!(sent[1].method, GET);
        assert_eq!(sent[1].query.as_deref(), Some("cursor=c1&limit=10"));
        assert_eq!(page.users[0].name, "New");
        assert_eq!(page.next_cursor.as_deref(), Some("c2"));
    }

    #[tokio::test]
    async fn failed_update_surfaces_body_and_skips_refetch() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/admin/users");
            then.status(400).body("invalid email format");
        });

        let err = commit_edit(
            &repository(&server),
            EditCommit {
                request: UpdateUserRequest::single_field("u1", UserField::Email, "nope"),
                cursor: None,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.error, "invalid email format");
        assert_eq!(server.hits(GET, "/admin/users"), 0);
    }

    #[tokio::test]
    async fn delete_commit_removes_then_refetches_first_page() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/admin/users");
            then.status(204).body("");
        });
        server.mock(|when, then| {
            when.method(GET).path("/admin/users");
            then.status(200).json_body(json!({ "users": [], "next_cursor": null }));
        });

        let page = commit_delete(
            &repository(&server),
            DeleteCommit {
                id: "u1".into(),
                cursor: None,
            },
        )
        .await
        .unwrap();

        let sent = server.received();
        assert_eq!(sent[0].method, DELETE);
        assert_eq!(sent[0].body, Some(json!({ "id": "u1" })));
        assert_eq!(sent[1].query.as_deref(), Some("limit=10"));
        assert!(page.users.is_empty());
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn failed_delete_uses_fallback_text_for_empty_body() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/admin/users");
            then.status(500).body("");
        });

        let err = commit_delete(
            &repository(&server),
            DeleteCommit {
                id: "u1".into(),
                cursor: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.error, "Delete failed");
    }

    #[test]
    fn cancelled_delete_dispatches_nothing() {
        let runtime = create_runtime();
        provide_memory_session(Some(sample_session()));
        let vm = use_admin_users_view_model();

        vm.request_delete("u1".into());
        assert!(vm.confirm_open().get());
        vm.cancel_delete();
        assert!(!vm.confirm_open().get());
        vm.confirm_delete();
        assert_eq!(vm.delete_action.version().get(), 0);
        runtime.dispose();
    }

    #[test]
    fn local_edit_updates_row_without_dispatch() {
        let runtime = create_runtime();
        provide_memory_session(Some(sample_session()));
        let vm = use_admin_users_view_model();
        vm.state.update(|s| {
            s.page_loaded(
                vec![crate::test_support::helpers::sample_user("u1")],
                Some("c2".into()),
            )
        });

        vm.edit_locally("u1", UserField::Email, "typed@example.com");

        assert_eq!(vm.rows().get()[0].email, "typed@example.com");
        assert_eq!(vm.edit_action.version().get(), 0);
        runtime.dispose();
    }

    #[test]
    fn next_on_last_page_shows_notice_without_request() {
        let runtime = create_runtime();
        provide_memory_session(Some(sample_session()));
        let vm = use_admin_users_view_model();
        vm.state.update(|s| s.page_loaded(Vec::new(), None));

        vm.next();

        assert!(vm.is_last_page().get());
        assert_eq!(
            vm.messages().get().info.as_deref(),
            Some(crate::state::pager::LAST_PAGE_NOTICE)
        );
        assert_eq!(vm.load_action.version().get(), 0);
        runtime.dispose();
    }
}
