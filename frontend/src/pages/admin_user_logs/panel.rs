use super::view_model::use_user_log_view_model;
use crate::{
    api::UserLog,
    components::{
        empty_state::EmptyState, error::InlineMessages, layout::AdminListLayout,
        pagination::PagerControls,
    },
    utils::time::format_timestamp,
};
use leptos::*;

#[component]
pub fn AdminUserLogsPage() -> impl IntoView {
    let vm = use_user_log_view_model();
    let rows = vm.rows();

    view! {
        <AdminListLayout title="User Logs">
            <InlineMessages messages=vm.messages() />
            <Show
                when=move || !rows.with(Vec::is_empty)
                fallback=|| view! { <EmptyState title="No logs to show." /> }
            >
                <UserLogTable rows=rows />
            </Show>
            <PagerControls
                can_go_back=vm.can_go_back()
                is_last_page=vm.is_last_page()
                on_prev=Callback::new(move |_| vm.prev())
                on_next=Callback::new(move |_| vm.next())
            />
        </AdminListLayout>
    }
}

#[component]
fn UserLogTable(rows: Signal<Vec<UserLog>>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-gray-200 bg-white shadow rounded-lg">
            <thead class="bg-gray-50">
                <tr>
                    <th class="px-4 py-2 text-left text-sm font-medium text-gray-700">"User ID"</th>
                    <th class="px-4 py-2 text-left text-sm font-medium text-gray-700">"Event Type"</th>
                    <th class="px-4 py-2 text-left text-sm font-medium text-gray-700">"Details"</th>
                    <th class="px-4 py-2 text-left text-sm font-medium text-gray-700">"Created At"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-gray-100">
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|log| {
                            view! {
                                <tr>
                                    <td class="px-4 py-2 text-sm text-gray-900">{log.user_id}</td>
                                    <td class="px-4 py-2 text-sm text-gray-700">{log.event_type}</td>
                                    <td class="px-4 py-2 text-sm text-gray-700">{log.details}</td>
                                    <td class="px-4 py-2 text-sm text-gray-700">
                                        {format_timestamp(&log.created_at)}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_memory_session, sample_session};
    use crate::test_support::ssr::render_to_string;
    use chrono::{TimeZone, Utc};

    #[test]
    fn user_log_table_renders_rows() {
        let html = render_to_string(|| {
            let rows = Signal::derive(|| {
                vec![UserLog {
                    user_id: "u1".into(),
                    event_type: "signin".into(),
                    details: "from web".into(),
                    created_at: Utc.with_ymd_and_hms(2025, 1, 2, 10, 30, 0).unwrap(),
                }]
            });
            view! { <UserLogTable rows=rows /> }
        });
        for text in ["User ID", "Event Type", "Details", "Created At", "signin", "from web"] {
            assert!(html.contains(text), "missing {text}");
        }
    }

    #[test]
    fn empty_page_shows_placeholder() {
        let html = render_to_string(|| {
            provide_memory_session(Some(sample_session()));
            view! { <AdminUserLogsPage /> }
        });
        assert!(html.contains("User Logs"));
        assert!(html.contains("No logs to show."));
    }
}
