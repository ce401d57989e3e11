use super::{components::list::UserTable, view_model::use_admin_users_view_model};
use crate::components::{
    confirm_dialog::ConfirmDialog, error::InlineMessages, layout::AdminListLayout,
    pagination::PagerControls,
};
use leptos::*;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let vm = use_admin_users_view_model();

    view! {
        <AdminListLayout title="User List">
            <InlineMessages messages=vm.messages() />
            <UserTable
                rows=vm.rows()
                on_input=Callback::new(move |(id, field, value): (String, _, String)| {
                    vm.edit_locally(&id, field, &value)
                })
                on_blur=Callback::new(move |(id, field, value): (String, _, String)| {
                    vm.commit_field(&id, field, value)
                })
                on_delete=Callback::new(move |id: String| vm.request_delete(id))
            />
            <PagerControls
                can_go_back=vm.can_go_back()
                is_last_page=vm.is_last_page()
                on_prev=Callback::new(move |_| vm.prev())
                on_next=Callback::new(move |_| vm.next())
            />
            <ConfirmDialog
                is_open=vm.confirm_open()
                title="Delete user"
                message="Are you sure you want to delete this user?"
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </AdminListLayout>
    }
}
