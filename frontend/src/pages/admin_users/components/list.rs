use crate::{
    api::{User, UserField},
    pages::admin_users::utils::field_value,
    utils::time::format_timestamp,
};
use leptos::*;

/// A cell edit: user id, column and the input's current value.
pub type FieldEdit = (String, UserField, String);

/// The current value of one cell. It follows `rows`, so a refetched page
/// reaches rows that are already on screen.
pub fn cell_value(rows: Signal<Vec<User>>, id: String, field: UserField) -> Signal<String> {
    Signal::derive(move || {
        rows.with(|rows| {
            rows.iter()
                .find(|user| user.id == id)
                .map(|user| field_value(user, field).to_string())
                .unwrap_or_default()
        })
    })
}

#[component]
pub fn UserTable(
    rows: Signal<Vec<User>>,
    on_input: Callback<FieldEdit>,
    on_blur: Callback<FieldEdit>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-gray-200 bg-white shadow rounded-lg">
            <thead class="bg-gray-50">
                <tr>
                    <th class="px-4 py-2 text-left text-sm font-medium text-gray-700">"User ID"</th>
                    <th class="px-4 py-2 text-left text-sm font-medium text-gray-700">"Email"</th>
                    <th class="px-4 py-2 text-left text-sm font-medium text-gray-700">"Name"</th>
                    <th class="px-4 py-2 text-left text-sm font-medium text-gray-700">"Created At"</th>
                    <th class="px-4 py-2 text-left text-sm font-medium text-gray-700">"Actions"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-gray-100">
                <For
                    each=move || rows.get()
                    key=|user| user.id.clone()
                    children=move |user: User| {
                        let id = user.id.clone();
                        let delete_id = user.id.clone();
                        let email = cell_value(rows, user.id.clone(), UserField::Email);
                        let name = cell_value(rows, user.id.clone(), UserField::Name);
                        view! {
                            <tr>
                                <td class="px-4 py-2 text-sm text-gray-900">{user.id.clone()}</td>
                                <td class="px-4 py-2">
                                    <EditableCell
                                        id=id.clone()
                                        field=UserField::Email
                                        value=email
                                        on_input=on_input
                                        on_blur=on_blur
                                    />
                                </td>
                                <td class="px-4 py-2">
                                    <EditableCell
                                        id=id
                                        field=UserField::Name
                                        value=name
                                        on_input=on_input
                                        on_blur=on_blur
                                    />
                                </td>
                                <td class="px-4 py-2 text-sm text-gray-700">
                                    {format_timestamp(&user.created_at)}
                                </td>
                                <td class="px-4 py-2">
                                    <button
                                        type="button"
                                        class="rounded bg-red-500 px-3 py-1 text-sm text-white hover:bg-red-600"
                                        on:click=move |_| on_delete.call(delete_id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
fn EditableCell(
    id: String,
    field: UserField,
    value: Signal<String>,
    on_input: Callback<FieldEdit>,
    on_blur: Callback<FieldEdit>,
) -> impl IntoView {
    let input_id = id.clone();
    let blur_id = id;
    view! {
        <input
            type="text"
            class="w-full rounded border border-gray-300 px-2 py-1 text-sm"
            aria-label=field.label()
            prop:value=move || value.get()
            on:input=move |ev| on_input.call((input_id.clone(), field, event_target_value(&ev)))
            on:blur=move |ev| on_blur.call((blur_id.clone(), field, event_target_value(&ev)))
        />
    }
}
