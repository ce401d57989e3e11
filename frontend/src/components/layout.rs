use crate::utils::navigation::ADMIN_PATH;
use leptos::*;

/// Centered page shell shared by the admin list views.
#[component]
pub fn AdminListLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <main class="min-h-screen bg-gray-100 p-8 flex flex-col items-center">
            <div class="mb-4 flex items-center gap-4">
                <h1 class="text-2xl font-semibold">{title}</h1>
                <a
                    href=ADMIN_PATH
                    class="rounded bg-gray-600 px-4 py-2 text-white hover:bg-gray-700"
                >
                    "Back to Admin Page"
                </a>
            </div>
            {children()}
        </main>
    }
}
