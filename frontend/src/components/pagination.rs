use leptos::*;

#[component]
pub fn PagerControls(
    #[prop(into)] can_go_back: MaybeSignal<bool>,
    #[prop(into)] is_last_page: MaybeSignal<bool>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="mt-6 flex gap-4">
            <button
                type="button"
                class="rounded bg-gray-500 px-4 py-2 text-white disabled:opacity-40"
                disabled=move || !can_go_back.get()
                on:click=move |_| on_prev.call(())
            >
                "Prev"
            </button>
            <button
                type="button"
                class="rounded bg-blue-500 px-4 py-2 text-white disabled:opacity-40"
                disabled=move || is_last_page.get()
                on:click=move |_| on_next.call(())
            >
                "Next"
            </button>
        </div>
    }
}
