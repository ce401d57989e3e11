use leptos::*;

#[component]
pub fn LoginMessage(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <p class="mt-4 text-center text-sm text-gray-700">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
