use crate::pages::login::{components::messages::LoginMessage, utils::LoginFormState};
use leptos::*;

#[component]
pub fn LoginForm(
    form: RwSignal<LoginFormState>,
    message: Signal<Option<String>>,
    pending: Signal<bool>,
    on_sign_in: Callback<()>,
    on_sign_up: Callback<()>,
) -> impl IntoView {
    view! {
        <main class="flex h-screen items-center justify-center bg-gray-100">
            <div class="w-full max-w-xs rounded-2xl bg-white p-6 shadow">
                <h1 class="mb-4 text-xl font-semibold text-center">"Login"</h1>
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_sign_in.call(());
                }>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        placeholder="Email"
                        class="mb-2 w-full rounded border p-2"
                        prop:value=move || form.get().email
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.email = value);
                        }
                    />
                    <input
                        id="password"
                        name="password"
                        type="password"
                        placeholder="Password"
                        class="mb-4 w-full rounded border p-2"
                        prop:value=move || form.get().password
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.password = value);
                        }
                    />
                    <div class="flex gap-2">
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="flex-1 rounded bg-blue-500 p-2 text-white hover:bg-blue-600 disabled:opacity-50"
                        >
                            {move || if pending.get() { "Loading..." } else { "Login" }}
                        </button>
                        <button
                            type="button"
                            disabled=move || pending.get()
                            class="flex-1 rounded bg-green-500 p-2 text-white hover:bg-green-600 disabled:opacity-50"
                            on:click=move |_| on_sign_up.call(())
                        >
                            {move || if pending.get() { "Loading..." } else { "Sign Up" }}
                        </button>
                    </div>
                </form>
                <LoginMessage message=message />
            </div>
        </main>
    }
}
