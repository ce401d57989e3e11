use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-8 px-4 rounded border-2 border-dashed border-gray-300 bg-gray-50">
            <h3 class="text-sm font-semibold text-gray-900">{title}</h3>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-gray-500">{desc}</p>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_state_renders_title_and_description() {
        let html = render_to_string(|| {
            view! { <EmptyState title="No logs" description="Nothing recorded yet." /> }
        });
        assert!(html.contains("No logs"));
        assert!(html.contains("Nothing recorded yet."));
    }
}
