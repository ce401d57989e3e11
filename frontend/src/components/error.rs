use leptos::*;

/// The single message slot of a list view: either an error or an
/// informational notice, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub info: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.info = None;
        self.error = None;
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.info = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.info = None;
    }
}

#[component]
pub fn InlineMessages(messages: Signal<MessageState>) -> impl IntoView {
    view! {
        {move || {
            let state = messages.get();
            if let Some(error) = state.error {
                view! { <p class="mb-4 text-red-600" role="alert">{error}</p> }.into_view()
            } else if let Some(info) = state.info {
                view! { <p class="mb-4 text-gray-700" role="status">{info}</p> }.into_view()
            } else {
                ().into_view()
            }
        }}
    }
}
