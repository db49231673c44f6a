use leptos::prelude::*;

use crate::shared::page_frame::PageFrame;

#[component]
pub fn LoadingShell() -> impl IntoView {
    view! {
        <PageFrame title="Loading".to_string()>
            <p class="status__message">"Fetching the catalog…"</p>
        </PageFrame>
    }
}

/// Terminal failure shell for the session's catalog load. The error has
/// already been logged by the store; this just keeps the page from being
/// silently empty.
#[component]
pub fn LoadFailed(message: String) -> impl IntoView {
    view! {
        <PageFrame title="Something broke".to_string()>
            <p class="status__message status__message--error">{message}</p>
        </PageFrame>
    }
}
