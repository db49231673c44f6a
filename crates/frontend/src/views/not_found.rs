use leptos::prelude::*;

use crate::shared::page_frame::PageFrame;

pub fn missing_category_message(category: &str) -> String {
    format!("No category named \"{category}\".")
}

pub fn missing_piece_message(category: &str, piece: &str) -> String {
    format!("No piece named \"{piece}\" in \"{category}\".")
}

/// Shared shell for route-parse misses and lookup misses alike. There is no
/// distinct error page, only a message substitution.
#[component]
pub fn NotFound(message: String) -> impl IntoView {
    view! {
        <PageFrame title="Not found".to_string()>
            <p class="not-found__message">{message}</p>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_message_names_the_missing_key() {
        assert_eq!(
            missing_category_message("Sculpture"),
            "No category named \"Sculpture\"."
        );
    }

    #[test]
    fn piece_message_names_both_keys() {
        let msg = missing_piece_message("Comic", "GHOST");
        assert!(msg.contains("GHOST"));
        assert!(msg.contains("Comic"));
    }
}
