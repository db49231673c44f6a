//! PageFrame — the one container every routed view renders into.
//!
//! Views ask the frame for "a cleared grid with a given title" instead of
//! assuming which physical element backs the mount point. Swapping the frame
//! out (full-width container, borrowed grid, test harness) never touches the
//! view code.
//!
//! Usage:
//! ```rust,ignore
//! use crate::shared::page_frame::PageFrame;
//!
//! #[component]
//! pub fn MyView() -> impl IntoView {
//!     view! {
//!         <PageFrame title="Collections".to_string()>
//!             <article class="card">...</article>
//!         </PageFrame>
//!     }
//! }
//! ```

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// Heading rendered above the grid.
    title: String,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {class}")
    };

    view! {
        <section class=full_class>
            <h2 class="page__title">{title}</h2>
            <div class="page__grid">{children()}</div>
        </section>
    }
}
