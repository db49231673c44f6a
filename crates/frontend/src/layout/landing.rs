//! Static landing regions. Presentational only: the router shows them on
//! the root route and hides them everywhere else; nothing here reads the
//! catalog.

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header id="hero" class="landing landing--hero">
            <h1 class="landing__title">"Atelier"</h1>
            <p class="landing__tagline">"A working catalog of pieces, newest first."</p>
        </header>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <footer id="about" class="landing landing--about">
            <h2 class="landing__heading">"About"</h2>
            <p class="landing__text">
                "Everything on this page is organized into collections. Pick a card to "
                "browse a collection, or open a piece for the full image and story."
            </p>
        </footer>
    }
}
