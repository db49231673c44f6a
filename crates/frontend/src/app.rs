use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::catalog::store::CatalogStore;
use crate::layout::landing::{About, Hero};
use crate::routes::{self, Route};
use crate::views::{CategoryDetail, CategoryList, ItemDetail, NotFound};

#[component]
pub fn App() -> impl IntoView {
    // Provide the catalog store to the whole app via context.
    let store = CatalogStore::new();
    provide_context(store);

    let route = RwSignal::new(Route::parse(&routes::current_fragment()));

    // Every navigation event re-checks the catalog; only the first check on
    // an unloaded store starts the fetch.
    store.ensure_loaded();
    install_hashchange_listener(move || {
        store.ensure_loaded();
        route.set(Route::parse(&routes::current_fragment()));
    });

    let is_root = move || matches!(route.get(), Route::Root);

    view! {
        <Show when=is_root>
            <Hero />
        </Show>
        <main id="view-root">
            {move || match route.get() {
                Route::Root => view! { <CategoryList /> }.into_any(),
                Route::Category { name } => view! { <CategoryDetail name=name /> }.into_any(),
                Route::Item { category, piece } => {
                    view! { <ItemDetail category=category piece=piece /> }.into_any()
                }
                Route::NotFound => {
                    view! { <NotFound message="Nothing lives at this address.".to_string() /> }
                        .into_any()
                }
            }}
        </main>
        <Show when=is_root>
            <About />
        </Show>
    }
}

/// Subscribes `on_navigate` to the window's `hashchange` event for the
/// lifetime of the page. The closure is leaked on purpose: the listener is
/// never removed while the app is mounted.
fn install_hashchange_listener(on_navigate: impl Fn() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| on_navigate());
    if let Err(e) =
        window.add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
    {
        log::error!("failed to install hashchange listener: {e:?}");
    }
    callback.forget();
}
