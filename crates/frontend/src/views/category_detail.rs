use contracts::date_utils::format_piece_date;
use leptos::prelude::*;

use super::not_found::{missing_category_message, NotFound};
use super::status::{LoadFailed, LoadingShell};
use crate::catalog::store::{CatalogStore, LoadState};
use crate::routes;
use crate::shared::page_frame::PageFrame;
use crate::shared::prefetch::prefetch_image;

/// All pieces of one category, newest first (the stored order). An unknown
/// name renders the not-found shell instead of erroring.
#[component]
pub fn CategoryDetail(name: String) -> impl IntoView {
    let store = use_context::<CatalogStore>().expect("CatalogStore not found in context");

    move || match store.state.get() {
        LoadState::Unloaded | LoadState::Loading => view! { <LoadingShell /> }.into_any(),
        LoadState::Failed(message) => view! { <LoadFailed message=message /> }.into_any(),
        LoadState::Ready(index) => match index.get(&name) {
            None => view! { <NotFound message=missing_category_message(&name) /> }.into_any(),
            Some(category) => {
                let cards = category
                    .pieces
                    .iter()
                    .map(|piece| {
                        prefetch_image(&piece.img);
                        let date = format_piece_date(piece);
                        let blurb = piece.card_blurb().to_string();
                        let img = piece.img.clone();
                        let title = piece.name.clone();
                        let alt = piece.name.clone();
                        let owner = category.name.clone();
                        let target = piece.name.clone();
                        view! {
                            <article
                                class="card card--piece"
                                on:click=move |_| routes::go_to_item(&owner, &target)
                            >
                                <img class="card__image" src=img alt=alt />
                                <h3 class="card__title">{title}</h3>
                                <p class="card__date">{date}</p>
                                <p class="card__subtitle">{blurb}</p>
                            </article>
                        }
                    })
                    .collect_view();

                view! {
                    <PageFrame title=category.name.clone()>{cards}</PageFrame>
                    <button class="page__back" on:click=move |_| routes::go_to_root()>
                        "All collections"
                    </button>
                }
                .into_any()
            }
        },
    }
}
