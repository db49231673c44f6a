use contracts::date_utils::format_piece_date;
use leptos::prelude::*;

use super::not_found::{missing_category_message, missing_piece_message, NotFound};
use super::status::{LoadFailed, LoadingShell};
use crate::catalog::store::{CatalogStore, LoadState};
use crate::routes;
use crate::shared::page_frame::PageFrame;
use crate::shared::prefetch::prefetch_image;

/// Full detail for one piece. A missing category and a missing piece each
/// get their own not-found message; neither propagates as an error.
#[component]
pub fn ItemDetail(category: String, piece: String) -> impl IntoView {
    let store = use_context::<CatalogStore>().expect("CatalogStore not found in context");

    move || match store.state.get() {
        LoadState::Unloaded | LoadState::Loading => view! { <LoadingShell /> }.into_any(),
        LoadState::Failed(message) => view! { <LoadFailed message=message /> }.into_any(),
        LoadState::Ready(index) => match index.get(&category) {
            None => {
                view! { <NotFound message=missing_category_message(&category) /> }.into_any()
            }
            Some(owner) => match owner.piece(&piece) {
                None => {
                    view! { <NotFound message=missing_piece_message(&category, &piece) /> }
                        .into_any()
                }
                Some(found) => {
                    let found = found.clone();
                    prefetch_image(&found.img);
                    let back_target = owner.name.clone();
                    let back_label = format!("Back to {}", owner.name);
                    view! {
                        <PageFrame title=found.name.clone() class="page--detail">
                            <img
                                class="detail__image"
                                src=found.img.clone()
                                alt=found.name.clone()
                            />
                            <p class="detail__date">{format_piece_date(&found)}</p>
                            <p class="detail__description">
                                {found.detail_blurb().to_string()}
                            </p>
                            <button
                                class="detail__back"
                                on:click=move |_| routes::go_to_category(&back_target)
                            >
                                {back_label}
                            </button>
                        </PageFrame>
                    }
                    .into_any()
                }
            },
        },
    }
}
