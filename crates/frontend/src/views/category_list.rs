use contracts::catalog::Category;
use leptos::prelude::*;

use super::status::{LoadFailed, LoadingShell};
use crate::catalog::store::{CatalogStore, LoadState};
use crate::routes;
use crate::shared::page_frame::PageFrame;
use crate::shared::prefetch::prefetch_image;

/// Card subtitle naming the category's most recent piece.
pub fn latest_subtitle(category: &Category) -> String {
    match category.latest() {
        Some(piece) => format!("Latest: {}", piece.name),
        None => "No pieces yet".to_string(),
    }
}

/// One card per category in catalog order, backed by the most recent
/// piece's image. Clicking a card navigates to the category.
#[component]
pub fn CategoryList() -> impl IntoView {
    let store = use_context::<CatalogStore>().expect("CatalogStore not found in context");

    move || match store.state.get() {
        LoadState::Unloaded | LoadState::Loading => view! { <LoadingShell /> }.into_any(),
        LoadState::Failed(message) => view! { <LoadFailed message=message /> }.into_any(),
        LoadState::Ready(index) => {
            let cards = index
                .categories()
                .iter()
                .map(|category| {
                    let latest = category.latest();
                    if let Some(piece) = latest {
                        prefetch_image(&piece.img);
                    }
                    let style =
                        latest.map(|p| format!("background-image: url('{}')", p.img));
                    let subtitle = latest_subtitle(category);
                    let title = category.name.clone();
                    let target = category.name.clone();
                    view! {
                        <article
                            class="card card--category"
                            style=style
                            on:click=move |_| routes::go_to_category(&target)
                        >
                            <h3 class="card__title">{title}</h3>
                            <p class="card__subtitle">{subtitle}</p>
                        </article>
                    }
                })
                .collect_view();

            view! {
                <PageFrame title="Collections".to_string()>{cards}</PageFrame>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::Piece;

    #[test]
    fn subtitle_names_the_latest_piece() {
        let category = Category {
            name: "Comic".to_string(),
            pieces: vec![Piece {
                name: "ICON".to_string(),
                img: "img/icon.png".to_string(),
                date_created: Some("2025-01-12".to_string()),
                short_description: None,
                long_description: None,
            }],
        };
        assert_eq!(latest_subtitle(&category), "Latest: ICON");
    }

    #[test]
    fn empty_category_gets_a_placeholder_subtitle() {
        let category = Category {
            name: "Drafts".to_string(),
            pieces: vec![],
        };
        assert_eq!(latest_subtitle(&category), "No pieces yet");
    }
}
