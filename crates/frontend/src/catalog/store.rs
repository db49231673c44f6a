use std::sync::Arc;

use contracts::catalog::CatalogIndex;
use leptos::prelude::*;

use super::api::fetch_catalog;

/// Lifecycle of the session's single catalog load. `Ready` and `Failed`
/// are terminal: there is no retry.
#[derive(Clone, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loading,
    Ready(Arc<CatalogIndex>),
    Failed(String),
}

impl LoadState {
    /// True only for `Unloaded`. A load that is in flight or finished must
    /// never be restarted; the in-flight operation is the memo.
    pub fn should_start_fetch(&self) -> bool {
        matches!(self, LoadState::Unloaded)
    }
}

/// Reactive holder of the memoized catalog. Copyable handle, shared through
/// context; views read `state` and re-render when the load completes.
#[derive(Clone, Copy)]
pub struct CatalogStore {
    pub state: RwSignal<LoadState>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(LoadState::Unloaded),
        }
    }

    /// Idempotent: only the first call on an unloaded store starts a fetch.
    /// Calls arriving while the load is in flight (or finished) are no-ops
    /// and share the one outcome, so rapid navigation never duplicates the
    /// network request.
    pub fn ensure_loaded(&self) {
        let start = self.state.with_untracked(LoadState::should_start_fetch);
        if !start {
            return;
        }
        self.state.set(LoadState::Loading);

        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_catalog().await {
                Ok(index) => state.set(LoadState::Ready(Arc::new(index))),
                Err(e) => {
                    log::error!("catalog load failed: {e}");
                    state.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::Catalog;

    #[test]
    fn only_an_unloaded_store_starts_a_fetch() {
        assert!(LoadState::Unloaded.should_start_fetch());
        assert!(!LoadState::Loading.should_start_fetch());

        let index = CatalogIndex::build(Catalog { categories: vec![] });
        assert!(!LoadState::Ready(Arc::new(index)).should_start_fetch());
        assert!(!LoadState::Failed("catalog unavailable".to_string()).should_start_fetch());
    }
}
