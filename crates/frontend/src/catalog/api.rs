use contracts::catalog::{Catalog, CatalogError, CatalogIndex};
use gloo_net::http::Request;

use crate::shared::config::catalog_url;

/// Fetch the dataset, normalize piece ordering and build the index.
/// Called exactly once per session by the store.
pub async fn fetch_catalog() -> Result<CatalogIndex, CatalogError> {
    let response = Request::get(&catalog_url())
        .send()
        .await
        .map_err(|e| CatalogError::Unavailable(format!("Failed to send request: {e}")))?;

    if !response.ok() {
        return Err(CatalogError::Unavailable(format!(
            "Unexpected status: {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Unavailable(format!("Failed to read response: {e}")))?;

    let mut catalog = Catalog::from_json(&body)?;
    catalog.normalize();
    Ok(CatalogIndex::build(catalog))
}
