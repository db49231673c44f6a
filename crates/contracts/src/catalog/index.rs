use std::collections::HashMap;

use super::model::{Catalog, Category};

/// Name-keyed lookup over a loaded catalog. Built once after
/// [`Catalog::normalize`]; lives for the session.
///
/// Duplicate category names overwrite earlier entries (last-write-wins);
/// iteration order stays the catalog's own order regardless.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    catalog: Catalog,
    by_name: HashMap<String, usize>,
}

impl CatalogIndex {
    pub fn build(catalog: Catalog) -> Self {
        let by_name = catalog
            .categories
            .iter()
            .enumerate()
            .map(|(pos, category)| (category.name.clone(), pos))
            .collect();
        Self { catalog, by_name }
    }

    /// Categories in catalog order, for the list view.
    pub fn categories(&self) -> &[Category] {
        &self.catalog.categories
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.by_name
            .get(name)
            .map(|&pos| &self.catalog.categories[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> Category {
        Category {
            name: name.to_string(),
            pieces: vec![],
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let index = CatalogIndex::build(Catalog {
            categories: vec![category("Comic")],
        });
        assert!(index.get("Comic").is_some());
        assert!(index.get("comic").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_the_last_entry() {
        let mut second = category("Comic");
        second.pieces.push(crate::catalog::Piece {
            name: "marker".to_string(),
            img: "img/marker.png".to_string(),
            date_created: None,
            short_description: None,
            long_description: None,
        });
        let index = CatalogIndex::build(Catalog {
            categories: vec![category("Comic"), second],
        });
        assert_eq!(index.get("Comic").unwrap().pieces.len(), 1);
        // Both entries still show up in list order
        assert_eq!(index.categories().len(), 2);
    }
}
