use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// Root of the loaded dataset. Immutable after [`Catalog::normalize`]; the
/// whole tree is loaded once per session and never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

/// A named grouping of pieces. `name` is both the display label and the
/// route key, compared case-sensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub pieces: Vec<Piece>,
}

/// A single catalog item. `name` is unique within its owning category;
/// lookups are always scoped by `(category, piece)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Piece {
    pub name: String,
    pub img: String,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(raw).map_err(|e| CatalogError::Malformed(e.to_string()))
    }

    /// Re-sorts every category's pieces newest-first. Stable: pieces with
    /// equal recency keep their original order. Run once after load; the
    /// sorted order is relied on wherever "most recent piece" is needed.
    pub fn normalize(&mut self) {
        for category in &mut self.categories {
            category
                .pieces
                .sort_by_cached_key(|p| std::cmp::Reverse(p.recency()));
        }
    }
}

impl Category {
    /// Most recent piece. First element after [`Catalog::normalize`].
    pub fn latest(&self) -> Option<&Piece> {
        self.pieces.first()
    }

    pub fn piece(&self, name: &str) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.name == name)
    }
}

impl Piece {
    /// Ordering key for newest-first presentation. A missing or unparseable
    /// `date_created` maps to the Unix epoch, never an error.
    pub fn recency(&self) -> DateTime<Utc> {
        self.date_created
            .as_deref()
            .and_then(parse_recency)
            .unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Card text: short description, falling back to the long one.
    pub fn card_blurb(&self) -> &str {
        self.short_description
            .as_deref()
            .or(self.long_description.as_deref())
            .unwrap_or("")
    }

    /// Detail text: long description, falling back to the short one.
    pub fn detail_blurb(&self) -> &str {
        self.long_description
            .as_deref()
            .or(self.short_description.as_deref())
            .unwrap_or("")
    }
}

fn parse_recency(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // Plain dates ("2025-01-12") count as midnight UTC
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| Utc.from_utc_datetime(&ndt))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(name: &str, date: Option<&str>) -> Piece {
        Piece {
            name: name.to_string(),
            img: format!("img/{name}.png"),
            date_created: date.map(str::to_string),
            short_description: None,
            long_description: None,
        }
    }

    #[test]
    fn recency_parses_dates_and_datetimes() {
        let day = piece("a", Some("2025-01-12"));
        let moment = piece("b", Some("2025-01-12T15:30:00Z"));
        assert!(moment.recency() > day.recency());
    }

    #[test]
    fn recency_of_missing_or_garbage_date_is_epoch() {
        assert_eq!(piece("a", None).recency(), DateTime::UNIX_EPOCH);
        assert_eq!(piece("b", Some("next tuesday")).recency(), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn normalize_sorts_newest_first_and_is_stable() {
        let mut catalog = Catalog {
            categories: vec![Category {
                name: "Prints".to_string(),
                pieces: vec![
                    piece("undated-1", None),
                    piece("new", Some("2025-03-01")),
                    piece("undated-2", None),
                    piece("older", Some("2024-06-15")),
                ],
            }],
        };
        catalog.normalize();
        let names: Vec<&str> = catalog.categories[0]
            .pieces
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        // Undated pieces tie at epoch and keep their original relative order
        assert_eq!(names, ["new", "older", "undated-1", "undated-2"]);
    }

    #[test]
    fn from_json_reports_malformed_input() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn blurbs_fall_back_between_descriptions() {
        let mut p = piece("a", None);
        assert_eq!(p.card_blurb(), "");
        p.long_description = Some("long".to_string());
        assert_eq!(p.card_blurb(), "long");
        assert_eq!(p.detail_blurb(), "long");
        p.short_description = Some("short".to_string());
        assert_eq!(p.card_blurb(), "short");
        assert_eq!(p.detail_blurb(), "long");
    }
}
