//! Hash-fragment routing. Parsing is total: every input string maps to
//! exactly one [`Route`], so malformed fragments can never fail navigation.

use std::borrow::Cow;

/// User intent derived from the current hash fragment. Recomputed on every
/// navigation event, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Category { name: String },
    Item { category: String, piece: String },
    NotFound,
}

impl Route {
    /// Parses a hash fragment. Accepts the three shapes the app itself
    /// emits (``, `category/<name>`, `item/<category>/<piece>`) plus
    /// whatever a user hand-types; everything else is `NotFound`.
    ///
    /// Segments are percent-decoded. A segment that does not decode to
    /// valid UTF-8 turns the whole fragment into `NotFound`.
    pub fn parse(fragment: &str) -> Route {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Root,
            ["category", name] => match decode_segment(name) {
                Some(name) => Route::Category { name },
                None => Route::NotFound,
            },
            ["item", category, piece] => {
                match (decode_segment(category), decode_segment(piece)) {
                    (Some(category), Some(piece)) => Route::Item { category, piece },
                    _ => Route::NotFound,
                }
            }
            _ => Route::NotFound,
        }
    }

    /// Fragment for "go to category". Round-trips through [`Route::parse`].
    pub fn category_fragment(name: &str) -> String {
        format!("category/{}", urlencoding::encode(name))
    }

    /// Fragment for "go to item". Round-trips through [`Route::parse`].
    pub fn item_fragment(category: &str, piece: &str) -> String {
        format!(
            "item/{}/{}",
            urlencoding::encode(category),
            urlencoding::encode(piece)
        )
    }
}

fn decode_segment(segment: &str) -> Option<String> {
    urlencoding::decode(segment).ok().map(Cow::into_owned)
}
