//! Utilities for date formatting
//!
//! Provides consistent date formatting across the views.

use crate::catalog::Piece;

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2025-01-12" or "2025-01-12T14:02:26Z" -> "12.01.2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Display date for a piece; an unset creation date renders as a dash
/// instead of an epoch timestamp.
pub fn format_piece_date(piece: &Piece) -> String {
    match piece.date_created.as_deref() {
        Some(raw) => format_date(raw),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-01-12"), "12.01.2025");
        assert_eq!(format_date("2025-01-12T14:02:26.123Z"), "12.01.2025");
    }

    #[test]
    fn test_invalid_format_passes_through() {
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_undated_piece_renders_as_dash() {
        let piece = Piece {
            name: "OLD".to_string(),
            img: "img/old.png".to_string(),
            date_created: None,
            short_description: None,
            long_description: None,
        };
        assert_eq!(format_piece_date(&piece), "—");
    }
}
