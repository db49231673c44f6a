pub mod catalog;
pub mod date_utils;
pub mod routing;
