pub mod config;
pub mod page_frame;
pub mod prefetch;
