//! Routed views. Each one renders the whole mount content for its route
//! through [`crate::shared::page_frame::PageFrame`]; re-rendering fully
//! replaces whatever the previous route left behind.

pub mod category_detail;
pub mod category_list;
pub mod item_detail;
pub mod not_found;
pub mod status;

pub use category_detail::CategoryDetail;
pub use category_list::CategoryList;
pub use item_detail::ItemDetail;
pub use not_found::NotFound;
