pub mod icons;
pub mod page_header;
pub mod section;
pub mod status_badge;
