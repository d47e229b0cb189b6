/// `id` attribute of the element bounding the navigation region.
pub const NAV_CONTAINER_ID: &str = "navigation";
/// `class` attribute carried by each label element inside the region.
pub const NAV_ITEM_CLASS: &str = "nav_items";
/// Canonical fixture page, relative to the crate root.
pub const FIXTURE_PATH: &str = "AboutPython.html";

pub mod extractor;
pub mod models;
pub mod scanner;
