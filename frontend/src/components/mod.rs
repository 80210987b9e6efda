pub mod footer;
pub mod image_slider;
pub mod nav;
pub mod navbar;
pub mod results;
pub mod steps;
pub mod upload_section;
pub mod utils;
