pub mod camera_section;
pub mod feedback;
pub mod handlers;
pub mod header;
pub mod loading;
pub mod results;
pub mod upload_section;
pub mod utils;
