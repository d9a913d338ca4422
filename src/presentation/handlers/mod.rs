mod categories;
mod classify;
mod status;

pub use categories::categories_handler;
pub use classify::{ClassifyResponse, ErrorResponse, classify_handler};
pub use status::status_handler;
