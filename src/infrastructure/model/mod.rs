mod store;

pub use store::{ModelLoadError, ModelStore};
