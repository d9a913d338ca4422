pub mod auth;
pub mod extraction;
pub mod model;
pub mod observability;
