pub mod builtin;
pub mod loader;
pub mod models;
pub mod source;
