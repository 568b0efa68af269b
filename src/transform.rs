pub mod engine;
pub mod filters;
pub mod processor;
pub mod traits;
