pub mod metadata;
pub mod registry;
