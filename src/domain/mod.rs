pub mod ascension;
pub mod balloon;
pub mod controls;
pub mod error;
pub mod factory;
pub mod fleet;
pub mod geometry;
pub mod scene;
