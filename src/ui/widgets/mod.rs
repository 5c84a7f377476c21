pub mod controls;
pub mod help;
pub mod sky;
pub mod status;
