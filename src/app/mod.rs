pub mod events;
pub mod settings;
pub mod state;
