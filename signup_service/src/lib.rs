pub mod adapters;
pub mod factories;
pub mod settings;
