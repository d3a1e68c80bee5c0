pub mod controllers;
pub mod decorators;
pub mod errors;
pub mod helpers;
pub mod protocols;
