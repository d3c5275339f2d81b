pub mod config;
pub mod console;
pub mod error;
pub mod presets;
pub mod routes;
pub mod script;
pub mod state;
pub mod translate;
