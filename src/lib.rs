pub mod ai;
pub mod config;
pub mod error;
pub mod handlers;
pub mod meta;
pub mod models;
pub mod renderer;
pub mod state;
