pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod filters;
pub mod lookup;
pub mod models;
pub mod session;
pub mod utils;
