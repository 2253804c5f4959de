// src/lib.rs
pub mod app;
pub mod config;
pub mod data;
pub mod env;
pub mod error;
pub mod sanitize;
pub mod state;
pub mod ui;

pub use app::PortalApp;
