pub mod binding;
pub mod config;
pub mod dataset;
pub mod derive;
pub mod error;
pub mod filter;
pub mod layout;
pub mod render;
pub mod server;
// cmd and reports are binary modules (terminal output only).
