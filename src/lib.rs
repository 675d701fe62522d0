pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod listing;
pub mod output;
pub mod repo;
pub mod types;
