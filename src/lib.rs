pub mod api;
pub mod config;
pub mod crypto;
pub mod db;
pub mod inference;
pub mod models;
pub mod state;
