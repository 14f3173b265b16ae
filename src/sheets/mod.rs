pub mod auth;
pub mod config;
pub mod domain;
pub mod http_client;
pub mod spreadsheet_manager;
pub mod value_range_factory;
