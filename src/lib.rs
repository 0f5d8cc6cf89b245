pub mod error;
pub mod validation;
pub mod config;
pub mod model;
pub mod db;
pub mod api;
pub mod ops;
pub mod browser;
pub mod queries;
pub mod app;
pub mod cli;
