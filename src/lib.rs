pub mod cli;
pub mod config;
pub mod db;
pub mod dtos;
pub mod error;
pub mod models;
pub mod utils;
