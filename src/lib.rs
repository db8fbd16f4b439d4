//! SINU Ingredient Checker (terminal client)

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod photo;
pub mod render;
pub mod runner;
