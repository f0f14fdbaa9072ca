//! # Data Transfer Objects

pub mod run_config;
