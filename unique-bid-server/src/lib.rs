//! Unique Bid Server - HTTP API for the lowest unique bid service

pub mod api;
pub mod cli;
pub mod config;
pub mod server;
