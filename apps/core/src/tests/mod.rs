//! Test Module
//!
//! Cross-module test suites for the Sentiment Aura backend.
//!
//! ## Test Categories
//! - `aura_tests`: end-to-end scoring behaviour and properties over arbitrary text
//! - `server_tests`: HTTP routes, error mapping and CORS against a live listener
//! - `config_tests`: environment-driven configuration

pub mod config_tests;
