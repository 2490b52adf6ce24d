//! Integration tests for speedctl

mod cli_test;
mod config_test;
mod session_test;
