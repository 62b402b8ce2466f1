//! Integration tests

mod engine_test;
mod fixtures;
mod scan_test;
