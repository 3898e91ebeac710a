//! tests/api/main.rs

mod clients_get;
