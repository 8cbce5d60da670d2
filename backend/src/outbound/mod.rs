//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: SQLite-backed stores using Diesel through
//!   `diesel-async` and `bb8`.

pub mod persistence;
