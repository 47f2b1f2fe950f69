//! Models Module - Data Structures & Configuration
//!
//! Tipe data baris database, konfigurasi aplikasi, dan error.
//! Semua modul lain mengambil tipe dari sini.

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
