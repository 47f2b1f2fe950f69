//! Providers Module - Database Access
//!
//! Jalur data: koneksi SQLite dan model CRUD per tabel.

pub mod artikel;
pub mod database;
pub mod kategori;
pub mod lookup;
pub mod planner;

pub use artikel::*;
pub use database::*;
pub use kategori::*;
pub use lookup::*;
pub use planner::*;
