//! Core Module - Slugs & Upload Handling
//!
//! Logika inti yang tidak bergantung pada HTTP maupun database:
//! pembuatan slug artikel dan validasi/penyimpanan gambar upload.

pub mod slug;
pub mod upload;

pub use self::slug::*;
pub use self::upload::*;
