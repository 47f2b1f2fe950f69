//! Utils Module - Helper Functions & Shared Utilities
//!
//! Konstanta, flash message, dan template view yang dipakai di seluruh aplikasi.

pub mod constants;
pub mod flash;
pub mod views;

pub use constants::*;
pub use flash::*;
pub use views::*;
