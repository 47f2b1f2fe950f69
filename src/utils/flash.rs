//! One-shot flash messages
//!
//! Pesan status yang ditampilkan sekali sesudah redirect.
//! Menggunakan DashMap untuk concurrent access tanpa lock contention.
//!
//! Features:
//! - Entry di-key dengan id acak (UUID v4) yang dibawa cookie `flash_id`
//! - Dibaca sekali lalu dihapus (take)
//! - TTL-based expiration (5 menit default) + background cleanup
//! - Bisa membawa input form lama supaya form terisi ulang

use axum::http::{header, HeaderMap};
use dashmap::DashMap;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::utils::constants::{FLASH_CLEANUP_INTERVAL_SECS, FLASH_COOKIE, FLASH_TTL_SECS};

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

/// Everything carried across one redirect
#[derive(Debug, Clone, Default, Serialize)]
pub struct Flash {
    pub messages: Vec<FlashMessage>,
    /// Previously submitted form input
    pub old: HashMap<String, String>,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Self::message(FlashLevel::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::message(FlashLevel::Error, text)
    }

    fn message(level: FlashLevel, text: impl Into<String>) -> Self {
        Self {
            messages: vec![FlashMessage {
                level,
                text: text.into(),
            }],
            old: HashMap::new(),
        }
    }

    /// Keep submitted input for the next page
    pub fn with_input(mut self, old: HashMap<String, String>) -> Self {
        self.old = old;
        self
    }

    /// First message of the given level
    pub fn first(&self, level: FlashLevel) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.level == level)
            .map(|m| m.text.as_str())
    }
}

/// Stored entry with its creation time for TTL checks
#[derive(Debug, Clone)]
struct FlashEntry {
    flash: Flash,
    created_at: Instant,
}

impl FlashEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Server-side flash storage
#[derive(Clone)]
pub struct FlashStore {
    store: Arc<DashMap<String, FlashEntry>>,
    ttl: Duration,
}

impl Default for FlashStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FlashStore {
    /// Store with the default TTL (5 menit)
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(FLASH_TTL_SECS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            store: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Save a flash and return its id
    pub fn put(&self, flash: Flash) -> String {
        let id = uuid::Uuid::new_v4().simple().to_string();
        self.store.insert(
            id.clone(),
            FlashEntry {
                flash,
                created_at: Instant::now(),
            },
        );
        debug!("💬 FLASH SET: {}", id);
        id
    }

    /// Remove and return a flash; expired entries count as missing
    pub fn take(&self, id: &str) -> Option<Flash> {
        let (_, entry) = self.store.remove(id)?;
        if entry.is_expired(self.ttl) {
            debug!("📭 FLASH EXPIRED: {}", id);
            return None;
        }
        Some(entry.flash)
    }

    /// Remove expired entries
    pub fn cleanup_expired(&self) -> usize {
        let before = self.store.len();
        self.store.retain(|_, entry| !entry.is_expired(self.ttl));
        let removed = before.saturating_sub(self.store.len());
        if removed > 0 {
            info!("🧹 FLASH CLEANUP: {} expired entries removed", removed);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Background task: cleanup expired flash entries every minute
pub fn start_cleanup_task(store: FlashStore) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(Duration::from_secs(FLASH_CLEANUP_INTERVAL_SECS));
        loop {
            interval.tick().await;
            store.cleanup_expired();
        }
    })
}

// ============================================
// Cookie helpers
// ============================================

/// Read the flash id from the `Cookie` header(s)
pub fn flash_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value pointing at a stored flash
pub fn set_cookie(id: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        FLASH_COOKIE, id, FLASH_TTL_SECS
    )
}

/// `Set-Cookie` value that removes the flash cookie
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", FLASH_COOKIE)
}
