//! Persisted best score
//!
//! A single integer that outlives sessions. Storage failures never reach the
//! simulation: an unreadable value is treated as 0 and a failed write is
//! logged and dropped.

use serde::{Deserialize, Serialize};

/// Storage for the best score
pub trait BestScoreStore {
    /// Stored best score, or 0 if missing or unreadable
    fn load(&self) -> u32;
    /// Replace the stored best score
    fn save(&mut self, score: u32);
}

/// Parse a stored value, accepting both `{"best": n}` and a bare integer
pub fn parse_stored(raw: &str) -> Option<u32> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Record(BestScoreRecord),
        Bare(u32),
    }

    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<Stored>(raw) {
        Ok(Stored::Record(record)) => Some(record.best),
        Ok(Stored::Bare(best)) => Some(best),
        Err(_) => None,
    }
}

/// On-disk record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub best: u32,
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.best
    }

    fn save(&mut self, score: u32) {
        self.best = score;
    }
}

/// JSON file store (native only)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BestScoreStore for FileStore {
    fn load(&self) -> u32 {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return 0,
            Err(e) => {
                log::warn!("Failed to read best score from {}: {}", self.path.display(), e);
                return 0;
            }
        };
        match parse_stored(&raw) {
            Some(best) => best,
            None => {
                log::warn!("Ignoring corrupt best score in {}", self.path.display());
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        let json = match serde_json::to_string(&BestScoreRecord { best: score }) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode best score: {}", e);
                return;
            }
        };
        match std::fs::write(&self.path, json) {
            Ok(()) => log::info!("Best score saved ({})", score),
            Err(e) => log::warn!("Failed to write best score to {}: {}", self.path.display(), e),
        }
    }
}

/// Browser LocalStorage store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "pongHighScore";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl BestScoreStore for LocalStorageStore {
    fn load(&self) -> u32 {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, best score defaults to 0");
            return 0;
        };
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(raw)) => parse_stored(&raw).unwrap_or_else(|| {
                log::warn!("Ignoring corrupt best score {:?}", raw);
                0
            }),
            _ => 0,
        }
    }

    fn save(&mut self, score: u32) {
        let Some(storage) = Self::storage() else {
            return;
        };
        // Bare integer keeps the key readable by older pages
        if storage
            .set_item(Self::STORAGE_KEY, &score.to_string())
            .is_ok()
        {
            log::info!("Best score saved ({})", score);
        } else {
            log::warn!("Failed to save best score");
        }
    }
}
