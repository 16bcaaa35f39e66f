//! JSON persistence for the in-memory dictionary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::memory::MemoryStore;

/// Get the dictionary path.
///
/// Uses `LOMAJI_RHYME_DICT` env var if set, otherwise
/// `~/.local/share/lomaji-rhyme/dictionary.json`.
pub fn dictionary_path() -> PathBuf {
    if let Ok(path) = std::env::var("LOMAJI_RHYME_DICT") {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("lomaji-rhyme")
        .join("dictionary.json")
}

/// Load a dictionary, or an empty one if the file does not exist yet.
///
/// Derived fields (features, word counts) are rebuilt after loading.
pub fn load_dictionary(path: &Path) -> Result<MemoryStore> {
    if !path.exists() {
        log::info!("No dictionary at {}, starting empty", path.display());
        return Ok(MemoryStore::new());
    }
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;
    let mut store: MemoryStore = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse dictionary: {}", path.display()))?;
    store.refresh();
    log::info!(
        "Loaded {} syllable(s), {} word(s) from {}",
        store.syllables().len(),
        store.words().len(),
        path.display()
    );
    Ok(store)
}

/// Save a dictionary, replacing the file atomically.
pub fn save_dictionary(path: &Path, store: &MemoryStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    atomic_write(path, json.as_bytes())
        .with_context(|| format!("Failed to write dictionary: {}", path.display()))?;
    log::info!(
        "Saved {} syllable(s), {} word(s) to {}",
        store.syllables().len(),
        store.words().len(),
        path.display()
    );
    Ok(())
}

/// Atomically write data to a file via temp file + rename.
fn atomic_write(target: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = target.with_extension("tmp");
    std::fs::write(&tmp_path, data)?;
    std::fs::rename(&tmp_path, target)?;
    Ok(())
}
