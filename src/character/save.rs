use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::class::PlayerClass;
use super::player::Player;
use crate::core::constants::{SAVE_EXTENSION, SAVE_VERSION};
use crate::core::errors::SaveError;

/// On-disk snapshot: a header followed by the player's fields, flat.
#[derive(Serialize)]
struct SaveDataRef<'a> {
    version: u32,
    saved_at: i64,
    #[serde(flatten)]
    player: &'a Player,
}

#[derive(Deserialize)]
struct SaveData {
    version: u32,
    #[serde(default)]
    saved_at: i64,
    #[serde(flatten)]
    player: Player,
}

#[derive(Debug, Clone)]
pub struct SaveInfo {
    pub slot: String,
    pub filename: String,
    pub character_name: String,
    pub class: Option<PlayerClass>,
    pub level: u32,
    pub saved_at: i64,
    pub is_corrupted: bool,
}

/// Reads and writes JSON player snapshots in a single directory.
pub struct SaveManager {
    save_dir: PathBuf,
}

impl SaveManager {
    /// Uses `save_dir`, creating it if needed.
    pub fn new(save_dir: impl Into<PathBuf>) -> Result<Self, SaveError> {
        let save_dir = save_dir.into();
        fs::create_dir_all(&save_dir)?;
        Ok(Self { save_dir })
    }

    /// Platform data directory, e.g. `~/.local/share/ember-quest/saves`.
    pub fn default_dir() -> Result<PathBuf, SaveError> {
        let project_dirs =
            ProjectDirs::from("", "", "ember-quest").ok_or(SaveError::NoSaveDirectory)?;
        Ok(project_dirs.data_dir().join("saves"))
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    pub fn path_for(&self, slot: &str) -> Result<PathBuf, SaveError> {
        let sanitized = sanitize_name(slot);
        if sanitized.is_empty() {
            return Err(SaveError::InvalidSlot(slot.to_string()));
        }
        Ok(self
            .save_dir
            .join(format!("{}.{}", sanitized, SAVE_EXTENSION)))
    }

    /// Writes `player` to `<slot>.json`, returning the path written.
    pub fn save(&self, player: &Player, slot: &str) -> Result<PathBuf, SaveError> {
        let path = self.path_for(slot)?;
        let data = SaveDataRef {
            version: SAVE_VERSION,
            saved_at: Utc::now().timestamp(),
            player,
        };
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(&path, json)?;
        info!("saved {} to {}", player.character.name, path.display());
        Ok(path)
    }

    pub fn load(&self, slot: &str) -> Result<Player, SaveError> {
        let path = self.path_for(slot)?;
        load_file(&path)
    }

    pub fn exists(&self, slot: &str) -> bool {
        self.path_for(slot).map(|p| p.exists()).unwrap_or(false)
    }

    pub fn delete(&self, slot: &str) -> Result<(), SaveError> {
        let path = self.path_for(slot)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(SaveError::NotFound(path)),
            Err(e) => Err(e.into()),
        }
    }

    /// Every `.json` file in the save directory, most recently saved first.
    /// Unreadable files are listed with `is_corrupted` set.
    pub fn list_saves(&self) -> Result<Vec<SaveInfo>, SaveError> {
        let mut saves = Vec::new();

        for entry in fs::read_dir(&self.save_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some(SAVE_EXTENSION) {
                continue;
            }

            let filename = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("")
                .to_string();
            let slot = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("")
                .to_string();

            match read_save_data(&path) {
                Ok(data) => saves.push(SaveInfo {
                    slot,
                    filename,
                    character_name: data.player.character.name.clone(),
                    class: Some(data.player.class),
                    level: data.player.character.level,
                    saved_at: data.saved_at,
                    is_corrupted: false,
                }),
                Err(e) => {
                    warn!("unreadable save {}: {}", path.display(), e);
                    saves.push(SaveInfo {
                        slot,
                        filename,
                        character_name: "[CORRUPTED]".to_string(),
                        class: None,
                        level: 0,
                        saved_at: 0,
                        is_corrupted: true,
                    });
                }
            }
        }

        saves.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(saves)
    }
}

/// Loads and validates a snapshot from an explicit path.
pub fn load_file(path: &Path) -> Result<Player, SaveError> {
    let data = read_save_data(path)?;
    info!("loaded {} from {}", data.player.character.name, path.display());
    Ok(data.player)
}

fn read_save_data(path: &Path) -> Result<SaveData, SaveError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SaveError::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };

    let data: SaveData = serde_json::from_str(&json)?;
    if data.version > SAVE_VERSION {
        return Err(SaveError::UnsupportedVersion {
            expected: SAVE_VERSION,
            found: data.version,
        });
    }
    data.player.validate()?;
    Ok(data)
}

pub fn sanitize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}
