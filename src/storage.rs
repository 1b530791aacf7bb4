//! The persistence gateway: a storage trait with a JSON-file
//! implementation and an in-memory one.
//!
//! On-disk layout is two pretty-printed files in the platform config
//! directory: `quests.json` (the full ledger) and `user.json` (the
//! progress record). Reads fall back to the documented default records
//! when a file is missing or unreadable; writes always surface their
//! errors so mutating operations can roll back.

use crate::progress::UserProgress;
use crate::quests::Quest;
use directories::ProjectDirs;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const QUESTS_FILE: &str = "quests.json";
const USER_FILE: &str = "user.json";

/// Durable storage for the quest ledger and progress record.
///
/// Implementations are read-modify-write with no transactions; the
/// progression engine treats any write error as a signal to roll back.
pub trait Storage {
    fn load_quests(&self) -> io::Result<Vec<Quest>>;
    fn save_quests(&self, quests: &[Quest]) -> io::Result<()>;
    fn load_user_progress(&self) -> io::Result<UserProgress>;
    fn save_user_progress(&self, progress: &UserProgress) -> io::Result<()>;
}

/// JSON-file storage in the platform config directory.
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Sets up storage at the platform config location, creating the
    /// directory if needed.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "voyage").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine config directory")
        })?;
        let data_dir = project_dirs.config_dir().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// Storage rooted at an explicit directory. Used by tests and by
    /// anyone who wants their saves somewhere specific.
    pub fn with_dir(data_dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Storage for FileStorage {
    fn load_quests(&self) -> io::Result<Vec<Quest>> {
        read_json_or_default(&self.data_dir.join(QUESTS_FILE))
    }

    fn save_quests(&self, quests: &[Quest]) -> io::Result<()> {
        write_json(&self.data_dir.join(QUESTS_FILE), &quests)
    }

    fn load_user_progress(&self) -> io::Result<UserProgress> {
        read_json_or_default(&self.data_dir.join(USER_FILE))
    }

    fn save_user_progress(&self, progress: &UserProgress) -> io::Result<()> {
        write_json(&self.data_dir.join(USER_FILE), progress)
    }
}

/// Reads a JSON file, returning `T::default()` when it is missing or does
/// not parse. Other I/O errors propagate.
fn read_json_or_default<T: Default + DeserializeOwned>(path: &Path) -> io::Result<T> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(e),
    };
    match serde_json::from_str(&json) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!("unreadable save file {}: {e}", path.display());
            Ok(T::default())
        }
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    quests: RefCell<Vec<Quest>>,
    progress: RefCell<UserProgress>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load_quests(&self) -> io::Result<Vec<Quest>> {
        Ok(self.quests.borrow().clone())
    }

    fn save_quests(&self, quests: &[Quest]) -> io::Result<()> {
        *self.quests.borrow_mut() = quests.to_vec();
        Ok(())
    }

    fn load_user_progress(&self) -> io::Result<UserProgress> {
        Ok(self.progress.borrow().clone())
    }

    fn save_user_progress(&self, progress: &UserProgress) -> io::Result<()> {
        *self.progress.borrow_mut() = progress.clone();
        Ok(())
    }
}
