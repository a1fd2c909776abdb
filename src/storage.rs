use crate::error::Result;
use crate::model::TaskList;
use directories::ProjectDirs;
use fs2::FileExt;
use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "TALLY_DATA_DIR";
pub const DATA_FILE_NAME: &str = "tasks.json";

/// Where the task list is persisted between runs.
pub trait Storage {
    fn load(&self) -> Result<TaskList>;
    fn write(&self, tasks: &TaskList) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default data file: `$TALLY_DATA_DIR/tasks.json` if set, otherwise the
    /// platform data directory.
    pub fn default_path() -> Option<PathBuf> {
        // ISOLATION: Check env var first
        if let Ok(dir) = env::var(DATA_DIR_ENV) {
            return Some(PathBuf::from(dir).join(DATA_FILE_NAME));
        }
        ProjectDirs::from("com", "tally", "tally").map(|proj| proj.data_dir().join(DATA_FILE_NAME))
    }

    /// `tasks.json` -> `tasks.json.bak`
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".bak");
        self.path.with_file_name(name)
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Runs `f` while holding an exclusive lock on a sibling `.lock` file.
    pub fn with_lock<T, F>(path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;
        lock_file.lock_exclusive()?;
        let result = f();
        let _ = FileExt::unlock(&lock_file);
        result
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

impl Storage for LocalStorage {
    fn load(&self) -> Result<TaskList> {
        if !self.path.exists() {
            return Ok(TaskList::new());
        }
        let json = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<TaskList>(&json) {
            Ok(tasks) => {
                tracing::debug!(path = %self.path.display(), count = tasks.count(), "loaded tasks");
                Ok(tasks)
            }
            // Corrupt store: move it aside so the next write cannot clobber it
            Err(e) => {
                let backup = self.backup_path();
                fs::rename(&self.path, &backup)?;
                tracing::warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %e,
                    "task file is corrupt; moved aside and starting empty"
                );
                Ok(TaskList::new())
            }
        }
    }

    fn write(&self, tasks: &TaskList) -> Result<()> {
        self.ensure_parent()?;
        let json = serde_json::to_string_pretty(tasks)?;
        Self::with_lock(&self.path, || Self::atomic_write(&self.path, &json))?;
        tracing::info!(path = %self.path.display(), count = tasks.count(), "saved tasks");
        Ok(())
    }
}
