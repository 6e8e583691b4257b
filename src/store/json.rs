use std::fs;
use std::path::{Path, PathBuf};

use crate::app::Result;
use crate::store::{History, Store, BLACKLIST_FILE, HISTORY_FILE, TRUSTED_FILE};

/// Flat-file store: one pretty-printed JSON array of strings per document.
///
/// Writes go to a sibling `.tmp` file that is then renamed over the target,
/// so an interrupted write leaves the previous document intact.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn read_list(&self, file: &str) -> Result<Vec<String>> {
        let path = self.path_of(file);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn write_list(&self, file: &str, values: &[String]) -> Result<()> {
        let path = self.path_of(file);
        let tmp_path = self.path_of(&format!("{}.tmp", file));

        let body = serde_json::to_string_pretty(values)?;
        fs::write(&tmp_path, body)?;
        fs::rename(&tmp_path, &path)?;

        tracing::debug!(path = %path.display(), entries = values.len(), "Store document written");
        Ok(())
    }
}

impl Store for JsonStore {
    fn load_history(&self) -> Result<History> {
        Ok(self.read_list(HISTORY_FILE)?.into_iter().collect())
    }

    fn save_history(&self, history: &History) -> Result<()> {
        self.write_list(HISTORY_FILE, history.as_slice())
    }

    fn load_learned_domains(&self) -> Result<Vec<String>> {
        self.read_list(TRUSTED_FILE)
    }

    fn save_learned_domains(&self, domains: &[String]) -> Result<()> {
        self.write_list(TRUSTED_FILE, domains)
    }

    fn load_blacklist(&self) -> Result<Vec<String>> {
        self.read_list(BLACKLIST_FILE)
    }

    fn save_blacklist(&self, domains: &[String]) -> Result<()> {
        self.write_list(BLACKLIST_FILE, domains)
    }
}
