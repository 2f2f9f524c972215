use crate::error::{ErrorContext, Result};
use crate::types::{SubenumError, WordlistConfig};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of the wordlist file. Any key may be missing.
#[derive(Debug, Deserialize)]
struct StoredWordlists {
    amass: Option<String>,
    sublist3r: Option<String>,
    ffuf: Option<String>,
}

/// Loads and saves the wordlist mapping as a flat JSON object.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    defaults: WordlistConfig,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>, defaults: WordlistConfig) -> Self {
        Self {
            path: path.into(),
            defaults,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn defaults(&self) -> &WordlistConfig {
        &self.defaults
    }

    /// Reads the config file, or returns the defaults when there is none.
    /// A file that is not valid JSON is an error.
    pub fn load(&self) -> Result<WordlistConfig> {
        if !self.path.exists() {
            debug!("No config at {}, using default wordlists", self.path.display());
            return Ok(self.defaults.clone());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file {}", self.path.display()))?;

        let stored: StoredWordlists =
            serde_json::from_str(&contents).map_err(|source| SubenumError::ConfigParseError {
                path: self.path.display().to_string(),
                source,
            })?;

        Ok(WordlistConfig {
            amass: stored.amass.unwrap_or_else(|| self.defaults.amass.clone()),
            sublist3r: stored.sublist3r.unwrap_or_else(|| self.defaults.sublist3r.clone()),
            ffuf: stored.ffuf.unwrap_or_else(|| self.defaults.ffuf.clone()),
        })
    }

    /// Overwrites the config file with `config`, pretty-printed.
    pub fn save(&self, config: &WordlistConfig) -> Result<()> {
        let json = to_pretty_json(config)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write config file {}", self.path.display()))?;
        debug!("Saved wordlists to {}", self.path.display());
        Ok(())
    }
}

fn to_pretty_json(config: &WordlistConfig) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config
        .serialize(&mut serializer)
        .map_err(|e| SubenumError::ConfigError(format!("Failed to serialize wordlists: {}", e)))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> ConfigStore {
        ConfigStore::new(dir.join("wordlists_config.json"), WordlistConfig::default())
    }

    #[test]
    fn test_load_without_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        assert_eq!(store.load().unwrap(), WordlistConfig::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_writes_indented_json_in_tool_order() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(&WordlistConfig::default()).unwrap();

        let written = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            written,
            "{\n    \"amass\": \"amass_default_wordlist.txt\",\n    \"sublist3r\": \"sublist3r_default_wordlist.txt\",\n    \"ffuf\": \"ffuf_default_wordlist.txt\"\n}"
        );
    }

    #[test]
    fn test_save_after_load_is_byte_stable() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        let mut config = WordlistConfig::default();
        config.ffuf = "/usr/share/seclists/dns.txt".to_string();
        store.save(&config).unwrap();
        let first = fs::read(store.path()).unwrap();

        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(fs::read(store.path()).unwrap(), first);
    }

    #[test]
    fn test_missing_keys_are_filled_from_defaults() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.path(), r#"{"sublist3r": "names.txt"}"#).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.sublist3r, "names.txt");
        assert_eq!(config.amass, "amass_default_wordlist.txt");
        assert_eq!(config.ffuf, "ffuf_default_wordlist.txt");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.path(), "{ \"amass\": ").unwrap();

        match store.load() {
            Err(SubenumError::ConfigParseError { .. }) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
