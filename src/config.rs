use std::{collections::BTreeMap, fs, io, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::counter::{FIRST_NUMBER, LAST_NUMBER};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("couldn't access settings file: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is malformed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("couldn't serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("couldn't determine the per-user application directory")]
    NoProjectDirs,
}

/// The persisted settings document: the number currently being served and
/// the sparse number -> clip mapping.
///
/// Keys of `number_sounds` are decimal number strings ("1".."50"); each
/// value is the path of a clip copy owned by the application, never the
/// user's original file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_number")]
    pub current_number: u8,
    #[serde(default)]
    pub number_sounds: BTreeMap<String, PathBuf>,
}

const fn default_number() -> u8 {
    FIRST_NUMBER
}

impl Default for Config {
    fn default() -> Self {
        Self {
            current_number: FIRST_NUMBER,
            number_sounds: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads the settings document, filling defaults for absent fields.
    ///
    /// A missing file is the first-run case: the default document is
    /// written out immediately and returned. A malformed file is an error
    /// so the session fails loudly instead of silently overwriting the
    /// user's state on the next mutation.
    pub fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(raw) => {
                let mut config: Self = toml::from_str(&raw)?;
                config.current_number = config.current_number.clamp(FIRST_NUMBER, LAST_NUMBER);
                Ok(config)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let config = Self::default();
                config.save(path)?;
                Ok(config)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Writes the whole document, via a sibling temp file and a rename so
    /// a crash mid-write can't leave a half-written file behind.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let mut path = directories::ProjectDirs::from("", "", "now_serving")
            .ok_or(ConfigError::NoProjectDirs)?
            .config_dir()
            .to_path_buf();
        path.push("config.toml");
        Ok(path)
    }

    pub fn sounds_path() -> Result<PathBuf, ConfigError> {
        let mut path = directories::ProjectDirs::from("", "", "now_serving")
            .ok_or(ConfigError::NoProjectDirs)?
            .data_dir()
            .to_path_buf();
        path.push("sounds");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.current_number = 17;
        config
            .number_sounds
            .insert("3".to_string(), PathBuf::from("/tmp/sound_3.wav"));
        config.save(&path).expect("save");

        let loaded = Config::load_or_init(&path).expect("load");
        assert_eq!(loaded, config);
    }

    /// First run: no file on disk yields the default document and writes
    /// it out so the next load finds it.
    #[test]
    fn missing_file_creates_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");

        let config = Config::load_or_init(&path).expect("load");
        assert_eq!(config.current_number, 1);
        assert!(config.number_sounds.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn absent_fields_fill_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "current_number = 12\n").expect("write");

        let config = Config::load_or_init(&path).expect("load");
        assert_eq!(config.current_number, 12);
        assert!(config.number_sounds.is_empty());
    }

    #[test]
    fn out_of_range_number_is_clamped() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "current_number = 200\n").expect("write");

        let config = Config::load_or_init(&path).expect("load");
        assert_eq!(config.current_number, 50);

        fs::write(&path, "current_number = 0\n").expect("write");
        let config = Config::load_or_init(&path).expect("load");
        assert_eq!(config.current_number, 1);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "current_number = \"not a number\"\n").expect("write");

        assert!(matches!(
            Config::load_or_init(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");

        Config::default().save(&path).expect("save");
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
