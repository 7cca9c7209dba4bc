use std::{fs, io, path::Path, path::PathBuf};

use crate::{
    config::Config,
    counter::{FIRST_NUMBER, LAST_NUMBER},
};

#[derive(Debug, thiserror::Error)]
pub enum SoundError {
    /// user-facing validation message, shown inline next to the number box
    #[error("Please enter a valid number between 1 and 50")]
    InvalidNumber,
    #[error("couldn't copy the clip into the sound library: {0}")]
    Copy(#[from] io::Error),
}

/// Parses the number typed into the sound settings view. Rejects anything
/// non-numeric or outside the served range before any state is touched.
pub fn parse_number(input: &str) -> Result<u8, SoundError> {
    input
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|n| (FIRST_NUMBER..=LAST_NUMBER).contains(n))
        .ok_or(SoundError::InvalidNumber)
}

/// Manages the application-owned clip directory. Assigned clips are
/// copied in (never referenced in place) so a mapping stays playable and
/// deletable regardless of what happens to the user's original file.
pub struct SoundRegistry {
    dir: PathBuf,
}

impl SoundRegistry {
    pub fn new(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Copies `source` into the owned directory as `sound_<number>` with
    /// the source's extension, replacing any clip previously assigned to
    /// that number, and records the owned path in the mapping.
    pub fn assign(
        &self,
        config: &mut Config,
        number: u8,
        source: &Path,
    ) -> Result<PathBuf, SoundError> {
        check_number(number)?;
        let mut owned = self.dir.join(format!("sound_{number}"));
        if let Some(ext) = source.extension() {
            owned.set_extension(ext);
        }
        // a re-assign with a different extension would otherwise orphan
        // the old copy
        if let Some(previous) = config.number_sounds.get(&number.to_string()) {
            if *previous != owned {
                let _ = fs::remove_file(previous);
            }
        }
        fs::copy(source, &owned)?;
        config
            .number_sounds
            .insert(number.to_string(), owned.clone());
        Ok(owned)
    }

    /// Removes the mapping and its owned clip file. Returns whether there
    /// was anything to clear; a clip file already gone is not an error.
    pub fn clear(&self, config: &mut Config, number: u8) -> Result<bool, SoundError> {
        check_number(number)?;
        match config.number_sounds.remove(&number.to_string()) {
            Some(owned) => {
                let _ = fs::remove_file(owned);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The clip to play for `number`, if one is assigned and its file is
    /// still present. A mapping whose file vanished behaves as "no sound".
    pub fn lookup(&self, config: &Config, number: u8) -> Option<PathBuf> {
        let owned = config.number_sounds.get(&number.to_string())?;
        if owned.exists() {
            Some(owned.clone())
        } else {
            log::debug!(
                "clip for number {number} is mapped but missing from {}",
                owned.display()
            );
            None
        }
    }

    /// (number, clip file name) pairs in ascending numeric order, for the
    /// mapping list in the sound settings view.
    pub fn list(&self, config: &Config) -> Vec<(u8, String)> {
        let mut entries: Vec<(u8, String)> = config
            .number_sounds
            .iter()
            .filter_map(|(key, owned)| {
                let number = key.parse::<u8>().ok()?;
                let name = owned.file_name()?.to_string_lossy().into_owned();
                Some((number, name))
            })
            .collect();
        entries.sort_unstable_by_key(|(number, _)| *number);
        entries
    }
}

fn check_number(number: u8) -> Result<(), SoundError> {
    if (FIRST_NUMBER..=LAST_NUMBER).contains(&number) {
        Ok(())
    } else {
        Err(SoundError::InvalidNumber)
    }
}
