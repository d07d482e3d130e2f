//! File-backed save state with a SHA-256 body checksum.
//!
//! The file format is two lines of JSON:
//! - Line 1: header with `format_version` and `sha256_hex` of the body line.
//! - Line 2: the body with the run and rotation state.
//!
//! Saving writes a sibling temp file and renames it over the target, so a
//! crash mid-write leaves the previous save intact. Loading validates the
//! JSON shape and the checksum; a corrupt save loads as a fresh one when the
//! lenient entry point is used.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::state::{RotationState, RunState};

pub const FORMAT_VERSION: u16 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
struct FileHeader {
    format_version: u16,
    sha256_hex: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SaveData {
    pub run: RunState,
    pub rotation: RotationState,
}

impl Default for SaveData {
    fn default() -> Self {
        Self { run: RunState::idle(), rotation: RotationState::empty() }
    }
}

fn compute_body_sha256(body_json: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body_json.as_bytes());
    let result = hasher.finalize();
    format!("{result:064x}")
}

/// Writes the save atomically: temp file first, then rename over the target.
pub fn save_state(path: &Path, run: &RunState, rotation: &RotationState) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let body = SaveData { run: run.clone(), rotation: rotation.clone() };
    let body_json = serde_json::to_string(&body).map_err(io::Error::other)?;
    let header =
        FileHeader { format_version: FORMAT_VERSION, sha256_hex: compute_body_sha256(&body_json) };
    let header_json = serde_json::to_string(&header).map_err(io::Error::other)?;

    let tmp_path = path.with_extension("tmp");
    {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{header_json}")?;
        writeln!(writer, "{body_json}")?;
        writer.flush()?;
    }
    fs::rename(&tmp_path, path)
}

#[derive(Debug)]
pub enum StateLoadError {
    Io(io::Error),
    EmptyFile,
    InvalidHeader { message: String },
    InvalidBody { message: String },
    MissingBody,
    ChecksumMismatch,
    UnsupportedVersion { found: u16 },
}

impl fmt::Display for StateLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "save file I/O error: {e}"),
            Self::EmptyFile => write!(f, "save file is empty"),
            Self::InvalidHeader { message } => write!(f, "invalid save header: {message}"),
            Self::InvalidBody { message } => write!(f, "invalid save body: {message}"),
            Self::MissingBody => write!(f, "save file has no body line"),
            Self::ChecksumMismatch => write!(f, "save body does not match its checksum"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported save format version {found}")
            }
        }
    }
}

impl std::error::Error for StateLoadError {}

/// Load and validate a save file.
pub fn load_state(path: &Path) -> Result<SaveData, StateLoadError> {
    let content = fs::read_to_string(path).map_err(StateLoadError::Io)?;
    if content.is_empty() {
        return Err(StateLoadError::EmptyFile);
    }
    let mut lines = content.lines();
    let header_line = lines.next().ok_or(StateLoadError::EmptyFile)?;
    let header: FileHeader = serde_json::from_str(header_line)
        .map_err(|e| StateLoadError::InvalidHeader { message: e.to_string() })?;
    if header.format_version != FORMAT_VERSION {
        return Err(StateLoadError::UnsupportedVersion { found: header.format_version });
    }

    let body_line = lines.next().ok_or(StateLoadError::MissingBody)?;
    if compute_body_sha256(body_line) != header.sha256_hex {
        return Err(StateLoadError::ChecksumMismatch);
    }
    serde_json::from_str(body_line)
        .map_err(|e| StateLoadError::InvalidBody { message: e.to_string() })
}

/// Load a save, treating a missing or corrupt file as a fresh one. The error,
/// if any, is returned alongside so callers can report it.
pub fn load_state_lenient(path: &Path) -> (SaveData, Option<StateLoadError>) {
    if !path.exists() {
        return (SaveData::default(), None);
    }
    match load_state(path) {
        Ok(data) => (data, None),
        Err(error) => (SaveData::default(), Some(error)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::state::CompletionRecord;
    use crate::types::{DungeonId, ModifierId, NarrativeId, TrainerId};

    fn sample_save() -> SaveData {
        let mut defeated = BTreeSet::new();
        defeated.insert(TrainerId(21));
        defeated.insert(TrainerId(22));
        SaveData {
            run: RunState {
                active: true,
                dungeon: DungeonId(1),
                room_index: 2,
                score: 120,
                narrative: NarrativeId(4),
                modifier: ModifierId(2),
                defeated,
                boss_defeated: false,
            },
            rotation: RotationState {
                daily_seed: 1_037_596,
                weekly_seed: 129_699,
                selected_narratives: vec![NarrativeId(1), NarrativeId(4), NarrativeId(5)],
                selected_modifiers: vec![ModifierId(3), ModifierId(2), ModifierId(10)],
                completions: vec![CompletionRecord {
                    dungeon: DungeonId(0),
                    daily_seed: 1_037_595,
                    weekly_seed: 129_699,
                }],
            },
        }
    }

    #[test]
    fn save_and_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dungeon_state.json");
        let save = sample_save();

        save_state(&path, &save.run, &save.rotation).expect("save");
        let loaded = load_state(&path).expect("load");
        assert_eq!(loaded, save);
    }

    #[test]
    fn save_overwrites_atomically() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dungeon_state.json");
        let save = sample_save();

        save_state(&path, &RunState::idle(), &RotationState::empty()).expect("first save");
        save_state(&path, &save.run, &save.rotation).expect("second save");
        assert!(!path.with_extension("tmp").exists());
        assert_eq!(load_state(&path).expect("load"), save);
    }

    #[test]
    fn tampered_body_fails_the_checksum() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dungeon_state.json");
        let save = sample_save();
        save_state(&path, &save.run, &save.rotation).expect("save");

        let content = fs::read_to_string(&path).expect("read");
        let tampered = content.replace("\"score\":120", "\"score\":511");
        assert_ne!(content, tampered);
        fs::write(&path, tampered).expect("write");

        assert!(matches!(load_state(&path), Err(StateLoadError::ChecksumMismatch)));
    }

    #[test]
    fn truncated_file_reports_missing_body() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dungeon_state.json");
        let save = sample_save();
        save_state(&path, &save.run, &save.rotation).expect("save");

        let content = fs::read_to_string(&path).expect("read");
        let header_only = content.lines().next().expect("header").to_string() + "\n";
        fs::write(&path, header_only).expect("write");

        assert!(matches!(load_state(&path), Err(StateLoadError::MissingBody)));
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dungeon_state.json");
        let body = serde_json::to_string(&SaveData::default()).expect("body");
        let header = serde_json::to_string(&FileHeader {
            format_version: 99,
            sha256_hex: compute_body_sha256(&body),
        })
        .expect("header");
        fs::write(&path, format!("{header}\n{body}\n")).expect("write");

        assert!(matches!(
            load_state(&path),
            Err(StateLoadError::UnsupportedVersion { found: 99 })
        ));
    }

    #[test]
    fn lenient_load_falls_back_to_fresh_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dungeon_state.json");

        let (missing, error) = load_state_lenient(&path);
        assert_eq!(missing, SaveData::default());
        assert!(error.is_none());

        fs::write(&path, "not json\n").expect("write");
        let (corrupt, error) = load_state_lenient(&path);
        assert_eq!(corrupt, SaveData::default());
        assert!(error.is_some());
    }
}
