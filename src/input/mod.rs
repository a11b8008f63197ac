use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::model::track::Track;

pub mod settings;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Clone)]
pub struct TimelineInput {
    pub path: PathBuf,
    pub tracks: Vec<Track>,
}

/// Accepts either a bare array of tracks or `{"tracks": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TrackDocument {
    Bare(Vec<Track>),
    Wrapped { tracks: Vec<Track> },
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn load_tracks(path: &Path) -> Result<TimelineInput, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "track file {} does not exist",
            path.display()
        )));
    }
    let reader = open_maybe_gz(path)?;
    let doc: TrackDocument = serde_json::from_reader(reader).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let tracks = match doc {
        TrackDocument::Bare(tracks) => tracks,
        TrackDocument::Wrapped { tracks } => tracks,
    };

    validate_tracks(&tracks)?;

    info!(
        "loaded {} top-level tracks from {}",
        tracks.len(),
        path.display()
    );

    Ok(TimelineInput {
        path: path.to_path_buf(),
        tracks,
    })
}

pub fn validate_tracks(tracks: &[Track]) -> Result<(), InputError> {
    for track in tracks {
        if track.uid.is_empty() {
            return Err(InputError::InvalidInput(format!(
                "track of type {} has an empty uid",
                track.track_kind
            )));
        }
        for event in &track.items {
            if event.end < event.start {
                return Err(InputError::InvalidInput(format!(
                    "event in track {} ends ({}) before it starts ({})",
                    track.uid, event.end, event.start
                )));
            }
        }
        if let Some(nested) = &track.tracks {
            validate_tracks(nested)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
