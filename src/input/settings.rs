use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::input::{InputError, open_maybe_gz};

/// Optional JSON settings; every field may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TimelineSettings {
    pub tick_interval: Option<i64>,
    pub expanded_trims: Option<bool>,
    pub collapsed_tracks: Vec<String>,
    pub visible_tracks: Vec<String>,
    pub attribute_order: Vec<String>,
    pub track_colors: BTreeMap<String, String>,
}

pub fn load_settings(path: &Path) -> Result<TimelineSettings, InputError> {
    let reader = open_maybe_gz(path)?;
    serde_json::from_reader(reader).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}
