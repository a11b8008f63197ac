use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::event::Event;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackType {
    #[default]
    Default,
    LineChart,
}

/// Per-event color override; `None` defers to the attribute or default color.
#[derive(Clone)]
pub struct ColorGetter(Arc<dyn Fn(&Event) -> Option<String> + Send + Sync>);

impl ColorGetter {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Event) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn color(&self, event: &Event) -> Option<String> {
        (self.0)(event)
    }
}

impl fmt::Debug for ColorGetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ColorGetter(..)")
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackConfig {
    pub event_color_getter: Option<ColorGetter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub uid: String,
    #[serde(rename = "type")]
    pub track_kind: String,
    #[serde(default)]
    pub items: Vec<Event>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<Track>>,
    #[serde(default)]
    pub track_type: TrackType,
    #[serde(skip)]
    pub event_color_getter: Option<ColorGetter>,
    #[serde(skip)]
    pub timeline_config: Option<TrackConfig>,
}

impl Track {
    pub fn new(uid: impl Into<String>, track_kind: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            track_kind: track_kind.into(),
            items: Vec::new(),
            tracks: None,
            track_type: TrackType::Default,
            event_color_getter: None,
            timeline_config: None,
        }
    }

    pub fn with_items(mut self, items: Vec<Event>) -> Self {
        self.items = items;
        self
    }

    pub fn with_tracks(mut self, tracks: Vec<Track>) -> Self {
        self.tracks = Some(tracks);
        self
    }

    pub fn with_track_type(mut self, track_type: TrackType) -> Self {
        self.track_type = track_type;
        self
    }

    pub fn first_start(&self) -> Option<i64> {
        self.items.first().map(|e| e.start)
    }
}

/// One display row produced by flattening a track tree.
#[derive(Debug, Clone)]
pub struct FlatTrack<'t> {
    pub track: Cow<'t, Track>,
    pub indent: u32,
    pub height: u32,
}
