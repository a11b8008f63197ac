//! Tick, trim and track layout engine for clinical event timelines.
//!
//! Events are bucketed into fixed-width ticks ([`get_full_ticks`]), long
//! empty stretches are collapsed into trims ([`get_trimmed_ticks`]), and
//! points are mapped between raw and trimmed coordinates for plotting and
//! hit testing.

pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use model::event::{AttributeKey, Event, EventAttribute, EventData, get_attribute_value};
pub use model::tick::Tick;
pub use model::track::{FlatTrack, Track, TrackType};
pub use pipeline::TimelineError;
pub use pipeline::stage1_ticks::get_full_ticks;
pub use pipeline::stage2_trim::get_trimmed_ticks;
pub use pipeline::stage3_coords::{
    get_point_in_trimmed_space, get_point_in_trimmed_space_from_screen_read,
};
pub use pipeline::stage4_tracks::{flatten_tracks, sort_nested_tracks};
