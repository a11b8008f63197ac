use std::borrow::Cow;

use crate::model::event::Event;
use crate::model::profile::TimelineProfile;
use crate::model::track::{FlatTrack, Track, TrackType};

pub fn get_track_height(track: &Track, profile: &TimelineProfile) -> u32 {
    match track.track_type {
        TrackType::LineChart => profile.line_chart_track_height,
        TrackType::Default => profile.track_height,
    }
}

/// Stable sort by the start of each track's first item; empty tracks sort as 0.
pub fn sort_nested_tracks(tracks: &[Track]) -> Vec<&Track> {
    let mut sorted: Vec<&Track> = tracks.iter().collect();
    sorted.sort_by_key(|t| t.first_start().unwrap_or(0));
    sorted
}

/// Own items first, then each nested track depth-first.
pub fn collect_events(track: &Track, acc: &mut Vec<Event>) {
    acc.extend(track.items.iter().cloned());
    if let Some(nested) = &track.tracks {
        for t in nested {
            collect_events(t, acc);
        }
    }
}

pub fn collect_all_events(tracks: &[Track]) -> Vec<Event> {
    let mut acc = Vec::new();
    for t in tracks {
        collect_events(t, &mut acc);
    }
    acc
}

pub fn flatten_track<'t, F>(
    track: &'t Track,
    indent: u32,
    is_track_collapsed: &F,
    profile: &TimelineProfile,
) -> Vec<FlatTrack<'t>>
where
    F: Fn(&str) -> bool,
{
    let height = get_track_height(track, profile);
    let Some(nested) = &track.tracks else {
        return vec![FlatTrack {
            track: Cow::Borrowed(track),
            indent,
            height,
        }];
    };

    if is_track_collapsed(&track.uid) {
        let mut merged = track.clone();
        let mut items = Vec::new();
        collect_events(track, &mut items);
        merged.items = items;
        return vec![FlatTrack {
            track: Cow::Owned(merged),
            indent,
            height,
        }];
    }

    let mut out = vec![FlatTrack {
        track: Cow::Borrowed(track),
        indent,
        height,
    }];
    for child in sort_nested_tracks(nested) {
        out.extend(flatten_track(
            child,
            indent + profile.indent_step,
            is_track_collapsed,
            profile,
        ));
    }
    out
}

pub fn flatten_tracks<'t, F>(tracks: &'t [Track], is_track_collapsed: F) -> Vec<FlatTrack<'t>>
where
    F: Fn(&str) -> bool,
{
    flatten_tracks_with(tracks, is_track_collapsed, &TimelineProfile::default_v1())
}

pub fn flatten_tracks_with<'t, F>(
    tracks: &'t [Track],
    is_track_collapsed: F,
    profile: &TimelineProfile,
) -> Vec<FlatTrack<'t>>
where
    F: Fn(&str) -> bool,
{
    tracks
        .iter()
        .flat_map(|t| flatten_track(t, profile.indent_base, &is_track_collapsed, profile))
        .collect()
}

pub fn is_track_visible(track: &Track, visible_tracks: &[String]) -> bool {
    visible_tracks.iter().any(|v| *v == track.track_kind)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_tracks.rs"]
mod tests;
