use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::warn;

use crate::input::InputError;
use crate::input::settings::{TimelineSettings, load_settings};
use crate::model::track::{ColorGetter, Track, TrackConfig};

pub const DEFAULT_TICK_INTERVAL: i64 = 30;

#[derive(Debug, Parser)]
#[command(name = "clinical-timeline", version, about)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG is set.
    #[arg(long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lay out a track tree and write tick, row and event reports.
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Track tree as JSON, optionally gzip-compressed.
    #[arg(long)]
    pub input: PathBuf,
    #[arg(long)]
    pub out: PathBuf,
    #[arg(long, allow_negative_numbers = true)]
    pub tick_interval: Option<i64>,
    #[arg(long)]
    pub expanded_trims: bool,
    /// Track uid to collapse; repeatable.
    #[arg(long = "collapse")]
    pub collapse: Vec<String>,
    /// Top-level track type to show; repeatable. Shows all when omitted.
    #[arg(long = "visible")]
    pub visible: Vec<String>,
    /// Attribute key to list first in tooltips; repeatable.
    #[arg(long = "attribute-order")]
    pub attribute_order: Vec<String>,
    /// JSON settings file; command-line values take precedence.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub tick_interval: i64,
    pub expanded_trims: bool,
    pub collapsed: BTreeSet<String>,
    pub visible: Vec<String>,
    pub attribute_order: Vec<String>,
    pub track_colors: BTreeMap<String, String>,
}

impl RunConfig {
    pub fn resolve(args: RunArgs) -> Result<Self, InputError> {
        let settings = match &args.config {
            Some(path) => load_settings(path)?,
            None => TimelineSettings::default(),
        };
        Ok(Self::merge(args, settings))
    }

    pub fn merge(args: RunArgs, settings: TimelineSettings) -> Self {
        let tick_interval = args
            .tick_interval
            .or(settings.tick_interval)
            .unwrap_or(DEFAULT_TICK_INTERVAL);
        let expanded_trims = args.expanded_trims || settings.expanded_trims.unwrap_or(false);

        let mut collapsed: BTreeSet<String> = settings.collapsed_tracks.into_iter().collect();
        collapsed.extend(args.collapse);

        let visible = prefer_cli(args.visible, settings.visible_tracks);
        let attribute_order = prefer_cli(args.attribute_order, settings.attribute_order);

        Self {
            input: args.input,
            out_dir: args.out,
            tick_interval,
            expanded_trims,
            collapsed,
            visible,
            attribute_order,
            track_colors: settings.track_colors,
        }
    }

    pub fn is_track_collapsed(&self, uid: &str) -> bool {
        self.collapsed.contains(uid)
    }
}

fn prefer_cli(cli: Vec<String>, file: Vec<String>) -> Vec<String> {
    if cli.is_empty() { file } else { cli }
}

/// Attaches a fixed per-type color as each matching track's timeline
/// configuration. Getters set on the track itself keep precedence.
pub fn apply_track_colors(tracks: &mut [Track], colors: &BTreeMap<String, String>) {
    for track in tracks.iter_mut() {
        if let Some(color) = colors.get(&track.track_kind) {
            let color = color.clone();
            track.timeline_config = Some(TrackConfig {
                event_color_getter: Some(ColorGetter::new(move |_| Some(color.clone()))),
            });
        }
        if let Some(nested) = track.tracks.as_mut() {
            apply_track_colors(nested, colors);
        }
    }
}

pub fn warn_unknown_collapsed(tracks: &[Track], config: &RunConfig) {
    for uid in &config.collapsed {
        if !contains_uid(tracks, uid) {
            warn!("--collapse {uid} does not match any track");
        }
    }
}

fn contains_uid(tracks: &[Track], uid: &str) -> bool {
    tracks.iter().any(|t| {
        t.uid == uid || t.tracks.as_deref().is_some_and(|nested| contains_uid(nested, uid))
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
