use clap::Parser;
use tracing::info;

use clinical_timeline::config::{
    Cli, Command, RunArgs, RunConfig, apply_track_colors, warn_unknown_collapsed,
};
use clinical_timeline::input::load_tracks;
use clinical_timeline::logging::init_logging;
use clinical_timeline::model::track::Track;
use clinical_timeline::pipeline::stage1_ticks::get_full_ticks;
use clinical_timeline::pipeline::stage2_trim::get_trimmed_ticks;
use clinical_timeline::pipeline::stage4_tracks::{
    collect_all_events, flatten_tracks, is_track_visible,
};
use clinical_timeline::pipeline::stage5_report::{Stage5Input, write_reports};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let result = match cli.command {
        Command::Run(args) => run(args),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: RunArgs) -> Result<(), String> {
    let config = RunConfig::resolve(args).map_err(|e| e.to_string())?;
    let input = load_tracks(&config.input).map_err(|e| e.to_string())?;

    let mut tracks = select_visible(input.tracks, &config.visible);
    if tracks.is_empty() {
        return Err("no visible tracks to lay out".to_string());
    }
    apply_track_colors(&mut tracks, &config.track_colors);
    warn_unknown_collapsed(&tracks, &config);

    let events = collect_all_events(&tracks);
    info!(
        "laying out {} events across {} tracks (tick interval {}, trims {})",
        events.len(),
        tracks.len(),
        config.tick_interval,
        if config.expanded_trims { "expanded" } else { "collapsed" }
    );

    let full_ticks = get_full_ticks(&events, config.tick_interval).map_err(|e| e.to_string())?;
    let ticks = get_trimmed_ticks(&full_ticks, config.expanded_trims);
    let rows = flatten_tracks(&tracks, |uid| config.is_track_collapsed(uid));

    let stage5 = Stage5Input {
        n_tracks: tracks.len(),
        events: &events,
        rows: &rows,
        full_ticks: &full_ticks,
        ticks: &ticks,
        tick_interval: config.tick_interval,
        expanded_trims: config.expanded_trims,
        attribute_order: &config.attribute_order,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    write_reports(&stage5, &config.out_dir).map_err(|e| e.to_string())?;

    Ok(())
}

fn select_visible(tracks: Vec<Track>, visible: &[String]) -> Vec<Track> {
    if visible.is_empty() {
        return tracks;
    }
    let n_before = tracks.len();
    let kept: Vec<Track> = tracks
        .into_iter()
        .filter(|t| is_track_visible(t, visible))
        .collect();
    if kept.len() < n_before {
        info!(
            "hiding {} of {} top-level tracks not in --visible",
            n_before - kept.len(),
            n_before
        );
    }
    kept
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
