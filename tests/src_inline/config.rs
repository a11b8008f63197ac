use super::*;
use crate::model::event::Event;
use crate::report::colors::get_track_event_custom_color_getter;

fn parse(args: &[&str]) -> RunArgs {
    let mut argv = vec!["clinical-timeline", "run"];
    argv.extend_from_slice(args);
    match Cli::parse_from(argv).command {
        Command::Run(run) => run,
    }
}

#[test]
fn test_defaults() {
    let config = RunConfig::merge(
        parse(&["--input", "tracks.json", "--out", "out"]),
        TimelineSettings::default(),
    );
    assert_eq!(config.tick_interval, DEFAULT_TICK_INTERVAL);
    assert!(!config.expanded_trims);
    assert!(config.collapsed.is_empty());
    assert_eq!(config.out_dir, PathBuf::from("out"));
}

#[test]
fn test_cli_overrides_settings() {
    let settings = TimelineSettings {
        tick_interval: Some(90),
        expanded_trims: Some(true),
        collapsed_tracks: vec!["labs".to_string()],
        visible_tracks: vec!["LAB_TEST".to_string()],
        attribute_order: vec!["AGENT".to_string()],
        track_colors: BTreeMap::new(),
    };
    let args = parse(&[
        "--input",
        "tracks.json",
        "--out",
        "out",
        "--tick-interval",
        "7",
        "--collapse",
        "treatment",
        "--visible",
        "TREATMENT",
    ]);
    let config = RunConfig::merge(args, settings);
    assert_eq!(config.tick_interval, 7);
    assert!(config.expanded_trims);
    assert!(config.is_track_collapsed("labs"));
    assert!(config.is_track_collapsed("treatment"));
    assert_eq!(config.visible, vec!["TREATMENT".to_string()]);
    assert_eq!(config.attribute_order, vec!["AGENT".to_string()]);
}

#[test]
fn test_negative_interval_parses() {
    let args = parse(&["--input", "a", "--out", "b", "--tick-interval", "-5"]);
    assert_eq!(args.tick_interval, Some(-5));
}

#[test]
fn test_apply_track_colors_recurses() {
    let mut tracks = vec![Track::new("treatment", "TREATMENT")
        .with_tracks(vec![Track::new("labs", "LAB_TEST")])];
    let mut colors = BTreeMap::new();
    colors.insert("LAB_TEST".to_string(), "#aa0000".to_string());
    apply_track_colors(&mut tracks, &colors);

    assert!(get_track_event_custom_color_getter(&tracks[0]).is_none());
    let nested = &tracks[0].tracks.as_ref().unwrap()[0];
    let getter = get_track_event_custom_color_getter(nested).unwrap();
    assert_eq!(getter.color(&Event::point(0)).as_deref(), Some("#aa0000"));
}
