use super::*;
use crate::report::text::render_summary_text;

fn summary() -> TimelineSummary {
    TimelineSummary {
        tool_name: "clinical-timeline".to_string(),
        tool_version: "0.1.0".to_string(),
        tick_interval: 10,
        expanded_trims: false,
        n_events: 2,
        n_tracks: 1,
        n_rows: 1,
        lower_bound: 0,
        upper_bound: 90,
        n_full_ticks: 10,
        n_ticks: 5,
        n_trims: 1,
        trimmed_width: 60,
        display_width: 40,
    }
}

#[test]
fn test_display_width_removes_trims() {
    let mut ticks = vec![Tick::new(0, 19), Tick::trim(20, 29, 79, 0), Tick::new(80, 99)];
    ticks[2].offset = 60;
    assert_eq!(display_width(&ticks), 40);
    assert_eq!(display_width(&[]), 0);
}

#[test]
fn test_tick_record_skips_defaults() {
    let record = TickRecord::from(&Tick::new(0, 9));
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["nEvents"], 0);
    assert!(json.get("isTrim").is_none());
    assert!(json.get("realEnd").is_none());

    let trim = TickRecord::from(&Tick::trim(10, 19, 49, 0));
    let json = serde_json::to_value(&trim).unwrap();
    assert_eq!(json["isTrim"], true);
    assert_eq!(json["realEnd"], 49);
}

#[test]
fn test_summary_text_mentions_trims() {
    let text = render_summary_text(&summary());
    assert!(text.contains("Trimmed regions: 1"));
    assert!(text.contains("Trimmed fraction: 0.60"));
    assert!(text.contains("Range: 0 days .. 3 months"));
}
