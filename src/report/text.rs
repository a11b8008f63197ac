use crate::report::dates::format_date;
use crate::report::{TimelineSummary, format_f64_2};

pub fn render_summary_text(summary: &TimelineSummary) -> String {
    let mut out = String::new();

    out.push_str("Clinical Timeline Layout Report\n");
    out.push_str("===============================\n\n");

    out.push_str("1. Data\n");
    out.push_str(&format!("Tracks: {}\n", summary.n_tracks));
    out.push_str(&format!("Display rows: {}\n", summary.n_rows));
    out.push_str(&format!("Events: {}\n", summary.n_events));
    out.push_str(&format!(
        "Range: {} .. {} (days {} .. {})\n\n",
        format_date(summary.lower_bound),
        format_date(summary.upper_bound),
        summary.lower_bound,
        summary.upper_bound
    ));

    out.push_str("2. Ticks\n");
    out.push_str(&format!("Tick interval: {} days\n", summary.tick_interval));
    out.push_str(&format!("Full ticks: {}\n", summary.n_full_ticks));
    out.push_str(&format!("Displayed ticks: {}\n\n", summary.n_ticks));

    out.push_str("3. Trimming\n");
    if summary.expanded_trims {
        out.push_str("Trims expanded; empty regions shown at full width\n");
    } else {
        out.push_str(&format!("Trimmed regions: {}\n", summary.n_trims));
        out.push_str(&format!("Trimmed width: {} days\n", summary.trimmed_width));
        out.push_str(&format!(
            "Trimmed fraction: {}\n",
            format_f64_2(summary.trimmed_fraction())
        ));
    }
    out.push_str(&format!("Display width: {} days\n", summary.display_width));

    out
}
