use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::model::event::Event;
use crate::model::tick::Tick;
use crate::model::track::FlatTrack;
use crate::pipeline::stage2_trim::total_trimmed;
use crate::pipeline::stage3_coords::get_point_in_trimmed_space;
use crate::report::colors::{color_getter_factory, get_track_event_custom_color_getter};
use crate::report::json::render_ticks_json;
use crate::report::text::render_summary_text;
use crate::report::tooltip::{format_tooltip, segment_and_sort_attributes_for_tooltip};
use crate::report::{TickRecord, TimelineSummary, display_width};

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub n_tracks: usize,
    pub events: &'a [Event],
    pub rows: &'a [FlatTrack<'a>],
    pub full_ticks: &'a [Tick<'a>],
    pub ticks: &'a [Tick<'a>],
    pub tick_interval: i64,
    pub expanded_trims: bool,
    pub attribute_order: &'a [String],
    pub tool_name: String,
    pub tool_version: String,
}

pub fn build_summary(input: &Stage5Input<'_>) -> TimelineSummary {
    let lower_bound = input.events.iter().map(|e| e.start).min().unwrap_or(0);
    let upper_bound = input.events.iter().map(|e| e.end).max().unwrap_or(0);
    TimelineSummary {
        tool_name: input.tool_name.clone(),
        tool_version: input.tool_version.clone(),
        tick_interval: input.tick_interval,
        expanded_trims: input.expanded_trims,
        n_events: input.events.len(),
        n_tracks: input.n_tracks,
        n_rows: input.rows.len(),
        lower_bound,
        upper_bound,
        n_full_ticks: input.full_ticks.len(),
        n_ticks: input.ticks.len(),
        n_trims: input.ticks.iter().filter(|t| t.is_trim).count(),
        trimmed_width: total_trimmed(input.ticks),
        display_width: display_width(input.ticks),
    }
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> std::io::Result<TimelineSummary> {
    fs::create_dir_all(out_dir)?;

    let summary = build_summary(input);

    let records: Vec<TickRecord> = input.ticks.iter().map(TickRecord::from).collect();
    let json = render_ticks_json(&summary, &records).map_err(std::io::Error::from)?;
    write_text(&out_dir.join("ticks.json"), &json)?;

    write_layout_tsv(input, &out_dir.join("layout.tsv"))?;
    write_events_tsv(input, &out_dir.join("events.tsv"))?;

    let text = render_summary_text(&summary);
    write_text(&out_dir.join("summary.txt"), &text)?;

    info!(
        "wrote {} ticks ({} trims) and {} rows to {}",
        summary.n_ticks,
        summary.n_trims,
        summary.n_rows,
        out_dir.display()
    );

    Ok(summary)
}

fn write_layout_tsv(input: &Stage5Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "uid\ttype\tindent\theight\tn_items")?;
    for row in input.rows {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            row.track.uid,
            row.track.track_kind,
            row.indent,
            row.height,
            row.track.items.len()
        )?;
    }
    w.flush()
}

fn write_events_tsv(input: &Stage5Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "uid",
        "start",
        "end",
        "trimmed_start",
        "trimmed_end",
        "color",
        "tooltip",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for row in input.rows {
        let color_of =
            color_getter_factory(get_track_event_custom_color_getter(&row.track).cloned());
        for event in &row.track.items {
            let ordered =
                segment_and_sort_attributes_for_tooltip(event.attributes(), input.attribute_order);
            writeln!(
                w,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                row.track.uid,
                event.start,
                event.end,
                format_point(get_point_in_trimmed_space(event.start as f64, input.ticks)),
                format_point(get_point_in_trimmed_space(event.end as f64, input.ticks)),
                color_of(event),
                sanitize_tsv(&format_tooltip(&ordered)),
            )?;
        }
    }
    w.flush()
}

fn format_point(v: Option<f64>) -> String {
    v.map(|x| format!("{}", x)).unwrap_or_default()
}

fn sanitize_tsv(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
