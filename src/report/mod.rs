use serde::Serialize;

use crate::model::tick::Tick;

pub mod colors;
pub mod dates;
pub mod json;
pub mod text;
pub mod tooltip;

/// Serializable view of a tick without its event payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickRecord {
    pub start: i64,
    pub end: i64,
    pub offset: i64,
    pub n_events: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_trim: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_end: Option<i64>,
}

impl From<&Tick<'_>> for TickRecord {
    fn from(tick: &Tick<'_>) -> Self {
        Self {
            start: tick.start,
            end: tick.end,
            offset: tick.offset,
            n_events: tick.events.len(),
            is_trim: tick.is_trim,
            real_end: tick.real_end,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSummary {
    pub tool_name: String,
    pub tool_version: String,
    pub tick_interval: i64,
    pub expanded_trims: bool,
    pub n_events: usize,
    pub n_tracks: usize,
    pub n_rows: usize,
    pub lower_bound: i64,
    pub upper_bound: i64,
    pub n_full_ticks: usize,
    pub n_ticks: usize,
    pub n_trims: usize,
    pub trimmed_width: i64,
    pub display_width: i64,
}

impl TimelineSummary {
    pub fn trimmed_fraction(&self) -> f64 {
        let full = self.display_width + self.trimmed_width;
        if full <= 0 {
            return 0.0;
        }
        self.trimmed_width as f64 / full as f64
    }
}

/// Raw width spanned by `ticks` once trims are removed.
pub fn display_width(ticks: &[Tick<'_>]) -> i64 {
    match (ticks.first(), ticks.last()) {
        (Some(first), Some(last)) => {
            let end = last.real_end.unwrap_or(last.end);
            end - first.start + 1 - last.offset
        }
        _ => 0,
    }
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
