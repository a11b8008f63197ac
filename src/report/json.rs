use serde::Serialize;

use crate::report::{TickRecord, TimelineSummary};

#[derive(Serialize)]
struct TicksDocument<'a> {
    summary: &'a TimelineSummary,
    ticks: &'a [TickRecord],
}

pub fn render_ticks_json(
    summary: &TimelineSummary,
    ticks: &[TickRecord],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TicksDocument { summary, ticks })
}
