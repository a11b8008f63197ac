use tracing::debug;

use crate::model::profile::TimelineProfile;
use crate::model::tick::Tick;

pub fn get_trimmed_ticks<'a>(ticks: &[Tick<'a>], expanded_trims: bool) -> Vec<Tick<'a>> {
    get_trimmed_ticks_with(ticks, expanded_trims, &TimelineProfile::default_v1())
}

/// Collapses runs of at least `trim_threshold` empty ticks that precede a
/// non-empty tick. The first and last tick of a run stay as normal ticks and
/// the interior becomes a single trim tick. Every emitted tick carries the raw
/// width removed by trims before it.
///
/// Empty ticks after the last non-empty tick are emitted unchanged.
pub fn get_trimmed_ticks_with<'a>(
    ticks: &[Tick<'a>],
    expanded_trims: bool,
    profile: &TimelineProfile,
) -> Vec<Tick<'a>> {
    let mut out = Vec::with_capacity(ticks.len());
    let mut pending: Vec<&Tick<'a>> = Vec::new();
    let mut offset = 0i64;
    let mut n_trims = 0usize;
    let threshold = profile.trim_threshold.max(3);

    for tick in ticks {
        if tick.is_empty() {
            pending.push(tick);
            continue;
        }

        if !expanded_trims && pending.len() >= threshold {
            let first = pending[0];
            let last = pending[pending.len() - 1];
            let collapsed = &pending[1..pending.len() - 1];

            out.push(with_offset(first, offset));
            out.push(Tick::trim(
                collapsed[0].start,
                collapsed[0].end,
                collapsed[collapsed.len() - 1].end,
                offset,
            ));
            offset += collapsed.iter().map(|t| t.width()).sum::<i64>();
            out.push(with_offset(last, offset));
            n_trims += 1;
        } else {
            out.extend(pending.iter().map(|t| with_offset(t, offset)));
        }
        pending.clear();

        out.push(with_offset(tick, offset));
    }

    out.extend(pending.iter().map(|t| with_offset(t, offset)));

    debug!(
        "trimmed {} ticks into {} ({} trims, {} units removed)",
        ticks.len(),
        out.len(),
        n_trims,
        offset
    );

    out
}

fn with_offset<'a>(tick: &Tick<'a>, offset: i64) -> Tick<'a> {
    Tick {
        offset,
        ..tick.clone()
    }
}

/// Total raw width removed by all trims in `ticks`.
pub fn total_trimmed(ticks: &[Tick<'_>]) -> i64 {
    ticks.last().map(|t| t.offset).unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_trim.rs"]
mod tests;
