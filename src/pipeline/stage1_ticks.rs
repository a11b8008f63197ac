use tracing::debug;

use crate::model::event::Event;
use crate::model::profile::TimelineProfile;
use crate::model::tick::Tick;
use crate::pipeline::TimelineError;

pub fn get_full_ticks(events: &[Event], tick_interval: i64) -> Result<Vec<Tick<'_>>, TimelineError> {
    get_full_ticks_with(events, tick_interval, &TimelineProfile::default_v1())
}

/// Buckets `events` into `tick_interval`-wide ticks over the buffered event range.
///
/// Bounds are settled before events are assigned, so an event lands in every
/// tick it overlaps, including the stretched first and last ticks.
pub fn get_full_ticks_with<'a>(
    events: &'a [Event],
    tick_interval: i64,
    profile: &TimelineProfile,
) -> Result<Vec<Tick<'a>>, TimelineError> {
    if tick_interval <= 0 {
        return Err(TimelineError::InvalidInput(format!(
            "tick interval must be positive, got {tick_interval}"
        )));
    }
    let (lower_bound, upper_bound) = event_bounds(events)?;

    let floor = lower_bound
        .div_euclid(tick_interval)
        .checked_mul(tick_interval)
        .ok_or_else(|| range_overflow(lower_bound, upper_bound))?;
    let ceiling =
        ceil_to(upper_bound, tick_interval).ok_or_else(|| range_overflow(lower_bound, upper_bound))?;

    let mut ticks = Vec::new();
    let mut place = floor;
    loop {
        let end = place
            .checked_add(tick_interval - 1)
            .ok_or_else(|| range_overflow(lower_bound, upper_bound))?;
        ticks.push(Tick::new(place, end));
        place = end
            .checked_add(1)
            .ok_or_else(|| range_overflow(lower_bound, upper_bound))?;
        if place >= ceiling {
            break;
        }
    }

    let buffer = profile.buffer;
    let first_start = ticks[0].start;
    if lower_bound - first_start < buffer {
        let margin_start = first_start
            .checked_sub(buffer)
            .ok_or_else(|| range_overflow(lower_bound, upper_bound))?;
        ticks.insert(0, Tick::new(margin_start, first_start - 1));
    } else {
        ticks[0].start = lower_bound
            .checked_sub(buffer)
            .ok_or_else(|| range_overflow(lower_bound, upper_bound))?;
    }
    let last_end = upper_bound
        .checked_add(buffer)
        .ok_or_else(|| range_overflow(lower_bound, upper_bound))?;
    if let Some(last) = ticks.last_mut() {
        last.end = last_end;
    }

    for tick in &mut ticks {
        tick.events = events
            .iter()
            .filter(|e| e.intersects(tick.start, tick.end))
            .collect();
    }

    debug!(
        "generated {} ticks over [{}, {}] (interval {})",
        ticks.len(),
        lower_bound,
        upper_bound,
        tick_interval
    );

    Ok(ticks)
}

pub fn event_bounds(events: &[Event]) -> Result<(i64, i64), TimelineError> {
    let lower = events.iter().map(|e| e.start).min();
    let upper = events.iter().map(|e| e.end).max();
    match (lower, upper) {
        (Some(lower), Some(upper)) => Ok((lower, upper)),
        _ => Err(TimelineError::InvalidInput(
            "cannot derive tick range from an empty event list".to_string(),
        )),
    }
}

fn range_overflow(lower: i64, upper: i64) -> TimelineError {
    TimelineError::InvalidInput(format!(
        "tick range overflows i64 for events spanning [{lower}, {upper}]"
    ))
}

fn ceil_to(value: i64, step: i64) -> Option<i64> {
    let q = value.div_euclid(step);
    if value.rem_euclid(step) == 0 {
        q.checked_mul(step)
    } else {
        q.checked_add(1)?.checked_mul(step)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_ticks.rs"]
mod tests;
