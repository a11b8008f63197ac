use crate::model::tick::Tick;

/// Maps a raw point into trimmed space by removing the width of the trims
/// before it. Points inside a trim clamp to the trim's visual start.
pub fn get_point_in_trimmed_space(x: f64, ticks: &[Tick<'_>]) -> Option<f64> {
    let tick = ticks.iter().find(|t| t.covers(x))?;
    if tick.is_trim {
        Some((tick.start - tick.offset) as f64)
    } else {
        Some(x - tick.offset as f64)
    }
}

/// Walks the non-trim ticks consuming `val` units of screen width and returns
/// the raw coordinate where it runs out. Trims have no width and are skipped,
/// so this does not invert [`get_point_in_trimmed_space`] inside a trim.
///
/// Returns `0.0` when `val` runs past the last tick.
pub fn get_point_in_trimmed_space_from_screen_read(val: f64, ticks: &[Tick<'_>]) -> f64 {
    let mut rem = val;
    for tick in ticks.iter().filter(|t| !t.is_trim) {
        let span = (tick.end - tick.start) as f64;
        if rem >= span {
            rem -= span;
        } else {
            return tick.start as f64 + rem;
        }
    }
    0.0
}

pub fn get_perc(n: f64, l: f64) -> f64 {
    (n / l) * 100.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_coords.rs"]
mod tests;
