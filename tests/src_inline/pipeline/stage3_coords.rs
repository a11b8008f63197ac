use super::*;
use crate::model::event::Event;
use crate::pipeline::stage2_trim::get_trimmed_ticks;

fn gapped_ticks(event: &Event) -> Vec<Tick<'_>> {
    let mut ticks = Vec::new();
    for i in 0..10 {
        let start = i * 10;
        let mut tick = Tick::new(start, start + 9);
        if i == 0 || i == 9 {
            tick.events.push(event);
        }
        ticks.push(tick);
    }
    get_trimmed_ticks(&ticks, false)
}

#[test]
fn test_points_before_trim_unchanged() {
    let event = Event::point(0);
    let ticks = gapped_ticks(&event);
    assert_eq!(get_point_in_trimmed_space(5.0, &ticks), Some(5.0));
    assert_eq!(get_point_in_trimmed_space(19.0, &ticks), Some(19.0));
}

#[test]
fn test_points_inside_trim_clamp_to_trim_start() {
    let event = Event::point(0);
    let ticks = gapped_ticks(&event);
    assert_eq!(get_point_in_trimmed_space(20.0, &ticks), Some(20.0));
    assert_eq!(get_point_in_trimmed_space(55.0, &ticks), Some(20.0));
    assert_eq!(get_point_in_trimmed_space(79.0, &ticks), Some(20.0));
}

#[test]
fn test_points_after_trim_shift_by_offset() {
    let event = Event::point(0);
    let ticks = gapped_ticks(&event);
    assert_eq!(get_point_in_trimmed_space(80.0, &ticks), Some(20.0));
    assert_eq!(get_point_in_trimmed_space(95.0, &ticks), Some(35.0));
}

#[test]
fn test_point_outside_ticks() {
    let event = Event::point(0);
    let ticks = gapped_ticks(&event);
    assert_eq!(get_point_in_trimmed_space(-1.0, &ticks), None);
    assert_eq!(get_point_in_trimmed_space(100.0, &ticks), None);
}

#[test]
fn test_screen_read_skips_trims() {
    let event = Event::point(0);
    let ticks = gapped_ticks(&event);
    // each non-trim tick is consumed as end - start = 9 units
    assert_eq!(get_point_in_trimmed_space_from_screen_read(4.0, &ticks), 4.0);
    assert_eq!(get_point_in_trimmed_space_from_screen_read(12.0, &ticks), 13.0);
    assert_eq!(get_point_in_trimmed_space_from_screen_read(20.0, &ticks), 82.0);
    assert_eq!(get_point_in_trimmed_space_from_screen_read(1000.0, &ticks), 0.0);
}

#[test]
fn test_round_trip_without_trims() {
    let event = Event::point(0);
    let ticks: Vec<Tick<'_>> = (0..4)
        .map(|i| {
            let mut t = Tick::new(i * 10, i * 10 + 9);
            t.events.push(&event);
            t
        })
        .collect();
    for x in [0.0, 3.0, 8.0] {
        let trimmed = get_point_in_trimmed_space(x, &ticks).unwrap();
        assert_eq!(get_point_in_trimmed_space_from_screen_read(trimmed, &ticks), x);
    }
}

#[test]
fn test_get_perc() {
    assert_eq!(get_perc(25.0, 200.0), 12.5);
}

// Width of every non-trim tick before the one holding `x`, plus the
// distance into that tick.
fn accumulated_width(x: f64, ticks: &[Tick<'_>]) -> f64 {
    let mut acc = 0.0;
    for tick in ticks.iter().filter(|t| !t.is_trim) {
        if tick.start as f64 <= x && x <= tick.end as f64 {
            return acc + (x - tick.start as f64);
        }
        acc += tick.width() as f64;
    }
    panic!("{x} is not in a non-trim tick");
}

#[test]
fn test_trimmed_point_matches_accumulated_width() {
    let event = Event::point(0);
    let ticks = gapped_ticks(&event);
    let origin = ticks[0].start as f64;
    for x in [0.0, 9.0, 15.0, 19.0, 80.0, 85.0, 95.0, 99.0] {
        let trimmed = get_point_in_trimmed_space(x, &ticks).unwrap();
        assert_eq!(trimmed - origin, accumulated_width(x, &ticks), "x = {x}");
    }
}

#[test]
fn test_screen_read_drifts_one_unit_per_tick() {
    let event = Event::point(0);
    let ticks = gapped_ticks(&event);
    let read_back: Vec<f64> = [15.0, 85.0, 95.0]
        .iter()
        .map(|&x| {
            let trimmed = get_point_in_trimmed_space(x, &ticks).unwrap();
            get_point_in_trimmed_space_from_screen_read(trimmed, &ticks)
        })
        .collect();
    assert_eq!(read_back, vec![16.0, 87.0, 98.0]);
}
