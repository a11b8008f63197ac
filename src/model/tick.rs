use crate::model::event::Event;

/// A fixed-width bucket of raw time, or a collapsed run of empty buckets.
///
/// For a trim tick `start`/`end` are the bounds of the first collapsed bucket
/// and `real_end` is the end of the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick<'a> {
    pub start: i64,
    pub end: i64,
    pub events: Vec<&'a Event>,
    pub offset: i64,
    pub is_trim: bool,
    pub real_end: Option<i64>,
}

impl<'a> Tick<'a> {
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            events: Vec::new(),
            offset: 0,
            is_trim: false,
            real_end: None,
        }
    }

    pub fn trim(start: i64, end: i64, real_end: i64, offset: i64) -> Self {
        Self {
            start,
            end,
            events: Vec::new(),
            offset,
            is_trim: true,
            real_end: Some(real_end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of raw units in `[start, end]`.
    pub fn width(&self) -> i64 {
        self.end - self.start + 1
    }

    pub fn covers(&self, x: f64) -> bool {
        self.start as f64 <= x
            && (self.end as f64 >= x || self.real_end.is_some_and(|r| r as f64 >= x))
    }
}
