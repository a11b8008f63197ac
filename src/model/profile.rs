#[derive(Debug, Clone)]
pub struct TimelineProfile {
    pub buffer: i64,
    pub trim_threshold: usize,
    pub indent_base: u32,
    pub indent_step: u32,
    pub track_height: u32,
    pub line_chart_track_height: u32,
}

impl TimelineProfile {
    pub fn default_v1() -> Self {
        Self {
            buffer: 20,
            trim_threshold: 4,
            indent_base: 5,
            indent_step: 17,
            track_height: 20,
            line_chart_track_height: 50,
        }
    }
}

impl Default for TimelineProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
