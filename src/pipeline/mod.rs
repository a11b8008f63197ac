use thiserror::Error;

pub mod stage1_ticks;
pub mod stage2_trim;
pub mod stage3_coords;
pub mod stage4_tracks;
pub mod stage5_report;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
