pub mod event;
pub mod profile;
pub mod tick;
pub mod track;
