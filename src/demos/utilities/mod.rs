//! Small practical tools

pub mod key_events;
pub mod palette;
pub mod stopwatch;
pub mod upload;

pub use key_events::KeyEventsDemo;
pub use palette::PaletteDemo;
pub use stopwatch::StopwatchDemo;
pub use upload::UploadDemo;
