pub mod config;
pub mod player;
pub mod timer;
pub mod tokenize;

pub use config::ReaderConfig;
pub use player::{Phase, Player};
pub use timer::{wpm_to_millis, TickTimer};
pub use tokenize::{format_reading_time, reading_time_secs, tokenize};
