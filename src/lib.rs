pub mod app;
pub mod input;
pub mod reading;
pub mod ui;
