pub mod calendar;
pub mod extract;
pub mod log;
