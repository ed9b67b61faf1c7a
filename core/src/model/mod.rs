pub mod day;
pub mod grid;
pub mod source;
pub mod theme;
