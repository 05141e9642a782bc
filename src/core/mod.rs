pub mod calculator;
pub mod classify;
pub mod logic;
pub mod range;
pub mod report;
pub mod settings;
