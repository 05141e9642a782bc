pub mod duration;
pub mod pay;
