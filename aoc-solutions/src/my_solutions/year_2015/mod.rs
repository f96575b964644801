pub mod day_4;
pub mod day_5;
pub mod day_12;
pub mod day_14;
pub mod day_18;
pub mod day_19;
pub mod day_20;
