pub mod year_2015;
