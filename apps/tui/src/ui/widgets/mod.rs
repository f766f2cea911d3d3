pub mod charts;
pub mod radar;
pub mod tables;
