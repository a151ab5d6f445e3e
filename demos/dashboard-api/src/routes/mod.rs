pub mod bounds;
pub mod report;
