pub mod catalog;
pub mod report;
pub mod score;
pub mod wizard;
