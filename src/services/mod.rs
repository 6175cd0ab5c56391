pub mod ask;
pub mod catalog;
