pub mod ask;
pub mod datasets;
pub mod health;
