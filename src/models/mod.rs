pub mod ask;
pub mod dataset;
pub mod timestamp;

pub use ask::{AskRequest, AskResponse, QueryRecord};
pub use dataset::{Dataset, DatasetsResponse};
