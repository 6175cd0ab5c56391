pub mod response;

pub use response::{error_response, failure, json_response};
