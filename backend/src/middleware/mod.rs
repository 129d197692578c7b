//! Request middleware and extractors

pub mod request_id;
pub mod validated_json;

pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use validated_json::ValidatedJson;
