pub mod request;
pub mod response;

pub use request::WireRequest;
pub use response::{error_envelope, error_envelope_bytes, ErrorBody, ErrorEnvelope, ResponseProperties};
