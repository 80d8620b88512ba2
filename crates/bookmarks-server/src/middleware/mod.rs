//! Request/response middleware that is not specific to a route.

pub mod request_id;
pub mod security_headers;
