//! Wire contract with the hosted assistant: request body and classified
//! response.

pub mod request;
pub mod response;
