pub mod filter;
pub mod request;
pub mod request_code;
pub mod room;
pub mod transitions;
pub mod validation;

pub use request::ParseEnumError;
