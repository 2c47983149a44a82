//! Lead-capture inquiries: wire payloads, validation and mailbox routing.

mod error;
mod form;
mod value_object;

pub use error::*;
pub use form::*;
pub use value_object::*;
