//! Value objects - Immutable objects defined by their attributes

mod user_payload;

pub use user_payload::{PayloadError, UserPayload};
