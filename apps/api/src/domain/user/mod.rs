// User domain module
// Contains the user entity, its validation rules and the status codec

#![allow(clippy::module_inception)]

pub mod status;
pub mod user;
pub mod value_objects;

// Re-export main types for convenience
pub use status::{StatusCodecError, UserStatus};
pub use user::{validate, User, UserDraft, ValidationError, ValidationRule};
pub use value_objects::Email;
