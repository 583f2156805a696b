//! Small helpers shared across layers.

pub mod callback;
pub mod form;
pub mod multipart;
pub mod password;
pub mod validate;
