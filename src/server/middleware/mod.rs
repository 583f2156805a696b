//! Request authorization: session wrappers, the path gate, and role guards.

pub mod auth;
pub mod gate;
pub mod guard;
pub mod session;

#[cfg(test)]
mod test;
