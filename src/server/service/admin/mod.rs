//! Administrative services for access bootstrap and the dashboard.
//!
//! This module provides the one-time admin code used to create the first admin account and
//! the catalog totals shown on the admin dashboard.

pub mod code;
pub mod dashboard;
