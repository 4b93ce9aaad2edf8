//! Route-level page components.
//!
//! Pages only compose components and read stores; access decisions live in
//! the layouts above them.

pub mod account;
pub mod admin;
pub mod agent;
pub mod home;
pub mod user;
