//! Network helpers for talking to the auth provider.

pub mod api;
