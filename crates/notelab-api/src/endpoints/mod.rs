//! Typed endpoint methods, grouped by backend router

pub(crate) mod ai;
mod auth;
mod notes;
mod teams;
mod topics;
