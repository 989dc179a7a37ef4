//! Endpoint Params API Library Crate
//!
//! This library contains the web service around the query binding contract:
//! configuration, application state, the endpoint service trait, handlers and
//! routing. The binaries in `bin/` are thin wrappers around this library.

pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod service;
pub mod state;
