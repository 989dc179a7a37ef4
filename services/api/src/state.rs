//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the shared,
//! clonable resources handed to every handler.

use crate::{config::Config, service::EndpointService};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn EndpointService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, service: Arc<dyn EndpointService>) -> Arc<Self> {
        Arc::new(Self {
            service,
            config: Arc::new(config),
        })
    }
}
