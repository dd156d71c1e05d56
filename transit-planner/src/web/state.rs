//! Application state for the web layer.

use crate::backend::TransitBackend;
use crate::controller::Controller;

/// Shared application state.
///
/// Cloned into every handler; the controller behind it is shared.
#[derive(Debug)]
pub struct AppState<B> {
    pub controller: Controller<B>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
        }
    }
}

impl<B: TransitBackend> AppState<B> {
    pub fn new(controller: Controller<B>) -> Self {
        Self { controller }
    }
}
