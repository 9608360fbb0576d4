use std::sync::Arc;

use ctq_instruments::Instrument;

use crate::store::OptionStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OptionStore>,
    pub instrument: Arc<dyn Instrument>,
}
