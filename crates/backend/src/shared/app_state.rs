use std::sync::Arc;

use crate::dashboards::d402_sales_overview::SalesSession;

/// State handed to every axum handler.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SalesSession>,
}

impl AppState {
    pub fn new(session: SalesSession) -> Self {
        Self {
            session: Arc::new(session),
        }
    }
}
