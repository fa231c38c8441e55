use crate::binding::SessionRegistry;
use crate::dataset::Dataset;
use crate::layout::DashboardLayout;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRegistry>,
    pub layout: Arc<DashboardLayout>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let layout = DashboardLayout::for_dataset(&dataset);
        Self {
            sessions: Arc::new(SessionRegistry::new(Arc::new(dataset))),
            layout: Arc::new(layout),
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        self.sessions.dataset()
    }
}
