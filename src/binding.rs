use crate::dataset::Dataset;
use crate::derive::{outcome_proportion, payload_correlation, ProportionChart, ScatterChart};
use crate::filter::{FilterState, PayloadRange, SiteSelection};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// A control change coming from the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SiteChanged(SiteSelection),
    RangeChanged(PayloadRange),
}

/// Where derived charts are pushed.
pub trait RenderTarget {
    fn render_proportion(&mut self, chart: &ProportionChart);
    fn render_correlation(&mut self, chart: &ScatterChart);
}

/// Keeps the latest output of each binding. Used when the charts have to be
/// sent back as a response rather than drawn in place.
#[derive(Debug, Default, Clone)]
pub struct ChartFrame {
    pub proportion: Option<ProportionChart>,
    pub correlation: Option<ScatterChart>,
}

impl RenderTarget for ChartFrame {
    fn render_proportion(&mut self, chart: &ProportionChart) {
        self.proportion = Some(chart.clone());
    }

    fn render_correlation(&mut self, chart: &ScatterChart) {
        self.correlation = Some(chart.clone());
    }
}

/// Which bindings fired for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatched {
    pub proportion: bool,
    pub correlation: bool,
}

/// One UI session: the shared read-only dataset plus its own filter state.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: Arc<Dataset>,
    state: FilterState,
}

impl Session {
    /// Builds the initial filter state and populates both charts once.
    pub fn start<T: RenderTarget + ?Sized>(dataset: Arc<Dataset>, target: &mut T) -> Self {
        let state = FilterState::initial(&dataset);
        if !state.payload_range.within_slider_domain() {
            warn!(
                "Initial payload range {} .. {} lies outside the slider domain",
                state.payload_range.low(),
                state.payload_range.high()
            );
        }

        let session = Self { dataset, state };
        session.render_proportion(target);
        session.render_correlation(target);
        session
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Applies one event and re-runs only the bindings whose inputs moved.
    pub fn dispatch<T: RenderTarget + ?Sized>(&mut self, event: Event, target: &mut T) -> Dispatched {
        let next = match event {
            Event::SiteChanged(site) => self.state.with_site(site),
            Event::RangeChanged(range) => self.state.with_range(range),
        };

        let fired = Dispatched {
            proportion: next.site != self.state.site,
            correlation: next != self.state,
        };
        self.state = next;

        if fired.proportion {
            self.render_proportion(target);
        }
        if fired.correlation {
            self.render_correlation(target);
        }

        debug!(
            "Dispatched site={} range={:?} -> {:?}",
            self.state.site, self.state.payload_range, fired
        );
        fired
    }

    fn render_proportion<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        target.render_proportion(&outcome_proportion(&self.dataset, &self.state.site));
    }

    fn render_correlation<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        target.render_correlation(&payload_correlation(
            &self.dataset,
            &self.state.site,
            &self.state.payload_range,
        ));
    }
}

/// Independent sessions over one shared dataset, keyed by id.
pub struct SessionRegistry {
    dataset: Arc<Dataset>,
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl SessionRegistry {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Opens a session and returns its id along with the initial charts.
    pub fn open(&self) -> (Uuid, ChartFrame) {
        let mut frame = ChartFrame::default();
        let session = Session::start(self.dataset.clone(), &mut frame);
        let id = Uuid::new_v4();

        let mut guard = self.lock();
        guard.insert(id, session);
        info!("Opened session {} ({} active)", id, guard.len());
        (id, frame)
    }

    /// Runs `events` in order against one session. `None` if the id is unknown.
    pub fn dispatch(&self, id: Uuid, events: Vec<Event>) -> Option<ChartFrame> {
        let mut guard = self.lock();
        let session = guard.get_mut(&id)?;

        let mut frame = ChartFrame::default();
        for event in events {
            session.dispatch(event, &mut frame);
        }
        Some(frame)
    }

    pub fn state(&self, id: Uuid) -> Option<FilterState> {
        self.lock().get(&id).map(|s| s.state().clone())
    }

    pub fn close(&self, id: Uuid) -> bool {
        let removed = self.lock().remove(&id).is_some();
        if removed {
            info!("Closed session {}", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Session>> {
        // A panic mid-dispatch leaves only a FilterState behind, which is always valid.
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }
}
