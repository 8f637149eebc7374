use tracing::{debug, info, warn};

use crate::{
    app::{fetch_sequence, Event, SessionId},
    config::AppConfig,
    filter::{EmbedPanel, FilterSync},
    metric::{MetricRow, MetricStore},
    region::{BoundarySet, RegionId},
    selection::SelectionSet,
    source::{BoundarySource, FetchError, MetricQuery, MetricSource},
    style::{RegionStyler, Style},
};

/// Owns the session state and applies events to it one at a time.
pub struct AppController<E: EmbedPanel> {
    boundary: Option<BoundarySet>,
    metrics: MetricStore,
    selection: SelectionSet,
    filter: FilterSync,
    styler: RegionStyler,
    embed: E,
    session: SessionId,
    torn_down: bool,
}

impl<E: EmbedPanel> AppController<E> {
    pub fn new(embed: E, filter: FilterSync, styler: RegionStyler) -> Self {
        Self {
            boundary: None,
            metrics: MetricStore::new(),
            selection: SelectionSet::new(),
            filter,
            styler,
            embed,
            session: SessionId::default(),
            torn_down: false,
        }
    }

    pub fn from_config(config: &AppConfig, embed: E) -> Self {
        Self::new(
            embed,
            FilterSync::new(config.filter_field.clone()),
            RegionStyler::new(config.palette.clone()),
        )
    }

    /// Start a new load generation. Results from earlier generations are ignored from now on.
    pub fn begin_load(&mut self) -> SessionId {
        self.session = self.session.next();
        debug!(session = %self.session, "load started");
        self.session
    }

    /// Fetch boundary then metrics on the current thread and apply the results.
    pub fn load(
        &mut self,
        boundary: &(impl BoundarySource + ?Sized),
        metrics: &(impl MetricSource + ?Sized),
        query: &MetricQuery,
    ) {
        let session = self.begin_load();
        fetch_sequence(session, boundary, metrics, query, |event| self.handle(event));
    }

    /// Stop accepting events. Fetch results that arrive later are dropped.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        debug!("controller torn down");
    }

    pub fn handle(&mut self, event: Event) {
        if self.torn_down {
            debug!(?event, "controller torn down; ignoring event");
            return;
        }

        match event {
            Event::BoundaryFetched { session, result } => {
                if self.is_stale(session) { return }
                self.on_boundary(result);
            }
            Event::MetricsFetched { session, result } => {
                if self.is_stale(session) { return }
                self.on_metrics(result);
            }
            Event::RegionClicked(region) => self.on_click(region),
            Event::ExploreClicked => self.on_explore(),
            Event::CloseClicked => self.filter.clear(&mut self.embed, &mut self.selection),
        }
    }

    fn is_stale(&self, session: SessionId) -> bool {
        let stale = session != self.session;
        if stale {
            debug!(%session, current = %self.session, "dropping stale fetch result");
        }
        stale
    }

    fn on_boundary(&mut self, result: Result<BoundarySet, FetchError>) {
        match result {
            Ok(boundary) => {
                info!(regions = boundary.len(), "boundary loaded");
                self.boundary = Some(boundary);
            }
            Err(e) => warn!(error = %e, "boundary fetch failed"),
        }
    }

    fn on_metrics(&mut self, result: Result<Vec<MetricRow>, FetchError>) {
        match result {
            Ok(rows) if rows.is_empty() && !self.metrics.is_empty() => {
                warn!("metric query returned no rows; keeping previous values");
            }
            Ok(rows) => {
                self.metrics.load(rows);
                let (min, max) = self.metrics.range();
                info!(regions = self.metrics.len(), min, max, "metrics loaded");
            }
            Err(e) => warn!(error = %e, "metric fetch failed"),
        }
    }

    fn on_click(&mut self, region: RegionId) {
        if self.boundary.as_ref().is_some_and(|b| !b.contains(&region)) {
            debug!(%region, "click on region outside the boundary set");
        }

        let selected = self.selection.toggle(region.clone());
        debug!(%region, selected, count = self.selection.len(), "selection toggled");

        // Keep an open panel in step with the map.
        if self.filter.is_raised() {
            self.filter.apply(&mut self.embed, self.selection.list());
        }
    }

    fn on_explore(&mut self) {
        if self.selection.is_empty() {
            debug!("explore with empty selection; ignoring");
            return;
        }
        self.filter.apply(&mut self.embed, self.selection.list());
    }

    /// Style for one region from the current selection and metrics.
    pub fn style_for(&self, region: &RegionId) -> Style {
        self.styler.style_for(region, &self.selection, &self.metrics)
    }

    /// Styles for every boundary region in dataset order; empty until the boundary loads.
    pub fn styles(&self) -> Vec<(RegionId, Style)> {
        match &self.boundary {
            Some(boundary) => self.styler.styles(boundary, &self.selection, &self.metrics)
                .map(|(id, style)| (id.clone(), style))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn selection_label(&self) -> String { self.selection.label() }

    /// The Explore affordance is shown only while something is selected.
    pub fn explore_visible(&self) -> bool { !self.selection.is_empty() }

    pub fn panel_raised(&self) -> bool { self.filter.is_raised() }

    pub fn boundary(&self) -> Option<&BoundarySet> { self.boundary.as_ref() }

    pub fn metrics(&self) -> &MetricStore { &self.metrics }

    pub fn selection(&self) -> &SelectionSet { &self.selection }

    pub fn embed(&self) -> &E { &self.embed }

    pub fn embed_mut(&mut self) -> &mut E { &mut self.embed }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use serde_json::Value;

    use super::*;
    use crate::{
        filter::{FilterCommand, FilterOperator, RecordingEmbed},
        region::Region,
        style::{Palette, Rgb},
    };

    struct StaticBoundary(Result<Vec<&'static str>, ()>);

    impl BoundarySource for StaticBoundary {
        fn fetch_boundary(&self) -> Result<BoundarySet, FetchError> {
            match &self.0 {
                Ok(names) => Ok(BoundarySet::new(
                    names.iter().map(|&n| Region { id: n.into(), geometry: Value::Null }).collect(),
                )),
                Err(()) => Err(FetchError::Empty("no features".into())),
            }
        }
    }

    struct StaticMetrics {
        rows: Vec<(&'static str, f64)>,
        calls: Cell<usize>,
    }

    impl StaticMetrics {
        fn new(rows: Vec<(&'static str, f64)>) -> Self { Self { rows, calls: Cell::new(0) } }
    }

    impl MetricSource for StaticMetrics {
        fn query(&self, _query: &str, _dataset: &str) -> Result<Vec<MetricRow>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.rows.iter().map(|&(r, v)| MetricRow::new(r, v)).collect())
        }
    }

    fn query() -> MetricQuery {
        MetricQuery { query: "SELECT name, value FROM t".into(), dataset: "t".into() }
    }

    fn controller() -> AppController<RecordingEmbed> {
        AppController::new(RecordingEmbed::ready(), FilterSync::new("State"), RegionStyler::new(Palette::default()))
    }

    fn filter(values: &[&str]) -> FilterCommand {
        FilterCommand::UpdateFilter {
            field: "State".into(),
            operator: FilterOperator::In,
            values: values.iter().map(|&v| v.into()).collect(),
        }
    }

    #[test]
    fn load_populates_boundary_and_metrics() {
        let mut app = controller();
        app.load(
            &StaticBoundary(Ok(vec!["Texas", "Ohio"])),
            &StaticMetrics::new(vec![("Texas", 500.0), ("Ohio", 100.0)]),
            &query(),
        );

        assert_eq!(app.boundary().map(BoundarySet::len), Some(2));
        assert_eq!(app.metrics().range(), (100.0, 500.0));
        assert_eq!(app.style_for(&"Ohio".into()).fill_color, Rgb::new(128, 255, 255));
    }

    #[test]
    fn boundary_failure_skips_metric_query() {
        let mut app = controller();
        let metrics = StaticMetrics::new(vec![("Texas", 1.0)]);
        app.load(&StaticBoundary(Err(())), &metrics, &query());

        assert_eq!(metrics.calls.get(), 0);
        assert!(app.boundary().is_none());
        assert!(app.styles().is_empty());
        assert!(app.metrics().is_empty());
    }

    #[test]
    fn empty_refetch_keeps_previous_metrics() {
        let mut app = controller();
        let boundary = StaticBoundary(Ok(vec!["Texas"]));
        app.load(&boundary, &StaticMetrics::new(vec![("Texas", 3.0)]), &query());
        app.load(&boundary, &StaticMetrics::new(vec![]), &query());

        assert_eq!(app.metrics().get(&"Texas".into()), Some(3.0));
    }

    #[test]
    fn failed_metric_fetch_leaves_no_data_style() {
        let mut app = controller();
        let session = app.begin_load();
        app.handle(Event::BoundaryFetched {
            session,
            result: StaticBoundary(Ok(vec!["Texas"])).fetch_boundary(),
        });
        app.handle(Event::MetricsFetched {
            session,
            result: Err(FetchError::Schema("bad".into())),
        });

        assert_eq!(app.style_for(&"Texas".into()).fill_color, Palette::default().no_data);
    }

    #[test]
    fn stale_session_results_are_ignored() {
        let mut app = controller();
        let old = app.begin_load();
        let current = app.begin_load();

        app.handle(Event::BoundaryFetched { session: old, result: StaticBoundary(Ok(vec!["Old"])).fetch_boundary() });
        assert!(app.boundary().is_none());

        app.handle(Event::BoundaryFetched { session: current, result: StaticBoundary(Ok(vec!["New"])).fetch_boundary() });
        assert!(app.boundary().is_some_and(|b| b.contains(&"New".into())));
    }

    #[test]
    fn late_results_after_teardown_are_noops() {
        let mut app = controller();
        let session = app.begin_load();
        app.teardown();

        app.handle(Event::BoundaryFetched { session, result: StaticBoundary(Ok(vec!["Texas"])).fetch_boundary() });
        app.handle(Event::MetricsFetched { session, result: Ok(vec![MetricRow::new("Texas", 1.0)]) });

        assert!(app.boundary().is_none());
        assert!(app.metrics().is_empty());
    }

    #[test]
    fn explore_requires_selection() {
        let mut app = controller();
        app.handle(Event::ExploreClicked);
        assert!(app.embed().commands.is_empty());
        assert!(!app.explore_visible());

        app.handle(Event::RegionClicked("Texas".into()));
        assert!(app.explore_visible());
        assert!(app.embed().commands.is_empty());

        app.handle(Event::ExploreClicked);
        assert_eq!(app.embed().commands, vec![filter(&["Texas"])]);
        assert!(app.panel_raised());
    }

    #[test]
    fn clicks_while_raised_resync_filter() {
        let mut app = controller();
        app.handle(Event::RegionClicked("Texas".into()));
        app.handle(Event::ExploreClicked);
        app.handle(Event::RegionClicked("Ohio".into()));
        app.handle(Event::RegionClicked("Texas".into()));

        assert_eq!(app.embed().commands, vec![
            filter(&["Texas"]),
            filter(&["Texas", "Ohio"]),
            filter(&["Ohio"]),
        ]);
        assert_eq!(app.selection_label(), "Ohio");
    }

    #[test]
    fn close_clears_selection_and_filter() {
        let mut app = controller();
        app.handle(Event::RegionClicked("Texas".into()));
        app.handle(Event::ExploreClicked);
        app.handle(Event::CloseClicked);

        assert!(app.selection().is_empty());
        assert!(!app.panel_raised());
        assert!(!app.embed().foreground);
        assert_eq!(app.embed().commands.last(), Some(&filter(&[])));
    }

    #[test]
    fn close_with_unready_embed_still_resets() {
        let mut app = AppController::new(RecordingEmbed::default(), FilterSync::new("State"), RegionStyler::default());
        app.handle(Event::RegionClicked("Texas".into()));
        app.handle(Event::ExploreClicked);
        app.handle(Event::CloseClicked);

        assert!(app.embed().commands.is_empty());
        assert!(app.selection().is_empty());

        app.embed_mut().ready = true;
        app.handle(Event::RegionClicked("Ohio".into()));
        app.handle(Event::ExploreClicked);
        assert_eq!(app.embed().commands, vec![filter(&["Ohio"])]);
    }
}
