use std::fmt;

use tracing::debug;

use crate::{
    metric::MetricRow,
    region::{BoundarySet, RegionId},
    source::{BoundarySource, FetchError, MetricQuery, MetricSource},
};

/// One load generation. Fetch results carry the session they were started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionId(pub(crate) u64);

impl SessionId {
    pub(crate) fn next(self) -> Self { Self(self.0 + 1) }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything the controller reacts to.
#[derive(Debug)]
pub enum Event {
    BoundaryFetched { session: SessionId, result: Result<BoundarySet, FetchError> },
    MetricsFetched { session: SessionId, result: Result<Vec<MetricRow>, FetchError> },
    RegionClicked(RegionId),
    ExploreClicked,
    CloseClicked,
}

/// Run the fetches for `session` in order and hand each result to `emit`.
/// The metric query only runs after the boundary fetch succeeds.
pub fn fetch_sequence(
    session: SessionId,
    boundary: &(impl BoundarySource + ?Sized),
    metrics: &(impl MetricSource + ?Sized),
    query: &MetricQuery,
    mut emit: impl FnMut(Event),
) {
    let result = boundary.fetch_boundary();
    let have_geometry = result.is_ok();
    emit(Event::BoundaryFetched { session, result });

    if !have_geometry {
        debug!(%session, "no geometry; skipping metric query");
        return;
    }

    let result = metrics.query(&query.query, &query.dataset);
    emit(Event::MetricsFetched { session, result });
}
