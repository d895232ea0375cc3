use log::{debug, info};

use crate::Generation;
use crate::error::Error;
use crate::model::{RouteCandidate, RouteInfo, RouteKind, Savings};

/// A candidate shorter than this fraction of the reference distance is
/// tagged [`RouteKind::Shortest`].
const SHORTEST_RATIO: f64 = 0.95;

/// Outcome of applying an asynchronous route result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The result belonged to the latest request and replaced the set.
    Applied,
    /// The result was superseded by a newer request and was dropped.
    Stale,
}

/// Classified route alternatives plus the active selection and the
/// lifecycle state of the request that feeds them.
///
/// Exactly one index is selected whenever the set is non-empty; an
/// empty set is a valid terminal state with no selection.
#[derive(Debug, Default)]
pub struct AlternativeSelector {
    candidates: Vec<RouteCandidate>,
    selected: usize,
    generation: Generation,
    calculating: bool,
}

impl AlternativeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidates(&self) -> &[RouteCandidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&RouteCandidate> {
        self.candidates.get(self.selected)
    }

    /// True while a route request is in flight, so the host can show a
    /// progress indicator.
    pub fn is_calculating(&self) -> bool {
        self.calculating
    }

    /// Replaces the whole alternative set and resets the selection to
    /// the reference route.
    ///
    /// The routing engine returns the time-optimal route first, so
    /// index 0 is tagged `Fastest`. Later candidates are `Shortest`
    /// when they undercut 95% of the reference distance and `Balanced`
    /// otherwise, and carry savings relative to the reference.
    pub fn set_alternatives(&mut self, routes: Vec<RouteInfo>) {
        let reference = routes.first().map(|r| (r.distance, r.duration));

        self.candidates = routes
            .into_iter()
            .enumerate()
            .map(|(index, route)| {
                let (kind, savings) = match reference {
                    Some((ref_distance, ref_duration)) if index > 0 => {
                        let kind = if route.distance < ref_distance * SHORTEST_RATIO {
                            RouteKind::Shortest
                        } else {
                            RouteKind::Balanced
                        };
                        let savings = Savings {
                            time: ref_duration - route.duration,
                            distance: ref_distance - route.distance,
                        };
                        (kind, Some(savings))
                    }
                    _ => (RouteKind::Fastest, None),
                };
                RouteCandidate {
                    route,
                    kind,
                    savings,
                }
            })
            .collect();
        self.selected = 0;
        info!(
            "route alternatives replaced: {} candidate(s)",
            self.candidates.len()
        );
    }

    /// Drops all candidates. The next request starts from an empty set.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.selected = 0;
    }

    /// Marks `index` as the active route and returns it so the caller
    /// can recentre the view or update its panel.
    ///
    /// Out-of-range indices leave the selection unchanged and return
    /// `None`; selecting the current index again is a no-op that still
    /// returns the candidate.
    pub fn select(&mut self, index: usize) -> Option<&RouteCandidate> {
        if index >= self.candidates.len() {
            return None;
        }
        self.selected = index;
        debug!("route alternative {index} selected");
        self.candidates.get(self.selected)
    }

    /// Starts a new route request, superseding any in-flight one.
    ///
    /// The returned generation must accompany the eventual result so
    /// that responses arriving out of order can be recognized.
    pub fn begin_query(&mut self) -> Generation {
        self.generation += 1;
        self.calculating = true;
        debug!("route query generation {} started", self.generation);
        self.generation
    }

    /// Applies the outcome of a route request.
    ///
    /// Results from superseded generations are dropped without
    /// touching any state, including the in-flight flag (a newer
    /// request is still pending). A failure on the current generation
    /// clears the flag but leaves the previous successful set intact,
    /// so the host can surface the message over a still-valid map.
    pub fn apply_query_result(
        &mut self,
        generation: Generation,
        result: Result<Vec<RouteInfo>, Error>,
    ) -> Result<QueryOutcome, Error> {
        if generation != self.generation {
            debug!(
                "dropping stale route result (generation {generation}, current {})",
                self.generation
            );
            return Ok(QueryOutcome::Stale);
        }
        self.calculating = false;
        let routes = result?;
        self.set_alternatives(routes);
        Ok(QueryOutcome::Applied)
    }
}
