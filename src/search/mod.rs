//! Template search over decoded grids.
//!
//! The search is a brute-force sliding window. Candidate top-left positions
//! are visited row-major (top to bottom, then left to right) over the
//! inclusive range `[0, source - template]` on each axis, so the window
//! always fits inside the source. A template larger than the source simply
//! yields no candidates.

pub(crate) mod scan;

use crate::color::{Metric, Tolerance};
use crate::grid::{Grid, Position};
use crate::trace::{trace_event, trace_span};

/// Search configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MatchConfig {
    /// Largest color distance at which two pixels still match.
    pub tolerance: Tolerance,
    /// Metric the tolerance is measured in.
    pub metric: Metric,
}

impl MatchConfig {
    /// Exact color matching.
    pub fn exact() -> Self {
        Self::default()
    }

    /// Euclidean matching within `tolerance`.
    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }
}

/// Finds a fixed template inside source grids.
pub struct Matcher {
    template: Grid,
    cfg: MatchConfig,
}

impl Matcher {
    /// Creates a matcher with exact color matching.
    pub fn new(template: Grid) -> Self {
        Self {
            template,
            cfg: MatchConfig::default(),
        }
    }

    /// Replaces the search configuration.
    pub fn with_config(mut self, cfg: MatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// The grid being searched for.
    pub fn template(&self) -> &Grid {
        &self.template
    }

    /// Current matching configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Returns the top-left position of the first match in row-major order.
    pub fn find(&self, source: &Grid) -> Option<Position> {
        let _span = trace_span!(
            "find",
            source_width = source.width(),
            source_height = source.height(),
            template_width = self.template.width(),
            template_height = self.template.height()
        )
        .entered();

        let found = scan::first_match(source, &self.template, &self.cfg);
        if let Some(pos) = found {
            trace_event!("match_found", x = pos.x, y = pos.y);
        } else {
            trace_event!("no_match", candidates = scan::candidate_count(source, &self.template));
        }
        found
    }

    /// Returns every matching top-left position in row-major order.
    ///
    /// Stops once `limit` matches have been collected; `None` scans the whole
    /// source. Matches may overlap.
    pub fn find_all(&self, source: &Grid, limit: Option<usize>) -> Vec<Position> {
        let _span = trace_span!(
            "find_all",
            source_width = source.width(),
            source_height = source.height()
        )
        .entered();

        let matches = scan::all_matches(source, &self.template, &self.cfg, limit);
        trace_event!("matches_found", count = matches.len());
        matches
    }

    /// Returns `true` if the template matches with its top-left at `pos`.
    ///
    /// Placements where the template would not fit are `false`.
    pub fn matches_at(&self, source: &Grid, pos: Position) -> bool {
        scan::window_matches(source, &self.template, pos.x, pos.y, &self.cfg)
    }
}

/// Finds the first occurrence of `template` in `source` using the Euclidean
/// metric.
pub fn find_template(source: &Grid, template: &Grid, tolerance: Tolerance) -> Option<Position> {
    find_template_with(source, template, &MatchConfig::with_tolerance(tolerance))
}

/// Finds the first occurrence of `template` in `source` under `cfg`.
pub fn find_template_with(source: &Grid, template: &Grid, cfg: &MatchConfig) -> Option<Position> {
    scan::first_match(source, template, cfg)
}
