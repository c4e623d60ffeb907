//! Dense scan over candidate placements.

use crate::grid::{colors_within_tolerance, Grid, Position};
use crate::search::MatchConfig;

/// Inclusive upper bounds of the candidate top-left range, or `None` when
/// the template does not fit.
fn placement_bounds(source: &Grid, template: &Grid) -> Option<(usize, usize)> {
    let max_x = source.width().checked_sub(template.width())?;
    let max_y = source.height().checked_sub(template.height())?;
    Some((max_x, max_y))
}

pub(crate) fn candidate_count(source: &Grid, template: &Grid) -> usize {
    placement_bounds(source, template).map_or(0, |(max_x, max_y)| (max_x + 1) * (max_y + 1))
}

/// Compares the template against the source window whose top-left is
/// `(x, y)`, first row first, bailing out on the first mismatching row.
pub fn window_matches(
    source: &Grid,
    template: &Grid,
    x: usize,
    y: usize,
    cfg: &MatchConfig,
) -> bool {
    let Some((max_x, max_y)) = placement_bounds(source, template) else {
        return false;
    };
    if x > max_x || y > max_y {
        return false;
    }
    window_matches_unchecked(source, template, x, y, cfg)
}

#[inline]
fn window_matches_unchecked(
    source: &Grid,
    template: &Grid,
    x: usize,
    y: usize,
    cfg: &MatchConfig,
) -> bool {
    let width = template.width();
    template.rows().iter().enumerate().all(|(ty, tpl_row)| {
        let window = &source[y + ty].pixels()[x..x + width];
        colors_within_tolerance(window, tpl_row.pixels(), cfg.tolerance, cfg.metric)
    })
}

/// Row-major iterator over matching placements.
fn matches<'a>(
    source: &'a Grid,
    template: &'a Grid,
    cfg: &'a MatchConfig,
) -> impl Iterator<Item = Position> + 'a {
    let bounds = placement_bounds(source, template);
    bounds
        .into_iter()
        .flat_map(|(max_x, max_y)| {
            (0..=max_y).flat_map(move |y| (0..=max_x).map(move |x| Position::new(x, y)))
        })
        .filter(move |pos| window_matches_unchecked(source, template, pos.x, pos.y, cfg))
}

pub(crate) fn first_match(source: &Grid, template: &Grid, cfg: &MatchConfig) -> Option<Position> {
    matches(source, template, cfg)
        .next()
        .map(|pos| source[pos.y][pos.x].position())
}

pub(crate) fn all_matches(
    source: &Grid,
    template: &Grid,
    cfg: &MatchConfig,
    limit: Option<usize>,
) -> Vec<Position> {
    let found = matches(source, template, cfg);
    match limit {
        Some(limit) => found.take(limit).collect(),
        None => found.collect(),
    }
}
