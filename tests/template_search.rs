use gridmatch::{
    find_template, find_template_with, Color, Grid, MatchConfig, Matcher, Metric, Position,
    Tolerance,
};

/// Black `width` x `height` grid with solid `size` x `size` blocks of `color`
/// whose top-left corners sit at `blocks`.
fn scene(width: usize, height: usize, size: usize, color: Color, blocks: &[(usize, usize)]) -> Grid {
    Grid::from_fn(width, height, |x, y| {
        let inside = blocks
            .iter()
            .any(|&(bx, by)| (bx..bx + size).contains(&x) && (by..by + size).contains(&y));
        if inside {
            color
        } else {
            Color::BLACK
        }
    })
    .unwrap()
}

fn make_pattern(width: usize, height: usize) -> Grid {
    Grid::from_fn(width, height, |x, y| {
        let v = ((x * 13) ^ (y * 7) ^ (x * y)) as u8;
        Color::rgb(v, v.wrapping_mul(3), v.wrapping_add(90))
    })
    .unwrap()
}

#[test]
fn finds_red_block_in_black_source() {
    let source = scene(10, 10, 3, Color::RED, &[(2, 2)]);
    let template = Grid::filled(3, 3, Color::RED).unwrap();
    assert_eq!(
        find_template(&source, &template, Tolerance::EXACT),
        Some(Position::new(2, 2))
    );
}

#[test]
fn first_match_in_row_major_order_wins() {
    let source = scene(10, 10, 3, Color::RED, &[(6, 6), (2, 2)]);
    let template = Grid::filled(3, 3, Color::RED).unwrap();
    assert_eq!(
        find_template(&source, &template, Tolerance::EXACT),
        Some(Position::new(2, 2))
    );

    // Same row: the left one wins; lower rows lose to upper rows even when further left.
    let source = scene(12, 12, 2, Color::RED, &[(8, 1), (1, 6), (4, 1)]);
    let template = Grid::filled(2, 2, Color::RED).unwrap();
    assert_eq!(
        find_template(&source, &template, Tolerance::EXACT),
        Some(Position::new(4, 1))
    );
}

#[test]
fn larger_template_is_not_found() {
    let source = Grid::filled(4, 4, Color::BLACK).unwrap();
    let taller = Grid::filled(2, 5, Color::BLACK).unwrap();
    let wider = Grid::filled(5, 2, Color::BLACK).unwrap();
    assert_eq!(find_template(&source, &taller, Tolerance::ANY), None);
    assert_eq!(find_template(&source, &wider, Tolerance::ANY), None);
}

#[test]
fn missing_template_is_not_found() {
    let source = scene(10, 10, 3, Color::RED, &[(2, 2)]);
    let template = Grid::filled(3, 3, Color::BLUE).unwrap();
    assert_eq!(find_template(&source, &template, Tolerance::EXACT), None);
}

#[test]
fn match_in_last_row_and_column_is_found() {
    let source = scene(10, 8, 3, Color::RED, &[(7, 5)]);
    let template = Grid::filled(3, 3, Color::RED).unwrap();
    assert_eq!(
        find_template(&source, &template, Tolerance::EXACT),
        Some(Position::new(7, 5))
    );
}

#[test]
fn template_equal_to_source_matches_at_origin() {
    let source = make_pattern(9, 7);
    let template = source.clone();
    assert_eq!(
        find_template(&source, &template, Tolerance::EXACT),
        Some(Position::new(0, 0))
    );
}

#[test]
fn cropped_pattern_is_found_where_it_was_cut() {
    let source = make_pattern(40, 30);
    let template = source.crop(17, 11, 8, 5).unwrap();
    let matcher = Matcher::new(template);
    assert_eq!(matcher.find(&source), Some(Position::new(17, 11)));
    assert!(matcher.matches_at(&source, Position::new(17, 11)));
    assert!(!matcher.matches_at(&source, Position::new(38, 11)));
}

#[test]
fn first_row_match_alone_is_not_enough() {
    // Only the top row of the block is red at (1, 1); the full block sits at (5, 4).
    let mut source = scene(10, 8, 3, Color::RED, &[(5, 4)]);
    let stripe = Grid::from_fn(10, 8, |x, y| {
        if y == 1 && (1..4).contains(&x) {
            Color::RED
        } else {
            source[y][x].color()
        }
    })
    .unwrap();
    source = stripe;
    let template = Grid::filled(3, 3, Color::RED).unwrap();
    assert_eq!(
        find_template(&source, &template, Tolerance::EXACT),
        Some(Position::new(5, 4))
    );
}

#[test]
fn tolerance_admits_near_colors() {
    let near_red = Color::rgb(250, 6, 4);
    let source = scene(10, 10, 3, near_red, &[(4, 3)]);
    let template = Grid::filled(3, 3, Color::RED).unwrap();

    assert_eq!(find_template(&source, &template, Tolerance::EXACT), None);
    let tolerance = Tolerance::new(0.05).unwrap();
    assert_eq!(
        find_template(&source, &template, tolerance),
        Some(Position::new(4, 3))
    );
}

#[test]
fn metric_changes_the_tolerance_scale() {
    let near_red = Color::rgb(230, 20, 10);
    let source = scene(8, 8, 2, near_red, &[(3, 3)]);
    let template = Grid::filled(2, 2, Color::RED).unwrap();
    let tolerance = Tolerance::new(0.01).unwrap();

    let euclidean = MatchConfig {
        tolerance,
        metric: Metric::Euclidean,
    };
    let squared = MatchConfig {
        tolerance,
        metric: Metric::SquaredEuclidean,
    };
    assert_eq!(find_template_with(&source, &template, &euclidean), None);
    assert_eq!(
        find_template_with(&source, &template, &squared),
        Some(Position::new(3, 3))
    );
}

#[test]
fn find_all_reports_every_match_in_scan_order() {
    let source = scene(12, 12, 2, Color::RED, &[(8, 8), (1, 1), (6, 1)]);
    let matcher = Matcher::new(Grid::filled(2, 2, Color::RED).unwrap());
    assert_eq!(
        matcher.find_all(&source, None),
        vec![
            Position::new(1, 1),
            Position::new(6, 1),
            Position::new(8, 8)
        ]
    );
    assert_eq!(matcher.find_all(&source, Some(2)).len(), 2);
    assert_eq!(matcher.find_all(&source, Some(0)), Vec::new());
}

#[test]
fn find_all_includes_overlapping_matches() {
    let source = Grid::filled(4, 3, Color::WHITE).unwrap();
    let matcher = Matcher::new(Grid::filled(3, 3, Color::WHITE).unwrap());
    assert_eq!(
        matcher.find_all(&source, None),
        vec![Position::new(0, 0), Position::new(1, 0)]
    );
}

#[test]
fn zero_tolerance_search_ignores_absolute_positions() {
    let source = make_pattern(20, 20);
    let template = source.crop(5, 9, 4, 4).unwrap();
    // The cropped template is rebased to (0, 0), so exact row equality with
    // the source region fails while a zero-tolerance comparison succeeds.
    let region_row = source[9].slice(5, 4).unwrap();
    assert!(!template[0].equals_exact(&region_row));
    assert!(template[0]
        .equals_within_tolerance(&region_row, Tolerance::EXACT)
        .unwrap());
    assert_eq!(
        find_template(&source, &template, Tolerance::EXACT),
        Some(Position::new(5, 9))
    );
}

#[test]
fn matcher_is_shareable_across_threads() {
    let source = std::sync::Arc::new(scene(16, 16, 3, Color::GREEN, &[(9, 4)]));
    let matcher = std::sync::Arc::new(Matcher::new(Grid::filled(3, 3, Color::GREEN).unwrap()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let source = source.clone();
            let matcher = matcher.clone();
            std::thread::spawn(move || matcher.find(&source))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(Position::new(9, 4)));
    }
}
