//! Behaviour every fill strategy has to share

use std::collections::HashSet;

use gridfill_engine::{fill, FillRequest, FillStrategy, Grid, GridError, MarkRecorder, MarkSource, NoopObserver, Point};
use pretty_assertions::assert_eq;

use crate::helpers::{closed_square, init_logging};

#[test]
fn test_empty_grid_from_corner_marks_everything_once() {
    init_logging();
    for strategy in FillStrategy::ALL {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut recorder = MarkRecorder::new();
        let trace = fill(&mut grid, FillRequest::new((0, 0), strategy), &mut recorder).unwrap();

        assert_eq!(trace.marked, 25, "{strategy}");
        assert_eq!(grid.marked_count(), 25, "{strategy}");
        assert_eq!(recorder.len(), 25, "{strategy}");
        let unique: HashSet<Point> = recorder.points().into_iter().collect();
        assert_eq!(unique.len(), 25, "{strategy} reported a cell twice");
    }
}

#[test]
fn test_seed_is_marked_first() {
    for strategy in FillStrategy::ALL {
        let mut grid = closed_square();
        let mut recorder = MarkRecorder::new();
        fill(&mut grid, FillRequest::new((15, 15), strategy), &mut recorder).unwrap();
        assert_eq!(recorder.points()[0], Point::new(15, 15), "{strategy}");
        assert!(recorder.marks.iter().all(|(_, source)| *source == MarkSource::Fill(strategy)));
    }
}

#[test]
fn test_closed_square_fills_interior_only() {
    init_logging();
    for strategy in FillStrategy::ALL {
        let mut grid = closed_square();
        let outline = grid.marked_points();
        assert_eq!(outline.len(), 80);

        let mut recorder = MarkRecorder::new();
        let trace = fill(&mut grid, FillRequest::new((15, 15), strategy), &mut recorder).unwrap();
        assert_eq!(trace.marked, 19 * 19, "{strategy}");

        for pt in recorder.points() {
            assert!(pt.x > 5 && pt.x < 25 && pt.y > 5 && pt.y < 25, "{strategy} leaked to {pt}");
        }
        assert!(!grid.is_marked(0, 0).unwrap());
        assert!(!grid.is_marked(29, 15).unwrap());
        assert!(!grid.is_marked(15, 4).unwrap());
    }
}

#[test]
fn test_fill_outside_square_leaves_interior() {
    for strategy in FillStrategy::ALL {
        let mut grid = closed_square();
        let trace = fill(&mut grid, FillRequest::new((0, 0), strategy), &mut NoopObserver).unwrap();
        assert_eq!(trace.marked, 900 - 21 * 21, "{strategy}");
        assert!(!grid.is_marked(15, 15).unwrap());
    }
}

#[test]
fn test_second_fill_is_a_noop() {
    for strategy in FillStrategy::ALL {
        let mut grid = closed_square();
        fill(&mut grid, FillRequest::new((15, 15), strategy), &mut NoopObserver).unwrap();
        let before = grid.clone();

        let mut recorder = MarkRecorder::new();
        let trace = fill(&mut grid, FillRequest::new((15, 15), strategy), &mut recorder).unwrap();
        assert_eq!(trace.marked, 0, "{strategy}");
        assert_eq!(trace.max_frontier_size, 0, "{strategy}");
        assert!(recorder.is_empty());
        assert_eq!(grid, before);
    }
}

#[test]
fn test_seed_on_boundary_is_a_noop() {
    for strategy in FillStrategy::ALL {
        let mut grid = closed_square();
        let trace = fill(&mut grid, FillRequest::new((5, 12), strategy), &mut NoopObserver).unwrap();
        assert_eq!(trace.marked, 0, "{strategy}");
        assert_eq!(grid.marked_count(), 80);
    }
}

#[test]
fn test_out_of_bounds_seed_is_rejected() {
    for strategy in FillStrategy::ALL {
        let mut grid = Grid::new(30, 30).unwrap();
        let mut recorder = MarkRecorder::new();
        let result = fill(&mut grid, FillRequest::new((-1, 0), strategy), &mut recorder);
        assert_eq!(result, Err(GridError::OutOfBoundsSeed { x: -1, y: 0 }));

        let result = fill(&mut grid, FillRequest::new((3, 30), strategy), &mut recorder);
        assert_eq!(result, Err(GridError::OutOfBoundsSeed { x: 3, y: 30 }));
        assert_eq!(grid.marked_count(), 0);
        assert!(recorder.is_empty());
    }
}

#[test]
fn test_single_cell_grid() {
    for strategy in FillStrategy::ALL {
        let mut grid = Grid::new(1, 1).unwrap();
        let trace = fill(&mut grid, FillRequest::new((0, 0), strategy), &mut NoopObserver).unwrap();
        assert_eq!(trace.marked, 1, "{strategy}");
    }
}

#[test]
fn test_fill_follows_four_connectivity() {
    // A diagonal line is 8-connected; a 4-connected fill must not cross it.
    for strategy in FillStrategy::ALL {
        let mut grid = Grid::new(6, 6).unwrap();
        for i in 0..6 {
            grid.mark(i, i).unwrap();
        }
        let trace = fill(&mut grid, FillRequest::new((5, 0), strategy), &mut NoopObserver).unwrap();
        assert_eq!(trace.marked, 15, "{strategy}");
        assert!(!grid.is_marked(0, 5).unwrap(), "{strategy} crossed the diagonal");
    }
}

#[test]
fn test_strategy_names_round_trip() {
    for strategy in FillStrategy::ALL {
        assert_eq!(strategy.name().parse::<FillStrategy>(), Ok(strategy));
    }
    assert_eq!("BFS".parse::<FillStrategy>(), Ok(FillStrategy::BreadthFirstQueue));
    assert_eq!("scanline".parse::<FillStrategy>(), Ok(FillStrategy::ScanlineSpan));
    assert!("diagonal".parse::<FillStrategy>().is_err());
}
