//! Tests for running a whole drawing session

use gridfill_engine::{
    Circle, FillRequest, FillStrategy, Grid, GridError, Line, MarkRecorder, MarkSource, NoopObserver, Point, Primitive, Scene,
};
use pretty_assertions::assert_eq;

use crate::log_capture;

fn four_circles() -> Scene {
    let mut scene = Scene::new();
    for center in [(7, 7), (21, 7), (7, 21), (21, 21)] {
        scene.add_circle(Circle::new(center, 5));
    }
    scene
        .add_fill(FillRequest::new((7, 7), FillStrategy::Recursive))
        .add_fill(FillRequest::new((21, 7), FillStrategy::ScanlineSpan))
        .add_fill(FillRequest::new((7, 21), FillStrategy::BreadthFirstQueue))
        .add_fill(FillRequest::new((21, 21), FillStrategy::DepthFirstStack));
    scene
}

#[test]
fn test_four_circles_each_fill_their_own_disc() {
    let mut grid = Grid::new(30, 30).unwrap();
    let report = four_circles().run(&mut grid, &mut NoopObserver).unwrap();

    assert_eq!(report.drawn, 4);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.traces.len(), 4);
    for (trace, strategy) in report.traces.iter().zip([
        FillStrategy::Recursive,
        FillStrategy::ScanlineSpan,
        FillStrategy::BreadthFirstQueue,
        FillStrategy::DepthFirstStack,
    ]) {
        assert_eq!(trace.strategy, strategy);
        assert_eq!(trace.marked, 69);
    }
    assert_eq!(grid.marked_count(), 4 * 28 + 4 * 69);
    assert!(!grid.is_marked(14, 14).unwrap());
}

#[test]
fn test_skipped_lines_do_not_stop_the_session() {
    let mut scene = Scene::new();
    scene
        .add_line(Line::new((5, 5), (35, 5)))
        .add_line(Line::new((0, 0), (9, 0)))
        .add_point(40, 40)
        .add_point(3, 3);

    let mut grid = Grid::new(30, 30).unwrap();
    let report = scene.run(&mut grid, &mut NoopObserver).unwrap();
    assert_eq!(report.drawn, 2);
    assert_eq!(report.skipped, 2);
    assert_eq!(grid.marked_count(), 11);
}

#[test]
fn test_invalid_radius_fails_before_drawing() {
    let mut scene = Scene::new();
    scene.add_line(Line::new((0, 0), (9, 0))).add_circle(Circle::new((5, 5), -2));

    let mut grid = Grid::new(10, 10).unwrap();
    let result = scene.run(&mut grid, &mut NoopObserver);
    assert_eq!(result, Err(GridError::InvalidRadius { radius: -2 }));
    assert_eq!(grid.marked_count(), 0);
}

#[test]
fn test_bad_seed_fails_before_drawing() {
    let mut scene = Scene::new();
    scene
        .add_line(Line::new((0, 0), (9, 0)))
        .add_fill(FillRequest::new((2, 2), FillStrategy::Recursive))
        .add_fill(FillRequest::new((-1, 0), FillStrategy::ScanlineSpan));

    let mut grid = Grid::new(10, 10).unwrap();
    let result = scene.run(&mut grid, &mut NoopObserver);
    assert_eq!(result, Err(GridError::OutOfBoundsSeed { x: -1, y: 0 }));
    assert_eq!(grid.marked_count(), 0);
}

#[test]
fn test_rejected_seed_is_logged() {
    log_capture::install();
    let mut scene = Scene::new();
    scene.add_fill(FillRequest::new((3, 12), FillStrategy::BreadthFirstQueue));

    let mut grid = Grid::new(10, 10).unwrap();
    let result = scene.validate(&grid);
    assert_eq!(result, Err(GridError::OutOfBoundsSeed { x: 3, y: 12 }));
    assert!(log_capture::warned("Fill seed (3, 12) is outside the grid"));
    assert!(scene.run(&mut grid, &mut NoopObserver).is_err());
}

#[test]
fn test_strokes_are_reported_before_fills() {
    let mut scene = Scene::new();
    scene
        .add(Primitive::Line(Line::new((0, 2), (4, 2))))
        .add_fill(FillRequest::new((0, 0), FillStrategy::BreadthFirstQueue));

    let mut grid = Grid::new(5, 5).unwrap();
    let mut recorder = MarkRecorder::new();
    scene.run(&mut grid, &mut recorder).unwrap();

    assert_eq!(recorder.len(), 15);
    assert!(recorder.marks[..5].iter().all(|(_, s)| *s == MarkSource::Stroke));
    assert!(recorder.marks[5..].iter().all(|(_, s)| *s == MarkSource::Fill(FillStrategy::BreadthFirstQueue)));
    assert_eq!(recorder.marks[5].0, Point::new(0, 0));
}

#[test]
fn test_scene_stroke_width_applies_to_all_primitives() {
    let mut scene = Scene::new().with_stroke_width(2);
    scene.add_line(Line::new((0, 0), (4, 0))).add_point(0, 4);

    let mut grid = Grid::new(5, 5).unwrap();
    scene.run(&mut grid, &mut NoopObserver).unwrap();
    assert_eq!(grid.marked_count(), 12);
}
