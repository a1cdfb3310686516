//! Scanline span fill
//!
//! Works on horizontal runs instead of single cells. A pending [`Span`] says
//! "cells `x1..=x2` of row `y` touch a filled run". Processing a span walks
//! it left to right; every unmarked cell found opens a run which is extended
//! left and right until a marked cell or the grid edge, marked, and handed
//! to the rows above and below as new spans. A marked cell inside the span
//! closes the current run; the walk resumes past the obstacle.

use crate::Point;

use super::FillRun;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Span {
    x1: i32,
    x2: i32,
    y: i32,
}

pub(super) fn fill(run: &mut FillRun<'_>, seed: Point) {
    let mut pending = vec![Span {
        x1: seed.x,
        x2: seed.x,
        y: seed.y,
    }];
    run.observe_frontier(pending.len());

    while let Some(span) = pending.pop() {
        scan_span(run, span, &mut pending);
        run.observe_frontier(pending.len());
    }
}

fn scan_span(run: &mut FillRun<'_>, span: Span, pending: &mut Vec<Span>) {
    let Span { x1, x2, y } = span;
    if y < 0 || y >= run.rows() || x1 < 0 || x1 >= run.columns() {
        return;
    }
    let x2 = x2.min(run.columns() - 1);

    let mut x = x1;
    while x <= x2 {
        if !run.is_free(Point::new(x, y)) {
            x += 1;
            continue;
        }

        // scan left, starting at the first free cell
        run.mark(Point::new(x, y));
        let mut left = x;
        while run.is_free(Point::new(left - 1, y)) {
            left -= 1;
            run.mark(Point::new(left, y));
        }

        // scan right
        let mut right = x;
        while run.is_free(Point::new(right + 1, y)) {
            right += 1;
            run.mark(Point::new(right, y));
        }

        push_neighbors(run, pending, left, right, y);

        // `right + 1` is marked or outside the grid
        x = right + 2;
    }
}

/// Queue the rows above and below a freshly filled run `left..=right`.
fn push_neighbors(run: &FillRun<'_>, pending: &mut Vec<Span>, left: i32, right: i32, y: i32) {
    if y + 1 < run.rows() {
        pending.push(Span { x1: left, x2: right, y: y + 1 });
    }
    if y > 0 {
        pending.push(Span { x1: left, x2: right, y: y - 1 });
    }
}
