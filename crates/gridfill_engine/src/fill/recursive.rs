use crate::Point;

use super::FillRun;

pub(super) fn fill(run: &mut FillRun<'_>, seed: Point) {
    visit(run, seed, 1);
}

/// `depth` counts the invocations currently on the call stack, including
/// this one.
fn visit(run: &mut FillRun<'_>, pos: Point, depth: usize) {
    run.observe_frontier(depth);

    if !run.mark(pos) {
        return;
    }

    visit(run, Point::new(pos.x + 1, pos.y), depth + 1);
    visit(run, Point::new(pos.x, pos.y + 1), depth + 1);
    visit(run, Point::new(pos.x - 1, pos.y), depth + 1);
    visit(run, Point::new(pos.x, pos.y - 1), depth + 1);
}
