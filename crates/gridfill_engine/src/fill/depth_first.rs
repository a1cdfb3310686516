use crate::Point;

use super::FillRun;

/// Neighbors are pushed unconditionally; stale entries are filtered when
/// they are popped.
pub(super) fn fill(run: &mut FillRun<'_>, seed: Point) {
    let mut stack = vec![seed];

    while let Some(pos) = stack.pop() {
        if run.mark(pos) {
            stack.extend(pos.neighbors4());
        }
        run.observe_frontier(stack.len());
    }
}
