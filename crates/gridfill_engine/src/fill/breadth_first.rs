use std::collections::VecDeque;

use crate::Point;

use super::FillRun;

pub(super) fn fill(run: &mut FillRun<'_>, seed: Point) {
    let mut queue = VecDeque::new();
    queue.push_back(seed);

    while let Some(pos) = queue.pop_front() {
        if run.mark(pos) {
            queue.extend(pos.neighbors4());
        }
        run.observe_frontier(queue.len());
    }
}
