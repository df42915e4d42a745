//! Depth-first search for a way out.
//!
//! The search is the classic recursive backtracker, unrolled onto an explicit
//! stack of frames so a long corridor cannot overflow the call stack:
//! 1. Entering a cell marks it visited and appends it to the path.
//! 2. An exit ends the search; the path is the answer.
//! 3. Otherwise the top frame tries its next direction, entering the
//!    neighbour if it is in bounds, not a wall and not yet visited.
//! 4. A frame that has tried every direction is a dead end: it is popped and
//!    its cell comes off the path.
//!
//! Visited flags only ever go from false to true during a search, so every
//! cell is entered at most once. The path found is a path, not the shortest.

use tracing::debug;

use super::{Direction, Maze, Position};

struct Frame {
    position: Position,
    /// Index into the neighbour order of the next direction to try.
    next: usize,
}

impl Maze {
    /// Find a path from the start to any exit using the default neighbour
    /// order (up, down, left, right).
    pub fn find_way_out(&mut self) -> Option<Vec<Position>> {
        return self.find_way_out_with(&Direction::ALL);
    }

    /// Find a path from the start to any exit, trying neighbours in `order`.
    ///
    /// Returns the cells from start to exit inclusive, or `None` when every
    /// reachable cell has been tried. Visited flags are left set; call
    /// [`Maze::reset_visited`] before searching the same maze again.
    pub fn find_way_out_with(&mut self, order: &[Direction]) -> Option<Vec<Position>> {
        let mut path: Vec<Position> = Vec::new();
        let mut frames: Vec<Frame> = Vec::new();
        let mut entered = 0usize;

        let start = self.start;
        if self.enter(start, &mut path) {
            return Some(path);
        }
        entered += 1;
        frames.push(Frame { position: start, next: 0 });

        while let Some(frame) = frames.last_mut() {
            let Some(direction) = order.get(frame.next) else {
                frames.pop();
                path.pop();
                continue;
            };
            frame.next += 1;

            let Some(next) = self.open_neighbor(frame.position, *direction) else {
                continue;
            };
            entered += 1;
            if self.enter(next, &mut path) {
                debug!(cells_entered = entered, path_len = path.len(), "found a way out");
                return Some(path);
            }
            frames.push(Frame { position: next, next: 0 });
        }

        debug!(cells_entered = entered, "no way out");
        return None;
    }

    /// Mark `position` visited and append it to `path`. Returns whether it
    /// is an exit.
    fn enter(&mut self, position: Position, path: &mut Vec<Position>) -> bool {
        let Some(cell) = self.cell_mut(position) else {
            panic!("search entered {} outside the grid", position);
        };
        cell.visited = true;
        path.push(position);
        return cell.tile.is_exit();
    }
}
