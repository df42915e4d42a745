//! The maze grid.
//!
//! The grid arrives already validated by whoever parsed it: we get typed
//! positions for the start, exits, walls and hollows, and lay them over a
//! grid of open cells in that order. Later layers win when two land on the
//! same cell, except that nothing may cover the start.

mod pathfinder;

use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;

use crate::hollow::Hollow;

/// A cell coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        return Position { row, col };
    }

    /// One step in `direction`, or `None` when that would go above row 0 or
    /// left of column 0.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        return Some(Position {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        });
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "({}, {})", self.row, self.col);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The default neighbour order.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(row, col)` offset.
    pub const fn offset(self) -> (isize, isize) {
        return match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        };
    }
}

/// Everything a cell can be besides a hollow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Open,
    Wall,
    Start,
    Exit,
}

#[derive(Debug)]
pub enum Tile {
    Terrain(Terrain),
    Hollow(Hollow),
}

impl Tile {
    pub fn is_wall(&self) -> bool {
        return matches!(self, Tile::Terrain(Terrain::Wall));
    }

    pub fn is_exit(&self) -> bool {
        return matches!(self, Tile::Terrain(Terrain::Exit));
    }

    pub fn hollow(&self) -> Option<&Hollow> {
        return match self {
            Tile::Hollow(hollow) => Some(hollow),
            Tile::Terrain(_) => None,
        };
    }

    pub fn hollow_mut(&mut self) -> Option<&mut Hollow> {
        return match self {
            Tile::Hollow(hollow) => Some(hollow),
            Tile::Terrain(_) => None,
        };
    }
}

#[derive(Debug)]
pub struct MazeCell {
    pub position: Position,
    pub tile: Tile,
    /// Set by the pathfinder only.
    pub(crate) visited: bool,
}

impl MazeCell {
    pub fn visited(&self) -> bool {
        return self.visited;
    }
}

/// Typed maze inputs that do not fit the declared grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("{position} is outside the {rows}x{cols} grid")]
    OutOfBounds { position: Position, rows: usize, cols: usize },
    #[error("{position} is the start cell and cannot hold anything else")]
    Overlap { position: Position },
}

/// A rectangular grid of cells, stored row-major.
#[derive(Debug)]
pub struct Maze {
    rows: usize,
    cols: usize,
    start: Position,
    exits: Vec<Position>,
    grid: Vec<MazeCell>,
}

impl Maze {
    pub fn new(
        start: Position,
        exits: Vec<Position>,
        walls: Vec<Position>,
        hollows: Vec<(Hollow, Position)>,
        rows: usize,
        cols: usize,
    ) -> Result<Maze, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::EmptyGrid { rows, cols });
        }

        let mut grid = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                grid.push(MazeCell {
                    position: Position::new(row, col),
                    tile: Tile::Terrain(Terrain::Open),
                    visited: false,
                });
            }
        }
        let mut maze = Maze {
            rows,
            cols,
            start,
            exits: Vec::new(),
            grid,
        };

        maze.place(start, Tile::Terrain(Terrain::Start))?;
        for wall in walls {
            maze.place_off_start(wall, Tile::Terrain(Terrain::Wall))?;
        }
        for (hollow, position) in hollows {
            maze.place_off_start(position, Tile::Hollow(hollow))?;
        }
        for exit in &exits {
            maze.place_off_start(*exit, Tile::Terrain(Terrain::Exit))?;
        }
        maze.exits = exits;
        return Ok(maze);
    }

    fn place(&mut self, position: Position, tile: Tile) -> Result<(), MazeError> {
        let index = self.index(position).ok_or(MazeError::OutOfBounds {
            position,
            rows: self.rows,
            cols: self.cols,
        })?;
        self.grid[index].tile = tile;
        return Ok(());
    }

    fn place_off_start(&mut self, position: Position, tile: Tile) -> Result<(), MazeError> {
        if position == self.start {
            return Err(MazeError::Overlap { position });
        }
        return self.place(position, tile);
    }

    fn index(&self, position: Position) -> Option<usize> {
        if position.row >= self.rows || position.col >= self.cols {
            return None;
        }
        return Some(position.row * self.cols + position.col);
    }

    pub fn rows(&self) -> usize {
        return self.rows;
    }

    pub fn cols(&self) -> usize {
        return self.cols;
    }

    pub fn start(&self) -> Position {
        return self.start;
    }

    pub fn exits(&self) -> &[Position] {
        return &self.exits;
    }

    pub fn cell(&self, position: Position) -> Option<&MazeCell> {
        let index = self.index(position)?;
        return Some(&self.grid[index]);
    }

    pub fn cell_mut(&mut self, position: Position) -> Option<&mut MazeCell> {
        let index = self.index(position)?;
        return Some(&mut self.grid[index]);
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &MazeCell> {
        return self.grid.iter();
    }

    /// In bounds, not a wall, and not yet visited.
    pub fn is_valid_position(&self, position: Position) -> bool {
        return match self.cell(position) {
            Some(cell) => !cell.tile.is_wall() && !cell.visited,
            None => false,
        };
    }

    /// The neighbour one step from `position` in `direction`, if a search
    /// could enter it right now.
    pub fn open_neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let next = position.step(direction)?;
        if !self.is_valid_position(next) {
            return None;
        }
        return Some(next);
    }

    /// Neighbours of `position` that a search could step into next, in
    /// `order`.
    pub fn available_positions(
        &self,
        position: Position,
        order: &[Direction],
    ) -> SmallVec<[Position; 4]> {
        return order
            .iter()
            .filter_map(|direction| self.open_neighbor(position, *direction))
            .collect();
    }

    /// Clear every visited flag so another search can run.
    pub fn reset_visited(&mut self) {
        for cell in &mut self.grid {
            cell.visited = false;
        }
    }
}
