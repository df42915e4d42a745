//! Hollows - treasure caches in a grid maze.
//!
//! Build the stores once, find a way out, then harvest greedily along it.
//!
//! # Quick Start
//!
//! ```
//! use hollows::hollow::Hollow;
//! use hollows::maze::{Maze, Position};
//! use hollows::treasure::Treasure;
//!
//! let loot = vec![
//!     Treasure::new("gem", 2, 10).unwrap(),
//!     Treasure::new("bar", 5, 5).unwrap(),
//! ];
//! let mut maze = Maze::new(
//!     Position::new(0, 0),
//!     vec![Position::new(2, 2)],
//!     vec![],
//!     vec![(Hollow::exclusive(loot), Position::new(1, 1))],
//!     3,
//!     3,
//! )
//! .unwrap();
//!
//! let path = maze.find_way_out().unwrap();
//! assert_eq!(path.first(), Some(&Position::new(0, 0)));
//! assert_eq!(path.last(), Some(&Position::new(2, 2)));
//! ```

pub mod config;
pub mod harvest;
pub mod hollow;
pub mod maze;
pub mod store;
pub mod treasure;

pub use config::{Expedition, ExpeditionConfig};
pub use harvest::Backpack;
pub use store::{Extraction, TreasureStore};
pub use treasure::Treasure;
