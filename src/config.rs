//! Expedition settings and the end-to-end run they drive.

use tracing::debug;

use crate::maze::{Direction, Maze, Position};
use crate::treasure::Treasure;

/// Knobs for one trip through a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpeditionConfig {
    /// Total weight the backpack can carry.
    pub backpack_capacity: u32,
    /// Order in which the pathfinder tries neighbouring cells.
    pub neighbor_order: [Direction; 4],
}

impl Default for ExpeditionConfig {
    fn default() -> Self {
        return ExpeditionConfig {
            backpack_capacity: 0,
            neighbor_order: Direction::ALL,
        };
    }
}

impl ExpeditionConfig {
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.backpack_capacity = capacity;
        return self;
    }

    pub fn with_neighbor_order(mut self, order: [Direction; 4]) -> Self {
        self.neighbor_order = order;
        return self;
    }
}

/// What one trip produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expedition {
    /// Start to exit, or `None` if the maze has no way out.
    pub path: Option<Vec<Position>>,
    /// Treasures taken along the path, or `None` if nothing was taken.
    pub treasures: Option<Vec<Treasure>>,
}

impl Expedition {
    pub fn total_value(&self) -> u64 {
        return self.treasures.iter().flatten().map(|t| t.value() as u64).sum();
    }

    pub fn total_weight(&self) -> u64 {
        return self.treasures.iter().flatten().map(|t| t.weight() as u64).sum();
    }
}

impl Maze {
    /// Find a way out, then harvest along it. With no way out nothing is
    /// harvested.
    pub fn expedition(&mut self, config: &ExpeditionConfig) -> Expedition {
        let path = self.find_way_out_with(&config.neighbor_order);
        let treasures = match path.as_deref() {
            Some(path) => self.take_treasures(path, config.backpack_capacity),
            None => None,
        };
        let expedition = Expedition { path, treasures };
        debug!(
            escaped = expedition.path.is_some(),
            value = expedition.total_value(),
            weight = expedition.total_weight(),
            "expedition finished"
        );
        return expedition;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hollow::Hollow;
    use crate::store::TreasureStore;

    fn p(row: usize, col: usize) -> Position {
        return Position::new(row, col);
    }

    fn t(name: &str, weight: u32, value: u32) -> Treasure {
        return Treasure::new(name, weight, value).unwrap();
    }

    #[test]
    fn default_config() {
        let config = ExpeditionConfig::default();
        assert_eq!(config.backpack_capacity, 0);
        assert_eq!(
            config.neighbor_order,
            [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
        );
    }

    #[test]
    fn builder_setters() {
        let order = [Direction::Right, Direction::Left, Direction::Down, Direction::Up];
        let config = ExpeditionConfig::default().with_capacity(12).with_neighbor_order(order);
        assert_eq!(config.backpack_capacity, 12);
        assert_eq!(config.neighbor_order, order);
    }

    #[test]
    fn trapped_expedition_takes_nothing() {
        let mut maze = Maze::new(
            p(0, 0),
            vec![p(0, 2)],
            vec![p(0, 1), p(1, 1)],
            vec![(Hollow::exclusive(vec![t("gem", 1, 1)]), p(1, 0))],
            2,
            3,
        )
        .unwrap();
        let trip = maze.expedition(&ExpeditionConfig::default().with_capacity(10));
        assert_eq!(trip.path, None);
        assert_eq!(trip.treasures, None);
        assert_eq!(trip.total_value(), 0);
        let gem = maze.cell(p(1, 0)).unwrap().tile.hollow().unwrap();
        assert_eq!(gem.len(), 1);
    }

    #[test]
    fn totals_sum_the_haul() {
        let mut maze = Maze::new(
            p(0, 0),
            vec![p(0, 2)],
            vec![],
            vec![(Hollow::exclusive(vec![t("gem", 2, 10), t("bar", 3, 6)]), p(0, 1))],
            1,
            3,
        )
        .unwrap();
        let trip = maze.expedition(&ExpeditionConfig::default().with_capacity(10));
        assert_eq!(trip.path, Some(vec![p(0, 0), p(0, 1), p(0, 2)]));
        assert_eq!(trip.treasures, Some(vec![t("gem", 2, 10)]));
        assert_eq!(trip.total_value(), 10);
        assert_eq!(trip.total_weight(), 2);
    }
}
