use hollows::hollow::{Hollow, shared_heap};
use hollows::maze::{Maze, Position};
use hollows::treasure::TreasureError;
use hollows::{ExpeditionConfig, Treasure};
use tracing_subscriber::EnvFilter;

fn loot(items: &[(&str, u32, u32)]) -> Result<Vec<Treasure>, TreasureError> {
    return items
        .iter()
        .map(|(name, weight, value)| Treasure::new(*name, *weight, *value))
        .collect();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // P start, E exit, S exclusive hollow, M shared hollow
    //
    // P . # . E
    // . S # M .
    // . . . . #
    // M # S . .
    let heap = shared_heap(loot(&[
        ("amulet", 3, 30),
        ("chalice", 6, 24),
        ("scroll", 1, 2),
        ("idol", 9, 45),
    ])?);
    let hollows = vec![
        (Hollow::exclusive(loot(&[("dagger", 2, 8), ("helm", 5, 10)])?), Position::new(1, 1)),
        (Hollow::shared(&heap), Position::new(1, 3)),
        (Hollow::shared(&heap), Position::new(3, 0)),
        (Hollow::exclusive(loot(&[("ruby", 1, 7), ("shield", 7, 14)])?), Position::new(3, 2)),
    ];
    let walls = vec![
        Position::new(0, 2),
        Position::new(1, 2),
        Position::new(2, 4),
        Position::new(3, 1),
    ];
    let exits = vec![Position::new(0, 4)];
    let mut maze = Maze::new(Position::new(0, 0), exits, walls, hollows, 4, 5)?;

    let config = ExpeditionConfig::default().with_capacity(10);
    let trip = maze.expedition(&config);

    match &trip.path {
        Some(path) => {
            let cells: Vec<String> = path.iter().map(|p| p.to_string()).collect();
            println!("way out: {}", cells.join(" -> "));
        }
        None => println!("no way out"),
    }
    match &trip.treasures {
        Some(treasures) => {
            for treasure in treasures {
                println!("  took {}", treasure);
            }
            println!("total value {}, total weight {}", trip.total_value(), trip.total_weight());
        }
        None => println!("nothing collected"),
    }
    return Ok(());
}
