#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_rules::{
    init_logging, render::render_labeled, AttackResult, Coordinate, Fleet, Gameboard,
    STANDARD_FLEET,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};

/// Place the standard fleet on a board, fire some attacks and dump the result.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Board width and height.
    #[arg(long, default_value_t = battleship_rules::DEFAULT_DIMENSIONS)]
    dimensions: usize,
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Random shots fired after the explicit attacks.
    #[arg(long, default_value_t = 0)]
    shots: usize,
    /// Attack a cell in board notation, e.g. --attack B3. Repeatable.
    #[arg(long = "attack", value_name = "COORD")]
    attacks: Vec<Coordinate>,
    /// Print a JSON summary instead of the board.
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut board = Gameboard::new(cli.dimensions)?;
    let mut fleet = Fleet::standard();
    for id in fleet.ids().collect::<Vec<_>>() {
        board.place_randomly(&mut fleet, id, &mut rng)?;
    }

    let (mut hits, mut misses) = (0usize, 0usize);
    let mut tally = |result: AttackResult| match result {
        AttackResult::Hit => hits += 1,
        AttackResult::Miss => misses += 1,
        AttackResult::AlreadyAttacked => {}
    };

    for at in &cli.attacks {
        match board.receive_attack(&mut fleet, *at) {
            Ok(result) => {
                log::info!("{} -> {:?}", at, result);
                tally(result);
            }
            Err(e) => log::warn!("{} -> {}", at, e),
        }
    }

    for _ in 0..cli.shots {
        let open: Vec<Coordinate> = (0..board.dimensions())
            .flat_map(|y| (0..board.dimensions()).map(move |x| Coordinate::new(x, y)))
            .filter(|&c| board.cell(c).is_some_and(|cell| !cell.cell_type().is_attacked()))
            .collect();
        if open.is_empty() {
            break;
        }
        let at = open[rng.random_range(0..open.len())];
        tally(board.receive_attack(&mut fleet, at)?);
    }

    let sunk: Vec<&str> = fleet
        .iter()
        .zip(STANDARD_FLEET.iter())
        .filter(|((_, ship), _)| ship.is_sunk())
        .map(|(_, class)| class.name())
        .collect();

    if cli.json {
        let summary = serde_json::json!({
            "dimensions": board.dimensions(),
            "hits": hits,
            "misses": misses,
            "sunk": sunk,
            "all_sunk": board.all_sunk(&fleet),
        });
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        print!("{}", render_labeled(&board.gameboard()));
        println!("hits: {}, misses: {}, sunk: {:?}", hits, misses, sunk);
        if board.all_sunk(&fleet) {
            println!("All ships sunk.");
        }
    }
    Ok(())
}
