use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four::ai::{Agent, Difficulty};
use connect_four::config::{AppConfig, FirstPlayer, Opponent, MAX_DEPTH};
use connect_four::game::{Board, GameState, Outcome, Side, COLS};

/// Play Connect Four against a minimax opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Engine strength
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Explicit search depth in plies (overrides difficulty)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DEPTH)))]
    depth: Option<u32>,

    /// Who drops the first token
    #[arg(long, value_enum)]
    first: Option<FirstPlayer>,

    /// Play against the engine or a second person at this console
    #[arg(long, value_enum)]
    opponent: Option<Opponent>,

    /// Analyse a 42-digit position (row-major from the top, 0 empty, 1 you,
    /// 2 engine) and print the engine's move instead of playing
    #[arg(long)]
    position: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Log search details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(difficulty) = cli.difficulty {
        app_config.engine.difficulty = difficulty;
        app_config.engine.depth = None;
    }
    if let Some(depth) = cli.depth {
        app_config.engine.depth = Some(depth);
    }
    if let Some(first) = cli.first {
        app_config.game.first = first;
    }
    if let Some(opponent) = cli.opponent {
        app_config.game.opponent = opponent;
    }
    app_config.validate()?;

    if cli.print_config {
        print!("{}", app_config.to_toml()?);
        return Ok(());
    }

    match cli.position {
        Some(position) => analyse(&app_config, &position),
        None => play(&app_config),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "connect_four=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn analyse(config: &AppConfig, position: &str) -> Result<()> {
    let board: Board = position.parse().context("parsing --position")?;
    let engine = config.engine.build_engine();
    let report = engine.search_report(&board);

    println!("{board}\n");
    match report.column {
        Some(col) => println!(
            "Engine plays column {} (score {}, depth {}, {} nodes)",
            col + 1,
            report.score,
            report.depth,
            report.stats.nodes
        ),
        None => println!("No legal move: the board is full"),
    }
    Ok(())
}

fn play(config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut engine = config.engine.build_engine();

    let two_humans = config.game.opponent == Opponent::Human;

    if two_humans {
        println!(
            "Connect Four: {} plays {}, {} plays {}",
            Side::PlayerOne.name(),
            Side::PlayerOne.symbol(),
            Side::PlayerTwo.name(),
            Side::PlayerTwo.symbol(),
        );
    } else {
        let strength = match config.engine.depth {
            Some(depth) => format!("depth {depth}"),
            None => format!(
                "{}, depth {}",
                config.engine.difficulty.name(),
                engine.depth()
            ),
        };
        println!(
            "Connect Four: you are {} against the engine ({}), {strength}",
            Side::PlayerOne.symbol(),
            Side::PlayerTwo.symbol(),
        );
    }

    loop {
        let first = match config.game.first {
            FirstPlayer::Human => Side::PlayerOne,
            FirstPlayer::Engine => Side::PlayerTwo,
            FirstPlayer::Random if rand::rng().random_bool(0.5) => Side::PlayerOne,
            FirstPlayer::Random => Side::PlayerTwo,
        };
        let mut state = GameState::new(first);
        info!(first = first.name(), depth = engine.depth(), "new game");

        while !state.is_terminal() {
            println!("\n{}\n", state.board());
            let human_turn = two_humans || state.current_player() == Side::PlayerOne;
            let column = if human_turn {
                match read_column(&mut input, &state, two_humans)? {
                    Some(col) => col,
                    None => return Ok(()),
                }
            } else {
                let col = engine
                    .select_action(&state)
                    .context("engine found no legal move on a live board")?;
                println!("Engine plays column {}", col + 1);
                col
            };
            state.apply_move_mut(column)?;
        }

        state.highlight_win();
        println!("\n{}\n", state.board());
        match state.outcome() {
            Outcome::Win(side) if two_humans => println!("{} wins!", side.name()),
            Outcome::Win(Side::PlayerOne) => println!("It's a victory. Well played!"),
            Outcome::Win(Side::PlayerTwo) => println!("You lost. Better luck next time!"),
            _ => println!("It's a tie. What a game!"),
        }
        info!(outcome = ?state.outcome(), moves = state.moves_played(), "game over");

        if !confirm(&mut input, "Do you want to play again?")? {
            return Ok(());
        }
    }
}

/// Prompt until the player names an open column. `None` on quit or EOF.
fn read_column(
    input: &mut impl BufRead,
    state: &GameState,
    name_player: bool,
) -> Result<Option<usize>> {
    let prompt = if name_player {
        let side = state.current_player();
        format!("{} ({}) to move", side.name(), side.symbol())
    } else {
        "Your move".to_string()
    };
    loop {
        print!("{prompt} (1-{COLS}, q to quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match line.parse::<usize>() {
            Ok(n) if (1..=COLS).contains(&n) => {
                if state.board().is_column_full(n - 1) {
                    println!("Column {n} is full, pick another one.");
                } else {
                    return Ok(Some(n - 1));
                }
            }
            Ok(_) => println!("Columns go from 1 to {COLS}."),
            Err(_) => println!("Please type a column number."),
        }
    }
}

fn confirm(input: &mut impl BufRead, message: &str) -> Result<bool> {
    loop {
        print!("{message} (y/n) ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim() {
            "y" | "Y" => return Ok(true),
            "n" | "N" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}
