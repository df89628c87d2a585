use anyhow::{Context, Result};
use chess_ai::Difficulty;
use chess_arena::config::ArenaConfig;
use chess_arena::game_runner::{GameRunner, MatchResult};
use chess_arena::json_output::write_game_json;
use chess_core::Square;
use chess_engine::{perft_divide, Game};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-arena")]
#[command(about = "Self-play and move inspection for the chess engine")]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = "arena.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a series of games between two difficulty tiers
    Play(PlayArgs),
    /// Print the legal destinations of the piece on a square
    Moves {
        /// Position in FEN
        fen: String,
        /// Square in algebraic notation, e.g. e2
        square: String,
    },
    /// Count leaf nodes of the legal move tree, split by root move
    Perft {
        /// Depth in plies
        depth: u32,
        /// Position in FEN (defaults to the starting position)
        #[arg(long)]
        fen: Option<String>,
    },
}

/// Overrides for the values read from the configuration file.
#[derive(Args, Default)]
struct PlayArgs {
    /// Number of games to play
    #[arg(short, long)]
    games: Option<u32>,
    /// Tier for white: random, minimax or alpha-beta
    #[arg(short, long)]
    white: Option<Difficulty>,
    /// Tier for black: random, minimax or alpha-beta
    #[arg(short, long)]
    black: Option<Difficulty>,
    /// Seed for the random tier
    #[arg(short, long)]
    seed: Option<u64>,
    /// Starting position in FEN
    #[arg(long)]
    fen: Option<String>,
    /// Half-moves before a game is abandoned as a draw
    #[arg(long)]
    max_plies: Option<usize>,
    /// Directory for per-game JSON records
    #[arg(short, long)]
    json: Option<PathBuf>,
}

impl PlayArgs {
    fn apply(self, mut config: ArenaConfig) -> ArenaConfig {
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(white) = self.white {
            config.white = white;
        }
        if let Some(black) = self.black {
            config.black = black;
        }
        if let Some(max_plies) = self.max_plies {
            config.max_plies = max_plies;
        }
        config.seed = self.seed.or(config.seed);
        config.start_fen = self.fen.or(config.start_fen);
        config.json_dir = self.json.or(config.json_dir);
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => {
            let config = ArenaConfig::load_from(&cli.config)
                .with_context(|| format!("loading {}", cli.config.display()))?;
            play(args.apply(config))
        }
        Commands::Moves { fen, square } => moves(&fen, &square),
        Commands::Perft { depth, fen } => perft(depth, fen.as_deref()),
    }
}

fn play(config: ArenaConfig) -> Result<()> {
    let runner = GameRunner::new(&config).context("invalid arena configuration")?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    if let Some(dir) = &config.json_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    println!(
        "Running {} games: {} (white) vs {} (black)",
        config.games, config.white, config.black
    );

    let mut white_wins = 0;
    let mut black_wins = 0;
    let mut draws = 0;

    for i in 1..=config.games {
        let record = runner.play_game(&mut rng)?;

        match record.result {
            MatchResult::WhiteWins => white_wins += 1,
            MatchResult::BlackWins => black_wins += 1,
            MatchResult::Draw => draws += 1,
        }

        if let Some(dir) = &config.json_dir {
            let id = format!("game-{}", i);
            let path = dir.join(format!("{}.json", id));
            if let Err(e) = write_game_json(&path, &id, &record) {
                tracing::warn!(path = %path.display(), error = %e, "failed to write game record");
            }
        }

        println!(
            "Game {}: {} by {:?} ({} plies)",
            i,
            record.result.as_str(),
            record.termination,
            record.moves.len()
        );
    }

    println!();
    println!(
        "Results: {} wins: {}, {} wins: {}, draws: {}",
        config.white, white_wins, config.black, black_wins, draws
    );
    Ok(())
}

fn moves(fen: &str, square: &str) -> Result<()> {
    let game = Game::from_fen(fen).context("invalid FEN")?;
    let from =
        Square::from_algebraic(square).with_context(|| format!("invalid square: {}", square))?;

    let mut destinations = game.legal_destinations(from);
    destinations.sort();
    let names: Vec<String> = destinations.iter().map(|sq| sq.to_algebraic()).collect();
    println!("{}", names.join(" "));
    Ok(())
}

fn perft(depth: u32, fen: Option<&str>) -> Result<()> {
    let game = match fen {
        Some(fen) => Game::from_fen(fen).context("invalid FEN")?,
        None => Game::new(),
    };

    let split = perft_divide(game.position(), depth);
    for (uci, nodes) in &split {
        println!("{}: {}", uci, nodes);
    }
    let total: u64 = split.iter().map(|(_, nodes)| nodes).sum();
    println!();
    println!("Nodes: {}", total);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_defaults() {
        let cli = Cli::try_parse_from(["chess-arena", "play"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("arena.toml"));
        match cli.command {
            Commands::Play(args) => {
                assert!(args.games.is_none());
                assert!(args.white.is_none());
                assert!(args.seed.is_none());
            }
            _ => panic!("Expected Play command"),
        }
    }

    #[test]
    fn test_play_with_flags() {
        let cli = Cli::try_parse_from([
            "chess-arena",
            "--config",
            "custom.toml",
            "play",
            "-g",
            "5",
            "-w",
            "minimax",
            "-b",
            "2",
            "--seed",
            "42",
            "--json",
            "out",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        match cli.command {
            Commands::Play(args) => {
                assert_eq!(args.games, Some(5));
                assert_eq!(args.white, Some(Difficulty::Minimax));
                assert_eq!(args.black, Some(Difficulty::AlphaBeta));
                assert_eq!(args.seed, Some(42));
                assert_eq!(args.json, Some(PathBuf::from("out")));
            }
            _ => panic!("Expected Play command"),
        }
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        assert!(Cli::try_parse_from(["chess-arena", "play", "-w", "grandmaster"]).is_err());
    }

    #[test]
    fn test_moves_command() {
        let cli = Cli::try_parse_from([
            "chess-arena",
            "moves",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "e2",
        ])
        .unwrap();
        match cli.command {
            Commands::Moves { fen, square } => {
                assert!(fen.starts_with("rnbqkbnr/"));
                assert_eq!(square, "e2");
            }
            _ => panic!("Expected Moves command"),
        }
    }

    #[test]
    fn test_perft_command() {
        let cli = Cli::try_parse_from(["chess-arena", "perft", "3"]).unwrap();
        match cli.command {
            Commands::Perft { depth, fen } => {
                assert_eq!(depth, 3);
                assert!(fen.is_none());
            }
            _ => panic!("Expected Perft command"),
        }
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let config = ArenaConfig {
            seed: Some(1),
            ..ArenaConfig::default()
        };
        let args = PlayArgs {
            games: Some(2),
            black: Some(Difficulty::Minimax),
            ..PlayArgs::default()
        };

        let merged = args.apply(config);
        assert_eq!(merged.games, 2);
        assert_eq!(merged.white, Difficulty::AlphaBeta);
        assert_eq!(merged.black, Difficulty::Minimax);
        assert_eq!(merged.seed, Some(1));
    }

    #[test]
    fn test_moves_rejects_bad_input() {
        assert!(moves("not a fen", "e2").is_err());
        assert!(moves(chess_core::FenParser::STARTPOS, "z9").is_err());
        assert!(moves(chess_core::FenParser::STARTPOS, "e2").is_ok());
    }
}
