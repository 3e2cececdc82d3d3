//! War simulator CLI.
//!
//! `play` runs one game and prints `"<code> <data>"` (exit status = outcome
//! code). `batch` tallies outcomes over a seed range. `draw`, `permute` and
//! `sort` exercise the seeded generator on its own.
//!
//! Bad input or an engine failure exits with status 255, outside the
//! outcome code range.

use std::error::Error;
use std::io::Read;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_war::perm::bubble_sort;
use rust_war::{seed_from_signed, GameMode, GameRng, SimConfig, Simulator, WarRules};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit status for errors; outcome codes use 0..=3.
const FAILURE: u8 = 255;

#[derive(Parser)]
#[command(name = "war")]
#[command(about = "Deterministic War card game simulator")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a single game
    Play(PlayArgs),

    /// Play one game per seed and tally the outcomes
    Batch(BatchArgs),

    /// Print three draws from [a, b]
    Draw {
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        seed: i64,
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Print a random permutation of 0..n
    Permute {
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        seed: i64,
        #[arg(value_parser = clap::value_parser!(u16).range(1..=100))]
        n: u16,
    },

    /// Bubble sort a random permutation of 0..n and print the pass count
    Sort {
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        seed: i64,
        #[arg(value_parser = clap::value_parser!(u16).range(1..=100))]
        n: u16,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    #[value(alias = "0")]
    Standard,
    #[value(alias = "1")]
    Simple,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Standard => GameMode::Standard,
            ModeArg::Simple => GameMode::Simple,
        }
    }
}

#[derive(Args)]
struct RuleArgs {
    /// Tie handling mode (standard/0 or simple/1)
    #[arg(long, default_value = "standard")]
    mode: ModeArg,

    /// Conflict budget
    #[arg(long, default_value = "1000")]
    max_conflicts: u64,

    /// Wars start at depth 2 and pay out only the loser's cards
    #[arg(long)]
    loser_only: bool,

    /// Stop a game after this many ticks (0 = unlimited)
    #[arg(long, default_value = "1000000")]
    tick_limit: u64,

    /// Print JSON instead of plain text
    #[arg(long)]
    json: bool,
}

impl RuleArgs {
    fn config(&self, seed: u64) -> SimConfig {
        let war = if self.loser_only {
            WarRules::loser_only()
        } else {
            WarRules::default()
        };
        let tick_limit = (self.tick_limit > 0).then_some(self.tick_limit);

        SimConfig::new(seed, self.mode.into(), self.max_conflicts)
            .with_war_rules(war)
            .with_tick_limit(tick_limit)
    }
}

#[derive(Args)]
struct PlayArgs {
    /// Deck shuffle seed (negative values are accepted)
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    seed: i64,

    /// Read "seed mode max_conflicts" from stdin instead of flags
    #[arg(long)]
    stdin: bool,

    #[command(flatten)]
    rules: RuleArgs,
}

#[derive(Args)]
struct BatchArgs {
    /// First seed (inclusive)
    #[arg(long, default_value = "0")]
    from: u64,

    /// Last seed (exclusive)
    #[arg(long, default_value = "1000")]
    to: u64,

    #[command(flatten)]
    rules: RuleArgs,
}

/// Read `seed mode max_conflicts` from stdin; rule flags still apply.
fn config_from_stdin(rules: &RuleArgs) -> Result<SimConfig, Box<dyn Error>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let parsed = SimConfig::from_console(&input)?;

    Ok(rules
        .config(parsed.seed)
        .with_mode(parsed.mode)
        .with_max_conflicts(parsed.max_conflicts))
}

fn play(args: &PlayArgs) -> Result<ExitCode, Box<dyn Error>> {
    let config = if args.stdin {
        config_from_stdin(&args.rules)?
    } else {
        args.rules.config(seed_from_signed(args.seed))
    };
    info!(
        seed = config.seed,
        mode = %config.mode,
        max_conflicts = config.max_conflicts,
        "starting game"
    );

    let report = Simulator::new().run(&config)?;
    if args.rules.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(ExitCode::from(report.code()))
}

fn batch(args: &BatchArgs) -> Result<ExitCode, Box<dyn Error>> {
    if args.from >= args.to {
        return Err(format!("empty seed range {}..{}", args.from, args.to).into());
    }

    let config = args.rules.config(args.from);
    let summary = Simulator::new().run_batch(args.from..args.to, &config)?;
    if args.rules.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }

    Ok(ExitCode::SUCCESS)
}

fn run(command: &Command) -> Result<ExitCode, Box<dyn Error>> {
    match command {
        Command::Play(args) => play(args),
        Command::Batch(args) => batch(args),
        Command::Draw { seed, a, b } => {
            let mut rng = GameRng::new(seed_from_signed(*seed));
            let draws = (0..3)
                .map(|_| rng.uniform_draw(*a, *b).map(|v| v.to_string()))
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", draws.join(" "));
            Ok(ExitCode::SUCCESS)
        }
        Command::Permute { seed, n } => {
            let perm = GameRng::new(seed_from_signed(*seed)).permutation(usize::from(*n))?;
            let line: Vec<String> = perm.iter().map(ToString::to_string).collect();
            println!("{}", line.join(" "));
            Ok(ExitCode::SUCCESS)
        }
        Command::Sort { seed, n } => {
            let mut perm = GameRng::new(seed_from_signed(*seed)).permutation(usize::from(*n))?;
            println!("{}", bubble_sort(&mut perm));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    // clap's own usage-error status (2) would read as an outcome code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(FAILURE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Silent by default, only warnings and errors; RUST_LOG overrides
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(FAILURE)
        }
    }
}
