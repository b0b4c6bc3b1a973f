//! Command-line front end for the playkit utilities.
//!
//! Usage:
//!   playkit [--config <path>] <command> [args]

use playkit::calendar::is_today_halloween;
use playkit::config::{config_file_path, PlaykitConfig};
use playkit::format::pad_with_zeros;
use playkit::records::parse_records_report;
use playkit::version_file::update_version_file;
use playkit::Toolkit;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config_path, args) = split_config_arg(args);
    let mut config = match config_path {
        Some(path) => PlaykitConfig::load_or_default(&path),
        None => config_file_path()
            .map(|path| PlaykitConfig::load_or_default(&path))
            .unwrap_or_default(),
    };

    let Some(command) = args.first() else {
        print_help();
        std::process::exit(1);
    };
    let rest = &args[1..];

    match command.as_str() {
        "level" => {
            let old_score = parse_or_exit::<i64>(rest.first(), "score");
            let toolkit = Toolkit::new(config);
            println!(
                "Level {} ({:.1}% to next)",
                toolkit.level(old_score),
                toolkit.progress(old_score) * 100.0
            );
            if let Some(new_score) = rest.get(1) {
                let new_score = parse_or_exit::<i64>(Some(new_score), "new score");
                println!(
                    "New score {} -> level {}, leveled up: {}",
                    new_score,
                    toolkit.level(new_score),
                    toolkit.leveled_up(old_score, new_score)
                );
            }
        }
        "reward" => {
            let opts = parse_reward_args(rest).unwrap_or_else(|e| {
                eprintln!("{}", e);
                std::process::exit(1);
            });
            if opts.seed.is_some() {
                config.seed = opts.seed;
            }
            let mut toolkit = Toolkit::new(config);
            if opts.draws == 1 {
                let draw = toolkit.draw_reward(opts.speedrun);
                println!("won: {}, loot id: {}", draw.won, draw.loot_id);
            } else {
                let stats = toolkit.reward_stats(opts.speedrun, opts.draws);
                if opts.json {
                    println!("{}", stats.to_json());
                } else {
                    print!("{}", stats.to_text());
                }
            }
        }
        "sample" => {
            let min = parse_or_exit::<i32>(rest.first(), "min");
            let max = parse_or_exit::<i32>(rest.get(1), "max");
            let count = parse_or_exit::<usize>(rest.get(2), "count");
            if let Some(seed) = seed_option(&rest[3.min(rest.len())..]) {
                config.seed = Some(seed);
            }
            let mut toolkit = Toolkit::new(config);
            match toolkit.try_sample_unique_ints(min, max, count) {
                Ok(values) => println!("{:?}", values),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
        "pad" => {
            let number = parse_or_exit::<i64>(rest.first(), "number");
            let width = parse_or_exit::<usize>(rest.get(1), "width");
            println!("{}", pad_with_zeros(number, width));
        }
        "parse" => {
            let text = rest.join(" ");
            let report = parse_records_report(&text);
            for player in &report.players {
                println!("{}\t{}\t{}", player.public_id, player.name, player.score);
            }
            for error in &report.rejected {
                eprintln!("skipped: {}", error);
            }
        }
        "halloween" => {
            println!(
                "{}",
                if is_today_halloween() {
                    "Today is Halloween!"
                } else {
                    "Today is NOT Halloween!"
                }
            );
        }
        "version-file" => {
            let (Some(path), Some(version)) = (rest.first(), rest.get(1)) else {
                eprintln!("Usage: playkit version-file <path> <version>");
                std::process::exit(1);
            };
            let outcome = update_version_file(Path::new(path), version)?;
            println!("{:?}", outcome);
        }
        "--version" | "-v" => {
            println!("playkit {}", env!("CARGO_PKG_VERSION"));
        }
        "--help" | "-h" => print_help(),
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Run 'playkit --help' for usage.");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Pull `--config <path>` out of the argument list.
fn split_config_arg(args: Vec<String>) -> (Option<PathBuf>, Vec<String>) {
    let mut config_path = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            config_path = iter.next().map(PathBuf::from);
        } else {
            rest.push(arg);
        }
    }
    (config_path, rest)
}

fn parse_or_exit<T: std::str::FromStr>(arg: Option<&String>, name: &str) -> T {
    match arg.and_then(|a| a.parse().ok()) {
        Some(value) => value,
        None => {
            eprintln!("Missing or invalid <{}>", name);
            std::process::exit(1);
        }
    }
}

struct RewardOptions {
    speedrun: bool,
    draws: u64,
    seed: Option<u64>,
    json: bool,
}

fn parse_reward_args(args: &[String]) -> Result<RewardOptions, String> {
    let mut opts = RewardOptions {
        speedrun: false,
        draws: 1,
        seed: None,
        json: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--speedrun" => opts.speedrun = true,
            "--json" => opts.json = true,
            "-n" | "--draws" => {
                opts.draws = parse_flag_value(args.get(i + 1), "draws")?;
                i += 1;
            }
            "-s" | "--seed" => {
                opts.seed = Some(parse_flag_value(args.get(i + 1), "seed")?);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    Ok(opts)
}

fn parse_flag_value<T: std::str::FromStr>(arg: Option<&String>, name: &str) -> Result<T, String> {
    arg.and_then(|a| a.parse().ok())
        .ok_or_else(|| format!("Missing or invalid <{}>", name))
}

fn seed_option(args: &[String]) -> Option<u64> {
    args.windows(2)
        .find(|w| w[0] == "-s" || w[0] == "--seed")
        .and_then(|w| w[1].parse().ok())
}

fn print_help() {
    println!("Playkit - gameplay utility functions");
    println!();
    println!("USAGE:");
    println!("    playkit [--config <path>] <command> [args]");
    println!();
    println!("COMMANDS:");
    println!("    level <score> [<new_score>]        Level, progress and level-up check");
    println!("    reward [--speedrun] [-n N] [-s S]  Draw a reward (N > 1 prints stats)");
    println!("           [--json]                    Stats as JSON");
    println!("    sample <min> <max> <count> [-s S]  Unique random integers in [min, max]");
    println!("    pad <number> <width>               Zero-pad a number");
    println!("    parse <text>                       Parse (id,name,score),(...) records");
    println!("    halloween                          Is today Halloween?");
    println!("    version-file <path> <version>      Sync a version file");
    println!("    --version                          Show version information");
    println!("    --help                             Show this help");
    println!();
    println!("Set RUST_LOG=debug for diagnostics.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reward_args_defaults() {
        let opts = parse_reward_args(&[]).unwrap();
        assert!(!opts.speedrun);
        assert!(!opts.json);
        assert_eq!(opts.draws, 1);
        assert_eq!(opts.seed, None);
    }

    #[test]
    fn test_reward_args_all_flags() {
        let opts =
            parse_reward_args(&args(&["--speedrun", "-n", "500", "--seed", "42", "--json"])).unwrap();
        assert!(opts.speedrun);
        assert!(opts.json);
        assert_eq!(opts.draws, 500);
        assert_eq!(opts.seed, Some(42));
    }

    #[test]
    fn test_reward_args_invalid_draws_rejected() {
        assert!(parse_reward_args(&args(&["-n", "abc"])).is_err());
        assert!(parse_reward_args(&args(&["--draws"])).is_err());
        assert!(parse_reward_args(&args(&["-s", "-1"])).is_err());
    }

    #[test]
    fn test_split_config_arg() {
        let (path, rest) = split_config_arg(args(&["--config", "my.json", "pad", "7", "3"]));
        assert_eq!(path, Some(PathBuf::from("my.json")));
        assert_eq!(rest, args(&["pad", "7", "3"]));
    }
}
