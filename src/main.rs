//! CLI entry point for interscan

use std::io::{self, BufRead, IsTerminal};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use env_logger::Env;
use interscan::tree::DEFAULT_MAX_DEPTH;
use interscan::{
    JsonFormatter, ListingMode, OutputConfig, StreamingFormatter, WalkerConfig, print_json, scan,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "interscan")]
#[command(about = "Display a directory as a color-coded tree, optionally hiding file extensions")]
#[command(version)]
struct Args {
    /// Input line: <PATH> [--ignore[:] EXT...]. Prompts on stdin when omitted.
    /// Options must come before it; everything after the path is part of the line.
    #[arg(value_name = "INPUT", trailing_var_arg = true, allow_hyphen_values = true)]
    input: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Abort when directories nest deeper than N levels (guards against symlink cycles)
    #[arg(long = "max-depth", value_name = "N", default_value_t = DEFAULT_MAX_DEPTH, value_parser = parse_max_depth)]
    max_depth: usize,

    /// Mark directories that cannot be read instead of showing them as empty
    #[arg(long = "mark-unreadable")]
    mark_unreadable: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Log more to stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn parse_max_depth(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Read the input line from stdin, optionally after printing the prompt.
fn read_input_line(console: &mut StreamingFormatter, show_prompt: bool) -> io::Result<String> {
    if show_prompt {
        console.prompt()?;
    }
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut console = StreamingFormatter::new(OutputConfig {
        use_color: !args.json && should_use_color(args.color),
    });

    let line = if args.input.is_empty() {
        // JSON consumers read stdout, so keep the prompt out of it.
        read_input_line(&mut console, !args.json).unwrap_or_else(|e| {
            eprintln!("interscan: error reading input: {}", e);
            process::exit(1);
        })
    } else {
        args.input.join(" ")
    };

    let config = WalkerConfig {
        max_depth: args.max_depth,
        listing_mode: if args.mark_unreadable {
            ListingMode::Mark
        } else {
            ListingMode::Silent
        },
        ..Default::default()
    };

    let result = if args.json {
        let mut json = JsonFormatter::new();
        match scan(&line, config, &mut json) {
            Ok(_) => print_json(&json.into_document()).map_err(interscan::Error::from),
            Err(e) => Err(e),
        }
    } else {
        scan(&line, config, &mut console).map(|_| ())
    };

    if let Err(e) = result {
        if let Some(message) = e.abort_message() {
            // JSON stdout must stay parseable.
            if args.json {
                eprintln!("interscan: {}", message);
                return;
            }
            if let Err(e) = console.message(message) {
                eprintln!("interscan: error writing output: {}", e);
                process::exit(1);
            }
            return;
        }
        eprintln!("interscan: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_words_capture_ignore_directive() {
        let args = Args::parse_from(["interscan", "/tmp/proj", "--ignore", "cpp,", "json"]);
        assert_eq!(args.input.join(" "), "/tmp/proj --ignore cpp, json");
        assert!(!args.json);
    }

    #[test]
    fn test_options_before_input() {
        let args = Args::parse_from([
            "interscan",
            "--json",
            "--max-depth",
            "7",
            "--mark-unreadable",
            "-vv",
            "dir",
        ]);
        assert!(args.json);
        assert!(args.mark_unreadable);
        assert_eq!(args.max_depth, 7);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.input, vec!["dir"]);
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["interscan"]);
        assert!(args.input.is_empty());
        assert_eq!(args.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!args.mark_unreadable);
    }

    #[test]
    fn test_parse_max_depth() {
        assert_eq!(parse_max_depth("12"), Ok(12));
        assert!(parse_max_depth("0").is_err());
        assert!(parse_max_depth("deep").is_err());
    }

    #[test]
    fn test_color_mode_explicit() {
        assert!(should_use_color(ColorMode::Always));
        assert!(!should_use_color(ColorMode::Never));
    }
}
