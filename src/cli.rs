//! CLI argument parsing and help text

use crate::config::Profile;

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    /// Look up a single selection and print the tooltips
    Lookup { text: String },
    /// Feed a replay script through the coordinator
    Replay { path: String },
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
    pub profile: Option<Profile>,
}

/// Parse arguments (without the program name)
pub fn parse_args(args: &[String]) -> Result<Args, String> {
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return Ok(Args {
            command: Command::Help,
            profile: None,
        });
    }

    if args.iter().any(|arg| arg == "--version" || arg == "-v") {
        return Ok(Args {
            command: Command::Version,
            profile: None,
        });
    }

    let mut profile = None;
    let mut replay = None;
    let mut words = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--profile" => {
                let name = iter.next().ok_or("--profile needs a value")?;
                profile = Some(
                    Profile::parse(name).ok_or_else(|| format!("unknown profile '{}'", name))?,
                );
            }
            "--replay" => {
                replay = Some(iter.next().ok_or("--replay needs a file")?.clone());
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown option '{}'", other));
            }
            word => words.push(word.to_string()),
        }
    }

    let command = match (replay, words.is_empty()) {
        (Some(_), false) => return Err("--replay cannot be combined with TEXT".to_string()),
        (Some(path), true) => Command::Replay { path },
        (None, false) => Command::Lookup {
            text: words.join(" "),
        },
        (None, true) => Command::Help,
    };

    Ok(Args { command, profile })
}

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("glosstip v{}", version);
    println!("Selection-triggered dictionary and translation tooltips");
    println!();
    println!("USAGE:");
    println!("    glosstip [OPTIONS] [TEXT]");
    println!();
    println!("OPTIONS:");
    println!("    --profile <NAME>      Source profile to use (overrides GLOSSTIP_CONFIG)");
    println!("    --replay <FILE>       Replay a JSON-lines event script");
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("PROFILES:");
    for profile in Profile::all() {
        println!("    {}", profile.name());
    }
    println!();
    println!("EXAMPLES:");
    println!("    # Look up a word, read it aloud and print the tooltips");
    println!("    glosstip hello");
    println!();
    println!("    # Korean voice, patient Google fallback");
    println!("    glosstip --profile iciba-google-ko \"good morning\"");
    println!();
    println!("    # Replay recorded selections, pointer moves and scrolls");
    println!("    glosstip --replay session.jsonl");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    GLOSSTIP_PROFILE                 - Profile name (default: iciba-google)");
    println!("    GLOSSTIP_CONFIG                  - JSON configuration file");
    println!("    GLOSSTIP_TARGET_LANG             - Translation target language");
    println!("    GLOSSTIP_SOURCE_LANG             - Translation source language");
    println!("    GLOSSTIP_SPEECH_LANG             - Preferred voice language tag");
    println!("    GLOSSTIP_SECONDARY_TIMEOUT_MS    - Race timeout of the second source");
    println!("    GLOSSTIP_REQUEST_TIMEOUT_SECONDS - HTTP request timeout (default: 30)");
    println!("    GLOSSTIP_TRANSLATE_API_URL       - Self-hosted translate API base URL");
    println!("    GLOSSTIP_TRANSLATE_API_SECRET    - Self-hosted translate API secret");
    println!("    GLOSSTIP_SPEECH_COMMAND          - Synthesizer command, or 'none'");
    println!("    GLOSSTIP_LOG_DIR                 - Write JSON logs to this directory");
    println!("    RUST_LOG                         - Console log filter");
    println!();
    println!("CONFIGURATION:");
    println!("    Settings can also be placed in a .env file in the current directory.");
}

pub fn print_version() {
    println!("glosstip v{}", env!("CARGO_PKG_VERSION"));
}
