use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use seva_config::logging::LoggingConfig;
use seva_core::preprocess::{DefaultPreprocessor, Preprocessor};
use seva_core::types::{TargetLanguage, TranslationMode};
use seva_lang_garhwali::{EMBEDDED_DICTIONARY, SongMetadata, TranslationEngine};
use tracing_subscriber::EnvFilter;

use self::commands::{SongOutput, SongRequest};

mod commands;
mod settings;

/// Garhwali to Hindi/English dictionary translator
#[derive(Parser, Debug)]
#[command(name = "seva", version, about)]
#[command(long_about = "Translates Garhwali text and song lyrics into Hindi or English using a word and phrase dictionary.

EXAMPLES:
    seva translate Namaste Shukriya               # Hello Thank you
    seva translate --to hindi \"Khaana khana\"       # खाना खाना
    echo \"Namaste UnknownWord\" | seva mark        # Namaste [UnknownWord]
    seva song --file lyrics.txt --mode literal    # Translate a song line by line
    seva validate my_words.json                   # Check a dictionary file

CONFIGURATION:
    Settings are read from ./config.json when present (or --config), then
    SEVA_DICTIONARY_PATH, SEVA_TARGET_LANGUAGE, SEVA_TRANSLATION_MODE,
    SEVA_LOG and SEVA_LOG_JSON override them. A .env file is loaded first.")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Base dictionary file, used instead of the embedded dictionary
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Additional dictionary merged on top of the base (repeatable)
    #[arg(long = "import", global = true, value_name = "FILE")]
    imports: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate text (read from stdin when no text is given)
    Translate {
        text: Vec<String>,

        /// Target language: hindi or english
        #[arg(short, long)]
        to: Option<TargetLanguage>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Bracket words missing from the dictionary
    Mark {
        text: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Show dictionary entries for each token
    Lookup {
        text: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Translate song lyrics line by line, keeping punctuation and layout
    Song {
        /// Lyrics file (stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// literal or meaning
        #[arg(short, long)]
        mode: Option<TranslationMode>,

        /// Rendering to print
        #[arg(short, long, value_enum, default_value = "both")]
        to: SongOutput,

        /// Write the export to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        artist: String,

        #[arg(long, default_value = "")]
        region: String,
    },

    /// Dictionary entry counts per category
    Stats {
        #[arg(long)]
        json: bool,
    },

    /// Validate a dictionary file (the embedded dictionary when omitted)
    Validate { file: Option<PathBuf> },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let loaded = settings::load_config(cli.config.as_deref())?;
    init_logging(&loaded.config.logging);
    loaded.report();

    let mut config = loaded.config;

    if let Some(path) = &cli.dictionary {
        config.dictionary.path = Some(path.display().to_string());
    }
    config
        .dictionary
        .additional_paths
        .extend(cli.imports.iter().map(|p| p.display().to_string()));

    let preprocessor = DefaultPreprocessor;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Translate { text, to, json } => {
            let text = preprocessor.process(&read_input(text)?);
            let to = to.unwrap_or(config.translator.target_language);
            let mut engine = build_engine(&config)?;
            commands::translate(&mut engine, &text, to, json, &mut stdout)?;
        }
        Command::Mark { text, json } => {
            let text = preprocessor.process(&read_input(text)?);
            commands::mark(&build_engine(&config)?, &text, json, &mut stdout)?;
        }
        Command::Lookup { text, json } => {
            let text = preprocessor.process(&read_input(text)?);
            commands::lookup(&build_engine(&config)?, &text, json, &mut stdout)?;
        }
        Command::Song {
            file,
            mode,
            to,
            output,
            title,
            artist,
            region,
        } => {
            let lyrics = match file {
                Some(path) => fs::read_to_string(&path)
                    .with_context(|| format!("cannot read lyrics {}", path.display()))?,
                None => read_stdin()?,
            };
            let lyrics = preprocessor.process_lines(&lyrics);
            let metadata = SongMetadata {
                title,
                artist,
                region,
            };
            let request = SongRequest {
                lyrics: &lyrics,
                mode: mode.unwrap_or(config.translator.mode),
                output: to,
                metadata: &metadata,
            };
            let engine = build_engine(&config)?;

            match output {
                Some(path) => {
                    let mut buf = Vec::new();
                    commands::song(&engine, request, &mut buf)?;
                    fs::write(&path, buf)
                        .with_context(|| format!("cannot write {}", path.display()))?;
                    tracing::info!("Exported translation to {}", path.display());
                }
                None => commands::song(&engine, request, &mut stdout)?,
            }
        }
        Command::Stats { json } => {
            let dictionary = settings::build_dictionary(&config.dictionary)?;
            commands::stats(&dictionary.stats(), json, &mut stdout)?;
        }
        Command::Validate { file } => {
            let valid = match file {
                Some(path) => {
                    let json = fs::read_to_string(&path)
                        .with_context(|| format!("cannot read {}", path.display()))?;
                    commands::validate(&json, &path.display().to_string(), &mut stdout)?
                }
                None => commands::validate(EMBEDDED_DICTIONARY, "embedded dictionary", &mut stdout)?,
            };

            if !valid {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_engine(config: &seva_config::Config) -> anyhow::Result<TranslationEngine> {
    let dictionary = settings::build_dictionary(&config.dictionary)?;
    Ok(TranslationEngine::new(dictionary))
}

/// Positional words joined by spaces, or all of stdin
fn read_input(words: Vec<String>) -> anyhow::Result<String> {
    if words.is_empty() {
        read_stdin()
    } else {
        Ok(words.join(" "))
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
