use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use libdubeolsik::source::{normalize, trim_line_ending};
use libdubeolsik::{
    CharacterEvent, Dubeolsik, DubeolsikConfig, Engine, JamoPosition, Player, TextSource,
    TypingPlan,
};
use libhangul_core::TranscriptEmitter;

#[derive(Parser)]
#[command(name = "dubeolsik")]
#[command(about = "Type Hangul text as Dubeolsik (2-set) key presses")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Text for a quick keystroke conversion
    input: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 2-set keystrokes for the text (uppercase = Shift)
    Keys {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the event stream for the text
    Plan {
        #[arg(long, value_enum, default_value_t = PlanFormat::Text)]
        format: PlanFormat,
        /// Type every character directly instead of pressing jamo keys
        #[arg(long)]
        plain: bool,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Count down, then play the key presses as a transcript on stdout
    Type {
        /// Seconds to wait before typing starts
        #[arg(long)]
        delay: Option<u64>,
        /// Type every character directly instead of pressing jamo keys
        #[arg(long)]
        plain: bool,
        /// Disable all pauses between keys and characters
        #[arg(long)]
        instant: bool,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List the Dubeolsik key table
    Keymap,
}

#[derive(Args)]
struct SourceArgs {
    /// Text to use; stdin is read when no other source is given
    text: Option<String>,
    /// Read the text from a UTF-8 file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,
    /// Read the text from the system clipboard
    #[arg(long, conflicts_with_all = ["text", "file"])]
    clipboard: bool,
    /// Keep the text exactly as read (no NFC composition)
    #[arg(long)]
    no_normalize: bool,
}

impl SourceArgs {
    fn source(&self) -> TextSource {
        match (&self.text, &self.file) {
            (Some(text), _) => TextSource::Inline(text.clone()),
            (None, Some(path)) => TextSource::File(path.clone()),
            (None, None) if self.clipboard => TextSource::Clipboard,
            (None, None) => TextSource::Stdin,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, PartialEq, Eq)]
enum PlanFormat {
    Text,
    Json,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<DubeolsikConfig> {
    match path {
        Some(path) => DubeolsikConfig::load_toml(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(DubeolsikConfig::default()),
    }
}

/// Read the source and apply the configured clean-up.
fn read_text(args: &SourceArgs, cfg: &DubeolsikConfig) -> Result<String> {
    let source = args.source();
    let raw = source.read()?;
    let text = if source.trims_line_ending() {
        trim_line_ending(&raw)
    } else {
        raw.as_str()
    };
    if cfg.normalize && !args.no_normalize {
        Ok(normalize(text))
    } else {
        Ok(text.to_string())
    }
}

fn make_plan(engine: &Engine, text: &str, plain: bool) -> TypingPlan {
    if plain {
        engine.plain_plan(text)
    } else {
        engine.plan(text)
    }
}

fn position_label(position: JamoPosition) -> &'static str {
    match position {
        JamoPosition::Leading => "leading",
        JamoPosition::Vowel => "vowel",
        JamoPosition::Trailing => "trailing",
        JamoPosition::Unattached => "unattached",
    }
}

fn write_plan_text(out: &mut dyn Write, plan: &TypingPlan) -> io::Result<()> {
    for event in plan.events() {
        match event {
            CharacterEvent::Jamo(ev) => writeln!(
                out,
                "{}\t{:<10}\t{}",
                ev.jamo,
                position_label(ev.jamo.position()),
                ev.keys
            )?,
            CharacterEvent::Direct(ch) => writeln!(out, "{:?}\tdirect", ch)?,
        }
    }
    Ok(())
}

fn write_keymap(out: &mut dyn Write) -> io::Result<()> {
    let mut entries: Vec<_> = Dubeolsik::entries().collect();
    entries.sort_by_key(|(symbol, _)| *symbol);
    for (symbol, keys) in entries {
        writeln!(out, "{}\t{}", symbol, keys)?;
    }
    Ok(())
}

fn countdown(secs: u64) {
    if secs == 0 {
        return;
    }
    info!("make sure the target input method is set to Korean and focus the text box");
    for remaining in (1..=secs).rev() {
        info!("typing starts in {}...", remaining);
        std::thread::sleep(Duration::from_secs(1));
    }
}

fn handle_keys(source: &SourceArgs, cfg: &DubeolsikConfig) -> Result<()> {
    let text = read_text(source, cfg)?;
    let engine = Engine::new();
    println!("{}", engine.keystrokes(&text));
    Ok(())
}

fn handle_plan(
    format: PlanFormat,
    plain: bool,
    source: &SourceArgs,
    cfg: &DubeolsikConfig,
) -> Result<()> {
    let text = read_text(source, cfg)?;
    let plan = make_plan(&Engine::new(), &text, plain || cfg.plain);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        PlanFormat::Text => write_plan_text(&mut out, &plan)?,
        PlanFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &plan).context("failed to write plan as JSON")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn handle_type(
    delay: Option<u64>,
    plain: bool,
    instant: bool,
    source: &SourceArgs,
    cfg: &DubeolsikConfig,
) -> Result<()> {
    let text = read_text(source, cfg)?;
    let engine = Engine::new();
    let stream = match make_plan(&engine, &text, plain || cfg.plain) {
        TypingPlan::Empty => {
            warn!("source text is empty; nothing to type");
            return Ok(());
        }
        TypingPlan::Events(stream) => stream,
    };
    info!(
        chars = text.chars().count(),
        keystrokes = stream.keystrokes(),
        direct = stream.direct_events(),
        "text to be typed: {:?}",
        text
    );

    let mut pacing = cfg.base().pacing;
    if let Some(secs) = delay {
        pacing.start_delay_secs = secs;
    }
    if instant {
        pacing = libdubeolsik::Pacing {
            start_delay_secs: pacing.start_delay_secs,
            ..libdubeolsik::Pacing::instant()
        };
    }
    countdown(pacing.start_delay_secs);

    let stdout = io::stdout();
    let mut emitter = TranscriptEmitter::new(stdout.lock());
    let stats = Player::new(pacing).play(stream.events(), &mut emitter)?;
    emitter.finish()?;

    info!(
        characters = stats.characters,
        keystrokes = stats.keystrokes,
        direct = stats.direct,
        "typing complete"
    );
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Keys { source }) => handle_keys(&source, &cfg),
        Some(Commands::Plan {
            format,
            plain,
            source,
        }) => handle_plan(format, plain, &source, &cfg),
        Some(Commands::Type {
            delay,
            plain,
            instant,
            source,
        }) => handle_type(delay, plain, instant, &source, &cfg),
        Some(Commands::Keymap) => {
            write_keymap(&mut io::stdout().lock())?;
            Ok(())
        }
        None => {
            // Bare invocation: convert the argument, or stdin when there is none
            let source = SourceArgs {
                text: cli.input,
                file: None,
                clipboard: false,
                no_normalize: false,
            };
            handle_keys(&source, &cfg)
        }
    }
}
