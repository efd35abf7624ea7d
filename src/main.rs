use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use tweetsplit::{SeparatorMode, Settings, SpecialFormat, SplitError, SplitSession, Tweet};

/// Split long text into a numbered thread of tweets
#[derive(Parser, Debug)]
#[command(name = "tweetsplit")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// JSON settings file; flags below override its values
    #[arg(short, long, env = "TWEETSPLIT_CONFIG")]
    config: Option<PathBuf>,

    /// Separator identifier (see --list-separators)
    #[arg(short, long)]
    separator: Option<String>,

    /// Text used when the separator is "custom"
    #[arg(long)]
    custom: Option<String>,

    /// Apply a prefix as well as a suffix
    #[arg(short = 'd', long, overrides_with = "no_double_separator")]
    double_separator: bool,

    /// Suffix only, even if the settings file enables double separators
    #[arg(long, overrides_with = "double_separator")]
    no_double_separator: bool,

    /// Join separators to text with a blank line
    #[arg(short = 'S', long, overrides_with = "no_double_spacing")]
    double_spacing: bool,

    /// Single spacing, even if the settings file enables double spacing
    #[arg(long, overrides_with = "double_spacing")]
    no_double_spacing: bool,

    /// Blank-marker layout (1 or 2)
    #[arg(long)]
    special_format: Option<u8>,

    /// Length limit per tweet
    #[arg(long, env = "TWEETSPLIT_MAX_LENGTH")]
    max_length: Option<usize>,

    /// Characters reserved for separators
    #[arg(long, env = "TWEETSPLIT_RESERVED_MARGIN")]
    reserved_margin: Option<usize>,

    /// Print tweets as a JSON array
    #[arg(long)]
    json: bool,

    /// Print only the copy text of tweet N (1-based)
    #[arg(long, value_name = "N")]
    only: Option<usize>,

    /// Print word and character counts of the input
    #[arg(long)]
    counts: bool,

    /// List the separators for the selected mode and exit
    #[arg(long)]
    list_separators: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TWEETSPLIT_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn setup_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set subscriber")?;

    Ok(())
}

/// `Some` when either side of an on/off flag pair was given
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Merge the settings file with command-line overrides
fn build_settings(args: &Args) -> Result<Settings> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    apply_overrides(settings, args)
}

fn apply_overrides(mut settings: Settings, args: &Args) -> Result<Settings> {
    if let Some(separator) = &args.separator {
        settings.separator = separator.clone();
    }
    if let Some(custom) = &args.custom {
        settings.custom_separator = custom.clone();
    }
    if let Some(on) = switch(args.double_separator, args.no_double_separator) {
        settings.double_separator = on;
    }
    if let Some(on) = switch(args.double_spacing, args.no_double_spacing) {
        settings.double_spacing = on;
    }
    if let Some(format) = args.special_format {
        settings.special_format = SpecialFormat::try_from(format)?;
    }
    if let Some(max_length) = args.max_length {
        settings.max_length = max_length;
    }
    if let Some(reserved_margin) = args.reserved_margin {
        settings.reserved_margin = reserved_margin;
    }

    Ok(settings)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(SplitError::from)?;
            Ok(text)
        }
    }
}

/// Tweets longer than the limit, possible only for oversized words
fn oversized(tweets: &[Tweet], max_length: usize) -> impl Iterator<Item = &Tweet> {
    tweets.iter().filter(move |t| t.char_count() > max_length)
}

fn list_separators(session: &SplitSession) {
    let mode = session.config().mode();
    let catalog = session.catalog();
    let heading = match mode {
        SeparatorMode::Single => "single",
        SeparatorMode::Double => "double",
    };
    println!("Separators ({heading} mode):");
    for entry in catalog.entries(mode) {
        println!("  {:<8} {}", entry.id, entry.label);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level)?;

    let settings = build_settings(&args)?;
    let budget = settings.budget();
    let mut session = settings.into_session();

    if args.list_separators {
        list_separators(&session);
        return Ok(());
    }

    session.set_text(read_input(args.input.as_ref())?);
    if session.special_format_available() {
        info!(format = ?session.config().special_format, "blank marker layout active");
    }

    let tweets = session.tweets();
    info!(
        tweets = tweets.len(),
        max_length = budget.max_length,
        reserved_margin = budget.reserved_margin,
        "split complete"
    );
    for tweet in oversized(&tweets, budget.max_length) {
        warn!(
            tweet = tweet.index,
            chars = tweet.char_count(),
            limit = budget.max_length,
            "tweet exceeds length limit"
        );
    }

    if args.counts {
        eprintln!("{}", session.counts());
    }

    if let Some(n) = args.only {
        let Some(tweet) = n.checked_sub(1).and_then(|i| tweets.get(i)) else {
            bail!("Tweet {} does not exist (thread has {})", n, tweets.len());
        };
        print!("{}", tweet.copy_text());
        return Ok(());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&tweets).context("Failed to serialize tweets")?;
        println!("{json}");
        return Ok(());
    }

    for (i, tweet) in tweets.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{tweet}");
    }

    Ok(())
}
