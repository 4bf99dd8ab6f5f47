use std::io::{BufRead as _, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use barrace::{BarLimit, DataParser, Fps, ParsedData, PlaybackOpts, TerminalSink};
use clap::{CommandFactory as _, Parser};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "bcr", version, about = "Play a bar chart race in the terminal")]
struct Cli {
    /// Most bars shown per chart (1-15, default 5).
    #[arg(short = 'b', value_name = "NUM", allow_hyphen_values = true)]
    bars: Option<String>,

    /// Playback rate in frames per second (1-24, default 24).
    #[arg(short = 'f', value_name = "NUM", allow_hyphen_values = true)]
    fps: Option<String>,

    /// Log parse and playback progress to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Print the parsed animation as JSON instead of playing it.
    #[arg(long)]
    dump_json: bool,

    /// Data file describing the race.
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(input) = cli.input.as_deref() else {
        Cli::command().print_help()?;
        return Ok(());
    };
    if !input.is_file() {
        Cli::command().write_help(&mut std::io::stderr())?;
        anyhow::bail!("input file '{}' does not exist", input.display());
    }

    let opts = PlaybackOpts {
        fps: cli.fps.as_deref().map(Fps::from_arg).unwrap_or_default(),
        bar_limit: cli.bars.as_deref().map(BarLimit::from_arg).unwrap_or_default(),
    };

    if cli.dump_json {
        let data = parse_input(input)?;
        let json = serde_json::to_string_pretty(&data).context("serialize parsed animation")?;
        println!("{json}");
        return Ok(());
    }

    println!("{}", welcome_banner());
    let mut data = parse_input(input)?;
    print_summary(&data, &opts);

    print!("Press enter to begin the animation.");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read from stdin")?;

    let mut sink = TerminalSink::stdout();
    let stats = data
        .animation
        .play(&opts, &mut sink)
        .context("play animation")?;
    tracing::debug!(?stats, "animation done");

    println!("\nThanks for watching. Goodbye!");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_input(path: &Path) -> anyhow::Result<ParsedData> {
    let parser = DataParser::from_path(path)?;
    parser
        .parse()
        .with_context(|| format!("parse data file '{}'", path.display()))
}

fn welcome_banner() -> String {
    let rule = "=".repeat(48);
    format!("{rule}\n  Bar Chart Race\n  Animated bar charts, right in your terminal.\n{rule}")
}

fn print_summary(data: &ParsedData, opts: &PlaybackOpts) {
    println!();
    println!("  Title:            {}", data.header.title);
    println!("  Value label:      {}", data.header.x_label);
    println!("  Source:           {}", data.header.source);
    println!("  Frames:           {}", data.animation.len());
    println!("  Bars per chart:   {}", opts.bar_limit.get());
    println!("  Frames/second:    {}", opts.fps.get());
    println!("  Categories:       {}", data.animation.palette().len());
    println!("  Warnings:         {}", data.diagnostics.len());
    println!();
}
