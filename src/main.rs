use anyhow::Result;
use apiview_diff::areas::session::Session;
use apiview_diff::artifacts::core::PagerWriter;
use apiview_diff::artifacts::diff::diff_filter::DiffFilter;
use apiview_diff::artifacts::diff::options::DiffOptions;
use apiview_diff::commands::porcelain::diff::{DiffArgs, DiffOutput};
use clap::{Args, Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "apiview-diff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Structural diff of API review trees",
    long_about = "Compares two versions of a package's API surface, given as review lines \
    or API element trees in JSON, and prints the annotated result.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        value_enum,
        default_value_t = ColorChoice::Auto,
        global = true,
        help = "When to color the output"
    )]
    color: ColorChoice,
    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase log verbosity")]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Args)]
struct DiffCommandArgs {
    #[arg(index = 1, help = "The old revision")]
    old: PathBuf,
    #[arg(index = 2, help = "The new revision")]
    new: PathBuf,
    #[arg(long, help = "Show only the top-most changed nodes with their status")]
    name_status: bool,
    #[arg(long, conflicts_with = "name_status", help = "Show only the node counts")]
    stat: bool,
    #[arg(
        long,
        value_parser = parse_diff_filter,
        requires = "name_status",
        help = "Kinds to list with --name-status (A, R, U)"
    )]
    diff_filter: Option<DiffFilter>,
    #[arg(long, help = "Do not tag the changed tokens of modified lines")]
    no_token_marks: bool,
}

impl DiffCommandArgs {
    fn to_diff_args(&self) -> DiffArgs {
        let output = if self.name_status {
            DiffOutput::NameStatus(self.diff_filter.unwrap_or_default())
        } else if self.stat {
            DiffOutput::Stat
        } else {
            DiffOutput::Full
        };

        let options = if self.no_token_marks {
            DiffOptions::default().without_token_marks()
        } else {
            DiffOptions::default()
        };

        DiffArgs::new(output, options)
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "lines",
        about = "Diff two review-line documents",
        long_about = "This command compares two JSON documents of review lines (an array, or an \
        object with a ReviewLines array) and prints every line with its diff marker."
    )]
    Lines(DiffCommandArgs),
    #[command(
        name = "forest",
        about = "Diff two API element forests",
        long_about = "This command compares two JSON arrays of API tree nodes and prints every \
        node with its diff marker."
    )]
    Forest(DiffCommandArgs),
    #[command(
        name = "hash-tree",
        about = "Print the subtree hash of every node",
        long_about = "This command prints the content hash of every node of a document, \
        indented by depth. Equal hashes are compared as unchanged without descending."
    )]
    HashTree {
        #[arg(long, help = "Read the file as an API element forest")]
        forest: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
}

fn parse_diff_filter(s: &str) -> Result<DiffFilter, String> {
    DiffFilter::try_parse(s).ok_or_else(|| format!("invalid diff filter '{s}'"))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn use_pager() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {
            if !std::io::stdout().is_terminal() {
                colored::control::set_override(false);
            }
        }
    }

    let pager = use_pager().then(Pager::new);
    let session = match &pager {
        Some(pager) => Session::new(Box::new(PagerWriter::new(pager.clone()))),
        None => Session::new(Box::new(std::io::stdout())),
    };

    match &cli.command {
        Commands::Lines(args) => session.diff_lines(&args.old, &args.new, &args.to_diff_args())?,
        Commands::Forest(args) => session.diff_forest(&args.old, &args.new, &args.to_diff_args())?,
        Commands::HashTree { forest, file } => session.hash_tree(file, *forest)?,
    }

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
