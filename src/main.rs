use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use sfx::index::suffix_array::{SuffixArray, SuffixArrayBuilder};
use sfx::output::{
    ColorMode, QueryReport, write_json, write_query_result, write_suffixes, write_summary,
};
use sfx::utils::progress::radix_progress;
use sfx::utils::{AppConfig, get_config_path, init_tracing, read_input};
use std::path::PathBuf;
use termcolor::StandardStream;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "sfx")]
#[command(about = "Suffix array construction and substring search over alphabetic text")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    input: InputArgs,

    /// Pattern to search for (repeatable)
    #[arg(short, long = "query")]
    queries: Vec<String>,

    #[command(flatten)]
    options: GlobalOptions,
}

#[derive(Args)]
struct InputArgs {
    /// Text to index (letters A-Z and a-z only)
    text: Option<String>,

    /// Read the text from a file instead ("-" for stdin)
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct GlobalOptions {
    /// When to color output
    #[arg(long, global = true, value_enum)]
    color: Option<ColorMode>,

    /// Characters of context around highlighted matches
    #[arg(long, global = true)]
    padding: Option<usize>,

    /// Sort and search ignoring letter case
    #[arg(short = 'i', long, global = true)]
    case_insensitive: bool,

    /// Show a progress bar while sorting
    #[arg(long, global = true)]
    progress: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List suffixes in sorted (default) or text order
    Suffixes {
        #[command(flatten)]
        input: InputArgs,

        /// List in text order instead of sorted order
        #[arg(long)]
        unsorted: bool,
    },
    /// Search for one or more patterns
    Search {
        #[command(flatten)]
        input: InputArgs,

        /// Pattern to search for (repeatable)
        #[arg(short, long = "query", required = true)]
        queries: Vec<String>,

        /// Also list every occurrence of each pattern
        #[arg(long)]
        all: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show suffix array statistics as JSON
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show the effective configuration as JSON
    Config {
        /// Write it to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli.options)?;
    let mut stdout = StandardStream::stdout(config.color.color_choice());

    match cli.command {
        Some(Commands::Suffixes { input, unsorted }) => {
            let array = build_array(&input, &config, cli.options.progress)?;
            write_suffixes(&mut stdout, &array, !unsorted)?;
        }
        Some(Commands::Search {
            input,
            queries,
            all,
            json,
        }) => {
            let array = build_array(&input, &config, cli.options.progress)?;
            let reports = run_queries(&array, &config, &queries, all);
            if json {
                write_json(&mut stdout, &reports)?;
            } else {
                for report in &reports {
                    write_query_result(&mut stdout, report)?;
                }
            }
        }
        Some(Commands::Stats { input }) => {
            let array = build_array(&input, &config, cli.options.progress)?;
            write_json(&mut stdout, &array.meta())?;
        }
        Some(Commands::Config { save }) => {
            if save {
                let Some(path) = cli.options.config.clone().or_else(get_config_path) else {
                    bail!("No config directory on this platform; pass --config");
                };
                config.save_to(&path)?;
                info!(path = %path.display(), "configuration saved");
            }
            write_json(&mut stdout, &config)?;
        }
        None => {
            // Full listing: summary, both suffix orders, then each query
            let array = build_array(&cli.input, &config, cli.options.progress)?;
            write_summary(&mut stdout, &array)?;
            write_suffixes(&mut stdout, &array, false)?;
            write_suffixes(&mut stdout, &array, true)?;
            for report in run_queries(&array, &config, &cli.queries, false) {
                write_query_result(&mut stdout, &report)?;
            }
        }
    }

    Ok(())
}

/// Load the config file and apply command line overrides
fn load_config(options: &GlobalOptions) -> Result<AppConfig> {
    let mut config = match &options.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    if let Some(color) = options.color {
        config.color = color;
    }
    if let Some(padding) = options.padding {
        config.padding = padding;
    }
    if options.case_insensitive {
        config.case_insensitive = true;
    }

    debug!(?config, "configuration loaded");
    Ok(config)
}

fn build_array(input: &InputArgs, config: &AppConfig, show_progress: bool) -> Result<SuffixArray> {
    let raw = read_input(input.text.as_deref(), input.file.as_deref())?;
    let builder =
        SuffixArrayBuilder::new(config.suffix_array_config(), &raw).context("Invalid input")?;
    debug!(
        text_len = builder.text_size(),
        config = ?builder.config(),
        "sorting suffixes"
    );

    let array = if show_progress {
        let bar = radix_progress(builder.text_size());
        let built = builder.build_with_progress(|_| bar.inc(1));
        bar.finish_and_clear();
        built
    } else {
        builder.build()
    }
    .context("Failed to build suffix array")?;

    info!(text_len = array.len(), "suffix array ready");
    Ok(array)
}

fn run_queries(
    array: &SuffixArray,
    config: &AppConfig,
    queries: &[String],
    all: bool,
) -> Vec<QueryReport> {
    let reader = array
        .reader()
        .with_parallel_threshold(config.parallel_search_threshold);
    let highlight_config = config.highlight_config();

    // Small batches search inline; larger ones fan out through search_many
    let reports: Vec<QueryReport> = if queries.len() > config.parallel_search_threshold {
        queries
            .iter()
            .zip(reader.search_many(queries))
            .map(|(query, position)| {
                QueryReport::from_position(&reader, &highlight_config, query, position, all)
            })
            .collect()
    } else {
        queries
            .iter()
            .map(|query| QueryReport::new(&reader, &highlight_config, query, all))
            .collect()
    };

    debug!(
        queries = reports.len(),
        found = reports.iter().filter(|r| r.position.is_some()).count(),
        "queries complete"
    );
    reports
}
