mod echo;

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;
use wikistat_core::{
    ChartConfig, CloudConfig, CutoffPolicy, DEFAULT_API_URL, DEFAULT_LINK_PREFIX, JsonConfig, OutputFormat,
    ParseFailurePolicy, PresentConfig, Presenter, StopWords, Wikistat, WikistatConfig,
};

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_PAGE_URL: &str = "https://en.wikipedia.org/wiki/google";

/// Word frequency statistics and charts for the sections of an encyclopedia article
#[derive(Parser, Debug)]
#[command(name = "wikistat")]
#[command(author = "Wikistat Contributors")]
#[command(version)]
#[command(about = "Word frequency statistics for article sections", long_about = None)]
struct Args {
    /// Article URL; the page name is the last path segment
    #[arg(value_name = "URL", default_value = DEFAULT_PAGE_URL, value_parser = parse_page_url)]
    url: Url,

    /// Output format (raw, pie, bar, cloud, json)
    #[arg(short, long, default_value = "raw", value_name = "FORMAT")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Words with a count at or below this value are grouped or removed
    #[arg(long, default_value = "0", value_name = "N")]
    cutoff: usize,

    /// Collapse words at or below the cutoff into one `grouped_words` entry
    #[arg(long)]
    group_below_cutoff: bool,

    /// Drop words at or below the cutoff
    #[arg(long)]
    remove_below_cutoff: bool,

    /// Number of leading sections to present
    #[arg(short = 'n', long = "sections", default_value = "5", value_name = "N")]
    sections: usize,

    /// Stop-word list with one word per line (default: built-in English list)
    #[arg(long, value_name = "FILE")]
    stopwords: Option<PathBuf>,

    /// What to do with a section whose HTML cannot be parsed (degrade, skip, abort)
    #[arg(long, default_value = "degrade", value_name = "POLICY")]
    on_parse_error: ParseFailurePolicy,

    /// Page-content API endpoint
    #[arg(long, default_value = DEFAULT_API_URL, value_name = "URL")]
    api_url: String,

    /// Prefix joined to every collected href
    #[arg(long, default_value = DEFAULT_LINK_PREFIX, value_name = "PREFIX")]
    link_prefix: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Chart width in columns
    #[arg(long, default_value = "80", value_name = "COLS")]
    width: usize,

    /// Disable colored charts
    #[arg(long)]
    no_color: bool,

    /// Pretty print JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_page_url(s: &str) -> Result<Url, String> {
    Url::parse(s).map_err(|e| format!("invalid page URL {}: {}", s, e))
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,wikistat=debug,wikistat_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .init();
}

fn build_config(args: &Args) -> anyhow::Result<WikistatConfig> {
    let mut builder = WikistatConfig::builder()
        .api_url(args.api_url.clone())
        .timeout(args.timeout)
        .link_prefix(args.link_prefix.clone())
        .parse_failure(args.on_parse_error);

    if let Some(user_agent) = &args.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }

    if let Some(path) = &args.stopwords {
        let stop_words = StopWords::from_file(path).context("Failed to load stop-word list")?;
        builder = builder.stop_words(stop_words);
    }

    Ok(builder.build())
}

fn cutoff_policy(args: &Args) -> CutoffPolicy {
    CutoffPolicy::new(args.cutoff)
        .group_below_cutoff(args.group_below_cutoff)
        .remove_below_cutoff(args.remove_below_cutoff)
}

fn present_config(args: &Args, color: bool) -> PresentConfig {
    PresentConfig {
        policy: cutoff_policy(args),
        limit: args.sections,
        chart: ChartConfig { width: args.width, color },
        cloud: CloudConfig { width: args.width, ..Default::default() },
        json: JsonConfig { pretty: args.pretty, ..Default::default() },
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let start = Instant::now();
    let mut timings = Vec::new();

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    if args.cutoff > 0 && cutoff_policy(&args).is_identity() {
        echo::print_warning("--cutoff has no effect without --group-below-cutoff or --remove-below-cutoff");
    }

    let wikistat = Wikistat::with_config(build_config(&args)?).context("Failed to set up HTTP client")?;

    if args.verbose {
        echo::print_step(1, 4, &format!("Fetching section list for {}", args.url.as_str().bright_white().underline()));
    }

    let step = Instant::now();
    let (page, metas) = wikistat
        .list_sections(args.url.as_str())
        .await
        .context("Failed to fetch section list")?;
    timings.push(("Section list".to_string(), step.elapsed()));

    if args.verbose {
        echo::print_detail("Page", &page);
        echo::print_detail("Sections", &metas.len().to_string());
        eprintln!();
        echo::print_step(2, 4, "Fetching section content");
    }

    let step = Instant::now();
    let mut sections = wikistat
        .load_sections(&page, metas)
        .await
        .context("Failed to load section content")?;
    timings.push(("Section content".to_string(), step.elapsed()));

    if args.verbose {
        let text_size: usize = sections.iter().map(|s| s.text.len()).sum();
        echo::print_detail("Text", &echo::format_size(text_size));
        eprintln!();
        echo::print_step(3, 4, "Digesting word frequencies");
    }

    let step = Instant::now();
    wikistat.digest_page(&mut sections);
    timings.push(("Digest".to_string(), step.elapsed()));

    if args.verbose {
        echo::print_section_details(&sections);
        echo::print_step(4, 4, &format!("Rendering {} output", args.format));
        eprintln!();
    }

    let color = !args.no_color && args.output.is_none() && io::stdout().is_terminal();
    let presenter = Presenter::new(present_config(&args, color));

    let step = Instant::now();
    match &args.output {
        Some(path) => {
            let rendered = presenter.render(args.format, &sections).context("Failed to render output")?;
            fs::write(path, rendered).with_context(|| format!("Failed to write to file: {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            presenter
                .present(&mut stdout, args.format, &sections)
                .context("Failed to write output")?;
        }
    }
    timings.push(("Render".to_string(), step.elapsed()));
    tracing::debug!(format = %args.format, sections = sections.len(), "output written");

    if args.verbose {
        echo::print_timing_summary(start.elapsed(), &timings);
    }

    Ok(())
}
