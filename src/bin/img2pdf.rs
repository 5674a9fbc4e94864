//! CLI binary for img2pdf.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig`, renders progress, and turns any failure into
//! `Error: <message>` on stderr with exit status 1.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use img2pdf::{
    convert, inspect, ConversionConfig, ConversionProgressCallback, PageInfo, ProgressCallback,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

/// Wrap `s` in an SGR sequence, or leave it bare when stderr is redirected.
fn paint(code: &str, s: &str) -> String {
    if io::stderr().is_terminal() {
        format!("\x1b[{code}m{s}\x1b[0m")
    } else {
        s.to_string()
    }
}
fn green(s: &str) -> String {
    paint("32", s)
}
fn red(s: &str) -> String {
    paint("31", s)
}
fn dim(s: &str) -> String {
    paint("2", s)
}
fn bold(s: &str) -> String {
    paint("1", s)
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: one bar that advances as each image decodes,
/// then switches to a spinner while the PDF is being written.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  [{bar:42.green/238}] {pos:>3}/{len} images  {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        bar.set_style(style);
        bar.set_prefix("Loading");

        Arc::new(Self { bar })
    }
}

impl ConversionProgressCallback for CliProgressCallback {
    fn on_conversion_start(&self, total_pages: usize) {
        self.bar.set_length(total_pages as u64);
        self.bar.reset_eta();
        self.bar.enable_steady_tick(Duration::from_millis(80));
    }

    fn on_page_start(&self, page_num: usize, _total: usize) {
        self.bar.set_message(format!("image {page_num}"));
    }

    fn on_page_complete(&self, page_num: usize, total: usize, dimensions: (u32, u32)) {
        self.bar.inc(1);
        if page_num == total {
            self.bar.set_prefix("Writing");
            self.bar.set_message("assembling PDF…");
        } else {
            self.bar
                .set_message(dim(&format!("{}x{}", dimensions.0, dimensions.1)));
        }
    }

    fn on_page_error(&self, page_num: usize, total: usize, _error: &str) {
        self.bar.abandon_with_message(red(&format!("image {page_num}/{total} failed")));
    }

    fn on_conversion_complete(&self, _total_pages: usize, _output_bytes: u64) {
        self.bar.finish_and_clear();
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Every supported image in a directory, sorted by file name
  img2pdf --dir scans/ scans.pdf

  # Explicit files, in the order given ("--" ends the --path list)
  img2pdf --path cover.png page1.jpg page2.jpg -- booklet.pdf

  # Missing output directories are created
  img2pdf --dir scans/ out/2024/combined.pdf

  # Preview the page order without writing anything
  img2pdf --inspect-only --dir scans/ unused.pdf

SUPPORTED EXTENSIONS (directory mode, case-insensitive):
  bmp gif jpeg jpg png tif tiff

  Files given with --path are decoded by content, whatever their extension.

ENVIRONMENT VARIABLES:
  IMG2PDF_RESOLUTION   Nominal page resolution in dpi (default 100)
  IMG2PDF_TITLE        PDF document title
  RUST_LOG             Override log filtering (e.g. img2pdf=debug)
"#;

/// Combine image files from a directory or explicit paths into a PDF.
#[derive(Parser, Debug)]
#[command(
    name = "img2pdf",
    version,
    about = "Combine image files from a directory or explicit paths into a PDF",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP,
    group(ArgGroup::new("source").required(true).args(["dir", "paths"]))
)]
struct Cli {
    /// Directory containing the images to combine.
    #[arg(short, long, value_name = "INPUT_DIR")]
    dir: Option<PathBuf>,

    /// Explicit image file paths to combine.
    #[arg(short = 'p', long = "path", value_name = "IMAGE_PATH", num_args = 1..)]
    paths: Option<Vec<PathBuf>>,

    /// Destination PDF file path.
    #[arg(value_name = "OUTPUT_PATH")]
    output_path: PathBuf,

    /// Nominal resolution used to size pages, in dpi.
    #[arg(long, env = "IMG2PDF_RESOLUTION", default_value_t = img2pdf::DEFAULT_RESOLUTION)]
    resolution: f32,

    /// PDF document title.
    #[arg(long, env = "IMG2PDF_TITLE")]
    title: Option<String>,

    /// Store image streams uncompressed.
    #[arg(long)]
    no_compress: bool,

    /// Print the resolved page list only; nothing is written.
    #[arg(long)]
    inspect_only: bool,

    /// Print the result as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Disable progress bar.
    #[arg(long)]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // ── Logging setup ────────────────────────────────────────────────────
    // The progress bar is the user feedback; INFO logs would tear it.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json && !cli.inspect_only;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let pages = inspect(cli.dir.as_deref(), cli.paths.as_deref())?;
        print_pages(&pages, cli.json)?;
        return Ok(());
    }

    // ── Build config ─────────────────────────────────────────────────────
    let progress_cb: Option<ProgressCallback> = if show_progress {
        Some(CliProgressCallback::new() as Arc<dyn ConversionProgressCallback>)
    } else {
        None
    };
    let config = build_config(&cli, progress_cb)?;

    // ── Run conversion ───────────────────────────────────────────────────
    let stats = convert(
        cli.dir.as_deref(),
        cli.paths.as_deref(),
        &cli.output_path,
        &config,
    )?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("Failed to serialise stats")?
        );
    } else if !cli.quiet {
        eprintln!(
            "{}  {} pages  {}ms  →  {}",
            green("✔"),
            stats.page_count,
            stats.total_duration_ms,
            bold(&stats.output_path.display().to_string()),
        );
    }

    Ok(())
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<ConversionConfig> {
    let mut builder = ConversionConfig::builder()
        .resolution(cli.resolution)
        .compress(!cli.no_compress)
        .creator("img2pdf");

    if let Some(ref title) = cli.title {
        builder = builder.title(title.clone());
    }
    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    Ok(builder.build()?)
}

fn print_pages(pages: &[PageInfo], json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(pages).context("Failed to serialise page list")?
        );
        return Ok(());
    }

    for page in pages {
        println!(
            "{:>4}  {:<48}  {:>5}x{:<5}  {}",
            page.page_num,
            page.source.display(),
            page.width,
            page.height,
            page.color_mode,
        );
    }
    Ok(())
}
