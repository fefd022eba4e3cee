use anyhow::Result;
use clap::Parser;

mod keypress;
mod output;
mod patch;
mod token;

use output::{Output, Verbosity};

/// Refresh the PO Token line in the yt-dlp config file.
///
/// Runs `youtube-po-token-generator`, extracts the token from its JSON
/// output, and rewrites the matching --extractor-args line in
/// %APPDATA%\yt-dlp\config.txt, backing up the previous file first.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Show detailed progress output
    #[arg(short, long, overrides_with = "silent")]
    verbose: bool,

    /// Suppress non-essential output (default)
    #[arg(short, long, overrides_with = "verbose")]
    silent: bool,

    /// Wait for a keypress before exiting
    #[arg(short, long)]
    wait: bool,
}

fn main() {
    let cli = Cli::parse();
    let verbosity = if cli.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Silent
    };
    let out = Output::new(verbosity);

    let result = run(&out);

    if let Err(err) = &result {
        out.error(format!("{err}"));
        if out.is_verbose() {
            for cause in err.chain().skip(1) {
                out.error(format!("  caused by: {cause}"));
            }
        }
    }

    if cli.wait {
        out.forced("\nPress any key to exit...");
        if let Err(err) = keypress::wait_for_keypress() {
            out.error(format!("{err}"));
        }
    }

    if result.is_err() {
        std::process::exit(1);
    }
}

fn run(out: &Output) -> Result<()> {
    out.forced("Refreshing yt-dlp PO Token...");
    let po_token = token::acquire_token(out)?;
    patch::patch_config(out, &po_token)
}
