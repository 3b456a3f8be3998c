//! api2ts — The api2ts CLI
//!
//! Generates TypeScript type definitions from a sample API response.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! api2ts
//!
//! # Flag-driven mode
//! api2ts -u https://api.example.com/users -n User -p ./src/types
//! ```

use api2ts::logging;
use api2ts::prelude::*;
use clap::Parser;
use colored::*;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "api2ts")]
#[command(author = "api2ts Contributors")]
#[command(about = "🚀 Generate TypeScript type definitions from an API URL", long_about = None)]
#[command(disable_version_flag = true)]
#[command(after_help = "EXAMPLES:
    api2ts
    api2ts -u https://api.example.com/user -n User
    api2ts -u https://api.example.com/orders -n Order -p ./src/types --no-open")]
struct Cli {
    /// API URL to fetch the sample response from
    #[arg(short, long, env = "API2TS_URL")]
    url: Option<String>,

    /// Name of the generated type
    #[arg(short, long, env = "API2TS_NAME")]
    name: Option<String>,

    /// Directory to save `<name>.ts` into
    #[arg(short, long, env = "API2TS_PATH")]
    path: Option<String>,

    /// Settings file (defaults to <config dir>/api2ts/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Don't offer to open the generated file in an editor
    #[arg(long)]
    no_open: bool,

    /// Verbose output (debug logging)
    #[arg(long)]
    verbose: bool,

    /// Print version
    #[arg(short = 'v', long)]
    version: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("api2ts {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    println!(
        "{}",
        format!("✨ api2ts {} ✨", env!("CARGO_PKG_VERSION")).cyan().bold()
    );

    let settings = Settings::load(cli.config.as_deref())?;
    let paths = SavePaths::resolve();
    let fetcher = Fetcher::new()?;

    let editor = if cli.no_open || !std::io::stdin().is_terminal() {
        None
    } else {
        Editor::detect(settings.editor())
    };

    let flags = Flags {
        url: cli.url,
        name: cli.name,
        path: cli.path,
        no_open: cli.no_open,
    };

    let mut app = App::new(settings, paths, DialoguerTerminal::new(), fetcher).with_editor(editor);
    app.run(&flags).await?;
    Ok(())
}
