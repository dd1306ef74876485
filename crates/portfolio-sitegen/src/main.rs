use clap::Parser;
use portfolio_core::SiteIdentity;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-sitegen")]
#[command(about = "Write route params, page metadata and navigation for every project", long_about = None)]
struct Cli {
    /// Directory to write into (created if missing)
    #[arg(short, long, default_value = "generated")]
    out_dir: PathBuf,

    /// Project catalog JSON to use instead of the embedded one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Site name appended to page titles
    #[arg(long)]
    site_name: Option<String>,

    /// Author credited in page metadata
    #[arg(long)]
    author: Option<String>,

    /// Log every file written
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::builder()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let mut site = SiteIdentity::default();
    if let Some(name) = cli.site_name {
        site.site_name = name;
    }
    if let Some(author) = cli.author {
        site.author = author;
    }

    let store = portfolio_sitegen::load_store(cli.catalog.as_deref())?;
    let report = portfolio_sitegen::generate(&store, &site, &cli.out_dir)?;
    log::info!(
        "generated {} pages ({} files) in {}",
        report.pages,
        report.files.len(),
        cli.out_dir.display()
    );
    Ok(())
}
