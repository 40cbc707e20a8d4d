use clap::Parser;
use docbundle::crawlers::web;
use docbundle::error::CrawlError;
use docbundle::export;
use docbundle::results::PageRecord;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args).await {
        ::log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<(), CrawlError> {
    if args.url.trim().is_empty() {
        return Err(CrawlError::EmptySeed);
    }

    let config = args.to_config();

    ::log::info!("crawling documentation from: {}", config.start_url);
    ::log::info!("scope root: {}", config.scope_root());

    let outcome = web::crawl(&config).await?;

    ::log::info!(
        "crawled {} pages ({})",
        outcome.pages.len(),
        outcome.stop_reason.describe()
    );
    if let Some(first) = outcome.pages.first() {
        ::log::info!("first page title: {}", first.title);
    }

    std::fs::create_dir_all(&args.out_dir)?;

    let markdown_path = args.out_dir.join("documentation.md");
    export::markdown::write_markdown(&outcome.pages, &markdown_path)?;
    ::log::info!("wrote {}", markdown_path.display());

    let json_path = args.out_dir.join("documentation.json");
    export::json::write_json(&outcome.pages, &json_path)?;
    ::log::info!("wrote {}", json_path.display());

    write_pdf_artifact(outcome.pages, args.out_dir.join("documentation.pdf")).await;

    Ok(())
}

/// Render the PDF on a blocking thread. A failed PDF is surfaced as an
/// error and the artifact is simply not written; the other exports stay in
/// place.
async fn write_pdf_artifact(pages: Vec<PageRecord>, path: std::path::PathBuf) {
    let display = path.display().to_string();
    let result =
        tokio::task::spawn_blocking(move || export::pdf::write_pdf(&pages, &path)).await;

    match result {
        Ok(Ok(())) => ::log::info!("wrote {}", display),
        Ok(Err(e)) => ::log::error!("failed to generate PDF: {}", e),
        Err(e) => ::log::error!("failed to generate PDF: {}", e),
    }
}
