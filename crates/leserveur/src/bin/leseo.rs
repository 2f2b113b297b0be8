//! leseo binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use leserveur::cli::{Cli, Commands};
use leserveur::config::ServerConfig;
use leserveur::responses::SeoCheckResponse;
use leserveur::LeSeoServer;

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn serve(host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = ServerConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let server = LeSeoServer::new(config)?;
    println!("LeSeo server starting on: {}", server.server_url());
    println!("Press Ctrl+C to stop");

    server.start().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(host, port).await?,
        Some(Commands::Score { url }) => {
            let report = SeoCheckResponse::for_url(&url);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Some(Commands::Sitemap { base_url }) => {
            let entries = lecarte::build_entries(
                &base_url,
                &lecontenu::demo_static_routes(),
                &lecontenu::demo_blog_posts(),
                &lecontenu::demo_categories(),
            );
            print!("{}", lecarte::render_xml(&entries));
        }
        Some(Commands::Robots { base_url }) => {
            print!("{}", lecontenu::default_robots_policy(&base_url).render());
        }
        None => serve(None, None).await?,
    }

    Ok(())
}
