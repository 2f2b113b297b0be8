//! Command-line interface for LeSeo.

use clap::{Parser, Subcommand};

/// LeSeo - SEO scoring and sitemap toolkit.
#[derive(Parser, Debug)]
#[command(name = "leseo")]
#[command(author = "LeSeo Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Score page metadata and generate sitemaps", long_about = None)]
pub struct Cli {
    /// Enable verbose logging.
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Subcommand to execute; defaults to `serve`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Host address to bind to.
        #[arg(long = "host")]
        host: Option<String>,

        /// Port to listen on.
        #[arg(long = "port")]
        port: Option<u16>,
    },

    /// Score the metadata a URL declares and print the report as JSON.
    Score {
        /// URL to check.
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Print the sitemap XML for the demo catalogs.
    Sitemap {
        /// Base URL for generated links.
        #[arg(long = "base-url", default_value = "http://localhost:3000")]
        base_url: String,
    },

    /// Print the robots.txt for the demo site.
    Robots {
        /// Base URL for the sitemap reference.
        #[arg(long = "base-url", default_value = "http://localhost:3000")]
        base_url: String,
    },
}
