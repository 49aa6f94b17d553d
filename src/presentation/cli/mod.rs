pub mod books;

use std::net::SocketAddr;
use std::time::Duration;

use books::BookCommands;
use clap::{Args, Parser, Subcommand};

use crate::infrastructure::client::DEFAULT_BASE_URL;

#[derive(Debug, Parser)]
#[command(author, version, about = "Key ideas from the world's best nonfiction books", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, env = "SUMMARIST_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Per-request timeout for catalog calls, in seconds (no timeout when unset)
    #[arg(long, global = true, env = "SUMMARIST_REQUEST_TIMEOUT")]
    pub request_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// Query the book catalog
    Book {
        #[command(subcommand)]
        command: BookCommands,
    },
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[arg(long, env = "SUMMARIST_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    pub bind_address: SocketAddr,
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
