use album_catalog::catalog::Album;
use clap::{Parser, Subcommand};
use reqwest::Url;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Command-line client for the album catalog", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every album in insertion order
    List,
    /// Fetch one album by id
    Get {
        id: String,
    },
    /// Add an album to the catalog
    Create {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        artist: String,
        /// Price in cents
        #[arg(long)]
        price: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = &cli.url;

    let res = match cli.command {
        Commands::List => client.get(albums_url(base, None)?).send().await?,
        Commands::Get { id } => client.get(albums_url(base, Some(&id))?).send().await?,
        Commands::Create {
            id,
            title,
            artist,
            price,
        } => {
            client
                .post(albums_url(base, None)?)
                .json(&Album::new(id, title, artist, price))
                .send()
                .await?
        }
    };

    print_response(res).await
}

/// `<base>/albums[/<id>]`; the id is percent-encoded as a single path segment.
fn albums_url(base: &str, id: Option<&str>) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| format!("base url cannot carry a path: {base}"))?
        .pop_if_empty()
        .push("albums")
        .extend(id);
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: catalog returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
