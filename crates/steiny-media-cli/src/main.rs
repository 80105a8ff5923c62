mod report;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use steiny_storage::{delete_all, ObjectStore, S3Config, S3Store};
use tracing::info;

#[derive(Parser)]
#[command(name = "steiny-media")]
#[command(about = "Inspect and clean up Steiny B's media in object storage")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "AWS_S3_BUCKET_NAME")]
    bucket: String,

    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    region: String,

    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    access_key_id: String,

    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    secret_access_key: String,

    /// S3-compatible endpoint; switches to path-style addressing
    #[arg(long, env = "AWS_S3_ENDPOINT")]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored media and report which expected images are missing
    List {
        #[arg(long, default_value = "steiny/")]
        prefix: String,
    },
    /// Delete a single object
    Delete {
        key: String,
    },
    /// Delete every object under the prefix
    Purge {
        #[arg(long, default_value = "steiny/")]
        prefix: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .compact()
        .init();

    let cli = Cli::parse();
    let bucket = cli.bucket.clone();
    let store = S3Store::new(S3Config {
        bucket: cli.bucket,
        region: cli.region,
        access_key_id: cli.access_key_id,
        secret_access_key: cli.secret_access_key,
        endpoint: cli.endpoint.filter(|e| !e.is_empty()),
    })
    .context("Invalid storage configuration")?;

    match cli.command {
        Commands::List { prefix } => handle_list(&store, &bucket, &prefix).await?,
        Commands::Delete { key } => handle_delete(&store, &key).await?,
        Commands::Purge { prefix, yes } => handle_purge(&store, &bucket, &prefix, yes).await?,
    }

    Ok(())
}

async fn handle_list(store: &dyn ObjectStore, bucket: &str, prefix: &str) -> Result<()> {
    let objects = store
        .list_objects(prefix)
        .await
        .context("Failed to list objects")?;
    print!("{}", report::render_listing(bucket, prefix, &objects));
    Ok(())
}

async fn handle_delete(store: &dyn ObjectStore, key: &str) -> Result<()> {
    store
        .delete_object(key)
        .await
        .with_context(|| format!("Failed to delete {}", key))?;
    info!("Deleted {}", key);
    println!("Deleted {}", key);
    Ok(())
}

async fn handle_purge(store: &dyn ObjectStore, bucket: &str, prefix: &str, yes: bool) -> Result<()> {
    let objects = store
        .list_objects(prefix)
        .await
        .context("Failed to list objects")?;

    if objects.is_empty() {
        println!("No files under {} to delete.", prefix);
        return Ok(());
    }

    println!("Found {} files under {} in {}:", objects.len(), prefix, bucket);
    for object in &objects {
        println!("  - {}", object.key);
    }

    if !yes && !confirm(&format!(
        "Delete ALL {} files under {}? (yes/no): ",
        objects.len(),
        prefix
    ))? {
        println!("Cancelled.");
        return Ok(());
    }

    // Only the objects shown above are deleted
    let report = delete_all(store, objects).await;
    print!("{}", report::render_purge(&report));
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(report::is_confirmed(&answer))
}
