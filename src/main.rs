use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use roomsearch::application::scan::DEFAULT_ROOM_CATEGORIES;
use roomsearch::cli::commands::{Cli, Commands};
use roomsearch::config::Config;
use roomsearch::domain::entities::vector_record::SearchResponse;
use roomsearch::infrastructure::artifact;
use roomsearch::RoomSearch;
use std::collections::BTreeMap;
use std::time::Instant;

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::from_env();

    let rs = match RoomSearch::new(config) {
        Ok(rs) => rs,
        Err(e) => {
            eprintln!("Error initializing roomsearch: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(rs, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(rs: RoomSearch, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::BuildDataset {
            root,
            out,
            categories,
        } => {
            let categories = if categories.is_empty() {
                DEFAULT_ROOM_CATEGORIES
                    .iter()
                    .map(|c| c.to_string())
                    .collect()
            } else {
                categories
            };

            println!("Creating room dataset...");
            let records = rs.scan_dataset(&root, &categories)?;
            println!("Dataset created with {} images", records.len());

            let mut distribution: BTreeMap<&str, usize> = BTreeMap::new();
            for record in &records {
                *distribution.entry(record.room_type.as_str()).or_default() += 1;
            }
            println!("Room distribution:");
            for (room_type, count) in &distribution {
                println!("  {room_type}: {count}");
            }

            println!("Generating embeddings...");
            let pb = ProgressBar::new(records.len() as u64).with_style(pb_style());
            let on_progress =
                |completed: usize, _total: usize| pb.set_position(completed as u64);
            let embedded = rs.embed_dataset(&records, Some(&on_progress)).await;
            pb.finish();

            let failed = embedded.iter().filter(|r| r.embedding.is_none()).count();
            if failed > 0 {
                println!("{failed} images failed to embed and were marked absent");
            }
            artifact::write_dataset(&out, &embedded)?;
            println!("Dataset saved to {}", out.display());
        }
        Commands::Ingest {
            dataset,
            batch_size,
        } => {
            let records = artifact::read_dataset(&dataset)?;
            let batch_size = batch_size.unwrap_or(rs.config().batch_size);
            println!("Starting ingestion of {} records...", records.len());

            let started = Instant::now();
            let report = rs.ingest(&records, batch_size).await?;
            println!(
                "Completed in {:.2} minutes",
                started.elapsed().as_secs_f64() / 60.0
            );
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::SearchText { query, limit } => {
            let response = rs.search_text(&query, limit).await?;
            print_results(&response)?;
        }
        Commands::SearchImage { image, limit } => {
            let response = rs.search_image(&image, limit).await?;
            print_results(&response)?;
        }
    }
    Ok(())
}

fn print_results(response: &SearchResponse) -> Result<(), Box<dyn std::error::Error>> {
    if response.hits.is_empty() {
        println!("No results found");
        return Ok(());
    }
    println!(
        "Found {} results in {:.3} ms",
        response.hits.len(),
        response.query_millis
    );
    println!("{}", serde_json::to_string_pretty(&response.hits)?);
    Ok(())
}

fn pb_style() -> ProgressStyle {
    ProgressStyle::with_template("{bar:40} {pos}/{len} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}
