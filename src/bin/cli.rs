//! CLI for a running geoschools server

use clap::{Parser, Subcommand};
use geoschools::client::SchoolClient;
use geoschools::common::{format_distance, init_tracing};
use geoschools::Error;

#[derive(Parser)]
#[command(name = "geoschools")]
#[command(about = "geoschools registry CLI")]
#[command(version)]
struct Cli {
    /// Server URL
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a school
    Add {
        /// School name
        name: String,

        /// Street address
        #[arg(long)]
        address: String,

        /// Latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
    },

    /// List schools, nearest first
    List {
        /// Your latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,

        /// Your longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,

        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("warn");

    let cli = Cli::parse();
    let client = SchoolClient::new(cli.server);

    match cli.command {
        Commands::Add {
            name,
            address,
            latitude,
            longitude,
        } => match client.add_school(&name, &address, latitude, longitude).await {
            Ok(school) => {
                println!("Added school #{}: {}", school.id, school.name);
                println!("  Address: {}", school.address);
                println!("  Location: ({}, {})", school.latitude, school.longitude);
                println!("  Created: {}", school.created_at);
            }
            Err(Error::Validation(errors)) => {
                eprintln!("School rejected:");
                for e in errors {
                    eprintln!("  - {}", e);
                }
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },

        Commands::List {
            latitude,
            longitude,
            json,
        } => {
            let schools = client.list_schools(latitude, longitude).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&schools)?);
            } else if schools.is_empty() {
                println!("No schools registered");
            } else {
                for ranked in &schools {
                    println!(
                        "{:>10}  #{:<5} {} ({})",
                        format_distance(ranked.distance),
                        ranked.item.id,
                        ranked.item.name,
                        ranked.item.address
                    );
                }
            }
        }
    }

    Ok(())
}
