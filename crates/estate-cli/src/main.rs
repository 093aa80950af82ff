mod likes;
mod listings;
mod places;

use clap::{Parser, Subcommand};
use estate_api::EstateClient;
use estate_core::{AdKind, Feature, PoiCategory, PropertyKind};
use estate_session::{LikeRegistry, MapSearchSession, SessionOptions};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "estate-cli")]
#[command(about = "Listing map developer console")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List listings matching the given filters
    Listings {
        #[arg(long)]
        min_price: Option<i64>,
        #[arg(long)]
        max_price: Option<i64>,
        #[arg(long)]
        min_rooms: Option<f64>,
        #[arg(long)]
        max_rooms: Option<f64>,
        /// Maximum size in square meters
        #[arg(long)]
        max_size: Option<i64>,
        /// sale or rent
        #[arg(long)]
        kind: Option<AdKind>,
        /// apartment, house, penthouse or studio
        #[arg(long)]
        property: Option<PropertyKind>,
        /// Required features, comma separated (e.g. parking,elevator)
        #[arg(long, value_delimiter = ',')]
        feature: Vec<Feature>,
        /// Also show the nearest POI of these categories for each listing
        #[arg(long, value_delimiter = ',')]
        near: Vec<PoiCategory>,
    },
    /// Resolve a point and show the nearest POI per category
    Nearest {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Categories to search, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        category: Vec<PoiCategory>,
    },
    /// Search places and addresses
    Search { query: String },
    /// Show liked listing ids
    Likes,
    /// Toggle the like on a listing
    Like { listing_id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("estate-cli ready; run with --help to see commands");
        return Ok(());
    };

    let config = estate_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(env = %config.env, base_url = %config.api_base_url, "config loaded");

    let client = EstateClient::from_config(&config)?;

    match command {
        Commands::Listings {
            min_price,
            max_price,
            min_rooms,
            max_rooms,
            max_size,
            kind,
            property,
            feature,
            near,
        } => {
            let criteria = estate_core::FilterCriteria {
                min_price,
                max_price,
                min_rooms,
                max_rooms,
                max_size,
                ad_kind: kind,
                property_kind: property,
                required_features: feature.into_iter().collect(),
            };
            let session = MapSearchSession::new(client, SessionOptions::from_config(&config));
            listings::run_listings(&session, criteria, near).await
        }
        Commands::Nearest { lat, lng, category } => {
            let session = MapSearchSession::new(client, SessionOptions::from_config(&config));
            places::run_nearest(&session, lat, lng, category).await
        }
        Commands::Search { query } => {
            let session = MapSearchSession::new(client, SessionOptions::from_config(&config));
            places::run_search(&session, &query).await;
            Ok(())
        }
        Commands::Likes => {
            likes::run_likes(&LikeRegistry::new(client)).await;
            Ok(())
        }
        Commands::Like { listing_id } => {
            likes::run_like(&LikeRegistry::new(client), listing_id).await
        }
    }
}
