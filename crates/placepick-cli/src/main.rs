use clap::{Parser, Subcommand};

use placepick::{Coordinates, FieldSelection, SearchOptions, Viewport};

mod ui;

#[derive(Debug, Parser)]
#[command(name = "placepick-cli")]
#[command(about = "Place search and autocomplete from the terminal")]
struct Cli {
    /// Logical field to request (repeatable); all fields when omitted.
    #[arg(long = "field", global = true)]
    fields: Vec<String>,

    /// Rectangular search bias: sw_lat,sw_lng,ne_lat,ne_lng
    #[arg(long, global = true)]
    bias: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Interactively search and pick a place.
    Pick,
    /// Fetch one place by its identifier.
    Fetch { place_id: String },
    /// List likely places for the current position.
    Nearby,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = placepick::load_config()?;
    placepick::initialize_with_config(&config)?;

    let options = build_options(&cli)?;
    match cli.command {
        Commands::Pick => {
            let mut ui = ui::TerminalUi::new();
            match placepick::show(&mut ui, &options).await? {
                Some(place) => println!("{}", serde_json::to_string_pretty(&place)?),
                None => println!("cancelled"),
            }
        }
        Commands::Fetch { place_id } => {
            let place = placepick::fetch_place(&place_id, &options).await?;
            println!("{}", serde_json::to_string_pretty(&place)?);
        }
        Commands::Nearby => {
            let candidates = placepick::current_place(&options).await?;
            println!("{}", serde_json::to_string_pretty(&candidates)?);
        }
    }

    Ok(())
}

fn build_options(cli: &Cli) -> anyhow::Result<SearchOptions> {
    let mut options = SearchOptions::new().with_fields(FieldSelection::from_names(&cli.fields));
    if let Some(raw) = &cli.bias {
        options = options.with_location_bias(parse_bias(raw)?);
    }
    Ok(options)
}

fn parse_bias(raw: &str) -> anyhow::Result<Viewport> {
    let parts = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;
    anyhow::ensure!(
        parts.len() == 4,
        "expected sw_lat,sw_lng,ne_lat,ne_lng, got '{raw}'"
    );
    Ok(Viewport {
        southwest: Coordinates {
            latitude: parts[0],
            longitude: parts[1],
        },
        northeast: Coordinates {
            latitude: parts[2],
            longitude: parts[3],
        },
    })
}
