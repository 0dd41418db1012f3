use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vela_panchang::{PanchangRequest, compute_panchang};

#[derive(Parser)]
#[command(name = "vela", about = "Panchang time-window calculator")]
struct Cli {
    /// Calendar year (e.g. 2024)
    #[arg(long)]
    year: i32,
    /// Month 1-12
    #[arg(long)]
    month: u32,
    /// Day of month
    #[arg(long)]
    day: u32,
    /// Local hour 0-23
    #[arg(long)]
    hours: u32,
    /// Local minute 0-59
    #[arg(long)]
    minutes: u32,
    /// Local second
    #[arg(long)]
    seconds: f64,
    /// Latitude in degrees, north positive
    #[arg(long)]
    latitude: f64,
    /// Longitude in degrees, east positive
    #[arg(long)]
    longitude: f64,
    /// UTC offset in hours (e.g. 5.5 for IST)
    #[arg(long)]
    timezone: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let request = match PanchangRequest::new(
        cli.year,
        cli.month,
        cli.day,
        cli.hours,
        cli.minutes,
        cli.seconds,
        cli.latitude,
        cli.longitude,
        cli.timezone,
    ) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Invalid input: {e}");
            std::process::exit(1);
        }
    };
    debug!(moment = %request.moment, "computing panchang");

    let response = match compute_panchang(&request) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Computation failed: {e}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize response: {e}");
            std::process::exit(1);
        }
    }
}
