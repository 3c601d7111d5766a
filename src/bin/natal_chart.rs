use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};

use natal_chart::{
    compute_natal_chart, format_degree_minute, render_wheel_svg, BirthData, ChartConfig,
    ChartResult,
};

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "natal_chart")]
#[command(about = "Compute a natal chart: Sun sign, Ascendant, Midheaven and equal houses")]
struct Cli {
    /// TOML file with default location, UTC offset and wheel size
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    date: String,
    /// Local birth time, HH:MM (midnight if omitted)
    #[arg(long, default_value = "")]
    time: String,
    /// Local time minus UTC in decimal hours (Paris winter = 1)
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<f64>,
    /// Latitude in decimal degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in decimal degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Write the chart wheel as SVG
    Wheel {
        #[command(flatten)]
        birth: BirthArgs,
        /// Destination SVG file
        #[arg(long, short)]
        output: PathBuf,
        /// Override the configured wheel size
        #[arg(long)]
        size: Option<f64>,
    },
}

fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn birth_data(args: &BirthArgs, config: &ChartConfig) -> anyhow::Result<BirthData> {
    let birth = BirthData::parse(
        &args.date,
        &args.time,
        args.utc_offset.unwrap_or(config.utc_offset_hours),
        args.lat.unwrap_or(config.location.latitude),
        args.lon.unwrap_or(config.location.longitude),
    )?;
    Ok(birth)
}

fn print_text(chart: &ChartResult) {
    println!("Sun sign:   {:<12} {}", chart.sun_sign, format_degree_minute(chart.sun_longitude));
    println!("Ascendant:  {:<12} {}", chart.asc_sign, format_degree_minute(chart.ascendant));
    println!("Midheaven:  {:<12} {}", chart.mc_sign, format_degree_minute(chart.midheaven));
    println!("Julian Day: {:.5}", chart.jd);
    println!();
    println!("Equal houses from the Ascendant:");
    for (i, cusp) in chart.houses.iter().enumerate() {
        println!("  House {:>2}: {:.2}°", i + 1, cusp);
    }
    println!("Sun in house {}", chart.sun_house);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => ChartConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ChartConfig::default(),
    };

    match cli.command {
        Commands::Chart { birth, format } => {
            let chart = compute_natal_chart(&birth_data(&birth, &config)?)?;
            match format {
                OutputFormat::Text => print_text(&chart),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
            }
        }
        Commands::Wheel {
            birth,
            output,
            size,
        } => {
            let chart = compute_natal_chart(&birth_data(&birth, &config)?)?;
            let mut style = config.wheel;
            if let Some(size) = size {
                style.size = size;
            }
            if !(style.size.is_finite() && style.size > 0.0) {
                anyhow::bail!("wheel size must be positive, got {}", style.size);
            }
            fs::write(&output, render_wheel_svg(&chart, &style))
                .with_context(|| format!("writing {}", output.display()))?;
            info!("wrote wheel to {}", output.display());
        }
    }
    Ok(())
}
