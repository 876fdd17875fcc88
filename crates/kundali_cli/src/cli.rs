use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use kundali_config::OutputFormat;
use kundali_vedic_base::{AyanamshaStrategy, NodeMode, Varga};

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic birth chart calculator")]
pub struct Cli {
    /// Configuration file layered over ./kundali.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Log errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a full chart from birth details and an ephemeris snapshot
    Chart(ChartArgs),
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
    /// Divisional chart signs of a sidereal longitude
    Varga {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        /// Single division (D1..D10); all when omitted
        #[arg(long, value_parser = parse_varga)]
        varga: Option<Varga>,
    },
    /// Vimshottari mahadashas from the Moon's sidereal longitude
    Dasha {
        /// Sidereal Moon longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        moon: f64,
        /// Birth instant (RFC 3339, e.g. 2000-01-01T06:30:00Z)
        #[arg(long)]
        birth: String,
    },
    /// Tithi, yoga, karana, and weekday from sidereal Sun and Moon
    Panchang {
        /// Sidereal Sun longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        sun: f64,
        /// Sidereal Moon longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        moon: f64,
        /// Instant (RFC 3339)
        #[arg(long)]
        date: String,
    },
}

#[derive(Args)]
pub struct ChartArgs {
    /// Request JSON (fullName, gender, dob, tob, tz, lat, lng)
    #[arg(long, conflicts_with_all = ["dob", "tob", "tz", "lat", "lng"])]
    pub request: Option<PathBuf>,

    /// Name of the native
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub gender: Option<String>,

    /// Local birth date (YYYY-MM-DD)
    #[arg(long)]
    pub dob: Option<String>,

    /// Local birth time (HH:MM[:SS])
    #[arg(long)]
    pub tob: Option<String>,

    /// UTC offset in hours (5.5 for IST)
    #[arg(long, allow_hyphen_values = true)]
    pub tz: Option<f64>,

    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Ephemeris snapshot JSON for the birth instant
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Override the configured output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Override the configured ayanamsa (true_star, fixed_j2000)
    #[arg(long, value_parser = parse_ayanamsa)]
    pub ayanamsa: Option<AyanamshaStrategy>,

    /// Override the configured node mode (mean, true)
    #[arg(long, value_parser = parse_node_mode)]
    pub node_mode: Option<NodeMode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Narrative,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Narrative => Self::Narrative,
        }
    }
}

fn parse_varga(s: &str) -> Result<Varga, String> {
    Varga::from_code(s).ok_or_else(|| format!("unknown varga '{s}', expected D1..D10"))
}

fn parse_ayanamsa(s: &str) -> Result<AyanamshaStrategy, String> {
    AyanamshaStrategy::from_name(s)
        .ok_or_else(|| format!("unknown ayanamsa '{s}', expected true_star or fixed_j2000"))
}

fn parse_node_mode(s: &str) -> Result<NodeMode, String> {
    NodeMode::from_name(s).ok_or_else(|| format!("unknown node mode '{s}', expected mean or true"))
}
