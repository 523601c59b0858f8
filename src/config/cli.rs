use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "webproj")]
#[command(about = "Reproject coordinates via remote web services")]
pub struct Cli {
    #[arg(long, help = "MapTiler API key (falls back to MAPTILER_API_KEY)")]
    pub api_key: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the reprojection service is reachable
    Ping,
    /// Reproject a single point
    Point {
        #[arg(long, help = "Source EPSG code")]
        src: u32,
        #[arg(long, help = "Target EPSG code")]
        dst: u32,
        x: f64,
        y: f64,
        #[arg(long, help = "Use the TWCC converter instead of epsg.io")]
        twcc: bool,
    },
    /// Reproject points read from stdin, one "x,y" pair per line
    Batch {
        #[arg(long, help = "Source EPSG code")]
        src: u32,
        #[arg(long, help = "Target EPSG code")]
        dst: u32,
    },
    /// Search coordinate reference systems by free text
    Search { query: String },
    /// Fetch the ESRI WKT definition of a CRS
    Wkt { code: u32 },
}
