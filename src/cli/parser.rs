use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for punchclock
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Punch in/out against projects, with geofence-gated onsite attendance",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user instead of the configured one
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// A location reading given on the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    /// Latitude in decimal degrees
    #[arg(long = "lat", allow_negative_numbers = true, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long = "lon", allow_negative_numbers = true, requires = "lat")]
    pub lon: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use instead of $EDITOR")]
        editor: Option<String>,
    },

    /// Manage the geofenced work locations
    Geofence {
        #[command(subcommand)]
        action: GeofenceAction,
    },

    /// Show or change the current user's work mode (ONSITE or REMOTE)
    Mode {
        /// New work mode
        mode: Option<String>,
    },

    /// Punch in or out
    Punch {
        #[command(subcommand)]
        action: PunchAction,
    },

    /// Show the current session and today's hours
    Status {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Attendance history grouped by day, newest first
    History {
        #[arg(long = "date", help = "Only this day (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "type", help = "Only IN or OUT punches")]
        kind: Option<String>,
    },

    /// Worked hours for a day or a project
    Hours {
        #[arg(long = "date", conflicts_with = "project", help = "Day (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "project", help = "Total hours booked on this project")]
        project: Option<String>,
    },

    /// Recent work sessions with their durations
    Sessions {
        #[arg(long = "limit", default_value_t = 10)]
        limit: usize,
    },

    /// Export punches or work sessions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a START:END range"
        )]
        range: Option<String>,

        #[arg(long, short = 's', help = "Export paired work sessions instead of punches")]
        sessions: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum GeofenceAction {
    /// Register a new circular work location
    Add {
        name: String,

        #[arg(long = "lat", allow_negative_numbers = true)]
        lat: f64,

        #[arg(long = "lon", allow_negative_numbers = true)]
        lon: f64,

        #[arg(long = "radius", help = "Radius in meters (> 0)")]
        radius: f64,
    },

    /// List all geofences
    List,

    /// Delete a geofence by id
    Del {
        id: i64,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Show distance and membership of a location for every geofence
    Check {
        #[command(flatten)]
        location: LocationArgs,
    },
}

#[derive(Subcommand)]
pub enum PunchAction {
    /// Start a work session
    In {
        #[arg(long = "project")]
        project: Option<String>,

        #[arg(long = "task")]
        task: Option<String>,

        #[command(flatten)]
        location: LocationArgs,
    },

    /// Close the current work session
    Out {
        #[command(flatten)]
        location: LocationArgs,
    },
}
