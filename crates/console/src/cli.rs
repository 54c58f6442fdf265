//! Command-line interface.
//!
//! [`Cli`] is what clap parses; [`Command`] is the same invocation with its
//! flags turned into domain values, ready for [`crate::App::run`].

use clap::{Args, Parser, Subcommand};
use domain::models::{AccountKind, CheckInRequest, Credentials, GeoPoint};
use domain::services::{DutyForm, GeoPicker};

/// duty-console - geofenced duty assignment and monitoring
#[derive(Parser, Debug)]
#[command(name = "duty-console")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    // === Account ===
    /// Log in and store the access token
    Login {
        #[arg(long)]
        empid: String,

        #[arg(long)]
        password: String,

        /// Use the officer login instead of the admin login
        #[arg(long)]
        officer: bool,
    },

    /// Register an admin account
    Register {
        #[arg(long)]
        empid: String,

        #[arg(long)]
        password: String,

        /// Password confirmation; must match --password
        #[arg(long)]
        confirm: String,
    },

    /// Forget the stored access token
    Logout,

    /// Show who the stored token belongs to
    #[command(name = "whoami")]
    WhoAmI,

    // === Admin dashboard ===
    /// List officers with their duty and verification status
    Roster,

    /// Show the live map of assigned duties
    Map {
        /// Print a GeoJSON FeatureCollection instead of a table
        #[arg(long)]
        geojson: bool,
    },

    /// Assign a duty to an officer without one
    Assign(AssignArgs),

    /// Refresh the roster and map periodically until Ctrl-C
    Watch {
        /// Seconds between refreshes [default: dashboard.poll_interval_secs]
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
    },

    // === Officer ===
    /// List the signed-in officer's duties
    MyDuties,

    /// Report the current position for a duty
    LocationUpdate {
        #[arg(long)]
        duty_id: String,

        #[command(flatten)]
        position: PositionArgs,
    },

    /// Check in to a duty with a selfie
    #[command(name = "checkin")]
    CheckIn {
        #[arg(long)]
        duty_id: String,

        #[command(flatten)]
        position: PositionArgs,

        #[arg(long)]
        selfie_url: String,

        #[arg(long)]
        remarks: Option<String>,
    },

    /// Preview whether a position lies inside a duty's geofence
    GeofenceCheck {
        #[arg(long)]
        duty_id: String,

        #[command(flatten)]
        position: PositionArgs,
    },
}

#[derive(Args, Debug)]
pub struct PositionArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,
}

impl PositionArgs {
    fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Fields of the assign-duty form. Values stay raw so the form reports
/// every invalid field at once.
#[derive(Args, Debug)]
pub struct AssignArgs {
    #[arg(long)]
    pub officer_id: String,

    /// Location label shown on the map
    #[arg(long)]
    pub location: String,

    #[command(flatten)]
    pub position: PositionArgs,

    /// Geofence radius in meters [default: assignment.default_radius_meters]
    #[arg(long, allow_negative_numbers = true)]
    pub radius: Option<String>,

    /// YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// HH:MM
    #[arg(long)]
    pub start: String,

    /// HH:MM
    #[arg(long)]
    pub end: String,
}

impl AssignArgs {
    /// Fills a fresh form; `default_radius` applies when `--radius` is absent.
    fn into_form(self, default_radius: f64) -> DutyForm {
        let mut form = DutyForm::with_radius(default_radius);
        form.location = self.location;
        // A fresh picker per modal; the typed coordinates act as the tap.
        let mut picker = GeoPicker::new();
        form.set_point(picker.pick(self.position.lat, self.position.lng));
        if let Some(radius) = self.radius {
            form.radius = radius;
        }
        form.date = self.date;
        form.start_time = self.start;
        form.end_time = self.end;
        form
    }
}

/// A parsed invocation in domain terms.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login {
        kind: AccountKind,
        credentials: Credentials,
    },
    Register {
        credentials: Credentials,
        confirm_password: String,
    },
    Logout,
    WhoAmI,
    Roster,
    Map {
        geojson: bool,
    },
    Assign {
        officer_id: String,
        form: DutyForm,
    },
    Watch {
        interval_secs: Option<u64>,
    },
    MyDuties,
    LocationUpdate {
        duty_id: String,
        position: GeoPoint,
    },
    CheckIn {
        duty_id: String,
        request: CheckInRequest,
    },
    GeofenceCheck {
        duty_id: String,
        position: GeoPoint,
    },
}

impl Cli {
    /// Resolves the invocation; `default_radius` comes from configuration.
    pub fn into_command(self, default_radius: f64) -> Command {
        match self.command {
            Commands::Login {
                empid,
                password,
                officer,
            } => Command::Login {
                kind: if officer {
                    AccountKind::Officer
                } else {
                    AccountKind::Admin
                },
                credentials: Credentials::new(empid, password),
            },
            Commands::Register {
                empid,
                password,
                confirm,
            } => Command::Register {
                credentials: Credentials::new(empid, password),
                confirm_password: confirm,
            },
            Commands::Logout => Command::Logout,
            Commands::WhoAmI => Command::WhoAmI,
            Commands::Roster => Command::Roster,
            Commands::Map { geojson } => Command::Map { geojson },
            Commands::Assign(args) => Command::Assign {
                officer_id: args.officer_id.clone(),
                form: args.into_form(default_radius),
            },
            Commands::Watch { interval } => Command::Watch {
                interval_secs: interval,
            },
            Commands::MyDuties => Command::MyDuties,
            Commands::LocationUpdate { duty_id, position } => Command::LocationUpdate {
                duty_id,
                position: position.point(),
            },
            Commands::CheckIn {
                duty_id,
                position,
                selfie_url,
                remarks,
            } => Command::CheckIn {
                duty_id,
                request: CheckInRequest {
                    latitude: position.lat,
                    longitude: position.lng,
                    selfie_url,
                    remarks,
                },
            },
            Commands::GeofenceCheck { duty_id, position } => Command::GeofenceCheck {
                duty_id,
                position: position.point(),
            },
        }
    }
}
