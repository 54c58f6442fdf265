//! Command execution.

use std::future::Future;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use client::{ApiClient, Session};
use domain::models::{AccountKind, MapView, OfficerWithDuty};
use domain::services::DashboardState;

use crate::auth::{self, REGISTRATION_SUCCESS};
use crate::cli::Command;
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::error::ConsoleError;
use crate::officer;
use crate::render;
use crate::session::{FileTokenStore, TokenStore};

/// Everything a command needs: configuration, the API client and the
/// token store.
pub struct App {
    config: Config,
    api: Arc<ApiClient>,
    store: Arc<dyn TokenStore>,
}

impl App {
    /// Builds the app from configuration with a file-backed token store.
    pub fn new(config: Config) -> Result<Self, ConsoleError> {
        let api = ApiClient::new(&config.api.http_config())?;
        let store = Arc::new(FileTokenStore::new(config.session.token_path.clone()));
        Ok(Self::with_parts(config, Arc::new(api), store))
    }

    pub fn with_parts(config: Config, api: Arc<ApiClient>, store: Arc<dyn TokenStore>) -> Self {
        Self { config, api, store }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one command, writing its output to `out`.
    pub async fn run<W: Write>(&self, command: Command, out: &mut W) -> Result<(), ConsoleError> {
        match command {
            Command::Login { kind, credentials } => {
                auth::login(self.api.as_ref(), self.store.as_ref(), kind, &credentials).await?;
                let next = match kind {
                    AccountKind::Admin => "roster",
                    AccountKind::Officer => "my-duties",
                };
                writeln!(
                    out,
                    "Logged in as {}. Run `duty-console {}` to continue.",
                    credentials.empid, next
                )?;
            }
            Command::Register {
                credentials,
                confirm_password,
            } => {
                auth::register(self.api.as_ref(), &credentials, &confirm_password).await?;
                writeln!(out, "{}", REGISTRATION_SUCCESS)?;
            }
            Command::Logout => {
                auth::logout(self.store.as_ref()).await?;
                writeln!(out, "Logged out.")?;
            }
            Command::WhoAmI => {
                let claims = auth::whoami(self.store.as_ref()).await?;
                write!(out, "{}", render::claims(&claims, Utc::now()))?;
            }
            Command::Roster => {
                let session = self.store.session().await?;
                let entries = self.load_roster(&Dashboard::new(self.api.clone()), &session).await?;
                write!(out, "{}", render::roster(&entries))?;
            }
            Command::Map { geojson } => {
                let session = self.store.session().await?;
                let entries = self.load_roster(&Dashboard::new(self.api.clone()), &session).await?;
                let view = self.map_view(&entries);
                if geojson {
                    writeln!(out, "{}", render::map_geojson(&view)?)?;
                } else {
                    write!(out, "{}", render::map_table(&view))?;
                }
            }
            Command::Assign { officer_id, form } => {
                let session = self.store.session().await?;
                let dashboard = Dashboard::new(self.api.clone());
                self.load_roster(&dashboard, &session).await?;

                let officer = dashboard.open_assign(&officer_id).await?;
                let duty = dashboard.assign(&session, &form).await?;
                writeln!(
                    out,
                    "Duty assigned to {} at {}.",
                    officer.empid(),
                    duty.location
                )?;
                write!(out, "{}", render::dashboard(&dashboard.state().await))?;
            }
            Command::Watch { interval_secs } => {
                let session = self.store.session().await?;
                let secs = interval_secs.unwrap_or(self.config.dashboard.poll_interval_secs);
                if secs == 0 {
                    return Err(ConsoleError::Usage(
                        "--interval must be at least 1 second".to_string(),
                    ));
                }

                let dashboard = Dashboard::new(self.api.clone());
                let mut write_failed = None;
                dashboard
                    .watch(
                        &session,
                        Duration::from_secs(secs),
                        |state| {
                            let frame = match state {
                                DashboardState::Ready(entries) => format!(
                                    "{}{}",
                                    render::roster(entries),
                                    render::map_table(&self.map_view(entries))
                                ),
                                other => render::dashboard(other),
                            };
                            if let Err(e) = writeln!(out, "{}", frame).and_then(|_| out.flush()) {
                                write_failed.get_or_insert(e);
                            }
                        },
                        on_signal(tokio::signal::ctrl_c()),
                    )
                    .await;
                if let Some(e) = write_failed {
                    return Err(e.into());
                }
            }
            Command::MyDuties => {
                let session = self.store.session().await?;
                let duties = officer::my_duties(self.api.as_ref(), &session).await?;
                write!(out, "{}", render::duties(&duties))?;
            }
            Command::LocationUpdate { duty_id, position } => {
                let session = self.store.session().await?;
                let response =
                    officer::send_location(self.api.as_ref(), &session, &duty_id, position).await?;
                writeln!(
                    out,
                    "Location update {}: {}",
                    response.status,
                    if response.in_radius {
                        "inside the duty radius"
                    } else {
                        "outside the duty radius"
                    }
                )?;
            }
            Command::CheckIn { duty_id, request } => {
                let session = self.store.session().await?;
                let response =
                    officer::check_in(self.api.as_ref(), &session, &duty_id, &request).await?;
                writeln!(
                    out,
                    "Check-in {}: location verified: {}, face verified: {}",
                    response.status,
                    yes_no(response.location_verified),
                    yes_no(response.face_verified)
                )?;
            }
            Command::GeofenceCheck { duty_id, position } => {
                let session = self.store.session().await?;
                let (duty, check) =
                    officer::preview_geofence(self.api.as_ref(), &session, &duty_id, position)
                        .await?;
                write!(out, "{}", render::geofence(&duty, &check))?;
            }
        }
        Ok(())
    }

    /// Refreshes `dashboard` once and returns the roster, or the refresh
    /// error message.
    async fn load_roster(
        &self,
        dashboard: &Dashboard<ApiClient>,
        session: &Session,
    ) -> Result<Vec<OfficerWithDuty>, ConsoleError> {
        dashboard.refresh(session).await;
        match dashboard.state().await {
            DashboardState::Ready(entries) => Ok(entries),
            DashboardState::Error(message) => Err(ConsoleError::Refresh(message)),
            DashboardState::Loading => Err(ConsoleError::Refresh(
                "Dashboard is still loading".to_string(),
            )),
        }
    }

    fn map_view(&self, entries: &[OfficerWithDuty]) -> MapView {
        let mut view = MapView::with_fallback(entries, self.config.map.fallback_center());
        view.zoom = self.config.map.zoom;
        view
    }
}

/// Resolves when `signal` fires. If the handler cannot be installed this
/// never resolves, so `watch` keeps running instead of exiting at once.
async fn on_signal<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::warn!(error = %e, "Cannot listen for Ctrl-C; stop the watch by terminating the process");
        std::future::pending::<()>().await;
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
