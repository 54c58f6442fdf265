//! The admin dashboard: state machine plus the calls that drive it.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use client::{DutyApi, Session};
use domain::models::{Duty, OfficerWithDuty};
use domain::services::{DashboardModel, DashboardState, DutyForm, RefreshOutcome};
use tokio::sync::RwLock;

use crate::aggregator::fetch_roster;
use crate::assign::submit_duty;
use crate::error::ConsoleError;

pub struct Dashboard<A: DutyApi + ?Sized> {
    api: Arc<A>,
    model: RwLock<DashboardModel>,
}

impl<A> Dashboard<A>
where
    A: DutyApi + ?Sized + 'static,
{
    /// A mounted dashboard, in `Loading` until the first refresh lands.
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            model: RwLock::new(DashboardModel::new()),
        }
    }

    pub async fn state(&self) -> DashboardState {
        self.model.read().await.state().clone()
    }

    pub async fn generation(&self) -> u64 {
        self.model.read().await.generation()
    }

    /// Re-fetches the roster and applies it unless a newer refresh started
    /// in the meantime.
    pub async fn refresh(&self, session: &Session) -> RefreshOutcome {
        let ticket = self.model.write().await.begin_refresh();
        tracing::debug!(generation = ticket.generation(), "Refreshing dashboard");

        let result = fetch_roster(Arc::clone(&self.api), session)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Dashboard refresh failed");
                e.to_string()
            });

        self.model.write().await.complete_refresh(ticket, result)
    }

    /// Opens the assign modal for an officer without a duty.
    pub async fn open_assign(&self, officer_id: &str) -> Result<OfficerWithDuty, ConsoleError> {
        let mut model = self.model.write().await;
        let entry = model.open_assign(officer_id)?.clone();
        Ok(entry)
    }

    pub async fn assigning(&self) -> Option<String> {
        self.model.read().await.assigning().map(str::to_string)
    }

    pub async fn close_assign(&self) {
        self.model.write().await.close_assign();
    }

    /// Submits the open assign modal.
    ///
    /// On success the dashboard refreshes and the modal closes. On failure
    /// the modal stays open and the error is returned for display.
    pub async fn assign(&self, session: &Session, form: &DutyForm) -> Result<Duty, ConsoleError> {
        let officer_id = self
            .assigning()
            .await
            .ok_or_else(|| ConsoleError::Usage("No officer selected for assignment".to_string()))?;

        let duty = submit_duty(self.api.as_ref(), session, &officer_id, form, || async {
            self.refresh(session).await;
        })
        .await?;

        self.close_assign().await;
        Ok(duty)
    }

    /// Refreshes every `interval` and reports each applied state until
    /// `shutdown` resolves.
    pub async fn watch<F, S>(&self, session: &Session, interval: Duration, mut on_state: F, shutdown: S)
    where
        F: FnMut(&DashboardState),
        S: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Stopping dashboard watch");
                    break;
                }
                _ = ticker.tick() => {
                    if self.refresh(session).await == RefreshOutcome::Applied {
                        on_state(self.model.read().await.state());
                    }
                }
            }
        }
    }
}
