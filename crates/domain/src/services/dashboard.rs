//! Dashboard state machine.
//!
//! ```text
//!   mount ──► Loading ──ok──► Ready ──assignment done──► Loading
//!                │                                          │
//!                └──err──► Error ──manual retry──► Loading ◄┘
//! ```
//!
//! Every refresh gets a ticket carrying a generation number. Only the
//! newest ticket may apply its result; older ones are reported as
//! superseded and dropped.

use serde::Serialize;
use thiserror::Error;

use crate::models::OfficerWithDuty;

/// Observable state of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum DashboardState {
    Loading,
    Error(String),
    Ready(Vec<OfficerWithDuty>),
}

impl DashboardState {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardState::Loading => "loading",
            DashboardState::Error(_) => "error",
            DashboardState::Ready(_) => "ready",
        }
    }
}

/// Handle for one in-flight refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// What happened to a completed refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer refresh started after this one; its result was discarded.
    Superseded,
}

/// Reasons the assign-duty modal cannot be opened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignGuardError {
    #[error("Dashboard is not ready")]
    NotReady,

    #[error("Officer {0} is not on the roster")]
    UnknownOfficer(String),

    #[error("Officer {0} already has a duty assigned")]
    AlreadyAssigned(String),
}

/// Dashboard state plus the bookkeeping behind it.
#[derive(Debug, Clone)]
pub struct DashboardModel {
    state: DashboardState,
    generation: u64,
    assigning: Option<String>,
}

impl Default for DashboardModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardModel {
    /// A freshly mounted dashboard, in `Loading`.
    pub fn new() -> Self {
        Self {
            state: DashboardState::Loading,
            generation: 0,
            assigning: None,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The roster, when ready.
    pub fn roster(&self) -> Option<&[OfficerWithDuty]> {
        match &self.state {
            DashboardState::Ready(entries) => Some(entries),
            _ => None,
        }
    }

    /// Starts a refresh: enters `Loading` and invalidates older tickets.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.state = DashboardState::Loading;
        RefreshTicket(self.generation)
    }

    /// Applies a refresh result if `ticket` is still the newest.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<OfficerWithDuty>, String>,
    ) -> RefreshOutcome {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "Discarding superseded refresh"
            );
            return RefreshOutcome::Superseded;
        }

        self.state = match result {
            Ok(entries) => DashboardState::Ready(entries),
            Err(message) => DashboardState::Error(message),
        };
        RefreshOutcome::Applied
    }

    /// Opens the assign-duty modal for an officer. State is unchanged.
    pub fn open_assign(&mut self, officer_id: &str) -> Result<&OfficerWithDuty, AssignGuardError> {
        let entries = match &self.state {
            DashboardState::Ready(entries) => entries,
            _ => return Err(AssignGuardError::NotReady),
        };
        let entry = entries
            .iter()
            .find(|e| e.officer.id == officer_id)
            .ok_or_else(|| AssignGuardError::UnknownOfficer(officer_id.to_string()))?;
        if !entry.can_assign() {
            return Err(AssignGuardError::AlreadyAssigned(entry.officer.empid.clone()));
        }
        self.assigning = Some(officer_id.to_string());
        Ok(entry)
    }

    /// Officer whose assign modal is open, if any.
    pub fn assigning(&self) -> Option<&str> {
        self.assigning.as_deref()
    }

    pub fn close_assign(&mut self) {
        self.assigning = None;
    }
}
