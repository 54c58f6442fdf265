//! Verification status domain model.

use serde::{Deserialize, Serialize};

/// Server-computed verification flags for an officer's current duty.
///
/// Produced from device telemetry by the API; the console only displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStatus {
    pub officer_id: String,
    #[serde(default)]
    pub face_verified: bool,
    #[serde(default)]
    pub location_verified: bool,
}

impl VerificationStatus {
    /// Both identity and position were confirmed.
    pub fn is_fully_verified(&self) -> bool {
        self.face_verified && self.location_verified
    }

    /// Short human-readable summary.
    pub fn summary(&self) -> &'static str {
        match (self.face_verified, self.location_verified) {
            (true, true) => "verified",
            (true, false) => "face only",
            (false, true) => "location only",
            (false, false) => "unverified",
        }
    }
}
