//! Merged roster view model.

use serde::{Deserialize, Serialize};

use super::{Duty, Officer, VerificationStatus};

/// An officer with their assigned duty and verification status, if any.
///
/// Assembled client-side on every refresh and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerWithDuty {
    #[serde(flatten)]
    pub officer: Officer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_duty: Option<Duty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationStatus>,
}

impl OfficerWithDuty {
    pub fn new(officer: Officer) -> Self {
        Self {
            officer,
            assigned_duty: None,
            verification: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.officer.id
    }

    pub fn empid(&self) -> &str {
        &self.officer.empid
    }

    /// The assign action is offered only to officers without a duty.
    ///
    /// This is a display rule; the server does not enforce one duty per
    /// officer.
    pub fn can_assign(&self) -> bool {
        self.assigned_duty.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_officer_with_duty_flattens_officer_fields() {
        let mut entry = OfficerWithDuty::new(Officer::new("1", "E1"));
        entry.assigned_duty = Some(Duty {
            id: None,
            officer_id: "1".to_string(),
            assigned_by: None,
            location: "Gate A".to_string(),
            latitude: 15.3,
            longitude: 74.0,
            radius: 100.0,
            start_time: None,
            end_time: None,
            status: Default::default(),
        });

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], "1");
        assert_eq!(value["empid"], "E1");
        assert_eq!(value["assignedDuty"]["location"], "Gate A");
        assert!(value.get("verification").is_none());
    }

    #[test]
    fn test_can_assign_only_without_duty() {
        let entry = OfficerWithDuty::new(Officer::new("1", "E1"));
        assert!(entry.can_assign());
    }
}
