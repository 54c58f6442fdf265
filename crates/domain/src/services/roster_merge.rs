//! Roster merge: officers + duties + verification status into one view.
//!
//! Merge rules:
//! 1. Output order is the order of the officer list.
//! 2. Duties are indexed by `officerId`; for repeated ids the last duty in
//!    server order wins.
//! 3. Duties and statuses whose officer id matches no officer are dropped.

use std::collections::HashMap;

use crate::models::{Duty, Officer, OfficerWithDuty, VerificationStatus};

/// Indexes duties by officer id.
pub fn index_duties(duties: Vec<Duty>) -> HashMap<String, Duty> {
    let mut by_officer = HashMap::with_capacity(duties.len());
    for duty in duties {
        by_officer.insert(duty.officer_id.clone(), duty);
    }
    by_officer
}

/// Officer ids that have a duty, in officer-list order.
///
/// These are the officers whose verification status is worth fetching.
pub fn officers_with_duty<'a>(
    officers: &'a [Officer],
    duties: &HashMap<String, Duty>,
) -> Vec<&'a str> {
    officers
        .iter()
        .filter(|o| duties.contains_key(&o.id))
        .map(|o| o.id.as_str())
        .collect()
}

/// Builds the merged roster.
pub fn merge_roster(
    officers: Vec<Officer>,
    mut duties: HashMap<String, Duty>,
    mut verifications: HashMap<String, VerificationStatus>,
) -> Vec<OfficerWithDuty> {
    officers
        .into_iter()
        .map(|officer| {
            let assigned_duty = duties.remove(&officer.id);
            let verification = verifications.remove(&officer.id);
            OfficerWithDuty {
                officer,
                assigned_duty,
                verification,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duty(officer_id: &str, location: &str) -> Duty {
        Duty {
            id: None,
            officer_id: officer_id.to_string(),
            assigned_by: None,
            location: location.to_string(),
            latitude: 15.3,
            longitude: 74.0,
            radius: 100.0,
            start_time: None,
            end_time: None,
            status: Default::default(),
        }
    }

    fn status(officer_id: &str, face: bool, location: bool) -> VerificationStatus {
        VerificationStatus {
            officer_id: officer_id.to_string(),
            face_verified: face,
            location_verified: location,
        }
    }

    #[test]
    fn test_merge_single_officer_with_duty() {
        let officers = vec![Officer::new("1", "E1")];
        let duties = index_duties(vec![duty("1", "Gate A")]);

        let merged = merge_roster(officers, duties, HashMap::new());
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id(), "1");
        assert_eq!(merged[0].empid(), "E1");
        assert_eq!(
            merged[0].assigned_duty.as_ref().map(|d| d.location.as_str()),
            Some("Gate A")
        );
        assert!(merged[0].verification.is_none());
    }

    #[test]
    fn test_merge_preserves_officer_order() {
        let officers = vec![
            Officer::new("3", "E3"),
            Officer::new("1", "E1"),
            Officer::new("2", "E2"),
        ];
        let duties = index_duties(vec![duty("1", "A"), duty("2", "B"), duty("3", "C")]);

        let merged = merge_roster(officers, duties, HashMap::new());
        let ids: Vec<&str> = merged.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_merge_drops_unmatched_entries() {
        let officers = vec![Officer::new("1", "E1")];
        let duties = index_duties(vec![duty("ghost", "Nowhere")]);
        let mut verifications = HashMap::new();
        verifications.insert("ghost".to_string(), status("ghost", true, true));

        let merged = merge_roster(officers, duties, verifications);
        assert_eq!(merged.len(), 1);
        assert!(merged[0].assigned_duty.is_none());
        assert!(merged[0].verification.is_none());
    }

    #[test]
    fn test_index_duties_last_wins() {
        let index = index_duties(vec![duty("1", "Old Post"), duty("1", "New Post")]);
        assert_eq!(index.len(), 1);
        assert_eq!(index["1"].location, "New Post");
    }

    #[test]
    fn test_merge_attaches_verification() {
        let officers = vec![Officer::new("1", "E1"), Officer::new("2", "E2")];
        let duties = index_duties(vec![duty("1", "A"), duty("2", "B")]);
        let mut verifications = HashMap::new();
        verifications.insert("1".to_string(), status("1", true, false));

        let merged = merge_roster(officers, duties, verifications);
        assert_eq!(merged[0].verification, Some(status("1", true, false)));
        assert!(merged[1].verification.is_none());
    }

    #[test]
    fn test_officers_with_duty_in_roster_order() {
        let officers = vec![
            Officer::new("2", "E2"),
            Officer::new("5", "E5"),
            Officer::new("1", "E1"),
        ];
        let duties = index_duties(vec![duty("1", "A"), duty("2", "B")]);
        assert_eq!(officers_with_duty(&officers, &duties), vec!["2", "1"]);
    }
}
