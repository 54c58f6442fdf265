//! Roster aggregation: officers, duties and per-officer verification.

use std::collections::HashMap;
use std::sync::Arc;

use client::{ClientError, DutyApi, Session};
use domain::models::{OfficerWithDuty, VerificationStatus};
use domain::services::{index_duties, merge_roster, officers_with_duty};
use tokio::task::JoinSet;

/// Fetches and merges the roster.
///
/// The officer and duty lists are fetched concurrently and both must
/// succeed. Verification lookups run as one task per officer with a duty;
/// a failed lookup is logged and leaves that officer's verification empty.
pub async fn fetch_roster<A>(
    api: Arc<A>,
    session: &Session,
) -> Result<Vec<OfficerWithDuty>, ClientError>
where
    A: DutyApi + ?Sized + 'static,
{
    let (officers, duties) =
        tokio::try_join!(api.list_officers(session), api.list_duties(session))?;
    let duties = index_duties(duties);

    let mut lookups = JoinSet::new();
    for officer_id in officers_with_duty(&officers, &duties) {
        let api = Arc::clone(&api);
        let session = session.clone();
        let officer_id = officer_id.to_string();
        lookups.spawn(async move {
            let status = api.verification_status(&session, &officer_id).await;
            (officer_id, status)
        });
    }

    let mut verifications: HashMap<String, VerificationStatus> = HashMap::new();
    while let Some(joined) = lookups.join_next().await {
        match joined {
            Ok((officer_id, Ok(status))) => {
                verifications.insert(officer_id, status);
            }
            Ok((officer_id, Err(e))) => {
                tracing::warn!(
                    officer_id = %officer_id,
                    error = %e,
                    "Failed to fetch verification status"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Verification lookup task failed");
            }
        }
    }

    tracing::debug!(
        officers = officers.len(),
        duties = duties.len(),
        verified = verifications.len(),
        "Roster fetched"
    );
    Ok(merge_roster(officers, duties, verifications))
}
