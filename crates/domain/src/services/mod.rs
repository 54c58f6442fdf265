//! Domain services for the duty console.
//!
//! Services contain the console's logic that operates on domain models
//! without any I/O.

pub mod assignment;
pub mod dashboard;
pub mod geo_picker;
pub mod geofence;
pub mod roster_merge;

pub use assignment::{compose_instant, DutyForm, FormError};
pub use dashboard::{
    AssignGuardError, DashboardModel, DashboardState, RefreshOutcome, RefreshTicket,
};
pub use geo_picker::{GeoPicker, PickSource};
pub use geofence::{check_position, distance_meters, GeofenceCheck};
pub use roster_merge::{index_duties, merge_roster, officers_with_duty};
