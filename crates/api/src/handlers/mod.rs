//! HTTP handler modules.
//!
//! Handlers stay thin: they validate input at the boundary, call into the
//! repository layer, and run the pure evaluators from `barplan_core` on
//! the loaded data. Health is always computed against an explicit `as_of`
//! date; "today" is only ever resolved here, at the HTTP boundary.

pub mod assets;
pub mod calendar;
pub mod deliverables;
pub mod events;
pub mod hardware;
pub mod templates;
pub mod themes;
pub mod users;
pub mod venues;

use barplan_core::deliverable::DeliverableStatus;
use barplan_core::health::DeliverableSnapshot;
use barplan_core::types::Date;
use barplan_db::models::deliverable::EventDeliverableDetail;

use crate::error::{AppError, AppResult};

/// Today's date in UTC, used when a request does not pin `as_of`.
pub(crate) fn today() -> Date {
    chrono::Utc::now().date_naive()
}

/// Map loaded deliverable rows into health-evaluation snapshots.
///
/// Status strings are guaranteed valid by the database CHECK constraint;
/// a mismatch here means schema drift and surfaces as a 500.
pub(crate) fn snapshots(
    deliverables: &[EventDeliverableDetail],
) -> AppResult<Vec<DeliverableSnapshot>> {
    deliverables
        .iter()
        .map(|d| {
            let status = DeliverableStatus::from_str_value(&d.status)
                .map_err(AppError::InternalError)?;
            Ok(DeliverableSnapshot {
                status,
                is_enabled: d.is_enabled,
            })
        })
        .collect()
}
