//! Read-side dashboard queries over one loaded snapshot.
//!
//! # Responsibility
//! - Compute the aggregations and joins the dashboard renders.
//!
//! # Invariants
//! - Queries never mutate the snapshot.
//! - Unresolved references are absent data, never errors.

pub mod dashboard;

pub use dashboard::{
    active_alerts, compliance_by_standard, dashboard_summary, join_alert_organizations,
    join_assignments, pending_documents, risk_distribution, status_distribution, AlertJoinRow,
    AssignmentRow, DashboardSummary,
};
