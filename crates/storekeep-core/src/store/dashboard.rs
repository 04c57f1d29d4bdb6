// ── Dashboard slice ──
//
// The metrics overview screen is read-only and fed by three independent
// fetch actions (overview, sales targets, recent activity) that share
// one status flag. Each loaded payload overwrites its section wholesale.

use tokio::sync::watch;

use super::slice::RequestStatus;
use crate::model::{Activity, DashboardOverview, SalesTarget};

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub overview: Option<DashboardOverview>,
    pub targets: Vec<SalesTarget>,
    pub activity: Vec<Activity>,
    pub status: RequestStatus,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum DashboardCommand {
    Pending,
    OverviewLoaded(DashboardOverview),
    TargetsLoaded(Vec<SalesTarget>),
    ActivityLoaded(Vec<Activity>),
    Rejected(String),
}

pub fn reduce(state: &DashboardState, cmd: DashboardCommand) -> DashboardState {
    let mut next = state.clone();
    match cmd {
        DashboardCommand::Pending => {
            next.status = RequestStatus::Loading;
            next.error = None;
        }
        DashboardCommand::OverviewLoaded(overview) => {
            next.overview = Some(overview);
            next.status = RequestStatus::Succeeded;
        }
        DashboardCommand::TargetsLoaded(targets) => {
            next.targets = targets;
            next.status = RequestStatus::Succeeded;
        }
        DashboardCommand::ActivityLoaded(activity) => {
            next.activity = activity;
            next.status = RequestStatus::Succeeded;
        }
        DashboardCommand::Rejected(message) => {
            next.status = RequestStatus::Failed;
            next.error = Some(message);
        }
    }
    next
}

/// Watch-backed handle, mirroring [`super::slice::Slice`].
pub struct DashboardSlice {
    state: watch::Sender<DashboardState>,
}

impl DashboardSlice {
    pub(crate) fn new() -> Self {
        let (state, _) = watch::channel(DashboardState::default());
        Self { state }
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    pub fn apply(&self, cmd: DashboardCommand) {
        self.state.send_modify(|s| *s = reduce(s, cmd));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_load_independently() {
        let state = reduce(&DashboardState::default(), DashboardCommand::Pending);
        let state = reduce(
            &state,
            DashboardCommand::OverviewLoaded(DashboardOverview {
                total_revenue: 1000.0,
                order_count: 12,
                product_count: 40,
                customer_count: 9,
                low_stock_count: 2,
            }),
        );
        assert_eq!(state.status, RequestStatus::Succeeded);
        assert!(state.targets.is_empty());

        let state = reduce(
            &state,
            DashboardCommand::TargetsLoaded(vec![SalesTarget {
                label: "July".into(),
                target: 500.0,
                achieved: 620.0,
            }]),
        );
        // Overview survives a targets load.
        assert!(state.overview.is_some());
        assert_eq!(state.targets.len(), 1);
    }

    #[test]
    fn rejection_preserves_loaded_sections() {
        let state = reduce(
            &DashboardState::default(),
            DashboardCommand::ActivityLoaded(Vec::new()),
        );
        let state = reduce(&state, DashboardCommand::Rejected("API error: boom".into()));
        assert_eq!(state.status, RequestStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("API error: boom"));
    }
}
