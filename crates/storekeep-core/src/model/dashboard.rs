// ── Dashboard domain types ──
//
// Aggregates and feeds for the metrics overview screen. These are
// read-only: no Record impls, no splicing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Store-wide aggregate metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub total_revenue: f64,
    pub order_count: u64,
    pub product_count: u64,
    pub customer_count: u64,
    pub low_stock_count: u64,
}

/// A sales target for one reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTarget {
    pub label: String,
    pub target: f64,
    pub achieved: f64,
}

impl SalesTarget {
    /// Achievement as a percentage of the target (0 when no target set).
    pub fn pct_achieved(&self) -> f64 {
        if self.target <= 0.0 {
            0.0
        } else {
            self.achieved / self.target * 100.0
        }
    }
}

/// One entry in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: RecordId,
    /// Server-defined kind tag (`sale`, `restock`, `customer`, ...).
    pub kind: String,
    pub message: String,
    pub actor: Option<String>,
    pub occurred_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_achieved_handles_zero_target() {
        let t = SalesTarget {
            label: "June".into(),
            target: 0.0,
            achieved: 100.0,
        };
        assert!((t.pct_achieved() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pct_achieved_computes_ratio() {
        let t = SalesTarget {
            label: "June".into(),
            target: 200.0,
            achieved: 50.0,
        };
        assert!((t.pct_achieved() - 25.0).abs() < f64::EPSILON);
    }
}
