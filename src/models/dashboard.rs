//! Workbench view-model handed to the presentation layer.

use serde::Serialize;

/// A summary tile: label, formatted value and a sparkline series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickStat {
    pub icon: String,
    pub label: String,
    pub value: String,
    pub color: String,
    pub chart: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueSeries {
    pub name: String,
    pub data: Vec<f64>,
}

/// 12 monthly slots (Jan..Dec) plus the month-over-month change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub series: Vec<RevenueSeries>,
    pub categories: Vec<String>,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentUser {
    pub avatar: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentTransaction {
    pub icon: String,
    pub name: String,
    pub id: String,
    pub amount: f64,
    pub time: String,
    pub status: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub quick_stats: Vec<QuickStat>,
    pub monthly_revenue: MonthlyRevenue,
    pub recent_users: Vec<RecentUser>,
    pub recent_transactions: Vec<RecentTransaction>,
}
