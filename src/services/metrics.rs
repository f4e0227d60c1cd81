//! Workbench metrics aggregation: a pure reduction from fetched rows to the
//! dashboard view-model.
//!
//! Nothing in here performs I/O or reads the clock; the caller supplies the
//! reference instant used for the month-over-month percentage. Missing amounts
//! count as zero and malformed timestamps resolve through [`safe_parse`], so
//! every combination of input produces a view.

use chrono::{DateTime, Datelike, Utc};

use crate::models::dashboard::{
    DashboardView, MonthlyRevenue, QuickStat, RecentTransaction, RecentUser, RevenueSeries, Trend,
};
use crate::models::profile::ProfileSummary;
use crate::models::transaction::{TimedAmount, Transaction, TransactionAmount};
use crate::services::timestamp::safe_parse;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const CURRENCY_SYMBOL: &str = "₦";

/// Placeholder analytics until a real page-view source exists.
pub const PAGE_VIEWS: f64 = 125_000.0;
pub const APP_DOWNLOADS: f64 = 2_067.0;

pub const DEFAULT_AVATAR: &str = "/assets/images/avatars/avatar-1.png";
pub const TRANSACTION_ICON: &str = "mdi:cash";

const FALLBACK_USERS: [(&str, &str); 5] = [
    ("/assets/images/avatars/avatar-1.png", "User1"),
    ("/assets/images/avatars/avatar-2.png", "User2"),
    ("/assets/images/avatars/avatar-3.png", "User3"),
    ("/assets/images/avatars/avatar-4.png", "User4"),
    ("/assets/images/avatars/avatar-5.png", "User5"),
];

const PAGE_VIEWS_SPARKLINE: [f64; 7] = [35.0, 42.0, 38.0, 55.0, 61.0, 49.0, 70.0];
const ACTIVE_USERS_SPARKLINE: [f64; 7] = [12.0, 18.0, 15.0, 22.0, 19.0, 25.0, 28.0];
const DOWNLOADS_SPARKLINE: [f64; 7] = [8.0, 14.0, 11.0, 9.0, 16.0, 13.0, 18.0];

/// The four independently fetched row sets.
#[derive(Debug, Clone, Default)]
pub struct MetricsInput {
    pub successful_amounts: Vec<TransactionAmount>,
    pub all_transactions: Vec<TimedAmount>,
    pub profiles: Vec<ProfileSummary>,
    /// Newest first, as ordered by the store.
    pub recent_transactions: Vec<Transaction>,
}

/// Build the full workbench view-model.
pub fn aggregate(input: &MetricsInput, as_of: DateTime<Utc>) -> DashboardView {
    let total = total_earnings(&input.successful_amounts);
    let monthly = monthly_series(&input.all_transactions);
    let percent = month_over_month(&monthly, as_of.month0() as usize);

    DashboardView {
        quick_stats: quick_stats(total, &monthly, input.profiles.len()),
        monthly_revenue: MonthlyRevenue {
            series: vec![RevenueSeries {
                name: "Revenue".to_string(),
                data: monthly.to_vec(),
            }],
            categories: MONTH_LABELS.iter().map(|m| m.to_string()).collect(),
            percent,
        },
        recent_users: recent_users(&input.profiles),
        recent_transactions: recent_transactions(&input.recent_transactions),
    }
}

pub fn total_earnings(rows: &[TransactionAmount]) -> f64 {
    rows.iter().map(|r| r.amount.unwrap_or(0.0)).sum()
}

/// Sum amounts into zero-based calendar-month slots (UTC).
pub fn monthly_series(rows: &[TimedAmount]) -> [f64; 12] {
    let mut slots = [0.0; 12];
    for row in rows {
        let month = safe_parse(row.created_at.as_deref()).month0() as usize;
        slots[month] += row.amount.unwrap_or(0.0);
    }
    slots
}

/// Percent change from the previous month's slot to `month`'s, one decimal.
///
/// Slots carry no year, so January compares against December of the same series.
pub fn month_over_month(slots: &[f64; 12], month: usize) -> f64 {
    let current = slots[month % 12];
    let previous = slots[(month + 11) % 12];
    if previous == 0.0 {
        return 0.0;
    }
    round_to(((current - previous) / previous.abs()) * 100.0, 1)
}

pub fn recent_users(profiles: &[ProfileSummary]) -> Vec<RecentUser> {
    if profiles.is_empty() {
        return fallback_users();
    }

    profiles
        .iter()
        .map(|p| RecentUser {
            avatar: non_blank(p.avatar_url.as_deref()).unwrap_or(DEFAULT_AVATAR).to_string(),
            name: non_blank(p.display_name.as_deref()).unwrap_or("Unknown").to_string(),
        })
        .collect()
}

pub fn fallback_users() -> Vec<RecentUser> {
    FALLBACK_USERS
        .iter()
        .map(|(avatar, name)| RecentUser {
            avatar: avatar.to_string(),
            name: name.to_string(),
        })
        .collect()
}

pub fn recent_transactions(rows: &[Transaction]) -> Vec<RecentTransaction> {
    rows.iter()
        .map(|t| {
            let amount = t.amount.unwrap_or(0.0);
            RecentTransaction {
                icon: TRANSACTION_ICON.to_string(),
                name: non_blank(t.description.as_deref())
                    .unwrap_or("Transaction")
                    .to_string(),
                id: format!("#{}", t.id),
                amount,
                time: safe_parse(t.created_at.as_deref()).format("%H:%M").to_string(),
                status: if amount >= 0.0 { Trend::Up } else { Trend::Down },
            }
        })
        .collect()
}

fn quick_stats(total: f64, monthly: &[f64; 12], active_users: usize) -> Vec<QuickStat> {
    vec![
        QuickStat {
            icon: "solar:wallet-outline".to_string(),
            label: "All Earnings".to_string(),
            value: format!("{CURRENCY_SYMBOL}{}", format_grouped(total)),
            color: "#3b82f6".to_string(),
            chart: monthly.to_vec(),
        },
        QuickStat {
            icon: "solar:graph-outline".to_string(),
            label: "Page Views".to_string(),
            value: format_grouped(PAGE_VIEWS),
            color: "#f59e42".to_string(),
            chart: PAGE_VIEWS_SPARKLINE.to_vec(),
        },
        QuickStat {
            icon: "solar:users-group-rounded-outline".to_string(),
            label: "Active Users".to_string(),
            value: format_grouped(active_users as f64),
            color: "#10b981".to_string(),
            chart: ACTIVE_USERS_SPARKLINE.to_vec(),
        },
        QuickStat {
            icon: "solar:download-outline".to_string(),
            label: "Downloads".to_string(),
            value: format_grouped(APP_DOWNLOADS),
            color: "#ef4444".to_string(),
            chart: DOWNLOADS_SPARKLINE.to_vec(),
        },
    ]
}

/// Thousands-grouped display with at most two decimals (`1234.5` → `1,234.5`).
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let cents = (value * 100.0).round() as i128;
    let negative = cents < 0;
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac != 0 {
        let digits = format!("{frac:02}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
