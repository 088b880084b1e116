use crate::{
    category::CategoryFilter,
    expense::Expense,
    query::{self, MonthlySeries},
    Amount, YearMonth,
};
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

/// What the home screen shows: this month's spend, split by category, and the month's
/// expenses narrowed by the selected filter.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSummary {
    month: YearMonth,
    total: Amount,
    by_category: BTreeMap<String, Amount>,
    visible: Vec<Expense>,
}

impl DashboardSummary {
    pub fn build(
        records: &[Expense],
        filter: &CategoryFilter,
        today: Option<NaiveDate>, // This allows overriding the current date for testing
    ) -> Self {
        // Resolved on every build rather than stored, so the dashboard moves on to the
        // new month as soon as it starts
        let month = today.map_or_else(YearMonth::current, YearMonth::of);
        debug!("building dashboard for {} filtered by {}", month, filter);

        let visible = query::filter_by_year_month(records, month)
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect();

        DashboardSummary {
            month,
            total: query::total_for_month(records, month),
            by_category: query::totals_by_category(records, month),
            visible,
        }
    }

    /// The month this summary covers.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// The whole month's spend, regardless of the filter.
    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn by_category(&self) -> &BTreeMap<String, Amount> {
        &self.by_category
    }

    /// The month's expenses that pass the filter, in store order.
    pub fn visible(&self) -> &[Expense] {
        &self.visible
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}

/// What the insights screen shows for the selected year.
#[derive(Clone, Debug, PartialEq)]
pub struct YearOverview {
    series: MonthlySeries,
    years: Vec<i32>,
}

impl YearOverview {
    pub fn build(records: &[Expense], year: i32, current_year: i32) -> Self {
        debug!("building overview for {}", year);
        YearOverview {
            series: query::monthly_series(records, year),
            years: query::years_with_expenses(records, current_year),
        }
    }

    pub fn series(&self) -> &MonthlySeries {
        &self.series
    }

    /// Years offered by the year selector, newest first.
    pub fn years(&self) -> &[i32] {
        &self.years
    }
}
