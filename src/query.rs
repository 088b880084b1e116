//! Derived views over a list of expenses.
//!
//! Every function here is a pure function of its arguments. Nothing is cached, so the
//! results always reflect the records passed in, and calling them once per render is
//! fine.

use crate::{expense::Expense, Amount, YearMonth};
use chrono::Datelike;
use log::trace;
use std::collections::BTreeMap;

/// Total spend for one year, month by month.
///
/// There is always exactly one entry per month, zero where nothing was spent, as the
/// bar graph draws a bar for every month.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlySeries {
    year: i32,
    totals: [Amount; 12],
}

impl MonthlySeries {
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Months paired with their totals, January first.
    pub fn iter(&self) -> impl Iterator<Item = (YearMonth, Amount)> + '_ {
        YearMonth::months_of(self.year).zip(self.totals.iter().copied())
    }

    /// The total for `month` (1-12), or `None` for anything else.
    pub fn get(&self, month: u32) -> Option<Amount> {
        match month {
            1..=12 => Some(self.totals[month as usize - 1]),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn total(&self) -> Amount {
        self.totals.iter().sum()
    }

    /// The largest monthly total, used to scale the bars. Zero for a year without
    /// expenses.
    pub fn max(&self) -> Amount {
        self.totals.iter().copied().max().unwrap_or(Amount::ZERO)
    }

    /// True when no month of the year has any spend.
    pub fn is_empty(&self) -> bool {
        self.totals.iter().all(Amount::is_zero)
    }
}

/// Sum of every expense dated within `month`. Zero if there are none.
pub fn total_for_month(records: &[Expense], month: YearMonth) -> Amount {
    trace!("totalling {} records for {}", records.len(), month);
    in_month(records, month).map(Expense::amount).sum()
}

/// Spend per category within `month`.
///
/// Categories without expenses in the month are absent rather than zero. Keys are
/// ordered by name.
pub fn totals_by_category(records: &[Expense], month: YearMonth) -> BTreeMap<String, Amount> {
    trace!("grouping {} records by category for {}", records.len(), month);
    let mut totals = BTreeMap::new();

    for expense in in_month(records, month) {
        *totals
            .entry(expense.category().to_owned())
            .or_insert(Amount::ZERO) += expense.amount();
    }

    totals
}

/// Spend per month of `year`.
pub fn monthly_series(records: &[Expense], year: i32) -> MonthlySeries {
    trace!("building monthly series for {}", year);
    let mut totals = [Amount::ZERO; 12];

    for expense in records.iter().filter(|e| e.date().year() == year) {
        totals[expense.date().month0() as usize] += expense.amount();
    }

    MonthlySeries { year, totals }
}

/// Every expense in `category`, in store order. The match is exact: no case folding
/// and no trimming.
pub fn filter_by_category(records: &[Expense], category: &str) -> Vec<Expense> {
    records
        .iter()
        .filter(|e| e.category() == category)
        .cloned()
        .collect()
}

/// Every expense dated within `month`, in store order.
pub fn filter_by_year_month(records: &[Expense], month: YearMonth) -> Vec<Expense> {
    in_month(records, month).cloned().collect()
}

/// The years a user can pick on the insights screen: every year with at least one
/// expense plus `current_year`, newest first.
pub fn years_with_expenses(records: &[Expense], current_year: i32) -> Vec<i32> {
    let mut years: Vec<i32> = records
        .iter()
        .map(|e| e.date().year())
        .chain(std::iter::once(current_year))
        .collect();

    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

fn in_month(records: &[Expense], month: YearMonth) -> impl Iterator<Item = &Expense> {
    records.iter().filter(move |e| month.contains(e.date()))
}
