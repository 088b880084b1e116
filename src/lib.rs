mod amount;
mod category;
mod dashboard;
mod expense;
mod month;
pub mod query;
mod route;
mod store;

pub use amount::{Amount, AmountError};
pub use category::{CategoryFilter, CategoryList};
pub use dashboard::{DashboardSummary, YearOverview};
pub use expense::{Expense, ExpenseError, ExpenseId, ExpensePatch, NewExpense};
pub use month::{MonthError, YearMonth};
pub use query::MonthlySeries;
pub use route::Route;
pub use store::{ExpenseStore, StoreError};

// This represents the number of decimal places that an amount can validly express.
// @todo Currencies with 0 or 3 minor units (ISO 4217) need this to be configurable.
const CURRENCY_PRECISION: u32 = 2;
