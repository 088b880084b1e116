use crate::{expense::Expense, query, YearMonth};

/// Where the user is in the app, with everything the destination screen needs.
///
/// Parameters travel as typed values, so a detail screen can never receive a month it
/// has to parse or a category it has to decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Main,
    CategoryDetail { category: String },
    MonthlyTransactions(YearMonth),
}

impl Route {
    pub fn category<S: Into<String>>(category: S) -> Self {
        Route::CategoryDetail {
            category: category.into(),
        }
    }

    /// The expenses a detail screen lists, or `None` for the main screen which builds
    /// its own views.
    pub fn records(&self, records: &[Expense]) -> Option<Vec<Expense>> {
        match self {
            Route::Main => None,
            Route::CategoryDetail { category } => {
                Some(query::filter_by_category(records, category))
            }
            Route::MonthlyTransactions(month) => {
                Some(query::filter_by_year_month(records, *month))
            }
        }
    }

    pub fn title(&self) -> String {
        match self {
            Route::Main => "Expenses".to_string(),
            Route::CategoryDetail { category } => format!("{} Expenses", category),
            Route::MonthlyTransactions(month) => format!("{} Expenses", month),
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Main
    }
}
