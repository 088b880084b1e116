use crate::Amount;
use chrono::{Local, NaiveDate};
use std::{fmt, str::FromStr};
use thiserror::Error;
use uuid::Uuid;

/// Identifies an expense for its entire lifetime in a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    pub fn new() -> Self {
        ExpenseId(Uuid::new_v4())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        ExpenseId::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ExpenseId {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(ExpenseId)
            .map_err(|_| ExpenseError::InvalidId(s.into()))
    }
}

/// A single recorded expense.
///
/// Only the store hands these out, so every `Expense` has passed validation and its
/// `id` is unique within the store that created it.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    id: ExpenseId,
    amount: Amount,
    category: String,
    remarks: Option<String>,
    date: NaiveDate,
}

#[derive(Error, Debug, PartialEq)]
pub enum ExpenseError {
    #[error("an expense must have a category")]
    EmptyCategory,
    #[error("'{0}' is not a valid expense id")]
    InvalidId(String),
}

impl Expense {
    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// An expense that has not been added to a store yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewExpense {
    id: Option<ExpenseId>,
    amount: Amount,
    category: String,
    remarks: Option<String>,
    date: NaiveDate,
}

impl NewExpense {
    pub fn new<S: Into<String>>(amount: Amount, category: S, date: NaiveDate) -> Self {
        NewExpense {
            id: None,
            amount,
            category: category.into(),
            remarks: None,
            date,
        }
    }

    /// An expense dated with today's local date, as the add expense form does.
    pub fn today<S: Into<String>>(amount: Amount, category: S) -> Self {
        NewExpense::new(amount, category, Local::now().date_naive())
    }

    /// Keep a known id rather than having the store generate one.
    pub fn with_id(mut self, id: ExpenseId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_remarks<S: Into<String>>(mut self, remarks: S) -> Self {
        self.remarks = normalise_remarks(Some(remarks.into()));
        self
    }

    pub fn id(&self) -> Option<ExpenseId> {
        self.id
    }

    pub(crate) fn into_expense(self) -> Result<Expense, ExpenseError> {
        if self.category.is_empty() {
            return Err(ExpenseError::EmptyCategory);
        }

        Ok(Expense {
            id: self.id.unwrap_or_default(),
            amount: self.amount,
            category: self.category,
            remarks: self.remarks,
            date: self.date,
        })
    }
}

/// Replacement values for an existing expense. Fields left unset keep their value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpensePatch {
    amount: Option<Amount>,
    category: Option<String>,
    // `Some(None)` clears the remarks
    remarks: Option<Option<String>>,
    date: Option<NaiveDate>,
}

impl ExpensePatch {
    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn remarks<S: Into<String>>(mut self, remarks: S) -> Self {
        self.remarks = Some(normalise_remarks(Some(remarks.into())));
        self
    }

    pub fn clear_remarks(mut self) -> Self {
        self.remarks = Some(None);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == ExpensePatch::default()
    }

    /// Validates the whole patch before touching `expense`, so a rejected patch
    /// leaves it as it was.
    pub(crate) fn apply(self, expense: &mut Expense) -> Result<(), ExpenseError> {
        if let Some(category) = &self.category {
            if category.is_empty() {
                return Err(ExpenseError::EmptyCategory);
            }
        }

        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(category) = self.category {
            expense.category = category;
        }
        if let Some(remarks) = self.remarks {
            expense.remarks = remarks;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }

        Ok(())
    }
}

// Blank remarks are the same as no remarks
fn normalise_remarks(remarks: Option<String>) -> Option<String> {
    remarks.filter(|r| !r.trim().is_empty())
}
