use crate::expense::{Expense, ExpenseError, ExpenseId, ExpensePatch, NewExpense};
use log::{debug, warn};
use thiserror::Error;

/// The single owner of every recorded expense.
///
/// Records are kept in insertion order. Nothing here sorts or groups them; the query
/// functions derive whatever view is needed from [`ExpenseStore::records`].
#[derive(Clone, Debug, Default)]
pub struct ExpenseStore {
    records: Vec<Expense>,
    // Bumped on every successful mutation. Hosts that memoise query results can key
    // them on this.
    version: u64,
}

#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("no expense with id {0}")]
    NotFound(ExpenseId),
    #[error("an expense with id {0} already exists")]
    DuplicateId(ExpenseId),
    #[error("invalid expense")]
    Invalid(#[from] ExpenseError),
}

impl ExpenseStore {
    pub fn new() -> Self {
        ExpenseStore::default()
    }

    /// Adds an expense, generating an id for it unless one was supplied.
    pub fn add(&mut self, new: NewExpense) -> Result<Expense, StoreError> {
        if let Some(id) = new.id() {
            if self.position(id).is_some() {
                warn!("refusing to add expense with duplicate id {}", id);
                return Err(StoreError::DuplicateId(id));
            }
        }

        let expense = new.into_expense()?;
        debug!(
            "adding expense {} of {} in {}",
            expense.id(),
            expense.amount(),
            expense.category()
        );

        self.records.push(expense.clone());
        self.version += 1;
        Ok(expense)
    }

    /// Replaces the fields set in `patch` on the expense with the given id. The id
    /// itself never changes.
    pub fn update(&mut self, id: ExpenseId, patch: ExpensePatch) -> Result<Expense, StoreError> {
        let index = match self.position(id) {
            Some(i) => i,
            None => {
                warn!("cannot update expense {}: not found", id);
                return Err(StoreError::NotFound(id));
            }
        };

        let expense = &mut self.records[index];
        patch.apply(expense)?;
        debug!("updated expense {}", id);

        let updated = expense.clone();
        self.version += 1;
        Ok(updated)
    }

    /// Removes and returns the expense with the given id, if there is one.
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.position(id)?;
        debug!("removing expense {}", id);
        self.version += 1;
        Some(self.records.remove(index))
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.records.iter().find(|e| e.id() == id)
    }

    /// A snapshot of every expense. Changing it has no effect on the store.
    pub fn list(&self) -> Vec<Expense> {
        self.records.clone()
    }

    /// Borrows every expense, for passing to the query functions.
    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    fn position(&self, id: ExpenseId) -> Option<usize> {
        self.records.iter().position(|e| e.id() == id)
    }
}
