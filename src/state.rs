// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Application state: the in-memory expense list, the active filters and
//! the store they are persisted to.
//!
//! Mutations are pure reducers over the list. The next list is written to
//! the store first and only replaces the in-memory one once that write
//! succeeds, so a failed write leaves the book exactly as it was.

use crate::filter::filter_expenses;
use crate::models::{Expense, ExpenseDraft, ExpenseInput, FilterSpec, Summary};
use crate::store::{ExpenseStore, StorageError};
use crate::summary::summarize;
use crate::validate::{ValidationReport, ValidationRules};
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("invalid expense: {0}")]
    Invalid(#[from] ValidationReport),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("no expense with id '{0}'")]
    NotFound(String),
}

/// New records go to the front.
pub fn with_added(expenses: &[Expense], added: Vec<Expense>) -> Vec<Expense> {
    let mut next = added;
    next.extend_from_slice(expenses);
    next
}

/// `None` when no record has `id`.
pub fn with_replaced(expenses: &[Expense], id: &str, draft: &ExpenseDraft) -> Option<Vec<Expense>> {
    let pos = expenses.iter().position(|e| e.id == id)?;
    let mut next = expenses.to_vec();
    next[pos] = draft.apply_to(&expenses[pos]);
    Some(next)
}

pub struct ExpenseBook<S: ExpenseStore> {
    store: S,
    expenses: Vec<Expense>,
    filters: FilterSpec,
    rules: ValidationRules,
}

impl<S: ExpenseStore> ExpenseBook<S> {
    /// Loads the stored list. An unreadable payload is an error here so
    /// that no later write can replace it.
    pub fn open(store: S) -> Result<Self, StorageError> {
        let expenses = store.try_read_all()?;
        Ok(Self {
            store,
            expenses,
            filters: FilterSpec::default(),
            rules: ValidationRules::default(),
        })
    }

    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FilterSpec) {
        self.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterSpec::default();
    }

    pub fn filtered(&self) -> Vec<&Expense> {
        filter_expenses(&self.expenses, &self.filters)
    }

    /// Always over the full list, regardless of filters.
    pub fn summary(&self, today: NaiveDate) -> Summary {
        summarize(&self.expenses, today)
    }

    /// The first `n` records in stored (newest-first) order.
    pub fn recent(&self, n: usize) -> &[Expense] {
        &self.expenses[..n.min(self.expenses.len())]
    }

    fn commit(&mut self, next: Vec<Expense>) -> Result<(), StorageError> {
        self.store.write_all(&next)?;
        self.expenses = next;
        Ok(())
    }

    pub fn add(&mut self, input: &ExpenseInput, now: DateTime<Utc>) -> Result<Expense, BookError> {
        let expense = input.to_draft(&self.rules)?.into_expense(now);
        let next = with_added(&self.expenses, vec![expense.clone()]);
        self.commit(next)?;
        debug!(id = %expense.id, amount = %expense.amount, "added expense");
        Ok(expense)
    }

    /// Adds every input or none: all rows are validated before one write.
    /// The returned error carries the zero-based index of the first bad row.
    pub fn add_many(
        &mut self,
        inputs: &[ExpenseInput],
        now: DateTime<Utc>,
    ) -> Result<Vec<Expense>, (usize, BookError)> {
        let mut added = Vec::with_capacity(inputs.len());
        for (i, input) in inputs.iter().enumerate() {
            let draft = input
                .to_draft(&self.rules)
                .map_err(|e| (i, BookError::from(e)))?;
            added.push(draft.into_expense(now));
        }
        let next = with_added(&self.expenses, added.clone());
        self.commit(next)
            .map_err(|e| (inputs.len(), BookError::from(e)))?;
        debug!(count = added.len(), "added expenses");
        Ok(added)
    }

    pub fn update(&mut self, id: &str, input: &ExpenseInput) -> Result<Expense, BookError> {
        let draft = input.to_draft(&self.rules)?;
        let next = with_replaced(&self.expenses, id, &draft)
            .ok_or_else(|| BookError::NotFound(id.to_string()))?;
        self.commit(next)?;
        debug!(id, "updated expense");
        self.get(id)
            .cloned()
            .ok_or_else(|| BookError::NotFound(id.to_string()))
    }

    /// Returns whether a record was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool, BookError> {
        let before = self.expenses.len();
        let remaining = self.store.remove_by_id(id)?;
        let removed = remaining.len() != before;
        debug!(id, removed, "delete expense");
        self.expenses = remaining;
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<(), BookError> {
        self.store.clear_all()?;
        self.expenses.clear();
        Ok(())
    }
}
