// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Shopping,
    Bills,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Other => "Other",
        }
    }

    /// Position within [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}' (expected one of Food, Transportation, Entertainment, Shopping, Bills, Other)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A single recorded spending event, as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Raw form input, before validation.
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub amount: String,
    pub description: String,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
}

impl ExpenseInput {
    /// Prefills the form from an existing record.
    pub fn from_expense(e: &Expense) -> Self {
        Self {
            amount: e.amount.to_string(),
            description: e.description.clone(),
            category: Some(e.category),
            date: Some(e.date),
        }
    }
}

/// The validated, user-editable fields of an expense.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub amount: Decimal,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    pub fn into_expense(self, created_at: DateTime<Utc>) -> Expense {
        Expense {
            id: uuid::Uuid::new_v4().to_string(),
            amount: self.amount,
            description: self.description,
            category: self.category,
            date: self.date,
            created_at,
        }
    }

    /// Replaces every field of `existing` except `id` and `created_at`.
    pub fn apply_to(&self, existing: &Expense) -> Expense {
        Expense {
            id: existing.id.clone(),
            amount: self.amount,
            description: self.description.clone(),
            category: self.category,
            date: self.date,
            created_at: existing.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    pub category: CategoryFilter,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub search_query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthTotal {
    /// Short month name, e.g. `Jan`.
    pub month: String,
    pub year: i32,
    pub month_number: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Per-category subtotals. Every category always has a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryBreakdown {
    amounts: [Decimal; 6],
}

impl CategoryBreakdown {
    pub fn get(&self, category: Category) -> Decimal {
        self.amounts[category.index()]
    }

    pub fn add(&mut self, category: Category, amount: Decimal) {
        self.amounts[category.index()] += amount;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

impl Serialize for CategoryBreakdown {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use rust_decimal::prelude::ToPrimitive;
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (c, amt) in self.iter() {
            map.serialize_entry(c.as_str(), &amt.to_f64().unwrap_or_default())?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spending: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_spending: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_expense: Decimal,
    pub expense_count: usize,
    pub category_breakdown: CategoryBreakdown,
    pub monthly_trend: Vec<MonthTotal>,
}
