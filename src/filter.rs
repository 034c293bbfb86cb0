// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategoryFilter, Expense, FilterSpec};

impl FilterSpec {
    /// True when `e` passes every criterion of this filter.
    pub fn matches(&self, e: &Expense) -> bool {
        if let CategoryFilter::Only(c) = self.category {
            if e.category != c {
                return false;
            }
        }

        let in_range = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= e.date && e.date <= end,
            (Some(start), None) => e.date >= start,
            (None, Some(end)) => e.date <= end,
            (None, None) => true,
        };
        if !in_range {
            return false;
        }

        if !self.search_query.is_empty() {
            let q = self.search_query.to_lowercase();
            let hit = e.description.to_lowercase().contains(&q)
                || e.category.as_str().to_lowercase().contains(&q)
                || e.amount.normalize().to_string().contains(&q);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Returns the expenses matching `spec`, in their original order.
pub fn filter_expenses<'a>(expenses: &'a [Expense], spec: &FilterSpec) -> Vec<&'a Expense> {
    expenses.iter().filter(|e| spec.matches(e)).collect()
}
