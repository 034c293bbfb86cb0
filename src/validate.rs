// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{ExpenseDraft, ExpenseInput};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
pub const MAX_DESCRIPTION_CHARS: usize = 200;
pub const MAX_FRACTION_DIGITS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Amount,
    Description,
    Category,
    Date,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Amount => "amount",
            Field::Description => "description",
            Field::Category => "category",
            Field::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid amount greater than 0")]
    InvalidAmount,
    #[error("Amount seems too large (max 1,000,000)")]
    AmountTooLarge,
    #[error("Please enter a description")]
    MissingDescription,
    #[error("Description is too long (max 200 characters)")]
    DescriptionTooLong,
    #[error("Please select a category")]
    MissingCategory,
    #[error("Please select a date")]
    MissingDate,
    #[error("Date {0} is in the future")]
    FutureDate(NaiveDate),
}

/// Optional rules layered on top of the field checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationRules {
    /// Dates after this one are rejected.
    pub latest_date: Option<NaiveDate>,
}

impl ValidationRules {
    pub fn up_to(today: NaiveDate) -> Self {
        Self {
            latest_date: Some(today),
        }
    }
}

/// Per-field validation outcome. At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn errors(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(f, e)| (*f, e))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn reject(&mut self, field: Field, err: ValidationError) {
        self.errors.entry(field).or_insert(err);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, err) in self.errors() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, err)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Parses a user-entered amount. Only plain decimals (`[+-]digits[.digits]`)
/// with at most two significant fractional digits are accepted, so every
/// amount survives the f64 persisted form unchanged.
pub fn parse_amount(text: &str) -> Result<Decimal, ValidationError> {
    let t = text.trim();
    let (negative, unsigned) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let plain = !(int_part.is_empty() && frac_part.is_empty())
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit());
    if !plain || negative {
        return Err(ValidationError::InvalidAmount);
    }
    let frac = frac_part.trim_end_matches('0');
    if frac.len() > MAX_FRACTION_DIGITS {
        return Err(ValidationError::InvalidAmount);
    }

    let int = if int_part.is_empty() { "0" } else { int_part };
    let canonical = if frac.is_empty() {
        int.to_string()
    } else {
        format!("{}.{}", int, frac)
    };
    // plain digits that still fail to parse overflow Decimal
    let amount = canonical
        .parse::<Decimal>()
        .map_err(|_| ValidationError::AmountTooLarge)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount);
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge);
    }
    Ok(amount.normalize())
}

pub fn validate(input: &ExpenseInput, rules: &ValidationRules) -> ValidationReport {
    let mut report = ValidationReport::default();

    if let Err(e) = parse_amount(&input.amount) {
        report.reject(Field::Amount, e);
    }

    if input.description.trim().is_empty() {
        report.reject(Field::Description, ValidationError::MissingDescription);
    } else if input.description.chars().count() > MAX_DESCRIPTION_CHARS {
        report.reject(Field::Description, ValidationError::DescriptionTooLong);
    }

    if input.category.is_none() {
        report.reject(Field::Category, ValidationError::MissingCategory);
    }

    match (input.date, rules.latest_date) {
        (None, _) => report.reject(Field::Date, ValidationError::MissingDate),
        (Some(d), Some(latest)) if d > latest => {
            report.reject(Field::Date, ValidationError::FutureDate(d))
        }
        _ => {}
    }

    report
}

impl ExpenseInput {
    /// Validates the input and, when every field passes, returns the
    /// normalized draft (trimmed description, normalized amount).
    pub fn to_draft(&self, rules: &ValidationRules) -> Result<ExpenseDraft, ValidationReport> {
        let report = validate(self, rules);
        match (
            report.is_valid(),
            parse_amount(&self.amount),
            self.category,
            self.date,
        ) {
            (true, Ok(amount), Some(category), Some(date)) => Ok(ExpenseDraft {
                amount,
                description: self.description.trim().to_string(),
                category,
                date,
            }),
            _ => Err(report),
        }
    }
}
