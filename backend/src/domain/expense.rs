//! Expense entity and its validated constructor.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Validation errors raised by [`NewExpense::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseValidationError {
    /// Title was empty after trimming.
    #[error("title must not be blank")]
    BlankTitle,
    /// Category was empty after trimming.
    #[error("category must not be blank")]
    BlankCategory,
    /// Amount was zero or negative.
    #[error("amount must be positive")]
    NonPositiveAmount,
}

/// A persisted expense. Its owner, for authorization purposes, is the owner
/// of its parent trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Stable identifier.
    pub id: Uuid,
    /// Parent trip; immutable.
    pub trip_id: Uuid,
    /// Short human-readable title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Spent amount, always positive.
    pub amount: Decimal,
    /// Day the expense occurred.
    pub expense_date: NaiveDate,
    /// Free-form category label (e.g. "food", "transport").
    pub category: String,
    /// Set by the store on insert.
    pub created_at: DateTime<Utc>,
    /// Set by the store on every update.
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for recording an expense against a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// Identifier assigned up front.
    pub id: Uuid,
    /// Parent trip.
    pub trip_id: Uuid,
    /// Validated non-blank title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Validated positive amount.
    pub amount: Decimal,
    /// Day the expense occurred.
    pub expense_date: NaiveDate,
    /// Validated non-blank category.
    pub category: String,
}

/// Unvalidated expense fields as received from the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFields {
    /// Expense title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Spent amount.
    pub amount: Decimal,
    /// Day the expense occurred.
    pub expense_date: NaiveDate,
    /// Category label.
    pub category: String,
}

impl NewExpense {
    /// Validate expense fields and bind them to their parent trip.
    pub fn new(trip_id: Uuid, fields: ExpenseFields) -> Result<Self, ExpenseValidationError> {
        if fields.title.trim().is_empty() {
            return Err(ExpenseValidationError::BlankTitle);
        }
        if fields.category.trim().is_empty() {
            return Err(ExpenseValidationError::BlankCategory);
        }
        if fields.amount <= Decimal::ZERO {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        let ExpenseFields {
            title,
            description,
            amount,
            expense_date,
            category,
        } = fields;
        Ok(Self {
            id: Uuid::new_v4(),
            trip_id,
            title,
            description,
            amount,
            expense_date,
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn fields() -> ExpenseFields {
        ExpenseFields {
            title: "Shinkansen tickets".to_owned(),
            description: None,
            amount: dec!(120.50),
            expense_date: NaiveDate::from_ymd_opt(2026, 11, 3).expect("valid date"),
            category: "transport".to_owned(),
        }
    }

    #[test]
    fn binds_expense_to_trip() {
        let trip_id = Uuid::new_v4();
        let expense = NewExpense::new(trip_id, fields()).expect("fields validate");
        assert_eq!(expense.trip_id, trip_id);
        assert_eq!(expense.amount, dec!(120.50));
    }

    #[rstest]
    #[case::blank_title(
        ExpenseFields { title: " ".to_owned(), ..fields() },
        ExpenseValidationError::BlankTitle
    )]
    #[case::blank_category(
        ExpenseFields { category: String::new(), ..fields() },
        ExpenseValidationError::BlankCategory
    )]
    #[case::zero_amount(
        ExpenseFields { amount: dec!(0), ..fields() },
        ExpenseValidationError::NonPositiveAmount
    )]
    #[case::negative_amount(
        ExpenseFields { amount: dec!(-0.01), ..fields() },
        ExpenseValidationError::NonPositiveAmount
    )]
    fn rejects_invalid_fields(
        #[case] fields: ExpenseFields,
        #[case] expected: ExpenseValidationError,
    ) {
        let error = NewExpense::new(Uuid::new_v4(), fields).expect_err("must fail");
        assert_eq!(error, expected);
    }
}
