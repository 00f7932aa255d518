use crate::domain::model::{Parity, Sign};

/// Sign-and-parity sentence for an integer. Total over all inputs.
pub fn describe(value: i64) -> String {
    format!("{} is {} and {}", value, Sign::of(value), Parity::of(value))
}
