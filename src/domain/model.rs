use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn greet(&self) -> String {
        format!(
            "Hello, my name is {} and I'm {} years old.",
            self.name, self.age
        )
    }

    pub fn is_adult(&self) -> bool {
        self.age >= 18
    }
}

/// Summary of an integer sequence. `max`/`min` are `None` for an empty
/// input; `total` and `average` fall back to zero instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListStats {
    pub total: i64,
    pub average: f64,
    pub max: Option<i64>,
    pub min: Option<i64>,
}

impl ListStats {
    pub fn empty() -> Self {
        Self {
            total: 0,
            average: 0.0,
            max: None,
            min: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    pub fn of(value: i64) -> Self {
        if value > 0 {
            Sign::Positive
        } else if value < 0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Sign::Positive => "positive",
            Sign::Negative => "negative",
            Sign::Zero => "zero",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(value: i64) -> Self {
        if value % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        };
        f.write_str(text)
    }
}
