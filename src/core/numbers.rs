use crate::core::{arith, classify};
use crate::domain::ports::Section;
use crate::utils::error::Result;
use std::io::Write;

pub struct NumbersSection {
    numbers: Vec<i64>,
    classify_samples: Vec<i64>,
}

impl NumbersSection {
    pub fn new(numbers: Vec<i64>, classify_samples: Vec<i64>) -> Self {
        Self {
            numbers,
            classify_samples,
        }
    }
}

impl Section for NumbersSection {
    fn title(&self) -> &str {
        "Numbers"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Add 5 + 3 = {}", arith::add(5, 3))?;

        let stats = arith::summarize(&self.numbers);
        writeln!(out, "List stats: {}", serde_json::to_string(&stats)?)?;

        for &value in &self.classify_samples {
            writeln!(out, "{}", classify::describe(value))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_output() {
        let section = NumbersSection::new(vec![1, 2, 3, 4, 5], vec![10, -5, 0]);
        let mut out: Vec<u8> = Vec::new();
        section.run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Add 5 + 3 = 8"));
        assert!(text.contains(r#"List stats: {"total":15,"average":3.0,"max":5,"min":1}"#));
        assert!(text.contains("10 is positive and even"));
        assert!(text.contains("-5 is negative and odd"));
        assert!(text.contains("0 is zero and even"));
    }

    #[test]
    fn test_numbers_empty_sample_list() {
        let section = NumbersSection::new(vec![], vec![]);
        let mut out: Vec<u8> = Vec::new();
        section.run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(r#"{"total":0,"average":0.0,"max":null,"min":null}"#));
    }
}
