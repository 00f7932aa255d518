use crate::domain::ports::Section;
use crate::utils::error::Result;
use std::io::Write;

/// Counted ranges, iteration over a vector, `enumerate`, a `while` loop and
/// iterator pipelines, each with fixed output.
pub struct LoopsSection;

impl Section for LoopsSection {
    fn title(&self) -> &str {
        "Loops"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "-- counted range --")?;
        for i in 0..5 {
            writeln!(out, "Count: {}", i)?;
        }

        writeln!(out, "-- vector iteration --")?;
        let fruits = vec!["apple", "banana", "cherry"];
        for fruit in &fruits {
            writeln!(out, "Fruit: {}", fruit)?;
        }

        writeln!(out, "-- enumerate --")?;
        for (index, fruit) in fruits.iter().enumerate() {
            writeln!(out, "{}: {}", index, fruit)?;
        }

        writeln!(out, "-- while --")?;
        let mut count = 0;
        while count < 3 {
            writeln!(out, "While count: {}", count)?;
            count += 1;
        }

        writeln!(out, "-- iterator pipelines --")?;
        let squares: Vec<i64> = (0..5).map(|x| x * x).collect();
        writeln!(out, "Squares: {:?}", squares)?;

        let even_squares: Vec<i64> = (0..10).filter(|x| x % 2 == 0).map(|x| x * x).collect();
        writeln!(out, "Even squares: {:?}", even_squares)?;

        Ok(())
    }
}
