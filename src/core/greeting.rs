use crate::domain::model::Person;
use crate::domain::ports::Section;
use crate::utils::error::Result;
use std::io::Write;

pub struct GreetingSection {
    person: Person,
}

impl GreetingSection {
    pub fn new(person: Person) -> Self {
        Self { person }
    }
}

impl Section for GreetingSection {
    fn title(&self) -> &str {
        "Greeting"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.person.greet())?;
        writeln!(out, "Is adult? {}", self.person.is_adult())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_output() {
        let section = GreetingSection::new(Person::new("Alice", 25));
        let mut out: Vec<u8> = Vec::new();
        section.run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Hello, my name is Alice and I'm 25 years old.\nIs adult? true\n"
        );
    }

    #[test]
    fn test_greeting_minor() {
        let section = GreetingSection::new(Person::new("Eve", 10));
        let mut out: Vec<u8> = Vec::new();
        section.run(&mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().contains("Is adult? false"));
    }
}
