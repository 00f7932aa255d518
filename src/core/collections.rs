use crate::domain::ports::Section;
use crate::utils::error::Result;
use std::collections::{BTreeMap, HashSet};
use std::io::Write;

/// Growable vector, string-keyed map, set and tuple. The map is a
/// `BTreeMap` of JSON values so both the one-line dump and the per-entry
/// listing come out in a stable key order.
pub struct CollectionsSection;

impl Section for CollectionsSection {
    fn title(&self) -> &str {
        "Collections"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "-- vector --")?;
        let mut items = vec![1, 2, 3, 4, 5];
        items.push(6);
        items.extend([7, 8]);
        writeln!(out, "Vector: {:?}", items)?;

        writeln!(out, "-- map --")?;
        let mut profile: BTreeMap<String, serde_json::Value> = BTreeMap::new();
        profile.insert("name".to_string(), serde_json::json!("John"));
        profile.insert("age".to_string(), serde_json::json!(30));
        profile.insert("city".to_string(), serde_json::json!("New York"));
        profile.insert("country".to_string(), serde_json::json!("USA"));
        writeln!(out, "Map: {}", serde_json::to_string(&profile)?)?;
        for (key, value) in &profile {
            writeln!(out, "  {}: {}", key, value)?;
        }

        writeln!(out, "-- set --")?;
        let mut seen: HashSet<i64> = [1, 2, 3, 4, 5].into_iter().collect();
        seen.insert(6);
        let mut sorted: Vec<i64> = seen.into_iter().collect();
        sorted.sort_unstable();
        writeln!(out, "Set: {:?}", sorted)?;

        writeln!(out, "-- tuple --")?;
        let triple = (1, 2, 3);
        writeln!(out, "Tuple: {:?}", triple)?;

        Ok(())
    }
}
