use crate::core::collections::CollectionsSection;
use crate::core::greeting::GreetingSection;
use crate::core::loops::LoopsSection;
use crate::core::numbers::NumbersSection;
use crate::core::recovery::RecoverySection;
use crate::core::scratch::ScratchSection;
use crate::domain::model::Person;
use crate::domain::ports::{ConfigProvider, Section, Storage};
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;
use crate::{APP_NAME, VERSION};
use chrono::Local;
use std::io::Write;

/// Runs the demonstration sections top-to-bottom, bracketed by start and
/// completion banners.
pub struct TourEngine {
    sections: Vec<Box<dyn Section>>,
    monitor: RunMonitor,
}

impl TourEngine {
    pub fn new(sections: Vec<Box<dyn Section>>) -> Self {
        Self::new_with_monitoring(sections, false)
    }

    pub fn new_with_monitoring(sections: Vec<Box<dyn Section>>, monitor_enabled: bool) -> Self {
        Self {
            sections,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    /// The fixed tour: greeting, numbers, loops, collections, error
    /// handling, scratch file.
    pub fn from_config<C, S>(config: &C, storage: S, monitor_enabled: bool) -> Self
    where
        C: ConfigProvider,
        S: Storage + 'static,
    {
        let person = Person::new(config.subject_name(), config.subject_age());
        let sections: Vec<Box<dyn Section>> = vec![
            Box::new(GreetingSection::new(person)),
            Box::new(NumbersSection::new(
                config.sample_numbers().to_vec(),
                config.classify_samples().to_vec(),
            )),
            Box::new(LoopsSection),
            Box::new(CollectionsSection),
            Box::new(RecoverySection),
            Box::new(ScratchSection::new(storage, config.scratch_file())),
        ];

        Self::new_with_monitoring(sections, monitor_enabled)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "=== {} v{} ===", APP_NAME, VERSION)?;
        writeln!(
            out,
            "Started at: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;

        for section in &self.sections {
            tracing::info!("Running section: {}", section.title());
            writeln!(out)?;
            writeln!(out, "=== {} ===", section.title())?;
            section.run(out)?;
            self.monitor.log_stats(section.title());
        }

        self.monitor.log_final_stats();
        writeln!(out)?;
        writeln!(
            out,
            "=== Completed at: {} ===",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        Ok(())
    }
}
