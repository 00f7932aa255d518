use crate::domain::ports::{Section, Storage};
use crate::utils::error::Result;
use std::io::Write;

pub const SCRATCH_CONTENT: &str = "Hello, World!\nThis is a test file.\n";

/// Write two lines to the scratch file, read the file back whole, read it
/// again line-by-line, then remove it. The file only exists for the
/// duration of this section's run.
pub struct ScratchSection<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> ScratchSection<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

impl<S: Storage> Section for ScratchSection<S> {
    fn title(&self) -> &str {
        "Scratch file"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        tracing::debug!("Writing scratch file {}", self.path);
        self.storage
            .write_file(&self.path, SCRATCH_CONTENT.as_bytes())?;

        let content = self.storage.read_to_string(&self.path)?;
        writeln!(out, "File content:")?;
        write!(out, "{}", content)?;

        let reread = self.storage.read_to_string(&self.path)?;
        for line in reread.lines() {
            writeln!(out, "Line: {}", line)?;
        }

        if self.storage.exists(&self.path) {
            self.storage.remove_file(&self.path)?;
            writeln!(out, "Removed {}", self.path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::{Error, ErrorKind};
    use std::sync::Mutex;

    struct MemoryStorage {
        files: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl MemoryStorage {
        fn new() -> Self {
            Self {
                files: Mutex::new(HashMap::new()),
            }
        }
    }

    impl Storage for MemoryStorage {
        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().unwrap();
            files.get(path).cloned().ok_or_else(|| {
                Error::new(ErrorKind::NotFound, format!("File not found: {}", path)).into()
            })
        }

        fn remove_file(&self, path: &str) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            files.remove(path).ok_or_else(|| {
                Error::new(ErrorKind::NotFound, format!("File not found: {}", path))
            })?;
            Ok(())
        }

        fn exists(&self, path: &str) -> bool {
            let files = self.files.lock().unwrap();
            files.contains_key(path)
        }
    }

    #[test]
    fn test_round_trip_and_cleanup() {
        let section = ScratchSection::new(MemoryStorage::new(), "temp_example.txt");
        let mut out: Vec<u8> = Vec::new();
        section.run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("File content:\nHello, World!\nThis is a test file.\n"));
        assert!(text.contains("Line: Hello, World!"));
        assert!(text.contains("Line: This is a test file."));
        assert!(text.contains("Removed temp_example.txt"));

        // the section removes its own file
        assert!(!section.storage.exists("temp_example.txt"));
    }

    #[test]
    fn test_written_bytes_match_read_bytes() {
        let storage = MemoryStorage::new();
        storage
            .write_file("temp_example.txt", SCRATCH_CONTENT.as_bytes())
            .unwrap();
        assert_eq!(
            storage.read_to_string("temp_example.txt").unwrap(),
            SCRATCH_CONTENT
        );
    }

    #[test]
    fn test_missing_file_read_is_an_error() {
        let storage = MemoryStorage::new();
        assert!(storage.read_file("missing.txt").is_err());
        assert!(!storage.exists("missing.txt"));
    }
}
