use syntax_primer::config::file::FileConfig;
use syntax_primer::{LocalStorage, TourEngine, TourSettings, APP_NAME};
use tempfile::TempDir;

#[test]
fn full_tour_runs_and_cleans_up() {
    let temp_dir = TempDir::new().unwrap();
    let settings = TourSettings::default();
    let storage = LocalStorage::new(temp_dir.path());
    let engine = TourEngine::from_config(&settings, storage, false);
    assert_eq!(engine.section_count(), 6);

    let mut out: Vec<u8> = Vec::new();
    engine.run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    // banners
    assert!(text.contains(&format!("=== {} v", APP_NAME)));
    assert!(text.contains("Started at:"));
    assert!(text.contains("=== Completed at:"));

    // greeting
    assert!(text.contains("=== Greeting ==="));
    assert!(text.contains("Hello, my name is Alice and I'm 25 years old."));
    assert!(text.contains("Is adult? true"));

    // numbers
    assert!(text.contains("=== Numbers ==="));
    assert!(text.contains("Add 5 + 3 = 8"));
    assert!(text.contains(r#"List stats: {"total":15,"average":3.0,"max":5,"min":1}"#));
    assert!(text.contains("10 is positive and even"));
    assert!(text.contains("-5 is negative and odd"));
    assert!(text.contains("0 is zero and even"));

    // loops
    assert!(text.contains("=== Loops ==="));
    assert!(text.contains("Count: 4"));
    assert!(text.contains("Squares: [0, 1, 4, 9, 16]"));
    assert!(text.contains("Even squares: [0, 4, 16, 36, 64]"));

    // collections
    assert!(text.contains("=== Collections ==="));
    assert!(text.contains("Vector: [1, 2, 3, 4, 5, 6, 7, 8]"));
    assert!(text.contains("Set: [1, 2, 3, 4, 5, 6]"));
    assert!(text.contains("Tuple: (1, 2, 3)"));

    // error handling stays local to its section
    assert!(text.contains("=== Error handling ==="));
    assert!(text.contains("Division result: 5"));
    assert!(text.contains("Error: 10 / 0 is not defined"));
    assert!(text.contains("Division checks done"));
    assert!(text.contains("Successfully parsed: 123"));
    assert!(text.contains("Invalid number \"abc\""));

    // scratch file round-trip, then cleanup
    assert!(text.contains("=== Scratch file ==="));
    assert!(text.contains("File content:\nHello, World!\nThis is a test file.\n"));
    assert!(text.contains("Line: Hello, World!"));
    assert!(text.contains("Line: This is a test file."));
    assert!(text.contains("Removed temp_example.txt"));
    assert!(!temp_dir.path().join("temp_example.txt").exists());
}

#[test]
fn tour_honors_file_overrides() {
    let temp_dir = TempDir::new().unwrap();

    let mut settings = TourSettings::default();
    settings.apply(
        FileConfig::from_toml(
            r#"
            [subject]
            name = "Bob"
            age = 17

            [samples]
            numbers = [2, 4, 6]
            classify = [7]

            [scratch]
            filename = "scribble.txt"
            "#,
        )
        .unwrap(),
    );

    let storage = LocalStorage::new(temp_dir.path());
    let engine = TourEngine::from_config(&settings, storage, false);

    let mut out: Vec<u8> = Vec::new();
    engine.run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Hello, my name is Bob and I'm 17 years old."));
    assert!(text.contains("Is adult? false"));
    assert!(text.contains(r#"List stats: {"total":12,"average":4.0,"max":6,"min":2}"#));
    assert!(text.contains("7 is positive and odd"));
    assert!(text.contains("Removed scribble.txt"));
    assert!(!temp_dir.path().join("scribble.txt").exists());
}

#[test]
fn scratch_file_exists_only_during_its_section() {
    let temp_dir = TempDir::new().unwrap();
    let settings = TourSettings::default();
    let scratch_path = temp_dir.path().join(&settings.scratch_file);
    assert!(!scratch_path.exists());

    let storage = LocalStorage::new(temp_dir.path());
    let engine = TourEngine::from_config(&settings, storage, false);
    let mut out: Vec<u8> = Vec::new();
    engine.run(&mut out).unwrap();

    assert!(!scratch_path.exists());
    // nothing else may be left behind either
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
