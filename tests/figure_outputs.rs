use std::fs;
use std::path::PathBuf;

use paperfig::config::{AppConfig, OutputConfig, RasterConfig};
use paperfig::figures::{self, handshake};

fn unique_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "paperfig_output_test_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    p
}

fn test_config(dir: &PathBuf) -> AppConfig {
    AppConfig {
        output: OutputConfig {
            dir: dir.to_string_lossy().to_string(),
        },
        // small rasters keep the test quick; proportions are unchanged
        raster: RasterConfig { px_per_inch: 50 },
    }
}

#[test]
fn generate_all_writes_one_file_per_figure() {
    let dir = unique_dir("all");
    let cfg = test_config(&dir);

    let paths = figures::generate_all(&cfg).expect("figure generation should succeed");
    assert_eq!(paths.len(), 4);

    let expected = [
        "performance_comparison.png",
        "timing_analysis.png",
        "network_topology.png",
        "statistical_analysis.png",
    ];
    for (path, name) in paths.iter().zip(expected) {
        assert_eq!(path, &dir.join(name));
        let meta = fs::metadata(path).expect("figure file should exist");
        assert!(meta.len() > 0, "{name} should not be empty");
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn generate_all_overwrites_existing_files() {
    let dir = unique_dir("overwrite");
    fs::create_dir_all(&dir).unwrap();
    let stale = dir.join("performance_comparison.png");
    fs::write(&stale, b"stale").unwrap();

    let cfg = test_config(&dir);
    figures::generate_all(&cfg).expect("figure generation should succeed");

    let meta = fs::metadata(&stale).unwrap();
    assert!(meta.len() > 5, "stale placeholder should be overwritten");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn generate_all_fails_when_out_dir_is_a_file() {
    let dir = unique_dir("blocked");
    // occupy the output path with a regular file so create_dir_all fails
    fs::write(&dir, b"not a directory").unwrap();

    let cfg = test_config(&dir);
    let result = figures::generate_all(&cfg);
    assert!(result.is_err(), "unusable output dir must surface an error");

    let _ = fs::remove_file(&dir);
}

#[test]
fn only_filter_renders_just_the_named_figure() {
    let dir = unique_dir("only");
    let cfg = test_config(&dir);

    let paths = figures::generate_selected(&cfg, &["network".to_string()])
        .expect("selected figure generation should succeed");
    assert_eq!(paths, vec![dir.join("network_topology.png")]);
    assert!(paths[0].exists());
    assert!(!dir.join("performance_comparison.png").exists());
    assert!(!dir.join("timing_analysis.png").exists());
    assert!(!dir.join("statistical_analysis.png").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unknown_figure_key_errors_before_writing() {
    let dir = unique_dir("unknown");
    let cfg = test_config(&dir);

    let result = figures::generate_selected(&cfg, &["nonsense".to_string()]);
    assert!(result.is_err());
    assert!(!dir.exists(), "nothing should be created for a bad key");
}

#[test]
fn handshake_diagram_writes_its_png() {
    let dir = unique_dir("handshake");
    fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join(handshake::FILE_NAME);

    let raster = RasterConfig { px_per_inch: 50 };
    handshake::render(&out_path, raster.pixels(handshake::SIZE_IN))
        .expect("handshake rendering should succeed");

    let meta = fs::metadata(&out_path).expect("diagram file should exist");
    assert!(meta.len() > 0);

    let _ = fs::remove_dir_all(&dir);
}
