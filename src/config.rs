use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the PNG files are written into. Created if missing.
    #[serde(default = "OutputConfig::default_dir")]
    pub dir: String,
}

impl OutputConfig {
    fn default_dir() -> String {
        "figures".to_string()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Pixels per layout inch. Figure proportions are fixed; this scales the
    /// raster resolution of every output.
    #[serde(default = "RasterConfig::default_px_per_inch")]
    pub px_per_inch: u32,
}

impl RasterConfig {
    fn default_px_per_inch() -> u32 {
        100
    }

    /// Convert a (width, height) size in inches to backend pixels.
    pub fn pixels(&self, inches: (u32, u32)) -> (u32, u32) {
        (inches.0 * self.px_per_inch, inches.1 * self.px_per_inch)
    }
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            px_per_inch: Self::default_px_per_inch(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub raster: RasterConfig,
}

impl AppConfig {
    /// Load the config from `path`, or write commented defaults there and
    /// return them when the file does not exist. Parse or IO errors fall back
    /// to defaults with a warning; figure generation should not die on a bad
    /// config file.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                let mut commented = String::new();
                for line in text.lines() {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        commented.push('\n');
                    } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                        commented.push_str(line);
                        commented.push('\n');
                    } else {
                        commented.push_str("# ");
                        commented.push_str(line);
                        commented.push('\n');
                    }
                }
                if let Err(err) = fs::write(path_obj, commented) {
                    eprintln!("Failed to write default config to {path}: {err}");
                }
            }
            Err(_) => {
                eprintln!("Failed to serialize default config; continuing with defaults");
            }
        }
        default_cfg
    }
}
