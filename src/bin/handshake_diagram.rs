// Renders the LSC handshake sequence diagram. No flags, no recovery: any
// failure propagates out of main and exits non-zero.

use std::error::Error;
use std::fs::create_dir_all;
use std::path::Path;

use paperfig::config::AppConfig;
use paperfig::figures::handshake;

fn main() -> Result<(), Box<dyn Error>> {
    let cfg = AppConfig::default();
    let out_dir = Path::new(&cfg.output.dir);
    create_dir_all(out_dir)?;

    let out_path = out_dir.join(handshake::FILE_NAME);
    handshake::render(&out_path, cfg.raster.pixels(handshake::SIZE_IN))?;

    println!("Saved {}", out_path.display());
    Ok(())
}
