// CLI runner for the `soft_focus` library: blur one raster image file into
// another. Arguments are positional and optional, with the reference
// defaults: `soft_focus [input] [output] [radius]`.

use anyhow::{Context, Result};
use soft_focus::core_modules::kernel::DEFAULT_RADIUS;
use soft_focus::pipeline::{BlurConfig, BlurPipeline};
use std::path::Path;

fn main() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .context("logger configuration")?
        .start()
        .context("logger startup")?;

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| String::from("image.png"));
    let output = args.next().unwrap_or_else(|| String::from("post.png"));
    let radius = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid blur radius {raw:?}"))?,
        None => DEFAULT_RADIUS,
    };

    let pipeline = BlurPipeline::new(BlurConfig {
        radius,
        ..BlurConfig::default()
    });

    pipeline.blur_file(Path::new(&input), Path::new(&output))
}
