// THEORY:
// The `pipeline` module is the final, top-level API for the blur engine. It
// encapsulates the full stack — kernel construction, the two convolution
// passes, and the codec boundary — behind a single, easy-to-use interface.
// A `BlurPipeline` is built once from a `BlurConfig` (the kernel is computed
// at construction and reused for every frame) and then applied to in-memory
// frames or driven file-to-file. The file path is one strict line:
// decode -> horizontal pass -> vertical pass -> encode, with each stage
// logged and each failure tagged with the stage that produced it.

use crate::core_modules::convolution::ConvolutionEngine;
use crate::core_modules::image_io::image_io;
use crate::core_modules::kernel::{BlurKernel, DEFAULT_RADIUS, DEFAULT_SIGMA_SCALE};
use anyhow::Result;
use std::path::Path;
use std::time::Instant;

// Re-export key data structures for the public API.
pub use crate::core_modules::frame::frame::Frame;
pub use crate::core_modules::pixel::pixel::Pixel;

/// Configuration for the BlurPipeline, allowing for tunable behavior.
#[derive(Debug, Clone)]
pub struct BlurConfig {
    /// The maximum tap offset considered on each side of the center pixel.
    /// Larger radii spread the blur wider and cost more taps per pixel.
    pub radius: u32,
    /// Falloff steepness of the Gaussian: sigma^2 = radius^2 * sigma_scale.
    pub sigma_scale: f64,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            sigma_scale: DEFAULT_SIGMA_SCALE,
        }
    }
}

/// The main, top-level struct for the blur engine.
pub struct BlurPipeline {
    engine: ConvolutionEngine,
}

impl BlurPipeline {
    pub fn new(config: BlurConfig) -> Self {
        let kernel = BlurKernel::build(config.radius, config.sigma_scale);
        Self {
            engine: ConvolutionEngine::new(kernel),
        }
    }

    pub fn radius(&self) -> u32 {
        self.engine.kernel().radius()
    }

    /// Blurs an in-memory frame into a new frame of the same dimensions.
    pub fn blur_frame(&self, source: &Frame) -> Frame {
        self.engine.blur(source)
    }

    /// The whole file-to-file pipeline: decode `input`, run both passes,
    /// encode the result to `output`.
    pub fn blur_file(&self, input: &Path, output: &Path) -> Result<()> {
        let started = Instant::now();

        let source = image_io::load(input)?;
        log::info!(
            "decoded {}x{} pixels from {}",
            source.width,
            source.height,
            input.display()
        );

        let convolve_started = Instant::now();
        let blurred = self.blur_frame(&source);
        log::info!(
            "blurred with radius {} in {:.2?}",
            self.radius(),
            convolve_started.elapsed()
        );

        image_io::save(output, &blurred)?;
        log::info!(
            "encoded {} ({:.2?} total)",
            output.display(),
            started.elapsed()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_the_reference_parameters() {
        let config = BlurConfig::default();
        assert_eq!(config.radius, 50);
        assert_eq!(config.sigma_scale, 0.125);
    }

    #[test]
    fn pipeline_blurs_frames_with_the_configured_radius() {
        let pipeline = BlurPipeline::new(BlurConfig {
            radius: 2,
            ..BlurConfig::default()
        });
        assert_eq!(pipeline.radius(), 2);

        let source = Frame::filled(3, 3, Pixel::new(91, 91, 91, 255));
        let blurred = pipeline.blur_frame(&source);
        assert!(blurred.pixels.iter().all(|&pixel| pixel == Pixel::new(91, 91, 91, 255)));
    }

    #[test]
    fn blur_file_runs_the_whole_pipeline() {
        let pipeline = BlurPipeline::new(BlurConfig {
            radius: 2,
            ..BlurConfig::default()
        });

        let input = std::env::temp_dir().join("soft_focus_pipeline_in.png");
        let output = std::env::temp_dir().join("soft_focus_pipeline_out.png");

        let source = Frame::filled(4, 4, Pixel::new(91, 91, 91, 255));
        crate::core_modules::image_io::image_io::save(&input, &source)
            .expect("Error Saving File.");

        pipeline.blur_file(&input, &output).expect("pipeline failed");

        let result = crate::core_modules::image_io::image_io::load(&output)
            .expect("Error Loading File.");
        assert_eq!(result.width, 4);
        assert_eq!(result.height, 4);
        assert!(result.pixels.iter().all(|&pixel| pixel == Pixel::new(91, 91, 91, 255)));

        let _ = std::fs::remove_file(&input);
        let _ = std::fs::remove_file(&output);
    }

    #[test]
    fn blur_file_surfaces_decode_failures() {
        let pipeline = BlurPipeline::new(BlurConfig::default());
        let missing = std::env::temp_dir().join("soft_focus_no_such_input.png");
        let output = std::env::temp_dir().join("soft_focus_never_written.png");

        let error = pipeline.blur_file(&missing, &output).unwrap_err();
        assert!(format!("{error:#}").contains("decode stage"));
    }
}
