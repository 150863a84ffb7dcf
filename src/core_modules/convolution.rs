// THEORY:
// The `ConvolutionEngine` is the core of the blur. A 2-D Gaussian kernel is
// the outer product of two identical 1-D kernels, so the 2-D convolution
// separates into two 1-D passes — horizontal then vertical — dropping the
// per-pixel cost from O(R^2) to O(R) per pass. The engine runs both passes
// serially over every pixel: the horizontal pass reads the source frame and
// fills a freshly allocated intermediate frame; the vertical pass reads the
// intermediate and fills the destination frame that is handed back to the
// caller. Source and destination of a pass are always distinct buffers, so
// no pixel's computation ever observes another pixel's output from the same
// pass.
//
// Key principles:
// 1.  Stateless between pixels: each output pixel is a pure function of the
//     pass's source frame and the kernel. There is no checkpointing and no
//     partial result — a frame is always processed whole.
// 2.  Per-pixel normalization: the accumulator is seeded from the center
//     pixel with weight 1.0 and divided by the running weight-sum at the
//     end. Clamping always supplies a full set of taps, so the divisor is
//     the same for every pixel, but keeping the sum per-pixel keeps the
//     arithmetic symmetric with a varying-tap-count policy.
// 3.  Uniform edge policy: every tap goes through the frame's clamped
//     sampler; border pixels repeat outward. Alpha is blurred exactly like
//     the color channels.

use crate::core_modules::accumulator::accumulator::PixelAccumulator;
use crate::core_modules::frame::frame::Frame;
use crate::core_modules::kernel::BlurKernel;
use crate::core_modules::pixel::pixel::Pixel;

/// The axis a 1-D pass walks its taps along.
#[derive(Debug, Clone, Copy)]
enum PassAxis {
    Horizontal,
    Vertical,
}

impl PassAxis {
    /// The coordinate of the tap at a signed offset from (x, y) along this
    /// axis. May land out of bounds; the sampler clamps it.
    #[inline]
    fn tap(self, x: u32, y: u32, offset: i64) -> (i64, i64) {
        match self {
            PassAxis::Horizontal => (x as i64 + offset, y as i64),
            PassAxis::Vertical => (x as i64, y as i64 + offset),
        }
    }
}

/// Runs the two 1-D passes of a separable Gaussian blur over whole frames.
pub struct ConvolutionEngine {
    kernel: BlurKernel,
}

impl ConvolutionEngine {
    pub fn new(kernel: BlurKernel) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &BlurKernel {
        &self.kernel
    }

    /// Blurs `source` into a new frame of the same dimensions.
    ///
    /// Allocates the intermediate and destination frames itself; `source` is
    /// only read. Both passes always run to completion.
    pub fn blur(&self, source: &Frame) -> Frame {
        log::debug!(
            "horizontal pass: {}x{} frame, radius {}",
            source.width,
            source.height,
            self.kernel.radius()
        );
        let mut intermediate = Frame::filled(source.width, source.height, Pixel::default());
        self.horizontal_pass(source, &mut intermediate);

        log::debug!("vertical pass: {}x{} frame", source.width, source.height);
        let mut destination = Frame::filled(source.width, source.height, Pixel::default());
        self.vertical_pass(&intermediate, &mut destination);

        destination
    }

    /// The 1-D pass with taps at (x - b, y) and (x + b, y).
    pub fn horizontal_pass(&self, source: &Frame, destination: &mut Frame) {
        self.pass(source, destination, PassAxis::Horizontal);
    }

    /// The 1-D pass with taps at (x, y - b) and (x, y + b).
    pub fn vertical_pass(&self, source: &Frame, destination: &mut Frame) {
        self.pass(source, destination, PassAxis::Vertical);
    }

    fn pass(&self, source: &Frame, destination: &mut Frame, axis: PassAxis) {
        assert_eq!(source.width, destination.width);
        assert_eq!(source.height, destination.height);

        for y in 0..source.height {
            for x in 0..source.width {
                let mut accumulator = PixelAccumulator::from(source.pixel(x, y));
                let mut weight_sum = 1.0;

                // Taps in ascending offset order, negative side then positive
                // side, with 2x the weight joining the sum per offset.
                for offset in 1..=self.kernel.radius() {
                    let weight = self.kernel.weight(offset);

                    let (near_x, near_y) = axis.tap(x, y, -(offset as i64));
                    accumulator.add_weighted(source.clamped_pixel(near_x, near_y), weight);

                    let (far_x, far_y) = axis.tap(x, y, offset as i64);
                    accumulator.add_weighted(source.clamped_pixel(far_x, far_y), weight);

                    weight_sum += 2.0 * weight;
                }

                accumulator.div_scalar(weight_sum);
                destination.set_pixel(x, y, accumulator.into());
            }
        }
    }
}
