// THEORY:
// The `PixelAccumulator` is the arithmetic counterpart of `Pixel`. Averaging
// dozens of byte-valued samples in integer space would lose a fraction of a
// channel per tap, so every sample is widened to f64 on entry and the whole
// weighted sum is carried in doubles until the final narrowing conversion.
//
// Key principles:
// 1.  Weighted running sum: `add_weighted` folds one sample into the total,
//     channel by channel; `div_scalar` normalizes once at the end by the
//     total weight.
// 2.  Asymmetric conversions: widening from `Pixel` is lossless (implicit
//     weight 1.0); narrowing back truncates the fraction. No rounding is
//     applied, and well-formed input never leaves [0, 255] so the saturating
//     behavior of `as` never engages.

pub mod accumulator {
    use crate::core_modules::pixel::pixel::{Channel, Pixel};

    pub type Weight = f64;

    /// A four-channel weighted running sum over `Pixel` samples.
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    pub struct PixelAccumulator {
        /// The accumulated red channel.
        pub red: f64,
        /// The accumulated green channel.
        pub green: f64,
        /// The accumulated blue channel.
        pub blue: f64,
        /// The accumulated alpha channel.
        pub alpha: f64,
    }

    impl PixelAccumulator {
        /// Folds `pixel` into the sum with the given weight, all four
        /// channels independently.
        pub fn add_weighted(&mut self, pixel: &Pixel, weight: Weight) {
            self.red += pixel.red as f64 * weight;
            self.green += pixel.green as f64 * weight;
            self.blue += pixel.blue as f64 * weight;
            self.alpha += pixel.alpha as f64 * weight;
        }

        /// Divides all four channels by `divisor`. Used once per pixel to
        /// normalize by the total weight.
        pub fn div_scalar(&mut self, divisor: f64) {
            self.red /= divisor;
            self.green /= divisor;
            self.blue /= divisor;
            self.alpha /= divisor;
        }
    }

    impl From<&Pixel> for PixelAccumulator {
        fn from(pixel: &Pixel) -> Self {
            PixelAccumulator {
                red: pixel.red as f64,
                green: pixel.green as f64,
                blue: pixel.blue as f64,
                alpha: pixel.alpha as f64,
            }
        }
    }

    impl From<PixelAccumulator> for Pixel {
        fn from(accumulator: PixelAccumulator) -> Self {
            Pixel {
                red: accumulator.red as Channel,
                green: accumulator.green as Channel,
                blue: accumulator.blue as Channel,
                alpha: accumulator.alpha as Channel,
            }
        }
    }
}
