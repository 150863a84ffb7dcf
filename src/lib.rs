// THEORY:
// This file is the main entry point for the `soft_focus` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like the bundled CLI binary).
//
// The primary goal is to export the `BlurPipeline` and its associated data
// structures (`BlurConfig`, `Frame`, etc.) as the clean, high-level interface
// for the entire blur engine. The internal modules (`core_modules`) hold the
// individual pieces — pixel, accumulator, kernel, frame, convolution engine,
// image I/O — and are composed by the pipeline into one linear flow:
// decode -> horizontal pass -> vertical pass -> encode.

pub mod core_modules;
pub mod pipeline;
