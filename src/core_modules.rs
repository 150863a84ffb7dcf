pub mod accumulator;
pub mod convolution;
pub mod frame;
pub mod image_io;
pub mod kernel;
pub mod pixel;
