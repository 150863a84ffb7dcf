// THEORY:
// The `image_io` module is the boundary with the external codec. Everything
// on the far side of these two functions — file formats, compression,
// interlacing — belongs to the `image` crate; everything on the near side is
// typed `Frame` data. Decoding forces the result into 8-bit RGBA so the rest
// of the crate can assume exactly four channels per pixel, and encoding
// always writes RGBA8 PNG with the stride the encoder derives from the
// width. A decode failure surfaces as an error here, before any pixel is
// touched.

pub mod image_io {
    use crate::core_modules::frame::frame::Frame;
    use anyhow::{Context, Result};
    use image::ImageEncoder;
    use std::fs::File;
    use std::path::Path;

    /// Decodes `path` into a frame, forcing the pixel data to 8-bit RGBA
    /// whatever the file's native layout.
    pub fn load(path: &Path) -> Result<Frame> {
        let decoded = image::open(path)
            .with_context(|| format!("decode stage: could not read {}", path.display()))?;
        let rgba = decoded.to_rgba8();

        Frame::from_rgba_bytes(rgba.width(), rgba.height(), rgba.as_raw())
            .context("decode stage: decoded buffer has an unexpected shape")
    }

    /// Encodes `frame` as an RGBA8 PNG at `path`.
    pub fn save(path: &Path, frame: &Frame) -> Result<()> {
        let output = File::create(path)
            .with_context(|| format!("encode stage: could not create {}", path.display()))?;
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder
            .write_image(
                &frame.to_rgba_bytes(),
                frame.width,
                frame.height,
                image::ExtendedColorType::Rgba8,
            )
            .with_context(|| format!("encode stage: could not write {}", path.display()))?;

        Ok(())
    }
}
