//! PNG encoding from a [`PixelImage`] to a file, memory, or arbitrary sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::PngError;
use crate::cursor::MemCursor;
use crate::image::PixelImage;

/// Encode `image` to a PNG file at `path`, replacing any existing file.
pub fn encode_file<P: AsRef<Path>>(path: P, image: &PixelImage) -> Result<(), PngError> {
    let file = File::create(path)?;
    let mut sink = BufWriter::new(file);
    encode_stream(&mut sink, image)?;
    sink.flush()?;
    Ok(())
}

/// Encode `image` to an owned in-memory PNG byte stream.
pub fn encode_bytes(image: &PixelImage) -> Result<Vec<u8>, PngError> {
    let mut cursor = MemCursor::new();
    encode_stream(&mut cursor, image)?;
    Ok(cursor.into_bytes())
}

/// Encode `image` into an arbitrary byte sink.
///
/// The stream is serialized to memory first and drained into `sink` in one
/// write, so a failed encode leaves the sink untouched.
pub fn encode_writer<W: Write>(mut sink: W, image: &PixelImage) -> Result<(), PngError> {
    let bytes = encode_bytes(image)?;
    sink.write_all(&bytes)?;
    sink.flush()?;
    Ok(())
}

/// Substrate-agnostic encode: header, single-pass image write, end phase.
/// Always non-interlaced direct color with the engine's default compression
/// and filter policy; palette and tRNS are never emitted.
fn encode_stream<W: Write>(sink: W, image: &PixelImage) -> Result<(), PngError> {
    if image.bit_depth != 8 {
        return Err(PngError::UnsupportedBitDepth(image.bit_depth));
    }
    let mut encoder = png::Encoder::new(sink, image.width, image.height);
    encoder.set_color(image.color_type.to_engine());
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.pixels)?;
    writer.finish()?;
    Ok(())
}
