//! PNG decoding: signature validation, engine drive, format normalization.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::cursor::SliceCursor;
use crate::image::{ColorType, ImageInfo, PixelImage};
use crate::{PNG_SIGNATURE, PngError, is_png};

/// Decode a PNG file into a normalized [`PixelImage`].
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<PixelImage, PngError> {
    let mut file = File::open(path)?;
    let mut signature = [0u8; 8];
    file.read_exact(&mut signature)?;
    if signature != PNG_SIGNATURE {
        return Err(PngError::BadSignature);
    }
    decode_stream((&PNG_SIGNATURE[..]).chain(BufReader::new(file)))
}

/// Decode an in-memory PNG byte stream into a normalized [`PixelImage`].
///
/// `data` must be a complete, signature-prefixed PNG stream.
pub fn decode_bytes(data: &[u8]) -> Result<PixelImage, PngError> {
    if !is_png(data) {
        return Err(PngError::BadSignature);
    }
    decode_stream((&PNG_SIGNATURE[..]).chain(SliceCursor::past_signature(data)))
}

/// Probe header metadata without decoding pixel data.
///
/// Returns the stored header as-is: palette-indexed layouts and unsupported
/// bit depths are reported, not rejected.
pub fn probe_bytes(data: &[u8]) -> Result<ImageInfo, PngError> {
    if !is_png(data) {
        return Err(PngError::BadSignature);
    }
    let decoder = png::Decoder::new((&PNG_SIGNATURE[..]).chain(SliceCursor::past_signature(data)));
    let reader = decoder.read_info()?;
    let info = reader.info();
    Ok(ImageInfo {
        width: info.width,
        height: info.height,
        bit_depth: info.bit_depth as u8,
        color_type: ColorType::from_engine(info.color_type),
    })
}

/// Substrate-agnostic decode. The caller has already validated the 8-byte
/// signature and positioned `source` past it; the validated prefix is
/// replayed ahead of the stream since the engine re-checks it itself.
fn decode_stream<R: Read>(source: R) -> Result<PixelImage, PngError> {
    let mut decoder = png::Decoder::new(source);
    // Palette -> RGB expansion and tRNS -> alpha promotion.
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder.read_info()?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    if info.bit_depth != png::BitDepth::Eight {
        return Err(PngError::UnsupportedBitDepth(info.bit_depth as u8));
    }

    let (engine_color, _) = reader.output_color_type();
    let color_type = ColorType::from_engine(engine_color);
    if color_type == ColorType::Indexed {
        return Err(PngError::Engine("engine returned unexpanded palette data".into()));
    }

    let size = reader.output_buffer_size();
    let mut pixels = Vec::new();
    pixels.try_reserve_exact(size).map_err(|_| PngError::Allocation)?;
    pixels.resize(size, 0);

    let frame = reader.next_frame(&mut pixels)?;
    pixels.truncate(frame.buffer_size());
    // Drain trailing chunks after the image data.
    reader.finish()?;

    Ok(PixelImage {
        width,
        height,
        bit_depth: 8,
        color_type,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a PNG stream with the engine directly, bypassing this crate's
    /// encoder, so decoder tests cover sources the encoder never emits
    /// (palette, tRNS, odd bit depths).
    fn engine_encode(
        width: u32,
        height: u32,
        color: png::ColorType,
        depth: png::BitDepth,
        palette: Option<Vec<u8>>,
        trns: Option<Vec<u8>>,
        data: &[u8],
    ) -> Vec<u8> {
        let mut bytes = Vec::new();
        let mut encoder = png::Encoder::new(&mut bytes, width, height);
        encoder.set_color(color);
        encoder.set_depth(depth);
        if let Some(palette) = palette {
            encoder.set_palette(palette);
        }
        if let Some(trns) = trns {
            encoder.set_trns(trns);
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
        writer.finish().unwrap();
        bytes
    }

    #[test]
    fn rejects_bad_signature() {
        assert!(matches!(
            decode_bytes(b"JFIF is not a PNG stream"),
            Err(PngError::BadSignature)
        ));
        // Shorter than the signature itself.
        assert!(matches!(
            decode_bytes(&[0x89, b'P', b'N']),
            Err(PngError::BadSignature)
        ));
        assert!(matches!(decode_bytes(&[]), Err(PngError::BadSignature)));
    }

    #[test]
    fn rejects_unsupported_bit_depths() {
        // Grayscale sub-byte depths: 8 pixels wide so rows are whole bytes.
        for (depth, raw, row_bytes) in [
            (png::BitDepth::One, 1u8, 1usize),
            (png::BitDepth::Two, 2, 2),
            (png::BitDepth::Four, 4, 4),
        ] {
            let stream = engine_encode(
                8,
                1,
                png::ColorType::Grayscale,
                depth,
                None,
                None,
                &vec![0u8; row_bytes],
            );
            match decode_bytes(&stream) {
                Err(PngError::UnsupportedBitDepth(d)) => assert_eq!(d, raw),
                other => panic!("depth {raw} accepted: {other:?}"),
            }
        }

        let stream = engine_encode(
            1,
            1,
            png::ColorType::Rgb,
            png::BitDepth::Sixteen,
            None,
            None,
            &[0, 1, 2, 3, 4, 5],
        );
        assert!(matches!(
            decode_bytes(&stream),
            Err(PngError::UnsupportedBitDepth(16))
        ));
    }

    #[test]
    fn palette_expands_to_rgb() {
        let palette = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let stream = engine_encode(
            2,
            2,
            png::ColorType::Indexed,
            png::BitDepth::Eight,
            Some(palette.clone()),
            None,
            &[0, 1, 2, 3],
        );
        let image = decode_bytes(&stream).unwrap();
        assert_eq!(image.width, 2);
        assert_eq!(image.height, 2);
        assert_eq!(image.color_type, ColorType::Rgb);
        assert_eq!(image.planes(), 3);
        // Each index replaced by its palette entry.
        assert_eq!(image.pixels, palette);
    }

    #[test]
    fn palette_transparency_promotes_to_alpha() {
        let palette = vec![10, 20, 30, 40, 50, 60];
        // Index 0 fully transparent, index 1 opaque by omission.
        let stream = engine_encode(
            2,
            1,
            png::ColorType::Indexed,
            png::BitDepth::Eight,
            Some(palette),
            Some(vec![0]),
            &[0, 1],
        );
        let image = decode_bytes(&stream).unwrap();
        assert_eq!(image.color_type, ColorType::Rgba);
        assert_eq!(image.planes(), 4);
        assert_eq!(image.pixels, vec![10, 20, 30, 0, 40, 50, 60, 255]);
    }

    #[test]
    fn rgb_transparency_promotes_to_alpha() {
        // tRNS for 8-bit truecolor: three big-endian 16-bit samples with the
        // value in the low byte. Red is the designated transparent color.
        let pixels = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let stream = engine_encode(
            2,
            2,
            png::ColorType::Rgb,
            png::BitDepth::Eight,
            None,
            Some(vec![0, 255, 0, 0, 0, 0]),
            &pixels,
        );
        let image = decode_bytes(&stream).unwrap();
        assert_eq!(image.color_type, ColorType::Rgba);
        assert_eq!(image.planes(), 4);
        assert_eq!(
            image.pixels,
            vec![
                255, 0, 0, 0, // matches the transparent color
                0, 255, 0, 255, //
                0, 0, 255, 255, //
                255, 255, 255, 255,
            ]
        );
    }

    #[test]
    fn probe_reports_stored_header() {
        let stream = engine_encode(
            3,
            5,
            png::ColorType::Indexed,
            png::BitDepth::Eight,
            Some(vec![0, 0, 0]),
            None,
            &[0; 15],
        );
        let info = probe_bytes(&stream).unwrap();
        assert_eq!(info.width, 3);
        assert_eq!(info.height, 5);
        assert_eq!(info.bit_depth, 8);
        assert_eq!(info.color_type, ColorType::Indexed);

        let stream = engine_encode(
            1,
            1,
            png::ColorType::Rgb,
            png::BitDepth::Sixteen,
            None,
            None,
            &[0; 6],
        );
        let info = probe_bytes(&stream).unwrap();
        assert_eq!(info.bit_depth, 16);
        assert_eq!(info.color_type, ColorType::Rgb);
    }

    #[test]
    fn decode_file_rejects_non_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.bin");
        std::fs::write(&path, b"0123456789abcdef").unwrap();
        assert!(matches!(decode_file(&path), Err(PngError::BadSignature)));

        assert!(matches!(
            decode_file(dir.path().join("missing.png")),
            Err(PngError::Io(_))
        ));
    }

    #[test]
    fn truncated_stream_is_an_engine_failure() {
        let stream = engine_encode(
            2,
            2,
            png::ColorType::Rgb,
            png::BitDepth::Eight,
            None,
            None,
            &[0; 12],
        );
        let cut = &stream[..stream.len() / 2];
        assert!(matches!(decode_bytes(cut), Err(PngError::Engine(_))));
    }
}
