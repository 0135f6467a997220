//! # pngio
//!
//! PNG decode/encode adapter producing normalized, uncompressed 8-bit pixel
//! buffers.
//!
//! Decoding validates the PNG signature, drives the `png` engine through its
//! info/image/end phases, and normalizes heterogeneous source formats into one
//! canonical representation: palette-indexed images are expanded to RGB and
//! tRNS transparency is promoted to a full alpha channel. Encoding emits
//! direct-color, non-interlaced PNG at the image's normalized layout with the
//! engine's default compression and filter policy.
//!
//! Only 8 bits per channel is supported; other bit depths are rejected before
//! any pixel data is read.
//!
//! ## Usage
//!
//! ```no_run
//! use pngio::{decode_file, encode_bytes};
//!
//! let image = decode_file("photo.png")?;
//! println!("{}x{}, {} channels", image.width, image.height, image.planes());
//! let bytes = encode_bytes(&image)?;
//! # Ok::<(), pngio::PngError>(())
//! ```

#![forbid(unsafe_code)]

mod cursor;
mod decode;
mod encode;
mod error;
mod image;

pub use decode::{decode_bytes, decode_file, probe_bytes};
pub use encode::{encode_bytes, encode_file, encode_writer};
pub use error::PngError;
pub use image::{ColorType, ImageInfo, PixelImage};

/// The fixed 8-byte magic sequence identifying a PNG byte stream.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Whether `data` begins with the PNG signature.
pub fn is_png(data: &[u8]) -> bool {
    data.len() >= 8 && data[..8] == PNG_SIGNATURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_detection() {
        assert!(is_png(&PNG_SIGNATURE));
        assert!(is_png(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00]));
        assert!(!is_png(b"GIF89a&more"));
        assert!(!is_png(&PNG_SIGNATURE[..7]));
        assert!(!is_png(&[]));
    }
}
