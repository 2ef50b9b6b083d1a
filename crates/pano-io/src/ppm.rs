//! Binary PPM (P6) format support.
//!
//! The header is the magic `P6` followed by three ASCII integers (width,
//! height, max channel value), separated by whitespace; `#` comments run
//! to end of line and are permitted between header tokens. Exactly one
//! whitespace byte follows the max value, then `width * height * 3` raw
//! bytes of 8-bit RGB data.
//!
//! Only a max channel value of 255 is supported. Channel bytes are
//! decoded to linear light on read and re-encoded on write, so [`Image`]
//! buffers never hold gamma-encoded values.

use crate::{IoError, IoResult};
use pano_core::{Image, Rgb};
use pano_transfer::srgb;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use tracing::debug;

const PPM_MAGIC: &[u8; 2] = b"P6";

/// Reads a binary PPM file into a linear-light image.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let image = read_from(&mut reader)?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "read ppm"
    );
    Ok(image)
}

/// Writes a linear-light image as a binary PPM file.
///
/// There is no atomic-write guarantee: a failure partway through leaves
/// a partial file on disk.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_to(&mut writer, image)?;
    writer.flush()?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "wrote ppm"
    );
    Ok(())
}

/// Decodes a PPM stream.
pub fn read_from<R: BufRead>(reader: &mut R) -> IoResult<Image> {
    let mut magic = [0u8; 2];
    reader
        .read_exact(&mut magic)
        .map_err(|e| truncated(e, "while reading magic bytes"))?;
    if &magic != PPM_MAGIC {
        return Err(IoError::InvalidFile("not a P6 image".into()));
    }

    let width = next_header_u32(reader)?;
    let height = next_header_u32(reader)?;
    let maxval = next_header_u32(reader)?;

    if width == 0 || height == 0 {
        return Err(IoError::InvalidFile(format!(
            "degenerate dimensions {}x{}",
            width, height
        )));
    }
    if maxval != 255 {
        return Err(IoError::UnsupportedBitDepth(format!(
            "max channel value {} (only 8 bit per channel supported)",
            maxval
        )));
    }

    let total = width as usize * height as usize * 3;
    let mut raw = vec![0u8; total];
    reader
        .read_exact(&mut raw)
        .map_err(|e| truncated(e, "while reading pixel data"))?;

    let pixels = raw
        .chunks_exact(3)
        .map(|c| {
            Rgb::new(
                srgb::eotf(c[0] as f32 / 255.0),
                srgb::eotf(c[1] as f32 / 255.0),
                srgb::eotf(c[2] as f32 / 255.0),
            )
        })
        .collect();

    Image::from_pixels(width, height, pixels).map_err(|e| IoError::InvalidFile(e.to_string()))
}

/// Encodes a PPM stream.
pub fn write_to<W: Write>(writer: &mut W, image: &Image) -> IoResult<()> {
    write!(writer, "P6 {} {} 255\n", image.width(), image.height())?;
    let mut row = Vec::with_capacity(image.width() as usize * 3);
    for pixels in image.rows() {
        row.clear();
        for px in pixels {
            row.push(quantize(px.r));
            row.push(quantize(px.g));
            row.push(quantize(px.b));
        }
        writer.write_all(&row)?;
    }
    Ok(())
}

/// Encodes one linear channel to an 8-bit code value.
///
/// Clamps the encoded value to [0, 1] before scaling; averaging can push
/// linear values slightly outside the displayable range. Rounds to the
/// nearest code value, which keeps encode -> decode exact on bytes.
#[inline]
fn quantize(linear: f32) -> u8 {
    (srgb::oetf(linear).clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Parses the next ASCII integer from the header, skipping whitespace and
/// `#` comments. Consumes the single byte terminating the digit run,
/// which for the last header field is the separator before pixel data.
fn next_header_u32<R: BufRead>(reader: &mut R) -> IoResult<u32> {
    loop {
        let b = header_byte(reader)?;
        if b == b'#' {
            loop {
                if header_byte(reader)? == b'\n' {
                    break;
                }
            }
        } else if b.is_ascii_whitespace() {
            continue;
        } else if b.is_ascii_digit() {
            let mut value = (b - b'0') as u32;
            loop {
                let c = header_byte(reader)?;
                if c.is_ascii_digit() {
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add((c - b'0') as u32))
                        .ok_or_else(|| IoError::InvalidFile("header value too large".into()))?;
                } else if c.is_ascii_whitespace() {
                    return Ok(value);
                } else {
                    return Err(IoError::InvalidFile(format!(
                        "unexpected byte 0x{:02x} in header",
                        c
                    )));
                }
            }
        } else {
            return Err(IoError::InvalidFile(format!(
                "unexpected byte 0x{:02x} in header",
                b
            )));
        }
    }
}

fn header_byte<R: BufRead>(reader: &mut R) -> IoResult<u8> {
    let mut b = [0u8; 1];
    reader
        .read_exact(&mut b)
        .map_err(|e| truncated(e, "while reading header"))?;
    Ok(b[0])
}

fn truncated(e: std::io::Error, what: &str) -> IoError {
    if e.kind() == ErrorKind::UnexpectedEof {
        IoError::Truncated(what.into())
    } else {
        IoError::Io(e)
    }
}
