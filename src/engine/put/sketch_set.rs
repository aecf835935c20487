use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::engine::errors::CodecError;

/// Serializes an ordered sequence of decimal identifiers as a big-endian
/// `i32` count followed by one `i64` per identifier. Order and duplicates
/// are preserved.
#[derive(Debug, Default, Clone, Copy)]
pub struct SketchSetCodec;

impl SketchSetCodec {
    const LEN_PREFIX: usize = 4;
    const ID_WIDTH: usize = 8;

    /// Fails on the first non-numeric identifier without producing output.
    pub fn encode<S: AsRef<str>>(ids: &[S]) -> Result<Bytes, CodecError> {
        let parsed = ids
            .iter()
            .map(|id| {
                let id = id.as_ref();
                id.parse::<i64>()
                    .map_err(|_| CodecError::NotNumeric(id.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = i32::try_from(parsed.len()).map_err(|_| CodecError::TooLarge(parsed.len()))?;

        let mut buf = BytesMut::with_capacity(Self::LEN_PREFIX + parsed.len() * Self::ID_WIDTH);
        buf.put_i32(count);
        for id in parsed {
            buf.put_i64(id);
        }
        Ok(buf.freeze())
    }

    pub fn decode(blob: &[u8]) -> Result<Vec<String>, CodecError> {
        let mut buf = blob;
        if buf.remaining() < Self::LEN_PREFIX {
            return Err(CodecError::Truncated {
                expected: Self::LEN_PREFIX,
                actual: blob.len(),
            });
        }

        let count = buf.get_i32();
        if count < 0 {
            return Err(CodecError::NegativeLength(count));
        }

        let body = count as usize * Self::ID_WIDTH;
        if buf.remaining() < body {
            return Err(CodecError::Truncated {
                expected: Self::LEN_PREFIX + body,
                actual: blob.len(),
            });
        }

        let mut ids = Vec::with_capacity(count as usize);
        let mut text = itoa::Buffer::new();
        for _ in 0..count {
            ids.push(text.format(buf.get_i64()).to_owned());
        }

        if buf.has_remaining() {
            return Err(CodecError::TrailingBytes(buf.remaining()));
        }
        Ok(ids)
    }
}
