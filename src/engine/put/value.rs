use bytes::Bytes;

/// Numeric domain of a column batch. A batch never mixes domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDomain {
    Integer,
    Float,
}

/// A value that can be stored as a cell. Cells hold the textual form of the
/// number, not a fixed-width binary encoding.
pub trait CellValue {
    const DOMAIN: ValueDomain;

    fn to_cell_bytes(&self) -> Bytes;
}

impl CellValue for i64 {
    const DOMAIN: ValueDomain = ValueDomain::Integer;

    fn to_cell_bytes(&self) -> Bytes {
        let mut buf = itoa::Buffer::new();
        Bytes::copy_from_slice(buf.format(*self).as_bytes())
    }
}

impl CellValue for f64 {
    const DOMAIN: ValueDomain = ValueDomain::Float;

    /// Non-finite values use the JVM spellings so `Double.parseDouble` reads them back.
    fn to_cell_bytes(&self) -> Bytes {
        if self.is_nan() {
            Bytes::from_static(b"NaN")
        } else if *self == f64::INFINITY {
            Bytes::from_static(b"Infinity")
        } else if *self == f64::NEG_INFINITY {
            Bytes::from_static(b"-Infinity")
        } else {
            let mut buf = ryu::Buffer::new();
            Bytes::copy_from_slice(buf.format_finite(*self).as_bytes())
        }
    }
}

/// Null converts to nothing, which callers treat as "skip this qualifier".
pub fn value_bytes<T: CellValue>(value: Option<&T>) -> Option<Bytes> {
    value.map(T::to_cell_bytes)
}

pub fn qualifier_bytes(qualifier: &str) -> Bytes {
    Bytes::copy_from_slice(qualifier.as_bytes())
}
