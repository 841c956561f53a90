//! Universal Binary JSON codec for pattern records.
//!
//! Covers the subset of UBJSON (draft 12) needed to carry a JSON document:
//! null, booleans, integers in the smallest fitting type, 64-bit floats,
//! strings, arrays and objects. Multi-byte values are big-endian. Optimized
//! container headers (`$`/`#`) are read but never written.

use std::io::Write;

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};
use serde_json::{Map, Number, Value};

use crate::error::SpecError;

/// Nesting depth past which decoding gives up.
const MAX_DEPTH: usize = 128;

/// Largest count accepted for a typed array whose elements take no payload
/// bytes (`[$Z#...`, `[$T#...`).
const MAX_ZERO_WIDTH_COUNT: usize = 1 << 16;

mod marker {
    pub const NULL: u8 = b'Z';
    pub const NOOP: u8 = b'N';
    pub const TRUE: u8 = b'T';
    pub const FALSE: u8 = b'F';
    pub const INT8: u8 = b'i';
    pub const UINT8: u8 = b'U';
    pub const INT16: u8 = b'I';
    pub const INT32: u8 = b'l';
    pub const INT64: u8 = b'L';
    pub const FLOAT32: u8 = b'd';
    pub const FLOAT64: u8 = b'D';
    pub const HIGH_PRECISION: u8 = b'H';
    pub const CHAR: u8 = b'C';
    pub const STRING: u8 = b'S';
    pub const ARRAY_START: u8 = b'[';
    pub const ARRAY_END: u8 = b']';
    pub const OBJECT_START: u8 = b'{';
    pub const OBJECT_END: u8 = b'}';
    pub const TYPE: u8 = b'$';
    pub const COUNT: u8 = b'#';
}

/// Encodes a JSON value as UBJSON bytes.
pub fn to_vec(value: &Value) -> Result<Vec<u8>, SpecError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

/// Writes a JSON value as UBJSON.
pub fn write_value<W: Write>(writer: &mut W, value: &Value) -> std::io::Result<()> {
    match value {
        Value::Null => writer.write_u8(marker::NULL),
        Value::Bool(true) => writer.write_u8(marker::TRUE),
        Value::Bool(false) => writer.write_u8(marker::FALSE),
        Value::Number(n) => write_number(writer, n),
        Value::String(s) => {
            writer.write_u8(marker::STRING)?;
            write_str_body(writer, s)
        }
        Value::Array(items) => {
            writer.write_u8(marker::ARRAY_START)?;
            for item in items {
                write_value(writer, item)?;
            }
            writer.write_u8(marker::ARRAY_END)
        }
        Value::Object(map) => {
            writer.write_u8(marker::OBJECT_START)?;
            for (key, item) in map {
                write_str_body(writer, key)?;
                write_value(writer, item)?;
            }
            writer.write_u8(marker::OBJECT_END)
        }
    }
}

fn write_number<W: Write>(writer: &mut W, n: &Number) -> std::io::Result<()> {
    if let Some(i) = n.as_i64() {
        write_int(writer, i)
    } else if let Some(u) = n.as_u64() {
        // Above i64::MAX: only the high-precision form can hold it.
        writer.write_u8(marker::HIGH_PRECISION)?;
        write_str_body(writer, &u.to_string())
    } else {
        writer.write_u8(marker::FLOAT64)?;
        writer.write_f64::<BigEndian>(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn write_int<W: Write>(writer: &mut W, i: i64) -> std::io::Result<()> {
    if let Ok(v) = i8::try_from(i) {
        writer.write_u8(marker::INT8)?;
        writer.write_i8(v)
    } else if let Ok(v) = u8::try_from(i) {
        writer.write_u8(marker::UINT8)?;
        writer.write_u8(v)
    } else if let Ok(v) = i16::try_from(i) {
        writer.write_u8(marker::INT16)?;
        writer.write_i16::<BigEndian>(v)
    } else if let Ok(v) = i32::try_from(i) {
        writer.write_u8(marker::INT32)?;
        writer.write_i32::<BigEndian>(v)
    } else {
        writer.write_u8(marker::INT64)?;
        writer.write_i64::<BigEndian>(i)
    }
}

/// Writes a length-prefixed UTF-8 string without the leading `S` marker.
fn write_str_body<W: Write>(writer: &mut W, s: &str) -> std::io::Result<()> {
    write_int(writer, s.len() as i64)?;
    writer.write_all(s.as_bytes())
}

/// Decodes UBJSON bytes into a JSON value.
///
/// The whole input must be consumed by exactly one value.
pub fn from_slice(bytes: &[u8]) -> Result<Value, SpecError> {
    let mut decoder = Decoder { data: bytes, pos: 0 };
    let value = decoder.value(0)?;
    decoder.skip_noops();
    if decoder.pos != bytes.len() {
        return Err(SpecError::ubjson(decoder.pos, "trailing bytes after value"));
    }
    Ok(value)
}

struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], SpecError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| SpecError::ubjson(self.pos, "unexpected end of input"))?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn byte(&mut self) -> Result<u8, SpecError> {
        Ok(self.take(1)?[0])
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn skip_noops(&mut self) {
        while self.peek() == Some(marker::NOOP) {
            self.pos += 1;
        }
    }

    fn next_marker(&mut self) -> Result<u8, SpecError> {
        self.skip_noops();
        self.byte()
    }

    fn value(&mut self, depth: usize) -> Result<Value, SpecError> {
        let m = self.next_marker()?;
        self.value_with_marker(m, depth)
    }

    fn value_with_marker(&mut self, m: u8, depth: usize) -> Result<Value, SpecError> {
        if depth > MAX_DEPTH {
            return Err(SpecError::ubjson(self.pos, "nesting too deep"));
        }
        match m {
            marker::NULL => Ok(Value::Null),
            marker::TRUE => Ok(Value::Bool(true)),
            marker::FALSE => Ok(Value::Bool(false)),
            marker::INT8 | marker::UINT8 | marker::INT16 | marker::INT32 | marker::INT64 => {
                Ok(Value::from(self.int_with_marker(m)?))
            }
            marker::FLOAT32 => {
                let v = f64::from(BigEndian::read_f32(self.take(4)?));
                self.float(v)
            }
            marker::FLOAT64 => {
                let v = BigEndian::read_f64(self.take(8)?);
                self.float(v)
            }
            marker::HIGH_PRECISION => {
                let at = self.pos;
                let digits = self.str_body()?;
                let number: Number = serde_json::from_str(&digits)
                    .map_err(|_| SpecError::ubjson(at, "invalid high-precision number"))?;
                Ok(Value::Number(number))
            }
            marker::CHAR => {
                let b = self.byte()?;
                Ok(Value::String(char::from(b).to_string()))
            }
            marker::STRING => Ok(Value::String(self.str_body()?)),
            marker::ARRAY_START => self.array(depth),
            marker::OBJECT_START => self.object(depth),
            other => Err(SpecError::ubjson(
                self.pos - 1,
                format!("unexpected marker '{}'", char::from(other).escape_default()),
            )),
        }
    }

    fn float(&self, v: f64) -> Result<Value, SpecError> {
        Number::from_f64(v)
            .map(Value::Number)
            .ok_or_else(|| SpecError::ubjson(self.pos, "non-finite float"))
    }

    fn int_with_marker(&mut self, m: u8) -> Result<i64, SpecError> {
        Ok(match m {
            marker::INT8 => i64::from(self.byte()? as i8),
            marker::UINT8 => i64::from(self.byte()?),
            marker::INT16 => i64::from(BigEndian::read_i16(self.take(2)?)),
            marker::INT32 => i64::from(BigEndian::read_i32(self.take(4)?)),
            marker::INT64 => BigEndian::read_i64(self.take(8)?),
            other => {
                return Err(SpecError::ubjson(
                    self.pos - 1,
                    format!("expected integer marker, got '{}'", char::from(other).escape_default()),
                ))
            }
        })
    }

    fn length(&mut self) -> Result<usize, SpecError> {
        let at = self.pos;
        let m = self.next_marker()?;
        let len = self.int_with_marker(m)?;
        usize::try_from(len).map_err(|_| SpecError::ubjson(at, format!("negative length {}", len)))
    }

    fn str_body(&mut self) -> Result<String, SpecError> {
        let len = self.length()?;
        let at = self.pos;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| SpecError::ubjson(at, "invalid UTF-8 in string"))
    }

    /// Reads an optional `$type` / `#count` header after a container start.
    ///
    /// `key_bytes` is the smallest encoded key (0 for arrays). A count that
    /// cannot fit in the remaining input is rejected before anything is read.
    fn container_header(
        &mut self,
        key_bytes: usize,
    ) -> Result<(Option<u8>, Option<usize>), SpecError> {
        let mut elem_type = None;
        if self.peek() == Some(marker::TYPE) {
            self.pos += 1;
            elem_type = Some(self.byte()?);
            if self.peek() != Some(marker::COUNT) {
                return Err(SpecError::ubjson(self.pos, "typed container without count"));
            }
        }
        let mut count = None;
        if self.peek() == Some(marker::COUNT) {
            self.pos += 1;
            let at = self.pos;
            let n = self.length()?;
            let per_item = key_bytes + elem_type.map_or(1, min_payload_len);
            let remaining = self.data.len().saturating_sub(self.pos);
            if per_item == 0 {
                if n > MAX_ZERO_WIDTH_COUNT {
                    return Err(SpecError::ubjson(
                        at,
                        format!("count {} too large for zero-width elements", n),
                    ));
                }
            } else if n > remaining / per_item {
                return Err(SpecError::ubjson(
                    at,
                    format!("count {} exceeds the {} remaining bytes", n, remaining),
                ));
            }
            count = Some(n);
        }
        Ok((elem_type, count))
    }

    fn element(&mut self, elem_type: Option<u8>, depth: usize) -> Result<Value, SpecError> {
        match elem_type {
            Some(m) => self.value_with_marker(m, depth + 1),
            None => self.value(depth + 1),
        }
    }

    fn array(&mut self, depth: usize) -> Result<Value, SpecError> {
        let (elem_type, count) = self.container_header(0)?;
        let mut items = Vec::new();
        match count {
            Some(n) => {
                for _ in 0..n {
                    items.push(self.element(elem_type, depth)?);
                }
            }
            None => loop {
                self.skip_noops();
                if self.peek() == Some(marker::ARRAY_END) {
                    self.pos += 1;
                    break;
                }
                items.push(self.value(depth + 1)?);
            },
        }
        Ok(Value::Array(items))
    }

    fn object(&mut self, depth: usize) -> Result<Value, SpecError> {
        // A key is at least a length marker and one length byte.
        let (elem_type, count) = self.container_header(2)?;
        let mut map = Map::new();
        match count {
            Some(n) => {
                for _ in 0..n {
                    let key = self.str_body()?;
                    let item = self.element(elem_type, depth)?;
                    map.insert(key, item);
                }
            }
            None => loop {
                self.skip_noops();
                if self.peek() == Some(marker::OBJECT_END) {
                    self.pos += 1;
                    break;
                }
                let key = self.str_body()?;
                let item = self.value(depth + 1)?;
                map.insert(key, item);
            },
        }
        Ok(Value::Object(map))
    }
}

/// Fewest bytes one element of a typed container occupies after its marker.
fn min_payload_len(elem_type: u8) -> usize {
    match elem_type {
        marker::NULL | marker::NOOP | marker::TRUE | marker::FALSE => 0,
        marker::INT16 => 2,
        marker::INT32 | marker::FLOAT32 => 4,
        marker::INT64 | marker::FLOAT64 => 8,
        _ => 1,
    }
}
