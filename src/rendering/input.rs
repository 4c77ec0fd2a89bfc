//! Input normalization: text or binary SVG payloads become an owned,
//! zero-terminated byte buffer.

/// SVG payload as handed over by the caller
#[derive(Debug, Clone, Copy)]
pub enum SvgSource<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for SvgSource<'a> {
    fn from(s: &'a str) -> Self {
        SvgSource::Text(s)
    }
}

impl<'a> From<&'a String> for SvgSource<'a> {
    fn from(s: &'a String) -> Self {
        SvgSource::Text(s.as_str())
    }
}

impl<'a> From<&'a [u8]> for SvgSource<'a> {
    fn from(b: &'a [u8]) -> Self {
        SvgSource::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for SvgSource<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        SvgSource::Bytes(b.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for SvgSource<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        SvgSource::Bytes(b.as_slice())
    }
}

/// Owned copy of the SVG bytes.
///
/// The backing storage always holds one extra trailing zero byte that is not
/// part of [`SvgInput::as_bytes`], so engines reading it as a C string stop
/// in bounds.
pub struct SvgInput {
    buf: Vec<u8>,
}

impl SvgInput {
    /// Payload length, excluding the trailing zero
    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Payload including the trailing zero
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf
    }
}

impl std::fmt::Debug for SvgInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgInput").field("len", &self.len()).finish()
    }
}

/// Copy `source` into a fresh [`SvgInput`]. Text is stored as its UTF-8
/// encoding; bytes are copied verbatim, never referenced.
pub fn normalize(source: SvgSource<'_>) -> SvgInput {
    let bytes = match source {
        SvgSource::Text(s) => s.as_bytes(),
        SvgSource::Bytes(b) => b,
    };
    let mut buf = Vec::with_capacity(bytes.len() + 1);
    buf.extend_from_slice(bytes);
    buf.push(0);
    SvgInput { buf }
}
