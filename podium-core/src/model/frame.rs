use crate::field::extract_field;
use bytes::Bytes;

/// A single discrete message on a signaling channel.
///
/// Relayed payloads keep their original kind: a text frame stays text, a
/// binary frame stays binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Text(String),
    Binary(Bytes),
}

impl Frame {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Frame::Text(text) => text.as_bytes(),
            Frame::Binary(data) => &data[..],
        }
    }

    /// Best-effort lookup of a top-level string field. Empty when absent or
    /// when the payload is not a JSON object.
    pub fn field(&self, name: &str) -> String {
        extract_field(self.as_bytes(), name)
    }

    /// Browsers poke the socket with an empty frame or a bare `ping` before
    /// joining; those frames carry no signaling meaning.
    pub fn is_keepalive(&self) -> bool {
        matches!(self.as_bytes(), b"" | b"ping")
    }
}

impl From<String> for Frame {
    fn from(text: String) -> Self {
        Frame::Text(text)
    }
}

impl From<&str> for Frame {
    fn from(text: &str) -> Self {
        Frame::Text(text.to_owned())
    }
}

impl From<Bytes> for Frame {
    fn from(data: Bytes) -> Self {
        Frame::Binary(data)
    }
}
