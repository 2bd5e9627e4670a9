use serde::{Deserialize, Serialize};

use super::FileKind;

/// A file as received from the caller: original name plus raw bytes.
/// The bytes are owned by the extraction call and dropped once the
/// file's text has been produced.
#[derive(Debug, Clone)]
pub struct RawUpload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl RawUpload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// A file after extraction. `content` is the extracted text or a
/// placeholder diagnostic; it is produced exactly once when the file
/// enters the session and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub kind: FileKind,
    pub content: String,
    /// True when `content` is a placeholder diagnostic rather than
    /// extracted text.
    pub placeholder: bool,
}
