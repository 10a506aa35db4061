//! Scoped temporary files for audio handed to the transcription service.

use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// A temp file that lives for the duration of one pipeline run.
///
/// The file name keeps the audio extension so the remote service can infer
/// the codec. The file is removed when the guard drops, on every exit path,
/// exactly once; a write that fails partway leaves nothing behind.
pub struct ScratchFile {
    inner: tempfile::NamedTempFile,
}

impl ScratchFile {
    /// Write `bytes` to a fresh temp file named `gathika-*.{extension}`.
    pub fn materialize(bytes: &[u8], extension: &str) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("gathika-")
            .suffix(&format!(".{}", extension))
            .tempfile()?;

        file.write_all(bytes)?;
        file.flush()?;

        Ok(Self { inner: file })
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Remove the file now instead of waiting for drop, surfacing any
    /// deletion error.
    pub fn release(self) -> Result<()> {
        self.inner.close()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn materialize_writes_bytes_with_extension() {
        let scratch = ScratchFile::materialize(b"RIFF fake wav", "wav").unwrap();
        let path = scratch.path().to_path_buf();

        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "wav");
        assert_eq!(std::fs::read(&path).unwrap(), b"RIFF fake wav");
    }

    #[test]
    fn release_removes_file() {
        let scratch = ScratchFile::materialize(b"data", "mp3").unwrap();
        let path = scratch.path().to_path_buf();

        scratch.release().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn drop_removes_file() {
        let path: PathBuf;
        {
            let scratch = ScratchFile::materialize(b"data", "ogg").unwrap();
            path = scratch.path().to_path_buf();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn drop_removes_file_when_enclosing_operation_fails() {
        fn failing_operation(seen: &mut PathBuf) -> crate::error::Result<()> {
            let scratch = ScratchFile::materialize(b"data", "flac")?;
            *seen = scratch.path().to_path_buf();
            Err(crate::error::GathikaError::Transcription(
                "simulated failure".to_string(),
            ))
        }

        let mut path = PathBuf::new();
        assert!(failing_operation(&mut path).is_err());
        assert!(!path.exists());
    }
}
