//! Uniquely named temporary audio file, deleted on drop.

use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// `<dir>/<uuid>.<ext>`; removed when the guard is dropped, on success and error paths alike.
pub struct TempAudioFile {
    path: PathBuf,
}

impl TempAudioFile {
    pub async fn write(dir: &Path, bytes: &[u8], extension: &str) -> std::io::Result<Self> {
        let path = dir.join(format!("{}.{}", Uuid::new_v4(), extension));
        // Guard first so a partial write is also cleaned up.
        let file = Self { path };
        tokio::fs::write(&file.path, bytes).await?;
        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempAudioFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "Failed to remove temp audio file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let file = TempAudioFile::write(dir.path(), b"abc", "ogg").await.unwrap();
        let path = file.path().to_path_buf();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("ogg"));
        assert_eq!(std::fs::read(&path).unwrap(), b"abc");

        drop(file);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_names_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let a = TempAudioFile::write(dir.path(), b"1", "m4a").await.unwrap();
        let b = TempAudioFile::write(dir.path(), b"2", "m4a").await.unwrap();
        assert_ne!(a.path(), b.path());
    }
}
