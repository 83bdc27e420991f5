use crate::domain::ports::{Archiver, TextStore};
use crate::utils::error::{Result, SolidError};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::ZipArchive;

/// Reads and writes the text of one file. Archiving lives in
/// [`ZipFileManager`].
#[derive(Debug, Clone)]
pub struct FileManager {
    path: PathBuf,
}

impl FileManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextStore for FileManager {
    fn read(&self) -> Result<String> {
        tracing::debug!("Reading {}", self.path.display());
        Ok(fs::read_to_string(&self.path)?)
    }

    fn write(&self, data: &str) -> Result<()> {
        tracing::debug!("Writing {} bytes to {}", data.len(), self.path.display());
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Packs one file into `<stem>.zip` next to it and unpacks it again.
#[derive(Debug, Clone)]
pub struct ZipFileManager {
    path: PathBuf,
}

impl ZipFileManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn archive_path(&self) -> PathBuf {
        self.path.with_extension("zip")
    }

    fn target_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// 來源檔已是 `.zip` 時，壓縮與解壓都會覆寫來源本身，直接拒絕。
    fn ensure_distinct_archive(&self) -> Result<PathBuf> {
        let archive_path = self.archive_path();
        if archive_path == self.path {
            return Err(SolidError::InvalidConfigValue {
                field: "path".to_string(),
                value: self.path.display().to_string(),
                reason: "File already has a .zip extension".to_string(),
            });
        }
        Ok(archive_path)
    }

    fn entry_name(&self) -> Result<String> {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| SolidError::InvalidConfigValue {
                field: "path".to_string(),
                value: self.path.display().to_string(),
                reason: "Path has no valid UTF-8 file name".to_string(),
            })
    }
}

impl Archiver for ZipFileManager {
    fn compress(&self) -> Result<PathBuf> {
        let archive_path = self.ensure_distinct_archive()?;
        let entry_name = self.entry_name()?;
        let data = fs::read(&self.path)?;

        let mut zip = ZipWriter::new(File::create(&archive_path)?);
        zip.start_file(entry_name.as_str(), SimpleFileOptions::default())?;
        zip.write_all(&data)?;
        zip.finish()?;

        tracing::info!(
            "📦 Compressed {} ({} bytes) into {}",
            self.path.display(),
            data.len(),
            archive_path.display()
        );
        Ok(archive_path)
    }

    fn decompress(&self) -> Result<Vec<PathBuf>> {
        let archive_path = self.ensure_distinct_archive()?;
        let target_dir = self.target_dir();
        let mut archive = ZipArchive::new(File::open(&archive_path)?)?;
        let mut extracted = Vec::with_capacity(archive.len());

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let relative = entry
                .enclosed_name()
                .ok_or_else(|| SolidError::UnsafeArchiveEntry {
                    entry: entry.name().to_string(),
                })?;
            let out_path = target_dir.join(relative);

            // 解壓目標不可覆蓋正在讀取的壓縮檔
            if out_path == archive_path {
                return Err(SolidError::UnsafeArchiveEntry {
                    entry: entry.name().to_string(),
                });
            }

            if entry.is_dir() {
                fs::create_dir_all(&out_path)?;
                continue;
            }

            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&out_path)?;
            io::copy(&mut entry, &mut out)?;
            extracted.push(out_path);
        }

        tracing::info!(
            "📂 Extracted {} file(s) from {}",
            extracted.len(),
            archive_path.display()
        );
        Ok(extracted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_file_manager_write_then_read() {
        let dir = TempDir::new().unwrap();
        let manager = FileManager::new(dir.path().join("notes.txt"));

        manager.write("hello, world").unwrap();
        assert_eq!(manager.read().unwrap(), "hello, world");

        manager.write("replaced").unwrap();
        assert_eq!(manager.read().unwrap(), "replaced");
    }

    #[test]
    fn test_file_manager_missing_file() {
        let dir = TempDir::new().unwrap();
        let manager = FileManager::new(dir.path().join("missing.txt"));
        assert!(matches!(manager.read(), Err(SolidError::Io(_))));
    }

    #[test]
    fn test_archive_path_replaces_extension() {
        let zipper = ZipFileManager::new("data/report.txt");
        assert_eq!(zipper.archive_path(), PathBuf::from("data/report.zip"));
        assert_eq!(zipper.target_dir(), PathBuf::from("data"));
        assert_eq!(ZipFileManager::new("report.txt").target_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_compress_writes_single_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        fs::write(&path, "quarterly numbers").unwrap();

        let archive_path = ZipFileManager::new(&path).compress().unwrap();
        assert_eq!(archive_path, dir.path().join("report.zip"));

        let mut archive = ZipArchive::new(File::open(&archive_path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
        let mut entry = archive.by_name("report.txt").unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        assert_eq!(content, "quarterly numbers");
    }

    #[test]
    fn test_decompress_restores_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        fs::write(&path, "original").unwrap();

        let zipper = ZipFileManager::new(&path);
        zipper.compress().unwrap();
        fs::remove_file(&path).unwrap();

        let extracted = zipper.decompress().unwrap();
        assert_eq!(extracted, vec![path.clone()]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_decompress_without_archive_fails() {
        let dir = TempDir::new().unwrap();
        let zipper = ZipFileManager::new(dir.path().join("nothing.txt"));
        assert!(matches!(zipper.decompress(), Err(SolidError::Io(_))));
    }

    #[test]
    fn test_zip_source_is_left_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bundle.zip");
        fs::write(&path, b"payload bytes").unwrap();

        let zipper = ZipFileManager::new(&path);
        assert!(matches!(
            zipper.compress(),
            Err(SolidError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            zipper.decompress(),
            Err(SolidError::InvalidConfigValue { .. })
        ));
        assert_eq!(fs::read(&path).unwrap(), b"payload bytes");
    }

    #[test]
    fn test_decompress_refuses_entry_named_like_archive() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        let archive_path = path.with_extension("zip");

        let mut zip = ZipWriter::new(File::create(&archive_path).unwrap());
        zip.start_file("report.zip", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"inner").unwrap();
        zip.finish().unwrap();
        let before = fs::read(&archive_path).unwrap();

        let result = ZipFileManager::new(&path).decompress();
        assert!(matches!(result, Err(SolidError::UnsafeArchiveEntry { .. })));
        assert_eq!(fs::read(&archive_path).unwrap(), before);
    }

    #[test]
    fn test_decompress_rejects_escaping_entries() {
        let dir = TempDir::new().unwrap();
        let inner = dir.path().join("inner");
        fs::create_dir(&inner).unwrap();
        let path = inner.join("evil.txt");

        let mut zip = ZipWriter::new(File::create(path.with_extension("zip")).unwrap());
        zip.start_file("../escaped.txt", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"nope").unwrap();
        zip.finish().unwrap();

        let result = ZipFileManager::new(&path).decompress();
        assert!(matches!(result, Err(SolidError::UnsafeArchiveEntry { .. })));
        assert!(!dir.path().join("escaped.txt").exists());
    }
}
