// src/utils.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Normalize a free-text value for file system usage
pub fn normalize_file_stem(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Build the default output path for a tailored resume
pub fn tailored_output_path(base: &Path, company: &str, title: &str) -> PathBuf {
    base.join(format!(
        "{}_{}_{}.md",
        normalize_file_stem(company),
        normalize_file_stem(title),
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Ensure directory exists
pub async fn ensure_directory(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Read file content as string with proper error context
pub async fn read_file_content(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write file content with proper error context
pub async fn write_file_content(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).await?;
        }
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_file_stem() {
        assert_eq!(normalize_file_stem("DeFi Innovations"), "defi_innovations");
        assert_eq!(normalize_file_stem("jean-paul"), "jean-paul");
        assert_eq!(normalize_file_stem("Acme@Corp"), "acme_corp");
    }

    #[test]
    fn test_tailored_output_path() {
        let path = tailored_output_path(Path::new("out"), "Acme Inc", "Frontend Dev");
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("acme_inc_frontend_dev_"));
        assert!(name.ends_with(".md"));
        assert!(path.starts_with("out"));
    }

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/resume.md");
        write_file_content(&nested, "# hello").await.unwrap();
        assert_eq!(read_file_content(&nested).await.unwrap(), "# hello");
    }
}
