use crate::convert::Sections;
use relative_path::{Component, RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid sections directory: {0}")]
    InvalidSectionsDir(String),
    #[error("Invalid section name: {0}")]
    InvalidSectionName(String),
}

/// Read a file below `root` and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file below `root`
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files in the sections directory, recursively
pub fn scan_markdown_files(sections_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_sections_dir(sections_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(sections_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Loads every markdown file below `sections_root` as a section named by its
/// relative path without the extension (`legal/terms.md` -> `legal/terms`).
pub fn read_sections(sections_root: &Path) -> Result<Sections, IoError> {
    let mut sections = Sections::new();
    for path in scan_markdown_files(sections_root)? {
        let relative = path
            .strip_prefix(sections_root)
            .ok()
            .and_then(|p| RelativePathBuf::from_path(p).ok())
            .ok_or_else(|| IoError::InvalidSectionName(path.display().to_string()))?;
        let content = read_file(&relative, sections_root)?;
        let name = relative.as_str();
        let name = name.strip_suffix(".md").unwrap_or(name);
        sections.insert(name.to_string(), content);
    }
    log::debug!(
        "read {} sections from {}",
        sections.len(),
        sections_root.display()
    );
    Ok(sections)
}

/// Writes each section to `<output_root>/<name>.<extension>`, creating
/// directories as needed. Returns the written paths in name order.
pub fn write_sections(
    output_root: &Path,
    sections: &Sections,
    extension: &str,
) -> Result<Vec<PathBuf>, IoError> {
    let mut written = Vec::with_capacity(sections.len());
    for (name, content) in sections {
        let relative = section_path(name, extension)?;
        write_file(&relative, output_root, content)?;
        written.push(relative.to_path(output_root));
    }
    Ok(written)
}

/// A section name must stay inside the output directory.
fn section_path(name: &str, extension: &str) -> Result<RelativePathBuf, IoError> {
    let relative = RelativePath::new(name);
    let escapes = relative
        .components()
        .any(|c| matches!(c, Component::ParentDir));
    if name.is_empty() || escapes || Path::new(name).is_absolute() {
        return Err(IoError::InvalidSectionName(name.to_string()));
    }
    Ok(RelativePathBuf::from(format!("{name}.{extension}")))
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_sections_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSectionsDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
