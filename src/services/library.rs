//! Project library and its JSON Lines file I/O.
//!
//! The library file holds one encoded project per line, in list order. A line
//! that fails to decode is reported and skipped; the other projects still load.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

use crate::codec::{self, LoadError, ValidationError};
use crate::models::WidgetProject;

/// Ordered list of the user's projects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectLibrary {
    projects: Vec<WidgetProject>,
}

impl ProjectLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a project, or replaces the one with the same id in place.
    ///
    /// Returns the replaced project, if any.
    pub fn add(&mut self, project: WidgetProject) -> Option<WidgetProject> {
        match self.projects.iter_mut().find(|p| p.id() == project.id()) {
            Some(existing) => Some(std::mem::replace(existing, project)),
            None => {
                self.projects.push(project);
                None
            }
        }
    }

    /// Removes a project by id.
    pub fn remove(&mut self, id: Uuid) -> Option<WidgetProject> {
        let index = self.projects.iter().position(|p| p.id() == id)?;
        Some(self.projects.remove(index))
    }

    /// Gets a project by id.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&WidgetProject> {
        self.projects.iter().find(|p| p.id() == id)
    }

    /// Gets a mutable project by id.
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut WidgetProject> {
        self.projects.iter_mut().find(|p| p.id() == id)
    }

    /// Flips the favorite flag; returns the new value.
    pub fn toggle_favorite(&mut self, id: Uuid) -> Option<bool> {
        let project = self.get_mut(id)?;
        project.is_favorite = !project.is_favorite;
        project.touch();
        Some(project.is_favorite)
    }

    /// Favorite projects in list order.
    pub fn favorites(&self) -> impl Iterator<Item = &WidgetProject> {
        self.projects.iter().filter(|p| p.is_favorite)
    }

    /// All projects in list order.
    pub fn iter(&self) -> impl Iterator<Item = &WidgetProject> {
        self.projects.iter()
    }

    /// Number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// True when the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// A library line that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based line number
    pub line: usize,
    /// Why the document was rejected
    pub error: LoadError,
}

/// Result of [`LibraryService::load`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryLoad {
    /// Projects that decoded
    pub library: ProjectLibrary,
    /// Lines that did not
    pub failures: Vec<LineFailure>,
    /// Projects that needed dropped nodes or repairs
    pub degraded: usize,
}

/// Service for reading and writing library files.
pub struct LibraryService;

impl LibraryService {
    /// Loads a library file.
    ///
    /// A missing file yields an empty library. Blank lines are ignored.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use widget_studio::services::LibraryService;
    ///
    /// let loaded = LibraryService::load(Path::new("projects.jsonl"))?;
    /// for failure in &loaded.failures {
    ///     eprintln!("line {}: {}", failure.line, failure.error);
    /// }
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<LibraryLoad> {
        if !path.exists() {
            info!("No library at {}, starting empty", path.display());
            return Ok(LibraryLoad::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read library from {}", path.display()))?;
        let loaded = Self::parse(&content);

        info!(
            projects = loaded.library.len(),
            failures = loaded.failures.len(),
            "Loaded library from {}",
            path.display()
        );
        Ok(loaded)
    }

    /// Parses JSON Lines library content.
    ///
    /// The first entry for a project id wins; a later line with the same id
    /// is reported as a failure rather than merged.
    #[must_use]
    pub fn parse(content: &str) -> LibraryLoad {
        let mut loaded = LibraryLoad::default();
        let mut first_lines: HashMap<Uuid, usize> = HashMap::new();
        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }
            let result = codec::decode(line).and_then(|report| {
                let id = report.project.id();
                match first_lines.get(&id) {
                    Some(&first_line) => Err(ValidationError::DuplicateProjectId { id, first_line }.into()),
                    None => Ok(report),
                }
            });
            match result {
                Ok(report) => {
                    if !report.is_clean() {
                        loaded.degraded += 1;
                    }
                    first_lines.insert(report.project.id(), line_number);
                    loaded.library.add(report.project);
                }
                Err(error) => {
                    warn!("Skipping library line {}: {}", line_number, error);
                    loaded.failures.push(LineFailure {
                        line: line_number,
                        error,
                    });
                }
            }
        }
        loaded
    }

    /// Serializes a library to JSON Lines.
    pub fn render(library: &ProjectLibrary) -> Result<String> {
        let mut content = String::new();
        for project in library.iter() {
            let line = codec::encode(project)
                .with_context(|| format!("Failed to encode project '{}'", project.name))?;
            content.push_str(&line);
            content.push('\n');
        }
        Ok(content)
    }

    /// Saves a library file.
    ///
    /// This performs an atomic write using a temp file + rename pattern so
    /// the library is never left half-written.
    pub fn save(library: &ProjectLibrary, path: &Path) -> Result<()> {
        let content = Self::render(library)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        atomic_write(path, &content)?;
        info!(projects = library.len(), "Saved library to {}", path.display());
        Ok(())
    }
}

/// Writes `content` to `path` via a sibling temp file and rename.
pub(crate) fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
