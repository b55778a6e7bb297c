//! Structured decode and validation errors.

use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// One step into a document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Field(String),
    Index(usize),
}

/// Location of a node inside a document, e.g. `layers[2].element`.
///
/// The empty path is the document root and displays as `$`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodePath(Vec<Segment>);

impl NodePath {
    /// The document root.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Path to a named field below this node.
    #[must_use]
    pub fn field(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Field(name.to_string()));
        Self(segments)
    }

    /// Path to an array element below this node.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Index(index));
        Self(segments)
    }

    /// True for the document root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "$");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => write!(f, "{name}")?,
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for NodePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A node could not be decoded.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input is not valid JSON (or is truncated)
    #[error("Syntax error: {message}")]
    Syntax {
        /// Parser message
        message: String,
    },

    /// Node has the wrong shape or is missing fields
    #[error("Malformed node at {path}: {message}")]
    Malformed {
        /// Offending node
        path: NodePath,
        /// What was wrong
        message: String,
    },

    /// Tagged union carries a tag this version does not know
    #[error("Unknown tag '{tag}' at {path} (expected one of: {})", .expected.join(", "))]
    UnknownTag {
        /// Offending node
        path: NodePath,
        /// Tag found in the document
        tag: String,
        /// Tags this union accepts
        expected: &'static [&'static str],
    },
}

impl DecodeError {
    /// Node the error refers to (root for syntax errors).
    #[must_use]
    pub fn path(&self) -> NodePath {
        match self {
            Self::Syntax { .. } => NodePath::root(),
            Self::Malformed { path, .. } | Self::UnknownTag { path, .. } => path.clone(),
        }
    }

    pub(crate) fn malformed(path: NodePath, message: impl fmt::Display) -> Self {
        Self::Malformed {
            path,
            message: message.to_string(),
        }
    }
}

/// A decoded document breaks an invariant that has no safe repair.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two layers share an id
    #[error("Duplicate layer id {id} at {path}")]
    DuplicateLayerId {
        /// Repeated id
        id: Uuid,
        /// Second occurrence
        path: NodePath,
    },

    /// Two library entries share a project id
    #[error("Duplicate project id {id} (first seen on line {first_line})")]
    DuplicateProjectId {
        /// Repeated id
        id: Uuid,
        /// 1-based line of the entry that was kept
        first_line: usize,
    },
}

/// Whole-document load failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Root could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Decoded tree is invalid beyond repair
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A node that was dropped or replaced during a tolerant decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeIssue {
    /// Where the node was
    pub path: NodePath,
    /// Why it was dropped
    #[serde(serialize_with = "serialize_display")]
    pub error: DecodeError,
    /// What the decoder did instead
    pub action: IssueAction,
}

/// Recovery taken for a [`DecodeIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueAction {
    /// Node removed from its array
    Dropped,
    /// Node replaced by its default value
    ReplacedWithDefault,
}

impl fmt::Display for DecodeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.action {
            IssueAction::Dropped => "dropped",
            IssueAction::ReplacedWithDefault => "replaced with default",
        };
        write!(f, "{} ({action}): {}", self.path, self.error)
    }
}

/// A value that was clamped or renumbered into range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repair {
    /// Repaired node
    pub path: NodePath,
    /// What changed
    pub description: String,
}

impl fmt::Display for Repair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.description)
    }
}

fn serialize_display<T: fmt::Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
