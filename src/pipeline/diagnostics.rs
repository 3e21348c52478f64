//! Recoverable problems found during a run.

use std::fmt;

use crate::config::validation::ListenerIssue;

/// A skipped element. The run continues without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Listener spec failed validation and produced no inbound.
    InvalidListener {
        position: usize,
        tag: String,
        issue: ListenerIssue,
    },
    /// Listener names a label no profile carries.
    UnknownProfile { listener: String, label: String },
    /// Resolved profile has no `proxy`-tagged outbound.
    MissingPrimaryUpstream { listener: String, label: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidListener { position, tag, issue } => {
                write!(f, "skipping listener #{position} (tag {tag:?}): {issue}")
            }
            Diagnostic::UnknownProfile { listener, label } => {
                write!(f, "listener {listener:?} names unknown profile {label:?}")
            }
            Diagnostic::MissingPrimaryUpstream { listener, label } => {
                write!(f, "profile {label:?} for listener {listener:?} has no \"proxy\" outbound")
            }
        }
    }
}

/// Ordered collection of diagnostics; each one is logged as it is recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn record(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let invalid = Diagnostic::InvalidListener {
            position: 2,
            tag: String::new(),
            issue: ListenerIssue::MissingTag,
        };
        assert_eq!(invalid.to_string(), "skipping listener #2 (tag \"\"): missing tag");

        let unknown = Diagnostic::UnknownProfile {
            listener: "in-1".into(),
            label: "DE".into(),
        };
        assert_eq!(unknown.to_string(), "listener \"in-1\" names unknown profile \"DE\"");
    }
}
