use thiserror::Error;

/// Failures a search can end in.
///
/// `NotImplemented` flags a missing domain binding and should never be
/// recovered from. `NoSolution` is the only outcome that depends on the
/// problem instance itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("'{0}' is not defined for this problem")]
    NotImplemented(&'static str),
    #[error("No solution found after expanding {expanded} nodes")]
    NoSolution { expanded: usize },
    #[error("Negative {what} '{value}'")]
    NegativeCost { what: &'static str, value: String },
    #[error("Illegal action {action} at step {step}")]
    IllegalAction { action: String, step: usize },
    #[error("Unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
}

impl SearchError {
    /// Whether this error is a programming error rather than a property of
    /// the searched instance.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SearchError::NoSolution { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatality() {
        assert!(SearchError::NotImplemented("start_state").is_fatal());
        assert!(!SearchError::NoSolution { expanded: 3 }.is_fatal());
    }

    #[test]
    fn messages() {
        assert_eq!(
            SearchError::NotImplemented("successors").to_string(),
            "'successors' is not defined for this problem"
        );
        assert_eq!(
            SearchError::NoSolution { expanded: 1_000 }.to_string(),
            "No solution found after expanding 1000 nodes"
        );
    }
}
