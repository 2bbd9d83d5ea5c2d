use crate::Source;
use std::fmt;
use std::sync::Arc;

/// A node's source span: the half-open byte range `[start, end)` into
/// the originating source body.
///
/// `source` is a shared back-reference to the [`Source`] the node was
/// parsed from; it is `None` when the parse ran with
/// [`ParseOptions::no_source`](crate::ParseOptions), which trades the
/// back-reference for a smaller, buffer-independent tree. `start` and
/// `end` are always populated either way.
#[derive(Clone, Eq, PartialEq)]
pub struct Location {
    pub start: usize,
    pub end: usize,
    pub source: Option<Arc<Source>>,
}

impl Location {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            source: None,
        }
    }

    pub fn with_source(start: usize, end: usize, source: Arc<Source>) -> Self {
        Self {
            start,
            end,
            source: Some(source),
        }
    }

    /// The raw source text this location spans, when the source
    /// back-reference was retained.
    pub fn slice(&self) -> Option<&str> {
        self.source
            .as_ref()
            .and_then(|source| source.body.get(self.start..self.end))
    }
}

// Hand-written so debug output names the source instead of dumping its
// entire body for every node.
impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)?;
        if let Some(source) = &self.source {
            write!(f, " in {:?}", source.name)?;
        }
        Ok(())
    }
}
