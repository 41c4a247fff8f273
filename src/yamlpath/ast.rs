//! Abstract syntax tree types for YAMLPath expressions.

/// A segment in a YAMLPath expression.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Named child (.property or ['property'])
    Child(String),
    /// Array index ([0], [-1])
    Index(isize),
    /// Wildcard (* or [*]) - all children
    Wildcard,
    /// Recursive descent (.. or ..property)
    RecursiveDescent(Option<String>),
    /// The current value followed by every descendant (`..` before `[`)
    DescendantOrSelf,
    /// Array slice ([start:end])
    Slice(Option<isize>, Option<isize>),
    /// Multiple properties (['prop1','prop2'])
    MultiProperty(Vec<String>),
}

/// A complete YAMLPath expression.
///
/// The leading "current value" marker is implicit: a path with no segments
/// selects the value it is evaluated against.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlPath {
    /// Segments that make up the path.
    pub segments: Vec<PathSegment>,
}

impl YamlPath {
    /// Creates a new YAMLPath with the given segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// The path that selects the whole document.
    pub fn current() -> Self {
        Self::new(Vec::new())
    }

    /// Returns true when the path selects the value it is evaluated against.
    pub fn is_current(&self) -> bool {
        self.segments.is_empty()
    }
}
