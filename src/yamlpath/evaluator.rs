use super::ast::{PathSegment, YamlPath};
use crate::document::value::Value;
use crate::output::text;

/// Deepest nesting the recursive-descent walk will follow.
pub const MAX_DEPTH: usize = 512;

/// An internal fault raised while walking a document.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalFault {
    /// Text rendering of the value being walked.
    pub value: String,
    pub cause: String,
}

pub struct Evaluator<'a> {
    root: &'a Value,
}

impl<'a> Evaluator<'a> {
    pub fn new(root: &'a Value) -> Self {
        Evaluator { root }
    }

    /// Evaluates a path and returns the matching values in traversal order.
    ///
    /// Missing keys, out-of-range indices and segments applied to scalars
    /// contribute no matches; they are never errors.
    pub fn evaluate(&self, path: &YamlPath) -> Result<Vec<&'a Value>, EvalFault> {
        let mut current: Vec<&'a Value> = vec![self.root];

        for segment in &path.segments {
            let mut next = Vec::new();
            for node in &current {
                next.extend(self.evaluate_segment(node, segment)?);
            }
            current = next;
        }

        Ok(current)
    }

    fn evaluate_segment(
        &self,
        node: &'a Value,
        segment: &PathSegment,
    ) -> Result<Vec<&'a Value>, EvalFault> {
        let matches = match segment {
            PathSegment::Child(name) => self.find_child(node, name),
            PathSegment::Index(idx) => self.get_array_element(node, *idx),
            PathSegment::Wildcard => self.get_all_children(node),
            PathSegment::RecursiveDescent(prop) => self.recursive_descent(node, prop.as_deref())?,
            PathSegment::DescendantOrSelf => {
                let mut matches = vec![node];
                matches.extend(self.recursive_descent(node, None)?);
                matches
            }
            PathSegment::Slice(start, end) => self.get_slice(node, *start, *end),
            PathSegment::MultiProperty(props) => props
                .iter()
                .flat_map(|prop| self.find_child(node, prop))
                .collect(),
        };
        Ok(matches)
    }

    fn find_child(&self, node: &'a Value, name: &str) -> Vec<&'a Value> {
        node.get(name).into_iter().collect()
    }

    fn get_array_element(&self, node: &'a Value, idx: isize) -> Vec<&'a Value> {
        if let Value::Sequence(items) = node {
            let len = items.len() as isize;
            let normalized_idx = if idx < 0 { len + idx } else { idx };

            if normalized_idx >= 0 && normalized_idx < len {
                return vec![&items[normalized_idx as usize]];
            }
        }
        vec![]
    }

    fn get_all_children(&self, node: &'a Value) -> Vec<&'a Value> {
        match node {
            Value::Mapping(entries) => entries.values().collect(),
            Value::Sequence(items) => items.iter().collect(),
            _ => vec![],
        }
    }

    fn get_slice(
        &self,
        node: &'a Value,
        start: Option<isize>,
        end: Option<isize>,
    ) -> Vec<&'a Value> {
        if let Value::Sequence(items) = node {
            let len = items.len() as isize;

            let start_idx = match start {
                Some(s) if s < 0 => (len + s).max(0) as usize,
                Some(s) => s.min(len) as usize,
                None => 0,
            };

            let end_idx = match end {
                Some(e) if e < 0 => (len + e).max(0) as usize,
                Some(e) => e.min(len) as usize,
                None => len as usize,
            };

            if start_idx <= end_idx {
                return items[start_idx..end_idx].iter().collect();
            }
        }
        vec![]
    }

    fn recursive_descent(
        &self,
        node: &'a Value,
        prop: Option<&str>,
    ) -> Result<Vec<&'a Value>, EvalFault> {
        fn walk<'a>(
            node: &'a Value,
            prop: Option<&str>,
            depth: usize,
            results: &mut Vec<&'a Value>,
        ) -> Result<(), EvalFault> {
            if depth > MAX_DEPTH {
                return Err(EvalFault {
                    value: text::render_value(node),
                    cause: format!("document nesting exceeds {} levels", MAX_DEPTH),
                });
            }
            match node {
                Value::Mapping(entries) => {
                    for (key, child) in entries {
                        // Without a name every descendant matches.
                        if prop.map_or(true, |name| name == key.as_str()) {
                            results.push(child);
                        }
                        walk(child, prop, depth + 1, results)?;
                    }
                }
                Value::Sequence(items) => {
                    for item in items {
                        if prop.is_none() {
                            results.push(item);
                        }
                        walk(item, prop, depth + 1, results)?;
                    }
                }
                _ => {}
            }
            Ok(())
        }

        let mut results = Vec::new();
        walk(node, prop, 0, &mut results)?;
        Ok(results)
    }
}
