use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::{error::SmelterError, CallError, Params};

/// Boxed future returned by a registered operation.
pub type OperationFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Value, CallError>> + Send + 'a>>;

/// Operation entry: a typed function reference over the client handle.
pub type OperationFn<C> = for<'a> fn(&'a C, Params) -> OperationFuture<'a>;

enum Node<C> {
    Namespace(HashMap<String, Node<C>>),
    Operation(OperationFn<C>),
}

/// Finite mapping from dotted operation paths to typed entries.
///
/// Paths mirror the remote API's namespaces: `"node.list"` names the
/// `list` operation inside the `node` group, and deeper nesting
/// (`"node.vif.attach"`) is supported. Registration is static setup;
/// a lookup miss during [`resolve`](Self::resolve) surfaces as
/// [`SmelterError::UnknownOperation`] and is never retried.
pub struct OperationRegistry<C> {
    root: HashMap<String, Node<C>>,
}

impl<C> OperationRegistry<C> {
    pub fn new() -> Self {
        Self {
            root: HashMap::new(),
        }
    }

    /// Registers an operation under a dotted path.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty, contains an empty segment, or
    /// collides with a previously registered entry.
    pub fn register(mut self, path: &str, operation: OperationFn<C>) -> Self {
        let segments: Vec<&str> = path.split('.').collect();
        assert!(
            !path.is_empty() && segments.iter().all(|segment| !segment.is_empty()),
            "operation path '{path}' must consist of non-empty dotted segments"
        );

        let mut children = &mut self.root;
        for segment in &segments[..segments.len() - 1] {
            let node = children
                .entry((*segment).to_owned())
                .or_insert_with(|| Node::Namespace(HashMap::new()));
            match node {
                Node::Namespace(next) => children = next,
                Node::Operation(_) => {
                    panic!("operation path '{path}' collides with operation '{segment}'")
                }
            }
        }

        let last = segments[segments.len() - 1];
        if children
            .insert(last.to_owned(), Node::Operation(operation))
            .is_some()
        {
            panic!("operation '{path}' is already registered");
        }
        self
    }

    /// Resolves a dotted path to its registered operation.
    ///
    /// Each segment must resolve within the namespace reached by the
    /// previous one; the final segment must name an operation.
    pub fn resolve(&self, path: &str) -> Result<OperationFn<C>, SmelterError> {
        let mut children = &self.root;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            match children.get(segment) {
                Some(Node::Operation(operation)) if segments.peek().is_none() => {
                    return Ok(*operation)
                }
                Some(Node::Namespace(next)) if segments.peek().is_some() => children = next,
                _ => {
                    return Err(SmelterError::UnknownOperation {
                        path: path.to_owned(),
                        segment: segment.to_owned(),
                    })
                }
            }
        }
        Err(SmelterError::UnknownOperation {
            path: path.to_owned(),
            segment: String::new(),
        })
    }

    /// Lists registered operation paths in sorted order.
    pub fn operations(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_paths(&self.root, "", &mut paths);
        paths.sort();
        paths
    }
}

impl<C> Default for OperationRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for OperationRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("operations", &self.operations())
            .finish()
    }
}

fn collect_paths<C>(children: &HashMap<String, Node<C>>, prefix: &str, out: &mut Vec<String>) {
    for (name, node) in children {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match node {
            Node::Operation(_) => out.push(path),
            Node::Namespace(next) => collect_paths(next, &path, out),
        }
    }
}
