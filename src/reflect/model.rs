//! In-memory reflection model.
//!
//! Rust has no runtime reflection, so embedders describe their component
//! types explicitly through `TypeModel` and register them with the
//! surrounding discovery pass. Operations are reported in registration
//! order, which satisfies the stability requirement of
//! [`ReflectedType::operations`].

use super::{ReflectedOperation, ReflectedType};

/// A described public operation of a component type.
///
/// # Example
///
/// ```
/// use beanmeta::reflect::{markers, OperationModel, ReflectedOperation};
///
/// let op = OperationModel::new("connect").with_annotation(markers::POST_CONSTRUCT);
/// assert_eq!(op.name(), "connect");
/// assert!(op.has_annotation(markers::POST_CONSTRUCT));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationModel {
    name: String,
    annotations: Vec<String>,
}

impl OperationModel {
    /// Create an operation description with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
        }
    }

    /// Attach a structural annotation marker to the operation.
    pub fn with_annotation(mut self, marker: impl Into<String>) -> Self {
        self.annotations.push(marker.into());
        self
    }
}

impl ReflectedOperation for OperationModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_annotation(&self, marker: &str) -> bool {
        self.annotations.iter().any(|a| a == marker)
    }
}

/// A described component type.
///
/// The short name is derived from the last `::` segment of the qualified
/// name at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeModel {
    name: String,
    short_name: String,
    annotations: Vec<String>,
    operations: Vec<OperationModel>,
}

impl TypeModel {
    /// Create a type description from a fully qualified type name.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let name = qualified_name.into();
        let short_name = name
            .rsplit("::")
            .next()
            .unwrap_or(name.as_str())
            .to_string();
        Self {
            name,
            short_name,
            annotations: Vec::new(),
            operations: Vec::new(),
        }
    }

    /// Attach a structural annotation marker to the type.
    pub fn with_annotation(mut self, marker: impl Into<String>) -> Self {
        self.annotations.push(marker.into());
        self
    }

    /// Append a public operation description.
    ///
    /// Operations are reported in the order they are added.
    pub fn with_operation(mut self, operation: OperationModel) -> Self {
        self.operations.push(operation);
        self
    }
}

impl ReflectedType for TypeModel {
    type Operation = OperationModel;

    fn name(&self) -> &str {
        &self.name
    }

    fn short_name(&self) -> &str {
        &self.short_name
    }

    fn has_annotation(&self, marker: &str) -> bool {
        self.annotations.iter().any(|a| a == marker)
    }

    fn operations(&self) -> &[OperationModel] {
        &self.operations
    }
}
