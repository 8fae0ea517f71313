//! Reflection collaborator contract.
//!
//! Descriptor building never touches reflection machinery directly; it only
//! asks the narrow questions below: "does this type / operation carry marker
//! X" and "what are the type's public operations, in order". The [`model`]
//! module provides an in-memory implementation used for static registration
//! of component types and as the collaborator double in tests.

mod model;

pub use model::{OperationModel, TypeModel};

/// Well-known structural annotation markers.
pub mod markers {
    /// Declares an explicit local contract on a component type. Recognized
    /// but not implemented; descriptor building fails on it.
    pub const LOCAL: &str = "Local";

    /// Declares an explicit remote contract on a component type. Recognized
    /// but not implemented; descriptor building fails on it.
    pub const REMOTE: &str = "Remote";

    /// Marks an operation to be invoked after construction.
    pub const POST_CONSTRUCT: &str = "PostConstruct";

    /// Marks an operation to be invoked before teardown.
    pub const PRE_DESTROY: &str = "PreDestroy";

    /// Session classification tag for stateless components.
    pub const STATELESS: &str = "Stateless";

    /// Session classification tag for stateful components.
    pub const STATEFUL: &str = "Stateful";
}

/// A public operation of a reflected component type.
pub trait ReflectedOperation {
    /// Returns the operation name.
    fn name(&self) -> &str;

    /// Reports whether the operation carries the named structural annotation.
    fn has_annotation(&self, marker: &str) -> bool;
}

/// A reflected component type.
///
/// Enumeration order of [`operations`](Self::operations) is implementation
/// defined but must be stable for a given type.
pub trait ReflectedType {
    /// The operation representation this adapter exposes.
    type Operation: ReflectedOperation;

    /// Returns the fully qualified type name.
    fn name(&self) -> &str;

    /// Returns the short type name, without any module or package path.
    fn short_name(&self) -> &str;

    /// Reports whether the type carries the named structural annotation.
    fn has_annotation(&self, marker: &str) -> bool;

    /// Returns the type's declared public operations, in enumeration order.
    fn operations(&self) -> &[Self::Operation];
}
