//! beanmeta - Descriptor resolution for server-managed session components
//!
//! This library resolves structural metadata ("descriptors") for deployable
//! session-style components from two independent declarative sources: in-code
//! structural annotations exposed through the [`reflect`] capability-query
//! contract, and an external XML deployment descriptor exposed through the
//! [`deploy`] node contract. Both sources feed the same typed descriptor,
//! with documented default-naming conventions and override precedence.
//!
//! # High-Level API
//!
//! A descriptor is populated from reflected type metadata first, then
//! optionally re-populated from a matching deployment-descriptor fragment,
//! and finally reconciled with a second descriptor of the same component
//! via [`SessionDescriptor::merge`]:
//!
//! ```
//! use beanmeta::descriptor::SessionDescriptor;
//! use beanmeta::reflect::{markers, OperationModel, TypeModel};
//!
//! # fn main() -> Result<(), beanmeta::descriptor::DescriptorError> {
//! let ty = TypeModel::new("acme::orders::OrderBean").with_operation(
//!     OperationModel::new("connect").with_annotation(markers::POST_CONSTRUCT),
//! );
//!
//! let mut descriptor = SessionDescriptor::default();
//! descriptor.from_reflection(&ty)?;
//!
//! assert_eq!(descriptor.name(), "OrderBean");
//! assert_eq!(descriptor.local(), "OrderLocal");
//! assert_eq!(descriptor.remote(), "OrderRemote");
//! assert_eq!(descriptor.post_construct_callbacks(), ["connect"]);
//! # Ok(())
//! # }
//! ```

pub mod deploy;
pub mod descriptor;
pub mod reflect;
pub mod service;

pub use descriptor::SessionDescriptor;

/// Version of the beanmeta library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
