//! Descriptor types for server-managed session components.
//!
//! This module is the core of the library. Identity fields live in
//! [`ComponentDescriptor`]; session semantics (access-contract names,
//! session type, lifecycle callbacks) live in [`SessionDescriptor`],
//! which holds a component descriptor by composition and delegates the
//! base step of every builder and of `merge` to it.
//!
//! Naming defaults are in [`naming`], the error taxonomy in
//! [`DescriptorError`].

mod component;
mod error;
pub mod naming;
mod session;

pub use component::ComponentDescriptor;
pub use error::{DescriptorError, DescriptorResult};
pub use session::SessionDescriptor;
