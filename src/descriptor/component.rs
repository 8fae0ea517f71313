//! Base component descriptor holding identity fields.
//!
//! Every deployable component has a declared name and an implementing type
//! name, regardless of its kind. Kind-specific descriptors such as
//! [`super::SessionDescriptor`] hold a `ComponentDescriptor` and delegate
//! the first step of each builder and of `merge` to it.

use tracing::debug;

use crate::deploy::{self, DeploymentNode};
use crate::reflect::ReflectedType;

use super::error::{DescriptorError, DescriptorResult};

/// Identity metadata shared by all component descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentDescriptor {
    /// Declared component name.
    name: String,
    /// Name of the implementing type.
    type_name: String,
}

impl ComponentDescriptor {
    /// Returns the declared component name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the declared component name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the name of the implementing type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Sets the name of the implementing type.
    pub fn set_type_name(&mut self, type_name: impl Into<String>) {
        self.type_name = type_name.into();
    }

    /// Initializes the identity fields from reflected type metadata.
    ///
    /// The component name is the type's short name; the type name is the
    /// fully qualified name.
    pub fn from_reflection(&mut self, ty: &impl ReflectedType) -> DescriptorResult<()> {
        if ty.short_name().is_empty() {
            return Err(DescriptorError::malformed(
                "reflected type reports an empty name",
            ));
        }

        self.name = ty.short_name().to_string();
        self.type_name = ty.name().to_string();

        debug!(name = %self.name, type_name = %self.type_name, "identity taken from reflection");
        Ok(())
    }

    /// Initializes the identity fields from a deployment-descriptor node.
    ///
    /// The component name is required; a missing or empty `epb-name` child
    /// is a malformed declaration. The implementing type is optional here
    /// because a deployment fragment may only amend a component already
    /// discovered through reflection.
    pub fn from_deployment_node(&mut self, node: &impl DeploymentNode) -> DescriptorResult<()> {
        match node.child_text(deploy::NAME_TAG).filter(|v| !v.is_empty()) {
            Some(name) => self.name = name,
            None => {
                return Err(DescriptorError::malformed(format!(
                    "deployment node lacks a <{}> value",
                    deploy::NAME_TAG
                )));
            }
        }

        if let Some(type_name) = node.child_text(deploy::TYPE_TAG).filter(|v| !v.is_empty()) {
            self.type_name = type_name;
        }

        debug!(name = %self.name, type_name = %self.type_name, "identity taken from deployment node");
        Ok(())
    }

    /// Merges another component descriptor into this one.
    ///
    /// Non-empty identity fields of `other` take precedence; empty fields
    /// never clobber existing values.
    pub fn merge(&mut self, other: &ComponentDescriptor) {
        if !other.name.is_empty() {
            self.name = other.name.clone();
        }
        if !other.type_name.is_empty() {
            self.type_name = other.type_name.clone();
        }
    }
}
