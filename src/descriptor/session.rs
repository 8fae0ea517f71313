//! Session-component descriptor: data model, builders, merge reconciler.

use tracing::{debug, warn};

use crate::deploy::{self, DeploymentNode};
use crate::reflect::{markers, ReflectedOperation, ReflectedType};

use super::component::ComponentDescriptor;
use super::error::{DescriptorError, DescriptorResult};
use super::naming;

/// Descriptor for a session-style component.
///
/// An instance is created empty, populated by exactly one of
/// [`from_reflection`](Self::from_reflection) or
/// [`from_deployment_node`](Self::from_deployment_node), and optionally
/// reconciled with a second descriptor of the same component via
/// [`merge`](Self::merge). Once handed off to consumers it must be treated
/// as immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDescriptor {
    /// Identity fields shared with every component kind.
    component: ComponentDescriptor,
    /// Session classification tag (e.g. "Stateless", "Stateful"). No default.
    session_type: Option<String>,
    /// Local contract name. Non-empty after any successful build.
    local: String,
    /// Remote contract name. Non-empty after any successful build.
    remote: String,
    /// Operation names invoked after construction, in discovery order.
    post_construct_callbacks: Vec<String>,
    /// Operation names invoked before teardown, in discovery order.
    pre_destroy_callbacks: Vec<String>,
}

impl SessionDescriptor {
    /// Returns the identity descriptor.
    pub fn component(&self) -> &ComponentDescriptor {
        &self.component
    }

    /// Returns the identity descriptor for mutation.
    pub fn component_mut(&mut self) -> &mut ComponentDescriptor {
        &mut self.component
    }

    /// Returns the declared component name.
    pub fn name(&self) -> &str {
        self.component.name()
    }

    /// Returns the name of the implementing type.
    pub fn type_name(&self) -> &str {
        self.component.type_name()
    }

    /// Returns the session classification tag, if one was declared.
    pub fn session_type(&self) -> Option<&str> {
        self.session_type.as_deref()
    }

    /// Sets the session classification tag.
    ///
    /// An empty value is normalized to "not declared" so that merge
    /// precedence cannot be defeated by an empty override.
    pub fn set_session_type(&mut self, session_type: impl Into<String>) {
        let session_type = session_type.into();
        self.session_type = if session_type.is_empty() {
            None
        } else {
            Some(session_type)
        };
    }

    /// Returns the local contract name.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Sets the local contract name.
    pub fn set_local(&mut self, local: impl Into<String>) {
        self.local = local.into();
    }

    /// Returns the remote contract name.
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Sets the remote contract name.
    pub fn set_remote(&mut self, remote: impl Into<String>) {
        self.remote = remote.into();
    }

    /// Returns the post-construct callback names, in discovery order.
    pub fn post_construct_callbacks(&self) -> &[String] {
        &self.post_construct_callbacks
    }

    /// Appends a post-construct callback name. No deduplication.
    pub fn add_post_construct_callback(&mut self, callback: impl Into<String>) {
        self.post_construct_callbacks.push(callback.into());
    }

    /// Replaces the post-construct callback names.
    pub fn set_post_construct_callbacks(&mut self, callbacks: Vec<String>) {
        self.post_construct_callbacks = callbacks;
    }

    /// Returns the pre-destroy callback names, in discovery order.
    pub fn pre_destroy_callbacks(&self) -> &[String] {
        &self.pre_destroy_callbacks
    }

    /// Appends a pre-destroy callback name. No deduplication.
    pub fn add_pre_destroy_callback(&mut self, callback: impl Into<String>) {
        self.pre_destroy_callbacks.push(callback.into());
    }

    /// Replaces the pre-destroy callback names.
    pub fn set_pre_destroy_callbacks(&mut self, callbacks: Vec<String>) {
        self.pre_destroy_callbacks = callbacks;
    }

    /// Populates the descriptor from reflected type metadata.
    ///
    /// Identity fields are taken first via the embedded
    /// [`ComponentDescriptor`]; the local/remote contract names are then
    /// derived from the component name, and every public operation carrying
    /// a lifecycle marker is collected in enumeration order.
    ///
    /// # Errors
    ///
    /// Explicit `Local` / `Remote` annotations are recognized but not
    /// implemented; encountering one fails the build with
    /// [`DescriptorError::UnsupportedFeature`] and the descriptor must be
    /// discarded.
    pub fn from_reflection<T: ReflectedType>(&mut self, ty: &T) -> DescriptorResult<()> {
        self.component.from_reflection(ty)?;

        if ty.has_annotation(markers::LOCAL) {
            warn!(name = %self.name(), "explicit Local annotation is not implemented");
            return Err(DescriptorError::unsupported("Local annotation"));
        }
        self.local = naming::derive_local_name(self.name());

        if ty.has_annotation(markers::REMOTE) {
            warn!(name = %self.name(), "explicit Remote annotation is not implemented");
            return Err(DescriptorError::unsupported("Remote annotation"));
        }
        self.remote = naming::derive_remote_name(self.name());

        for operation in ty.operations() {
            if operation.has_annotation(markers::POST_CONSTRUCT) {
                debug!(name = %self.name(), callback = operation.name(), "post-construct callback discovered");
                self.post_construct_callbacks
                    .push(operation.name().to_string());
            }

            if operation.has_annotation(markers::PRE_DESTROY) {
                debug!(name = %self.name(), callback = operation.name(), "pre-destroy callback discovered");
                self.pre_destroy_callbacks
                    .push(operation.name().to_string());
            }
        }

        Ok(())
    }

    /// Populates the descriptor from a deployment-descriptor node.
    ///
    /// Identity fields are taken first via the embedded
    /// [`ComponentDescriptor`]. Declared `session-type`, `local` and
    /// `remote` values override; absent or empty `local`/`remote` fall back
    /// to the derived default names (never an error). Lifecycle callback
    /// methods are appended in document order, without deduplication.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::MalformedSource`] when the node lacks the
    /// required identity data (delegated to the base step).
    pub fn from_deployment_node<N: DeploymentNode>(&mut self, node: &N) -> DescriptorResult<()> {
        self.component.from_deployment_node(node)?;

        if let Some(session_type) = non_empty(node.child_text(deploy::SESSION_TYPE_TAG)) {
            self.session_type = Some(session_type);
        }

        self.local = match non_empty(node.child_text(deploy::LOCAL_TAG)) {
            Some(local) => local,
            None => naming::derive_local_name(self.name()),
        };

        self.remote = match non_empty(node.child_text(deploy::REMOTE_TAG)) {
            Some(remote) => remote,
            None => naming::derive_remote_name(self.name()),
        };

        for callback in node.query(deploy::POST_CONSTRUCT_METHODS) {
            self.post_construct_callbacks.push(callback.text());
        }

        for callback in node.query(deploy::PRE_DESTROY_METHODS) {
            self.pre_destroy_callbacks.push(callback.text());
        }

        Ok(())
    }

    /// Merges another session descriptor into this one.
    ///
    /// Identity fields are reconciled first via the embedded
    /// [`ComponentDescriptor`]. A declared `session_type` of `other` wins;
    /// callback names of `other` not yet present are appended, keeping
    /// existing entries at their position and `other`'s internal order
    /// among the appended tail.
    ///
    /// The local/remote contract names are deliberately left untouched:
    /// only the two builders set them, and the first source to do so wins.
    /// A disagreement between the two descriptors is logged, not resolved.
    pub fn merge(&mut self, other: &SessionDescriptor) {
        self.component.merge(other.component());

        if let Some(session_type) = other.session_type() {
            self.session_type = Some(session_type.to_string());
        }

        if !other.local.is_empty() && other.local != self.local {
            debug!(
                name = %self.name(),
                kept = %self.local,
                ignored = %other.local,
                "conflicting local contract names, keeping first"
            );
        }
        if !other.remote.is_empty() && other.remote != self.remote {
            debug!(
                name = %self.name(),
                kept = %self.remote,
                ignored = %other.remote,
                "conflicting remote contract names, keeping first"
            );
        }

        for callback in &other.post_construct_callbacks {
            if !self.post_construct_callbacks.contains(callback) {
                self.post_construct_callbacks.push(callback.clone());
            }
        }

        for callback in &other.pre_destroy_callbacks {
            if !self.pre_destroy_callbacks.contains(callback) {
                self.pre_destroy_callbacks.push(callback.clone());
            }
        }
    }
}

/// Treat an absent or empty child text as "not declared".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
