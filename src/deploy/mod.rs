//! Deployment-descriptor collaborator contract.
//!
//! The XML deployment descriptor is owned by the surrounding system; this
//! core only consumes it through the narrow [`DeploymentNode`] trait, which
//! abstracts whatever document model the embedder uses. The element names
//! and the schema namespace below are a fixed external contract and must be
//! matched exactly by implementations.

/// Namespace URI of the deployment-descriptor schema.
///
/// Implementations of [`DeploymentNode::query`] must bind the
/// [`NAMESPACE_ALIAS`] prefix used in the path constants to this URI.
pub const DEPLOYMENT_NAMESPACE: &str = "http://beanmeta.io/schema/deployment";

/// Namespace alias used in the query path constants.
pub const NAMESPACE_ALIAS: &str = "d";

/// Child element holding the declared component name.
pub const NAME_TAG: &str = "epb-name";

/// Child element holding the implementing type name.
pub const TYPE_TAG: &str = "epb-class";

/// Child element holding the session classification tag.
pub const SESSION_TYPE_TAG: &str = "session-type";

/// Child element holding the local contract name.
pub const LOCAL_TAG: &str = "local";

/// Child element holding the remote contract name.
pub const REMOTE_TAG: &str = "remote";

/// Query path selecting post-construct callback method nodes, in document order.
pub const POST_CONSTRUCT_METHODS: &str = "d:post-construct/d:lifecycle-callback-method";

/// Query path selecting pre-destroy callback method nodes, in document order.
pub const PRE_DESTROY_METHODS: &str = "d:pre-destroy/d:lifecycle-callback-method";

/// A node of the deployment descriptor document.
///
/// This trait abstracts the XML document model so that descriptor building
/// can be tested without a parser and embedders can plug in whichever XML
/// library they already use.
pub trait DeploymentNode: Sized {
    /// Return the text content of the named direct child element, if the
    /// child exists. An existing but empty child yields `Some("")`; callers
    /// decide how to treat empty values.
    fn child_text(&self, tag: &str) -> Option<String>;

    /// Evaluate an XPath-style query relative to this node and return the
    /// matching nodes in document order. Path segments use the
    /// [`NAMESPACE_ALIAS`] prefix bound to [`DEPLOYMENT_NAMESPACE`].
    fn query(&self, path: &str) -> Vec<Self>;

    /// Return the text content of this node.
    fn text(&self) -> String;
}
