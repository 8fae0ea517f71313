//! Generic lookup/service-query contract.
//!
//! The surrounding system performs component discovery, calls the
//! descriptor builders, and reconciles duplicate declarations via
//! [`crate::SessionDescriptor::merge`]. This module only defines the
//! contract such a resolution service exposes upward; no implementation
//! lives in this crate.

/// Query contract of a descriptor resolution service.
///
/// Implementations own a set of resolved descriptors plus the ambient
/// system configuration the resolution pass ran under.
pub trait DescriptorService {
    /// The resolved descriptor type (e.g. [`crate::SessionDescriptor`]).
    type Descriptor;

    /// The ambient system-configuration type.
    type Configuration;

    /// Returns the system configuration the service operates under.
    fn system_configuration(&self) -> &Self::Configuration;

    /// Replaces the system configuration.
    fn set_system_configuration(&mut self, configuration: Self::Configuration);

    /// Returns all resolved descriptors.
    fn find_all(&self) -> Vec<&Self::Descriptor>;

    /// Returns the descriptor with the given identifier, if resolved.
    fn load(&self, id: &str) -> Option<&Self::Descriptor>;
}
