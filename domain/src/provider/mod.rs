//! Provider descriptors and the priority-ordered registry.

pub mod descriptor;
pub mod registry;

pub use descriptor::{AuthMode, ProviderDescriptor, ProviderProtocol};
pub use registry::ProviderRegistry;
