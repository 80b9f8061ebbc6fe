//! Provider registry

use super::descriptor::ProviderDescriptor;

/// Immutable, priority-ordered list of providers.
///
/// Providers are sorted by ascending priority; equal priorities keep their
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<ProviderDescriptor>,
}

impl ProviderRegistry {
    pub fn new(mut providers: Vec<ProviderDescriptor>) -> Self {
        // stable sort: insertion order breaks priority ties
        providers.sort_by_key(|p| p.priority());
        Self { providers }
    }

    pub fn providers_in_priority_order(&self) -> &[ProviderDescriptor] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}
