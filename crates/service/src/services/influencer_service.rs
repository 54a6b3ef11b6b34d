use std::sync::Arc;

use models::influencer::{FeaturedInfluencer, InfluencerProfile};

use crate::fixtures::Catalog;

/// Featured creators and the mock profile page.
#[derive(Debug, Clone)]
pub struct InfluencerService {
    catalog: Arc<Catalog>,
}

impl InfluencerService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn featured(&self) -> &[FeaturedInfluencer] {
        &self.catalog.featured
    }

    /// Every id resolves to the catalog profile, relabelled with that id.
    pub fn profile(&self, id: &str) -> InfluencerProfile {
        self.catalog.profile.with_id(id)
    }
}
