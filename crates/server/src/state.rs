use std::sync::Arc;

use configs::Environment;
use service::{Catalog, IdGenerator, InfluencerService, LiveService, RegistrationService};

/// Shared router state. Every service reads the same immutable catalog.
#[derive(Clone, Debug)]
pub struct AppState {
    pub live: LiveService,
    pub influencers: InfluencerService,
    pub registrations: RegistrationService,
    pub environment: Environment,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, environment: Environment) -> Self {
        Self {
            live: LiveService::new(Arc::clone(&catalog)),
            influencers: InfluencerService::new(catalog),
            registrations: RegistrationService::default(),
            environment,
        }
    }

    /// Swap the registration id source (deterministic ids in tests).
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.registrations = RegistrationService::new(ids);
        self
    }
}
