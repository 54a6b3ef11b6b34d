//! Service layer for the LiveBuy Local API.
//! - `fixtures`: the read-only catalog of mock sessions and influencers, loaded once at startup
//! - `services`: registration, live-session directory and influencer directory
//! - Handlers receive these through router state; nothing here touches the network.

pub mod errors;
pub mod fixtures;
pub mod services;

pub use fixtures::Catalog;
pub use services::{
    influencer_service::InfluencerService,
    live_service::LiveService,
    registration_service::{IdGenerator, RegistrationService, UuidIdGenerator},
};
