pub mod influencer_service;
pub mod live_service;
pub mod registration_service;
