//! Wire and domain types for the LiveBuy Local API.
//! - `influencer`: registration payloads, validation and influencer profiles
//! - `live`: live/scheduled shopping sessions and their aggregates

pub mod errors;
pub mod influencer;
pub mod live;
