//! Mock catalog shipped with the binary. Session times are anchored to the
//! moment the catalog is built, so "live" sessions started minutes ago and
//! scheduled ones start later today.

use chrono::{DateTime, Duration, Utc};
use models::influencer::{CurrentLocation, FeaturedInfluencer, InfluencerProfile, SocialLinks, UpcomingTrip};
use models::live::{InfluencerSummary, LiveSession, Schedule, SessionLocation};

use super::Catalog;

const AVATAR_YUKI: &str = "https://images.unsplash.com/photo-1534528741775-53994a69daeb";
const AVATAR_ELIF: &str = "https://images.unsplash.com/photo-1494790108377-be9c29b29330";
const AVATAR_SOPHIE: &str = "https://images.unsplash.com/photo-1438761681033-6461ffad8d80";
const AVATAR_PRIYA: &str = "https://images.unsplash.com/photo-1544005313-94ddf0286df2";

fn avatar(base: &str, size: u32) -> String {
    format!("{base}?w={size}&h={size}&fit=crop")
}

fn thumbnail(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?w=400&h=300&fit=crop")
}

struct SessionSeed {
    id: &'static str,
    influencer_id: &'static str,
    influencer_name: &'static str,
    avatar: String,
    city: &'static str,
    country: &'static str,
    country_code: &'static str,
    title: &'static str,
    category: &'static str,
    viewer_count: u64,
    thumbnail: String,
    product_count: u32,
}

impl SessionSeed {
    fn into_session(self, schedule: Schedule) -> LiveSession {
        LiveSession {
            id: self.id.into(),
            influencer: InfluencerSummary {
                id: self.influencer_id.into(),
                name: self.influencer_name.into(),
                avatar: self.avatar,
                is_verified: true,
            },
            location: SessionLocation {
                city: self.city.into(),
                country: self.country.into(),
                country_code: self.country_code.into(),
            },
            title: self.title.into(),
            category: self.category.into(),
            viewer_count: self.viewer_count,
            schedule,
            thumbnail: self.thumbnail,
            product_count: self.product_count,
        }
    }

    fn live(self, now: DateTime<Utc>, minutes_ago: i64) -> LiveSession {
        self.into_session(Schedule::Live { started_at: now - Duration::minutes(minutes_ago) })
    }

    fn scheduled(self, now: DateTime<Utc>, minutes_ahead: i64) -> LiveSession {
        self.into_session(Schedule::Scheduled { scheduled_at: now + Duration::minutes(minutes_ahead) })
    }
}

fn live_sessions(now: DateTime<Utc>) -> Vec<LiveSession> {
    vec![
        SessionSeed {
            id: "1",
            influencer_id: "inf-1",
            influencer_name: "Yuki Tanaka",
            avatar: avatar(AVATAR_YUKI, 100),
            city: "Tokyo",
            country: "Japan",
            country_code: "JP",
            title: "Vintage Fashion Finds at Shimokitazawa",
            category: "Vintage Fashion",
            viewer_count: 1247,
            thumbnail: thumbnail("photo-1513407030348-c983a97b98d8"),
            product_count: 12,
        }
        .live(now, 45),
        SessionSeed {
            id: "2",
            influencer_id: "inf-2",
            influencer_name: "Elif Yilmaz",
            avatar: avatar(AVATAR_ELIF, 100),
            city: "Istanbul",
            country: "Turkey",
            country_code: "TR",
            title: "Grand Bazaar Ceramics Tour",
            category: "Ceramics & Crafts",
            viewer_count: 892,
            thumbnail: thumbnail("photo-1590422749897-47036da0b0ff"),
            product_count: 8,
        }
        .live(now, 30),
        SessionSeed {
            id: "3",
            influencer_id: "inf-3",
            influencer_name: "Sophie Laurent",
            avatar: avatar(AVATAR_SOPHIE, 100),
            city: "Paris",
            country: "France",
            country_code: "FR",
            title: "Antique Treasures at Marché aux Puces",
            category: "Antiques",
            viewer_count: 634,
            thumbnail: thumbnail("photo-1555529669-e69e7aa0ba9a"),
            product_count: 15,
        }
        .live(now, 60),
        SessionSeed {
            id: "4",
            influencer_id: "inf-4",
            influencer_name: "Priya Sharma",
            avatar: avatar(AVATAR_PRIYA, 100),
            city: "Jaipur",
            country: "India",
            country_code: "IN",
            title: "Gemstone Shopping in the Pink City",
            category: "Gemstones",
            viewer_count: 1089,
            thumbnail: thumbnail("photo-1515562141207-7a88fb7ce338"),
            product_count: 20,
        }
        .live(now, 20),
        SessionSeed {
            id: "5",
            influencer_id: "inf-5",
            influencer_name: "Min-jun Kim",
            avatar: avatar("https://images.unsplash.com/photo-1506794778202-cad84cf45f1d", 100),
            city: "Seoul",
            country: "South Korea",
            country_code: "KR",
            title: "K-Beauty Secrets from Myeongdong",
            category: "K-Beauty",
            viewer_count: 2341,
            thumbnail: thumbnail("photo-1522335789203-aabd1fc54bc9"),
            product_count: 25,
        }
        .live(now, 15),
    ]
}

fn upcoming_sessions(now: DateTime<Utc>) -> Vec<LiveSession> {
    vec![
        SessionSeed {
            id: "6",
            influencer_id: "inf-6",
            influencer_name: "Fatima Benali",
            avatar: avatar("https://images.unsplash.com/photo-1531746020798-e6953c6e8e04", 100),
            city: "Marrakech",
            country: "Morocco",
            country_code: "MA",
            title: "Moroccan Textiles & Rugs",
            category: "Textiles & Rugs",
            viewer_count: 0,
            thumbnail: thumbnail("photo-1531366936337-7c912a4589a7"),
            product_count: 0,
        }
        .scheduled(now, 120),
        SessionSeed {
            id: "7",
            influencer_id: "inf-7",
            influencer_name: "Made Wijaya",
            avatar: avatar("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d", 100),
            city: "Bali",
            country: "Indonesia",
            country_code: "ID",
            title: "Balinese Silver Jewelry Workshop",
            category: "Silver Jewelry",
            viewer_count: 0,
            thumbnail: thumbnail("photo-1537953773345-d172ccf13cf1"),
            product_count: 0,
        }
        .scheduled(now, 270),
        SessionSeed {
            id: "8",
            influencer_id: "inf-8",
            influencer_name: "Marco Rossi",
            avatar: avatar("https://images.unsplash.com/photo-1500648767791-00dcc994a43e", 100),
            city: "Florence",
            country: "Italy",
            country_code: "IT",
            title: "Italian Leather Goods Tour",
            category: "Leather Goods",
            viewer_count: 0,
            thumbnail: thumbnail("photo-1548036328-c9fa89d128fa"),
            product_count: 0,
        }
        .scheduled(now, 360),
    ]
}

#[allow(clippy::too_many_arguments)]
fn featured(
    id: &str,
    name: &str,
    avatar_base: &str,
    home_country: &str,
    city: &str,
    country_code: &str,
    specialties: [&str; 3],
    rating: f64,
    total_sales: u32,
    followers: u32,
) -> FeaturedInfluencer {
    FeaturedInfluencer {
        id: id.into(),
        name: name.into(),
        avatar: avatar(avatar_base, 200),
        home_country: home_country.into(),
        current_location: CurrentLocation { city: city.into(), country_code: country_code.into() },
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        rating,
        total_sales,
        followers,
        is_live: true,
    }
}

fn featured_influencers() -> Vec<FeaturedInfluencer> {
    vec![
        featured(
            "inf-1", "Yuki Tanaka", AVATAR_YUKI, "Japan", "Tokyo", "JP",
            ["Vintage Fashion", "Electronics", "Anime Collectibles"], 4.9, 342, 12500,
        ),
        featured(
            "inf-2", "Elif Yilmaz", AVATAR_ELIF, "Turkey", "Istanbul", "TR",
            ["Ceramics", "Spices", "Turkish Carpets"], 4.8, 287, 9800,
        ),
        featured(
            "inf-3", "Sophie Laurent", AVATAR_SOPHIE, "France", "Paris", "FR",
            ["Antiques", "Art", "Luxury Vintage"], 4.9, 256, 15200,
        ),
        featured(
            "inf-4", "Priya Sharma", AVATAR_PRIYA, "India", "Jaipur", "IN",
            ["Gemstones", "Textiles", "Jewelry"], 4.7, 198, 8400,
        ),
    ]
}

fn profile() -> InfluencerProfile {
    let social_links: SocialLinks = [
        ("instagram", "@yukitanaka_travels"),
        ("tiktok", "@yukitanaka"),
        ("youtube", "YukiTanakaTravel"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    InfluencerProfile {
        id: "inf-1".into(),
        name: "Yuki Tanaka".into(),
        avatar: avatar(AVATAR_YUKI, 400),
        banner: "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?w=1200&h=400&fit=crop".into(),
        home_country: "Japan".into(),
        current_location: CurrentLocation { city: "Tokyo".into(), country_code: "JP".into() },
        bio: "Fashion enthusiast and vintage collector. I travel the world finding unique pieces that tell a story."
            .into(),
        specialties: vec!["Vintage Fashion".into(), "Electronics".into(), "Anime Collectibles".into()],
        rating: 4.9,
        review_count: 156,
        total_sales: 342,
        followers: 12500,
        is_verified: true,
        member_since: "2024-03-15".into(),
        upcoming_trips: vec![
            UpcomingTrip { city: "Osaka".into(), country: "Japan".into(), dates: "Mar 15-20".into() },
            UpcomingTrip { city: "Seoul".into(), country: "South Korea".into(), dates: "Mar 25-30".into() },
        ],
        social_links,
    }
}

pub(super) fn catalog(now: DateTime<Utc>) -> Catalog {
    Catalog {
        live: live_sessions(now),
        upcoming: upcoming_sessions(now),
        featured: featured_influencers(),
        profile: profile(),
    }
}
