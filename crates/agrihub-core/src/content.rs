//! Static content tables: farmer profile, crop health, advisory topics
//!
//! Everything here is compiled in and read-only. The app layer only ever
//! borrows from these tables.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::CropStatus;

// ─────────────────────────────────────────────────────────────────────────────
// Profile
// ─────────────────────────────────────────────────────────────────────────────

/// Static farmer and farm attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub name: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub farm_size: &'static str,
    pub main_crops: &'static str,
    pub livestock: &'static str,
    pub farming_method: &'static str,
}

pub const PROFILE: UserProfile = UserProfile {
    name: "David Waweru",
    location: "Nairobi, Kenya",
    phone: "+254 712 345 678",
    email: "david@farm.co.ke",
    farm_size: "12 Acres",
    main_crops: "Maize, Beans, Coffee",
    livestock: "Dairy Cattle, Poultry",
    farming_method: "Mixed Farming",
};

impl UserProfile {
    /// Number of labelled fields shown on the profile page
    pub const FIELD_COUNT: usize = 8;

    /// Labelled attribute at a display index (personal info first, then farm)
    pub fn field(&self, index: usize) -> Option<(&'static str, &'static str)> {
        let field = match index {
            0 => ("Full Name", self.name),
            1 => ("Location", self.location),
            2 => ("Phone", self.phone),
            3 => ("Email", self.email),
            4 => ("Farm Size", self.farm_size),
            5 => ("Main Crops", self.main_crops),
            6 => ("Livestock", self.livestock),
            7 => ("Farming Method", self.farming_method),
            _ => return None,
        };
        Some(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        (0..Self::FIELD_COUNT).filter_map(|i| self.field(i))
    }

    pub fn first_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }

    /// Uppercase initials of each word in the name, e.g. `DW`
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// One monitored crop on the profile page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropHealthEntry {
    pub name: &'static str,
    pub status: CropStatus,
    pub image: &'static str,
    pub last_checked: &'static str,
    pub issue: Option<&'static str>,
}

impl CropHealthEntry {
    /// The issue if one is recorded, otherwise when the crop was last checked
    pub fn summary(&self) -> String {
        match self.issue {
            Some(issue) => issue.to_string(),
            None => format!("Last checked: {}", self.last_checked),
        }
    }
}

pub const CROP_HEALTH: [CropHealthEntry; 3] = [
    CropHealthEntry {
        name: "Maize Field A",
        status: CropStatus::Healthy,
        image: "https://images.unsplash.com/photo-1594282416549-65cc3075533d?ixlib=rb-4.0.3",
        last_checked: "Today",
        issue: None,
    },
    CropHealthEntry {
        name: "Tomatoes",
        status: CropStatus::Warning,
        image: "https://images.unsplash.com/photo-1518977676601-b53f82aba655?ixlib=rb-4.0.3",
        last_checked: "Yesterday",
        issue: Some("Possible blight"),
    },
    CropHealthEntry {
        name: "Coffee Plants",
        status: CropStatus::Danger,
        image: "https://images.unsplash.com/photo-1586771107445-d3ca888129ce?ixlib=rb-4.0.3",
        last_checked: "2 days ago",
        issue: Some("Pest infestation"),
    },
];

/// Read-only access to the profile page tables
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileStore;

impl ProfileStore {
    pub fn profile(&self) -> &'static UserProfile {
        &PROFILE
    }

    pub fn crops(&self) -> &'static [CropHealthEntry] {
        &CROP_HEALTH
    }

    /// Labelled profile attribute at a display index
    pub fn field(&self, index: usize) -> Option<(&'static str, &'static str)> {
        PROFILE.field(index)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Advisory
// ─────────────────────────────────────────────────────────────────────────────

/// Tab grouping on the advisory page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryTab {
    #[default]
    Guides,
    Seasonal,
}

impl AdvisoryTab {
    pub const ALL: [AdvisoryTab; 2] = [AdvisoryTab::Guides, AdvisoryTab::Seasonal];

    pub fn label(&self) -> &'static str {
        match self {
            AdvisoryTab::Guides => "Guides",
            AdvisoryTab::Seasonal => "Seasonal",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            AdvisoryTab::Guides => AdvisoryTab::Seasonal,
            AdvisoryTab::Seasonal => AdvisoryTab::Guides,
        }
    }
}

/// A static informational card keyed by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdvisoryTopic {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub tab: AdvisoryTab,
}

impl AdvisoryTopic {
    /// Id with dashes replaced by spaces, as shown in loading notices
    pub fn display_id(&self) -> String {
        self.id.replace('-', " ")
    }
}

pub const ADVISORY_TOPICS: [AdvisoryTopic; 6] = [
    AdvisoryTopic {
        id: "pest-control",
        title: "Pest Control",
        content: "Effective pest management involves identification, monitoring, and control. Common methods include cultural practices, biological control, and as a last resort, chemical pesticides.",
        tab: AdvisoryTab::Guides,
    },
    AdvisoryTopic {
        id: "fertilization",
        title: "Fertilization",
        content: "Proper fertilization requires soil testing to determine nutrient needs. Organic options include compost and manure, while synthetic fertilizers provide precise nutrient ratios.",
        tab: AdvisoryTab::Guides,
    },
    AdvisoryTopic {
        id: "irrigation",
        title: "Irrigation",
        content: "Efficient water use depends on crop needs, soil type, and climate. Drip irrigation saves water, while sprinklers are good for large areas. Monitor soil moisture regularly.",
        tab: AdvisoryTab::Guides,
    },
    AdvisoryTopic {
        id: "harvesting",
        title: "Harvesting",
        content: "Harvest timing affects yield and quality. Most crops have visual indicators for readiness. Handle produce gently to prevent bruising and store properly immediately after harvest.",
        tab: AdvisoryTab::Guides,
    },
    AdvisoryTopic {
        id: "rainy-season",
        title: "Rainy Season Preparation",
        content: "Before rains: clear drainage, repair structures, apply pre-emergent herbicides. Choose disease-resistant varieties and have fungicides ready for humid conditions.",
        tab: AdvisoryTab::Seasonal,
    },
    AdvisoryTopic {
        id: "drought",
        title: "Drought Preparation",
        content: "Drought strategies: mulch to retain moisture, choose drought-resistant crops, reduce planting density, install efficient irrigation, and consider rainwater harvesting.",
        tab: AdvisoryTab::Seasonal,
    },
];

/// Find a topic by its id
pub fn lookup_topic(id: &str) -> Result<&'static AdvisoryTopic> {
    ADVISORY_TOPICS
        .iter()
        .find(|topic| topic.id == id)
        .ok_or_else(|| Error::topic_not_found(id))
}

/// Topics belonging to one tab, in catalog order
pub fn topics_in(tab: AdvisoryTab) -> impl Iterator<Item = &'static AdvisoryTopic> {
    ADVISORY_TOPICS.iter().filter(move |topic| topic.tab == tab)
}

// ─────────────────────────────────────────────────────────────────────────────
// Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Sample image used by the simulated camera capture
pub const CAPTURE_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1592210454359-9043f067919b?ixlib=rb-4.0.3";

/// Canned analysis outcome shown once a scan completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    pub diagnosis: &'static str,
    pub confidence_pct: u8,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
}

pub const DETECTION_REPORT: DetectionReport = DetectionReport {
    diagnosis: "Early Blight",
    confidence_pct: 87,
    description: "Fungal disease causing dark concentric spots on older leaves, usually starting near the base of the plant.",
    recommendations: &[
        "Remove and destroy affected leaves",
        "Apply a copper-based fungicide every 7-10 days",
        "Water at the base of plants and avoid wetting foliage",
        "Rotate crops next season",
    ],
};

// ─────────────────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────────────────

pub const MARKET_PRICES_MESSAGE: &str =
    "Here are today's market prices:\nMaize: $250/ton\nBeans: $400/ton\nCoffee: $5/kg";

/// Suggested prompts shown under the chat transcript
pub const QUICK_REPLIES: [&str; 4] = [
    "Pest control tips",
    "Fertilizer advice",
    "Irrigation schedule",
    "Market prices",
];

/// Assistant answer to any quick reply
pub const QUICK_REPLY_ANSWER: &str = "Here's the information you requested about that topic...";

pub fn quick_reply(index: usize) -> Option<&'static str> {
    QUICK_REPLIES.get(index).copied()
}

/// First assistant message of a session
pub fn chat_greeting(profile: &UserProfile) -> String {
    format!(
        "Hello {}! I'm your farming assistant. How can I help you today?",
        profile.first_name()
    )
}

/// Part-of-day greeting for a 24h clock hour
pub fn time_greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Morning",
        12..=17 => "Afternoon",
        _ => "Evening",
    }
}
