//! Decides which activity categories and accommodation tier apply to a day.
//!
//! Structured data wins: a day with `tags` is classified from its tags only,
//! and an explicit `accommodation_tier` overrides the label. Days without
//! them fall back to case-insensitive substring matching on free text.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use crate::{
    error::ConfigError,
    models::itinerary::{AccommodationTier, ActivityTag, ItineraryDay},
    services::policy::KeywordTable,
};

/// Activities that put a guide on every day of the trip.
pub const GUIDED_TAGS: [ActivityTag; 3] =
    [ActivityTag::Safari, ActivityTag::Hiking, ActivityTag::Trekking];

#[derive(Debug, Clone)]
pub struct DayClassifier {
    activities: HashMap<ActivityTag, Regex>,
    luxury: Option<Regex>,
}

fn keyword_matcher(keywords: &[String]) -> Result<Option<Regex>, regex::Error> {
    let alternatives: Vec<String> = keywords
        .iter()
        .filter(|k| !k.is_empty())
        .map(|k| regex::escape(k))
        .collect();
    if alternatives.is_empty() {
        return Ok(None);
    }
    RegexBuilder::new(&alternatives.join("|"))
        .case_insensitive(true)
        .build()
        .map(Some)
}

impl DayClassifier {
    pub fn new(keywords: &KeywordTable) -> Result<Self, ConfigError> {
        let mut activities = HashMap::new();
        for (tag, words) in &keywords.activities {
            if let Some(matcher) = keyword_matcher(words)? {
                activities.insert(*tag, matcher);
            }
        }

        Ok(Self {
            activities,
            luxury: keyword_matcher(&keywords.luxury_accommodation)?,
        })
    }

    pub fn has_tag(&self, day: &ItineraryDay, tag: ActivityTag) -> bool {
        if !day.tags.is_empty() {
            return day.tags.contains(&tag);
        }
        self.activities
            .get(&tag)
            .is_some_and(|re| day.activities.iter().any(|label| re.is_match(label)))
    }

    pub fn has_any_tag(&self, day: &ItineraryDay, tags: &[ActivityTag]) -> bool {
        tags.iter().any(|tag| self.has_tag(day, *tag))
    }

    pub fn itinerary_has_any(&self, days: &[ItineraryDay], tags: &[ActivityTag]) -> bool {
        days.iter().any(|day| self.has_any_tag(day, tags))
    }

    pub fn is_luxury(&self, day: &ItineraryDay) -> bool {
        match day.accommodation_tier {
            Some(tier) => tier == AccommodationTier::Luxury,
            None => self
                .luxury
                .as_ref()
                .is_some_and(|re| re.is_match(&day.accommodation)),
        }
    }
}
