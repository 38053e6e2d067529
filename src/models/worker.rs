use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub skill: String,
    pub rate: f64,
    pub rating: f64,
    pub location: String,
    pub available: String,
}

impl Worker {
    /// Shape checks beyond what deserialization enforces. A stored catalog
    /// containing an invalid worker is treated as corruption by the caller.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.id.is_empty() {
            return Err(AppError::InvalidInput("worker id must not be empty".into()));
        }
        if !self.rate.is_finite() || self.rate < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "worker {} has invalid rate: {}",
                self.id, self.rate
            )));
        }
        if !self.rating.is_finite() || !(0.0..=5.0).contains(&self.rating) {
            return Err(AppError::InvalidInput(format!(
                "worker {} has invalid rating: {}",
                self.id, self.rating
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    None,
    RateLow,
    RateHigh,
    RatingHigh,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::RateLow => "rate_low",
            SortKey::RateHigh => "rate_high",
            SortKey::RatingHigh => "rating_high",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "rate_low" => SortKey::RateLow,
            "rate_high" => SortKey::RateHigh,
            "rating_high" => SortKey::RatingHigh,
            _ => SortKey::None,
        }
    }
}

pub fn default_workers() -> Vec<Worker> {
    let seed = [
        ("w1", "Ramesh", "Plumbing", 25.0, 4.6, "South Bend", "Today"),
        ("w2", "Suresh", "Electrician", 30.0, 4.7, "Mishawaka", "Tomorrow"),
        ("w3", "Kiran", "House Cleaning", 18.0, 4.5, "South Bend", "Today"),
        ("w4", "Mahesh", "Painting", 22.0, 4.4, "Elkhart", "This Week"),
        ("w5", "Arjun", "Moving Help", 20.0, 4.3, "South Bend", "Today"),
        ("w6", "Naveen", "Carpentry", 28.0, 4.6, "Granger", "This Week"),
    ];

    seed.iter()
        .map(|(id, name, skill, rate, rating, location, available)| Worker {
            id: id.to_string(),
            name: name.to_string(),
            skill: skill.to_string(),
            rate: *rate,
            rating: *rating,
            location: location.to_string(),
            available: available.to_string(),
        })
        .collect()
}
