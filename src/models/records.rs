use serde::Deserialize;

use crate::models::domain::{Property, User};

/// Raw user row as read from the users CSV
///
/// Every field is kept as an optional string so that one malformed cell
/// degrades to a worst-case sub-score instead of rejecting the whole row.
/// Only the identifier is mandatory.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "User ID", default)]
    pub user_id: Option<String>,
    #[serde(rename = "Budget", default)]
    pub budget: Option<String>,
    #[serde(rename = "Preferred Location", default)]
    pub preferred_location: Option<String>,
    #[serde(rename = "Preferred Type", default)]
    pub preferred_type: Option<String>,
    #[serde(rename = "Desired Size", default)]
    pub desired_size: Option<String>,
    #[serde(rename = "Desired Bedrooms", default)]
    pub desired_bedrooms: Option<String>,
    #[serde(rename = "Desired Bathrooms", default)]
    pub desired_bathrooms: Option<String>,
}

impl UserRecord {
    /// Convert the raw row into a domain user, or `None` when the ID is
    /// missing. Unparseable numerics become 0, which scores as no match.
    pub fn into_user(self) -> Option<User> {
        let user_id = non_empty(self.user_id)?;

        Some(User {
            user_id,
            budget: parse_f64(self.budget.as_deref()),
            preferred_location: non_empty(self.preferred_location).unwrap_or_default(),
            preferred_type: non_empty(self.preferred_type).unwrap_or_default(),
            desired_size: parse_f64(self.desired_size.as_deref()),
            desired_bedrooms: parse_count(self.desired_bedrooms.as_deref()),
            desired_bathrooms: parse_count(self.desired_bathrooms.as_deref()),
        })
    }
}

/// Raw property row as read from the properties CSV
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyRecord {
    #[serde(rename = "Property ID", default)]
    pub property_id: Option<String>,
    #[serde(rename = "Price", default)]
    pub price: Option<String>,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "Type", default)]
    pub property_type: Option<String>,
    #[serde(rename = "Size", default)]
    pub size: Option<String>,
    #[serde(rename = "Bedrooms", default)]
    pub bedrooms: Option<String>,
    #[serde(rename = "Bathrooms", default)]
    pub bathrooms: Option<String>,
    #[serde(rename = "Year Built", default)]
    pub year_built: Option<String>,
    #[serde(rename = "Condition", default)]
    pub condition: Option<String>,
}

impl PropertyRecord {
    /// Convert the raw row into a domain property, or `None` when the ID is
    /// missing. Unparseable numerics become 0, which scores as no match.
    pub fn into_property(self) -> Option<Property> {
        let property_id = non_empty(self.property_id)?;

        Some(Property {
            property_id,
            price: parse_f64(self.price.as_deref()),
            location: non_empty(self.location).unwrap_or_default(),
            property_type: non_empty(self.property_type).unwrap_or_default(),
            size: parse_f64(self.size.as_deref()),
            bedrooms: parse_count(self.bedrooms.as_deref()),
            bathrooms: parse_count(self.bathrooms.as_deref()),
            year_built: parse_year(self.year_built.as_deref()),
            condition: non_empty(self.condition).unwrap_or_default(),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_f64(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().replace(',', "").parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

fn parse_count(value: Option<&str>) -> u8 {
    // Counts sometimes arrive as "3.0" from spreadsheet exports
    let parsed = parse_f64(value);
    if parsed > u8::MAX as f64 {
        u8::MAX
    } else {
        parsed.round() as u8
    }
}

fn parse_year(value: Option<&str>) -> u16 {
    let parsed = parse_f64(value);
    if parsed > u16::MAX as f64 {
        u16::MAX
    } else {
        parsed.round() as u16
    }
}
