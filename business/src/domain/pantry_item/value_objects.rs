use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::PantryItemError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    General,
    Dairy,
    Meat,
    Produce,
    Bakery,
    Snacks,
    Beverages,
    Household,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::General,
        Category::Dairy,
        Category::Meat,
        Category::Produce,
        Category::Bakery,
        Category::Snacks,
        Category::Beverages,
        Category::Household,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::General => write!(f, "General"),
            Category::Dairy => write!(f, "Dairy"),
            Category::Meat => write!(f, "Meat"),
            Category::Produce => write!(f, "Produce"),
            Category::Bakery => write!(f, "Bakery"),
            Category::Snacks => write!(f, "Snacks"),
            Category::Beverages => write!(f, "Beverages"),
            Category::Household => write!(f, "Household"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = PantryItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "General" => Ok(Category::General),
            "Dairy" => Ok(Category::Dairy),
            "Meat" => Ok(Category::Meat),
            "Produce" => Ok(Category::Produce),
            "Bakery" => Ok(Category::Bakery),
            "Snacks" => Ok(Category::Snacks),
            "Beverages" => Ok(Category::Beverages),
            "Household" => Ok(Category::Household),
            _ => Err(PantryItemError::InvalidCategory),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "pcs")]
    Pieces,
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "L")]
    Litres,
    #[serde(rename = "ml")]
    Millilitres,
    #[serde(rename = "pkt")]
    Packet,
    #[serde(rename = "box")]
    Box,
}

impl Unit {
    pub const ALL: [Unit; 7] = [
        Unit::Pieces,
        Unit::Kilograms,
        Unit::Grams,
        Unit::Litres,
        Unit::Millilitres,
        Unit::Packet,
        Unit::Box,
    ];
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Pieces => write!(f, "pcs"),
            Unit::Kilograms => write!(f, "kg"),
            Unit::Grams => write!(f, "g"),
            Unit::Litres => write!(f, "L"),
            Unit::Millilitres => write!(f, "ml"),
            Unit::Packet => write!(f, "pkt"),
            Unit::Box => write!(f, "box"),
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = PantryItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pcs" => Ok(Unit::Pieces),
            "kg" => Ok(Unit::Kilograms),
            "g" => Ok(Unit::Grams),
            "L" => Ok(Unit::Litres),
            "ml" => Ok(Unit::Millilitres),
            "pkt" => Ok(Unit::Packet),
            "box" => Ok(Unit::Box),
            _ => Err(PantryItemError::InvalidUnit),
        }
    }
}

/// A strictly positive, finite amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Quantity(f64);

impl Quantity {
    pub const ONE: Quantity = Quantity(1.0);

    pub fn new(value: f64) -> Result<Self, PantryItemError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PantryItemError::InvalidQuantity);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl TryFrom<f64> for Quantity {
    type Error = PantryItemError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Quantity::new(value)
    }
}

/// An expiry as entered by the caller: either a calendar date or an exact instant.
///
/// Date-only values are normalized to midnight (UTC) by [`ExpiryInput::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpiryInput {
    Timestamp(DateTime<Utc>),
    Date(NaiveDate),
}

impl ExpiryInput {
    pub fn normalize(self) -> DateTime<Utc> {
        match self {
            ExpiryInput::Timestamp(at) => at,
            ExpiryInput::Date(date) => date.and_time(NaiveTime::MIN).and_utc(),
        }
    }
}

impl std::str::FromStr for ExpiryInput {
    type Err = PantryItemError;

    /// Accepts an RFC 3339 instant or a `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(at) = DateTime::parse_from_rfc3339(s) {
            return Ok(ExpiryInput::Timestamp(at.with_timezone(&Utc)));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(ExpiryInput::Date)
            .map_err(|_| PantryItemError::InvalidExpiry)
    }
}

impl From<DateTime<Utc>> for ExpiryInput {
    fn from(at: DateTime<Utc>) -> Self {
        ExpiryInput::Timestamp(at)
    }
}

impl From<NaiveDate> for ExpiryInput {
    fn from(date: NaiveDate) -> Self {
        ExpiryInput::Date(date)
    }
}
