// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use forno_core::ItemId;

use crate::catalog::ValidationError;

/// Closed set of deal rule kinds. Each variant owns exactly one
/// eligibility predicate and one price formula; an id that maps to no
/// variant fails closed at parse time instead of falling through to a
/// runtime default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealKind {
    TwoPizzaFreeOne,
    Bundle,
    StudentDiscount,
    LunchCombo,
    LateNight,
}

impl DealKind {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "two_pizza_free_one" => Ok(Self::TwoPizzaFreeOne),
            "bundle" => Ok(Self::Bundle),
            "student_discount" => Ok(Self::StudentDiscount),
            "lunch_combo" => Ok(Self::LunchCombo),
            "late_night" => Ok(Self::LateNight),
            other => Err(ValidationError(format!("unknown deal kind `{other}`"))),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TwoPizzaFreeOne => "two_pizza_free_one",
            Self::Bundle => "bundle",
            Self::StudentDiscount => "student_discount",
            Self::LunchCombo => "lunch_combo",
            Self::LateNight => "late_night",
        }
    }
}

impl Display for DealKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open hour window `[start, end)`, wrapping midnight when
/// `start > end`. Hours are 0..=23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HourRange {
    start: u32,
    end: u32,
}

impl HourRange {
    /// The late-night ordering window: `[22:00, 24:00) ∪ [0:00, 2:00)`.
    pub const LATE_NIGHT: Self = Self { start: 22, end: 2 };

    pub fn new(start: u32, end: u32) -> Result<Self, ValidationError> {
        if start > 23 || end > 23 {
            return Err(ValidationError(
                "hour range bounds must be within 0..=23".to_string(),
            ));
        }
        if start == end {
            return Err(ValidationError(
                "hour range must not be empty".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(self) -> u32 {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> u32 {
        self.end
    }

    #[must_use]
    pub const fn contains(self, hour: u32) -> bool {
        if self.start < self.end {
            hour >= self.start && hour < self.end
        } else {
            hour >= self.start || hour < self.end
        }
    }
}

/// Validity window of a deal offer: weekday set and/or hour range. An
/// empty weekday list means every day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TimeWindow {
    #[serde(default)]
    pub weekdays: Vec<Weekday>,
    #[serde(default)]
    pub hours: Option<HourRange>,
}

impl TimeWindow {
    #[must_use]
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        let weekday_ok =
            self.weekdays.is_empty() || self.weekdays.iter().any(|day| *day == at.weekday());
        let hour_ok = self.hours.map_or(true, |range| range.contains(at.hour()));
        weekday_ok && hour_ok
    }
}

/// A promotional bundle with its own eligibility rule and price formula.
/// `list_price` is the charged base for fixed-price kinds and a nominal
/// display price for the formula-priced ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DealOffer {
    pub id: ItemId,
    pub title: String,
    pub list_price: Decimal,
    pub kind: DealKind,
    #[serde(default)]
    pub time_window: Option<TimeWindow>,
    pub active: bool,
    #[serde(default)]
    pub featured: bool,
}

impl DealOffer {
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        list_price: Decimal,
        kind: DealKind,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError("deal title must not be empty".to_string()));
        }
        if list_price.is_sign_negative() {
            return Err(ValidationError(format!(
                "deal {id} list price must be >= 0"
            )));
        }
        Ok(Self {
            id,
            title,
            list_price,
            kind,
            time_window: None,
            active: true,
            featured: false,
        })
    }

    #[must_use]
    pub fn with_time_window(mut self, window: TimeWindow) -> Self {
        self.time_window = Some(window);
        self
    }

    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }
}

/// Read-only deal offer collection keyed by offer id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DealBook {
    offers: BTreeMap<ItemId, DealOffer>,
}

impl DealBook {
    pub fn from_offers(offers: Vec<DealOffer>) -> Result<Self, ValidationError> {
        let mut map = BTreeMap::new();
        for offer in offers {
            let id = offer.id.clone();
            if map.insert(id.clone(), offer).is_some() {
                return Err(ValidationError(format!("duplicate deal id `{id}`")));
            }
        }
        Ok(Self { offers: map })
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&DealOffer> {
        self.offers.get(id)
    }

    pub fn offers(&self) -> impl Iterator<Item = &DealOffer> {
        self.offers.values()
    }

    /// The "active + featured deals" storefront query.
    #[must_use]
    pub fn active_featured(&self) -> Vec<&DealOffer> {
        self.offers
            .values()
            .filter(|offer| offer.active && offer.featured)
            .collect()
    }
}
