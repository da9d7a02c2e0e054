//! # Event Catalog
//!
//! Organization reference data used by the conversions.
//!
//! ## Overview
//!
//! | Table            | Keyed by                      | Value                          |
//! |------------------|-------------------------------|--------------------------------|
//! | NFHS factors     | gender → stroke → distance    | multiplicative factor          |
//! | USAS increments  | stroke                        | seconds added per 50 swum      |
//!
//! A missing entry is an ordinary answer ("no conversion defined"), so the
//! lookups return `Option` rather than an error.
//!
//! The standard tables are built once on first use and shared read-only
//! through [`EventCatalog::global`]. Conversions take a `&EventCatalog`, so
//! tests and callers can substitute their own tables.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::event::{Gender, Stroke};

static STANDARD_CATALOG: Lazy<EventCatalog> = Lazy::new(EventCatalog::standard);

/// NFHS short course factors as (gender, stroke, distance, factor).
///
/// SCM → SCY multiplies by the factor, SCY → SCM divides. The 400 and 500
/// freestyle rows share a factor because NFHS pairs those two races.
const NFHS_FACTORS: [(Gender, Stroke, u32, f64); 18] = [
    (Gender::Mens, Stroke::Freestyle, 50, 0.8937),
    (Gender::Mens, Stroke::Freestyle, 100, 0.9001),
    (Gender::Mens, Stroke::Freestyle, 200, 0.9025),
    (Gender::Mens, Stroke::Freestyle, 400, 1.139),
    (Gender::Mens, Stroke::Freestyle, 500, 1.139),
    (Gender::Mens, Stroke::Backstroke, 100, 0.9001),
    (Gender::Mens, Stroke::Breaststroke, 100, 0.9009),
    (Gender::Mens, Stroke::Butterfly, 100, 0.8977),
    (Gender::Mens, Stroke::IndividualMedley, 200, 0.9001),
    (Gender::Womens, Stroke::Freestyle, 50, 0.8969),
    (Gender::Womens, Stroke::Freestyle, 100, 0.8993),
    (Gender::Womens, Stroke::Freestyle, 200, 0.9025),
    (Gender::Womens, Stroke::Freestyle, 400, 1.140),
    (Gender::Womens, Stroke::Freestyle, 500, 1.140),
    (Gender::Womens, Stroke::Backstroke, 100, 0.9001),
    (Gender::Womens, Stroke::Breaststroke, 100, 0.8993),
    (Gender::Womens, Stroke::Butterfly, 100, 0.9001),
    (Gender::Womens, Stroke::IndividualMedley, 200, 0.9009),
];

/// USA Swimming long/short meters increments, seconds per 50 swum.
const USAS_INCREMENTS: [(Stroke, f64); 5] = [
    (Stroke::Freestyle, 0.80),
    (Stroke::Backstroke, 0.60),
    (Stroke::Breaststroke, 1.00),
    (Stroke::Butterfly, 0.70),
    (Stroke::IndividualMedley, 0.80),
];

/// Read-only conversion tables for every organization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCatalog {
    nfhs_factors: HashMap<Gender, HashMap<Stroke, HashMap<u32, f64>>>,
    usas_increments: HashMap<Stroke, f64>,
}

impl EventCatalog {
    /// A catalog with no entries at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// The published NFHS and USA Swimming tables
    pub fn standard() -> Self {
        let catalog = NFHS_FACTORS
            .iter()
            .fold(Self::empty(), |catalog, &(gender, stroke, distance, factor)| {
                catalog.with_nfhs_factor(gender, stroke, distance, factor)
            });
        USAS_INCREMENTS
            .iter()
            .fold(catalog, |catalog, &(stroke, increment)| {
                catalog.with_usas_increment(stroke, increment)
            })
    }

    /// Process-wide shared copy of [`EventCatalog::standard`]
    pub fn global() -> &'static EventCatalog {
        &STANDARD_CATALOG
    }

    /// Builder: add or replace an NFHS factor
    pub fn with_nfhs_factor(mut self, gender: Gender, stroke: Stroke, distance: u32, factor: f64) -> Self {
        self.nfhs_factors
            .entry(gender)
            .or_default()
            .entry(stroke)
            .or_default()
            .insert(distance, factor);
        self
    }

    /// Builder: add or replace a USAS increment
    pub fn with_usas_increment(mut self, stroke: Stroke, seconds_per_50: f64) -> Self {
        self.usas_increments.insert(stroke, seconds_per_50);
        self
    }

    /// NFHS factor for the event, if NFHS defines one
    pub fn nfhs_factor(&self, gender: Gender, stroke: Stroke, distance: u32) -> Option<f64> {
        self.nfhs_factors
            .get(&gender)?
            .get(&stroke)?
            .get(&distance)
            .copied()
    }

    /// USAS meters increment (seconds per 50) for the stroke
    pub fn usas_increment(&self, stroke: Stroke) -> Option<f64> {
        self.usas_increments.get(&stroke).copied()
    }

    /// Number of NFHS events with a factor
    pub fn nfhs_event_count(&self) -> usize {
        self.nfhs_factors
            .values()
            .flat_map(|strokes| strokes.values())
            .map(|distances| distances.len())
            .sum()
    }
}
