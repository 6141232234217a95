//! Aircraft catalog loading and lookup.
//!
//! Catalogs are JSON documents of the form `{ "aircraft": [ ... ] }` where
//! each entry deserializes into an [`AircraftProfile`]. Every profile is
//! validated on load, so a malformed envelope is a configuration error and
//! never reaches evaluation.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::envelope::{Envelope, Point};
use crate::error::{Error, Result};

use super::profile::{AircraftProfile, ArmCoefficients, AxisBounds, AxisMode};

/// Minimum Jaro-Winkler similarity for a registration to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;
const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    aircraft: Vec<AircraftProfile>,
}

/// Collection of aircraft profiles keyed by registration.
#[derive(Debug, Clone, Default)]
pub struct AircraftCatalog {
    aircraft: HashMap<String, AircraftProfile>,
    source: Option<PathBuf>,
}

impl AircraftCatalog {
    /// Load a catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        debug!(
            path = %path.display(),
            count = catalog.len(),
            "loaded aircraft catalog"
        );
        Ok(catalog)
    }

    /// Load a catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::from_profiles(document.aircraft)
    }

    /// Build a catalog from profiles, validating each one.
    pub fn from_profiles<I>(profiles: I) -> Result<Self>
    where
        I: IntoIterator<Item = AircraftProfile>,
    {
        let mut aircraft = HashMap::new();

        for mut profile in profiles {
            profile.registration = profile.registration.trim().to_string();
            profile.validate()?;

            let key = normalize_registration(&profile.registration);
            if aircraft.contains_key(&key) {
                return Err(Error::DuplicateAircraft { registration: key });
            }
            aircraft.insert(key, profile);
        }

        Ok(Self {
            aircraft,
            source: None,
        })
    }

    /// Profiles shipped with the application.
    pub fn builtin() -> Self {
        let aircraft = [f_hdlv(), f_hdlt()]
            .into_iter()
            .map(|p| (normalize_registration(&p.registration), p))
            .collect();
        Self {
            aircraft,
            source: None,
        }
    }

    /// Get a profile by registration (case-insensitive).
    pub fn get(&self, registration: &str) -> Option<&AircraftProfile> {
        self.aircraft.get(&normalize_registration(registration))
    }

    /// Get a profile by registration, suggesting close matches when it is unknown.
    pub fn require(&self, registration: &str) -> Result<&AircraftProfile> {
        self.get(registration)
            .ok_or_else(|| Error::UnknownAircraft {
                registration: registration.trim().to_string(),
                suggestions: self.suggestions_for(registration),
            })
    }

    fn suggestions_for(&self, registration: &str) -> Vec<String> {
        let wanted = normalize_registration(registration);
        let mut scored: Vec<(f64, &str)> = self
            .aircraft
            .iter()
            .map(|(key, p)| (strsim::jaro_winkler(&wanted, key), p.registration.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Get a sorted list of all registrations.
    pub fn registrations(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .aircraft
            .values()
            .map(|p| p.registration.clone())
            .collect();
        names.sort();
        names
    }

    /// Get all profiles sorted by registration.
    pub fn profiles_sorted(&self) -> Vec<&AircraftProfile> {
        let mut profiles: Vec<&AircraftProfile> = self.aircraft.values().collect();
        profiles.sort_by(|a, b| a.registration.cmp(&b.registration));
        profiles
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Normalize a registration for case-insensitive lookup.
fn normalize_registration(registration: &str) -> String {
    registration.trim().to_uppercase()
}

fn points(raw: &[(f64, f64)]) -> Envelope {
    Envelope::new(raw.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

fn f_hdlv() -> AircraftProfile {
    AircraftProfile::new(
        "F-HDLV",
        345.9,
        ArmCoefficients::new(0.26, 0.55, 1.08, 0.68),
        points(&[
            (0.25, 373.0),
            (0.31, 373.0),
            (0.37, 398.0),
            (0.40, 456.0),
            (0.40, 600.0),
            (0.35, 600.0),
            (0.25, 373.0),
        ]),
    )
    .with_title("Masse et Centrage F-HDLV")
    .with_flight_manual("/docs/rtc.pdf")
}

fn f_hdlt() -> AircraftProfile {
    AircraftProfile::new(
        "F-HDLT",
        365.0,
        ArmCoefficients::new(0.27, 0.54, 1.05, 0.67),
        points(&[
            (92.0, 374.0),
            (106.0, 374.0),
            (144.0, 400.0),
            (184.0, 455.0),
            (240.0, 600.0),
            (224.0, 600.0),
            (170.0, 525.0),
            (92.0, 374.0),
        ]),
    )
    .with_title("Masse et Centrage F-HDLT")
    .with_axis_mode(AxisMode::Moment)
    .with_x_axis_bounds(AxisBounds::new(70.0, 260.0))
    .with_flight_manual("/docs/fgxyz.pdf")
}
