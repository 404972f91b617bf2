//! # Gazetteer
//!
//! Postcode to base wind speed lookup. The engine only depends on the
//! [`Gazetteer`] trait; [`RegionalGazetteer`] is an in-memory fallback keyed
//! by UK postcode area (the leading letters), using conservative regional
//! readings of the wind map.
//!
//! ```rust
//! use wind_core::gazetteer::{Confidence, Gazetteer, RegionalGazetteer};
//!
//! let found = RegionalGazetteer.lookup("KW15 1AB");
//! assert_eq!(found.base_wind_speed, 26.0);
//! assert_eq!(found.confidence, Confidence::High);
//!
//! let unknown = RegionalGazetteer.lookup("");
//! assert_eq!(unknown.confidence, Confidence::Low);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base wind speed used when a postcode cannot be resolved (m/s)
pub const FALLBACK_WIND_SPEED: f64 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Low,
}

/// Result of a postcode lookup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GazetteerMatch {
    pub base_wind_speed: f64,
    pub confidence: Confidence,
}

/// Postcode → base wind speed collaborator.
///
/// Implementations must be pure: the same postcode always yields the same match.
pub trait Gazetteer: Send + Sync {
    fn lookup(&self, postcode: &str) -> GazetteerMatch;
}

#[rustfmt::skip]
static AREA_WIND_SPEEDS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // Scotland
        ("AB", 24.0), ("DD", 24.0), ("DG", 23.5), ("EH", 24.0), ("FK", 23.5),
        ("G", 23.5), ("HS", 26.0), ("IV", 25.0), ("KA", 23.5), ("KW", 26.0),
        ("KY", 24.0), ("ML", 23.5), ("PA", 24.0), ("PH", 24.5), ("TD", 23.5),
        ("ZE", 27.0),
        // Northern England
        ("CA", 23.0), ("DH", 22.5), ("DL", 22.5), ("NE", 23.0), ("SR", 22.5),
        ("TS", 22.5),
        // Wales
        ("CF", 23.0), ("LL", 23.5), ("SA", 23.5), ("SY", 22.5), ("LD", 22.5),
        ("NP", 22.5),
        // South West
        ("EX", 22.5), ("PL", 23.5), ("TQ", 22.5), ("TR", 24.0),
        // South East
        ("BN", 22.5), ("CT", 23.0), ("TN", 22.0), ("ME", 22.5), ("RH", 22.0),
        // London
        ("E", 22.0), ("EC", 22.0), ("N", 22.0), ("NW", 22.0), ("SE", 22.0),
        ("SW", 22.0), ("W", 22.0), ("WC", 22.0),
        // Midlands
        ("B", 21.5), ("CV", 21.5), ("DE", 21.5), ("LE", 21.5), ("NG", 21.5),
        ("NN", 21.5), ("WS", 21.5), ("WV", 21.5),
    ]
    .into_iter()
    .collect()
});

/// Regional postcode-area table
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionalGazetteer;

/// Leading letters of the outward code ("SW1A 1AA" → "SW", "G12" → "G")
pub fn postcode_area(postcode: &str) -> String {
    postcode
        .trim()
        .chars()
        .take(2)
        .take_while(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

impl Gazetteer for RegionalGazetteer {
    fn lookup(&self, postcode: &str) -> GazetteerMatch {
        let area = postcode_area(postcode);
        match AREA_WIND_SPEEDS.get(area.as_str()) {
            Some(&speed) => GazetteerMatch {
                base_wind_speed: speed,
                confidence: Confidence::High,
            },
            None => {
                tracing::debug!(postcode, area = %area, "postcode area not in regional table");
                GazetteerMatch {
                    base_wind_speed: FALLBACK_WIND_SPEED,
                    confidence: Confidence::Low,
                }
            }
        }
    }
}
