//! Station type.

use serde::{Deserialize, Serialize};

/// A named stop in the rail network.
///
/// The name is the station's identity everywhere in the crate. The
/// coordinates are carried for display and are never read by the search.
///
/// # Examples
///
/// ```
/// use u_railnet::models::Station;
///
/// let s = Station::new("Den Helder", 52.96, 4.76);
/// assert_eq!(s.name(), "Den Helder");
/// assert_eq!(s.x(), 52.96);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    name: String,
    x: f64,
    y: f64,
}

impl Station {
    /// Creates a station at the given display coordinates.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Unique station name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }
}
