//! Data handed to the interactive globe surface.
//!
//! The globe renderer itself lives outside this crate; it is reached only
//! through the [`GlobeSurface`] trait. This module owns the point data and
//! the built-in city dataset.

mod cities;

pub use cities::{
    city_stats, convert_cities_to_points, population_color, population_size, top_cities, City,
    CityStats,
};
use serde::{Deserialize, Serialize};

use crate::chem::Color;
use crate::options::DisplayOptions;

/// One marker on the globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobePoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Marker altitude/size in globe radii.
    pub size: f32,
    /// Marker color.
    pub color: Color,
    /// Tooltip markup.
    pub label: String,
    /// Source record, when the point came from the city dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,
}

/// Opaque interface to whatever draws the globe.
pub trait GlobeSurface {
    /// Replace all markers.
    fn set_points(&mut self, points: &[GlobePoint]);

    /// Auto-rotation speed; 0 stops rotation.
    fn set_rotation_speed(&mut self, speed: f32);

    /// Release the surface's resources. No other method is called
    /// afterwards.
    fn destroy(&mut self);
}

/// Globe spin for the display options: `globe_rotation_speed`, or 0 when
/// auto-rotate is off.
#[must_use]
pub fn globe_rotation_speed(display: &DisplayOptions) -> f32 {
    if display.auto_rotate {
        display.globe_rotation_speed
    } else {
        0.0
    }
}

/// Load the city dataset onto `surface` and set its spin from `display`.
pub fn show_cities<S: GlobeSurface + ?Sized>(surface: &mut S, display: &DisplayOptions) {
    let points = convert_cities_to_points();
    log::debug!("globe: showing {} city points", points.len());
    surface.set_points(&points);
    surface.set_rotation_speed(globe_rotation_speed(display));
}
