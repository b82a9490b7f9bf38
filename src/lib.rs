// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! geo-point
//!
//! A latitude/longitude value type for location-aware applications, e.g.
//! mapping, proximity search and geofencing.
//!
//! A [`GeoPoint`] stores its position in both degrees and radians.
//! Both are calculated once when the point is constructed, so reading
//! either is a lookup that always returns the same value.
//!
//! The library models the Earth as a sphere with a mean radius of
//! 6371.01 km (3958.762079 miles) and calculates:
//!
//! - the [great circle](https://en.wikipedia.org/wiki/Great-circle_distance)
//!   distance between two points, using the spherical law of cosines;
//! - the south west and north east corners of a bounding box around a
//!   point, see [Finding Points Within a Distance of a Latitude/Longitude
//!   Using Bounding Coordinates](http://janmatuschek.de/LatitudeLongitudeBoundingCoordinates).
//!
//! Since the model is a sphere rather than an ellipsoid, distances may
//! differ from geodesic distances on the WGS-84 ellipsoid by up to 0.5%.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - for the `Degrees` and
//!   `Radians` newtypes;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to convert to and
//!   from `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - for `Metres` and
//!   `NauticalMiles`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod error;
pub mod great_circle;
pub mod numeric;
pub mod units;

pub use angle_sc::{Degrees, Radians, Validate};
pub use error::{Error, Field};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;
pub use units::earth::{EARTH_RADIUS_KM, EARTH_RADIUS_MI};
pub use units::{degrees_to_radians, kilometers_to_miles, miles_to_kilometers, radians_to_degrees};

use core::fmt;
use core::str::FromStr;
use numeric::{is_valid_number, validate_number};
use units::earth::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use units::{DEG2RAD, RAD2DEG};

/// A position on the surface of the Earth.
///
/// A `GeoPoint` is immutable, its latitude and longitude are stored in
/// both degrees and radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    /// The latitude in degrees.
    lat_deg: f64,
    /// The latitude in radians.
    lat_rad: f64,
    /// The longitude in degrees.
    lon_deg: f64,
    /// The longitude in radians.
    lon_rad: f64,
}

impl Validate for GeoPoint {
    /// Test whether a `GeoPoint` is valid.
    /// Whether -90° <= `latitude` <= 90° and -180° <= `longitude` <= 180°.
    fn is_valid(&self) -> bool {
        (MIN_LAT..=MAX_LAT).contains(&self.lat_rad) && (MIN_LON..=MAX_LON).contains(&self.lon_rad)
    }
}

impl GeoPoint {
    /// Constructor.
    /// * `lat` - the latitude.
    /// * `lon` - the longitude.
    /// * `in_radians` - true if `lat` and `lon` are in radians, false if
    ///   they are in degrees.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `lat` or `lon` is not a finite number.  
    /// Returns `Error::OutOfBounds` if `lat` is outside of ±90° or `lon` is
    /// outside of ±180°. The latitude is checked first.
    ///
    /// # Examples
    /// ```
    /// use geo_point::{Error, Field, GeoPoint};
    ///
    /// let statue_of_liberty = GeoPoint::new(40.689604, -74.04455, false)?;
    /// assert_eq!(40.689604, statue_of_liberty.latitude(false));
    ///
    /// assert_eq!(
    ///     Err(Error::OutOfBounds(Field::Latitude)),
    ///     GeoPoint::new(200.0, -74.04455, false)
    /// );
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(lat: f64, lon: f64, in_radians: bool) -> Result<Self, Error> {
        Self::from_values(Some(lat), Some(lon), in_radians)
    }

    /// Construct a `GeoPoint` from a latitude and longitude in degrees.
    ///
    /// # Errors
    ///
    /// See [`GeoPoint::new`].
    pub fn from_degrees(lat: Degrees, lon: Degrees) -> Result<Self, Error> {
        Self::new(lat.0, lon.0, false)
    }

    /// Construct a `GeoPoint` from a latitude and longitude in radians.
    ///
    /// # Errors
    ///
    /// See [`GeoPoint::new`].
    pub fn from_radians(lat: Radians, lon: Radians) -> Result<Self, Error> {
        Self::new(lat.0, lon.0, true)
    }

    fn from_values(lat: Option<f64>, lon: Option<f64>, in_radians: bool) -> Result<Self, Error> {
        let lat = validate_number(lat, Field::Latitude)?;
        let lon = validate_number(lon, Field::Longitude)?;

        let point = if in_radians {
            Self {
                lat_deg: lat * RAD2DEG,
                lat_rad: lat,
                lon_deg: lon * RAD2DEG,
                lon_rad: lon,
            }
        } else {
            Self {
                lat_deg: lat,
                lat_rad: lat * DEG2RAD,
                lon_deg: lon,
                lon_rad: lon * DEG2RAD,
            }
        };

        if !(MIN_LAT..=MAX_LAT).contains(&point.lat_rad) {
            log::debug!("GeoPoint: latitude out of bounds: {}", point.lat_deg);
            Err(Error::OutOfBounds(Field::Latitude))
        } else if !(MIN_LON..=MAX_LON).contains(&point.lon_rad) {
            log::debug!("GeoPoint: longitude out of bounds: {}", point.lon_deg);
            Err(Error::OutOfBounds(Field::Longitude))
        } else {
            Ok(point)
        }
    }

    /// The latitude, in radians if `in_radians` is true, otherwise in degrees.
    #[must_use]
    pub const fn latitude(&self, in_radians: bool) -> f64 {
        if in_radians {
            self.lat_rad
        } else {
            self.lat_deg
        }
    }

    /// The longitude, in radians if `in_radians` is true, otherwise in degrees.
    #[must_use]
    pub const fn longitude(&self, in_radians: bool) -> f64 {
        if in_radians {
            self.lon_rad
        } else {
            self.lon_deg
        }
    }

    /// The latitude and longitude in `Degrees`.
    #[must_use]
    pub const fn lat_lon_degrees(&self) -> (Degrees, Degrees) {
        (Degrees(self.lat_deg), Degrees(self.lon_deg))
    }

    /// The latitude and longitude in `Radians`.
    #[must_use]
    pub const fn lat_lon_radians(&self) -> (Radians, Radians) {
        (Radians(self.lat_rad), Radians(self.lon_rad))
    }

    /// Calculate the great circle distance to another `GeoPoint`.
    /// * `other` - the other point.
    /// * `in_kilometers` - true for the distance in kilometres, false for
    ///   statute miles.
    ///
    /// # Examples
    /// ```
    /// use geo_point::GeoPoint;
    ///
    /// let new_york = GeoPoint::new(40.689604, -74.04455, false)?;
    /// let washington = GeoPoint::new(38.890298, -77.035238, false)?;
    ///
    /// let miles = new_york.distance_to(&washington, false);
    /// assert!((201.637 - miles).abs() < 1e-3);
    ///
    /// let km = new_york.distance_to(&washington, true);
    /// assert!((324.504 - km).abs() < 1e-3);
    /// # Ok::<(), geo_point::Error>(())
    /// ```
    #[must_use]
    pub fn distance_to(&self, other: &Self, in_kilometers: bool) -> f64 {
        let radius = if in_kilometers {
            EARTH_RADIUS_KM
        } else {
            EARTH_RADIUS_MI
        };
        great_circle::calculate_angle(self.lat_rad, self.lon_rad, other.lat_rad, other.lon_rad).0
            * radius
    }

    /// Calculate the great circle distance to another `GeoPoint` in `Metres`.
    #[must_use]
    pub fn distance_metres(&self, other: &Self) -> Metres {
        Metres(1000.0 * self.distance_to(other, true))
    }

    /// Calculate the corners of a bounding box around this point.
    /// * `distance` - the distance from this point to the sides of the box.
    /// * `radius` - the radius of the sphere, in the same units as `distance`,
    ///   e.g. `EARTH_RADIUS_MI` or `EARTH_RADIUS_KM`.
    ///
    /// returns the south west and north east corners of the box.  
    /// If the box would reach a pole, it becomes a band of latitude that
    /// covers every longitude.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDistance` if `distance` is not a finite
    /// number greater than zero.  
    /// Returns `Error::InvalidInput(Field::Latitude)` if `radius` is NaN.
    ///
    /// # Examples
    /// ```
    /// use geo_point::{GeoPoint, EARTH_RADIUS_MI};
    ///
    /// let point = GeoPoint::new(40.689604, -74.04455, false)?;
    /// let (south_west, north_east) = point.bounding_coordinates(20.0, EARTH_RADIUS_MI)?;
    ///
    /// assert!(south_west.latitude(false) < point.latitude(false));
    /// assert!(point.longitude(false) < north_east.longitude(false));
    /// # Ok::<(), geo_point::Error>(())
    /// ```
    pub fn bounding_coordinates(&self, distance: f64, radius: f64) -> Result<(Self, Self), Error> {
        if !is_valid_number(distance) || distance <= 0.0 {
            return Err(Error::InvalidDistance);
        }

        let bounds = great_circle::calculate_bounds(self.lat_rad, self.lon_rad, distance / radius);
        Ok((
            Self::new(bounds.min_lat, bounds.min_lon, true)?,
            Self::new(bounds.max_lat, bounds.max_lon, true)?,
        ))
    }
}

impl fmt::Display for GeoPoint {
    /// Formats the latitude and longitude in degrees, e.g. "40.689604,-74.04455".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat_deg, self.lon_deg)
    }
}

impl FromStr for GeoPoint {
    type Err = Error;

    /// Parse a "latitude,longitude" pair in degrees.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(|part| part.trim().parse::<f64>().ok());
        let lat = parts.next().flatten();
        let lon = parts.next().flatten();
        if parts.next().is_some() {
            return Err(Error::InvalidArgument(Field::Point));
        }
        Self::from_values(lat, lon, false)
    }
}

impl TryFrom<&[f64]> for GeoPoint {
    type Error = Error;

    /// Construct a `GeoPoint` from a `[latitude, longitude]` slice in degrees.
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        if values.len() > 2 {
            return Err(Error::InvalidArgument(Field::Point));
        }
        Self::from_values(values.first().copied(), values.get(1).copied(), false)
    }
}

impl TryFrom<&LatLong> for GeoPoint {
    type Error = Error;

    fn try_from(a: &LatLong) -> Result<Self, Self::Error> {
        Self::from_degrees(a.lat(), a.lon())
    }
}

impl From<&GeoPoint> for LatLong {
    fn from(a: &GeoPoint) -> Self {
        Self::new(Degrees(a.lat_deg), Degrees(a.lon_deg))
    }
}
