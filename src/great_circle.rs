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

//! The `great_circle` module contains functions for calculating distances
//! and bounding boxes on the surface of a sphere.
//!
//! The functions take and return raw radian values; they do not validate
//! their arguments. See `GeoPoint` for the checked interface.

use crate::units::earth::{FULL_CIRCLE, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use angle_sc::Radians;

/// Calculate the great circle angle between a pair of positions using the
/// spherical law of cosines.
/// * `lat1`, `lon1` - the first position, in radians.
/// * `lat2`, `lon2` - the second position, in radians.
///
/// Note: the `acos` argument is not clamped, so rounding errors for
/// coincident or antipodal positions propagate into the result.
///
/// # Examples
/// ```
/// use geo_point::great_circle::calculate_angle;
///
/// // a quarter of the way around the Equator
/// let angle = calculate_angle(0.0, 0.0, 0.0, core::f64::consts::FRAC_PI_2);
/// assert!((core::f64::consts::FRAC_PI_2 - angle.0).abs() < 1e-15);
/// ```
#[must_use]
pub fn calculate_angle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Radians {
    Radians(libm::acos(
        libm::sin(lat1) * libm::sin(lat2)
            + libm::cos(lat1) * libm::cos(lat2) * libm::cos(lon1 - lon2),
    ))
}

/// The corners of a bounding box, in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadianBounds {
    /// The latitude of the south west corner.
    pub min_lat: f64,
    /// The longitude of the south west corner.
    pub min_lon: f64,
    /// The latitude of the north east corner.
    pub max_lat: f64,
    /// The longitude of the north east corner.
    pub max_lon: f64,
}

/// Calculate the bounding box around a position.
/// * `lat`, `lon` - the centre of the box, in radians.
/// * `angular_radius` - the half width of the box, in radians.
///
/// If the box reaches either pole it becomes a band of latitude covering
/// every longitude. Otherwise the longitudes are wrapped across the
/// antimeridian.
#[must_use]
pub fn calculate_bounds(lat: f64, lon: f64, angular_radius: f64) -> RadianBounds {
    let mut min_lat = lat - angular_radius;
    let mut max_lat = lat + angular_radius;

    if min_lat > MIN_LAT && max_lat < MAX_LAT {
        let delta_lon = libm::asin(libm::sin(angular_radius) / libm::cos(lat));

        let mut min_lon = lon - delta_lon;
        if min_lon < MIN_LON {
            log::trace!("calculate_bounds: min_lon {min_lon} wrapped");
            min_lon += FULL_CIRCLE;
        }

        let mut max_lon = lon + delta_lon;
        if max_lon > MAX_LON {
            log::trace!("calculate_bounds: max_lon {max_lon} wrapped");
            max_lon -= FULL_CIRCLE;
        }

        RadianBounds {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    } else {
        log::trace!("calculate_bounds: polar band, lat: {min_lat}..{max_lat}");

        // a NaN must survive to be rejected by the GeoPoint constructor
        if min_lat < MIN_LAT {
            min_lat = MIN_LAT;
        }
        if max_lat > MAX_LAT {
            max_lat = MAX_LAT;
        }

        RadianBounds {
            min_lat,
            min_lon: MIN_LON,
            max_lat,
            max_lon: MAX_LON,
        }
    }
}
