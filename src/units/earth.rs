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

//! The earth module contains the parameters of the spherical Earth model
//! and the latitude and longitude bounds, in radians.

use core::f64::consts::PI;

/// The mean radius of the Earth in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.01;

/// The mean radius of the Earth in statute miles.
pub const EARTH_RADIUS_MI: f64 = 3_958.762_079;

/// The maximum latitude: 90 degrees.
pub const MAX_LAT: f64 = PI / 2.0;

/// The minimum latitude: -90 degrees.
pub const MIN_LAT: f64 = -MAX_LAT;

/// The maximum longitude: 180 degrees.
pub const MAX_LON: f64 = PI;

/// The minimum longitude: -180 degrees.
pub const MIN_LON: f64 = -MAX_LON;

/// A full circle: 360 degrees.
pub const FULL_CIRCLE: f64 = PI * 2.0;
