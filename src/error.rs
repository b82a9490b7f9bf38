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

//! The error module contains the errors returned when a `GeoPoint` or
//! one of the unit conversions is given an unusable value.

use core::fmt;

/// The argument that an [`Error`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Latitude,
    Longitude,
    /// A whole point, e.g. a slice or string holding a latitude and longitude.
    Point,
    DegreeValue,
    RadianValue,
    MileValue,
    KilometerValue,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Point => "point",
            Self::DegreeValue => "degree value",
            Self::RadianValue => "radian value",
            Self::MileValue => "mile value",
            Self::KilometerValue => "kilometer value",
        };
        f.write_str(name)
    }
}

/// The errors raised by `GeoPoint` construction and calculations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A numeric argument is missing, not a number or not finite.
    #[error("invalid {0}")]
    InvalidInput(Field),
    /// A latitude or longitude is outside of its valid range in radians.
    #[error("{0} out of bounds")]
    OutOfBounds(Field),
    /// A structural argument does not describe a point.
    #[error("invalid {0}")]
    InvalidArgument(Field),
    /// The bounding box distance is not a positive finite number.
    #[error("invalid distance")]
    InvalidDistance,
}
