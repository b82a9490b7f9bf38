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

//! The units module contains the conversion factors between degrees and
//! radians and between statute miles and kilometres, together with
//! checked functions to perform the conversions.

#![allow(clippy::excessive_precision)]

pub mod earth;

use crate::error::{Error, Field};
use crate::numeric::validate_number;
use core::f64::consts::PI;

/// Degrees to radians conversion factor.
pub const DEG2RAD: f64 = PI / 180.0;

/// Radians to degrees conversion factor.
pub const RAD2DEG: f64 = 180.0 / PI;

/// Statute miles to kilometres conversion factor.
pub const MI2KM: f64 = 1.6093439999999999;

/// Kilometres to statute miles conversion factor.
pub const KM2MI: f64 = 0.621371192237334;

/// Convert an angle in degrees to radians.
/// * `value` - the angle in degrees.
///
/// # Errors
///
/// Returns `Error::InvalidInput(Field::DegreeValue)` if `value` is not a
/// finite number.
///
/// # Examples
/// ```
/// use geo_point::units::degrees_to_radians;
///
/// assert_eq!(Ok(core::f64::consts::PI), degrees_to_radians(180.0));
/// ```
pub fn degrees_to_radians(value: f64) -> Result<f64, Error> {
    validate_number(Some(value), Field::DegreeValue).map(|v| v * DEG2RAD)
}

/// Convert an angle in radians to degrees.
/// * `value` - the angle in radians.
///
/// # Errors
///
/// Returns `Error::InvalidInput(Field::RadianValue)` if `value` is not a
/// finite number.
///
/// # Examples
/// ```
/// use geo_point::units::radians_to_degrees;
///
/// assert_eq!(Ok(180.0), radians_to_degrees(core::f64::consts::PI));
/// ```
pub fn radians_to_degrees(value: f64) -> Result<f64, Error> {
    validate_number(Some(value), Field::RadianValue).map(|v| v * RAD2DEG)
}

/// Convert a distance in statute miles to kilometres.
/// * `value` - the distance in miles.
///
/// # Errors
///
/// Returns `Error::InvalidInput(Field::MileValue)` if `value` is not a
/// finite number.
pub fn miles_to_kilometers(value: f64) -> Result<f64, Error> {
    validate_number(Some(value), Field::MileValue).map(|v| v * MI2KM)
}

/// Convert a distance in kilometres to statute miles.
/// * `value` - the distance in kilometres.
///
/// # Errors
///
/// Returns `Error::InvalidInput(Field::KilometerValue)` if `value` is not
/// a finite number.
pub fn kilometers_to_miles(value: f64) -> Result<f64, Error> {
    validate_number(Some(value), Field::KilometerValue).map(|v| v * KM2MI)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_degrees_to_radians() -> Result<(), Error> {
        assert_eq!(0.0, degrees_to_radians(0.0)?);
        assert_eq!(PI / 4.0, degrees_to_radians(45.0)?);
        assert_eq!(PI / 2.0, degrees_to_radians(90.0)?);
        assert_eq!(3.0 * PI / 4.0, degrees_to_radians(135.0)?);
        assert_eq!(PI, degrees_to_radians(180.0)?);
        assert_eq!(5.0 * PI / 4.0, degrees_to_radians(225.0)?);
        assert_eq!(3.0 * PI / 2.0, degrees_to_radians(270.0)?);
        assert_eq!(7.0 * PI / 4.0, degrees_to_radians(315.0)?);
        assert_eq!(2.0 * PI, degrees_to_radians(360.0)?);
        assert_eq!(PI / 2.0 + PI * 2.0, degrees_to_radians(450.0)?);
        assert_eq!(PI + PI * 2.0, degrees_to_radians(540.0)?);
        assert_eq!(PI / 2.0 + PI * 2.0 * 2.0, degrees_to_radians(810.0)?);

        Ok(())
    }

    #[test]
    fn test_radians_to_degrees() -> Result<(), Error> {
        assert_eq!(0.0, radians_to_degrees(0.0)?);
        assert_eq!(45.0, radians_to_degrees(PI / 4.0)?);
        assert_eq!(90.0, radians_to_degrees(PI / 2.0)?);
        assert_eq!(135.0, radians_to_degrees(3.0 * PI / 4.0)?);
        assert_eq!(180.0, radians_to_degrees(PI)?);
        assert_eq!(225.0, radians_to_degrees(5.0 * PI / 4.0)?);
        assert_eq!(270.0, radians_to_degrees(3.0 * PI / 2.0)?);
        assert_eq!(315.0, radians_to_degrees(7.0 * PI / 4.0)?);
        assert_eq!(360.0, radians_to_degrees(PI * 2.0)?);
        assert_eq!(450.0, radians_to_degrees(PI / 2.0 + PI * 2.0)?);
        assert_eq!(540.0, radians_to_degrees(PI + PI * 2.0)?);
        assert_eq!(810.0, radians_to_degrees(PI / 2.0 + PI * 2.0 * 2.0)?);

        Ok(())
    }

    #[test]
    fn test_miles_and_kilometers() -> Result<(), Error> {
        assert_eq!(1.6093439999999999, miles_to_kilometers(1.0)?);
        assert_eq!(8.046719999999999, miles_to_kilometers(5.0)?);
        assert_eq!(0.621371192237334, kilometers_to_miles(1.0)?);
        assert_eq!(3.1068559611866697, kilometers_to_miles(5.0)?);

        for miles in [1.0, 5.0, 20.0] {
            let result = kilometers_to_miles(miles_to_kilometers(miles)?)?;
            assert!(angle_sc::is_within_tolerance(miles, result, 1e-12));
        }

        Ok(())
    }

    #[test]
    fn test_invalid_values() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                Err(Error::InvalidInput(Field::DegreeValue)),
                degrees_to_radians(value)
            );
            assert_eq!(
                Err(Error::InvalidInput(Field::RadianValue)),
                radians_to_degrees(value)
            );
            assert_eq!(
                Err(Error::InvalidInput(Field::MileValue)),
                miles_to_kilometers(value)
            );
            assert_eq!(
                Err(Error::InvalidInput(Field::KilometerValue)),
                kilometers_to_miles(value)
            );
        }
    }
}
