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

//! The numeric module guards every numeric input to the crate.

use crate::error::{Error, Field};

/// Test whether a value can be used as a number: not NaN and not infinite.
/// # Examples
/// ```
/// use geo_point::numeric::is_valid_number;
///
/// assert!(is_valid_number(-74.04455));
/// assert!(!is_valid_number(f64::NAN));
/// assert!(!is_valid_number(f64::INFINITY));
/// ```
#[must_use]
pub const fn is_valid_number(value: f64) -> bool {
    value.is_finite()
}

/// Validate an optional candidate value.
/// * `value` - the candidate, `None` if it is absent.
/// * `field` - the argument that the value was given for.
///
/// # Errors
///
/// Returns `Error::InvalidInput(field)` if the value is absent or not a
/// valid number.
pub const fn validate_number(value: Option<f64>, field: Field) -> Result<f64, Error> {
    match value {
        Some(v) if is_valid_number(v) => Ok(v),
        _ => Err(Error::InvalidInput(field)),
    }
}
