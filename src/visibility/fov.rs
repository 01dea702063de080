use crate::error::{ArgumentError, AzimuthError, Result};
use crate::math::VISIBILITY_EPSILON;

/// Full angular width, in degrees, of a visibility cone centered on forward.
///
/// Always within `(0, 360]`; half of it applies on each side of forward.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct FieldOfView {
    degrees: f64,
}

impl FieldOfView {
    /// A full circle: every non-degenerate target is visible.
    pub const FULL: Self = Self { degrees: 360.0 };

    /// Creates a new field of view from its full width in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::FieldOfViewOutOfRange`] if `degrees` is not in
    /// `(0, 360]` (NaN included).
    pub fn new(degrees: f64) -> Result<Self> {
        if !(degrees > 0.0 && degrees <= 360.0) {
            tracing::debug!(degrees, "rejected field of view");
            return Err(ArgumentError::FieldOfViewOutOfRange { value: degrees }.into());
        }
        Ok(Self { degrees })
    }

    /// Returns the full width in degrees.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Returns the full width in radians.
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.degrees.to_radians()
    }

    /// Returns the half-angle in degrees, the largest visible offset from forward.
    #[must_use]
    pub fn half_angle(&self) -> f64 {
        self.degrees * 0.5
    }

    /// Returns the cosine of the half-angle.
    ///
    /// A full circle yields exactly `-1.0`.
    #[must_use]
    pub fn cos_half_angle(&self) -> f64 {
        if self.degrees >= 360.0 {
            -1.0
        } else {
            (self.radians() * 0.5).cos()
        }
    }

    /// Returns the minimum dot product between unit forward and unit target
    /// offset for the target to be visible.
    ///
    /// The half-angle is widened by [`VISIBILITY_EPSILON`] radians before
    /// taking the cosine, so the slack in dot-product terms shrinks with
    /// `sin(half_angle)` and vanishes for near-zero fields of view. A cone
    /// that reaches all the way round accepts every direction.
    pub(crate) fn dot_threshold(&self) -> f64 {
        let widened = self.radians() * 0.5 + VISIBILITY_EPSILON;
        if widened >= std::f64::consts::PI {
            f64::NEG_INFINITY
        } else {
            widened.cos()
        }
    }
}

impl TryFrom<f64> for FieldOfView {
    type Error = AzimuthError;

    fn try_from(degrees: f64) -> Result<Self> {
        Self::new(degrees)
    }
}

impl From<FieldOfView> for f64 {
    fn from(fov: FieldOfView) -> Self {
        fov.degrees
    }
}
