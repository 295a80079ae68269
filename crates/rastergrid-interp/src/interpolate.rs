use std::str::FromStr;

use ndarray::Array2;

use crate::bilinear::BilinearInterpolator;
use crate::error::InterpolationError;
use crate::grid::GridLike;

/// Interpolation algorithms available for resampling.
///
/// The algorithm can be selected by name through [`FromStr`]:
///
/// ```
/// use rastergrid_interp::InterpolationMode;
///
/// let mode: InterpolationMode = "bilinear".parse().unwrap();
/// assert_eq!(mode, InterpolationMode::Bilinear);
/// assert!("nearest".parse::<InterpolationMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
}

impl InterpolationMode {
    /// All the registered algorithms.
    pub const ALL: [InterpolationMode; 1] = [InterpolationMode::Bilinear];

    /// The name used to select the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            InterpolationMode::Bilinear => "bilinear",
        }
    }

    /// The names of all the registered algorithms.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|mode| mode.name()).collect()
    }

    /// Interpolate `src` at every node of `target` with this algorithm.
    ///
    /// # Returns
    ///
    /// An array with the shape of `target`.
    pub fn interpolate<S, T>(&self, src: &S, target: &T) -> Result<Array2<f32>, InterpolationError>
    where
        S: GridLike + ?Sized,
        T: GridLike + ?Sized,
    {
        match self {
            InterpolationMode::Bilinear => BilinearInterpolator::new(src).interpolate(target),
        }
    }
}

impl FromStr for InterpolationMode {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| InterpolationError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl std::fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
