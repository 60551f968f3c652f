use nalgebra::{Matrix2, Matrix2xX, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::config::{GENERATOR_TOLERANCE, MAX_DIM, MIN_DIM};
use crate::error::{TilingError, TilingResult};
use crate::interfaces::AxisPair;

/// How the planar image of every lattice axis is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorSpec {
    /// Unit vectors at angles 2πk/order for k = 0..dimension.
    Symmetric { order: usize },
    /// Unit vectors at explicit angles (radians), one per axis.
    Angles(Vec<f64>),
    /// Explicit planar vectors, one per axis.
    Vectors(Vec<[f64; 2]>),
}

impl GeneratorSpec {
    /// Five-fold star used for Penrose-like rhombus tilings (D = 5).
    pub fn penrose() -> Self {
        GeneratorSpec::Symmetric { order: 5 }
    }

    /// Eight-fold star used for Ammann–Beenker tilings (D = 4).
    pub fn ammann_beenker() -> Self {
        GeneratorSpec::Symmetric { order: 8 }
    }

    /// Raw planar generators for a lattice of the given dimension.
    fn raw_vectors(&self, dimension: usize) -> TilingResult<Vec<Vector2<f64>>> {
        let vectors: Vec<Vector2<f64>> = match self {
            GeneratorSpec::Symmetric { order } => {
                if *order < 3 {
                    return Err(TilingError::InvalidGenerator(format!(
                        "symmetry order must be at least 3, got {}",
                        order
                    )));
                }
                (0..dimension)
                    .map(|k| {
                        let angle = 2.0 * PI * k as f64 / *order as f64;
                        Vector2::new(angle.cos(), angle.sin())
                    })
                    .collect()
            }
            GeneratorSpec::Angles(angles) => {
                angles.iter().map(|angle| Vector2::new(angle.cos(), angle.sin())).collect()
            }
            GeneratorSpec::Vectors(vectors) => {
                vectors.iter().map(|v| Vector2::new(v[0], v[1])).collect()
            }
        };

        if vectors.len() != dimension {
            return Err(TilingError::InvalidGenerator(format!(
                "expected {} generators, got {}",
                dimension,
                vectors.len()
            )));
        }
        Ok(vectors)
    }
}

impl Default for GeneratorSpec {
    fn default() -> Self {
        GeneratorSpec::penrose()
    }
}

/// Immutable per-tiling constants of the projected lattice Z^D.
///
/// Every raw generator is folded into the upper half-plane: the stored
/// projection vector has its angle in [0, π) and `sign` is -1 where a fold
/// happened. `sign · projection` is the planar generator of the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeSpace {
    dimension: usize,
    projection: Vec<Vector2<f64>>,
    sign: Vec<i8>,
    offset: Vec<f64>,
    /// sign · projection, computed once per build
    planar_generators: Vec<Vector2<f64>>,
}

impl LatticeSpace {
    /// Validate the configuration and fix the lattice constants.
    pub fn new(dimension: usize, generators: &GeneratorSpec, offset: &[f64]) -> TilingResult<Self> {
        if !(MIN_DIM..=MAX_DIM).contains(&dimension) {
            return Err(TilingError::InvalidDimension {
                dimension,
                min: MIN_DIM,
                max: MAX_DIM,
            });
        }

        let raw = generators.raw_vectors(dimension)?;
        validate_generators(&raw)?;

        if offset.len() != dimension {
            return Err(TilingError::InvalidOffset(format!(
                "expected {} components, got {}",
                dimension,
                offset.len()
            )));
        }
        if let Some(axis) = offset.iter().position(|value| !value.is_finite()) {
            return Err(TilingError::InvalidOffset(format!(
                "component {} is not finite",
                axis
            )));
        }

        let (projection, sign): (Vec<_>, Vec<_>) = raw.iter().map(|v| fold_to_upper_half_plane(*v)).unzip();
        let planar_generators = projection
            .iter()
            .zip(&sign)
            .map(|(vector, &s)| vector * f64::from(s))
            .collect();

        Ok(LatticeSpace {
            dimension,
            projection,
            sign,
            offset: offset.to_vec(),
            planar_generators,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Folded projection vector of an axis (angle in [0, π)).
    pub fn projection_vector(&self, axis: usize) -> Vector2<f64> {
        self.projection[axis]
    }

    pub fn projection_vectors(&self) -> &[Vector2<f64>] {
        &self.projection
    }

    /// Sign correction (+1 or -1) of an axis.
    pub fn sign(&self, axis: usize) -> i8 {
        self.sign[axis]
    }

    pub fn signs(&self) -> &[i8] {
        &self.sign
    }

    /// Acceptance-window offset γ.
    pub fn offset(&self) -> &[f64] {
        &self.offset
    }

    /// sign[axis] · projection[axis]
    pub fn planar_generator(&self, axis: usize) -> Vector2<f64> {
        self.planar_generators[axis]
    }

    pub fn planar_generators(&self) -> &[Vector2<f64>] {
        &self.planar_generators
    }

    /// 2×D matrix whose columns are the folded projection vectors.
    pub fn projection_matrix(&self) -> Matrix2xX<f64> {
        Matrix2xX::from_columns(&self.projection)
    }

    /// Σ coordinate[i] · sign[i] · projection[i]
    pub fn project(&self, coordinates: &[i32]) -> TilingResult<Vector2<f64>> {
        self.check_length(coordinates)?;
        Ok(self.project_unchecked(coordinates))
    }

    pub(crate) fn project_unchecked(&self, coordinates: &[i32]) -> Vector2<f64> {
        coordinates
            .iter()
            .zip(&self.planar_generators)
            .fold(Vector2::zeros(), |acc, (&c, g)| acc + g * f64::from(c))
    }

    /// Frame operator S = Σ g gᵀ of the planar generators.
    pub fn frame_operator(&self) -> Matrix2<f64> {
        self.planar_generators
            .iter()
            .fold(Matrix2::zeros(), |acc, g| acc + g * g.transpose())
    }

    /// Pairs whose generators span a rhombus, in rank order.
    pub fn admissible_pairs(&self) -> Vec<AxisPair> {
        AxisPair::all(self.dimension)
            .filter(|pair| !self.is_degenerate(*pair))
            .collect()
    }

    /// Interior angle of a family's rhombus at its anchor corner, in (0, π).
    pub fn rhombus_angle(&self, pair: AxisPair) -> f64 {
        let a = self.planar_generators[pair.low()];
        let b = self.planar_generators[pair.high()];
        a.perp(&b).abs().atan2(a.dot(&b))
    }

    pub(crate) fn check_length(&self, coordinates: &[i32]) -> TilingResult<()> {
        if coordinates.len() != self.dimension {
            return Err(TilingError::CoordinateLength {
                expected: self.dimension,
                actual: coordinates.len(),
            });
        }
        Ok(())
    }

    fn is_degenerate(&self, pair: AxisPair) -> bool {
        are_parallel(&self.planar_generators[pair.low()], &self.planar_generators[pair.high()])
    }
}

fn validate_generators(vectors: &[Vector2<f64>]) -> TilingResult<()> {
    for (axis, vector) in vectors.iter().enumerate() {
        if !vector.x.is_finite() || !vector.y.is_finite() {
            return Err(TilingError::InvalidGenerator(format!(
                "generator {} is not finite",
                axis
            )));
        }
        if vector.norm() < GENERATOR_TOLERANCE {
            return Err(TilingError::InvalidGenerator(format!(
                "generator {} has zero length",
                axis
            )));
        }
    }

    for pair in AxisPair::all(vectors.len()) {
        if are_parallel(&vectors[pair.low()], &vectors[pair.high()]) {
            return Err(TilingError::InvalidGenerator(format!(
                "generators {} and {} are parallel",
                pair.low(),
                pair.high()
            )));
        }
    }
    Ok(())
}

fn are_parallel(a: &Vector2<f64>, b: &Vector2<f64>) -> bool {
    a.perp(b).abs() < GENERATOR_TOLERANCE * a.norm() * b.norm()
}

// Angles in [π, 2π) are mapped onto [0, π) by negation
fn fold_to_upper_half_plane(vector: Vector2<f64>) -> (Vector2<f64>, i8) {
    if vector.y < 0.0 || (vector.y == 0.0 && vector.x < 0.0) {
        (-vector, -1)
    } else {
        (vector, 1)
    }
}

/// A generic offset for `dimension` axes: consecutive components step by
/// π − 3 modulo one, so no three grid lines of an algebraic star meet.
pub fn default_offset(dimension: usize) -> Vec<f64> {
    let step = PI - 3.0;
    (0..dimension)
        .map(|k| (0.1 + step * (k as f64 + 1.0)).fract())
        .collect()
}
