//! Driver for the rotation of Cartesian moments.

use std::fmt;

use anyhow::{self, format_err};
use derive_builder::Builder;
use itertools::Itertools;
use log;
use nalgebra::{Matrix3, Vector3};
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::angmom::lmax_from_ncart_cumul;
use crate::basis::cart_order::{cart_tuple_to_str, cartesian_powers};
use crate::drivers::CartMomentsDriver;
use crate::io::format::{
    cartmoments_output, cartmoments_warn, log_subtitle, log_title, nice_bool, write_subtitle,
    CartMomentsOutput,
};
use crate::io::write_cartmoments_yaml;
use crate::moments::rotation::{rmat, rotate_cartesian_moments_batch};
use crate::moments::MomentError;

#[cfg(test)]
#[path = "moment_rotation_tests.rs"]
mod moment_rotation_tests;

/// Threshold on $`\lVert \mathbf{R}^{\mathsf{T}}\mathbf{R} - \mathbf{I} \rVert`$ above which a
/// warning is issued about a non-orthogonal rotation matrix.
const ORTHOGONALITY_THRESHOLD: f64 = 1e-8;

// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

/// An enumerated type specifying the coordinate transformation to be applied.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum RotationSpecification {
    /// Variant for an explicit $`3 \times 3`$ matrix $`\mathbf{R}`$ acting on coordinates as
    /// $`\mathbf{r}' = \mathbf{R}\mathbf{r}`$, given row by row. Improper matrices are allowed.
    Matrix([[f64; 3]; 3]),

    /// Variant for a proper rotation through `angle` (in radians, anticlockwise when looking down
    /// `axis`) about `axis`.
    AxisAngle { axis: Vector3<f64>, angle: f64 },
}

impl RotationSpecification {
    /// Returns the $`3 \times 3`$ matrix of this transformation.
    ///
    /// # Errors
    ///
    /// Errors if the rotation axis cannot be normalised.
    pub fn rmat(&self) -> Result<Array2<f64>, MomentError> {
        match self {
            Self::Matrix(m) => Ok(Array2::from_shape_fn((3, 3), |(i, j)| m[i][j])),
            Self::AxisAngle { axis, angle } => rmat(*angle, *axis),
        }
    }
}

impl fmt::Display for RotationSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matrix(m) => write!(
                f,
                "explicit matrix [{}]",
                m.iter()
                    .map(|row| row.iter().map(|x| format!("{x:+.6}")).join(", "))
                    .join("; ")
            ),
            Self::AxisAngle { axis, angle } => write!(
                f,
                "{angle:+.6} rad about ({})",
                axis.iter().map(|x| format!("{x:+.3}")).join(", ")
            ),
        }
    }
}

fn default_true() -> bool {
    true
}

/// A structure containing control parameters for the rotation of Cartesian moments.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct MomentRotationParams {
    /// The coordinate transformation to be applied to the moments.
    pub rotation: RotationSpecification,

    /// Boolean indicating if the moments in the output are to be labelled by their Cartesian
    /// monomials (*e.g.* `xxy`).
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub write_cartesian_labels: bool,

    /// Optional name for saving the result as a YAML file. If `None`, the result will not be
    /// saved.
    #[builder(default = "None")]
    #[serde(default)]
    pub result_save_name: Option<String>,
}

impl MomentRotationParams {
    /// Returns a builder to construct a [`MomentRotationParams`] structure.
    pub fn builder() -> MomentRotationParamsBuilder {
        MomentRotationParamsBuilder::default()
    }
}

impl fmt::Display for MomentRotationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rotation: {}", self.rotation)?;
        writeln!(
            f,
            "Label moments by Cartesian monomials: {}",
            nice_bool(self.write_cartesian_labels)
        )?;
        writeln!(
            f,
            "Save rotation results to file: {}",
            if let Some(name) = self.result_save_name.as_ref() {
                format!("{name}.yml")
            } else {
                nice_bool(false)
            }
        )?;
        writeln!(f)?;
        Ok(())
    }
}

// ------
// Result
// ------

/// A structure to contain the results of rotating Cartesian moments.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct MomentRotationResult {
    /// The control parameters used to obtain this set of results.
    pub parameters: MomentRotationParams,

    /// The $`3 \times 3`$ matrix by which the moments have been transformed.
    pub rmat: Array2<f64>,

    /// The unrotated Cartesian moments, one site per row.
    pub moments: Array2<f64>,

    /// The rotated Cartesian moments, one site per row.
    pub rotated_moments: Array2<f64>,
}

impl MomentRotationResult {
    /// Returns a builder to construct a [`MomentRotationResult`] structure.
    fn builder() -> MomentRotationResultBuilder {
        MomentRotationResultBuilder::default()
    }
}

impl fmt::Display for MomentRotationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ncart = self.moments.ncols();
        let labels = if self.parameters.write_cartesian_labels {
            lmax_from_ncart_cumul(ncart).map(|lmax| {
                cartesian_powers(lmax)
                    .iter()
                    .map(|cart_tuple| cart_tuple_to_str(cart_tuple, true))
                    .collect_vec()
            })
        } else {
            None
        };
        let label_width = labels
            .as_ref()
            .and_then(|labels| labels.iter().map(|label| label.chars().count()).max())
            .unwrap_or(0)
            .max(6);
        let index_width = ncart.to_string().len().max(1);

        for (site, (row, rotated_row)) in self
            .moments
            .rows()
            .into_iter()
            .zip(self.rotated_moments.rows())
            .enumerate()
        {
            write_subtitle(f, &format!("Site {site}"))?;
            writeln!(f, "{}", "┈".repeat(index_width + label_width + 36))?;
            writeln!(
                f,
                "{:>index_width$}  {:<label_width$}  {:>16}  {:>16}",
                "#", "Moment", "Unrotated", "Rotated"
            )?;
            writeln!(f, "{}", "┈".repeat(index_width + label_width + 36))?;
            for (i, (moment, rotated_moment)) in row.iter().zip(rotated_row.iter()).enumerate() {
                let label = labels
                    .as_ref()
                    .and_then(|labels| labels.get(i).cloned())
                    .unwrap_or_else(|| "--".to_string());
                writeln!(
                    f,
                    "{i:>index_width$}  {label:<label_width$}  {:>+16.10e}  {:>+16.10e}",
                    moment, rotated_moment
                )?;
            }
            writeln!(f, "{}", "┈".repeat(index_width + label_width + 36))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

// ------
// Driver
// ------

/// A driver for the rotation of Cartesian moments.
#[derive(Clone, Builder)]
pub struct MomentRotationDriver<'a> {
    /// The control parameters for the rotation.
    parameters: &'a MomentRotationParams,

    /// The Cartesian moments to be rotated, one site per row.
    moments: ArrayView2<'a, f64>,

    /// The result of the rotation.
    #[builder(setter(skip), default = "None")]
    result: Option<MomentRotationResult>,
}

impl<'a> MomentRotationDriver<'a> {
    /// Returns a builder to construct a [`MomentRotationDriver`] structure.
    pub fn builder() -> MomentRotationDriverBuilder<'a> {
        MomentRotationDriverBuilder::default()
    }

    /// Executes the rotation of Cartesian moments.
    fn rotate_moments(&mut self) -> Result<(), anyhow::Error> {
        log_title("Cartesian Moment Rotation");
        cartmoments_output!("");
        let params = self.parameters;
        params.log_output_display();

        let rmat = params.rotation.rmat()?;
        let orthogonality_deviation = (rmat.t().dot(&rmat) - Array2::<f64>::eye(3))
            .map(|x| x * x)
            .sum()
            .sqrt();
        if orthogonality_deviation > ORTHOGONALITY_THRESHOLD {
            cartmoments_warn!(
                "The transformation matrix is not orthogonal \
                (deviation {orthogonality_deviation:.3e}). It will be applied as given."
            );
        }
        log_subtitle("Transformation matrix");
        rmat.rows().into_iter().for_each(|row| {
            cartmoments_output!("  {}", row.iter().map(|x| format!("{x:+.10}")).join("  "));
        });
        cartmoments_output!(
            "  det = {:+.10}",
            Matrix3::from_fn(|i, j| rmat[(i, j)]).determinant()
        );
        cartmoments_output!("");

        log::debug!(
            "Rotating Cartesian moments on {} site(s)...",
            self.moments.nrows()
        );
        let rotated_moments = rotate_cartesian_moments_batch(self.moments, rmat.view())?;
        log::debug!(
            "Rotating Cartesian moments on {} site(s)... Done.",
            self.moments.nrows()
        );

        let result = MomentRotationResult::builder()
            .parameters(params.clone())
            .rmat(rmat)
            .moments(self.moments.to_owned())
            .rotated_moments(rotated_moments)
            .build()
            .map_err(|err| format_err!(err))?;
        result.log_output_display();

        if let Some(name) = params.result_save_name.as_ref() {
            write_cartmoments_yaml(name, &result)?;
            cartmoments_output!("Rotation results saved as {name}.yml.");
            cartmoments_output!("");
        }

        self.result = Some(result);
        Ok(())
    }
}

impl CartMomentsDriver for MomentRotationDriver<'_> {
    type Params = MomentRotationParams;

    type Outcome = MomentRotationResult;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No moment rotation results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.rotate_moments()
    }
}
