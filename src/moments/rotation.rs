//! Rotation of Cartesian moments.

use log;
use nalgebra::{Rotation3, Unit, Vector3};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ShapeBuilder, Zip};
use num_traits::Float;
use rayon;

use crate::angmom::lmax_from_ncart_cumul;
use crate::moments::rotation_rules::{cartesian_rotation_rule, RotationTerm, NCART_TABULATED};
use crate::moments::MomentError;

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod rotation_tests;

/// Returns the matrix $`\mathbf{R}`$ for a rotation acting on coordinates
/// $`(x, y, z)`$ such that $`\mathbf{r}' = \mathbf{R}\mathbf{r}`$.
///
/// # Arguments
///
/// * `angle` - The angle $`\phi`$ of the rotation in radians. A positive rotation is an
/// anticlockwise rotation when looking down `axis`.
/// * `axis` - A space-fixed vector defining the axis of rotation. The supplied vector will be
/// normalised.
///
/// # Returns
///
/// The $`3 \times 3`$ rotation matrix.
///
/// # Errors
///
/// Errors if `axis` is too close to the zero vector to be normalised.
pub fn rmat(angle: f64, axis: Vector3<f64>) -> Result<Array2<f64>, MomentError> {
    let normalised_axis = Unit::try_new(axis, f64::EPSILON).ok_or_else(|| {
        MomentError::InvalidArgument(format!(
            "The rotation axis ({}, {}, {}) cannot be normalised.",
            axis.x, axis.y, axis.z
        ))
    })?;
    let rot = Rotation3::from_axis_angle(&normalised_axis, angle);
    // nalgebra matrix iter is column-major.
    Array2::<f64>::from_shape_vec(
        (3, 3).f(),
        rot.into_inner().iter().copied().collect::<Vec<_>>(),
    )
    .map_err(|err| MomentError::ShapeMismatch(err.to_string()))
}

/// Determines the highest shell spanned by `ncart` Cartesian moments, making sure that rotation
/// rules exist for all of them.
fn checked_lmax(ncart: usize) -> Result<u32, MomentError> {
    if ncart > NCART_TABULATED {
        return Err(MomentError::UnsupportedShell {
            ncart,
            ncart_max: NCART_TABULATED,
        });
    }
    lmax_from_ncart_cumul(ncart).ok_or_else(|| {
        MomentError::ShapeMismatch(format!(
            "{ncart} is not the number of Cartesian moments in any complete range of shells."
        ))
    })
}

/// Flattens a $`3 \times 3`$ matrix into its nine elements in row-major order.
fn flatten_rmat<T: Float>(rmat: ArrayView2<T>) -> Result<[T; 9], MomentError> {
    if rmat.dim() != (3, 3) {
        return Err(MomentError::ShapeMismatch(format!(
            "The rotation matrix must be 3 × 3, but has shape {:?}.",
            rmat.shape()
        )));
    }
    let mut rcoeffs = [T::zero(); 9];
    rcoeffs
        .iter_mut()
        .zip(rmat.iter())
        .for_each(|(rcoeff, &r)| *rcoeff = r);
    Ok(rcoeffs)
}

/// Looks up the rotation rules of the first `ncart` Cartesian moments after checking that they
/// span complete shells with tabulated rules.
fn tabulated_rules(ncart: usize) -> Result<(u32, Vec<&'static [RotationTerm]>), MomentError> {
    let lmax = checked_lmax(ncart)?;
    let rules = (0..ncart)
        .map(cartesian_rotation_rule)
        .collect::<Result<Vec<_>, _>>()?;
    Ok((lmax, rules))
}

/// Accumulates the terms of `rule` in order, starting from zero.
fn evaluate_rule<T>(rule: &[RotationTerm], rcoeffs: &[T; 9], moments: ArrayView1<T>) -> T
where
    T: Float + From<u8>,
{
    rule.iter().fold(T::zero(), |acc, term| {
        let factor = term
            .factors
            .iter()
            .fold(<T as From<u8>>::from(term.multiplicity), |factor, &k| {
                factor * rcoeffs[k]
            });
        acc + moments[term.source] * factor
    })
}

/// Evaluates one rotation rule, *i.e.* the rotated value of a single Cartesian moment.
///
/// Terms are accumulated in the order in which they appear in `rule`, starting from zero, so the
/// result is reproducible bit for bit.
///
/// # Arguments
///
/// * `rule` - The rotation rule of the moment of interest.
/// * `rcoeffs` - The rotation matrix flattened in row-major order.
/// * `moments` - The unrotated Cartesian moments.
///
/// # Returns
///
/// The rotated moment.
///
/// # Errors
///
/// Errors with [`MomentError::ShapeMismatch`] if `rule` refers to a moment beyond the end of
/// `moments` or to a rotation-matrix element beyond the ninth.
pub fn rotate_term<T>(
    rule: &[RotationTerm],
    rcoeffs: &[T; 9],
    moments: ArrayView1<T>,
) -> Result<T, MomentError>
where
    T: Float + From<u8>,
{
    if let Some(term) = rule.iter().find(|term| {
        term.source >= moments.len() || term.factors.iter().any(|&k| k >= rcoeffs.len())
    }) {
        return Err(MomentError::ShapeMismatch(format!(
            "The rotation term {term:?} does not fit {} moments and a 3 × 3 rotation matrix.",
            moments.len()
        )));
    }
    Ok(evaluate_rule(rule, rcoeffs, moments))
}

/// Rotates a vector of Cartesian moments.
///
/// The moments must span complete shells from $`l = 0`$ to some $`l_{\mathrm{max}}`$ no higher
/// than [`crate::moments::rotation_rules::LMAX_TABULATED`]. The rotation matrix is used as given:
/// it is not checked for orthogonality, so improper or even non-orthogonal matrices simply
/// propagate through the linear transformation.
///
/// Rotating by $`\mathbf{R}_1`$ and then by $`\mathbf{R}_2`$ is the same as rotating once by
/// $`\mathbf{R}_2 \mathbf{R}_1`$.
///
/// # Arguments
///
/// * `moments` - The Cartesian moments to be rotated.
/// * `rmat` - The $`3 \times 3`$ rotation matrix $`\mathbf{R}`$ acting on coordinates.
///
/// # Returns
///
/// The rotated Cartesian moments, of the same length as `moments`.
///
/// # Errors
///
/// Errors with [`MomentError::UnsupportedShell`] if there are more moments than there are
/// tabulated rotation rules, or with [`MomentError::ShapeMismatch`] if the number of moments does
/// not correspond to a complete range of shells or if `rmat` is not $`3 \times 3`$. Nothing is
/// computed in either case.
pub fn rotate_cartesian_moments<T>(
    moments: ArrayView1<T>,
    rmat: ArrayView2<T>,
) -> Result<Array1<T>, MomentError>
where
    T: Float + From<u8>,
{
    let ncart = moments.len();
    let (lmax, rules) = tabulated_rules(ncart)?;
    let rcoeffs = flatten_rmat(rmat)?;
    log::debug!("Rotating {ncart} Cartesian moments up to l = {lmax}.");
    Ok(rules
        .iter()
        .map(|rule| evaluate_rule(rule, &rcoeffs, moments))
        .collect::<Array1<T>>())
}

/// Rotates several vectors of Cartesian moments at once, in parallel.
///
/// Each row of `moments` is a separate vector of Cartesian moments, *e.g.* the multipoles of one
/// site. Every row is rotated exactly as [`rotate_cartesian_moments`] would rotate it.
///
/// # Arguments
///
/// * `moments` - The Cartesian moments to be rotated, one vector per row.
/// * `rmat` - The $`3 \times 3`$ rotation matrix $`\mathbf{R}`$ acting on coordinates.
///
/// # Returns
///
/// The rotated Cartesian moments, with the same shape and row order as `moments`.
///
/// # Errors
///
/// Errors under the same conditions as [`rotate_cartesian_moments`], applied to the row length.
pub fn rotate_cartesian_moments_batch<T>(
    moments: ArrayView2<T>,
    rmat: ArrayView2<T>,
) -> Result<Array2<T>, MomentError>
where
    T: Float + From<u8> + Send + Sync,
{
    let (nsites, ncart) = moments.dim();
    let (lmax, rules) = tabulated_rules(ncart)?;
    let rcoeffs = flatten_rmat(rmat)?;
    log::debug!(
        "Rotating {ncart} Cartesian moments up to l = {lmax} on {nsites} sites using {} thread(s).",
        rayon::current_num_threads()
    );
    let mut rotated = Array2::<T>::zeros((nsites, ncart));
    Zip::from(rotated.rows_mut())
        .and(moments.rows())
        .par_for_each(|mut rotated_row, row| {
            rotated_row
                .iter_mut()
                .zip(rules.iter())
                .for_each(|(rotated_moment, rule)| {
                    *rotated_moment = evaluate_rule(rule, &rcoeffs, row);
                });
        });
    Ok(rotated)
}
