//! # cartmoments: Cartesian multipole moments under rotation
//!
//! This crate enumerates the Cartesian components of multipole moments, provides the size
//! arithmetic of Cartesian and pure angular-momentum shells, and rotates Cartesian moments
//! concatenated shell by shell from $`l = 0`$ up to $`l = 4`$.
//!
//! Within each shell, the Cartesian components $`x^{n_x} y^{n_y} z^{n_z}`$ with
//! $`n_x + n_y + n_z = l`$ are arranged in lexicographic order: decreasing $`n_x`$ first, then
//! decreasing $`n_y`$. The concatenation of shells $`0, 1, \ldots, l_{\mathrm{max}}`$ therefore
//! contains [`angmom::ncart_cumul`] components.
//!
//! Rotation of moments is driven by a static table of rules,
//! [`moments::rotation_rules::CARTESIAN_ROTATION_RULES`], each of which expresses a rotated
//! component as a sum of products of rotation matrix elements and unrotated components of the
//! same shell. Under a rotation matrix $`\mathbf{R}`$, position vectors transform as
//! $`\mathbf{r}' = \mathbf{R}\mathbf{r}`$, and the moments transform accordingly.
//!
//! ## Getting started
//!
//! ```rust
//! use cartmoments::moments::rotation::{rmat, rotate_cartesian_moments};
//! use nalgebra::Vector3;
//! use ndarray::array;
//!
//! let r = rmat(std::f64::consts::PI, Vector3::z()).unwrap();
//! let dipole = array![1.0, 1.0, 0.0, 0.0];
//! let rotated = rotate_cartesian_moments(dipole.view(), r.view()).unwrap();
//! assert!((rotated[1] + 1.0).abs() < 1e-12);
//! ```
//!
//! The `cartmoments` binary reads a YAML input file specifying a rotation and a set of moments
//! per site, and logs the rotated moments to the `cartmoments-output` logger.

pub mod angmom;
pub mod basis;
pub mod drivers;
pub mod interfaces;
pub mod io;
pub mod moments;
