//! Cartesian multipole moments and their transformation under rotations.
//!
//! A vector of Cartesian moments holds one coefficient per monomial
//! $`x^{n_x} y^{n_y} z^{n_z}`$, concatenated shell by shell from $`l = 0`$ up to some
//! $`l_{\mathrm{max}}`$, each shell in the lexicographic order given by
//! [`crate::basis::cart_order::CartOrder::lex`]. Its length is therefore always
//! [`crate::angmom::ncart_cumul`]`(lmax)`.

use std::error::Error;
use std::fmt;

pub mod rotation;
pub mod rotation_rules;

/// Errors arising from the manipulation of Cartesian moments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MomentError {
    /// Variant for arguments that are invalid regardless of shape, *e.g.* a zero rotation axis.
    InvalidArgument(String),

    /// Variant for moments (or moment indices) beyond the tabulated rotation rules. `ncart` is the
    /// number of moments that would have been required and `ncart_max` is the number of moments
    /// with tabulated rules.
    UnsupportedShell { ncart: usize, ncart_max: usize },

    /// Variant for inputs whose shapes are inconsistent with Cartesian moments or rotation
    /// matrices.
    ShapeMismatch(String),
}

impl fmt::Display for MomentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::UnsupportedShell { ncart, ncart_max } => write!(
                f,
                "Unsupported shell: {ncart} Cartesian moments requested, but rotation rules are \
                only available for the first {ncart_max}"
            ),
            Self::ShapeMismatch(msg) => write!(f, "Shape mismatch: {msg}"),
        }
    }
}

impl Error for MomentError {}
