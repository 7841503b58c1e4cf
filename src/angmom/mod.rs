//! Sizes of angular-momentum shells.
//!
//! All counts are evaluated exactly in `u128`, which holds every intermediate product for any
//! `u32` degree, and are then narrowed to `usize`. A count that does not fit in `usize` is reported
//! as `None` rather than wrapped or truncated.

#[cfg(test)]
#[path = "angmom_tests.rs"]
mod angmom_tests;

/// Narrows an exact count to `usize`.
fn to_usize(n: u128) -> Option<usize> {
    usize::try_from(n).ok()
}

/// Returns the number of Cartesian monomials $`x^{n_x} y^{n_y} z^{n_z}`$ of degree $`l`$, *i.e.*
/// $`(l + 1)(l + 2)/2`$.
///
/// # Arguments
///
/// * `l` - The angular momentum of the shell.
///
/// # Returns
///
/// The number of Cartesian components in the shell, or `None` if it exceeds `usize::MAX`.
#[must_use]
pub fn ncart(l: u32) -> Option<usize> {
    let l = u128::from(l);
    to_usize((l + 1) * (l + 2) / 2)
}

/// Returns the number of Cartesian monomials of all degrees from $`0`$ up to and including
/// $`l_{\mathrm{max}}`$, *i.e.* $`(l_{\mathrm{max}} + 1)(l_{\mathrm{max}} + 2)(l_{\mathrm{max}} +
/// 3)/6`$.
///
/// # Arguments
///
/// * `lmax` - The highest angular momentum included.
///
/// # Returns
///
/// The cumulative number of Cartesian components, or `None` if it exceeds `usize::MAX`.
#[must_use]
pub fn ncart_cumul(lmax: u32) -> Option<usize> {
    let l = u128::from(lmax);
    to_usize((l + 1) * (l + 2) * (l + 3) / 6)
}

/// Returns the number of pure (real solid harmonic) components of degree $`l`$, *i.e.*
/// $`2l + 1`$.
#[must_use]
pub fn npure(l: u32) -> Option<usize> {
    to_usize(2 * u128::from(l) + 1)
}

/// Returns the number of pure components of all degrees from $`0`$ up to and including
/// $`l_{\mathrm{max}}`$, *i.e.* $`(l_{\mathrm{max}} + 1)^2`$.
#[must_use]
pub fn npure_cumul(lmax: u32) -> Option<usize> {
    let l = u128::from(lmax);
    to_usize((l + 1) * (l + 1))
}

/// Recovers the highest angular momentum $`l_{\mathrm{max}}`$ whose cumulative Cartesian count is
/// exactly `ncart`.
///
/// # Returns
///
/// `Some(lmax)` if `ncart` equals [`ncart_cumul`] for some `lmax`, `None` otherwise.
#[must_use]
pub fn lmax_from_ncart_cumul(ncart: usize) -> Option<u32> {
    // Smallest degree whose cumulative count reaches `ncart`. A count beyond `usize::MAX` always
    // reaches it.
    let (mut lo, mut hi) = (0u32, u32::MAX);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if ncart_cumul(mid).map_or(true, |n| n >= ncart) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    (ncart_cumul(lo) == Some(ncart)).then_some(lo)
}
