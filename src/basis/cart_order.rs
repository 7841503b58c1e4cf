//! Canonical ordering of Cartesian monomials.

use std::cmp::Ordering;
use std::slice::Iter;

use itertools::Itertools;

use crate::angmom::{ncart, ncart_cumul};

#[cfg(test)]
#[path = "cart_order_tests.rs"]
mod cart_order_tests;

/// The lexicographic ordering of the Cartesian monomials of one degree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CartOrder {
    /// The $`(n_x, n_y, n_z)`$ exponent tuples of the monomials, in order.
    pub cart_tuples: Vec<(u32, u32, u32)>,

    /// The degree of the Cartesian monomials.
    pub lcart: u32,
}

impl CartOrder {
    /// Constructs the lexicographic order of the Cartesian monomials of degree `lcart`, *i.e.* by
    /// decreasing $`n_x`$ first, then by decreasing $`n_y`$. For $`l = 3`$, this gives
    /// `xxx`, `xxy`, `xxz`, `xyy`, `xyz`, `xzz`, `yyy`, `yyz`, `yzz`, `zzz`.
    ///
    /// This is the order in which Cartesian moments are stored everywhere in this crate.
    #[must_use]
    pub fn lex(lcart: u32) -> Self {
        let mut cart_tuples = Vec::with_capacity(ncart(lcart).unwrap_or(0));
        for lx in (0..=lcart).rev() {
            for ly in (0..=(lcart - lx)).rev() {
                cart_tuples.push((lx, ly, lcart - lx - ly));
            }
        }
        Self { cart_tuples, lcart }
    }

    /// Iterates over the exponent tuples in order.
    pub fn iter(&'_ self) -> Iter<'_, (u32, u32, u32)> {
        self.cart_tuples.iter()
    }

    /// Returns the number of Cartesian components in the shell.
    pub fn ncomps(&self) -> usize {
        self.cart_tuples.len()
    }
}

/// Returns the exponent tuples of all Cartesian monomials of degrees $`0`$ to
/// $`l_{\mathrm{max}}`$, concatenated shell by shell in increasing degree, each shell in
/// lexicographic order (see [`CartOrder::lex`]).
///
/// The position of a tuple in the returned vector is the global index of the corresponding
/// Cartesian moment.
///
/// # Arguments
///
/// * `lmax` - The highest degree included.
///
/// # Returns
///
/// A vector whose length is given by [`ncart_cumul`]`(lmax)`.
#[must_use]
pub fn cartesian_powers(lmax: u32) -> Vec<(u32, u32, u32)> {
    let mut powers = Vec::with_capacity(ncart_cumul(lmax).unwrap_or(0));
    for lcart in 0..=lmax {
        powers.extend(CartOrder::lex(lcart).cart_tuples);
    }
    powers
}

/// Translates a Cartesian exponent tuple to a human-understandable string.
///
/// # Arguments
///
/// * `cart_tuple` - A tuple of $`(n_x, n_y, n_z)`$ specifying the exponents of the Cartesian
///   monomial.
/// * flat - A flag indicating if the string representation is flat (*e.g.* `xxyz`) or compact
///   (*e.g.* `x^2yz`).
///
/// Returns
///
/// The string representation of the Cartesian exponent tuple.
pub fn cart_tuple_to_str(cart_tuple: &(u32, u32, u32), flat: bool) -> String {
    if cart_tuple.0 + cart_tuple.1 + cart_tuple.2 == 0u32 {
        "1".to_string()
    } else {
        let cart_array = [cart_tuple.0, cart_tuple.1, cart_tuple.2];
        let carts = ["x", "y", "z"];
        cart_array
            .iter()
            .enumerate()
            .map(|(i, &l)| {
                if flat {
                    carts[i].repeat(l as usize)
                } else {
                    match l.cmp(&1) {
                        Ordering::Greater => format!("{}^{l}", carts[i]),
                        Ordering::Equal => carts[i].to_string(),
                        Ordering::Less => String::new(),
                    }
                }
            })
            .join("")
    }
}
