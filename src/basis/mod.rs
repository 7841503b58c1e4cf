//! Orderings of Cartesian monomials within angular-momentum shells.

pub mod cart_order;
