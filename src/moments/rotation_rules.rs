//! Precomputed rules for rotating Cartesian moments.
//!
//! Let the coordinates transform as $`\mathbf{r}' = \mathbf{R} \mathbf{r}`$. A rotated monomial
//! $`x'^{a} y'^{b} z'^{c}`$ expands by the multinomial theorem into a sum over monomials of the
//! same degree in the unrotated coordinates, each weighted by an integer multiplicity times a
//! product of elements of $`\mathbf{R}`$. The rule for a Cartesian moment is exactly this
//! expansion, frozen term by term.
//!
//! Rotation-matrix elements are referred to by their row-major flat index
//! $`k = 3i + j`$ for $`R_{ij}`$.

use crate::moments::MomentError;

#[cfg(test)]
#[path = "rotation_rules_tests.rs"]
mod rotation_rules_tests;

/// The highest degree for which rotation rules are tabulated.
pub const LMAX_TABULATED: u32 = 4;

/// The number of Cartesian moments covered by the tabulated rules, *i.e.*
/// [`crate::angmom::ncart_cumul`]`(`[`LMAX_TABULATED`]`)`.
pub const NCART_TABULATED: usize = 35;

/// A single term in the rotation rule of one Cartesian moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationTerm {
    /// The global index of the unrotated moment that this term takes.
    pub source: usize,

    /// The integer multinomial weight of this term.
    pub multiplicity: u8,

    /// The row-major flat indices of the rotation-matrix elements multiplied together in this
    /// term, in the order in which they are to be multiplied.
    pub factors: &'static [usize],
}

macro_rules! t {
    ($source:expr, $multiplicity:expr; $($factor:expr),*) => {
        RotationTerm {
            source: $source,
            multiplicity: $multiplicity,
            factors: &[$($factor),*],
        }
    };
}

/// Rotation rules for all Cartesian moments up to [`LMAX_TABULATED`], indexed by global moment
/// index. Shells are concatenated in increasing degree and each shell is in lexicographic order
/// (see [`crate::basis::cart_order::CartOrder::lex`]).
#[rustfmt::skip]
pub static CARTESIAN_ROTATION_RULES: [&[RotationTerm]; NCART_TABULATED] = [
    // s (monopole)
    //  0: 1
    &[t!(0, 1;)],

    // p (dipole)
    //  1: x
    &[t!(1, 1; 0), t!(2, 1; 1), t!(3, 1; 2)],
    //  2: y
    &[t!(1, 1; 3), t!(2, 1; 4), t!(3, 1; 5)],
    //  3: z
    &[t!(1, 1; 6), t!(2, 1; 7), t!(3, 1; 8)],

    // d (quadrupole)
    //  4: xx
    &[
        t!(4, 1; 0, 0), t!(5, 2; 0, 1), t!(6, 2; 0, 2), t!(7, 1; 1, 1), t!(8, 2; 1, 2),
        t!(9, 1; 2, 2),
    ],
    //  5: xy
    &[
        t!(4, 1; 0, 3), t!(5, 1; 1, 3), t!(5, 1; 0, 4), t!(6, 1; 2, 3), t!(6, 1; 0, 5),
        t!(7, 1; 1, 4), t!(8, 1; 2, 4), t!(8, 1; 1, 5), t!(9, 1; 2, 5),
    ],
    //  6: xz
    &[
        t!(4, 1; 0, 6), t!(5, 1; 1, 6), t!(5, 1; 0, 7), t!(6, 1; 2, 6), t!(6, 1; 0, 8),
        t!(7, 1; 1, 7), t!(8, 1; 2, 7), t!(8, 1; 1, 8), t!(9, 1; 2, 8),
    ],
    //  7: yy
    &[
        t!(4, 1; 3, 3), t!(5, 2; 3, 4), t!(6, 2; 3, 5), t!(7, 1; 4, 4), t!(8, 2; 4, 5),
        t!(9, 1; 5, 5),
    ],
    //  8: yz
    &[
        t!(4, 1; 3, 6), t!(5, 1; 4, 6), t!(5, 1; 3, 7), t!(6, 1; 5, 6), t!(6, 1; 3, 8),
        t!(7, 1; 4, 7), t!(8, 1; 5, 7), t!(8, 1; 4, 8), t!(9, 1; 5, 8),
    ],
    //  9: zz
    &[
        t!(4, 1; 6, 6), t!(5, 2; 6, 7), t!(6, 2; 6, 8), t!(7, 1; 7, 7), t!(8, 2; 7, 8),
        t!(9, 1; 8, 8),
    ],

    // f (octupole)
    // 10: xxx
    &[
        t!(10, 1; 0, 0, 0), t!(11, 3; 0, 0, 1), t!(12, 3; 0, 0, 2), t!(13, 3; 0, 1, 1),
        t!(14, 6; 0, 1, 2), t!(15, 3; 0, 2, 2), t!(16, 1; 1, 1, 1), t!(17, 3; 1, 1, 2),
        t!(18, 3; 1, 2, 2), t!(19, 1; 2, 2, 2),
    ],
    // 11: xxy
    &[
        t!(10, 1; 0, 0, 3), t!(11, 1; 0, 0, 4), t!(11, 2; 0, 1, 3), t!(12, 1; 0, 0, 5),
        t!(12, 2; 0, 2, 3), t!(13, 1; 1, 1, 3), t!(13, 2; 0, 1, 4), t!(14, 2; 1, 2, 3),
        t!(14, 2; 0, 2, 4), t!(14, 2; 0, 1, 5), t!(15, 1; 2, 2, 3), t!(15, 2; 0, 2, 5),
        t!(16, 1; 1, 1, 4), t!(17, 1; 1, 1, 5), t!(17, 2; 1, 2, 4), t!(18, 1; 2, 2, 4),
        t!(18, 2; 1, 2, 5), t!(19, 1; 2, 2, 5),
    ],
    // 12: xxz
    &[
        t!(10, 1; 0, 0, 6), t!(11, 1; 0, 0, 7), t!(11, 2; 0, 1, 6), t!(12, 1; 0, 0, 8),
        t!(12, 2; 0, 2, 6), t!(13, 1; 1, 1, 6), t!(13, 2; 0, 1, 7), t!(14, 2; 1, 2, 6),
        t!(14, 2; 0, 2, 7), t!(14, 2; 0, 1, 8), t!(15, 1; 2, 2, 6), t!(15, 2; 0, 2, 8),
        t!(16, 1; 1, 1, 7), t!(17, 1; 1, 1, 8), t!(17, 2; 1, 2, 7), t!(18, 1; 2, 2, 7),
        t!(18, 2; 1, 2, 8), t!(19, 1; 2, 2, 8),
    ],
    // 13: xyy
    &[
        t!(10, 1; 0, 3, 3), t!(11, 1; 1, 3, 3), t!(11, 2; 0, 3, 4), t!(12, 1; 2, 3, 3),
        t!(12, 2; 0, 3, 5), t!(13, 1; 0, 4, 4), t!(13, 2; 1, 3, 4), t!(14, 2; 2, 3, 4),
        t!(14, 2; 1, 3, 5), t!(14, 2; 0, 4, 5), t!(15, 1; 0, 5, 5), t!(15, 2; 2, 3, 5),
        t!(16, 1; 1, 4, 4), t!(17, 1; 2, 4, 4), t!(17, 2; 1, 4, 5), t!(18, 1; 1, 5, 5),
        t!(18, 2; 2, 4, 5), t!(19, 1; 2, 5, 5),
    ],
    // 14: xyz
    &[
        t!(10, 1; 0, 3, 6), t!(11, 1; 1, 3, 6), t!(11, 1; 0, 4, 6), t!(11, 1; 0, 3, 7),
        t!(12, 1; 2, 3, 6), t!(12, 1; 0, 5, 6), t!(12, 1; 0, 3, 8), t!(13, 1; 1, 4, 6),
        t!(13, 1; 1, 3, 7), t!(13, 1; 0, 4, 7), t!(14, 1; 2, 4, 6), t!(14, 1; 2, 3, 7),
        t!(14, 1; 1, 5, 6), t!(14, 1; 1, 3, 8), t!(14, 1; 0, 5, 7), t!(14, 1; 0, 4, 8),
        t!(15, 1; 2, 5, 6), t!(15, 1; 2, 3, 8), t!(15, 1; 0, 5, 8), t!(16, 1; 1, 4, 7),
        t!(17, 1; 2, 4, 7), t!(17, 1; 1, 5, 7), t!(17, 1; 1, 4, 8), t!(18, 1; 2, 5, 7),
        t!(18, 1; 2, 4, 8), t!(18, 1; 1, 5, 8), t!(19, 1; 2, 5, 8),
    ],
    // 15: xzz
    &[
        t!(10, 1; 0, 6, 6), t!(11, 1; 1, 6, 6), t!(11, 2; 0, 6, 7), t!(12, 1; 2, 6, 6),
        t!(12, 2; 0, 6, 8), t!(13, 1; 0, 7, 7), t!(13, 2; 1, 6, 7), t!(14, 2; 2, 6, 7),
        t!(14, 2; 1, 6, 8), t!(14, 2; 0, 7, 8), t!(15, 1; 0, 8, 8), t!(15, 2; 2, 6, 8),
        t!(16, 1; 1, 7, 7), t!(17, 1; 2, 7, 7), t!(17, 2; 1, 7, 8), t!(18, 1; 1, 8, 8),
        t!(18, 2; 2, 7, 8), t!(19, 1; 2, 8, 8),
    ],
    // 16: yyy
    &[
        t!(10, 1; 3, 3, 3), t!(11, 3; 3, 3, 4), t!(12, 3; 3, 3, 5), t!(13, 3; 3, 4, 4),
        t!(14, 6; 3, 4, 5), t!(15, 3; 3, 5, 5), t!(16, 1; 4, 4, 4), t!(17, 3; 4, 4, 5),
        t!(18, 3; 4, 5, 5), t!(19, 1; 5, 5, 5),
    ],
    // 17: yyz
    &[
        t!(10, 1; 3, 3, 6), t!(11, 1; 3, 3, 7), t!(11, 2; 3, 4, 6), t!(12, 1; 3, 3, 8),
        t!(12, 2; 3, 5, 6), t!(13, 1; 4, 4, 6), t!(13, 2; 3, 4, 7), t!(14, 2; 4, 5, 6),
        t!(14, 2; 3, 5, 7), t!(14, 2; 3, 4, 8), t!(15, 1; 5, 5, 6), t!(15, 2; 3, 5, 8),
        t!(16, 1; 4, 4, 7), t!(17, 1; 4, 4, 8), t!(17, 2; 4, 5, 7), t!(18, 1; 5, 5, 7),
        t!(18, 2; 4, 5, 8), t!(19, 1; 5, 5, 8),
    ],
    // 18: yzz
    &[
        t!(10, 1; 3, 6, 6), t!(11, 1; 4, 6, 6), t!(11, 2; 3, 6, 7), t!(12, 1; 5, 6, 6),
        t!(12, 2; 3, 6, 8), t!(13, 1; 3, 7, 7), t!(13, 2; 4, 6, 7), t!(14, 2; 5, 6, 7),
        t!(14, 2; 4, 6, 8), t!(14, 2; 3, 7, 8), t!(15, 1; 3, 8, 8), t!(15, 2; 5, 6, 8),
        t!(16, 1; 4, 7, 7), t!(17, 1; 5, 7, 7), t!(17, 2; 4, 7, 8), t!(18, 1; 4, 8, 8),
        t!(18, 2; 5, 7, 8), t!(19, 1; 5, 8, 8),
    ],
    // 19: zzz
    &[
        t!(10, 1; 6, 6, 6), t!(11, 3; 6, 6, 7), t!(12, 3; 6, 6, 8), t!(13, 3; 6, 7, 7),
        t!(14, 6; 6, 7, 8), t!(15, 3; 6, 8, 8), t!(16, 1; 7, 7, 7), t!(17, 3; 7, 7, 8),
        t!(18, 3; 7, 8, 8), t!(19, 1; 8, 8, 8),
    ],

    // g (hexadecapole)
    // 20: xxxx
    &[
        t!(20, 1; 0, 0, 0, 0), t!(21, 4; 0, 0, 0, 1), t!(22, 4; 0, 0, 0, 2), t!(23, 6; 0, 0, 1, 1),
        t!(24, 12; 0, 0, 1, 2), t!(25, 6; 0, 0, 2, 2), t!(26, 4; 0, 1, 1, 1),
        t!(27, 12; 0, 1, 1, 2), t!(28, 12; 0, 1, 2, 2), t!(29, 4; 0, 2, 2, 2),
        t!(30, 1; 1, 1, 1, 1), t!(31, 4; 1, 1, 1, 2), t!(32, 6; 1, 1, 2, 2), t!(33, 4; 1, 2, 2, 2),
        t!(34, 1; 2, 2, 2, 2),
    ],
    // 21: xxxy
    &[
        t!(20, 1; 0, 0, 0, 3), t!(21, 1; 0, 0, 0, 4), t!(21, 3; 0, 0, 1, 3), t!(22, 1; 0, 0, 0, 5),
        t!(22, 3; 0, 0, 2, 3), t!(23, 3; 0, 1, 1, 3), t!(23, 3; 0, 0, 1, 4), t!(24, 3; 0, 0, 2, 4),
        t!(24, 3; 0, 0, 1, 5), t!(24, 6; 0, 1, 2, 3), t!(25, 3; 0, 2, 2, 3), t!(25, 3; 0, 0, 2, 5),
        t!(26, 1; 1, 1, 1, 3), t!(26, 3; 0, 1, 1, 4), t!(27, 3; 1, 1, 2, 3), t!(27, 3; 0, 1, 1, 5),
        t!(27, 6; 0, 1, 2, 4), t!(28, 3; 1, 2, 2, 3), t!(28, 3; 0, 2, 2, 4), t!(28, 6; 0, 1, 2, 5),
        t!(29, 1; 2, 2, 2, 3), t!(29, 3; 0, 2, 2, 5), t!(30, 1; 1, 1, 1, 4), t!(31, 1; 1, 1, 1, 5),
        t!(31, 3; 1, 1, 2, 4), t!(32, 3; 1, 2, 2, 4), t!(32, 3; 1, 1, 2, 5), t!(33, 1; 2, 2, 2, 4),
        t!(33, 3; 1, 2, 2, 5), t!(34, 1; 2, 2, 2, 5),
    ],
    // 22: xxxz
    &[
        t!(20, 1; 0, 0, 0, 6), t!(21, 1; 0, 0, 0, 7), t!(21, 3; 0, 0, 1, 6), t!(22, 1; 0, 0, 0, 8),
        t!(22, 3; 0, 0, 2, 6), t!(23, 3; 0, 1, 1, 6), t!(23, 3; 0, 0, 1, 7), t!(24, 3; 0, 0, 2, 7),
        t!(24, 3; 0, 0, 1, 8), t!(24, 6; 0, 1, 2, 6), t!(25, 3; 0, 2, 2, 6), t!(25, 3; 0, 0, 2, 8),
        t!(26, 1; 1, 1, 1, 6), t!(26, 3; 0, 1, 1, 7), t!(27, 3; 1, 1, 2, 6), t!(27, 3; 0, 1, 1, 8),
        t!(27, 6; 0, 1, 2, 7), t!(28, 3; 1, 2, 2, 6), t!(28, 3; 0, 2, 2, 7), t!(28, 6; 0, 1, 2, 8),
        t!(29, 1; 2, 2, 2, 6), t!(29, 3; 0, 2, 2, 8), t!(30, 1; 1, 1, 1, 7), t!(31, 1; 1, 1, 1, 8),
        t!(31, 3; 1, 1, 2, 7), t!(32, 3; 1, 2, 2, 7), t!(32, 3; 1, 1, 2, 8), t!(33, 1; 2, 2, 2, 7),
        t!(33, 3; 1, 2, 2, 8), t!(34, 1; 2, 2, 2, 8),
    ],
    // 23: xxyy
    &[
        t!(20, 1; 0, 0, 3, 3), t!(21, 2; 0, 1, 3, 3), t!(21, 2; 0, 0, 3, 4), t!(22, 2; 0, 2, 3, 3),
        t!(22, 2; 0, 0, 3, 5), t!(23, 1; 1, 1, 3, 3), t!(23, 1; 0, 0, 4, 4), t!(23, 4; 0, 1, 3, 4),
        t!(24, 2; 1, 2, 3, 3), t!(24, 2; 0, 0, 4, 5), t!(24, 4; 0, 2, 3, 4), t!(24, 4; 0, 1, 3, 5),
        t!(25, 1; 2, 2, 3, 3), t!(25, 1; 0, 0, 5, 5), t!(25, 4; 0, 2, 3, 5), t!(26, 2; 1, 1, 3, 4),
        t!(26, 2; 0, 1, 4, 4), t!(27, 2; 1, 1, 3, 5), t!(27, 2; 0, 2, 4, 4), t!(27, 4; 1, 2, 3, 4),
        t!(27, 4; 0, 1, 4, 5), t!(28, 2; 2, 2, 3, 4), t!(28, 2; 0, 1, 5, 5), t!(28, 4; 1, 2, 3, 5),
        t!(28, 4; 0, 2, 4, 5), t!(29, 2; 2, 2, 3, 5), t!(29, 2; 0, 2, 5, 5), t!(30, 1; 1, 1, 4, 4),
        t!(31, 2; 1, 2, 4, 4), t!(31, 2; 1, 1, 4, 5), t!(32, 1; 2, 2, 4, 4), t!(32, 1; 1, 1, 5, 5),
        t!(32, 4; 1, 2, 4, 5), t!(33, 2; 2, 2, 4, 5), t!(33, 2; 1, 2, 5, 5), t!(34, 1; 2, 2, 5, 5),
    ],
    // 24: xxyz
    &[
        t!(20, 1; 0, 0, 3, 6), t!(21, 1; 0, 0, 4, 6), t!(21, 1; 0, 0, 3, 7), t!(21, 2; 0, 1, 3, 6),
        t!(22, 1; 0, 0, 5, 6), t!(22, 1; 0, 0, 3, 8), t!(22, 2; 0, 2, 3, 6), t!(23, 1; 1, 1, 3, 6),
        t!(23, 1; 0, 0, 4, 7), t!(23, 2; 0, 1, 4, 6), t!(23, 2; 0, 1, 3, 7), t!(24, 1; 0, 0, 5, 7),
        t!(24, 1; 0, 0, 4, 8), t!(24, 2; 1, 2, 3, 6), t!(24, 2; 0, 2, 4, 6), t!(24, 2; 0, 2, 3, 7),
        t!(24, 2; 0, 1, 5, 6), t!(24, 2; 0, 1, 3, 8), t!(25, 1; 2, 2, 3, 6), t!(25, 1; 0, 0, 5, 8),
        t!(25, 2; 0, 2, 5, 6), t!(25, 2; 0, 2, 3, 8), t!(26, 1; 1, 1, 4, 6), t!(26, 1; 1, 1, 3, 7),
        t!(26, 2; 0, 1, 4, 7), t!(27, 1; 1, 1, 5, 6), t!(27, 1; 1, 1, 3, 8), t!(27, 2; 1, 2, 4, 6),
        t!(27, 2; 1, 2, 3, 7), t!(27, 2; 0, 2, 4, 7), t!(27, 2; 0, 1, 5, 7), t!(27, 2; 0, 1, 4, 8),
        t!(28, 1; 2, 2, 4, 6), t!(28, 1; 2, 2, 3, 7), t!(28, 2; 1, 2, 5, 6), t!(28, 2; 1, 2, 3, 8),
        t!(28, 2; 0, 2, 5, 7), t!(28, 2; 0, 2, 4, 8), t!(28, 2; 0, 1, 5, 8), t!(29, 1; 2, 2, 5, 6),
        t!(29, 1; 2, 2, 3, 8), t!(29, 2; 0, 2, 5, 8), t!(30, 1; 1, 1, 4, 7), t!(31, 1; 1, 1, 5, 7),
        t!(31, 1; 1, 1, 4, 8), t!(31, 2; 1, 2, 4, 7), t!(32, 1; 2, 2, 4, 7), t!(32, 1; 1, 1, 5, 8),
        t!(32, 2; 1, 2, 5, 7), t!(32, 2; 1, 2, 4, 8), t!(33, 1; 2, 2, 5, 7), t!(33, 1; 2, 2, 4, 8),
        t!(33, 2; 1, 2, 5, 8), t!(34, 1; 2, 2, 5, 8),
    ],
    // 25: xxzz
    &[
        t!(20, 1; 0, 0, 6, 6), t!(21, 2; 0, 1, 6, 6), t!(21, 2; 0, 0, 6, 7), t!(22, 2; 0, 2, 6, 6),
        t!(22, 2; 0, 0, 6, 8), t!(23, 1; 1, 1, 6, 6), t!(23, 1; 0, 0, 7, 7), t!(23, 4; 0, 1, 6, 7),
        t!(24, 2; 1, 2, 6, 6), t!(24, 2; 0, 0, 7, 8), t!(24, 4; 0, 2, 6, 7), t!(24, 4; 0, 1, 6, 8),
        t!(25, 1; 2, 2, 6, 6), t!(25, 1; 0, 0, 8, 8), t!(25, 4; 0, 2, 6, 8), t!(26, 2; 1, 1, 6, 7),
        t!(26, 2; 0, 1, 7, 7), t!(27, 2; 1, 1, 6, 8), t!(27, 2; 0, 2, 7, 7), t!(27, 4; 1, 2, 6, 7),
        t!(27, 4; 0, 1, 7, 8), t!(28, 2; 2, 2, 6, 7), t!(28, 2; 0, 1, 8, 8), t!(28, 4; 1, 2, 6, 8),
        t!(28, 4; 0, 2, 7, 8), t!(29, 2; 2, 2, 6, 8), t!(29, 2; 0, 2, 8, 8), t!(30, 1; 1, 1, 7, 7),
        t!(31, 2; 1, 2, 7, 7), t!(31, 2; 1, 1, 7, 8), t!(32, 1; 2, 2, 7, 7), t!(32, 1; 1, 1, 8, 8),
        t!(32, 4; 1, 2, 7, 8), t!(33, 2; 2, 2, 7, 8), t!(33, 2; 1, 2, 8, 8), t!(34, 1; 2, 2, 8, 8),
    ],
    // 26: xyyy
    &[
        t!(20, 1; 0, 3, 3, 3), t!(21, 1; 1, 3, 3, 3), t!(21, 3; 0, 3, 3, 4), t!(22, 1; 2, 3, 3, 3),
        t!(22, 3; 0, 3, 3, 5), t!(23, 3; 1, 3, 3, 4), t!(23, 3; 0, 3, 4, 4), t!(24, 3; 2, 3, 3, 4),
        t!(24, 3; 1, 3, 3, 5), t!(24, 6; 0, 3, 4, 5), t!(25, 3; 2, 3, 3, 5), t!(25, 3; 0, 3, 5, 5),
        t!(26, 1; 0, 4, 4, 4), t!(26, 3; 1, 3, 4, 4), t!(27, 3; 2, 3, 4, 4), t!(27, 3; 0, 4, 4, 5),
        t!(27, 6; 1, 3, 4, 5), t!(28, 3; 1, 3, 5, 5), t!(28, 3; 0, 4, 5, 5), t!(28, 6; 2, 3, 4, 5),
        t!(29, 1; 0, 5, 5, 5), t!(29, 3; 2, 3, 5, 5), t!(30, 1; 1, 4, 4, 4), t!(31, 1; 2, 4, 4, 4),
        t!(31, 3; 1, 4, 4, 5), t!(32, 3; 2, 4, 4, 5), t!(32, 3; 1, 4, 5, 5), t!(33, 1; 1, 5, 5, 5),
        t!(33, 3; 2, 4, 5, 5), t!(34, 1; 2, 5, 5, 5),
    ],
    // 27: xyyz
    &[
        t!(20, 1; 0, 3, 3, 6), t!(21, 1; 1, 3, 3, 6), t!(21, 1; 0, 3, 3, 7), t!(21, 2; 0, 3, 4, 6),
        t!(22, 1; 2, 3, 3, 6), t!(22, 1; 0, 3, 3, 8), t!(22, 2; 0, 3, 5, 6), t!(23, 1; 1, 3, 3, 7),
        t!(23, 1; 0, 4, 4, 6), t!(23, 2; 1, 3, 4, 6), t!(23, 2; 0, 3, 4, 7), t!(24, 1; 2, 3, 3, 7),
        t!(24, 1; 1, 3, 3, 8), t!(24, 2; 2, 3, 4, 6), t!(24, 2; 1, 3, 5, 6), t!(24, 2; 0, 4, 5, 6),
        t!(24, 2; 0, 3, 5, 7), t!(24, 2; 0, 3, 4, 8), t!(25, 1; 2, 3, 3, 8), t!(25, 1; 0, 5, 5, 6),
        t!(25, 2; 2, 3, 5, 6), t!(25, 2; 0, 3, 5, 8), t!(26, 1; 1, 4, 4, 6), t!(26, 1; 0, 4, 4, 7),
        t!(26, 2; 1, 3, 4, 7), t!(27, 1; 2, 4, 4, 6), t!(27, 1; 0, 4, 4, 8), t!(27, 2; 2, 3, 4, 7),
        t!(27, 2; 1, 4, 5, 6), t!(27, 2; 1, 3, 5, 7), t!(27, 2; 1, 3, 4, 8), t!(27, 2; 0, 4, 5, 7),
        t!(28, 1; 1, 5, 5, 6), t!(28, 1; 0, 5, 5, 7), t!(28, 2; 2, 4, 5, 6), t!(28, 2; 2, 3, 5, 7),
        t!(28, 2; 2, 3, 4, 8), t!(28, 2; 1, 3, 5, 8), t!(28, 2; 0, 4, 5, 8), t!(29, 1; 2, 5, 5, 6),
        t!(29, 1; 0, 5, 5, 8), t!(29, 2; 2, 3, 5, 8), t!(30, 1; 1, 4, 4, 7), t!(31, 1; 2, 4, 4, 7),
        t!(31, 1; 1, 4, 4, 8), t!(31, 2; 1, 4, 5, 7), t!(32, 1; 2, 4, 4, 8), t!(32, 1; 1, 5, 5, 7),
        t!(32, 2; 2, 4, 5, 7), t!(32, 2; 1, 4, 5, 8), t!(33, 1; 2, 5, 5, 7), t!(33, 1; 1, 5, 5, 8),
        t!(33, 2; 2, 4, 5, 8), t!(34, 1; 2, 5, 5, 8),
    ],
    // 28: xyzz
    &[
        t!(20, 1; 0, 3, 6, 6), t!(21, 1; 1, 3, 6, 6), t!(21, 1; 0, 4, 6, 6), t!(21, 2; 0, 3, 6, 7),
        t!(22, 1; 2, 3, 6, 6), t!(22, 1; 0, 5, 6, 6), t!(22, 2; 0, 3, 6, 8), t!(23, 1; 1, 4, 6, 6),
        t!(23, 1; 0, 3, 7, 7), t!(23, 2; 1, 3, 6, 7), t!(23, 2; 0, 4, 6, 7), t!(24, 1; 2, 4, 6, 6),
        t!(24, 1; 1, 5, 6, 6), t!(24, 2; 2, 3, 6, 7), t!(24, 2; 1, 3, 6, 8), t!(24, 2; 0, 5, 6, 7),
        t!(24, 2; 0, 4, 6, 8), t!(24, 2; 0, 3, 7, 8), t!(25, 1; 2, 5, 6, 6), t!(25, 1; 0, 3, 8, 8),
        t!(25, 2; 2, 3, 6, 8), t!(25, 2; 0, 5, 6, 8), t!(26, 1; 1, 3, 7, 7), t!(26, 1; 0, 4, 7, 7),
        t!(26, 2; 1, 4, 6, 7), t!(27, 1; 2, 3, 7, 7), t!(27, 1; 0, 5, 7, 7), t!(27, 2; 2, 4, 6, 7),
        t!(27, 2; 1, 5, 6, 7), t!(27, 2; 1, 4, 6, 8), t!(27, 2; 1, 3, 7, 8), t!(27, 2; 0, 4, 7, 8),
        t!(28, 1; 1, 3, 8, 8), t!(28, 1; 0, 4, 8, 8), t!(28, 2; 2, 5, 6, 7), t!(28, 2; 2, 4, 6, 8),
        t!(28, 2; 2, 3, 7, 8), t!(28, 2; 1, 5, 6, 8), t!(28, 2; 0, 5, 7, 8), t!(29, 1; 2, 3, 8, 8),
        t!(29, 1; 0, 5, 8, 8), t!(29, 2; 2, 5, 6, 8), t!(30, 1; 1, 4, 7, 7), t!(31, 1; 2, 4, 7, 7),
        t!(31, 1; 1, 5, 7, 7), t!(31, 2; 1, 4, 7, 8), t!(32, 1; 2, 5, 7, 7), t!(32, 1; 1, 4, 8, 8),
        t!(32, 2; 2, 4, 7, 8), t!(32, 2; 1, 5, 7, 8), t!(33, 1; 2, 4, 8, 8), t!(33, 1; 1, 5, 8, 8),
        t!(33, 2; 2, 5, 7, 8), t!(34, 1; 2, 5, 8, 8),
    ],
    // 29: xzzz
    &[
        t!(20, 1; 0, 6, 6, 6), t!(21, 1; 1, 6, 6, 6), t!(21, 3; 0, 6, 6, 7), t!(22, 1; 2, 6, 6, 6),
        t!(22, 3; 0, 6, 6, 8), t!(23, 3; 1, 6, 6, 7), t!(23, 3; 0, 6, 7, 7), t!(24, 3; 2, 6, 6, 7),
        t!(24, 3; 1, 6, 6, 8), t!(24, 6; 0, 6, 7, 8), t!(25, 3; 2, 6, 6, 8), t!(25, 3; 0, 6, 8, 8),
        t!(26, 1; 0, 7, 7, 7), t!(26, 3; 1, 6, 7, 7), t!(27, 3; 2, 6, 7, 7), t!(27, 3; 0, 7, 7, 8),
        t!(27, 6; 1, 6, 7, 8), t!(28, 3; 1, 6, 8, 8), t!(28, 3; 0, 7, 8, 8), t!(28, 6; 2, 6, 7, 8),
        t!(29, 1; 0, 8, 8, 8), t!(29, 3; 2, 6, 8, 8), t!(30, 1; 1, 7, 7, 7), t!(31, 1; 2, 7, 7, 7),
        t!(31, 3; 1, 7, 7, 8), t!(32, 3; 2, 7, 7, 8), t!(32, 3; 1, 7, 8, 8), t!(33, 1; 1, 8, 8, 8),
        t!(33, 3; 2, 7, 8, 8), t!(34, 1; 2, 8, 8, 8),
    ],
    // 30: yyyy
    &[
        t!(20, 1; 3, 3, 3, 3), t!(21, 4; 3, 3, 3, 4), t!(22, 4; 3, 3, 3, 5), t!(23, 6; 3, 3, 4, 4),
        t!(24, 12; 3, 3, 4, 5), t!(25, 6; 3, 3, 5, 5), t!(26, 4; 3, 4, 4, 4),
        t!(27, 12; 3, 4, 4, 5), t!(28, 12; 3, 4, 5, 5), t!(29, 4; 3, 5, 5, 5),
        t!(30, 1; 4, 4, 4, 4), t!(31, 4; 4, 4, 4, 5), t!(32, 6; 4, 4, 5, 5), t!(33, 4; 4, 5, 5, 5),
        t!(34, 1; 5, 5, 5, 5),
    ],
    // 31: yyyz
    &[
        t!(20, 1; 3, 3, 3, 6), t!(21, 1; 3, 3, 3, 7), t!(21, 3; 3, 3, 4, 6), t!(22, 1; 3, 3, 3, 8),
        t!(22, 3; 3, 3, 5, 6), t!(23, 3; 3, 4, 4, 6), t!(23, 3; 3, 3, 4, 7), t!(24, 3; 3, 3, 5, 7),
        t!(24, 3; 3, 3, 4, 8), t!(24, 6; 3, 4, 5, 6), t!(25, 3; 3, 5, 5, 6), t!(25, 3; 3, 3, 5, 8),
        t!(26, 1; 4, 4, 4, 6), t!(26, 3; 3, 4, 4, 7), t!(27, 3; 4, 4, 5, 6), t!(27, 3; 3, 4, 4, 8),
        t!(27, 6; 3, 4, 5, 7), t!(28, 3; 4, 5, 5, 6), t!(28, 3; 3, 5, 5, 7), t!(28, 6; 3, 4, 5, 8),
        t!(29, 1; 5, 5, 5, 6), t!(29, 3; 3, 5, 5, 8), t!(30, 1; 4, 4, 4, 7), t!(31, 1; 4, 4, 4, 8),
        t!(31, 3; 4, 4, 5, 7), t!(32, 3; 4, 5, 5, 7), t!(32, 3; 4, 4, 5, 8), t!(33, 1; 5, 5, 5, 7),
        t!(33, 3; 4, 5, 5, 8), t!(34, 1; 5, 5, 5, 8),
    ],
    // 32: yyzz
    &[
        t!(20, 1; 3, 3, 6, 6), t!(21, 2; 3, 4, 6, 6), t!(21, 2; 3, 3, 6, 7), t!(22, 2; 3, 5, 6, 6),
        t!(22, 2; 3, 3, 6, 8), t!(23, 1; 4, 4, 6, 6), t!(23, 1; 3, 3, 7, 7), t!(23, 4; 3, 4, 6, 7),
        t!(24, 2; 4, 5, 6, 6), t!(24, 2; 3, 3, 7, 8), t!(24, 4; 3, 5, 6, 7), t!(24, 4; 3, 4, 6, 8),
        t!(25, 1; 5, 5, 6, 6), t!(25, 1; 3, 3, 8, 8), t!(25, 4; 3, 5, 6, 8), t!(26, 2; 4, 4, 6, 7),
        t!(26, 2; 3, 4, 7, 7), t!(27, 2; 4, 4, 6, 8), t!(27, 2; 3, 5, 7, 7), t!(27, 4; 4, 5, 6, 7),
        t!(27, 4; 3, 4, 7, 8), t!(28, 2; 5, 5, 6, 7), t!(28, 2; 3, 4, 8, 8), t!(28, 4; 4, 5, 6, 8),
        t!(28, 4; 3, 5, 7, 8), t!(29, 2; 5, 5, 6, 8), t!(29, 2; 3, 5, 8, 8), t!(30, 1; 4, 4, 7, 7),
        t!(31, 2; 4, 5, 7, 7), t!(31, 2; 4, 4, 7, 8), t!(32, 1; 5, 5, 7, 7), t!(32, 1; 4, 4, 8, 8),
        t!(32, 4; 4, 5, 7, 8), t!(33, 2; 5, 5, 7, 8), t!(33, 2; 4, 5, 8, 8), t!(34, 1; 5, 5, 8, 8),
    ],
    // 33: yzzz
    &[
        t!(20, 1; 3, 6, 6, 6), t!(21, 1; 4, 6, 6, 6), t!(21, 3; 3, 6, 6, 7), t!(22, 1; 5, 6, 6, 6),
        t!(22, 3; 3, 6, 6, 8), t!(23, 3; 4, 6, 6, 7), t!(23, 3; 3, 6, 7, 7), t!(24, 3; 5, 6, 6, 7),
        t!(24, 3; 4, 6, 6, 8), t!(24, 6; 3, 6, 7, 8), t!(25, 3; 5, 6, 6, 8), t!(25, 3; 3, 6, 8, 8),
        t!(26, 1; 3, 7, 7, 7), t!(26, 3; 4, 6, 7, 7), t!(27, 3; 5, 6, 7, 7), t!(27, 3; 3, 7, 7, 8),
        t!(27, 6; 4, 6, 7, 8), t!(28, 3; 4, 6, 8, 8), t!(28, 3; 3, 7, 8, 8), t!(28, 6; 5, 6, 7, 8),
        t!(29, 1; 3, 8, 8, 8), t!(29, 3; 5, 6, 8, 8), t!(30, 1; 4, 7, 7, 7), t!(31, 1; 5, 7, 7, 7),
        t!(31, 3; 4, 7, 7, 8), t!(32, 3; 5, 7, 7, 8), t!(32, 3; 4, 7, 8, 8), t!(33, 1; 4, 8, 8, 8),
        t!(33, 3; 5, 7, 8, 8), t!(34, 1; 5, 8, 8, 8),
    ],
    // 34: zzzz
    &[
        t!(20, 1; 6, 6, 6, 6), t!(21, 4; 6, 6, 6, 7), t!(22, 4; 6, 6, 6, 8), t!(23, 6; 6, 6, 7, 7),
        t!(24, 12; 6, 6, 7, 8), t!(25, 6; 6, 6, 8, 8), t!(26, 4; 6, 7, 7, 7),
        t!(27, 12; 6, 7, 7, 8), t!(28, 12; 6, 7, 8, 8), t!(29, 4; 6, 8, 8, 8),
        t!(30, 1; 7, 7, 7, 7), t!(31, 4; 7, 7, 7, 8), t!(32, 6; 7, 7, 8, 8), t!(33, 4; 7, 8, 8, 8),
        t!(34, 1; 8, 8, 8, 8),
    ],
];

/// Returns the rotation rule for the Cartesian moment with global index `i`.
///
/// # Errors
///
/// Errors with [`MomentError::UnsupportedShell`] if `i` lies beyond the tabulated rules.
pub fn cartesian_rotation_rule(i: usize) -> Result<&'static [RotationTerm], MomentError> {
    CARTESIAN_ROTATION_RULES
        .get(i)
        .copied()
        .ok_or(MomentError::UnsupportedShell {
            ncart: i + 1,
            ncart_max: NCART_TABULATED,
        })
}
