use itertools::Itertools;

use crate::angmom::{ncart, ncart_cumul};
use crate::basis::cart_order::{cart_tuple_to_str, cartesian_powers, CartOrder};

#[test]
fn test_cart_order_lex() {
    // =========
    // lcart = 0
    // =========
    let co_0_lex = CartOrder::lex(0);
    assert_eq!(co_0_lex.cart_tuples, vec![(0, 0, 0)]);

    // =========
    // lcart = 1
    // =========
    let co_1_lex = CartOrder::lex(1);
    assert_eq!(co_1_lex.cart_tuples, vec![(1, 0, 0), (0, 1, 0), (0, 0, 1)]);

    // =========
    // lcart = 2
    // =========
    let co_2_lex = CartOrder::lex(2);
    assert_eq!(
        co_2_lex.cart_tuples,
        vec![
            (2, 0, 0),
            (1, 1, 0),
            (1, 0, 1),
            (0, 2, 0),
            (0, 1, 1),
            (0, 0, 2),
        ]
    );

    // =========
    // lcart = 3
    // =========
    let co_3_lex = CartOrder::lex(3);
    assert_eq!(
        co_3_lex
            .iter()
            .map(|ct| cart_tuple_to_str(ct, true))
            .collect::<Vec<_>>(),
        vec!["xxx", "xxy", "xxz", "xyy", "xyz", "xzz", "yyy", "yyz", "yzz", "zzz"]
    );
    assert_eq!(co_3_lex.ncomps(), 10);
    assert_eq!(co_3_lex.lcart, 3);

    for lcart in 0..=10 {
        let co = CartOrder::lex(lcart);
        assert_eq!(Some(co.ncomps()), ncart(lcart));
        assert!(co.iter().all(|(nx, ny, nz)| nx + ny + nz == lcart));
        assert!(co.iter().tuple_windows().all(|(a, b)| (a.0, a.1) > (b.0, b.1)));
    }
}

#[test]
fn test_cart_order_cartesian_powers() {
    for lmax in 0..=8 {
        let powers = cartesian_powers(lmax);
        assert_eq!(Some(powers.len()), ncart_cumul(lmax));
        let mut offset = 0;
        for l in 0..=lmax {
            let shell = &powers[offset..offset + CartOrder::lex(l).ncomps()];
            assert!(shell.iter().all(|(nx, ny, nz)| nx + ny + nz == l));
            offset += shell.len();
        }
    }

    let powers = cartesian_powers(2);
    assert_eq!(
        powers,
        vec![
            (0, 0, 0),
            (1, 0, 0),
            (0, 1, 0),
            (0, 0, 1),
            (2, 0, 0),
            (1, 1, 0),
            (1, 0, 1),
            (0, 2, 0),
            (0, 1, 1),
            (0, 0, 2),
        ]
    );
}

#[test]
fn test_cart_order_cart_tuple_to_str() {
    assert_eq!(cart_tuple_to_str(&(0, 0, 0), true), "1");
    assert_eq!(cart_tuple_to_str(&(0, 0, 0), false), "1");
    assert_eq!(cart_tuple_to_str(&(2, 1, 1), true), "xxyz");
    assert_eq!(cart_tuple_to_str(&(2, 1, 1), false), "x^2yz");
    assert_eq!(cart_tuple_to_str(&(0, 0, 4), false), "z^4");
}

