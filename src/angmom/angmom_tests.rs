use crate::angmom::{lmax_from_ncart_cumul, ncart, ncart_cumul, npure, npure_cumul};

#[test]
fn test_angmom_ncart() {
    assert_eq!(
        (0..=4).map(|l| ncart(l).unwrap()).collect::<Vec<_>>(),
        vec![1, 3, 6, 10, 15]
    );
    assert_eq!(ncart(10), Some(66));
}

#[test]
fn test_angmom_ncart_cumul() {
    assert_eq!(
        (0..=4).map(|l| ncart_cumul(l).unwrap()).collect::<Vec<_>>(),
        vec![1, 4, 10, 20, 35]
    );
    for lmax in 0..20 {
        assert_eq!(
            ncart_cumul(lmax),
            Some((0..=lmax).map(|l| ncart(l).unwrap()).sum::<usize>())
        );
    }
}

#[test]
fn test_angmom_npure() {
    assert_eq!(
        (0..=4).map(|l| npure(l).unwrap()).collect::<Vec<_>>(),
        vec![1, 3, 5, 7, 9]
    );
    assert_eq!(npure_cumul(4), Some(25));
    for lmax in 0..20 {
        assert_eq!(
            npure_cumul(lmax),
            Some((0..=lmax).map(|l| npure(l).unwrap()).sum::<usize>())
        );
    }
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_angmom_large_degrees() {
    // The intermediate products overflow `u64` although the counts themselves fit.
    assert_eq!(ncart_cumul(3_000_000), Some(4_500_009_000_005_500_001));
    assert_eq!(ncart(u32::MAX), Some(9_223_372_039_002_259_456));
    assert_eq!(npure(u32::MAX), Some(8_589_934_591));

    // These exceed `usize::MAX`.
    assert_eq!(ncart_cumul(u32::MAX), None);
    assert_eq!(npure_cumul(u32::MAX), None);
    assert_eq!(npure_cumul(u32::MAX - 1), Some(usize::MAX - 2 * (u32::MAX as usize)));

    assert_eq!(lmax_from_ncart_cumul(4_500_009_000_005_500_001), Some(3_000_000));
    assert_eq!(lmax_from_ncart_cumul(4_500_009_000_005_500_002), None);
    assert_eq!(lmax_from_ncart_cumul(usize::MAX), None);
}

#[test]
fn test_angmom_lmax_from_ncart_cumul() {
    assert_eq!(lmax_from_ncart_cumul(1), Some(0));
    assert_eq!(lmax_from_ncart_cumul(4), Some(1));
    assert_eq!(lmax_from_ncart_cumul(35), Some(4));
    assert_eq!(lmax_from_ncart_cumul(56), Some(5));
    assert_eq!(lmax_from_ncart_cumul(0), None);
    assert_eq!(lmax_from_ncart_cumul(5), None);
    assert_eq!(lmax_from_ncart_cumul(36), None);
}
