// A graph-network function to find arg-min
//
// Picks the best of a few heap siblings with a fixed tournament instead of a
// linear scan, so the comparisons don't depend on each other.

/// Core comparison and index selection
///
/// Ties go left.
#[inline(always)]
#[must_use]
fn fight<T: PartialOrd>(a: &[T], l: usize, r: usize) -> usize {
    if a[l] <= a[r] { l } else { r }
}

// 0   1
// *   *
//  \ /
//   *
#[inline(always)]
#[must_use]
pub fn derank_2<T: PartialOrd>(a: &[T]) -> usize {
    debug_assert!(a.len() == 2);
    fight(a, 0, 1)
}

// 0   1   2
// *   *   *
//  \ /    |
//   *     *
//    \   /
//      *
#[inline(always)]
#[must_use]
pub fn derank_3<T: PartialOrd>(a: &[T]) -> usize {
    debug_assert!(a.len() == 3);
    fight(
        a,              //
        fight(a, 0, 1), //
        2,
    )
}

// 0   1   2   3
// *   *   *   *
//  \ /     \ /
//   *       *
//    \     /
//       *
#[inline(always)]
#[must_use]
pub fn derank_4<T: PartialOrd>(a: &[T]) -> usize {
    debug_assert!(a.len() == 4);
    fight(
        a, //
        fight(a, 0, 1),
        fight(a, 2, 3),
    )
}

/// Index of the first minimum of a non-empty slice of up to 4 elements.
#[inline(always)]
#[must_use]
pub fn derank<T: PartialOrd>(a: &[T]) -> usize {
    match a.len() {
        1 => 0usize,
        2 => derank_2(a),
        3 => derank_3(a),
        4 => derank_4(a),
        _ => linear_min_index(a),
    }
}

pub fn linear_min_index<T: PartialOrd>(xs: &[T]) -> usize {
    debug_assert!(!xs.is_empty());

    let mut min_i = 0;
    for (i, x) in xs.iter().enumerate() {
        if *x < xs[min_i] {
            min_i = i;
        }
    }
    min_i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_linear_scan() {
        let cases: [&[u8]; 9] = [
            &[4],
            &[1, 0],
            &[0, 1],
            &[2, 2],
            &[3, 1, 2],
            &[2, 2, 1],
            &[4, 3, 2, 1],
            &[1, 3, 1, 0],
            &[0, 0, 0, 0],
        ];
        for a in cases {
            assert_eq!(derank(a), linear_min_index(a), "derank({a:?})");
        }
    }

    #[test]
    fn ties_go_to_the_first() {
        assert_eq!(derank(&[5, 5, 5, 5]), 0);
        assert_eq!(derank(&[5, 1, 1]), 1);
        assert_eq!(derank(&[6, 5, 9, 9, 9, 5]), 1);
    }
}
