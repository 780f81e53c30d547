/// Iterator over every way of choosing `k` indices from `0..n`, in lexicographic order.
///
/// ```
/// use poker_hands::search::Combinations;
///
/// let combos: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(combos.len(), 6);
/// assert_eq!(combos[0], vec![0, 1]);
/// assert_eq!(combos[5], vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    /// Choosing more than `n` yields nothing; choosing zero yields one empty selection.
    pub fn new(n: usize, k: usize) -> Self {
        if k > n {
            return Self { n, indices: Vec::new(), done: true };
        }
        Self { n, indices: (0..k).collect(), done: false }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices.clone();
        let k = self.indices.len();

        // Find the rightmost index that can be incremented
        match (0..k).rposition(|i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                // Reset all indices to the right
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn counts_match_binomials() {
        assert_eq!(Combinations::new(4, 2).count(), 6);
        assert_eq!(Combinations::new(5, 3).count(), 10);
        assert_eq!(Combinations::new(7, 5).count(), 21);
        assert_eq!(Combinations::new(5, 5).count(), 1);
        assert_eq!(Combinations::new(4, 0).count(), 1);
        assert_eq!(Combinations::new(0, 0).count(), 1);
        assert_eq!(Combinations::new(3, 4).count(), 0);
    }

    #[test]
    fn huge_selection_yields_nothing() {
        assert_eq!(Combinations::new(3, usize::MAX / 2).count(), 0);
        assert!(Combinations::new(0, usize::MAX).next().is_none());
    }

    #[test]
    fn five_choose_three_in_order() {
        let combos: Vec<Vec<usize>> = Combinations::new(5, 3).collect();
        let expected: Vec<Vec<usize>> = vec![
            vec![0, 1, 2],
            vec![0, 1, 3],
            vec![0, 1, 4],
            vec![0, 2, 3],
            vec![0, 2, 4],
            vec![0, 3, 4],
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 3, 4],
            vec![2, 3, 4],
        ];
        assert_eq!(combos, expected);
    }

    #[test]
    fn indices_are_valid_and_unique() {
        let combos: Vec<Vec<usize>> = Combinations::new(7, 5).collect();
        let mut seen = HashSet::new();
        for combo in &combos {
            assert!(combo.iter().all(|&i| i < 7));
            assert!(combo.windows(2).all(|w| w[0] < w[1]));
            assert!(seen.insert(combo.clone()), "Duplicate: {combo:?}");
        }
        assert_eq!(combos.first(), Some(&vec![0, 1, 2, 3, 4]));
        assert_eq!(combos.last(), Some(&vec![2, 3, 4, 5, 6]));
    }

    #[test]
    fn iterator_stays_exhausted() {
        let mut iter = Combinations::new(2, 1);
        assert_eq!(iter.next(), Some(vec![0]));
        assert_eq!(iter.next(), Some(vec![1]));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
