//! Neighborhood masks used when counting live neighbors

use itertools::iproduct;

/// A 3x3 mask selecting which surrounding offsets count as neighbors.
///
/// `mask[1][1]` is the cell itself and is ignored by the step engine even if set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    mask: [[bool; 3]; 3],
}

impl Neighborhood {
    /// The Moore neighborhood: all 8 surrounding cells, center excluded
    pub const fn moore() -> Self {
        Self {
            mask: [
                [true, true, true],
                [true, false, true],
                [true, true, true],
            ],
        }
    }

    /// Build a neighborhood from an explicit mask
    pub const fn from_mask(mask: [[bool; 3]; 3]) -> Self {
        Self { mask }
    }

    /// Raw mask rows
    pub fn mask(&self) -> &[[bool; 3]; 3] {
        &self.mask
    }

    /// Row/column offsets of the active neighbors, center excluded
    pub fn offsets(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter(move |&(dr, dc)| self.mask[(dr + 1) as usize][(dc + 1) as usize])
    }

    /// Number of active neighbor offsets
    pub fn size(&self) -> usize {
        self.offsets().count()
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::moore()
    }
}

/// Shared Moore neighborhood
pub static MOORE: Neighborhood = Neighborhood::moore();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moore_has_eight_offsets() {
        let offsets: Vec<_> = MOORE.offsets().collect();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(-1, -1)));
        assert!(offsets.contains(&(1, 1)));
    }

    #[test]
    fn test_center_is_never_an_offset() {
        let all = Neighborhood::from_mask([[true; 3]; 3]);
        assert_eq!(all.size(), 8);
    }

    #[test]
    fn test_partial_mask() {
        let von_neumann_like = Neighborhood::from_mask([
            [false, true, false],
            [true, false, true],
            [false, true, false],
        ]);
        let offsets: Vec<_> = von_neumann_like.offsets().collect();
        assert_eq!(offsets, vec![(-1, 0), (0, -1), (0, 1), (1, 0)]);
    }
}
