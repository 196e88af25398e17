use core::cmp::Ordering;
use core::iter::FusedIterator;

use crate::math::{AreaPoint, BlockArea, BlockRegion, GridPoint};

/// Iterator produced by [`BlockRegion::iter()`].
///
/// X varies fastest, then Y, then Z.
#[derive(Clone, Debug)]
pub struct BlockRegionIter {
    region: BlockRegion,
    /// Next point to produce, unless `done`.
    cursor: GridPoint,
    done: bool,
}

impl BlockRegionIter {
    #[inline]
    pub(in crate::math) fn new(region: BlockRegion) -> Self {
        Self {
            region,
            cursor: region.min(),
            done: region.is_empty(),
        }
    }

    /// Returns the region which this iterator iterates over.
    /// This may be larger than the set of points remaining, but it will not be smaller.
    #[inline]
    pub fn region(&self) -> BlockRegion {
        self.region
    }

    /// Returns whether the iterator will produce the given point.
    #[inline]
    pub fn contains_point(&self, point: GridPoint) -> bool {
        if self.done || !self.region.contains_point(point) {
            return false;
        }
        match point.z.cmp(&self.cursor.z) {
            Ordering::Greater => true, // in a layer not yet emitted
            Ordering::Less => false,   // in a layer already emitted
            Ordering::Equal => match point.y.cmp(&self.cursor.y) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => point.x >= self.cursor.x,
            },
        }
    }
}

impl Iterator for BlockRegionIter {
    type Item = GridPoint;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.cursor;
        let (min, max) = (self.region.min(), self.region.max());

        // Comparing before incrementing keeps this correct at the ends of the coordinate range.
        if self.cursor.x < max.x {
            self.cursor.x += 1;
        } else {
            self.cursor.x = min.x;
            if self.cursor.y < max.y {
                self.cursor.y += 1;
            } else {
                self.cursor.y = min.y;
                if self.cursor.z < max.z {
                    self.cursor.z += 1;
                } else {
                    self.done = true;
                }
            }
        }

        Some(result)
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "unclear benefit")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (min, max) = (self.region.min(), self.region.max());
        let len = |lo: i32, hi: i32| (i64::from(hi) - i64::from(lo)).unsigned_abs();
        let row = len(min.x, max.x) + 1;
        let layer = (len(min.y, max.y) + 1).checked_mul(row);
        let remaining = layer
            .and_then(|layer| len(self.cursor.z, max.z).checked_mul(layer))
            .and_then(|n| n.checked_add(len(self.cursor.y, max.y) * row))
            .and_then(|n| n.checked_add(len(self.cursor.x, max.x) + 1))
            .and_then(|n| usize::try_from(n).ok());
        match remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }

    // Override fold() to achieve greater performance via simpler iteration.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut state = init;

        // If the iterator has been partly advanced, step it until the rest is a box.
        #[cold]
        #[inline(never)]
        fn cold_next(i: &mut BlockRegionIter) -> Option<GridPoint> {
            i.next()
        }
        let (min, max) = (self.region.min(), self.region.max());
        while self.cursor.x != min.x || self.cursor.y != min.y {
            let Some(point) = cold_next(&mut self) else {
                return state;
            };
            state = f(state, point);
        }
        if self.done {
            return state;
        }

        for z in self.cursor.z..=max.z {
            for y in min.y..=max.y {
                for x in min.x..=max.x {
                    state = f(state, GridPoint::new(x, y, z));
                }
            }
        }
        state
    }
}

impl FusedIterator for BlockRegionIter {}

/// Iterator produced by [`BlockArea::iter()`].
///
/// X varies fastest, then Y.
#[derive(Clone, Debug)]
pub struct BlockAreaIter {
    area: BlockArea,
    cursor: AreaPoint,
    done: bool,
}

impl BlockAreaIter {
    #[inline]
    pub(in crate::math) fn new(area: BlockArea) -> Self {
        Self {
            area,
            cursor: area.min(),
            done: area.is_empty(),
        }
    }

    /// Returns the area which this iterator iterates over.
    #[inline]
    pub fn area(&self) -> BlockArea {
        self.area
    }
}

impl Iterator for BlockAreaIter {
    type Item = AreaPoint;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.cursor;
        let (min, max) = (self.area.min(), self.area.max());
        if self.cursor.x < max.x {
            self.cursor.x += 1;
        } else {
            self.cursor.x = min.x;
            if self.cursor.y < max.y {
                self.cursor.y += 1;
            } else {
                self.done = true;
            }
        }
        Some(result)
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "unclear benefit")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (min, max) = (self.area.min(), self.area.max());
        let len = |lo: i32, hi: i32| (i64::from(hi) - i64::from(lo)).unsigned_abs();
        let row = len(min.x, max.x) + 1;
        let remaining = len(self.cursor.y, max.y)
            .checked_mul(row)
            .and_then(|n| n.checked_add(len(self.cursor.x, max.x) + 1))
            .and_then(|n| usize::try_from(n).ok());
        match remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for BlockAreaIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_items() {
        assert_eq!(BlockRegion::EMPTY.iter().next(), None);
        assert_eq!(BlockRegion::EMPTY.iter().size_hint(), (0, Some(0)));
        assert_eq!(BlockArea::EMPTY.iter().next(), None);
    }

    #[test]
    fn x_varies_fastest() {
        let points: Vec<GridPoint> = BlockRegion::from_min_max([0, 0, 0], [1, 1, 1])
            .iter()
            .collect();
        assert_eq!(
            points,
            [
                [0, 0, 0],
                [1, 0, 0],
                [0, 1, 0],
                [1, 1, 0],
                [0, 0, 1],
                [1, 0, 1],
                [0, 1, 1],
                [1, 1, 1],
            ]
            .map(GridPoint::from)
        );
    }

    #[test]
    fn correct_at_max() {
        let region = BlockRegion::from_min_max(
            [i32::MAX - 1, i32::MAX - 1, i32::MAX - 1],
            [i32::MAX, i32::MAX, i32::MAX],
        );
        assert_eq!(region.iter().count(), 8);
        assert_eq!(region.iter().last(), Some(GridPoint::splat(i32::MAX)));
    }

    #[test]
    fn correct_at_min() {
        let region = BlockRegion::from_min_max(
            [i32::MIN, i32::MIN, i32::MIN],
            [i32::MIN + 1, i32::MIN + 1, i32::MIN + 1],
        );
        assert_eq!(region.iter().count(), 8);
        assert_eq!(region.iter().next(), Some(GridPoint::splat(i32::MIN)));
    }

    #[test]
    fn size_hint_at_every_step() {
        let region = BlockRegion::from_min_size([1, 2, 3], [3, 2, 4]);
        let expected_size = 24;
        let mut iter = region.iter();
        for remaining in (1..=expected_size).rev() {
            assert_eq!(iter.size_hint(), (remaining, Some(remaining)));
            assert!(iter.next().is_some());
        }
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn size_hint_too_large() {
        assert_eq!(BlockRegion::EVERYWHERE.iter().size_hint(), (usize::MAX, None));
    }

    #[test]
    fn next_and_fold_are_equivalent() {
        let region = BlockRegion::from_min_size([0, -5, 10], [3, 2, 2]);
        for start in 0..=region.iter().count() {
            let mut iter = region.iter();
            for _ in 0..start {
                iter.next();
            }
            let by_next: Vec<GridPoint> = iter.clone().collect();
            let by_fold = iter.fold(Vec::new(), |mut v, p| {
                v.push(p);
                v
            });
            assert_eq!(by_next, by_fold, "starting after {start}");
        }
    }

    #[test]
    fn contains_point_tracks_progress() {
        let region = BlockRegion::from_min_size([0, 0, 0], [2, 2, 2]);
        let mut iter = region.iter();
        let all: Vec<GridPoint> = region.iter().collect();
        for (i, point) in all.iter().enumerate() {
            for (j, other) in all.iter().enumerate() {
                assert_eq!(iter.contains_point(*other), j >= i, "{i} {j}");
            }
            assert_eq!(iter.next(), Some(*point));
        }
        assert!(!iter.contains_point(GridPoint::new(1, 1, 1)));
        assert!(!iter.contains_point(GridPoint::new(5, 5, 5)));
    }

    #[test]
    fn area_iteration_order() {
        let points: Vec<AreaPoint> = BlockArea::from_min_max([3, 7], [4, 8]).iter().collect();
        assert_eq!(points, [[3, 7], [4, 7], [3, 8], [4, 8]].map(AreaPoint::from));
        let mut iter = BlockArea::from_min_max([3, 7], [4, 8]).iter();
        assert_eq!(iter.size_hint(), (4, Some(4)));
        iter.next();
        iter.next();
        iter.next();
        assert_eq!(iter.size_hint(), (1, Some(1)));
    }
}
