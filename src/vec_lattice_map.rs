use crate::{Extent, Indexer, Point, RasterIndexer, StatelessIndexer};

/// A dense map from every point in an extent to some kind of data `T`. Used as scratch space by
/// the grid algorithms, which need O(1) neighbor access over the whole bounding box.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VecLatticeMap<T, I = RasterIndexer> {
    indexer: I,
    extent: Extent,
    values: Vec<T>,
}

impl<T, I: Indexer> VecLatticeMap<T, I> {
    pub fn new_with_indexer(extent: Extent, indexer: I, values: Vec<T>) -> Self {
        assert_eq!(extent.volume(), values.len());

        VecLatticeMap {
            extent,
            indexer,
            values,
        }
    }

    pub fn get_extent(&self) -> &Extent {
        &self.extent
    }

    pub fn index_from_local_point(&self, p: &Point) -> usize {
        I::index_from_local_point(&self.extent.get_local_supremum(), p)
    }

    pub fn index_from_world_point(&self, p: &Point) -> usize {
        self.index_from_local_point(&self.extent.local_point_from_world_point(p))
    }

    pub fn get_world_ref(&self, p: &Point) -> &T {
        &self.values[self.index_from_world_point(p)]
    }

    pub fn get_world_ref_mut(&mut self, p: &Point) -> &mut T {
        let i = self.index_from_world_point(p);

        &mut self.values[i]
    }

    /// Returns `None` when `p` is outside of the extent.
    pub fn maybe_get_world_ref(&self, p: &Point) -> Option<&T> {
        if self.extent.contains_world(p) {
            Some(self.get_world_ref(p))
        } else {
            None
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterates over `(world point, value)` in linear order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        let extent = self.extent;

        extent.into_iter().zip(self.values.iter())
    }

    pub fn map<F, S>(&self, f: F) -> VecLatticeMap<S, I>
    where
        F: Fn(&T) -> S,
    {
        VecLatticeMap::new_with_indexer(
            self.extent,
            self.indexer.clone(),
            self.values.iter().map(f).collect(),
        )
    }
}

impl<T: Clone, I: StatelessIndexer> VecLatticeMap<T, I> {
    pub fn fill(extent: Extent, init_val: T) -> Self {
        VecLatticeMap {
            extent,
            indexer: I::default(),
            values: vec![init_val; extent.volume()],
        }
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
