use crate::Point;

/// Describes how to convert from a 3D point to a linear array index.
pub trait Indexer: Clone {
    /// `s` is the size of an extent. `p` is a local point.
    fn index_from_local_point(s: &Point, p: &Point) -> usize;
}

/// Most `Indexer`s should not require state to be instantiated.
pub trait StatelessIndexer: Default + Indexer {}

/// Lays out points in the same order that `ExtentIterator` visits them: X outermost, Z innermost.
/// Iterating an extent and walking the linear storage therefore touch memory sequentially.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RasterIndexer;

impl StatelessIndexer for RasterIndexer {}

impl Indexer for RasterIndexer {
    fn index_from_local_point(s: &Point, p: &Point) -> usize {
        ((p.x * s.y + p.y) * s.z + p.z) as usize
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
