mod boundary;
mod region_id;

pub use boundary::{BoundarySet, Region};
pub use region_id::RegionId;
