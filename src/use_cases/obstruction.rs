// Scan for solid blocks inside the area a set of sails would sweep.

use crate::domain::geometry::{BladeAxis, BlockPos};
use crate::domain::ports::SpatialQuery;

/// In-plane offsets `(dxz, dy)` scanned for sails reaching `len` blocks.
///
/// The square scan skips its own center and, once `len > 1`, its four
/// corners, which lie outside the circle the blade tips trace.
pub fn sweep_offsets(len: i32) -> impl Iterator<Item = (i32, i32)> {
    (-len..=len)
        .flat_map(move |dxz| (-len..=len).map(move |dy| (dxz, dy)))
        .filter(move |&(dxz, dy)| {
            let origin = dxz == 0 && dy == 0;
            let corner = len > 1 && dxz.abs() == len && dy.abs() == len;
            !origin && !corner
        })
}

/// True when any swept cell holds a block the sails would collide with.
/// Stops at the first hit.
pub fn is_obstructed<Q>(query: &Q, origin: BlockPos, axis: BladeAxis, len: i32) -> bool
where
    Q: SpatialQuery + ?Sized,
{
    sweep_offsets(len).any(|(dxz, dy)| {
        let (dx, dz) = axis.horizontal(dxz);
        blocks_sails(query, origin.offset(dx, dy, dz))
    })
}

// Snow has collision boxes but never stops the sails.
fn blocks_sails<Q>(query: &Q, pos: BlockPos) -> bool
where
    Q: SpatialQuery + ?Sized,
{
    !query.collision_volumes_at(pos).is_empty() && !query.block_kind_at(pos).is_negligible()
}
