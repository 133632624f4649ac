//! Injectable id and placement sources
//!
//! Window ids and spawn offsets are the only non-deterministic inputs of a
//! transition. Both come in through these traits so tests can pin them.

use crate::config::OffsetRange;
use crate::math::Vec2;
use crate::window::WindowId;

/// Produces window ids; every id handed out must be unique for the session
pub trait IdSource {
    /// Next unused id
    fn next_id(&mut self) -> WindowId;
}

/// Monotonic counter ids starting at 1
#[derive(Clone, Debug)]
pub struct SequentialIds {
    next: WindowId,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl SequentialIds {
    /// Counter whose first id is `first`
    pub const fn starting_at(first: WindowId) -> Self {
        Self { next: first }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> WindowId {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Chooses the initial offset of a new window
pub trait Placement {
    /// An offset inside `range`
    fn place(&mut self, range: &OffsetRange) -> Vec2;
}

/// Uniform random offsets from the platform entropy source
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPlacement;

impl RandomPlacement {
    /// Two unit samples in `[0, 1)`
    fn unit_pair() -> Result<(f32, f32), getrandom::Error> {
        let mut buf = [0u8; 8];
        getrandom::getrandom(&mut buf)?;
        let a = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        let b = u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
        // 24 bits is the f32 mantissa width, so the result stays below 1.0
        let scale = (1u32 << 24) as f32;
        Ok(((a >> 8) as f32 / scale, (b >> 8) as f32 / scale))
    }
}

impl Placement for RandomPlacement {
    fn place(&mut self, range: &OffsetRange) -> Vec2 {
        match Self::unit_pair() {
            Ok((tx, ty)) => range.sample(tx, ty),
            Err(e) => {
                log::warn!("[placement] entropy unavailable ({}), centring window", e);
                range.sample(0.5, 0.5)
            }
        }
    }
}

/// Always the same offset (clamped to the range)
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedPlacement(pub Vec2);

impl Placement for FixedPlacement {
    fn place(&mut self, range: &OffsetRange) -> Vec2 {
        range.clamp(self.0)
    }
}

/// Replays a list of offsets in order, wrapping around at the end
#[derive(Clone, Debug)]
pub struct ScriptedPlacement {
    offsets: Vec<Vec2>,
    cursor: usize,
}

impl ScriptedPlacement {
    /// Replay `offsets`; an empty script places every window at the origin
    pub fn new(offsets: Vec<Vec2>) -> Self {
        Self { offsets, cursor: 0 }
    }
}

impl Placement for ScriptedPlacement {
    fn place(&mut self, range: &OffsetRange) -> Vec2 {
        let Some(offset) = self.offsets.get(self.cursor % self.offsets.len().max(1)) else {
            return range.clamp(Vec2::ZERO);
        };
        self.cursor += 1;
        range.clamp(*offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);

        let mut ids = SequentialIds::starting_at(100);
        assert_eq!(ids.next_id(), 100);
    }

    #[test]
    fn test_random_placement_stays_in_range() {
        let range = OffsetRange::symmetric(50.0, 50.0);
        let mut placement = RandomPlacement;
        for _ in 0..200 {
            let p = placement.place(&range);
            assert!(range.contains(p), "{:?} escaped {:?}", p, range);
        }
    }

    #[test]
    fn test_scripted_placement_wraps_and_clamps() {
        let range = OffsetRange::symmetric(50.0, 50.0);
        let mut placement = ScriptedPlacement::new(vec![
            Vec2::new(10.0, -10.0),
            Vec2::new(200.0, 0.0),
        ]);
        assert_eq!(placement.place(&range), Vec2::new(10.0, -10.0));
        assert_eq!(placement.place(&range), Vec2::new(50.0, 0.0));
        assert_eq!(placement.place(&range), Vec2::new(10.0, -10.0));

        let mut empty = ScriptedPlacement::new(Vec::new());
        assert_eq!(empty.place(&range), Vec2::ZERO);
    }
}
