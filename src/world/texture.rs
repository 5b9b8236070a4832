//! Wall texture storage (§3 Data Model: TextureSet).
//!
//! Narrowed from the teacher's name-keyed `TextureBank`-style cache to the
//! four fixed cardinal faces this renderer actually needs, since walls here
//! are always axis-aligned and one texture unit thick.

/// One square, opaque texel grid. Pixels are packed `0x00RRGGBB`.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub side: usize,
    pub pixels: Vec<u32>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    #[error("texture side {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("textures have inconsistent sides: {0} vs {1}")]
    InconsistentSide(usize, usize),
}

impl Texture {
    pub fn new(side: usize, pixels: Vec<u32>) -> Result<Self, TextureError> {
        if side == 0 || side & (side - 1) != 0 {
            return Err(TextureError::NotPowerOfTwo(side));
        }
        Ok(Self { side, pixels })
    }

    /// Texel at `(x, y)`. Callers are expected to have already reduced
    /// coordinates modulo `side` via the bitmask in §4.F.5.
    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.side + x]
    }
}

/// The four wall faces a DDA hit can select (§4.F.3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    North,
    South,
    East,
    West,
}

/// Four same-sided texel grids, one per cardinal face.
pub struct TextureSet {
    north: Texture,
    south: Texture,
    east: Texture,
    west: Texture,
    side: usize,
}

impl TextureSet {
    pub fn new(
        north: Texture,
        south: Texture,
        east: Texture,
        west: Texture,
    ) -> Result<Self, TextureError> {
        let side = north.side;
        for t in [&south, &east, &west] {
            if t.side != side {
                return Err(TextureError::InconsistentSide(side, t.side));
            }
        }
        Ok(Self {
            north,
            south,
            east,
            west,
            side,
        })
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn face(&self, face: Face) -> &Texture {
        match face {
            Face::North => &self.north,
            Face::South => &self.south,
            Face::East => &self.east,
            Face::West => &self.west,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(side: usize, color: u32) -> Texture {
        Texture::new(side, vec![color; side * side]).unwrap()
    }

    #[test]
    fn rejects_non_power_of_two() {
        let err = Texture::new(3, vec![0; 9]).unwrap_err();
        assert_eq!(err, TextureError::NotPowerOfTwo(3));
    }

    #[test]
    fn rejects_inconsistent_sides() {
        let err =
            TextureSet::new(solid(64, 1), solid(64, 2), solid(32, 3), solid(64, 4)).unwrap_err();
        assert_eq!(err, TextureError::InconsistentSide(64, 32));
    }

    #[test]
    fn builds_with_matching_sides() {
        let set = TextureSet::new(solid(64, 1), solid(64, 2), solid(64, 3), solid(64, 4)).unwrap();
        assert_eq!(set.side(), 64);
        assert_eq!(set.face(Face::East).texel(0, 0), 3);
    }
}
