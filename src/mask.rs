use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Trait for reading a binary skin raster produced by an external segmenter.
pub trait MaskAccess {
    /// Whether the pixel at (x, y) is skin. Out-of-bounds pixels are not skin.
    fn is_skin(&self, x: u32, y: u32) -> bool;

    /// Raster dimensions.
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// A simple row-major boolean mask implementing MaskAccess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSkinMask")]
pub struct SkinMask {
    data: Vec<bool>,
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
struct RawSkinMask {
    data: Vec<bool>,
    width: u32,
    height: u32,
}

impl TryFrom<RawSkinMask> for SkinMask {
    type Error = Error;

    fn try_from(raw: RawSkinMask) -> Result<Self> {
        SkinMask::new(raw.data, raw.width, raw.height)
    }
}

impl SkinMask {
    /// Wrap row-major pixel data. Fails unless `data` holds exactly
    /// `width * height` pixels.
    pub fn new(data: Vec<bool>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidMask(format!(
                "{}x{} mask needs {} pixels, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> bool,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }
}

impl MaskAccess for SkinMask {
    fn is_skin(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.data.get(idx).copied().unwrap_or(false)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

/// Inclusive pixel rectangle covering every skin pixel of a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskBounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

/// Scan the whole raster and return the rectangle enclosing all skin pixels,
/// or `None` if no pixel is marked.
pub fn find_skin_bounds<M: MaskAccess + ?Sized>(mask: &M) -> Option<MaskBounds> {
    let mut bounds: Option<MaskBounds> = None;
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            if !mask.is_skin(x, y) {
                continue;
            }
            bounds = Some(match bounds {
                None => MaskBounds {
                    left: x,
                    top: y,
                    right: x,
                    bottom: y,
                },
                Some(b) => MaskBounds {
                    left: b.left.min(x),
                    top: b.top.min(y),
                    right: b.right.max(x),
                    bottom: b.bottom.max(y),
                },
            });
        }
    }
    bounds
}
