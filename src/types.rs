use serde::{Deserialize, Serialize};

/// A 2D point in image-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A bounding box defined by top-left corner, width, and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Axis-aligned extent of a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Extent {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// An ordered outline of a facial region (face oval, nose bridge, ...).
/// May be empty when the detector did not produce it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounds over all points, or `None` for an empty contour.
    pub fn extent(&self) -> Option<Extent> {
        extent_of(self.points.iter())
    }

    /// Smallest y among the points.
    pub fn min_y(&self) -> Option<f32> {
        self.points.iter().map(|p| p.y).reduce(f32::min)
    }

    /// Horizontal span of the points whose y satisfies `keep`, together with
    /// how many points were selected.
    pub fn horizontal_span_where<F>(&self, keep: F) -> (usize, f32)
    where
        F: Fn(f32) -> bool,
    {
        let selected = self.points.iter().filter(|p| keep(p.y));
        let mut count = 0;
        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        for p in selected {
            count += 1;
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
        }
        if count == 0 {
            (0, 0.0)
        } else {
            (count, max_x - min_x)
        }
    }
}

fn extent_of<'a, I>(points: I) -> Option<Extent>
where
    I: Iterator<Item = &'a Point>,
{
    points.fold(None, |acc, p| {
        Some(match acc {
            None => Extent {
                min_x: p.x,
                max_x: p.x,
                min_y: p.y,
                max_y: p.y,
            },
            Some(e) => Extent {
                min_x: e.min_x.min(p.x),
                max_x: e.max_x.max(p.x),
                min_y: e.min_y.min(p.y),
                max_y: e.max_y.max(p.y),
            },
        })
    })
}

/// Named landmark points reported by the face detector. Any of them may be
/// missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceLandmarks {
    #[serde(default)]
    pub left_eye: Option<Point>,
    #[serde(default)]
    pub right_eye: Option<Point>,
    #[serde(default)]
    pub nose_base: Option<Point>,
    #[serde(default)]
    pub mouth_bottom: Option<Point>,
    #[serde(default)]
    pub mouth_left: Option<Point>,
}

impl FaceLandmarks {
    /// Mouth reference point: the bottom of the mouth, or its left corner when
    /// the bottom was not detected.
    pub fn mouth(&self) -> Option<Point> {
        self.mouth_bottom.or(self.mouth_left)
    }
}
