//! Seeded query points for tests and benchmarks.
//!
//! Determinism: every sampler takes an explicit seed and draws from a fresh
//! `StdRng`, so the same seed reproduces the same points.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::mesh::{Dim, Mesh, Point};

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3 {
    pub min: Point,
    pub max: Point,
}

impl Bounds3 {
    /// Smallest box containing `points`; `None` if empty.
    pub fn of_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut it = points.into_iter();
        let first = *it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Some(Self { min, max })
    }

    /// Bounds of a mesh's node coordinates.
    #[inline]
    pub fn of_mesh(mesh: &Mesh) -> Option<Self> {
        Self::of_points(mesh.nodes().iter().map(|n| &n.point))
    }

    /// Box grown by `margin` on every side.
    pub fn padded(&self, margin: f64) -> Self {
        let m = Point::repeat(margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    #[inline]
    pub fn extent(&self) -> Point {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        (0..3).all(|i| self.min[i] <= p[i] && p[i] <= self.max[i])
    }
}

/// `count` points uniform in `bounds`. With `Dim::Two` the z-coordinate is 0.
pub fn points_in_bounds(bounds: &Bounds3, dim: Dim, count: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let ext = bounds.extent();
    (0..count)
        .map(|_| {
            let mut p = Point::zeros();
            for i in 0..dim.axes() {
                p[i] = bounds.min[i] + rng.gen::<f64>() * ext[i];
            }
            p
        })
        .collect()
}

/// Regular `n`-per-axis lattice spanning `bounds` (corners included), x-fastest.
pub fn lattice_in_bounds(bounds: &Bounds3, dim: Dim, n: usize) -> Vec<Point> {
    if n == 0 {
        return Vec::new();
    }
    let step = |i: usize, axis: usize| {
        if n == 1 {
            bounds.min[axis] + 0.5 * bounds.extent()[axis]
        } else {
            bounds.min[axis] + bounds.extent()[axis] * i as f64 / (n - 1) as f64
        }
    };
    let nz = if dim == Dim::Three { n } else { 1 };
    let mut out = Vec::with_capacity(n * n * nz);
    for k in 0..nz {
        for j in 0..n {
            for i in 0..n {
                let z = if dim == Dim::Three { step(k, 2) } else { 0.0 };
                out.push(Point::new(step(i, 0), step(j, 1), z));
            }
        }
    }
    out
}
