//! Enclosed-volume integration over a triangle soup

use nalgebra::Point3;

/// One facet of a triangulated surface
///
/// Triangles are processed independently; no adjacency is required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point3<f64>,
    pub b: Point3<f64>,
    pub c: Point3<f64>,
}

impl Triangle {
    pub fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self { a, b, c }
    }

    /// Build a triangle from three [x, y, z] coordinate triples
    pub fn from_coords(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Self {
        Self::new(
            Point3::new(a[0], a[1], a[2]),
            Point3::new(b[0], b[1], b[2]),
            Point3::new(c[0], c[1], c[2]),
        )
    }

    /// Reverse the winding direction
    pub fn flipped(&self) -> Self {
        Self::new(self.a, self.c, self.b)
    }
}

/// Result of a volume measurement, in the cubic units of the source mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeResult {
    /// Enclosed volume, always >= 0
    pub volume_cubic_units: f64,
}

/// Signed volume of the tetrahedron spanned by a triangle and the origin
fn signed_tetrahedron_volume(t: &Triangle) -> f64 {
    t.a.coords.dot(&t.b.coords.cross(&t.c.coords)) / 6.0
}

/// Integrate the volume enclosed by a closed triangulated surface
///
/// Sums `dot(p1, cross(p2, p3)) / 6` over all facets and takes the absolute
/// value of the total. For a closed surface the origin terms cancel, so the
/// result is translation-independent, and the final absolute value makes it
/// insensitive to the winding convention. Degenerate facets contribute ~0.
///
/// The closed-surface requirement is NOT checked: an open or non-manifold
/// mesh yields a meaningless value with no error.
pub fn measure_volume(triangles: &[Triangle]) -> VolumeResult {
    let signed: f64 = triangles.iter().map(signed_tetrahedron_volume).sum();
    VolumeResult {
        volume_cubic_units: signed.abs(),
    }
}

/// Axis-aligned unit cube at the origin, 12 outward-wound triangles
pub fn unit_cube() -> Vec<Triangle> {
    vec![
        // -X face
        Triangle::from_coords([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0]),
        Triangle::from_coords([0.0, 0.0, 0.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]),
        // +X face
        Triangle::from_coords([1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]),
        Triangle::from_coords([1.0, 0.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]),
        // -Y face
        Triangle::from_coords([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0]),
        Triangle::from_coords([0.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]),
        // +Y face
        Triangle::from_coords([0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
        Triangle::from_coords([0.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]),
        // -Z face
        Triangle::from_coords([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]),
        Triangle::from_coords([0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
        // +Z face
        Triangle::from_coords([0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0]),
        Triangle::from_coords([0.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    const TOL: f64 = 1e-6;

    fn translated(triangles: &[Triangle], offset: Vector3<f64>) -> Vec<Triangle> {
        triangles
            .iter()
            .map(|t| Triangle::new(t.a + offset, t.b + offset, t.c + offset))
            .collect()
    }

    fn scaled(triangles: &[Triangle], factor: f64) -> Vec<Triangle> {
        triangles
            .iter()
            .map(|t| {
                Triangle::new(
                    (t.a.coords * factor).into(),
                    (t.b.coords * factor).into(),
                    (t.c.coords * factor).into(),
                )
            })
            .collect()
    }

    #[test]
    fn test_unit_cube_volume() {
        let result = measure_volume(&unit_cube());
        assert!(
            (result.volume_cubic_units - 1.0).abs() < TOL,
            "unit cube volume was {}",
            result.volume_cubic_units
        );
    }

    #[test]
    fn test_scaled_cube_volume() {
        // Side 10 -> volume 1000
        let cube = scaled(&unit_cube(), 10.0);
        let result = measure_volume(&cube);
        assert!((result.volume_cubic_units - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn test_translation_invariance() {
        // Moving the mesh away from the origin must not change the volume
        let offset = Vector3::new(153.2, -88.7, 41.5);
        let moved = translated(&unit_cube(), offset);
        let result = measure_volume(&moved);
        assert!((result.volume_cubic_units - 1.0).abs() < TOL);
    }

    #[test]
    fn test_winding_invariance() {
        // Flipping every facet flips the sign of the raw sum only
        let inverted: Vec<Triangle> = unit_cube().iter().map(Triangle::flipped).collect();
        let result = measure_volume(&inverted);
        assert!((result.volume_cubic_units - 1.0).abs() < TOL);
    }

    #[test]
    fn test_empty_mesh_is_zero() {
        let result = measure_volume(&[]);
        assert!((result.volume_cubic_units - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_degenerate_triangles_contribute_nothing() {
        let mut cube = unit_cube();
        // Collapsed facet: all vertices coincident
        cube.push(Triangle::from_coords(
            [5.0, 5.0, 5.0],
            [5.0, 5.0, 5.0],
            [5.0, 5.0, 5.0],
        ));
        // Sliver facet: collinear vertices
        cube.push(Triangle::from_coords(
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [2.0, 2.0, 2.0],
        ));
        let result = measure_volume(&cube);
        assert!((result.volume_cubic_units - 1.0).abs() < TOL);
    }
}
