//! The fixed shapes drawn by the lessons.

use cgmath::*;

/// The letter "F" in pixel coordinates: a left column, a top bar and a middle bar,
/// two triangles each. 100 pixels wide, 150 tall, origin at the top left.
#[rustfmt::skip]
pub fn f_letter() -> Vec<Vector2<f32>> {
    let data: [f32; 36] = [
        // left column
        0.0, 0.0,
        30.0, 0.0,
        0.0, 150.0,
        0.0, 150.0,
        30.0, 0.0,
        30.0, 150.0,

        // top bar
        30.0, 0.0,
        100.0, 0.0,
        30.0, 30.0,
        30.0, 30.0,
        100.0, 0.0,
        100.0, 30.0,

        // middle bar
        30.0, 60.0,
        67.0, 60.0,
        30.0, 90.0,
        30.0, 90.0,
        67.0, 60.0,
        67.0, 90.0,
    ];
    data.chunks(2).map(|p| vec2(p[0], p[1])).collect()
}

/// An axis-aligned rectangle as two triangles.
pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Vec<Vector2<f32>> {
    let (x1, x2) = (x, x + width);
    let (y1, y2) = (y, y + height);
    vec![vec2(x1, y1), vec2(x2, y1), vec2(x1, y2), vec2(x1, y2), vec2(x2, y1), vec2(x2, y2)]
}

/// The front-facing triangle of the rotating-shape lesson.
pub fn triangle() -> Vec<Vector3<f32>> {
    vec![vec3(0.5, 0.5, 0.5), vec3(0.5, -0.5, 0.5), vec3(-0.5, 0.5, 0.5)]
}

/// A unit cube centred on the origin, six faces of two triangles each.
#[rustfmt::skip]
pub fn cube() -> Vec<Vector3<f32>> {
    let data: [f32; 108] = [
        // front
        0.5, 0.5, 0.5,   0.5, -0.5, 0.5,   -0.5, 0.5, 0.5,
        -0.5, 0.5, 0.5,  0.5, -0.5, 0.5,   -0.5, -0.5, 0.5,

        // left
        -0.5, 0.5, 0.5,  -0.5, -0.5, 0.5,  -0.5, 0.5, -0.5,
        -0.5, 0.5, -0.5, -0.5, -0.5, 0.5,  -0.5, -0.5, -0.5,

        // back
        -0.5, 0.5, -0.5, -0.5, -0.5, -0.5, 0.5, 0.5, -0.5,
        0.5, 0.5, -0.5,  -0.5, -0.5, -0.5, 0.5, -0.5, -0.5,

        // right
        0.5, 0.5, -0.5,  0.5, -0.5, -0.5,  0.5, 0.5, 0.5,
        0.5, 0.5, 0.5,   0.5, -0.5, 0.5,   0.5, -0.5, -0.5,

        // top
        0.5, 0.5, 0.5,   0.5, 0.5, -0.5,   -0.5, 0.5, 0.5,
        -0.5, 0.5, 0.5,  0.5, 0.5, -0.5,   -0.5, 0.5, -0.5,

        // bottom
        0.5, -0.5, 0.5,  0.5, -0.5, -0.5,  -0.5, -0.5, 0.5,
        -0.5, -0.5, 0.5, 0.5, -0.5, -0.5,  -0.5, -0.5, -0.5,
    ];
    data.chunks(3).map(|p| vec3(p[0], p[1], p[2])).collect()
}

/// A random opaque RGB colour.
pub fn random_color() -> Vector3<f32> {
    vec3(random(), random(), random())
}

/// A random RGBA colour with full alpha.
pub fn random_rgba() -> [f32; 4] {
    [random(), random(), random(), 1.0]
}

fn random() -> f32 {
    js_sys::Math::random() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(points: &[Vector2<f32>]) -> (Vector2<f32>, Vector2<f32>) {
        let min = points.iter().fold(vec2(f32::MAX, f32::MAX), |m, p| vec2(m.x.min(p.x), m.y.min(p.y)));
        let max = points.iter().fold(vec2(f32::MIN, f32::MIN), |m, p| vec2(m.x.max(p.x), m.y.max(p.y)));
        (min, max)
    }

    #[test]
    fn f_letter_has_six_triangles() {
        let f = f_letter();
        assert_eq!(f.len(), 18);
        assert_eq!(bounds(&f), (vec2(0.0, 0.0), vec2(100.0, 150.0)));
        assert_eq!(f[13], vec2(67.0, 60.0));
    }

    #[test]
    fn rectangle_covers_its_corners() {
        let r = rectangle(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.len(), 6);
        assert_eq!(bounds(&r), (vec2(10.0, 20.0), vec2(40.0, 60.0)));
    }

    #[test]
    fn cube_faces_are_on_the_unit_cube() {
        let c = cube();
        assert_eq!(c.len(), 36);
        for face in c.chunks(6) {
            // every vertex of a face shares one coordinate at +-0.5
            let shared = (0..3).any(|axis| {
                let v = face[0][axis];
                face.iter().all(|p| p[axis] == v)
            });
            assert!(shared, "{:?}", face);
        }
        assert!(c.iter().all(|p| p.x.abs() == 0.5 && p.y.abs() == 0.5 && p.z.abs() == 0.5));
    }

    #[test]
    fn triangle_is_the_front_of_the_cube() {
        assert_eq!(&triangle()[..], &cube()[..3]);
    }
}
