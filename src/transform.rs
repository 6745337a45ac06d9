use cgmath::*;
use serde::*;

use crate::m3::M3;

/// Translation, rotation and scale of a 2D shape, as edited by the sliders.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform2d {
    /// In pixels.
    pub translation: Vector2<f32>,
    pub rotation: Rad<f32>,
    pub scale: Vector2<f32>,
}

impl Default for Transform2d {
    fn default() -> Self {
        Transform2d { translation: vec2(0.0, 0.0), rotation: Rad(0.0), scale: vec2(0.85, 0.85) }
    }
}

impl Transform2d {
    pub fn new(translation: Vector2<f32>, rotation: impl Into<Rad<f32>>, scale: Vector2<f32>) -> Self {
        Transform2d { translation, rotation: rotation.into(), scale }
    }

    pub fn translation_matrix(&self) -> M3 {
        M3::translation(self.translation.x, self.translation.y)
    }

    pub fn rotation_matrix(&self) -> M3 {
        M3::rotation(self.rotation.0)
    }

    pub fn scaling_matrix(&self) -> M3 {
        M3::scaling(self.scale.x, self.scale.y)
    }

    /// The matrix that scales, then rotates, then translates.
    pub fn matrix(&self) -> M3 {
        M3::identity() * self.translation_matrix() * self.rotation_matrix() * self.scaling_matrix()
    }

    /// Applies this transform `count` times in a row, returning the matrix after each step.
    ///
    /// Drawing one shape per matrix gives the "trail" of shapes, each one
    /// transformed relative to the previous one.
    pub fn repeated(&self, count: usize) -> Vec<M3> {
        let step = self.translation_matrix() * self.rotation_matrix() * self.scaling_matrix();
        let mut matrix = M3::identity();
        (0..count)
            .map(|_| {
                matrix = matrix * step;
                matrix
            })
            .collect()
    }

    /// Updates the rotation from the angle slider, which runs the other way
    /// round from the rotation matrix.
    pub fn set_angle_from_slider(&mut self, degrees: f32) {
        self.rotation = Deg(360.0 - degrees).into();
    }

    /// The initial value of the angle slider: the rotation in whole degrees, truncated.
    pub fn slider_degrees(&self) -> f32 {
        let degrees = Deg::from(self.rotation).0;
        // Radian round trips leave whole angles a hair off, e.g. -9.9999995.
        let nearest = degrees.round();
        if (degrees - nearest).abs() < 1e-3 {
            nearest
        } else {
            degrees.trunc()
        }
    }

    pub fn set_translation_axis(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.translation.x = value,
            Axis::Y => self.translation.y = value,
        }
    }

    pub fn set_scale_axis(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.scale.x = value,
            Axis::Y => self.scale.y = value,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
}

/// A single slider movement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TransformEdit {
    Translate(Axis, f32),
    /// The raw angle slider value, in degrees.
    Angle(f32),
    Scale(Axis, f32),
}

impl TransformEdit {
    pub fn apply(self, transform: &mut Transform2d) {
        match self {
            TransformEdit::Translate(axis, value) => transform.set_translation_axis(axis, value),
            TransformEdit::Angle(degrees) => transform.set_angle_from_slider(degrees),
            TransformEdit::Scale(axis, value) => transform.set_scale_axis(axis, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS
    }

    #[test]
    fn default_matches_lesson_start() {
        let t = Transform2d::default();
        assert_eq!(t.translation, vec2(0.0, 0.0));
        assert_eq!(t.rotation, Rad(0.0));
        assert_eq!(t.scale, vec2(0.85, 0.85));
    }

    #[test]
    fn matrix_scales_before_translating() {
        let t = Transform2d::new(vec2(60.0, 40.0), Rad(0.0), vec2(2.0, 3.0));
        assert!(close(t.matrix().transform_point(10.0, 10.0), (80.0, 70.0)));
    }

    #[test]
    fn repeated_accumulates_steps() {
        let t = Transform2d::new(vec2(10.0, 5.0), Rad(0.0), vec2(1.0, 1.0));
        let matrices = t.repeated(5);
        assert_eq!(matrices.len(), 5);
        assert!(close(matrices[0].transform_point(0.0, 0.0), (10.0, 5.0)));
        assert!(close(matrices[4].transform_point(0.0, 0.0), (50.0, 25.0)));
    }

    #[test]
    fn repeated_first_matrix_is_the_transform() {
        let t = Transform2d::new(vec2(60.0, 40.0), Deg(-10.0), vec2(0.85, 0.85));
        let first = t.repeated(1)[0];
        for (a, b) in first.0.iter().zip(t.matrix().0.iter()) {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn repeated_scale_compounds() {
        let t = Transform2d::new(vec2(0.0, 0.0), Rad(0.0), vec2(0.5, 0.5));
        let last = t.repeated(3)[2];
        assert!(close(last.transform_point(8.0, 8.0), (1.0, 1.0)));
    }

    #[test]
    fn angle_slider_is_reversed() {
        let mut t = Transform2d::default();
        t.set_angle_from_slider(90.0);
        assert!((Deg::from(t.rotation).0 - 270.0).abs() < EPS);
        t.set_angle_from_slider(360.0);
        assert!(t.rotation.0.abs() < EPS);
    }

    #[test]
    fn slider_degrees_truncates_towards_zero() {
        let t = Transform2d::new(vec2(0.0, 0.0), Deg(-10.0), vec2(1.0, 1.0));
        assert_eq!(t.slider_degrees(), -10.0);
        let t = Transform2d::new(vec2(0.0, 0.0), Deg(45.7), vec2(1.0, 1.0));
        assert_eq!(t.slider_degrees(), 45.0);
    }

    #[test]
    fn axis_setters() {
        let mut t = Transform2d::default();
        t.set_translation_axis(Axis::Y, 180.0);
        t.set_scale_axis(Axis::X, -2.5);
        assert_eq!(t.translation, vec2(0.0, 180.0));
        assert_eq!(t.scale, vec2(-2.5, 0.85));
    }

    #[test]
    fn edits_apply_to_the_matching_field() {
        let mut t = Transform2d::default();
        TransformEdit::Translate(Axis::X, 12.0).apply(&mut t);
        TransformEdit::Scale(Axis::Y, 2.0).apply(&mut t);
        TransformEdit::Angle(270.0).apply(&mut t);
        assert_eq!(t.translation, vec2(12.0, 0.0));
        assert_eq!(t.scale, vec2(0.85, 2.0));
        assert!((Deg::from(t.rotation).0 - 90.0).abs() < EPS);
    }

    #[test]
    fn deserializes_partial_json() {
        let t: Transform2d = serde_json::from_str(r#"{"translation": [0.0, 180.0]}"#).unwrap();
        assert_eq!(t.translation, vec2(0.0, 180.0));
        assert_eq!(t.scale, vec2(0.85, 0.85));
    }
}
