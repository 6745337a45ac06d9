use cgmath::*;
use wasm_bindgen_test::*;
use webgl_lessons::geometry::f_letter;
use webgl_lessons::lessons::matrix_2d::{initial_transform, COPIES};
use webgl_lessons::lessons::two_fs::{initial_transforms, Selection};
use webgl_lessons::*;

fn bounds(m: M3) -> ((f32, f32), (f32, f32)) {
    f_letter().iter().map(|p| m.transform_point(p.x, p.y)).fold(
        ((f32::MAX, f32::MAX), (f32::MIN, f32::MIN)),
        |((x0, y0), (x1, y1)), (x, y)| ((x0.min(x), y0.min(y)), (x1.max(x), y1.max(y))),
    )
}

fn near(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[wasm_bindgen_test]
fn identity_leaves_the_f_in_place() {
    let ((x0, y0), (x1, y1)) = bounds(M3::identity());
    assert!(near(x0, 0.0) && near(y0, 0.0) && near(x1, 100.0) && near(y1, 150.0));
}

#[wasm_bindgen_test]
fn slider_edits_move_the_f() {
    let mut t = Transform2d::default();
    TransformEdit::Scale(Axis::X, 1.0).apply(&mut t);
    TransformEdit::Scale(Axis::Y, 1.0).apply(&mut t);
    TransformEdit::Translate(Axis::X, 200.0).apply(&mut t);
    TransformEdit::Translate(Axis::Y, 100.0).apply(&mut t);
    TransformEdit::Angle(360.0).apply(&mut t);
    let ((x0, y0), (x1, y1)) = bounds(t.matrix());
    assert!(near(x0, 200.0) && near(y0, 100.0) && near(x1, 300.0) && near(y1, 250.0));
}

#[wasm_bindgen_test]
fn half_turn_from_the_slider_flips_the_f() {
    let mut t = Transform2d::new(vec2(0.0, 0.0), Rad(0.0), vec2(1.0, 1.0));
    TransformEdit::Angle(180.0).apply(&mut t);
    let ((x0, y0), (x1, y1)) = bounds(t.matrix());
    assert!(near(x0, -100.0) && near(y0, -150.0) && near(x1, 0.0) && near(y1, 0.0));
}

#[wasm_bindgen_test]
fn copies_walk_away_from_the_origin() {
    let origins: Vec<(f32, f32)> = initial_transform()
        .repeated(COPIES)
        .into_iter()
        .map(|m| m.transform_point(0.0, 0.0))
        .collect();
    assert_eq!(origins.len(), 5);
    for pair in origins.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(b.0 * b.0 + b.1 * b.1 > a.0 * a.0 + a.1 * a.1);
    }
}

#[wasm_bindgen_test]
fn composition_is_associative_across_lesson_transforms() {
    let [first, second] = initial_transforms();
    let a = first.matrix();
    let b = second.matrix();
    let c = initial_transform().matrix();
    let left = (a * b) * c;
    let right = a * (b * c);
    for (x, y) in left.0.iter().zip(right.0.iter()) {
        assert!(near(*x, *y));
    }
}

#[wasm_bindgen_test]
fn modes_round_trip_through_their_names() {
    for &selection in [Selection::First, Selection::Second].iter() {
        assert_eq!(selection.as_str().parse::<Selection>().unwrap(), selection);
    }
}

#[wasm_bindgen_test]
fn config_type_errors_are_reported() {
    let err = LessonConfig::from_json(r#"{"log_level": 3}"#).unwrap_err();
    assert!(matches!(err, GlError::Config(_)));
}
