//! Translation, rotation and scale combined into one matrix. The "F" is drawn five times,
//! each copy transformed once more than the last.

use super::*;

/// How many copies of the "F" are drawn.
pub const COPIES: usize = 5;

/// The transform the lesson starts with.
pub fn initial_transform() -> Transform2d {
    Transform2d::new(vec2(60.0, 40.0), Deg(-10.0), vec2(0.85, 0.85))
}

struct Matrix2dLesson {
    scene: MatrixScene,
    transform: Transform2d,
}

impl Matrix2dLesson {
    fn draw(&mut self) {
        self.scene.begin_frame();
        for matrix in self.transform.repeated(COPIES) {
            self.scene.draw_f(matrix);
        }
    }
}

pub fn start(config: &LessonConfig) -> GlResult<()> {
    let lesson = Rc::new(RefCell::new(Matrix2dLesson {
        scene: MatrixScene::new(config)?,
        transform: initial_transform(),
    }));
    lesson.borrow_mut().draw();
    info!("2D matrix lesson started");

    let (transform, canvas_size) = {
        let lesson = lesson.borrow();
        (lesson.transform, lesson.scene.surface.size())
    };
    let edit: Rc<dyn Fn(TransformEdit)> = Rc::new(move |change: TransformEdit| {
        with_state(&lesson, |lesson| {
            change.apply(&mut lesson.transform);
            lesson.draw();
        });
    });

    let mut sliders = TransformSliders::find()?;
    sliders.bind(&transform, canvas_size, edit)?;
    sliders.forget();
    Ok(())
}
