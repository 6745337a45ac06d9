//! Two independently transformed copies of the "F". A `<select>` picks which one the
//! sliders edit.

use std::str::FromStr;

use super::*;

/// Which of the two shapes the sliders currently edit.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Selection {
    First,
    Second,
}

impl FromStr for Selection {
    type Err = GlError;

    fn from_str(s: &str) -> GlResult<Self> {
        match s {
            "f1" => Ok(Selection::First),
            "f2" => Ok(Selection::Second),
            _ => Err(GlError::Config(format!("unknown mode `{}`", s))),
        }
    }
}

impl Selection {
    pub fn as_str(self) -> &'static str {
        match self {
            Selection::First => "f1",
            Selection::Second => "f2",
        }
    }
}

/// The starting transforms of the two shapes; the second sits below the first.
pub fn initial_transforms() -> [Transform2d; 2] {
    let first = Transform2d::default();
    let second = Transform2d { translation: vec2(0.0, 180.0), ..first };
    [first, second]
}

/// Both shapes' transforms and which one is being edited.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FPair {
    transforms: [Transform2d; 2],
    selected: Selection,
}

impl FPair {
    pub fn new() -> Self {
        FPair { transforms: initial_transforms(), selected: Selection::First }
    }

    pub fn select(&mut self, selection: Selection) {
        self.selected = selection;
    }

    /// Applies a slider edit to the selected shape only.
    pub fn apply(&mut self, edit: TransformEdit) {
        let index = self.index();
        edit.apply(&mut self.transforms[index]);
    }

    /// The transform the sliders should show.
    pub fn selected(&self) -> Transform2d {
        self.transforms[self.index()]
    }

    pub fn transforms(&self) -> &[Transform2d; 2] {
        &self.transforms
    }

    fn index(&self) -> usize {
        match self.selected {
            Selection::First => 0,
            Selection::Second => 1,
        }
    }
}

impl Default for FPair {
    fn default() -> Self {
        Self::new()
    }
}

struct TwoFsLesson {
    scene: MatrixScene,
    shapes: FPair,
}

impl TwoFsLesson {
    fn draw(&mut self) {
        self.scene.begin_frame();
        for transform in self.shapes.transforms().iter() {
            self.scene.draw_f(transform.matrix());
        }
    }
}

/// Switches the sliders over to the shape named by `mode`.
fn select(
    lesson: &Rc<RefCell<TwoFsLesson>>,
    sliders: &Rc<RefCell<TransformSliders>>,
    mode: &str,
) -> GlResult<()> {
    let selection = mode.parse::<Selection>()?;
    let (transform, canvas_size) = {
        let mut lesson = lesson.borrow_mut();
        lesson.shapes.select(selection);
        (lesson.shapes.selected(), lesson.scene.surface.size())
    };
    debug!("Editing {}", selection.as_str());

    let target = lesson.clone();
    let edit: Rc<dyn Fn(TransformEdit)> = Rc::new(move |change: TransformEdit| {
        with_state(&target, |lesson| {
            lesson.shapes.apply(change);
            lesson.draw();
        });
    });
    sliders.borrow_mut().bind(&transform, canvas_size, edit)
}

pub fn start(config: &LessonConfig) -> GlResult<()> {
    let lesson = Rc::new(RefCell::new(TwoFsLesson {
        scene: MatrixScene::new(config)?,
        shapes: FPair::new(),
    }));
    lesson.borrow_mut().draw();
    info!("Two F lesson started");

    let sliders = Rc::new(RefCell::new(TransformSliders::find()?));
    let mut selector = ModeSelector::find("modeSelector")?;
    selector.set_value(Selection::First.as_str());
    select(&lesson, &sliders, &selector.value())?;

    selector.on_change(move |mode| {
        if let Err(err) = select(&lesson, &sliders, &mode) {
            warn!("{}", err);
        }
    })?;
    selector.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modes() {
        assert_eq!("f1".parse::<Selection>().unwrap(), Selection::First);
        assert_eq!("f2".parse::<Selection>().unwrap(), Selection::Second);
        assert!("f3".parse::<Selection>().is_err());
        assert_eq!(Selection::Second.as_str(), "f2");
    }

    #[test]
    fn second_f_starts_below_the_first() {
        let [first, second] = initial_transforms();
        assert_eq!(first.translation, vec2(0.0, 0.0));
        assert_eq!(second.translation, vec2(0.0, 180.0));
        assert_eq!(first.rotation, second.rotation);
        assert_eq!(second.scale, vec2(0.85, 0.85));
    }

    #[test]
    fn edits_go_to_the_selected_f_only() {
        let mut shapes = FPair::new();
        shapes.select(Selection::Second);
        shapes.apply(TransformEdit::Translate(Axis::X, 50.0));

        let [first, second] = initial_transforms();
        assert_eq!(shapes.transforms()[0], first);
        assert_eq!(shapes.transforms()[1].translation, vec2(50.0, 180.0));
        assert_eq!(shapes.transforms()[1].scale, second.scale);
    }

    #[test]
    fn switching_back_shows_the_untouched_f() {
        let mut shapes = FPair::new();
        shapes.select(Selection::Second);
        shapes.apply(TransformEdit::Scale(Axis::Y, 2.0));
        shapes.apply(TransformEdit::Angle(90.0));

        shapes.select(Selection::First);
        assert_eq!(shapes.selected(), initial_transforms()[0]);

        shapes.select(Selection::Second);
        assert_eq!(shapes.selected().scale, vec2(0.85, 2.0));
        assert_eq!(shapes.selected().slider_degrees(), 270.0);
    }
}
