use super::{balloon::Balloon, error::SceneError, fleet::Fleet};

/// Something that rises and can be drawn balloon by balloon: either a single
/// balloon or a fleet of them.
pub trait Ascension {
    fn add(&mut self, balloon: Balloon) -> Result<(), SceneError>;

    fn translate(&mut self, dx: i32, dy: i32);

    /// Members in draw order.
    fn balloons(&self) -> &[Balloon];

    fn balloon_count(&self) -> usize {
        self.balloons().len()
    }
}

impl Ascension for Balloon {
    fn add(&mut self, _balloon: Balloon) -> Result<(), SceneError> {
        Err(SceneError::LeafCannotHold)
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        Balloon::translate(self, dx, dy);
    }

    fn balloons(&self) -> &[Balloon] {
        std::slice::from_ref(self)
    }
}

impl Ascension for Fleet {
    fn add(&mut self, balloon: Balloon) -> Result<(), SceneError> {
        self.push(balloon);
        Ok(())
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.translate_all(dx, dy);
    }

    fn balloons(&self) -> &[Balloon] {
        Fleet::balloons(self)
    }
}
