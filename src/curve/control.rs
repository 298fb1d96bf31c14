use alloc::vec::Vec;
use vek::Vec2;

/// An edit to a control polygon.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Append a point, in device coordinates, to the end of the polygon.
    Append(Vec2<f32>),
    /// Remove the last point of the polygon, if there is one.
    RemoveLast,
}

/// The ordered control polygon of a Bézier curve.
///
/// Every mutation marks the polygon dirty, whether or not it changed anything, so that derived data is refreshed the
/// next time it is needed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlPoints {
    points: Vec<Vec2<f32>>,
    dirty: bool,
}

impl ControlPoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, p: Vec2<f32>) {
        self.points.push(p);
        self.dirty = true;
    }

    /// Remove and return the last point. Removing from an empty polygon does nothing.
    pub fn remove_last(&mut self) -> Option<Vec2<f32>> {
        self.dirty = true;
        self.points.pop()
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Append(p) => self.append(p),
            Command::RemoveLast => {
                self.remove_last();
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Vec2<f32>> {
        self.points.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vec2<f32>] {
        &self.points
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether it was set.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }
}

impl FromIterator<Vec2<f32>> for ControlPoints {
    fn from_iter<I: IntoIterator<Item = Vec2<f32>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
            dirty: true,
        }
    }
}
