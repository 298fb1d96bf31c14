use crate::Error;
use vek::Vec2;

/// The pixel dimensions of the window the host draws into.
///
/// Window coordinates have their origin at the top-left corner with +y pointing down, while device coordinates have
/// their origin at the centre with +y pointing up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            Err(Error::EmptyViewport {
                width: self.width,
                height: self.height,
            })
        } else {
            Ok(())
        }
    }

    /// Convert a cursor position in window pixels into device coordinates.
    pub fn cursor_to_ndc(&self, cursor: Vec2<f64>) -> Vec2<f32> {
        Vec2::new(
            2.0 * cursor.x / self.width as f64 - 1.0,
            1.0 - 2.0 * cursor.y / self.height as f64,
        )
        .map(|e| e as f32)
    }

    /// Find the pixel covering a point in device coordinates, if it lies within the viewport.
    pub fn ndc_to_pixel(&self, p: Vec2<f32>) -> Option<[usize; 2]> {
        const MIRROR: Vec2<f32> = Vec2 { x: 1.0, y: -1.0 };

        let half = Vec2::new(self.width, self.height).map(|e| e as f32 * 0.5);
        let scr = half * (p * MIRROR + 1.0);

        if scr.x >= 0.0 && scr.y >= 0.0 && scr.x < self.width as f32 && scr.y < self.height as f32 {
            Some([scr.x as usize, scr.y as usize])
        } else {
            None
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 800)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_corners() {
        let vp = Viewport::default();
        assert_eq!(vp.cursor_to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.cursor_to_ndc(Vec2::new(400.0, 400.0)), Vec2::new(0.0, 0.0));
        assert_eq!(vp.cursor_to_ndc(Vec2::new(800.0, 800.0)), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn pixel_round_trip() {
        let vp = Viewport::new(640, 480);
        let ndc = vp.cursor_to_ndc(Vec2::new(100.5, 200.5));
        assert_eq!(vp.ndc_to_pixel(ndc), Some([100, 200]));
    }

    #[test]
    fn outside_points_have_no_pixel() {
        let vp = Viewport::default();
        assert_eq!(vp.ndc_to_pixel(Vec2::new(1.0, 0.0)), None);
        assert_eq!(vp.ndc_to_pixel(Vec2::new(0.0, -1.5)), None);
        assert_eq!(vp.ndc_to_pixel(Vec2::new(-1.0, 1.0)), Some([0, 0]));
    }
}
