use crate::viewport::Viewport;
use vek::Vec2;

/// A 2-dimensional surface that points can be plotted onto.
///
/// Plotting is a host-side concern: the rasterizers and curve evaluators never touch a target themselves. This trait
/// exists so that point buffers, curves and constructions can be inspected without a windowing system.
pub trait Target {
    /// The type of target elements.
    type Texel: Clone;

    /// Get the size of the target in texels.
    fn size(&self) -> [usize; 2];

    /// Write a texel at the given index.
    ///
    /// # Panics
    ///
    /// The behaviour of this function is *unspecified* (but not *undefined*) when the index is out of bounds.
    fn write(&mut self, index: [usize; 2], texel: Self::Texel);

    /// Clear the target with copies of the specified texel.
    fn clear(&mut self, texel: Self::Texel);
}

/// Write each point (in device coordinates) to the texel beneath it, skipping points outside the target.
///
/// The viewport is taken from the target's own size. Returns the number of points written.
pub fn plot<T, I>(target: &mut T, points: I, texel: T::Texel) -> usize
where
    T: Target,
    I: IntoIterator<Item = Vec2<f32>>,
{
    let [w, h] = target.size();
    let viewport = Viewport::new(w as u32, h as u32);

    let mut written = 0;
    for index in points.into_iter().filter_map(|p| viewport.ndc_to_pixel(p)) {
        target.write(index, texel.clone());
        written += 1;
    }
    written
}

#[cfg(feature = "image")]
impl<P, C> Target for image_::ImageBuffer<P, C>
where
    P: image_::Pixel,
    C: core::ops::Deref<Target = [P::Subpixel]> + core::ops::DerefMut,
{
    type Texel = P;

    #[inline]
    fn size(&self) -> [usize; 2] {
        let (w, h) = self.dimensions();
        [w as usize, h as usize]
    }

    #[inline]
    fn write(&mut self, [x, y]: [usize; 2], texel: Self::Texel) {
        self.put_pixel(x as u32, y as u32, texel);
    }

    fn clear(&mut self, texel: Self::Texel) {
        self.pixels_mut().for_each(|px| *px = texel);
    }
}
