use embedded_graphics::{prelude::*, primitives::Rectangle};

use crate::{
    geometry::center,
    host::{Bitmap, CommandImage, CommandSequence, Graphics, Host, Surfaces},
    layer::{ImageLayer, Representation},
};

/// Paints whatever the layer currently holds, centered in its surface.
///
/// The target is expected in surface-local coordinates, with the surface's top left corner at
/// the origin. Drawing never changes the layer, so hosts may repaint as often as they like.
impl<H: Host> Drawable for ImageLayer<H> {
    type Color = H::Color;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let Some(surface) = self.surface.as_ref() else {
            return Ok(());
        };
        let bounds = Rectangle::new(Point::zero(), self.host.surface_bounds(surface).size);

        match &self.representation {
            Representation::Empty => Ok(()),
            Representation::RasterStatic(bitmap) | Representation::RasterAnimated { bitmap, .. } => {
                let compositing = self.config.compositing_for(self.host.capabilities());
                bitmap.draw_in_rect(target, &center(&bounds, bitmap.size()), compositing)
            }
            Representation::VectorStatic(image) => {
                image.draw_at(target, center(&bounds, image.size()).top_left)
            }
            Representation::VectorAnimated {
                sequence,
                frame: Some(frame),
                ..
            } => sequence.draw_frame(*frame, target, center(&bounds, sequence.size()).top_left),
            Representation::VectorAnimated { frame: None, .. } => Ok(()),
        }
    }
}
