//! Capability interfaces the layer expects from its host platform.
//!
//! The layer never decodes pixels itself. Resources, decoders, timers and surfaces all come from
//! the host through the traits in this module; a type implementing all four of
//! [`ResourceStore`], [`Scheduler`], [`Surfaces`] and [`Graphics`] is a [`Host`].
//!
//! Decoded representations are owned values. Dropping one releases it on the host side.
use core::{convert::Infallible, fmt::Debug, marker::PhantomData};

use embedded_graphics::{pixelcolor::PixelColor, prelude::*, primitives::Rectangle};

/// Identifier of a resource blob.
pub type ResourceId = u32;

/// Read-only access to sized resource blobs.
pub trait ResourceStore {
    type Handle: Copy;

    /// Looks up the blob for `id`.
    fn handle(&self, id: ResourceId) -> Self::Handle;

    /// Size of the blob in bytes.
    fn size(&self, handle: Self::Handle) -> usize;

    /// Copies bytes starting at `offset` into `buf`, returning how many were copied.
    fn load_byte_range(&self, handle: Self::Handle, offset: usize, buf: &mut [u8]) -> usize;
}

/// One-shot timers delivered back through [`ImageLayer::handle_timer`].
///
/// [`ImageLayer::handle_timer`]: crate::ImageLayer::handle_timer
pub trait Scheduler {
    type Timer: Copy + PartialEq + Debug;

    /// Arms a timer that fires once after `delay_ms`.
    fn schedule(&mut self, delay_ms: u32) -> Self::Timer;

    /// Disarms `timer`. It must not be delivered afterwards.
    fn cancel(&mut self, timer: Self::Timer);
}

/// Paintable regions owned by layers.
pub trait Surfaces {
    type Surface;

    fn create_surface(&mut self, frame: Rectangle) -> Self::Surface;

    /// Current frame of the surface, in its parent's coordinates.
    fn surface_bounds(&self, surface: &Self::Surface) -> Rectangle;

    /// Requests a repaint on a later loop turn.
    fn mark_dirty(&mut self, surface: &Self::Surface);

    fn destroy_surface(&mut self, surface: Self::Surface);
}

/// How bitmap pixels are combined with what is already on the target.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compositing {
    /// Overwrite the destination.
    Assign,
    /// Overwrite, honoring transparency. Only meaningful on color displays.
    Set,
}

/// How often a bitmap sequence repeats.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayCount {
    Infinite,
    Finite(u32),
}

/// What the host graphics stack can do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Capabilities {
    /// Display has color, so bitmaps are composited with [`Compositing::Set`].
    pub color: bool,
    /// Host can play animated PNGs.
    pub animated_raster: bool,
    /// Host supports draw command images and sequences.
    pub vector: bool,
}

impl Capabilities {
    pub const FULL: Capabilities = Capabilities {
        color: true,
        animated_raster: true,
        vector: true,
    };

    /// Compositing mode used when the config doesn't pick one.
    pub fn compositing(self) -> Compositing {
        if self.color {
            Compositing::Set
        } else {
            Compositing::Assign
        }
    }
}

/// A decoded raster image.
pub trait Bitmap: OriginDimensions {
    type Color: PixelColor;

    /// Draws the whole bitmap into `area`.
    fn draw_in_rect<D>(
        &self,
        target: &mut D,
        area: &Rectangle,
        compositing: Compositing,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>;
}

/// An animated raster decoder writing frames into a caller-owned bitmap.
pub trait BitmapSequence {
    type Bitmap;

    /// Size of the frames this sequence produces.
    fn bitmap_size(&self) -> Size;

    fn set_play_count(&mut self, play_count: PlayCount);

    /// Renders the next frame into `bitmap`.
    ///
    /// Returns the delay in milliseconds until the frame after it, or `None` once the play count
    /// is exhausted.
    fn update_bitmap_next_frame(&mut self, bitmap: &mut Self::Bitmap) -> Option<u32>;
}

/// A single draw command image.
pub trait CommandImage: OriginDimensions {
    type Color: PixelColor;

    fn draw_at<D>(&self, target: &mut D, origin: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>;
}

/// A list of draw command frames with per-frame durations.
///
/// The size reported through [`OriginDimensions`] is the bounding size of the whole sequence.
pub trait CommandSequence: OriginDimensions {
    type Color: PixelColor;
    /// Non-owning reference to one frame, valid while the sequence lives.
    type Frame: Copy;

    fn frame_by_index(&self, index: u32) -> Option<Self::Frame>;

    fn num_frames(&self) -> u32;

    /// How long `frame` stays on screen, in milliseconds.
    fn frame_duration(&self, frame: Self::Frame) -> u32;

    fn draw_frame<D>(&self, frame: Self::Frame, target: &mut D, origin: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>;
}

/// Decoders for the four supported encodings.
pub trait Graphics {
    type Color: PixelColor;
    type Bitmap: Bitmap<Color = Self::Color>;
    type BitmapSequence: BitmapSequence<Bitmap = Self::Bitmap>;
    type CommandImage: CommandImage<Color = Self::Color>;
    type CommandSequence: CommandSequence<Color = Self::Color>;

    fn capabilities(&self) -> Capabilities;

    fn bitmap_with_resource(&mut self, id: ResourceId) -> Option<Self::Bitmap>;

    /// Allocates an uninitialised bitmap to be used as a frame buffer.
    fn blank_bitmap(&mut self, size: Size) -> Option<Self::Bitmap>;

    fn bitmap_sequence_with_resource(&mut self, id: ResourceId) -> Option<Self::BitmapSequence>;

    fn command_image_with_resource(&mut self, id: ResourceId) -> Option<Self::CommandImage>;

    fn command_sequence_with_resource(&mut self, id: ResourceId)
        -> Option<Self::CommandSequence>;
}

/// Everything a layer needs from the platform.
pub trait Host: ResourceStore + Scheduler + Surfaces + Graphics {}

impl<T> Host for T where T: ResourceStore + Scheduler + Surfaces + Graphics {}

/// Stand-in for draw command types on hosts without vector support.
///
/// It can't be constructed, so a host using it must return `None` from the command constructors.
pub struct Unsupported<C> {
    never: Infallible,
    _color: PhantomData<C>,
}

impl<C> Unsupported<C> {
    fn unreachable(&self) -> ! {
        let never = self.never;
        match never {}
    }
}

impl<C> OriginDimensions for Unsupported<C> {
    fn size(&self) -> Size {
        self.unreachable()
    }
}

impl<C: PixelColor> CommandImage for Unsupported<C> {
    type Color = C;

    fn draw_at<D>(&self, _target: &mut D, _origin: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        self.unreachable()
    }
}

impl<C: PixelColor> CommandSequence for Unsupported<C> {
    type Color = C;
    type Frame = Infallible;

    fn frame_by_index(&self, _index: u32) -> Option<Infallible> {
        self.unreachable()
    }

    fn num_frames(&self) -> u32 {
        self.unreachable()
    }

    fn frame_duration(&self, frame: Infallible) -> u32 {
        match frame {}
    }

    fn draw_frame<D>(&self, frame: Infallible, _target: &mut D, _origin: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        match frame {}
    }
}
