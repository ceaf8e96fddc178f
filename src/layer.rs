use core::mem;

use embedded_graphics::primitives::Rectangle;
use log::{debug, warn};

use crate::{
    animation::AnimationState,
    common::{BindError, Format},
    config::LayerConfig,
    host::{BitmapSequence, CommandSequence, Graphics, Host, ResourceId, Surfaces},
    sniff,
};

/// The one representation a layer holds at a time.
pub(crate) enum Representation<G: Graphics> {
    Empty,
    RasterStatic(G::Bitmap),
    /// `bitmap` is the frame buffer `sequence` renders into.
    RasterAnimated {
        bitmap: G::Bitmap,
        sequence: G::BitmapSequence,
    },
    VectorStatic(G::CommandImage),
    VectorAnimated {
        sequence: G::CommandSequence,
        frame: Option<<G::CommandSequence as CommandSequence>::Frame>,
        frame_index: u32,
    },
}

impl<G: Graphics> Representation<G> {
    pub(crate) fn format(&self) -> Option<Format> {
        match self {
            Representation::Empty => None,
            Representation::RasterStatic(_) => Some(Format::RasterStatic),
            Representation::RasterAnimated { .. } => Some(Format::RasterAnimated),
            Representation::VectorStatic(_) => Some(Format::VectorStatic),
            Representation::VectorAnimated { .. } => Some(Format::VectorAnimated),
        }
    }
}

/// A surface that shows one image resource, whatever its encoding, and plays it if animated.
///
/// The layer owns its host handle. Hosts that drive several layers typically implement [`Host`]
/// for a shared reference or a cheap clonable handle.
///
/// Two events reach the layer from the host's loop: fired timers, through
/// [`handle_timer`](Self::handle_timer), and repaints, through the
/// [`Drawable`](embedded_graphics::Drawable) impl.
pub struct ImageLayer<H: Host> {
    pub(crate) host: H,
    pub(crate) surface: Option<H::Surface>,
    pub(crate) representation: Representation<H>,
    pub(crate) timer: Option<H::Timer>,
    pub(crate) state: AnimationState,
    pub(crate) config: LayerConfig,
}

impl<H: Host> ImageLayer<H> {
    /// Creates an empty layer on a new surface covering `frame`.
    pub fn new(host: H, frame: Rectangle) -> Self {
        Self::with_config(host, frame, LayerConfig::default())
    }

    pub fn with_config(mut host: H, frame: Rectangle, config: LayerConfig) -> Self {
        let surface = host.create_surface(frame);
        Self {
            host,
            surface: Some(surface),
            representation: Representation::Empty,
            timer: None,
            state: AnimationState::Idle,
            config,
        }
    }

    /// Replaces whatever the layer shows with resource `id`.
    ///
    /// The previous representation and its timer are released first, so a failed bind leaves the
    /// layer empty. Blobs under 8 bytes are skipped without a repaint. Animated resources get
    /// their first tick scheduled; nothing is rendered before it fires.
    pub fn set_resource(&mut self, id: ResourceId) -> Result<Format, BindError> {
        self.teardown();

        let handle = self.host.handle(id);
        let format = match sniff::classify(&self.host, handle) {
            Ok(format) => format.supported_by(self.host.capabilities()),
            Err(err) => {
                debug!("resource {} left unbound: {}", id, err);
                return Err(err.into());
            }
        };

        let result = self.load(id, format);
        mark_dirty(&mut self.host, &self.surface);
        result.map(|()| format)
    }

    /// Releases the current representation and leaves the layer blank.
    pub fn clear(&mut self) {
        self.teardown();
        mark_dirty(&mut self.host, &self.surface);
    }

    /// Tears the layer down and releases its surface.
    ///
    /// Same as dropping it; spelled out for call sites that want the release to be visible.
    pub fn destroy(self) {
        drop(self);
    }

    fn load(&mut self, id: ResourceId, format: Format) -> Result<(), BindError> {
        let representation = match format {
            Format::RasterStatic => self
                .host
                .bitmap_with_resource(id)
                .map(Representation::RasterStatic),
            Format::RasterAnimated => self.load_bitmap_sequence(id),
            Format::VectorStatic => self
                .host
                .command_image_with_resource(id)
                .map(Representation::VectorStatic),
            Format::VectorAnimated => {
                self.host
                    .command_sequence_with_resource(id)
                    .map(|sequence| Representation::VectorAnimated {
                        sequence,
                        frame: None,
                        frame_index: 0,
                    })
            }
        };

        let Some(representation) = representation else {
            warn!("host failed to decode resource {} as {:?}", id, format);
            return Err(BindError::Decode(format));
        };
        self.representation = representation;

        if format.is_animated() {
            self.timer = Some(self.host.schedule(self.config.first_frame_delay_ms));
            self.state = AnimationState::Primed;
        }
        debug!("bound resource {} as {:?}", id, format);
        Ok(())
    }

    /// Builds the sequence and its frame buffer. A sequence without a buffer is dropped again.
    fn load_bitmap_sequence(&mut self, id: ResourceId) -> Option<Representation<H>> {
        let mut sequence = self.host.bitmap_sequence_with_resource(id)?;
        sequence.set_play_count(self.config.play_count);
        let bitmap = self.host.blank_bitmap(sequence.bitmap_size())?;
        Some(Representation::RasterAnimated { bitmap, sequence })
    }

    /// Cancels the pending tick and releases the bound representation. Safe on an empty layer.
    fn teardown(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.host.cancel(timer);
        }
        let previous = mem::replace(&mut self.representation, Representation::Empty);
        if let Some(format) = previous.format() {
            debug!("releasing {:?}", format);
        }
        drop(previous);
        self.state = AnimationState::Idle;
    }

    pub fn surface(&self) -> Option<&H::Surface> {
        self.surface.as_ref()
    }

    /// Format of the representation currently bound, if any.
    pub fn bound_format(&self) -> Option<Format> {
        self.representation.format()
    }

    /// Index of the next draw command frame to show. `None` unless a sequence is bound.
    pub fn frame_index(&self) -> Option<u32> {
        match self.representation {
            Representation::VectorAnimated { frame_index, .. } => Some(frame_index),
            _ => None,
        }
    }

    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: Host> Drop for ImageLayer<H> {
    fn drop(&mut self) {
        self.teardown();
        if let Some(surface) = self.surface.take() {
            self.host.destroy_surface(surface);
        }
    }
}

pub(crate) fn mark_dirty<S: Surfaces>(host: &mut S, surface: &Option<S::Surface>) {
    if let Some(surface) = surface {
        host.mark_dirty(surface);
    }
}
