//! A small image layer for embedded displays that shows whatever image resource it is handed.
//!
//! Given a resource id, [`ImageLayer`] sniffs the blob to find out whether it holds a PNG, an
//! animated PNG, a draw command image or a draw command sequence, asks the host to decode it, and
//! for animated formats drives playback from host timers, looping until the layer is rebound or
//! dropped. Pixels are never decoded here: the host supplies decoders, timers and surfaces
//! through the capability traits in [`host`].
//!
//! The layer is an [`embedded_graphics`] [`Drawable`], so a host repaint is just
//! `layer.draw(&mut target)`.
//!
//! ```ignore
//! let mut layer = ImageLayer::new(host, Rectangle::new(Point::zero(), Size::new(144, 168)));
//! layer.set_resource(RESOURCE_ID_APNG)?;
//!
//! // host event loop
//! match event {
//!     Event::Timer(timer) => { layer.handle_timer(timer); }
//!     Event::Repaint(target) => layer.draw(target)?,
//! }
//! ```
//!
//! [`Drawable`]: embedded_graphics::Drawable
#![cfg_attr(not(test), no_std)]

mod animation;
mod common;
mod config;
mod geometry;
pub mod host;
mod layer;
mod reader;
mod render;
mod sniff;
mod store;

pub use animation::AnimationState;
pub use common::{
    BindError, Format, SniffError, ACTL_OFFSET, ACTL_TAG, MIN_RESOURCE_SIZE, PDCI_TAG, PDCS_TAG,
    PNG_SIGNATURE,
};
pub use config::LayerConfig;
pub use geometry::center;
pub use host::{Capabilities, Compositing, Host, PlayCount, ResourceId};
pub use layer::ImageLayer;
pub use sniff::classify;
pub use store::SliceStore;
