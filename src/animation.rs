//! Timer driven playback of animated representations.
//!
//! Each tick renders one frame and arms exactly one timer for the next. Bitmap sequences loop
//! through their play count; draw command sequences loop by wrapping the frame index.
use log::{debug, trace};

use crate::{
    host::{BitmapSequence, CommandSequence, Host},
    layer::{mark_dirty, ImageLayer, Representation},
};

/// Where playback of the bound representation stands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnimationState {
    /// Nothing animated is bound.
    Idle,
    /// Animated representation bound, first tick scheduled but not yet fired.
    Primed,
    RasterPlaying,
    VectorPlaying,
    /// The sequence ran out of frames. Only a new bind restarts playback.
    Stopped,
}

impl<H: Host> ImageLayer<H> {
    pub fn animation_state(&self) -> AnimationState {
        self.state
    }

    /// Advances playback for a fired `timer`.
    ///
    /// Returns `false` and does nothing if `timer` isn't the one this layer is waiting on, which
    /// covers timers cancelled by a rebind and timers belonging to other layers.
    pub fn handle_timer(&mut self, timer: H::Timer) -> bool {
        if self.timer != Some(timer) {
            trace!("ignoring stale timer {:?}", timer);
            return false;
        }
        self.timer = None;
        self.state = self.tick();
        true
    }

    fn tick(&mut self) -> AnimationState {
        let Self {
            host,
            surface,
            representation,
            timer,
            ..
        } = self;

        match representation {
            Representation::RasterAnimated { bitmap, sequence } => {
                match sequence.update_bitmap_next_frame(bitmap) {
                    Some(delay) => {
                        mark_dirty(host, surface);
                        *timer = Some(host.schedule(delay));
                        trace!("bitmap frame shown, next in {}ms", delay);
                        AnimationState::RasterPlaying
                    }
                    None => {
                        debug!("bitmap sequence finished");
                        AnimationState::Stopped
                    }
                }
            }
            Representation::VectorAnimated {
                sequence,
                frame,
                frame_index,
            } => {
                *frame = sequence.frame_by_index(*frame_index);
                let Some(current) = *frame else {
                    debug!("no draw command frame at index {}, stopping", frame_index);
                    return AnimationState::Stopped;
                };

                *frame_index += 1;
                if *frame_index == sequence.num_frames() {
                    *frame_index = 0;
                }
                mark_dirty(host, surface);
                let duration = sequence.frame_duration(current);
                *timer = Some(host.schedule(duration));
                trace!("command frame shown, next in {}ms", duration);
                AnimationState::VectorPlaying
            }
            _ => AnimationState::Idle,
        }
    }
}
