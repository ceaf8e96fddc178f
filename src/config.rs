use crate::host::{Capabilities, Compositing, PlayCount};

/// Per-layer playback settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayerConfig {
    /// Delay before the first tick of an animated resource, in milliseconds.
    pub first_frame_delay_ms: u32,
    /// Play count handed to bitmap sequences.
    pub play_count: PlayCount,
    /// Forces a compositing mode instead of deriving it from the display.
    pub compositing: Option<Compositing>,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            first_frame_delay_ms: 1,
            play_count: PlayCount::Infinite,
            compositing: None,
        }
    }
}

impl LayerConfig {
    pub fn with_first_frame_delay(mut self, delay_ms: u32) -> Self {
        self.first_frame_delay_ms = delay_ms;
        self
    }

    pub fn with_play_count(mut self, play_count: PlayCount) -> Self {
        self.play_count = play_count;
        self
    }

    pub fn with_compositing(mut self, compositing: Compositing) -> Self {
        self.compositing = Some(compositing);
        self
    }

    pub(crate) fn compositing_for(&self, capabilities: Capabilities) -> Compositing {
        self.compositing
            .unwrap_or_else(|| capabilities.compositing())
    }
}
