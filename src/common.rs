use thiserror::Error;

use crate::host::Capabilities;

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
/// APNG animation control chunk type.
pub const ACTL_TAG: [u8; 4] = *b"acTL";
/// Draw command image magic.
pub const PDCI_TAG: [u8; 4] = *b"PDCI";
/// Draw command sequence magic.
pub const PDCS_TAG: [u8; 4] = *b"PDCS";

/// Smallest blob we will look at; anything shorter is never bound.
pub const MIN_RESOURCE_SIZE: usize = PNG_SIGNATURE.len();

/// Offset of the chunk type that follows the mandatory IHDR chunk.
///
/// A PNG starts with its signature, then IHDR framed as length (4), type (4), a fixed 13 byte
/// payload and a CRC (4). The next chunk's length field takes 4 more bytes, so its type sits
/// here. Animated PNGs put `acTL` in that slot.
pub const ACTL_OFFSET: usize = PNG_SIGNATURE.len() + (4 + 4 + 0x0D + 4) + 4;

/// Image encodings a resource blob can hold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Format {
    /// Single frame PNG.
    RasterStatic,
    /// PNG with an `acTL` chunk right after IHDR.
    RasterAnimated,
    /// Single draw command image.
    VectorStatic,
    /// Draw command sequence with per-frame durations.
    VectorAnimated,
}

impl Format {
    /// Whether binding this format starts the animation timer.
    pub fn is_animated(self) -> bool {
        matches!(self, Format::RasterAnimated | Format::VectorAnimated)
    }

    /// Degrades formats the host can't handle to a plain raster decode.
    pub fn supported_by(self, capabilities: Capabilities) -> Format {
        match self {
            Format::RasterAnimated if !capabilities.animated_raster => Format::RasterStatic,
            Format::VectorStatic | Format::VectorAnimated if !capabilities.vector => {
                Format::RasterStatic
            }
            format => format,
        }
    }
}

/// Errors that come out of sniffing a resource
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SniffError {
    /// Blob is shorter than the PNG signature
    #[error("resource is {size} bytes, at least 8 are needed to sniff it")]
    TooSmall { size: usize },
}

/// Why a bind left the layer empty.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The resource could not be classified
    #[error(transparent)]
    Sniff(#[from] SniffError),
    /// The host decoder gave us nothing for this format
    #[error("host could not decode resource as {0:?}")]
    Decode(Format),
}
