//! Works out which encoding a resource blob holds by looking at as few bytes as possible.
use log::trace;

use crate::{
    common::{
        Format, SniffError, ACTL_OFFSET, ACTL_TAG, MIN_RESOURCE_SIZE, PDCI_TAG, PDCS_TAG,
        PNG_SIGNATURE,
    },
    host::ResourceStore,
    reader::ResourceReader,
};

/// Classifies the blob behind `handle`.
///
/// Reads the first 8 bytes, plus 4 bytes at [`ACTL_OFFSET`] when they turn out to be a PNG
/// signature. Anything unrecognised is reported as [`Format::RasterStatic`] so the raster decoder
/// gets a chance at it.
pub fn classify<R: ResourceStore>(store: &R, handle: R::Handle) -> Result<Format, SniffError> {
    let mut reader = ResourceReader::new(store, handle);
    let size = reader.size();
    if size < MIN_RESOURCE_SIZE {
        return Err(SniffError::TooSmall { size });
    }

    let magic: [u8; 8] = reader
        .take_arr()
        .ok_or(SniffError::TooSmall { size })?;

    let format = if magic == PNG_SIGNATURE {
        reader.seek_to(ACTL_OFFSET);
        match reader.take_arr::<4>() {
            Some(tag) if tag == ACTL_TAG => Format::RasterAnimated,
            _ => Format::RasterStatic,
        }
    } else if magic[..4] == PDCI_TAG {
        Format::VectorStatic
    } else if magic[..4] == PDCS_TAG {
        Format::VectorAnimated
    } else {
        Format::RasterStatic
    };

    trace!("sniffed {} byte resource as {:?}", size, format);
    Ok(format)
}
