use crate::host::{ResourceId, ResourceStore};

/// Resource store over blobs that are already in memory, indexed by resource id.
///
/// Handy for assets pulled in with `include_bytes!`. Ids past the end of the table behave like
/// empty blobs.
#[derive(Clone, Copy)]
pub struct SliceStore<'a> {
    blobs: &'a [&'a [u8]],
}

impl<'a> SliceStore<'a> {
    pub fn new(blobs: &'a [&'a [u8]]) -> Self {
        Self { blobs }
    }
}

impl<'a> ResourceStore for SliceStore<'a> {
    type Handle = &'a [u8];

    fn handle(&self, id: ResourceId) -> &'a [u8] {
        self.blobs.get(id as usize).copied().unwrap_or(&[])
    }

    fn size(&self, handle: &'a [u8]) -> usize {
        handle.len()
    }

    fn load_byte_range(&self, handle: &'a [u8], offset: usize, buf: &mut [u8]) -> usize {
        let available = handle.get(offset..).unwrap_or(&[]);
        let len = available.len().min(buf.len());
        buf[..len].copy_from_slice(&available[..len]);
        len
    }
}
