use crate::host::ResourceStore;

/// Cursor over a resource blob that only ever loads the bytes it is asked for.
pub(crate) struct ResourceReader<'store, R: ResourceStore> {
    store: &'store R,
    handle: R::Handle,
    size: usize,
    offset: usize,
}

impl<'store, R: ResourceStore> ResourceReader<'store, R> {
    pub(crate) fn new(store: &'store R, handle: R::Handle) -> Self {
        Self {
            store,
            handle,
            size: store.size(handle),
            offset: 0,
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    #[cfg(test)]
    pub(crate) fn get_offset(&self) -> usize {
        self.offset
    }

    /// Loads the next `N` bytes, or `None` if the blob ends first.
    ///
    /// The offset advances either way, so a failed read leaves the cursor past the blob.
    #[inline]
    pub(crate) fn take_arr<const N: usize>(&mut self) -> Option<[u8; N]> {
        let mut buf = [0; N];
        let loaded = self.store.load_byte_range(self.handle, self.offset, &mut buf);
        self.offset += N;
        (loaded == N).then_some(buf)
    }

    pub(crate) fn seek_to(&mut self, offset: usize) {
        self.offset = offset;
    }
}
