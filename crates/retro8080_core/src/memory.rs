use std::fmt;

use crate::config::WriteWindow;
use crate::error::{CpuError, Result};

/// Flat, byte-addressable memory owned by the CPU.
///
/// The buffer does not exist until [`Memory::allocate`] or
/// [`Memory::load_image`] is called; every access before that fails with
/// [`CpuError::UnallocatedMemory`]. Addresses past the end of the buffer fail
/// with [`CpuError::OutOfBounds`] instead of wrapping.
#[derive(Clone, Default)]
pub struct Memory {
    bytes: Option<Box<[u8]>>,
    write_window: WriteWindow,
}

impl Memory {
    pub fn new(write_window: WriteWindow) -> Self {
        Self {
            bytes: None,
            write_window,
        }
    }

    /// Replace the buffer with `size` zeroed bytes.
    pub fn allocate(&mut self, size: usize) {
        self.bytes = Some(vec![0; size].into_boxed_slice());
    }

    /// Allocate `max(image.len(), min_size)` bytes and copy `image` to
    /// address 0. Returns the number of image bytes copied.
    pub fn load_image(&mut self, image: &[u8], min_size: usize) -> usize {
        let mut bytes = vec![0; image.len().max(min_size)].into_boxed_slice();
        bytes[..image.len()].copy_from_slice(image);
        self.bytes = Some(bytes);
        image.len()
    }

    /// Copy `data` to `addr` without going through the write window.
    ///
    /// This is the loader path (ROM patches, test stubs); the CPU itself
    /// always stores through [`Memory::write`].
    pub fn load_at(&mut self, addr: usize, data: &[u8]) -> Result<()> {
        let bytes = self.bytes.as_deref_mut().ok_or(CpuError::UnallocatedMemory)?;
        let len = bytes.len();
        let end = addr.checked_add(data.len()).filter(|&end| end <= len);
        match end {
            Some(end) => {
                bytes[addr..end].copy_from_slice(data);
                Ok(())
            }
            None => Err(CpuError::OutOfBounds {
                addr: addr.saturating_add(data.len().saturating_sub(1)),
                len,
            }),
        }
    }

    pub fn is_allocated(&self) -> bool {
        self.bytes.is_some()
    }

    /// Allocated size in bytes, 0 when nothing is allocated.
    pub fn len(&self) -> usize {
        self.bytes.as_deref().map_or(0, <[u8]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn write_window(&self) -> WriteWindow {
        self.write_window
    }

    pub fn set_write_window(&mut self, window: WriteWindow) {
        self.write_window = window;
    }

    /// The whole buffer, e.g. for a renderer.
    pub fn as_slice(&self) -> Result<&[u8]> {
        self.bytes.as_deref().ok_or(CpuError::UnallocatedMemory)
    }

    /// `len` bytes starting at `start`.
    pub fn slice(&self, start: usize, len: usize) -> Result<&[u8]> {
        let bytes = self.as_slice()?;
        let end = start.checked_add(len).filter(|&end| end <= bytes.len());
        match end {
            Some(end) => Ok(&bytes[start..end]),
            None => Err(CpuError::OutOfBounds {
                addr: start.saturating_add(len.saturating_sub(1)),
                len: bytes.len(),
            }),
        }
    }

    pub fn read(&self, addr: usize) -> Result<u8> {
        let bytes = self.as_slice()?;
        bytes.get(addr).copied().ok_or(CpuError::OutOfBounds {
            addr,
            len: bytes.len(),
        })
    }

    /// Store `value` at `addr`.
    ///
    /// Addresses outside the allocation are an error. Addresses inside the
    /// allocation but outside the write window are dropped with a warning.
    pub fn write(&mut self, addr: usize, value: u8) -> Result<()> {
        let window = self.write_window;
        let bytes = self.bytes.as_deref_mut().ok_or(CpuError::UnallocatedMemory)?;
        let len = bytes.len();
        let slot = bytes
            .get_mut(addr)
            .ok_or(CpuError::OutOfBounds { addr, len })?;

        if !window.contains(addr) {
            log::warn!(
                "Rejected write of 0x{value:02X} to 0x{addr:04X} (writable window 0x{start:04X}..0x{end:04X})",
                start = window.start,
                end = window.end,
            );
            return Ok(());
        }

        *slot = value;
        Ok(())
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("allocated", &self.is_allocated())
            .field("len", &self.len())
            .field("write_window", &self.write_window)
            .finish()
    }
}
