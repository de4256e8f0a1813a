use typed_builder::TypedBuilder;

/// First byte of the Space Invaders work RAM.
///
/// The arcade board maps its ROM at 0x0000–0x1fff, so stores below this
/// address never reach memory on real hardware.
pub const INVADERS_RAM_START: usize = 0x2000;
/// One past the last byte of Space Invaders RAM (work RAM plus video RAM at
/// 0x2400–0x3fff). Everything above is a mirror the game never writes.
pub const INVADERS_RAM_END: usize = 0x4000;

/// Range of addresses that stores are allowed to land in.
///
/// This models one board's memory map, not a property of the 8080. Stores
/// outside the window are logged and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteWindow {
    pub start: usize,
    pub end: usize,
}

impl WriteWindow {
    /// The Space Invaders RAM window, `[0x2000, 0x4000)`.
    pub const INVADERS: WriteWindow = WriteWindow::new(INVADERS_RAM_START, INVADERS_RAM_END);
    /// Every allocated address is writable.
    pub const UNRESTRICTED: WriteWindow = WriteWindow::new(0, usize::MAX);

    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, addr: usize) -> bool {
        addr >= self.start && addr < self.end
    }
}

impl Default for WriteWindow {
    fn default() -> Self {
        Self::INVADERS
    }
}

/// Construction-time settings for [`crate::Cpu8080`].
#[derive(Clone, Copy, Debug, TypedBuilder)]
pub struct CpuConfig {
    #[builder(default)]
    pub write_window: WriteWindow,
    /// Lower bound on the buffer allocated by `load_image`/`load_rom`.
    ///
    /// With the default of 0 the buffer is sized exactly to the image.
    #[builder(default = 0)]
    pub min_memory_size: usize,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
