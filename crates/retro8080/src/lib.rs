//! Headless Space Invaders runner for the `retro8080_core` CPU.

pub mod machine;

use std::path::Path;

use anyhow::{Context, Result};
use typed_builder::TypedBuilder;

pub use machine::{InvadersMachine, Ports};

/// Space Invaders needs 16 KiB: 8 KiB ROM, 1 KiB work RAM, 7 KiB video RAM.
pub const DEFAULT_MEMORY_SIZE: usize = 0x4000;
pub const DEFAULT_FRAMES: u32 = 60;
/// Roughly 2 MHz / 120 Hz at an average of seven cycles per instruction.
pub const DEFAULT_STEPS_PER_HALF_FRAME: u32 = 2_400;

#[derive(Clone, Copy, Debug, TypedBuilder)]
pub struct RunnerConfig {
    #[builder(default = DEFAULT_FRAMES)]
    pub frames: u32,
    #[builder(default = DEFAULT_STEPS_PER_HALF_FRAME)]
    pub steps_per_half_frame: u32,
    #[builder(default = DEFAULT_MEMORY_SIZE)]
    pub memory_size: usize,
    /// Initial latch for input port 1 (coin, start, player 1 controls).
    #[builder(default = 0)]
    pub in_port1: u8,
    /// Initial latch for input port 2 (DIP switches, player 2 controls).
    #[builder(default = 0)]
    pub in_port2: u8,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Load the ROM at `rom_path` and run `config.frames` frames.
pub fn run(config: &RunnerConfig, rom_path: &Path) -> Result<InvadersMachine> {
    let rom = std::fs::read(rom_path)
        .with_context(|| format!("Failed to read ROM file '{}'", rom_path.display()))?;
    run_image(config, &rom)
}

/// Run `config.frames` frames of an in-memory ROM image.
pub fn run_image(config: &RunnerConfig, rom: &[u8]) -> Result<InvadersMachine> {
    let mut machine = InvadersMachine::new(
        config.memory_size,
        Ports::new(config.in_port1, config.in_port2),
        config.steps_per_half_frame,
    );
    machine.load_rom(rom);
    log::info!(
        "Loaded {} byte ROM, running {} frames",
        rom.len(),
        config.frames
    );

    for frame in 0..config.frames {
        machine
            .step_frame()
            .with_context(|| format!("CPU fault during frame {frame}"))?;
    }
    Ok(machine)
}
