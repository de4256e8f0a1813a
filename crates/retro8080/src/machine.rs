use retro8080_core::{Cpu8080, CpuConfig, PortAccess, StepOutcome, WriteWindow};

/// Start of video RAM used by Space Invaders.
///
/// The original hardware maps the frame buffer at 0x2400–0x3fff.
pub const VRAM_START: usize = 0x2400;
/// Size of video RAM in bytes (0x1c00 = 7168 bytes = 224x256 bits).
pub const VRAM_SIZE: usize = 0x1c00;

/// Bit 3 of input port 1 reads as 1 on the real board.
const IN1_BIT_ALWAYS_ONE: u8 = 3;

/// Input, output and shift-register state behind the `IN`/`OUT` ports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ports {
    pub in_port1: u8,
    pub in_port2: u8,
    pub out_port3: u8,
    pub out_port5: u8,
    shift_register: u16,
    shift_offset: u8,
}

impl Default for Ports {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Ports {
    /// Ports with the given input latches. Bit 3 of port 1 is forced on.
    pub fn new(in_port1: u8, in_port2: u8) -> Self {
        Self {
            in_port1: in_port1 | (1 << IN1_BIT_ALWAYS_ONE),
            in_port2,
            out_port3: 0,
            out_port5: 0,
            shift_register: 0,
            shift_offset: 0,
        }
    }

    pub fn read(&self, port: u8) -> u8 {
        match port {
            1 => self.in_port1,
            2 => self.in_port2,
            3 => {
                let shift = 8 - (self.shift_offset & 0x7);
                (self.shift_register >> shift) as u8
            }
            _ => 0,
        }
    }

    pub fn write(&mut self, port: u8, value: u8) {
        match port {
            2 => self.shift_offset = value & 0x7,
            3 => self.out_port3 = value,
            4 => self.shift_register = (self.shift_register >> 8) | (u16::from(value) << 8),
            5 => self.out_port5 = value,
            // 6 is the watchdog.
            _ => {}
        }
    }
}

/// Space Invaders board without video or sound output: the CPU core plus the
/// I/O ports, driven one frame at a time.
#[derive(Debug)]
pub struct InvadersMachine {
    cpu: Cpu8080,
    ports: Ports,
    steps_per_half_frame: u32,
}

impl InvadersMachine {
    pub fn new(memory_size: usize, ports: Ports, steps_per_half_frame: u32) -> Self {
        let config = CpuConfig::builder()
            .write_window(WriteWindow::INVADERS)
            .min_memory_size(memory_size)
            .build();
        let mut cpu = Cpu8080::with_config(config);
        cpu.allocate_memory(memory_size);
        Self {
            cpu,
            ports,
            steps_per_half_frame,
        }
    }

    /// Load a combined ROM image at 0x0000 and start execution there.
    pub fn load_rom(&mut self, rom: &[u8]) {
        self.cpu.load_image(rom);
        self.cpu.reset();
    }

    pub fn cpu(&self) -> &Cpu8080 {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu8080 {
        &mut self.cpu
    }

    pub fn ports(&self) -> &Ports {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut Ports {
        &mut self.ports
    }

    /// Execute one instruction and service any port access it made.
    pub fn step(&mut self) -> retro8080_core::Result<StepOutcome> {
        let outcome = self.cpu.step()?;
        if let StepOutcome::Executed {
            port: Some(access), ..
        } = outcome
        {
            match access {
                PortAccess::Input(port) => self.cpu.regs.a = self.ports.read(port),
                PortAccess::Output { port, value } => self.ports.write(port, value),
            }
        }
        Ok(outcome)
    }

    /// Run one video frame: half a frame of instructions, RST 1, the other
    /// half, RST 2.
    pub fn step_frame(&mut self) -> retro8080_core::Result<()> {
        for _ in 0..self.steps_per_half_frame {
            self.step()?;
        }
        self.cpu.interrupt(1);

        for _ in 0..self.steps_per_half_frame {
            self.step()?;
        }
        self.cpu.interrupt(2);
        Ok(())
    }

    /// The raw video RAM window used by a renderer: 0x1c00 bytes at 0x2400.
    pub fn video_ram(&self) -> retro8080_core::Result<&[u8]> {
        self.cpu.memory().slice(VRAM_START, VRAM_SIZE)
    }

    /// Current values of the sound output ports (OUT 3 and OUT 5).
    pub fn outputs(&self) -> (u8, u8) {
        (self.ports.out_port3, self.ports.out_port5)
    }
}
