//! MMU (Memory Management Unit) functions and structures.
//!
//! Besides the 16-bit address decoding the MMU is also the clock
//! hub of the machine: every CPU visible memory access goes through
//! [`Mmu::read`]/[`Mmu::write`] which advance the Timer, the PPU and
//! the Serial by 4 T-cycles *before* the access resolves. The raw
//! variants bypass the clock and are used by DMA, state handling
//! and debugging.

use std::io::Cursor;

use dotmatrix_common::{
    data::{read_into, read_u64, read_u8, write_bytes, write_u64, write_u8},
    error::Error,
};

use crate::{
    apu::Apu,
    consts::{DMA_ADDR, IE_ADDR, IF_ADDR, P1_ADDR, SB_ADDR, SC_ADDR},
    gb::Components,
    pad::Pad,
    ppu::Ppu,
    rom::Cartridge,
    serial::Serial,
    state::StateComponent,
    timer::Timer,
};

pub const RAM_SIZE: usize = 8192;
pub const HRAM_SIZE: usize = 128;

pub trait BusComponent {
    fn read(&self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, value: u8);
    fn read_many(&self, addr: u16, count: usize) -> Vec<u8> {
        (0..count)
            .map(|offset| self.read(addr + offset as u16))
            .collect()
    }
    fn write_many(&mut self, addr: u16, values: &[u8]) {
        for (offset, &value) in values.iter().enumerate() {
            self.write(addr + offset as u16, value);
        }
    }
}

pub struct Mmu {
    /// Register that controls the interrupts that are considered
    /// to be enabled and should be triggered.
    pub ie: u8,

    /// Reference to the PPU (Pixel Processing Unit) that is going
    /// to be used both for VRAM/OAM reading/writing and to forward
    /// some of the access operations.
    ppu: Ppu,

    /// Reference to the APU (Audio Processing Unit) that is going
    /// to be used for register reading/writing.
    apu: Apu,

    /// Reference to the Gamepad structure that is going to control
    /// the I/O access to this device.
    pad: Pad,

    /// The timer controller to be used as part of the I/O access
    /// that is memory mapped.
    timer: Timer,

    /// The serial transfer controller, stubbed to the level of
    /// a disconnected link cable.
    serial: Serial,

    /// The cartridge ROM that is currently loaded into the system,
    /// going to be used to access ROM and external RAM banks.
    rom: Cartridge,

    /// Buffer used to store the 8 KiB of work RAM of the system,
    /// mapped in the 0xC000-0xDFFF range and mirrored in the
    /// 0xE000-0xFDFF one.
    ram: [u8; RAM_SIZE],

    /// High RAM (127 bytes) mapped at 0xFF80-0xFFFE.
    hram: [u8; HRAM_SIZE],

    /// Last value written to the DMA register (0xFF46), reads of
    /// the register return it.
    dma: u8,

    /// Total number of T-cycles the machine has been advanced by,
    /// every CPU visible access contributes 4 to this counter.
    ticks: u64,
}

impl Mmu {
    pub fn new(components: Components) -> Self {
        Self {
            ppu: components.ppu,
            apu: components.apu,
            pad: components.pad,
            timer: components.timer,
            serial: components.serial,
            rom: Cartridge::new(),
            ram: [0u8; RAM_SIZE],
            hram: [0u8; HRAM_SIZE],
            ie: 0x0,
            dma: 0x0,
            ticks: 0,
        }
    }

    pub fn reset(&mut self) {
        self.rom = Cartridge::new();
        self.ram = [0u8; RAM_SIZE];
        self.hram = [0u8; HRAM_SIZE];
        self.ie = 0x0;
        self.dma = 0x0;
        self.ticks = 0;
    }

    /// Advances the clocked components by the provided number of
    /// T-cycles, this is the single point through which emulated
    /// time moves forward.
    pub fn tick(&mut self, cycles: u16) {
        self.ticks += cycles as u64;
        self.timer.clock(cycles);
        self.ppu.clock(cycles);
        self.serial.clock(cycles);
    }

    /// The total number of T-cycles the machine has run for, the
    /// CPU derives instruction timing from deltas of this counter.
    #[inline(always)]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Performs a CPU visible read, the machine is ticked by the
    /// 4 T-cycles of the access before the value is resolved.
    pub fn read(&mut self, addr: u16) -> u8 {
        self.tick(4);
        self.read_raw(addr)
    }

    /// Performs a CPU visible write, the machine is ticked by the
    /// 4 T-cycles of the access before the value lands.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.tick(4);
        self.write_raw(addr, value);
    }

    /// Reads a byte from a certain memory address without moving
    /// emulated time, allowing deep inspection of values.
    pub fn read_raw(&self, addr: u16) -> u8 {
        match addr {
            // 0x0000-0x3FFF - ROM 0 (16 KB)
            // 0x4000-0x7FFF - ROM 1 (Banked) (16 KB)
            0x0000..=0x7fff => self.rom.read(addr),

            // 0x8000-0x9FFF - Graphics: VRAM (8 KB)
            0x8000..=0x9fff => self.ppu.read(addr),

            // 0xA000-0xBFFF - External RAM (8 KB)
            0xa000..=0xbfff => self.rom.read(addr),

            // 0xC000-0xDFFF - Working RAM (8 KB)
            0xc000..=0xdfff => self.ram[(addr & 0x1fff) as usize],

            // 0xE000-0xFDFF - Working RAM Shadow
            0xe000..=0xfdff => self.ram[(addr & 0x1fff) as usize],

            // 0xFE00-0xFE9F - Object attribute memory (OAM)
            0xfe00..=0xfe9f => self.ppu.read(addr),

            // 0xFEA0-0xFEFF - Not Usable
            0xfea0..=0xfeff => 0xff,

            // 0xFF00 - Joypad input
            P1_ADDR => self.pad.read(addr),

            // 0xFF01-0xFF02 - Serial data transfer
            SB_ADDR | SC_ADDR => self.serial.read(addr),

            // 0xFF04-0xFF07 - Timer and divider
            0xff04..=0xff07 => self.timer.read(addr),

            // 0xFF0F — IF: Interrupt flag
            IF_ADDR => self.int_flags() | 0xe0,

            // 0xFF10-0xFF26 — Audio
            // 0xFF30-0xFF3F — Wave pattern
            0xff10..=0xff26 | 0xff30..=0xff3f => self.apu.read(addr),

            // 0xFF40-0xFF45 - PPU registers
            // 0xFF47-0xFF4B - PPU registers
            0xff40..=0xff45 | 0xff47..=0xff4b => self.ppu.read(addr),

            // 0xFF46 — DMA: OAM DMA source address & start
            DMA_ADDR => self.dma,

            // 0xFF80-0xFFFE - High RAM (HRAM)
            0xff80..=0xfffe => self.hram[(addr & 0x007f) as usize],

            // 0xFFFF — IE: Interrupt enable
            IE_ADDR => self.ie,

            // remaining (unused) I/O registers read as set
            _ => 0xff,
        }
    }

    /// Writes a byte to a certain memory address without moving
    /// emulated time.
    pub fn write_raw(&mut self, addr: u16, value: u8) {
        match addr {
            // 0x0000-0x7FFF - MBC control registers
            0x0000..=0x7fff => self.rom.write(addr, value),

            // 0x8000-0x9FFF - Graphics: VRAM (8 KB)
            0x8000..=0x9fff => self.ppu.write(addr, value),

            // 0xA000-0xBFFF - External RAM (8 KB)
            0xa000..=0xbfff => self.rom.write(addr, value),

            // 0xC000-0xDFFF - Working RAM (8 KB)
            0xc000..=0xdfff => self.ram[(addr & 0x1fff) as usize] = value,

            // 0xE000-0xFDFF - Working RAM Shadow
            0xe000..=0xfdff => self.ram[(addr & 0x1fff) as usize] = value,

            // 0xFE00-0xFE9F - Object attribute memory (OAM)
            0xfe00..=0xfe9f => self.ppu.write(addr, value),

            // 0xFEA0-0xFEFF - Not Usable
            0xfea0..=0xfeff => (),

            // 0xFF00 - Joypad input
            P1_ADDR => self.pad.write(addr, value),

            // 0xFF01-0xFF02 - Serial data transfer
            SB_ADDR | SC_ADDR => self.serial.write(addr, value),

            // 0xFF04-0xFF07 - Timer and divider
            0xff04..=0xff07 => self.timer.write(addr, value),

            // 0xFF0F — IF: Interrupt flag
            IF_ADDR => self.set_int_flags(value),

            // 0xFF10-0xFF26 — Audio
            // 0xFF30-0xFF3F — Wave pattern
            0xff10..=0xff26 | 0xff30..=0xff3f => self.apu.write(addr, value),

            // 0xFF40-0xFF45 - PPU registers
            // 0xFF47-0xFF4B - PPU registers
            0xff40..=0xff45 | 0xff47..=0xff4b => self.ppu.write(addr, value),

            // 0xFF46 — DMA: OAM DMA source address & start
            DMA_ADDR => {
                self.dma = value;
                self.dma_transfer(value);
            }

            // 0xFF80-0xFFFE - High RAM (HRAM)
            0xff80..=0xfffe => self.hram[(addr & 0x007f) as usize] = value,

            // 0xFFFF — IE: Interrupt enable, only the five
            // interrupt bits are backed
            IE_ADDR => self.ie = value & 0x1f,

            // remaining (unused) I/O registers ignore writes
            _ => (),
        }
    }

    /// Runs the OAM DMA transfer as a single atomic 160 byte burst,
    /// the copy itself does not move emulated time (the triggering
    /// write already paid its 4 T-cycles). Software is expected to
    /// busy wait in HRAM for the nominal transfer duration.
    fn dma_transfer(&mut self, value: u8) {
        let source = (value as u16) << 8;
        for index in 0..160u16 {
            let byte = self.read_raw(source.wrapping_add(index));
            self.ppu.write(0xfe00 + index, byte);
        }
    }

    /// Composes the IF register value from the per component
    /// interrupt lines.
    pub fn int_flags(&self) -> u8 {
        (if self.ppu.int_vblank() { 0x01 } else { 0x00 })
            | (if self.ppu.int_stat() { 0x02 } else { 0x00 })
            | (if self.timer.int_tima() { 0x04 } else { 0x00 })
            | (if self.serial.int_serial() { 0x08 } else { 0x00 })
            | (if self.pad.int_pad() { 0x10 } else { 0x00 })
    }

    /// Spreads an IF register write back into the per component
    /// interrupt lines.
    pub fn set_int_flags(&mut self, value: u8) {
        self.ppu.set_int_vblank(value & 0x01 == 0x01);
        self.ppu.set_int_stat(value & 0x02 == 0x02);
        self.timer.set_int_tima(value & 0x04 == 0x04);
        self.serial.set_int_serial(value & 0x08 == 0x08);
        self.pad.set_int_pad(value & 0x10 == 0x10);
    }

    /// Obtains the set of interrupts that are both pending and
    /// enabled, without moving emulated time (this is an internal
    /// CPU probe, not a memory access).
    #[inline(always)]
    pub fn interrupt_pending(&self) -> u8 {
        self.int_flags() & self.ie & 0x1f
    }

    /// Acknowledges the interrupt with the provided index (0 to 4),
    /// clearing the respective line in the owning component.
    pub fn ack_interrupt(&mut self, index: u8) {
        match index {
            0 => self.ppu.ack_vblank(),
            1 => self.ppu.ack_stat(),
            2 => self.timer.ack_tima(),
            3 => self.serial.ack_serial(),
            4 => self.pad.ack_pad(),
            _ => (),
        }
    }

    pub fn read_many(&self, addr: u16, count: u16) -> Vec<u8> {
        let mut data: Vec<u8> = vec![];

        for index in 0..count {
            let byte = self.read_raw(addr + index);
            data.push(byte);
        }

        data
    }

    pub fn write_many(&mut self, addr: u16, data: &[u8]) {
        for (index, byte) in data.iter().enumerate() {
            self.write_raw(addr + index as u16, *byte)
        }
    }

    pub fn ppu(&mut self) -> &mut Ppu {
        &mut self.ppu
    }

    pub fn ppu_i(&self) -> &Ppu {
        &self.ppu
    }

    pub fn apu(&mut self) -> &mut Apu {
        &mut self.apu
    }

    pub fn apu_i(&self) -> &Apu {
        &self.apu
    }

    pub fn pad(&mut self) -> &mut Pad {
        &mut self.pad
    }

    pub fn pad_i(&self) -> &Pad {
        &self.pad
    }

    pub fn timer(&mut self) -> &mut Timer {
        &mut self.timer
    }

    pub fn timer_i(&self) -> &Timer {
        &self.timer
    }

    pub fn serial(&mut self) -> &mut Serial {
        &mut self.serial
    }

    pub fn serial_i(&self) -> &Serial {
        &self.serial
    }

    pub fn rom(&mut self) -> &mut Cartridge {
        &mut self.rom
    }

    pub fn rom_i(&self) -> &Cartridge {
        &self.rom
    }

    pub fn set_rom(&mut self, rom: Cartridge) {
        self.rom = rom;
    }
}

impl StateComponent for Mmu {
    fn state(&self) -> Result<Vec<u8>, Error> {
        let mut cursor = Cursor::new(vec![]);
        write_u8(&mut cursor, self.ie)?;
        write_u8(&mut cursor, self.dma)?;
        write_u64(&mut cursor, self.ticks)?;
        write_bytes(&mut cursor, &self.ram)?;
        write_bytes(&mut cursor, &self.hram)?;
        Ok(cursor.into_inner())
    }

    fn set_state(&mut self, data: &[u8]) -> Result<(), Error> {
        let mut cursor = Cursor::new(data);
        self.ie = read_u8(&mut cursor)?;
        self.dma = read_u8(&mut cursor)?;
        self.ticks = read_u64(&mut cursor)?;
        read_into(&mut cursor, &mut self.ram)?;
        read_into(&mut cursor, &mut self.hram)?;
        Ok(())
    }
}

impl Default for Mmu {
    fn default() -> Self {
        Mmu::new(Components::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::consts::{DIV_ADDR, IF_ADDR};

    use super::Mmu;

    #[test]
    fn test_work_ram_and_echo() {
        let mut mmu = Mmu::default();
        mmu.write(0xc123, 0x42);
        assert_eq!(mmu.read(0xc123), 0x42);
        assert_eq!(mmu.read(0xe123), 0x42);

        mmu.write(0xe234, 0x24);
        assert_eq!(mmu.read(0xc234), 0x24);
    }

    #[test]
    fn test_unusable_region() {
        let mut mmu = Mmu::default();
        mmu.write(0xfea0, 0x12);
        assert_eq!(mmu.read(0xfea0), 0xff);
        assert_eq!(mmu.read(0xfeff), 0xff);
    }

    #[test]
    fn test_unused_io_reads_ones() {
        let mut mmu = Mmu::default();
        assert_eq!(mmu.read(0xff4d), 0xff);
        assert_eq!(mmu.read(0xff7f), 0xff);
    }

    #[test]
    fn test_div_write_read_law() {
        let mut mmu = Mmu::default();
        for _ in 0..100 {
            mmu.tick(4);
        }
        for value in [0x00u8, 0x13, 0xff] {
            mmu.write(DIV_ADDR, value);
            assert_eq!(mmu.read(DIV_ADDR), 0x00);
        }
    }

    #[test]
    fn test_access_ticks_clock() {
        let mut mmu = Mmu::default();
        let start = mmu.ticks();
        mmu.read(0xc000);
        mmu.write(0xc000, 0x01);
        assert_eq!(mmu.ticks() - start, 8);

        // raw accesses do not move emulated time
        mmu.read_raw(0xc000);
        mmu.write_raw(0xc000, 0x02);
        assert_eq!(mmu.ticks() - start, 8);
    }

    #[test]
    fn test_dma_transfer() {
        let mut mmu = Mmu::default();
        for index in 0..160u16 {
            mmu.write_raw(0xc000 + index, index as u8);
        }

        let ticks = mmu.ticks();
        mmu.write(0xff46, 0xc0);
        assert_eq!(mmu.ticks() - ticks, 4);
        assert_eq!(mmu.read(0xff46), 0xc0);

        for index in 0..160u16 {
            assert_eq!(mmu.ppu_i().read(0xfe00 + index), index as u8);
        }
    }

    #[test]
    fn test_if_composition() {
        let mut mmu = Mmu::default();
        assert_eq!(mmu.read(IF_ADDR), 0xe0);

        mmu.timer().set_int_tima(true);
        mmu.ppu().set_int_vblank(true);
        assert_eq!(mmu.read(IF_ADDR), 0xe0 | 0x05);
        assert_eq!(mmu.interrupt_pending(), 0x00);

        mmu.ie = 0x04;
        assert_eq!(mmu.interrupt_pending(), 0x04);

        mmu.ack_interrupt(2);
        assert_eq!(mmu.read(IF_ADDR), 0xe0 | 0x01);
    }
}
