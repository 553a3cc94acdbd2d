//! Game Boy emulation entrypoint and associated functions and structures.
//!
//! Most of the meaningful publicly available functions and structures to build
//! a working emulator should be present here.
//!
//! # Examples
//!
//! Creates a simple [`GameBoy`] instance, boots it into the post boot ROM
//! state and runs a frame of an empty (tight loop) cartridge.
//!
//! ```rust
//! use dotmatrix::{gb::GameBoy, test::rom_with};
//! let data = rom_with(&[(0x0100, &[0x18, 0xfe])]);
//! let mut game_boy = GameBoy::new();
//! game_boy.boot();
//! game_boy.load_rom(&data, None).unwrap();
//! let frame = game_boy.run_frame().unwrap();
//! assert_eq!(frame.len(), 160 * 144);
//! ```

use std::{
    collections::VecDeque,
    fmt::{self, Display, Formatter},
};

use dotmatrix_common::error::Error;

use crate::{
    apu::{Apu, AudioSink},
    consts::{
        BGP_ADDR, IF_ADDR, LCDC_ADDR, LYC_ADDR, LY_ADDR, NR11_ADDR, NR12_ADDR, NR14_ADDR,
        NR21_ADDR, NR24_ADDR, NR30_ADDR, NR31_ADDR, NR32_ADDR, NR34_ADDR, NR41_ADDR, NR44_ADDR,
        NR50_ADDR, NR51_ADDR, NR52_ADDR, SCX_ADDR, SCY_ADDR, WX_ADDR, WY_ADDR,
    },
    cpu::{Cpu, CpuFault},
    diag::DiagScope,
    gen::{COMPILATION_DATE, COMPILATION_TIME, COMPILER, COMPILER_VERSION, NAME, VERSION},
    mmu::Mmu,
    pad::{Pad, PadKey},
    ppu::{Ppu, PpuMode, DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAME_BUFFER_SIZE},
    rom::Cartridge,
    serial::Serial,
    timer::Timer,
    util::{capitalize, read_file, replace_ext, write_file},
    warnln,
};

/// Aggregation structure allowing the bundling of
/// all the components of a GameBoy into a single
/// element for easy access.
pub struct Components {
    pub ppu: Ppu,
    pub apu: Apu,
    pub pad: Pad,
    pub timer: Timer,
    pub serial: Serial,
}

impl Default for Components {
    fn default() -> Self {
        Self {
            ppu: Ppu::new(),
            apu: Apu::default(),
            pad: Pad::default(),
            timer: Timer::default(),
            serial: Serial::default(),
        }
    }
}

/// Snapshot of the most relevant registers of the machine,
/// meant for debugging and diagnostics front-ends.
pub struct Registers {
    pub pc: u16,
    pub sp: u16,
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub scy: u8,
    pub scx: u8,
    pub wy: u8,
    pub wx: u8,
    pub ly: u8,
    pub lyc: u8,
}

/// Identity and build metadata of the emulator, backed by the
/// constants generated at compile time (see `build.rs`).
pub struct Info;

impl Info {
    pub fn name() -> String {
        capitalize(NAME)
    }

    pub fn name_lower() -> String {
        String::from(NAME)
    }

    pub fn version() -> String {
        String::from(VERSION)
    }

    pub fn system() -> String {
        String::from("Game Boy")
    }

    /// Compiler name and version the crate was built with, meant
    /// for bug reports and the crash dump header.
    pub fn compiler() -> String {
        format!("{} {}", COMPILER, COMPILER_VERSION)
    }

    /// Date and time at which the crate was compiled.
    pub fn build_timestamp() -> String {
        format!("{} {}", COMPILATION_DATE, COMPILATION_TIME)
    }
}

/// Top level structure that abstracts the usage of the
/// Game Boy system under the dotmatrix emulator.
///
/// Should serve as the main entry-point API.
pub struct GameBoy {
    /// Reference to the Game Boy CPU component to be
    /// used as the main element of the system, driving
    /// all the other components through the memory
    /// access tick hook.
    cpu: Cpu,

    /// The path of the currently loaded ROM, when one was
    /// provided, used for the save RAM file convention.
    rom_path: Option<String>,

    /// The sink that receives the stereo samples generated
    /// at every frame boundary, when attached.
    audio_sink: Option<Box<dyn AudioSink>>,

    /// Fractional accumulator of audio samples per frame, the
    /// sample rate is in general not a multiple of the frame
    /// rate so the per-frame batch size dithers.
    sample_acc: f32,
}

impl GameBoy {
    /// The logic frequency of the Game Boy
    /// CPU in hz.
    pub const CPU_FREQ: u32 = 4194304;

    /// The visual frequency (refresh rate)
    /// of the Game Boy, close to 60 hz.
    pub const VISUAL_FREQ: f32 = 59.7275;

    /// The cycles taken to run a complete frame
    /// loop in the Game Boy's PPU (in CPU cycles).
    pub const LCD_CYCLES: u32 = 70224;

    /// Safety bound on the T-cycles a single frame run may take,
    /// prevents a livelock when software never produces V-Blank
    /// (typically with the LCD switched off).
    pub const FRAME_CYCLE_LIMIT: u64 = 2 * Self::LCD_CYCLES as u64;

    pub fn new() -> Self {
        let mmu = Mmu::new(Components::default());
        let cpu = Cpu::new(mmu);

        Self {
            cpu,
            rom_path: None,
            audio_sink: None,
            sample_acc: 0.0,
        }
    }

    pub fn verify_rom(data: &[u8]) -> bool {
        Cartridge::from_data(data).is_ok()
    }

    pub fn reset(&mut self) {
        self.ppu().reset();
        self.apu().reset();
        self.timer().reset();
        self.serial().reset();
        self.pad().reset();
        self.mmu().reset();
        self.cpu.reset();
        self.sample_acc = 0.0;
    }

    /// Direct boot method that immediately jumps the machine
    /// to the post boot state, this will effectively skip the
    /// boot sequence and jump to the cartridge execution.
    pub fn boot(&mut self) {
        self.cpu.boot();

        // brings the I/O register space to the state the DMG
        // boot ROM leaves it in
        let mmu = self.cpu.mmu();
        mmu.write_raw(NR11_ADDR, 0xbf);
        mmu.write_raw(NR12_ADDR, 0xf3);
        mmu.write_raw(NR14_ADDR, 0x3f);
        mmu.write_raw(NR21_ADDR, 0x3f);
        mmu.write_raw(NR24_ADDR, 0x3f);
        mmu.write_raw(NR30_ADDR, 0x7f);
        mmu.write_raw(NR31_ADDR, 0xff);
        mmu.write_raw(NR32_ADDR, 0x9f);
        mmu.write_raw(NR34_ADDR, 0x3f);
        mmu.write_raw(NR41_ADDR, 0xff);
        mmu.write_raw(NR44_ADDR, 0x3f);
        mmu.write_raw(NR50_ADDR, 0x77);
        mmu.write_raw(NR51_ADDR, 0xf3);
        mmu.write_raw(NR52_ADDR, 0xf1);
        mmu.write_raw(LCDC_ADDR, 0x91);
        mmu.write_raw(BGP_ADDR, 0xfc);
        mmu.write_raw(IF_ADDR, 0x01);
    }

    /// Loads a cartridge image into the system, hydrating the
    /// battery backed save RAM from the conventional `.sav` file
    /// when a ROM path is provided.
    pub fn load_rom(&mut self, data: &[u8], path: Option<&str>) -> Result<(), Error> {
        let mut rom = Cartridge::from_data(data)?;
        self.rom_path = path.map(String::from);

        if rom.has_battery() {
            if let Some(save_path) = self.save_path() {
                match read_file(&save_path) {
                    Ok(data) => rom.set_ram_data(&data),
                    Err(_) => warnln!("No save RAM loaded from {}", save_path),
                }
            }
        }

        self.mmu().set_rom(rom);
        Ok(())
    }

    pub fn load_rom_file(&mut self, path: &str) -> Result<(), Error> {
        let data = read_file(path)?;
        self.load_rom(&data, Some(path))
    }

    /// Runs the machine until the PPU signals a complete frame,
    /// then generates and flushes one frame worth of audio samples
    /// and returns the resulting frame buffer (one byte per pixel,
    /// 2 bit shade indexes).
    pub fn run_frame(&mut self) -> Result<&[u8; FRAME_BUFFER_SIZE], Error> {
        // registers the machine for crash diagnostics while the
        // frame is in flight, deregistered when the guard drops
        let _diag = DiagScope::enter(self as *const GameBoy);

        self.ppu().ack_frame();

        let start = self.mmu_i().ticks();
        loop {
            self.cpu.clock();

            if let Some(fault) = self.cpu.fault() {
                return Err(Error::IllegalOpcode(fault.pc, fault.opcode));
            }
            if self.ppu_i().frame_ready() {
                break;
            }
            if self.mmu_i().ticks() - start >= Self::FRAME_CYCLE_LIMIT {
                return Err(Error::FrameOverrun);
            }
        }
        self.ppu().ack_frame();

        // one frame of wall time corresponds to sample_rate / 59.73
        // samples, the fractional part is carried across frames
        let sampling_rate = self.apu_i().sampling_rate();
        self.sample_acc += sampling_rate as f32 / Self::VISUAL_FREQ;
        let count = self.sample_acc as usize;
        self.sample_acc -= count as f32;
        self.apu().synthesize(count);

        if self.audio_sink.is_some() {
            let samples = self.apu().drain_audio_buffer();
            if let Some(sink) = self.audio_sink.as_mut() {
                sink.push_samples(&samples);
            }
        }

        Ok(self.cpu.mmu_i().ppu_i().frame_buffer())
    }

    pub fn press(&mut self, key: PadKey) {
        self.pad().key_press(key);
    }

    pub fn release(&mut self, key: PadKey) {
        self.pad().key_lift(key);
    }

    pub fn key_press(&mut self, key: PadKey) {
        self.press(key);
    }

    pub fn key_lift(&mut self, key: PadKey) {
        self.release(key);
    }

    /// Flushes the battery backed save RAM to the conventional
    /// `.sav` file next to the loaded ROM (when a path is known).
    pub fn save(&self) -> Result<(), Error> {
        if !self.rom_i().has_battery() {
            return Ok(());
        }
        let Some(save_path) = self.save_path() else {
            return Ok(());
        };
        write_file(&save_path, self.rom_i().ram_data(), None)
    }

    /// Shuts the system down, flushing the save RAM.
    pub fn close(&mut self) -> Result<(), Error> {
        self.save()
    }

    pub fn attach_audio_sink(&mut self, sink: Box<dyn AudioSink>) {
        self.audio_sink = Some(sink);
    }

    pub fn detach_audio_sink(&mut self) {
        self.audio_sink = None;
    }

    fn save_path(&self) -> Option<String> {
        self.rom_path
            .as_deref()
            .and_then(|path| replace_ext(path, "sav"))
    }

    /// Advances the machine by one CPU instruction (or interrupt
    /// service), returning the number of T-cycles consumed.
    pub fn clock(&mut self) -> u16 {
        self.cpu.clock()
    }

    /// Clocks the emulator until the limit of cycles that has been
    /// provided and returns the amount of cycles that have been
    /// clocked.
    pub fn clocks_cycles(&mut self, limit: usize) -> u64 {
        let mut cycles = 0_u64;
        while cycles < limit as u64 {
            cycles += self.clock() as u64;
        }
        cycles
    }

    /// Runs the machine until the next frame boundary, returning
    /// the number of cycles used. Unlike [`GameBoy::run_frame`]
    /// no fault or overrun handling is performed.
    pub fn next_frame(&mut self) -> u32 {
        let mut cycles = 0u32;
        let current_frame = self.ppu_i().frame_index();
        while self.ppu_i().frame_index() == current_frame {
            cycles += self.clock() as u32;
        }
        cycles
    }

    /// Clocks the machine until the PC reaches the provided
    /// address, useful for tests and debugging sessions.
    pub fn step_to(&mut self, addr: u16) -> u32 {
        let mut cycles = 0u32;
        while self.cpu.pc() != addr {
            cycles += self.clock() as u32;
        }
        cycles
    }

    pub fn cpu_fault(&self) -> Option<CpuFault> {
        self.cpu.fault()
    }

    pub fn clear_cpu_fault(&mut self) {
        self.cpu.clear_fault();
    }

    pub fn ppu_ly(&self) -> u8 {
        self.ppu_i().ly()
    }

    pub fn ppu_mode(&self) -> PpuMode {
        self.ppu_i().mode()
    }

    pub fn ppu_frame(&self) -> u16 {
        self.ppu_i().frame_index()
    }

    pub fn registers(&self) -> Registers {
        let ppu = self.ppu_i();
        Registers {
            pc: self.cpu.pc,
            sp: self.cpu.sp,
            a: self.cpu.a,
            b: self.cpu.b,
            c: self.cpu.c,
            d: self.cpu.d,
            e: self.cpu.e,
            h: self.cpu.h,
            l: self.cpu.l,
            scy: ppu.read(SCY_ADDR),
            scx: ppu.read(SCX_ADDR),
            wy: ppu.read(WY_ADDR),
            wx: ppu.read(WX_ADDR),
            ly: ppu.read(LY_ADDR),
            lyc: ppu.read(LYC_ADDR),
        }
    }

    pub fn display_width(&self) -> usize {
        DISPLAY_WIDTH
    }

    pub fn display_height(&self) -> usize {
        DISPLAY_HEIGHT
    }

    pub fn rom_path(&self) -> Option<&str> {
        self.rom_path.as_deref()
    }

    pub fn description(&self, column_length: usize) -> String {
        let version_l = format!("{:width$}", "Version", width = column_length);
        let clock_l = format!("{:width$}", "Clock", width = column_length);
        let rom_l = format!("{:width$}", "ROM", width = column_length);
        format!(
            "{}  {}\n{}  {:.02} Mhz\n{}  {}",
            version_l,
            Info::version(),
            clock_l,
            Self::CPU_FREQ as f32 / 1000.0 / 1000.0,
            rom_l,
            self.rom_i().title(),
        )
    }

    pub fn description_debug(&self) -> String {
        format!(
            "{}\nCPU:\n{}",
            self.description(12),
            self.cpu_i().description_default(),
        )
    }
}

/// Accessor implementations providing direct access to the
/// individual components of the machine.
impl GameBoy {
    pub fn cpu(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn cpu_i(&self) -> &Cpu {
        &self.cpu
    }

    pub fn mmu(&mut self) -> &mut Mmu {
        self.cpu.mmu()
    }

    pub fn mmu_i(&self) -> &Mmu {
        self.cpu.mmu_i()
    }

    pub fn ppu(&mut self) -> &mut Ppu {
        self.cpu.mmu().ppu()
    }

    pub fn ppu_i(&self) -> &Ppu {
        self.cpu.mmu_i().ppu_i()
    }

    pub fn apu(&mut self) -> &mut Apu {
        self.cpu.mmu().apu()
    }

    pub fn apu_i(&self) -> &Apu {
        self.cpu.mmu_i().apu_i()
    }

    pub fn pad(&mut self) -> &mut Pad {
        self.cpu.mmu().pad()
    }

    pub fn pad_i(&self) -> &Pad {
        self.cpu.mmu_i().pad_i()
    }

    pub fn timer(&mut self) -> &mut Timer {
        self.cpu.mmu().timer()
    }

    pub fn timer_i(&self) -> &Timer {
        self.cpu.mmu_i().timer_i()
    }

    pub fn serial(&mut self) -> &mut Serial {
        self.cpu.mmu().serial()
    }

    pub fn serial_i(&self) -> &Serial {
        self.cpu.mmu_i().serial_i()
    }

    pub fn rom(&mut self) -> &mut Cartridge {
        self.cpu.mmu().rom()
    }

    pub fn rom_i(&self) -> &Cartridge {
        self.cpu.mmu_i().rom_i()
    }

    pub fn frame_buffer(&self) -> &[u8; FRAME_BUFFER_SIZE] {
        self.ppu_i().frame_buffer()
    }

    pub fn audio_buffer(&self) -> &VecDeque<f32> {
        self.apu_i().audio_buffer()
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for GameBoy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description(9))
    }
}

#[cfg(test)]
mod tests {
    use std::{env::temp_dir, fs::remove_file};

    use dotmatrix_common::error::Error;

    use crate::{
        apu::AudioSink,
        consts::IF_ADDR,
        test::{build_game_boy, build_rom_banked, rom_with},
        util::write_file,
    };

    use super::{GameBoy, Info};

    #[test]
    fn test_info() {
        assert_eq!(Info::name_lower(), "dotmatrix");
        assert_eq!(Info::system(), "Game Boy");
        assert!(!Info::version().is_empty());
        assert!(Info::compiler().starts_with("rustc"));
    }

    #[test]
    fn test_blank_boot() {
        // JP 0x0150 at the entrypoint, tight JR -2 loop at 0x0150
        let data = rom_with(&[(0x0100, &[0xc3, 0x50, 0x01]), (0x0150, &[0x18, 0xfe])]);
        let mut gb = build_game_boy(&data);

        for frame in 0u16..60 {
            let result = gb.run_frame().unwrap().to_vec();

            // a frame completes on the V-Blank entry, line 144
            assert_eq!(gb.ppu_ly(), 144);
            assert_eq!(gb.ppu_frame(), frame + 1);

            // the V-Blank interrupt flag was raised
            assert_eq!(gb.mmu_i().read_raw(IF_ADDR) & 0x01, 0x01);
            gb.mmu().write_raw(IF_ADDR, 0x00);

            // nothing was ever drawn, every pixel is shade zero
            assert!(result.iter().all(|&pixel| pixel == 0));
        }
    }

    #[test]
    fn test_frame_cycle_budget() {
        let data = rom_with(&[(0x0100, &[0x18, 0xfe])]);
        let mut gb = build_game_boy(&data);
        gb.run_frame().unwrap();

        // after the first (partial) frame the steady state cost of a
        // frame is the canonical 70224 T-cycles, up to the overshoot
        // of the instruction that crosses the V-Blank edge
        for _ in 0..5 {
            let start = gb.mmu_i().ticks();
            gb.run_frame().unwrap();
            let cycles = gb.mmu_i().ticks() - start;
            assert!((70224 - 12..=70224 + 12).contains(&(cycles as i64)));
        }
    }

    #[test]
    fn test_frame_overrun_with_lcd_off() {
        // LCDC clear at entry, then a tight loop
        let data = rom_with(&[(0x0100, &[0x3e, 0x00, 0xe0, 0x40, 0x18, 0xfe])]);
        let mut gb = build_game_boy(&data);

        let result = gb.run_frame();
        assert_eq!(result.unwrap_err(), Error::FrameOverrun);
        assert_eq!(gb.ppu_ly(), 0);
    }

    #[test]
    fn test_illegal_opcode_fault() {
        let data = rom_with(&[(0x0100, &[0xd3])]);
        let mut gb = build_game_boy(&data);

        let result = gb.run_frame();
        assert_eq!(result.unwrap_err(), Error::IllegalOpcode(0x0100, 0xd3));

        // the fault is recoverable, the machine can continue
        // (freewheeling) once it is cleared
        gb.clear_cpu_fault();
        gb.clock();
    }

    #[test]
    fn test_cycles_match_ticks_over_frames() {
        let data = rom_with(&[(0x0100, &[0xc3, 0x50, 0x01]), (0x0150, &[0x18, 0xfe])]);
        let mut gb = build_game_boy(&data);

        let start = gb.mmu_i().ticks();
        let mut total = 0u64;
        for _ in 0..10000 {
            total += gb.clock() as u64;
        }
        assert_eq!(total, gb.mmu_i().ticks() - start);
    }

    #[test]
    fn test_audio_batch_per_frame() {
        let data = rom_with(&[(0x0100, &[0x18, 0xfe])]);
        let mut gb = build_game_boy(&data);

        // with no sink attached the generated samples accumulate
        // in the APU buffer, ten frames of audio stay within one
        // sample pair of the nominal amount
        for _ in 0..10 {
            gb.run_frame().unwrap();
        }
        let nominal = 22050.0 / GameBoy::VISUAL_FREQ * 10.0;
        let pairs = (gb.audio_buffer().len() / 2) as f32;
        assert!((pairs - nominal).abs() <= 1.0);
    }

    #[test]
    fn test_audio_sink_drains_buffer() {
        struct NullSink;
        impl AudioSink for NullSink {
            fn push_samples(&mut self, _samples: &[f32]) {}
        }

        let data = rom_with(&[(0x0100, &[0x18, 0xfe])]);
        let mut gb = build_game_boy(&data);
        gb.attach_audio_sink(Box::new(NullSink));

        for _ in 0..5 {
            gb.run_frame().unwrap();
        }
        assert_eq!(gb.audio_buffer().len(), 0);
    }

    #[test]
    fn test_save_ram_round_trip() {
        let rom_path = temp_dir().join("dotmatrix_battery.gb");
        let sav_path = temp_dir().join("dotmatrix_battery.sav");
        let rom_path = rom_path.to_str().unwrap();
        let _ = remove_file(&sav_path);

        let data = build_rom_banked(0x03, 0x01, 0x02, b"BATTERY");
        write_file(rom_path, &data, None).unwrap();

        let mut gb = GameBoy::new();
        gb.boot();
        gb.load_rom_file(rom_path).unwrap();

        // enable cartridge RAM and leave a mark in it
        gb.mmu().write_raw(0x0000, 0x0a);
        gb.mmu().write_raw(0xa010, 0x77);
        gb.save().unwrap();

        let mut other = GameBoy::new();
        other.boot();
        other.load_rom_file(rom_path).unwrap();
        other.mmu().write_raw(0x0000, 0x0a);
        assert_eq!(other.mmu_i().read_raw(0xa010), 0x77);

        let _ = remove_file(&sav_path);
        let _ = remove_file(rom_path);
    }
}
