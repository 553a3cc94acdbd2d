//! Test utilities for the emulator.
//!
//! Provides in-memory cartridge image builders so that the complete
//! test suite (and the benchmarks) run hermetically, without any ROM
//! files on disk.

use crate::gb::GameBoy;

/// Builds a minimal cartridge image with the provided header bytes
/// (type, ROM size code and RAM size code) and title. Each 16 KiB
/// bank carries its own index at internal offset 0x2001 so that
/// banking tests can verify which bank is mapped.
pub fn build_rom_banked(
    rom_type: u8,
    rom_size_code: u8,
    ram_size_code: u8,
    title: &[u8],
) -> Vec<u8> {
    let banks: usize = match rom_size_code {
        0x00..=0x08 => 2 << rom_size_code,
        _ => 4,
    };
    let mut data = vec![0u8; banks * 0x4000];

    for (index, byte) in title.iter().take(16).enumerate() {
        data[0x0134 + index] = *byte;
    }
    data[0x0147] = rom_type;
    data[0x0148] = rom_size_code;
    data[0x0149] = ram_size_code;

    // header checksum, verified by real hardware (and by the
    // cartridge loader tests)
    let mut checksum: u8 = 0;
    for index in 0x0134..=0x014c {
        checksum = checksum.wrapping_sub(data[index]).wrapping_sub(1);
    }
    data[0x014d] = checksum;

    // tags every bank with its index for banking verification
    for bank in 0..banks {
        data[bank * 0x4000 + 0x2001] = bank as u8;
    }

    data
}

/// Builds a plain 32 KiB (no MBC) cartridge image and applies the
/// provided byte patches, typically machine code at the 0x0100
/// entrypoint.
pub fn rom_with(patches: &[(u16, &[u8])]) -> Vec<u8> {
    let mut data = build_rom_banked(0x00, 0x00, 0x00, b"TEST");
    for (addr, bytes) in patches {
        let addr = *addr as usize;
        data[addr..addr + bytes.len()].copy_from_slice(bytes);
    }
    // the patches invalidate the original checksum
    let mut checksum: u8 = 0;
    for index in 0x0134..=0x014c {
        checksum = checksum.wrapping_sub(data[index]).wrapping_sub(1);
    }
    data[0x014d] = checksum;
    data
}

/// Creates a booted machine with the provided cartridge image
/// loaded, ready to be clocked.
pub fn build_game_boy(data: &[u8]) -> GameBoy {
    let mut game_boy = GameBoy::new();
    game_boy.boot();
    game_boy.load_rom(data, None).unwrap();
    game_boy
}

#[cfg(test)]
mod tests {
    use crate::rom::Cartridge;

    use super::{build_rom_banked, rom_with};

    #[test]
    fn test_build_rom_banked() {
        let data = build_rom_banked(0x01, 0x02, 0x00, b"FIXTURE");
        assert_eq!(data.len(), 8 * 0x4000);

        let rom = Cartridge::from_data(&data).unwrap();
        assert_eq!(rom.title(), "FIXTURE");
        assert!(rom.valid_checksum());
    }

    #[test]
    fn test_rom_with_patch() {
        let data = rom_with(&[(0x0100, &[0x18, 0xfe])]);
        assert_eq!(data.len(), 0x8000);
        assert_eq!(data[0x0100], 0x18);
        assert_eq!(data[0x0101], 0xfe);

        let rom = Cartridge::from_data(&data).unwrap();
        assert!(rom.valid_checksum());
    }
}
