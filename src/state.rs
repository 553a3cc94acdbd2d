//! Engine state snapshot support.
//!
//! Every clocked component implements [`StateComponent`], a simple
//! binary (little-endian) dump and restore of its internal state.
//! The [`GameBoy`](crate::gb::GameBoy) level functions aggregate the
//! component blocks into a single length-prefixed container so that
//! a complete machine can be captured and resumed deterministically.

use std::io::Cursor;

use dotmatrix_common::{
    data::{read_bytes, read_u32, read_u8, write_bytes, write_u32, write_u8},
    error::Error,
};

use crate::gb::GameBoy;

/// Magic string present at the head of every state snapshot.
pub const STATE_MAGIC: &[u8; 4] = b"DMXS";

/// Current version of the snapshot container layout.
pub const STATE_VERSION: u8 = 1;

/// Binary dump and restore of a component's internal state.
///
/// The format of each block is private to the component, the
/// only container level guarantee is that `set_state` accepts
/// what `state` produced for the same crate version.
pub trait StateComponent {
    fn state(&self) -> Result<Vec<u8>, Error>;
    fn set_state(&mut self, data: &[u8]) -> Result<(), Error>;
}

impl GameBoy {
    /// Captures the complete machine state into a single byte
    /// buffer, component blocks are stored length prefixed in
    /// a fixed order.
    pub fn save_state(&self) -> Result<Vec<u8>, Error> {
        let mut cursor = Cursor::new(vec![]);
        write_bytes(&mut cursor, STATE_MAGIC)?;
        write_u8(&mut cursor, STATE_VERSION)?;

        let blocks = [
            self.cpu_i().state()?,
            self.mmu_i().state()?,
            self.timer_i().state()?,
            self.ppu_i().state()?,
            self.apu_i().state()?,
            self.serial_i().state()?,
            self.pad_i().state()?,
            self.rom_i().state()?,
        ];
        for block in blocks.iter() {
            write_u32(&mut cursor, block.len() as u32)?;
            write_bytes(&mut cursor, block)?;
        }

        Ok(cursor.into_inner())
    }

    /// Restores a machine state previously captured with
    /// [`GameBoy::save_state`]. The loaded cartridge is expected
    /// to be the same one that was loaded at capture time.
    pub fn load_state(&mut self, data: &[u8]) -> Result<(), Error> {
        let mut cursor = Cursor::new(data);

        let magic = read_bytes(&mut cursor, 4)?;
        if magic.as_slice() != &STATE_MAGIC[..] {
            return Err(Error::InvalidData);
        }
        let version = read_u8(&mut cursor)?;
        if version != STATE_VERSION {
            return Err(Error::InvalidParameter(format!(
                "Unsupported state version {}",
                version
            )));
        }

        let mut blocks = vec![];
        for _ in 0..8 {
            let size = read_u32(&mut cursor)? as usize;
            blocks.push(read_bytes(&mut cursor, size)?);
        }

        self.cpu().set_state(&blocks[0])?;
        self.mmu().set_state(&blocks[1])?;
        self.timer().set_state(&blocks[2])?;
        self.ppu().set_state(&blocks[3])?;
        self.apu().set_state(&blocks[4])?;
        self.serial().set_state(&blocks[5])?;
        self.pad().set_state(&blocks[6])?;
        self.rom().set_state(&blocks[7])?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test::{build_game_boy, rom_with};

    #[test]
    fn test_state_round_trip_frames() {
        // tight loop ROM, deterministic frames
        let data = rom_with(&[(0x0100, &[0xc3, 0x50, 0x01]), (0x0150, &[0x18, 0xfe])]);

        let mut first = build_game_boy(&data);
        for _ in 0..3 {
            first.run_frame().unwrap();
        }

        let state = first.save_state().unwrap();

        let mut second = build_game_boy(&data);
        second.load_state(&state).unwrap();

        for _ in 0..4 {
            let frame_a = first.run_frame().unwrap().to_vec();
            let frame_b = second.run_frame().unwrap().to_vec();
            assert_eq!(frame_a, frame_b);
        }
    }

    #[test]
    fn test_state_rejects_garbage() {
        let data = rom_with(&[(0x0100, &[0x18, 0xfe])]);
        let mut gb = build_game_boy(&data);
        assert!(gb.load_state(b"XXXX\x01").is_err());
    }
}
