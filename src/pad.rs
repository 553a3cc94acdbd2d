//! Gamepad (joypad) functions and structures.

use std::io::Cursor;

use dotmatrix_common::{
    data::{read_u8, write_u8},
    error::Error,
};

use crate::{consts::P1_ADDR, mmu::BusComponent, state::StateComponent, warnln};

pub struct Pad {
    down: bool,
    up: bool,
    left: bool,
    right: bool,
    start: bool,
    select: bool,
    b: bool,
    a: bool,

    /// Raw row-select bits (5–4) as last written to the P1 register,
    /// kept in hardware polarity (0 = row selected).
    selection: u8,

    int_pad: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PadKey {
    Up,
    Down,
    Left,
    Right,
    Start,
    Select,
    A,
    B,
}

impl PadKey {
    pub fn is_direction(&self) -> bool {
        matches!(self, PadKey::Up | PadKey::Down | PadKey::Left | PadKey::Right)
    }
}

impl Pad {
    pub fn new() -> Self {
        Self {
            down: false,
            up: false,
            left: false,
            right: false,
            start: false,
            select: false,
            b: false,
            a: false,
            selection: 0x30,
            int_pad: false,
        }
    }

    pub fn reset(&mut self) {
        self.down = false;
        self.up = false;
        self.left = false;
        self.right = false;
        self.start = false;
        self.select = false;
        self.b = false;
        self.a = false;
        self.selection = 0x30;
        self.int_pad = false;
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            P1_ADDR => {
                // starts from an all-released nibble and clears the bits
                // of the pressed buttons on every selected row, buttons
                // read as 0 when pressed (active low matrix)
                let mut row = 0x0fu8;
                if self.directions_selected() {
                    row &= self.directions_row();
                }
                if self.actions_selected() {
                    row &= self.actions_row();
                }
                0xc0 | self.selection | row
            }
            addr => {
                warnln!("Reading from unknown Pad location 0x{:04x}", addr);
                #[allow(unreachable_code)]
                0xff
            }
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            P1_ADDR => self.selection = value & 0x30,
            addr => warnln!("Writing to unknown Pad location 0x{:04x}", addr),
        }
    }

    pub fn key_press(&mut self, key: PadKey) {
        match key {
            PadKey::Up => self.up = true,
            PadKey::Down => self.down = true,
            PadKey::Left => self.left = true,
            PadKey::Right => self.right = true,
            PadKey::Start => self.start = true,
            PadKey::Select => self.select = true,
            PadKey::A => self.a = true,
            PadKey::B => self.b = true,
        }

        // a press that lands on a row that is currently selected
        // produces a falling edge on the P1 low nibble, which is
        // the joypad interrupt condition
        let selected = if key.is_direction() {
            self.directions_selected()
        } else {
            self.actions_selected()
        };
        if selected {
            self.int_pad = true;
        }
    }

    pub fn key_lift(&mut self, key: PadKey) {
        match key {
            PadKey::Up => self.up = false,
            PadKey::Down => self.down = false,
            PadKey::Left => self.left = false,
            PadKey::Right => self.right = false,
            PadKey::Start => self.start = false,
            PadKey::Select => self.select = false,
            PadKey::A => self.a = false,
            PadKey::B => self.b = false,
        }
    }

    #[inline(always)]
    pub fn int_pad(&self) -> bool {
        self.int_pad
    }

    #[inline(always)]
    pub fn set_int_pad(&mut self, value: bool) {
        self.int_pad = value;
    }

    #[inline(always)]
    pub fn ack_pad(&mut self) {
        self.set_int_pad(false);
    }

    #[inline(always)]
    fn directions_selected(&self) -> bool {
        self.selection & 0x10 == 0x00
    }

    #[inline(always)]
    fn actions_selected(&self) -> bool {
        self.selection & 0x20 == 0x00
    }

    fn directions_row(&self) -> u8 {
        (if self.right { 0x00 } else { 0x01 })
            | (if self.left { 0x00 } else { 0x02 })
            | (if self.up { 0x00 } else { 0x04 })
            | (if self.down { 0x00 } else { 0x08 })
    }

    fn actions_row(&self) -> u8 {
        (if self.a { 0x00 } else { 0x01 })
            | (if self.b { 0x00 } else { 0x02 })
            | (if self.select { 0x00 } else { 0x04 })
            | (if self.start { 0x00 } else { 0x08 })
    }
}

impl BusComponent for Pad {
    fn read(&self, addr: u16) -> u8 {
        self.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.write(addr, value);
    }
}

impl StateComponent for Pad {
    fn state(&self) -> Result<Vec<u8>, Error> {
        let mut cursor = Cursor::new(vec![]);
        write_u8(&mut cursor, self.selection)?;
        write_u8(&mut cursor, self.int_pad as u8)?;
        Ok(cursor.into_inner())
    }

    fn set_state(&mut self, data: &[u8]) -> Result<(), Error> {
        let mut cursor = Cursor::new(data);
        self.selection = read_u8(&mut cursor)? & 0x30;
        self.int_pad = read_u8(&mut cursor)? != 0;
        Ok(())
    }
}

impl Default for Pad {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::consts::P1_ADDR;

    use super::{Pad, PadKey};

    #[test]
    fn test_no_row_selected() {
        let mut pad = Pad::new();
        pad.write(P1_ADDR, 0x30);
        pad.key_press(PadKey::A);
        pad.key_press(PadKey::Down);
        assert_eq!(pad.read(P1_ADDR), 0xff);
    }

    #[test]
    fn test_action_row() {
        let mut pad = Pad::new();
        pad.write(P1_ADDR, 0x10);
        pad.key_press(PadKey::A);
        pad.key_press(PadKey::Start);
        assert_eq!(pad.read(P1_ADDR), 0xc0 | 0x10 | 0x06);
    }

    #[test]
    fn test_direction_row() {
        let mut pad = Pad::new();
        pad.write(P1_ADDR, 0x20);
        pad.key_press(PadKey::Left);
        assert_eq!(pad.read(P1_ADDR), 0xc0 | 0x20 | 0x0d);
        pad.key_lift(PadKey::Left);
        assert_eq!(pad.read(P1_ADDR), 0xc0 | 0x20 | 0x0f);
    }

    #[test]
    fn test_press_interrupt() {
        let mut pad = Pad::new();
        pad.write(P1_ADDR, 0x20);
        pad.key_press(PadKey::A);
        assert!(!pad.int_pad());

        pad.key_press(PadKey::Up);
        assert!(pad.int_pad());

        pad.ack_pad();
        pad.write(P1_ADDR, 0x10);
        pad.key_press(PadKey::B);
        assert!(pad.int_pad());
    }
}
