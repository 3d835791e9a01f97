//! Packed 1bpp frame buffer
//!
//! Drawing goes to memory first; the whole buffer is then sent to the panel
//! in one transfer. Pixels are packed MSB first, eight per byte, in the
//! panel's native row order. A cleared bit is black ([`BinaryColor::On`]),
//! a set bit is white ([`BinaryColor::Off`]).

use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};

/// How drawing coordinates map onto the panel's native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// Drawing coordinates are native coordinates
    #[default]
    Rotate0,
    /// Landscape panel mounted in portrait: `native = (y, native_height - 1 - x)`
    Rotate90,
}

/// In-memory frame for a monochrome panel
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    buffer: Vec<u8>,
    native_width: u32,
    native_height: u32,
    rotation: Rotation,
}

impl FrameBuffer {
    /// Create a white frame for a panel of the given native size
    pub fn new(native_width: u32, native_height: u32, rotation: Rotation) -> Self {
        let width_bytes = native_width.div_ceil(8) as usize;
        Self {
            buffer: vec![fill_byte(BinaryColor::Off); width_bytes * native_height as usize],
            native_width,
            native_height,
            rotation,
        }
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: BinaryColor) {
        self.buffer.fill(fill_byte(color));
    }

    /// Whether every pixel currently has `color`
    pub fn is_filled_with(&self, color: BinaryColor) -> bool {
        let byte = fill_byte(color);
        self.buffer.iter().all(|b| *b == byte)
    }

    /// Set a pixel in drawing coordinates; out-of-range pixels are dropped
    pub fn set_pixel(&mut self, x: u32, y: u32, color: BinaryColor) {
        let Some((byte_index, bit_index)) = self.locate(x, y) else {
            return;
        };
        let Some(byte) = self.buffer.get_mut(byte_index) else {
            return;
        };
        if color == BinaryColor::On {
            *byte &= !(1 << bit_index);
        } else {
            *byte |= 1 << bit_index;
        }
    }

    /// Read a pixel in drawing coordinates
    pub fn pixel(&self, x: u32, y: u32) -> Option<BinaryColor> {
        let (byte_index, bit_index) = self.locate(x, y)?;
        let byte = self.buffer.get(byte_index)?;
        if byte & (1 << bit_index) == 0 {
            Some(BinaryColor::On)
        } else {
            Some(BinaryColor::Off)
        }
    }

    /// Raw packed bytes, native orientation, ready for the panel
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Bytes per native row
    pub fn width_bytes(&self) -> usize {
        self.native_width.div_ceil(8) as usize
    }

    fn locate(&self, x: u32, y: u32) -> Option<(usize, u32)> {
        let size = self.size();
        if x >= size.width || y >= size.height {
            return None;
        }
        let (native_x, native_y) = match self.rotation {
            Rotation::Rotate0 => (x, y),
            Rotation::Rotate90 => (y, self.native_height - 1 - x),
        };
        let byte_index = native_y as usize * self.width_bytes() + (native_x / 8) as usize;
        Some((byte_index, 7 - (native_x % 8)))
    }
}

fn fill_byte(color: BinaryColor) -> u8 {
    match color {
        BinaryColor::On => 0x00,
        BinaryColor::Off => 0xFF,
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as u32, point.y as u32, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        match self.rotation {
            Rotation::Rotate0 => Size::new(self.native_width, self.native_height),
            Rotation::Rotate90 => Size::new(self.native_height, self.native_width),
        }
    }
}
