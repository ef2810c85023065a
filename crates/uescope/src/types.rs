//! Fixed-size engine value structs returned by copy.

use crate::memory::MemValue;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl MemValue for Vector2 {
    const SIZE: usize = 0x8;
    const ALIGN: usize = 4;

    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            x: f32::from_bytes(bytes),
            y: f32::from_bytes(&bytes[4..]),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl MemValue for Vector3 {
    const SIZE: usize = 0xC;
    const ALIGN: usize = 4;

    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            x: f32::from_bytes(bytes),
            y: f32::from_bytes(&bytes[4..]),
            z: f32::from_bytes(&bytes[8..]),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl MemValue for Vector4 {
    const SIZE: usize = 0x10;
    const ALIGN: usize = 4;

    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            x: f32::from_bytes(bytes),
            y: f32::from_bytes(&bytes[4..]),
            z: f32::from_bytes(&bytes[8..]),
            w: f32::from_bytes(&bytes[12..]),
        }
    }
}

/// Packed 8-bit color. The engine stores components in B, G, R, A order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Color {
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl MemValue for Color {
    const SIZE: usize = 0x4;
    const ALIGN: usize = 1;

    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            b: bytes[0],
            g: bytes[1],
            r: bytes[2],
            a: bytes[3],
        }
    }
}

/// Floating-point color, components in R, G, B, A order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl MemValue for LinearColor {
    const SIZE: usize = 0x10;
    const ALIGN: usize = 4;

    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            r: f32::from_bytes(bytes),
            g: f32::from_bytes(&bytes[4..]),
            b: f32::from_bytes(&bytes[8..]),
            a: f32::from_bytes(&bytes[12..]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector3_decode() {
        let mut bytes = Vec::new();
        for v in [1.0f32, -2.5, 0.25] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        let v = Vector3::from_bytes(&bytes);
        assert_eq!(v, Vector3 { x: 1.0, y: -2.5, z: 0.25 });
    }

    #[test]
    fn test_color_component_order() {
        // Memory order is B, G, R, A.
        let c = Color::from_bytes(&[0x10, 0x20, 0x30, 0x40]);
        assert_eq!(c.r, 0x30);
        assert_eq!(c.g, 0x20);
        assert_eq!(c.b, 0x10);
        assert_eq!(c.a, 0x40);
        assert_eq!(c.hex(), "#30201040");
    }
}
