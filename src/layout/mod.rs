//! Keyboard layouts expressed as QWERTY key-position remappings.
//!
//! A layout is a fixed table of [`KeyPair`]s. Bytes with no entry pass
//! through unchanged in both directions, mirroring the `_` arm of the
//! generated match block.
//!
//! Only the unshifted layer is remapped. Uppercase letters and shifted
//! punctuation (`_ + { } : " < > ?`) are returned as-is, so `S` stays `S`
//! rather than becoming Dvorak `O`.

mod table;

pub use table::DVORAK_TABLE;

/// One physical key: the character QWERTY produces there and the character
/// the target layout produces there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    pub qwerty: char,
    pub dvorak: char,
}

impl KeyPair {
    pub const fn new(qwerty: char, dvorak: char) -> Self {
        Self { qwerty, dvorak }
    }

    /// Code points as `(qwerty, dvorak)`.
    pub fn codes(&self) -> (u32, u32) {
        (u32::from(self.qwerty), u32::from(self.dvorak))
    }
}

pub trait Layout {
    /// Translate a QWERTY key press into this layout's key press at the same
    /// position. A QWERTY `s` becomes a Dvorak `o`.
    fn from_qwerty(&self, qwerty_press: u8) -> u8;

    /// Inverse of [`Layout::from_qwerty`]. A Dvorak `e` becomes a QWERTY `d`.
    fn to_qwerty(&self, layout_press: u8) -> u8;

    /// Entries backing this layout, in emission order.
    fn table(&self) -> &'static [KeyPair];
}

pub struct Qwerty;

impl Layout for Qwerty {
    fn from_qwerty(&self, qwerty_press: u8) -> u8 {
        qwerty_press
    }

    fn to_qwerty(&self, layout_press: u8) -> u8 {
        layout_press
    }

    fn table(&self) -> &'static [KeyPair] {
        &[]
    }
}

/// Standard Dvorak (not Programmer Dvorak).
pub struct Dvorak;

impl Layout for Dvorak {
    fn from_qwerty(&self, qwerty_press: u8) -> u8 {
        DVORAK_TABLE
            .iter()
            .find(|p| p.qwerty as u32 == u32::from(qwerty_press))
            .map_or(qwerty_press, |p| p.dvorak as u8)
    }

    fn to_qwerty(&self, layout_press: u8) -> u8 {
        DVORAK_TABLE
            .iter()
            .find(|p| p.dvorak as u32 == u32::from(layout_press))
            .map_or(layout_press, |p| p.qwerty as u8)
    }

    fn table(&self) -> &'static [KeyPair] {
        &DVORAK_TABLE
    }
}
