use crate::macros::bit_fields;

// Representation:
// Byte-0: Y-position, Byte-1: X-posiiton, Byte-2: Tile-index
// Byte-3: See OamAttrs.
#[derive(Default, Debug, Clone, Copy, bincode::Encode, bincode::Decode)]
pub(crate) struct OamEntry {
    /// Object vertical position on screen + 16.
    pub(crate) ypos: u8,
    /// Object horizontal position on screen + 8.
    pub(crate) xpos: u8,
    /// Tile ID
    pub(crate) tile_id: u8,
    /// Object flags and attributes
    pub(crate) attrs: OamAttrs,
}

bit_fields! {
    /// OAM attribute. Can be used as a generic tile attribute.
    #[derive(Debug, bincode::Encode, bincode::Decode)]
    pub(crate) struct OamAttrs<u8> {
        cgb_palette: 3,
        bank: 1,
        dmg_palette:1,
        xflip:1,
        yflip:1,
        bg_priority:1,
    }
}

bit_fields! {
    /// In CGB mode VRAM Bank-1 stores a seperate 32x32 bytes attribute map,
    /// where, each byte stores attributes for the corresponding tile-number
    /// map entry present in VRAM Bank 0.
    ///
    /// BG map attributes, for CGB mode only.
    pub(crate) struct BgMapAttr<u8> {
        palette: 3,
        bank: 1,
        _0: 1,
        xflip: 1,
        yflip: 1,
        priority: 1,
    }
}

impl OamEntry {
    pub(crate) fn from_array(a: [u8; 4]) -> Self {
        Self {
            ypos: a[0],
            xpos: a[1],
            tile_id: a[2],
            attrs: OamAttrs::new(a[3]),
        }
    }

    /// Reads the 4-byte entry at `idx` out of raw OAM bytes.
    pub(crate) fn from_oam(oam: &[u8], idx: usize) -> Self {
        let d = &oam[(idx * 4)..(idx * 4 + 4)];
        Self::from_array([d[0], d[1], d[2], d[3]])
    }

    /// Whether this object covers scan-line `ly`, given the current object
    /// size mode (8x8 or, with `tall` set, 8x16).
    ///
    /// `ypos` stores the object's top position on screen plus 16, so the
    /// comparison below works entirely in that offset space rather than
    /// subtracting 16 and risking an underflow for objects parked above
    /// the visible screen.
    pub(crate) fn is_on_scanline(&self, ly: u8, tall: bool) -> bool {
        let height = if tall { 16 } else { 8 };
        self.ypos <= ly + 16 && ly + 16 < self.ypos + height
    }

    /// Whether this 8-pixel-wide object covers screen column `x`. `xpos`
    /// stores the object's left edge plus 8, the same offset trick as
    /// `is_on_scanline` uses for the vertical axis.
    pub(crate) fn covers_column(&self, x: u8) -> bool {
        self.xpos <= x + 8 && x + 8 < self.xpos + 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(ypos: u8, xpos: u8) -> OamEntry {
        OamEntry::from_array([ypos, xpos, 0, 0])
    }

    #[test]
    fn short_object_covers_only_its_own_eight_lines() {
        let obj = entry(20, 0); // top of object is at screen row 4
        assert!(!obj.is_on_scanline(3, false));
        assert!(obj.is_on_scanline(4, false));
        assert!(obj.is_on_scanline(11, false));
        assert!(!obj.is_on_scanline(12, false));
    }

    #[test]
    fn tall_object_covers_sixteen_lines() {
        let obj = entry(20, 0);
        assert!(obj.is_on_scanline(4, true));
        assert!(obj.is_on_scanline(19, true));
        assert!(!obj.is_on_scanline(20, true));
    }

    #[test]
    fn covers_column_matches_eight_pixel_width() {
        let obj = entry(0, 16); // left edge at screen column 8
        assert!(!obj.covers_column(7));
        assert!(obj.covers_column(8));
        assert!(obj.covers_column(15));
        assert!(!obj.covers_column(16));
    }

    #[test]
    fn from_oam_reads_consecutive_four_byte_entries() {
        let oam = [0u8, 0, 0, 0, 64, 80, 5, 0b0010_0000];
        let second = OamEntry::from_oam(&oam, 1);
        assert_eq!(second.ypos, 64);
        assert_eq!(second.xpos, 80);
        assert_eq!(second.tile_id, 5);
        assert_eq!(second.attrs.xflip, 1);
    }
}
