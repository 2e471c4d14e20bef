//! The fixed-width bitmap font table.
//!
//! Each glyph is 7 column bytes spanning one page, indexed directly by character code. Codes
//! 0-127 cover ASCII (the 5x7 glyph centered in the 7 columns, giving a 1-column gap on either
//! side); codes 128 and up are supplemental block and icon glyphs, with the last entry (code
//! 256) a solid block. Unassigned codes render as blanks.

/// Width of every glyph in columns.
pub const GLYPH_WIDTH: u8 = 7;

/// Number of glyph codes the table holds.
pub const GLYPH_COUNT: usize = 257;

#[rustfmt::skip]
pub static FONT: [[u8; 7]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x00
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x01
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x02
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x03
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x04
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x05
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x06
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x07
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x08
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x09
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0A
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0B
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0C
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x0F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x10
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x11
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x12
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x13
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x14
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x15
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x16
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x17
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x18
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x19
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1A
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1B
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1C
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x1F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x00, 0x5F, 0x00, 0x00, 0x00], // '!'
    [0x00, 0x00, 0x07, 0x00, 0x07, 0x00, 0x00], // '"'
    [0x00, 0x14, 0x7F, 0x14, 0x7F, 0x14, 0x00], // '#'
    [0x00, 0x24, 0x2A, 0x7F, 0x2A, 0x12, 0x00], // '$'
    [0x00, 0x23, 0x13, 0x08, 0x64, 0x62, 0x00], // '%'
    [0x00, 0x36, 0x49, 0x55, 0x22, 0x50, 0x00], // '&'
    [0x00, 0x00, 0x05, 0x03, 0x00, 0x00, 0x00], // '''
    [0x00, 0x00, 0x1C, 0x22, 0x41, 0x00, 0x00], // '('
    [0x00, 0x00, 0x41, 0x22, 0x1C, 0x00, 0x00], // ')'
    [0x00, 0x14, 0x08, 0x3E, 0x08, 0x14, 0x00], // '*'
    [0x00, 0x08, 0x08, 0x3E, 0x08, 0x08, 0x00], // '+'
    [0x00, 0x00, 0x50, 0x30, 0x00, 0x00, 0x00], // ','
    [0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00], // '-'
    [0x00, 0x00, 0x60, 0x60, 0x00, 0x00, 0x00], // '.'
    [0x00, 0x20, 0x10, 0x08, 0x04, 0x02, 0x00], // '/'
    [0x00, 0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00], // '0'
    [0x00, 0x00, 0x42, 0x7F, 0x40, 0x00, 0x00], // '1'
    [0x00, 0x42, 0x61, 0x51, 0x49, 0x46, 0x00], // '2'
    [0x00, 0x21, 0x41, 0x45, 0x4B, 0x31, 0x00], // '3'
    [0x00, 0x18, 0x14, 0x12, 0x7F, 0x10, 0x00], // '4'
    [0x00, 0x27, 0x45, 0x45, 0x45, 0x39, 0x00], // '5'
    [0x00, 0x3C, 0x4A, 0x49, 0x49, 0x30, 0x00], // '6'
    [0x00, 0x01, 0x71, 0x09, 0x05, 0x03, 0x00], // '7'
    [0x00, 0x36, 0x49, 0x49, 0x49, 0x36, 0x00], // '8'
    [0x00, 0x06, 0x49, 0x49, 0x29, 0x1E, 0x00], // '9'
    [0x00, 0x00, 0x36, 0x36, 0x00, 0x00, 0x00], // ':'
    [0x00, 0x00, 0x56, 0x36, 0x00, 0x00, 0x00], // ';'
    [0x00, 0x08, 0x14, 0x22, 0x41, 0x00, 0x00], // '<'
    [0x00, 0x14, 0x14, 0x14, 0x14, 0x14, 0x00], // '='
    [0x00, 0x00, 0x41, 0x22, 0x14, 0x08, 0x00], // '>'
    [0x00, 0x02, 0x01, 0x51, 0x09, 0x06, 0x00], // '?'
    [0x00, 0x32, 0x49, 0x79, 0x41, 0x3E, 0x00], // '@'
    [0x00, 0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00], // 'A'
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x36, 0x00], // 'B'
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x22, 0x00], // 'C'
    [0x00, 0x7F, 0x41, 0x41, 0x22, 0x1C, 0x00], // 'D'
    [0x00, 0x7F, 0x49, 0x49, 0x49, 0x41, 0x00], // 'E'
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x01, 0x00], // 'F'
    [0x00, 0x3E, 0x41, 0x49, 0x49, 0x7A, 0x00], // 'G'
    [0x00, 0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00], // 'H'
    [0x00, 0x00, 0x41, 0x7F, 0x41, 0x00, 0x00], // 'I'
    [0x00, 0x20, 0x40, 0x41, 0x3F, 0x01, 0x00], // 'J'
    [0x00, 0x7F, 0x08, 0x14, 0x22, 0x41, 0x00], // 'K'
    [0x00, 0x7F, 0x40, 0x40, 0x40, 0x40, 0x00], // 'L'
    [0x00, 0x7F, 0x02, 0x0C, 0x02, 0x7F, 0x00], // 'M'
    [0x00, 0x7F, 0x04, 0x08, 0x10, 0x7F, 0x00], // 'N'
    [0x00, 0x3E, 0x41, 0x41, 0x41, 0x3E, 0x00], // 'O'
    [0x00, 0x7F, 0x09, 0x09, 0x09, 0x06, 0x00], // 'P'
    [0x00, 0x3E, 0x41, 0x51, 0x21, 0x5E, 0x00], // 'Q'
    [0x00, 0x7F, 0x09, 0x19, 0x29, 0x46, 0x00], // 'R'
    [0x00, 0x46, 0x49, 0x49, 0x49, 0x31, 0x00], // 'S'
    [0x00, 0x01, 0x01, 0x7F, 0x01, 0x01, 0x00], // 'T'
    [0x00, 0x3F, 0x40, 0x40, 0x40, 0x3F, 0x00], // 'U'
    [0x00, 0x1F, 0x20, 0x40, 0x20, 0x1F, 0x00], // 'V'
    [0x00, 0x3F, 0x40, 0x38, 0x40, 0x3F, 0x00], // 'W'
    [0x00, 0x63, 0x14, 0x08, 0x14, 0x63, 0x00], // 'X'
    [0x00, 0x07, 0x08, 0x70, 0x08, 0x07, 0x00], // 'Y'
    [0x00, 0x61, 0x51, 0x49, 0x45, 0x43, 0x00], // 'Z'
    [0x00, 0x00, 0x7F, 0x41, 0x41, 0x00, 0x00], // '['
    [0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00], // '\\'
    [0x00, 0x00, 0x41, 0x41, 0x7F, 0x00, 0x00], // ']'
    [0x00, 0x04, 0x02, 0x01, 0x02, 0x04, 0x00], // '^'
    [0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00], // '_'
    [0x00, 0x00, 0x01, 0x02, 0x04, 0x00, 0x00], // '`'
    [0x00, 0x20, 0x54, 0x54, 0x54, 0x78, 0x00], // 'a'
    [0x00, 0x7F, 0x48, 0x44, 0x44, 0x38, 0x00], // 'b'
    [0x00, 0x38, 0x44, 0x44, 0x44, 0x20, 0x00], // 'c'
    [0x00, 0x38, 0x44, 0x44, 0x48, 0x7F, 0x00], // 'd'
    [0x00, 0x38, 0x54, 0x54, 0x54, 0x18, 0x00], // 'e'
    [0x00, 0x08, 0x7E, 0x09, 0x01, 0x02, 0x00], // 'f'
    [0x00, 0x0C, 0x52, 0x52, 0x52, 0x3E, 0x00], // 'g'
    [0x00, 0x7F, 0x08, 0x04, 0x04, 0x78, 0x00], // 'h'
    [0x00, 0x00, 0x44, 0x7D, 0x40, 0x00, 0x00], // 'i'
    [0x00, 0x20, 0x40, 0x44, 0x3D, 0x00, 0x00], // 'j'
    [0x00, 0x7F, 0x10, 0x28, 0x44, 0x00, 0x00], // 'k'
    [0x00, 0x00, 0x41, 0x7F, 0x40, 0x00, 0x00], // 'l'
    [0x00, 0x7C, 0x04, 0x18, 0x04, 0x78, 0x00], // 'm'
    [0x00, 0x7C, 0x08, 0x04, 0x04, 0x78, 0x00], // 'n'
    [0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00], // 'o'
    [0x00, 0x7C, 0x14, 0x14, 0x14, 0x08, 0x00], // 'p'
    [0x00, 0x08, 0x14, 0x14, 0x18, 0x7C, 0x00], // 'q'
    [0x00, 0x7C, 0x08, 0x04, 0x04, 0x08, 0x00], // 'r'
    [0x00, 0x48, 0x54, 0x54, 0x54, 0x20, 0x00], // 's'
    [0x00, 0x04, 0x3F, 0x44, 0x40, 0x20, 0x00], // 't'
    [0x00, 0x3C, 0x40, 0x40, 0x20, 0x7C, 0x00], // 'u'
    [0x00, 0x1C, 0x20, 0x40, 0x20, 0x1C, 0x00], // 'v'
    [0x00, 0x3C, 0x40, 0x30, 0x40, 0x3C, 0x00], // 'w'
    [0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00], // 'x'
    [0x00, 0x0C, 0x50, 0x50, 0x50, 0x3C, 0x00], // 'y'
    [0x00, 0x44, 0x64, 0x54, 0x4C, 0x44, 0x00], // 'z'
    [0x00, 0x00, 0x08, 0x36, 0x41, 0x00, 0x00], // '{'
    [0x00, 0x00, 0x00, 0x7F, 0x00, 0x00, 0x00], // '|'
    [0x00, 0x00, 0x41, 0x36, 0x08, 0x00, 0x00], // '}'
    [0x00, 0x04, 0x02, 0x04, 0x08, 0x04, 0x00], // '~'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x7F
    [0x00, 0x04, 0x02, 0x7F, 0x02, 0x04, 0x00], // 128 up arrow
    [0x00, 0x10, 0x20, 0x7F, 0x20, 0x10, 0x00], // 129 down arrow
    [0x00, 0x08, 0x1C, 0x2A, 0x08, 0x08, 0x00], // 130 left arrow
    [0x00, 0x08, 0x08, 0x2A, 0x1C, 0x08, 0x00], // 131 right arrow
    [0x00, 0x00, 0x02, 0x05, 0x02, 0x00, 0x00], // 132 degree sign
    [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], // 133 full block
    [0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F], // 134 upper half block
    [0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0], // 135 lower half block
    [0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55], // 136 checker shade
    [0x7F, 0x41, 0x41, 0x41, 0x41, 0x41, 0x7F], // 137 outline box
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 138
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 139
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 140
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 141
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 142
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 143
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 144
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 145
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 146
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 147
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 148
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 149
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 150
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 151
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 152
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 153
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 154
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 155
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 156
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 157
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 158
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 159
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 160
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 161
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 162
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 163
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 164
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 165
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 166
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 167
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 168
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 169
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 170
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 171
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 172
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 173
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 174
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 175
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 176
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 177
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 178
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 179
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 180
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 181
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 182
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 183
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 184
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 185
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 186
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 187
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 188
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 189
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 190
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 191
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 192
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 193
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 194
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 195
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 196
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 197
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 198
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 199
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 200
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 201
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 202
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 203
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 204
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 205
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 206
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 207
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 208
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 209
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 210
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 211
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 212
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 213
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 214
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 215
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 216
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 217
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 218
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 219
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 220
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 221
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 222
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 223
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 224
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 225
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 226
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 227
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 228
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 229
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 230
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 231
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 232
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 233
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 234
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 235
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 236
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 237
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 238
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 239
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 240
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 241
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 242
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 243
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 244
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 245
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 246
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 247
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 248
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 249
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 250
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 251
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 252
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 253
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 254
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 255
    [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], // 256 full block
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_code() {
        assert_eq!(FONT.len(), GLYPH_COUNT);
        assert_eq!(FONT.len(), 257);
    }

    #[test]
    fn ascii_glyphs_leave_gap_columns() {
        // Centered 5x7 glyphs never touch the outermost columns, so adjacent characters don't
        // run together.
        for code in 32..=126usize {
            assert_eq!(FONT[code][0], 0x00, "code {}", code);
            assert_eq!(FONT[code][6], 0x00, "code {}", code);
        }
    }

    #[test]
    fn space_and_last_entry() {
        assert_eq!(FONT[b' ' as usize], [0x00; 7]);
        assert_eq!(FONT[256], [0xFF; 7]);
    }
}
