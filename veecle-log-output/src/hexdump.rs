//! Hex and ASCII rendering of raw record data.
//!
//! Every line starts on a new line indented by the header length of the record, followed by 16 hex slots and
//! the same 16 bytes as ASCII:
//!
//! ```text
//! [00:00:01.000,000] <inf> app: frame
//!                               00 01 02 03 04 05 06 07  08 09 0a 0b 0c 0d 0e 0f |........ ........
//!                               48 65 6c 6c 6f                                   |Hello
//! ```

use core::fmt;

use crate::FormatFlags;
use crate::buffer::print;
use crate::prefix::newline;

/// Number of bytes rendered per line.
pub const BYTES_PER_LINE: usize = 16;

/// Renders `data` as hexdump lines indented by `margin` spaces.
///
/// Each line is preceded by the newline selected by `flags`; nothing is rendered for empty `data`.
pub fn render<W>(out: &mut W, data: &[u8], margin: usize, flags: FormatFlags)
where
    W: fmt::Write + ?Sized,
{
    for chunk in data.chunks(BYTES_PER_LINE) {
        line(out, chunk, margin, flags);
    }
}

/// Renders a single line of up to [`BYTES_PER_LINE`] bytes.
pub fn line<W>(out: &mut W, chunk: &[u8], margin: usize, flags: FormatFlags)
where
    W: fmt::Write + ?Sized,
{
    debug_assert!(chunk.len() <= BYTES_PER_LINE);

    newline(out, flags);

    print(out, format_args!("{:margin$}", ""));

    for slot in 0..BYTES_PER_LINE {
        if slot > 0 && slot % 8 == 0 {
            print(out, format_args!(" "));
        }

        match chunk.get(slot) {
            Some(byte) => print(out, format_args!("{byte:02x} ")),
            None => print(out, format_args!("   ")),
        };
    }

    print(out, format_args!("|"));

    for slot in 0..BYTES_PER_LINE {
        if slot > 0 && slot % 8 == 0 {
            print(out, format_args!(" "));
        }

        let character = match chunk.get(slot) {
            Some(&byte) if is_printable(byte) => char::from(byte),
            Some(_) => '.',
            None => ' ',
        };
        print(out, format_args!("{character}"));
    }
}

/// Matches the C locale `isprint`.
fn is_printable(byte: u8) -> bool {
    byte.is_ascii_graphic() || byte == b' '
}

#[cfg(test)]
mod tests {
    use std::format;
    use std::string::String;
    use std::vec::Vec;

    use super::{BYTES_PER_LINE, line, render};
    use crate::FormatFlags;
    use pretty_assertions::assert_eq;

    fn dump(data: &[u8], margin: usize, flags: FormatFlags) -> String {
        let mut out = String::new();
        render(&mut out, data, margin, flags);
        out
    }

    #[test]
    fn full_and_partial_lines() {
        let data: Vec<u8> = (0x40..0x55).collect();

        let out = dump(&data, 2, FormatFlags::CRLF_LFONLY);

        assert_eq!(
            out,
            format!(
                "\n  40 41 42 43 44 45 46 47  48 49 4a 4b 4c 4d 4e 4f |@ABCDEFG HIJKLMNO\
                 \n  50 51 52 53 54 {:34}|PQRST{:12}",
                "", ""
            )
        );
    }

    #[test]
    fn non_printable_bytes() {
        let mut out = String::new();

        line(&mut out, b"a\x00 \x7f\xff~", 0, FormatFlags::CRLF_NONE);

        assert_eq!(out, format!("61 00 20 7f ff 7e {:31}|a. ..~{:11}", "", ""));
    }

    #[test]
    fn line_count() {
        for length in 0..=64usize {
            let data: Vec<u8> = (0..length).map(|byte| byte as u8).collect();

            let out = dump(&data, 0, FormatFlags::CRLF_LFONLY);

            assert_eq!(
                out.matches('\n').count(),
                length.div_ceil(BYTES_PER_LINE),
                "length {length}"
            );
        }
    }

    #[test]
    fn every_byte_once_in_its_slot() {
        let data: Vec<u8> = (0..=255).collect();

        let out = dump(&data, 3, FormatFlags::CRLF_LFONLY);

        let lines: Vec<&str> = out.split('\n').skip(1).collect();
        assert_eq!(lines.len(), 16);
        for (index, line) in lines.iter().enumerate() {
            let (hex, ascii) = line.split_once('|').unwrap();
            assert!(hex.starts_with("   "));

            let hex: Vec<u8> = hex
                .split_whitespace()
                .map(|byte| u8::from_str_radix(byte, 16).unwrap())
                .collect();
            let expected: Vec<u8> = (index * 16..index * 16 + 16).map(|byte| byte as u8).collect();
            assert_eq!(hex, expected);

            let ascii: Vec<char> = ascii.chars().collect();
            assert_eq!(ascii.len(), 17);
            for (slot, byte) in expected.iter().enumerate() {
                // Skip the separator column after the eighth slot.
                let column = if slot < 8 { slot } else { slot + 1 };
                let expected = if byte.is_ascii_graphic() || *byte == b' ' {
                    char::from(*byte)
                } else {
                    '.'
                };
                assert_eq!(ascii[column], expected, "byte {byte:#04x}");
            }
        }
    }
}
