//! Command decoding for the Lychnos ASCII protocol.
//!
//! [`decode`] turns one complete inbound message into a typed
//! [`Operation`]. It is a pure function over the message bytes:
//! framing is the transport's job, and index bounds checking belongs
//! to the pixel store.

/// Message terminator. Optional on input; at most one trailing
/// instance is stripped before parsing.
pub const TERMINATOR: u8 = b'.';

/// Longest message a well-formed command can occupy (a `_` command
/// with a full-width index and maximal color fields, plus the
/// terminator). Transports size their receive buffers from this.
pub const MAX_COMMAND_LEN: usize = 32;

/// One color cell value. No invariant beyond the `u8` range of each
/// channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// All channels off.
    pub const OFF: Self = Self { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A decoded command, ready to apply to the pixel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    /// Set every cell to one color and update the global brightness.
    SetAll { brightness: u8, color: Rgb },
    /// Set a single cell. The index is passed through unvalidated;
    /// the store decides whether it is in range.
    SetOne {
        index: i32,
        brightness: u8,
        color: Rgb,
    },
    /// Turn every cell off. Global brightness is left alone.
    ClearAll,
}

/// Reasons a message fails to decode. Carried to the diagnostic
/// collaborator; the message is dropped and no state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Nothing before the terminator.
    Empty,
    /// First byte is not a known command prefix.
    UnknownPrefix(u8),
    /// Comma-separated field count does not match the family.
    FieldCount { expected: u8, found: u8 },
}

/// Decode one complete message into an [`Operation`].
///
/// Field counts are exact: trailing garbage inside the last field is
/// absorbed by the permissive numeric parse, but a missing or extra
/// comma rejects the whole message before any state is touched.
pub fn decode(raw: &[u8]) -> Result<Operation, DecodeError> {
    let msg = strip_terminator(raw);
    let (&prefix, fields) = msg.split_first().ok_or(DecodeError::Empty)?;

    match prefix {
        b'*' => {
            let [brightness, r, g, b] = split_fields::<4>(fields)?;
            Ok(Operation::SetAll {
                brightness: brightness as u8,
                color: Rgb::new(r as u8, g as u8, b as u8),
            })
        }
        b'_' => {
            let [index, brightness, r, g, b] = split_fields::<5>(fields)?;
            Ok(Operation::SetOne {
                index,
                brightness: brightness as u8,
                color: Rgb::new(r as u8, g as u8, b as u8),
            })
        }
        // Clear takes no fields; trailing content is ignored.
        b'!' => Ok(Operation::ClearAll),
        other => Err(DecodeError::UnknownPrefix(other)),
    }
}

/// Strip exactly one trailing terminator, if present.
fn strip_terminator(raw: &[u8]) -> &[u8] {
    match raw.split_last() {
        Some((&TERMINATOR, rest)) => rest,
        _ => raw,
    }
}

/// Split on commas into exactly `F` fields and parse each one.
fn split_fields<const F: usize>(bytes: &[u8]) -> Result<[i32; F], DecodeError> {
    let mut values = [0i32; F];
    let mut found = 0usize;

    for field in bytes.split(|&b| b == b',') {
        if found < F {
            values[found] = parse_field(field);
        }
        found += 1;
    }

    if found != F {
        return Err(DecodeError::FieldCount {
            expected: F as u8,
            found: found as u8,
        });
    }
    Ok(values)
}

/// Parse a numeric field the way `atoi` would: skip leading ASCII
/// whitespace, take an optional sign, then the longest run of digits.
/// A field with no digits parses as 0; values beyond the `i32` range
/// saturate.
fn parse_field(field: &[u8]) -> i32 {
    let mut i = 0;
    while i < field.len() && field[i].is_ascii_whitespace() {
        i += 1;
    }

    let mut negative = false;
    if i < field.len() && (field[i] == b'+' || field[i] == b'-') {
        negative = field[i] == b'-';
        i += 1;
    }

    // Accumulate in i64; cap so the loop stays bounded on absurdly
    // long digit runs.
    const CAP: i64 = i32::MAX as i64 + 1;
    let mut value: i64 = 0;
    while i < field.len() && field[i].is_ascii_digit() {
        value = value * 10 + i64::from(field[i] - b'0');
        if value > CAP {
            value = CAP;
        }
        i += 1;
    }

    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_set_all() {
        let op = decode(b"*100,255,0,64.").unwrap();
        assert_eq!(
            op,
            Operation::SetAll {
                brightness: 100,
                color: Rgb::new(255, 0, 64),
            }
        );
    }

    #[test]
    fn test_decode_set_one() {
        let op = decode(b"_3,90,0,255,10.").unwrap();
        assert_eq!(
            op,
            Operation::SetOne {
                index: 3,
                brightness: 90,
                color: Rgb::new(0, 255, 10),
            }
        );
    }

    #[test]
    fn test_decode_clear() {
        assert_eq!(decode(b"!").unwrap(), Operation::ClearAll);
        assert_eq!(decode(b"!.").unwrap(), Operation::ClearAll);
    }

    #[test]
    fn test_clear_ignores_trailing_content() {
        assert_eq!(decode(b"!whatever,1,2.").unwrap(), Operation::ClearAll);
    }

    #[test]
    fn test_terminator_is_optional() {
        assert_eq!(decode(b"*100,255,0,0"), decode(b"*100,255,0,0."));
        assert_eq!(decode(b"_1,2,3,4,5"), decode(b"_1,2,3,4,5."));
    }

    #[test]
    fn test_only_one_terminator_stripped() {
        // The inner `.` stays in the last field; the numeric prefix
        // still parses.
        let op = decode(b"*10,1,2,3..").unwrap();
        assert_eq!(
            op,
            Operation::SetAll {
                brightness: 10,
                color: Rgb::new(1, 2, 3),
            }
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode(b""), Err(DecodeError::Empty));
        assert_eq!(decode(b"."), Err(DecodeError::Empty));
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(decode(b"x1,2,3,4."), Err(DecodeError::UnknownPrefix(b'x')));
    }

    #[test]
    fn test_set_all_field_count_mismatch() {
        assert_eq!(
            decode(b"*100,255,0."),
            Err(DecodeError::FieldCount {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            decode(b"*1,2,3,4,5."),
            Err(DecodeError::FieldCount {
                expected: 4,
                found: 5
            })
        );
        assert_eq!(
            decode(b"*"),
            Err(DecodeError::FieldCount {
                expected: 4,
                found: 1
            })
        );
    }

    #[test]
    fn test_set_one_field_count_mismatch() {
        assert_eq!(
            decode(b"_1,2,3,4."),
            Err(DecodeError::FieldCount {
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn test_garbage_fields_parse_as_zero() {
        let op = decode(b"*abc,,x255,255.").unwrap();
        assert_eq!(
            op,
            Operation::SetAll {
                brightness: 0,
                color: Rgb::new(0, 0, 255),
            }
        );
    }

    #[test]
    fn test_trailing_garbage_absorbed_into_last_field() {
        // Exactly three commas, so the command is accepted; the last
        // field keeps its numeric prefix.
        let op = decode(b"*100,1,2,3garbage").unwrap();
        assert_eq!(
            op,
            Operation::SetAll {
                brightness: 100,
                color: Rgb::new(1, 2, 3),
            }
        );
    }

    #[test]
    fn test_out_of_range_values_wrap() {
        let op = decode(b"*300,256,-1,999.").unwrap();
        assert_eq!(
            op,
            Operation::SetAll {
                brightness: 44,  // 300 % 256
                color: Rgb::new(0, 255, 231),
            }
        );
    }

    #[test]
    fn test_negative_index_passes_through() {
        let op = decode(b"_-5,10,1,2,3.").unwrap();
        assert!(matches!(op, Operation::SetOne { index: -5, .. }));
    }

    #[test]
    fn test_parse_field_atoi_semantics() {
        assert_eq!(parse_field(b"123"), 123);
        assert_eq!(parse_field(b"  42"), 42);
        assert_eq!(parse_field(b"-17"), -17);
        assert_eq!(parse_field(b"+9"), 9);
        assert_eq!(parse_field(b"12x34"), 12);
        assert_eq!(parse_field(b""), 0);
        assert_eq!(parse_field(b"x12"), 0);
        assert_eq!(parse_field(b"-"), 0);
    }

    #[test]
    fn test_parse_field_saturates() {
        assert_eq!(parse_field(b"99999999999999999999"), i32::MAX);
        assert_eq!(parse_field(b"-99999999999999999999"), i32::MIN);
    }
}
