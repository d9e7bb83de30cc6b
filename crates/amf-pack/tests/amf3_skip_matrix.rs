//! AMF3 skipper matrix: every supported marker consumes exactly its bytes.

use amf_gate_buffers::Reader;
use amf_gate_pack::amf3::{read_u29, skip_string, skip_value, StringKind};
use amf_gate_pack::{AmfError, WireFormat};

/// Skips one value followed by a sentinel byte and checks the sentinel is next.
fn assert_spans(value: &[u8]) {
    let mut data = value.to_vec();
    data.push(0xAB);
    let mut reader = Reader::new(&data);
    skip_value(&mut reader).unwrap_or_else(|e| panic!("skip {:02x?}: {}", value, e));
    assert_eq!(
        reader.position(),
        value.len(),
        "value {:02x?} must span exactly its bytes",
        value
    );
    assert_eq!(reader.u8().unwrap(), 0xAB);
}

#[test]
fn u29_matrix() {
    let cases: &[(&[u8], u32)] = &[
        (&[0x00], 0),
        (&[0x7f], 127),
        (&[0x81, 0x01], 129),
        (&[0x80, 0x7f], 127),
        (&[0xff, 0xff, 0x7f], 0x1f_ffff),
        (&[0x80, 0xc0, 0x80, 0x00], 1 << 21),
        (
            &[0xff, 0xff, 0xff, 0xff],
            (0x7f << 22) | (0x7f << 15) | (0x7f << 8) | 0xff,
        ),
    ];
    for (bytes, expected) in cases {
        let mut reader = Reader::new(bytes);
        assert_eq!(read_u29(&mut reader).unwrap(), *expected, "{:02x?}", bytes);
        assert_eq!(reader.position(), bytes.len());
    }
}

#[test]
fn fourth_byte_has_no_continuation_check() {
    // The high bit of the fourth byte is data, so the fifth byte is untouched.
    let data = [0x80, 0x80, 0x80, 0x80, 0x05];
    let mut reader = Reader::new(&data);
    assert_eq!(read_u29(&mut reader).unwrap(), 0x80);
    assert_eq!(reader.position(), 4);
}

#[test]
fn scalar_markers() {
    assert_spans(&[0x00]);
    assert_spans(&[0x01]);
    assert_spans(&[0x02]);
    assert_spans(&[0x03]);
    assert_spans(&[0x04, 0x7f]);
    assert_spans(&[0x04, 0xff, 0xff, 0xff, 0xff]);
    assert_spans(&[0x05, 0x3f, 0xf0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn strings_inline_and_referenced() {
    assert_spans(&[0x06, 0x01]);
    assert_spans(&[0x06, 0x07, b'a', b'b', b'c']);
    // Reference to string table entry 3: header only.
    assert_spans(&[0x06, 0x06]);

    let mut reader = Reader::new(&[0x0b, b'h', b'e', b'l', b'l', b'o']);
    assert_eq!(skip_string(&mut reader).unwrap(), StringKind::Inline(5));
    assert!(!StringKind::Inline(5).is_empty());
    assert!(StringKind::Inline(0).is_empty());
    assert!(!StringKind::Reference(0).is_empty());
}

#[test]
fn arrays() {
    // Empty dense array.
    assert_spans(&[0x09, 0x01, 0x01]);
    // Two dense values.
    assert_spans(&[0x09, 0x05, 0x01, 0x03, 0x04, 0x01]);
    // Associative part {"k": null} then one dense value.
    assert_spans(&[0x09, 0x03, 0x03, b'k', 0x01, 0x01, 0x02]);
    // Reference to an earlier array: header only.
    assert_spans(&[0x09, 0x02]);
}

#[test]
fn objects() {
    // Anonymous dynamic object {"a": true}: traits 0x0b = inline, dynamic, 0 sealed.
    assert_spans(&[0x0a, 0x0b, 0x01, 0x03, b'a', 0x03, 0x01]);
    // Sealed class "P" with members x, y: traits 0x23 = inline, 2 sealed.
    assert_spans(&[
        0x0a, 0x23, 0x03, b'P', 0x03, b'x', 0x03, b'y', 0x04, 0x01, 0x04, 0x02,
    ]);
    // Sealed + dynamic: 1 sealed member then {"d": 7}.
    assert_spans(&[
        0x0a, 0x1b, 0x03, b'Q', 0x03, b's', 0x02, 0x03, b'd', 0x04, 0x07, 0x01,
    ]);
    // Externalizable + dynamic flag set: no dynamic run is read.
    assert_spans(&[0x0a, 0x0f, 0x03, b'E']);
    // Object reference.
    assert_spans(&[0x0a, 0x04]);
    // Nested: {"inner": {"v": 1.0-as-int}}.
    assert_spans(&[
        0x0a, 0x0b, 0x01, 0x0b, b'i', b'n', b'n', b'e', b'r', 0x0a, 0x0b, 0x01, 0x03, b'v',
        0x04, 0x01, 0x01, 0x01,
    ]);
}

#[test]
fn traits_reference_bit_is_not_interpreted() {
    // 0x01 has the 0x02 bit clear, which marks a traits-table reference.
    // Only the inline bit is checked, so a class-name header is still read.
    assert_spans(&[0x0a, 0x01, 0x01]);
    let mut reader = Reader::new(&[0x0a, 0x01]);
    assert!(matches!(
        skip_value(&mut reader),
        Err(AmfError::Buffer(_))
    ));

    // With or without the bit, one sealed member is walked the same way.
    for traits in [0x11u8, 0x13] {
        assert_spans(&[0x0a, traits, 0x01, 0x03, b'x', 0x04, 0x05]);
    }
}

#[test]
fn referenced_member_name_is_treated_as_non_empty() {
    // Dynamic run: name is a reference (0x00 = table entry 0); the skipper
    // cannot tell whether it was empty, so it reads a value after it.
    let data = [0x0a, 0x0b, 0x01, 0x00, 0x01, 0x01];
    let mut reader = Reader::new(&data);
    skip_value(&mut reader).unwrap();
    assert_eq!(reader.position(), data.len());

    // Without the extra value the walk runs off the end.
    let data = [0x0a, 0x0b, 0x01, 0x00];
    let mut reader = Reader::new(&data);
    assert!(matches!(
        skip_value(&mut reader),
        Err(AmfError::Buffer(_))
    ));
}

#[test]
fn unsupported_markers_are_fatal() {
    for marker in [0x07u8, 0x08, 0x0b, 0x0c, 0x0d, 0x11, 0xee] {
        let data = [marker, 0x00, 0x00];
        let mut reader = Reader::new(&data);
        assert_eq!(
            skip_value(&mut reader),
            Err(AmfError::UnknownMarker {
                format: WireFormat::Amf3,
                marker,
                position: 0
            })
        );
    }
}

#[test]
fn unknown_marker_nested_reports_inner_position() {
    let data = [0x09, 0x03, 0x01, 0x08];
    let mut reader = Reader::new(&data);
    assert_eq!(
        skip_value(&mut reader),
        Err(AmfError::UnknownMarker {
            format: WireFormat::Amf3,
            marker: 0x08,
            position: 3
        })
    );
}
