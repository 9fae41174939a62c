//! Typed rendering of walk entries.

use std::fmt::Write as _;
use std::io::{self, Write};

use async_snmp::{Value, VarBind};

/// Write one walk entry as a single line.
pub fn write_entry<W: Write>(w: &mut W, vb: &VarBind) -> io::Result<()> {
    let (label, text) = render_value(&vb.value);
    writeln!(w, "OID: {} | Type: {} | Value: {}", vb.oid, label, text)
}

/// Decode a value into a `(type label, display text)` pair.
///
/// The four common variants get first-class decoding; everything else falls
/// back to a generic rendering. This never fails: an unrecognized variant is
/// rendered, not rejected.
pub fn render_value(value: &Value) -> (String, String) {
    match value {
        Value::OctetString(bytes) => (
            "String".to_string(),
            String::from_utf8_lossy(bytes).into_owned(),
        ),
        Value::Integer(v) => ("Integer".to_string(), v.to_string()),
        Value::TimeTicks(v) => ("TimeTicks".to_string(), v.to_string()),
        Value::IpAddress(octets) => (
            "IPAddress".to_string(),
            format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]),
        ),
        Value::Counter32(v) => ("Counter32".to_string(), v.to_string()),
        Value::Gauge32(v) => ("Gauge32".to_string(), v.to_string()),
        Value::Counter64(v) => ("Counter64".to_string(), v.to_string()),
        Value::ObjectIdentifier(oid) => ("OID".to_string(), oid.to_string()),
        Value::Null => ("Null".to_string(), "(null)".to_string()),
        Value::Opaque(bytes) => ("Opaque".to_string(), hex_string(bytes)),
        Value::NoSuchObject => ("NoSuchObject".to_string(), "no such object".to_string()),
        Value::NoSuchInstance => (
            "NoSuchInstance".to_string(),
            "no such instance".to_string(),
        ),
        Value::EndOfMibView => ("EndOfMibView".to_string(), "end of MIB view".to_string()),
        Value::Unknown { tag, data } => (format!("Unknown(0x{:02X})", tag), hex_string(data)),
        other => ("Unrecognized".to_string(), format!("{}", other)),
    }
}

fn hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:02X}", b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_snmp::Oid;
    use bytes::Bytes;

    fn entry(arcs: &[u32], value: Value) -> VarBind {
        VarBind::new(Oid::from_slice(arcs), value)
    }

    fn line(vb: &VarBind) -> String {
        let mut buf = Vec::new();
        write_entry(&mut buf, vb).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn octet_string_decodes_as_text() {
        let vb = entry(
            &[1, 3, 6, 1, 2, 1, 1, 1, 0],
            Value::OctetString(Bytes::from_static(&[0x68, 0x69])),
        );
        assert_eq!(
            line(&vb),
            "OID: 1.3.6.1.2.1.1.1.0 | Type: String | Value: hi\n"
        );
    }

    #[test]
    fn integer_prints_decimal() {
        let vb = entry(&[1, 3, 6, 1, 2, 1, 1, 7, 0], Value::Integer(42));
        assert_eq!(
            line(&vb),
            "OID: 1.3.6.1.2.1.1.7.0 | Type: Integer | Value: 42\n"
        );
    }

    #[test]
    fn timeticks_prints_plain_integer() {
        let vb = entry(&[1, 3, 6, 1, 2, 1, 1, 3, 0], Value::TimeTicks(12345));
        assert_eq!(
            line(&vb),
            "OID: 1.3.6.1.2.1.1.3.0 | Type: TimeTicks | Value: 12345\n"
        );
    }

    #[test]
    fn ip_address_prints_dotted_quad() {
        let vb = entry(&[1, 3, 6, 1, 2, 1, 4, 20], Value::IpAddress([10, 0, 0, 1]));
        assert_eq!(
            line(&vb),
            "OID: 1.3.6.1.2.1.4.20 | Type: IPAddress | Value: 10.0.0.1\n"
        );
    }

    #[test]
    fn unknown_tag_renders_fallback() {
        let (label, text) = render_value(&Value::Unknown {
            tag: 0x99,
            data: Bytes::from_static(&[0xDE, 0xAD]),
        });
        assert_eq!(label, "Unknown(0x99)");
        assert_eq!(text, "DE AD");
    }

    #[test]
    fn counters_and_exceptions_render_generically() {
        assert_eq!(
            render_value(&Value::Counter64(u64::MAX)),
            ("Counter64".to_string(), u64::MAX.to_string())
        );
        assert_eq!(
            render_value(&Value::Null),
            ("Null".to_string(), "(null)".to_string())
        );
        let (label, _) = render_value(&Value::EndOfMibView);
        assert_eq!(label, "EndOfMibView");
    }

    #[test]
    fn rendering_is_pure() {
        let vb = entry(
            &[1, 3, 6, 1, 2, 1, 1, 5, 0],
            Value::OctetString(Bytes::from_static(b"router-7")),
        );
        assert_eq!(line(&vb), line(&vb));
    }
}
