use codec::CodecOptions;
use tqc_tools::{
    decode_bytes, decode_hex, encode_components, format_decode_pretty, format_roundtrip_pretty,
    roundtrip, DecodedComponents, ValueKind,
};

#[test]
fn encode_velocity_to_hex() {
    let bytes = encode_components(
        ValueKind::Velocity,
        &[3.0, -4.0, 0.0],
        Some(10.0),
        &CodecOptions::default(),
    )
    .unwrap();
    assert_eq!(hex::encode(bytes), "6526cdcc0000");
}

#[test]
fn velocity_requires_max() {
    let err = encode_components(
        ValueKind::Velocity,
        &[1.0, 2.0, 3.0],
        None,
        &CodecOptions::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("--max-velocity"));
}

#[test]
fn wrong_component_count() {
    let err = encode_components(
        ValueKind::Quaternion,
        &[0.0, 0.0, 1.0],
        None,
        &CodecOptions::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("4 components"));
}

#[test]
fn strict_rejects_out_of_range_velocity() {
    let result = encode_components(
        ValueKind::Velocity,
        &[11.0, 0.0, 0.0],
        Some(10.0),
        &CodecOptions::strict(),
    );
    assert!(result.is_err());

    let wrapped = encode_components(
        ValueKind::Velocity,
        &[11.0, 0.0, 0.0],
        Some(10.0),
        &CodecOptions::default(),
    );
    assert!(wrapped.is_ok());
}

#[test]
fn decode_identity_quaternion_hex() {
    let decoded = decode_hex(
        ValueKind::Quaternion,
        "03 0000 0000 0000",
        None,
        &CodecOptions::default(),
    )
    .unwrap();
    assert_eq!(decoded.hex, "03000000000000");
    assert_eq!(decoded.value.to_vec(), vec![0.0, 0.0, 0.0, 1.0]);
    assert!(format_decode_pretty(&decoded).contains("(0, 0, 0, 1)"));
}

#[test]
fn decode_json_shape() {
    let decoded = decode_hex(
        ValueKind::RelativePosition,
        "0100ffff0001",
        None,
        &CodecOptions::default(),
    )
    .unwrap();
    assert_eq!(
        decoded.value,
        DecodedComponents::Vector(codec::Vec3::new(1.0, -1.0, 256.0))
    );

    let json = serde_json::to_value(&decoded).unwrap();
    assert_eq!(json["kind"], "relative-position");
    assert_eq!(json["value"]["x"], 1.0);
    assert_eq!(json["value"]["y"], -1.0);
    assert_eq!(json["value"]["z"], 256.0);
}

#[test]
fn decode_rejects_bad_input() {
    let options = CodecOptions::default();
    assert!(decode_hex(ValueKind::Vector, "zz", None, &options).is_err());
    assert!(decode_bytes(ValueKind::Vector, &[0u8; 4], None, &options).is_err());
    assert!(decode_bytes(ValueKind::Velocity, &[0u8; 7], Some(1.0), &options).is_err());
    assert!(decode_bytes(ValueKind::Quaternion, &[9, 0, 0, 0, 0, 0, 0], None, &options).is_err());
}

#[test]
fn roundtrip_reports_small_quaternion_error() {
    let report = roundtrip(
        ValueKind::Quaternion,
        &[0.0, 0.0, 0.0, -1.0],
        None,
        &CodecOptions::default(),
    )
    .unwrap();
    // Sign-aligned against the non-negative reconstruction.
    assert_eq!(report.original, vec![-0.0, -0.0, -0.0, 1.0]);
    assert_eq!(report.decoded, vec![0.0, 0.0, 0.0, 1.0]);
    assert!(report.abs_error.iter().all(|e| *e == 0.0));
    assert_eq!(report.hex, "03000000000000");
    assert!(format_roundtrip_pretty(&report).contains("7 bytes"));
}

#[test]
fn roundtrip_vector_is_exact() {
    let report = roundtrip(
        ValueKind::Vector,
        &[1.25, -1e-20, 3.0e30],
        None,
        &CodecOptions::default(),
    )
    .unwrap();
    assert_eq!(report.original, report.decoded);
    assert!(report.abs_error.iter().all(|e| *e == 0.0));
}
