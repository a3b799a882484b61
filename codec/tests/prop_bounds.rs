use codec::quant::{QUATERNION_COMPONENT_MAX, QUATERNION_SCALE};
use codec::{
    decode_quaternion, decode_relative_position, decode_vector, decode_velocity,
    encode_quaternion, encode_quaternion_with, encode_relative_position, encode_vector,
    encode_velocity, encode_velocity_with, largest_component, CodecOptions, Quat, Vec3,
};
use proptest::prelude::*;

/// Per-component bound for the three transmitted quaternion components, with
/// headroom for the final `f64 -> f32` narrowing.
const QUAT_STEP: f32 = (QUATERNION_COMPONENT_MAX / QUATERNION_SCALE) as f32 + 5e-7;

/// The reconstructed component inherits the error of all three others.
const QUAT_RECONSTRUCTED_BOUND: f32 = 1e-4;

fn unit_quat() -> impl Strategy<Value = Quat> {
    (
        -1.0f32..=1.0,
        -1.0f32..=1.0,
        -1.0f32..=1.0,
        -1.0f32..=1.0,
    )
        .prop_filter("non-degenerate", |(x, y, z, w)| {
            x * x + y * y + z * z + w * w > 0.01
        })
        .prop_map(|(x, y, z, w)| {
            let norm = (x * x + y * y + z * z + w * w).sqrt();
            Quat::new(x / norm, y / norm, z / norm, w / norm)
        })
}

fn velocity_case() -> impl Strategy<Value = (f32, Vec3)> {
    (0.5f32..1000.0).prop_flat_map(|max| {
        (
            Just(max),
            (-max..=max, -max..=max, -max..=max).prop_map(|(x, y, z)| Vec3::new(x, y, z)),
        )
    })
}

proptest! {
    #[test]
    fn vector_roundtrip_is_bit_identical(x in any::<u32>(), y in any::<u32>(), z in any::<u32>()) {
        let v = Vec3::new(f32::from_bits(x), f32::from_bits(y), f32::from_bits(z));
        let decoded = decode_vector(&encode_vector(v)).unwrap();
        prop_assert_eq!(decoded.x.to_bits(), x);
        prop_assert_eq!(decoded.y.to_bits(), y);
        prop_assert_eq!(decoded.z.to_bits(), z);
    }

    #[test]
    fn velocity_roundtrip_within_bound((max, v) in velocity_case()) {
        let decoded = decode_velocity(&encode_velocity(v, max), max).unwrap();
        // One step from truncation plus half a step from the i16 offset.
        let bound = 1.5 * max / 32767.0 + max * 1e-6;
        for (got, want) in decoded.to_array().into_iter().zip(v.to_array()) {
            prop_assert!((got - want).abs() <= bound, "{} vs {} (max {})", got, want, max);
        }
    }

    #[test]
    fn relative_position_integers_exact(x in any::<i16>(), y in any::<i16>(), z in any::<i16>()) {
        let v = Vec3::new(f32::from(x), f32::from(y), f32::from(z));
        prop_assert_eq!(decode_relative_position(&encode_relative_position(v)).unwrap(), v);
    }

    #[test]
    fn relative_position_truncates(
        x in -32768.0f32..32767.0,
        y in -32768.0f32..32767.0,
        z in -32768.0f32..32767.0,
    ) {
        let v = Vec3::new(x, y, z);
        let decoded = decode_relative_position(&encode_relative_position(v)).unwrap();
        for (got, want) in decoded.to_array().into_iter().zip(v.to_array()) {
            prop_assert_eq!(got, want.trunc());
            prop_assert!((got - want).abs() < 1.0);
        }
    }

    #[test]
    fn quaternion_roundtrip_same_rotation(q in unit_quat()) {
        let bytes = encode_quaternion(q);
        let decoded = decode_quaternion(&bytes).unwrap();

        let (index, positive) = largest_component(q);
        prop_assert_eq!(bytes[0], index);

        let sign = if positive { 1.0 } else { -1.0 };
        for (i, (got, want)) in decoded.to_array().into_iter().zip(q.to_array()).enumerate() {
            let want = want * sign;
            let bound = if i == usize::from(index) {
                QUAT_RECONSTRUCTED_BOUND
            } else {
                QUAT_STEP
            };
            prop_assert!((got - want).abs() <= bound, "component {}: {} vs {}", i, got, want);
        }
        prop_assert!(decoded.to_array()[usize::from(index)] >= 0.0);
        prop_assert!((decoded.dot(q).abs() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn negated_quaternion_encodes_identically(q in unit_quat()) {
        let neg = Quat::new(-q.x, -q.y, -q.z, -q.w);
        prop_assert_eq!(encode_quaternion(q), encode_quaternion(neg));
    }

    #[test]
    fn default_options_are_wire_compatible(
        q in unit_quat(),
        (max, v) in velocity_case(),
        scale in 1.0f32..3.0,
    ) {
        let options = CodecOptions::default();
        prop_assert_eq!(encode_quaternion_with(q, &options).unwrap(), encode_quaternion(q));

        // Out-of-range input takes the same wrapping path.
        let wide = Vec3::new(v.x * scale, v.y * scale, v.z * scale);
        prop_assert_eq!(
            encode_velocity_with(wide, max, &options).unwrap(),
            encode_velocity(wide, max)
        );
    }

    #[test]
    fn strict_accepts_valid_input(q in unit_quat(), (max, v) in velocity_case()) {
        let options = CodecOptions::strict();
        prop_assert_eq!(encode_quaternion_with(q, &options).unwrap(), encode_quaternion(q));
        prop_assert_eq!(encode_velocity_with(v, max, &options).unwrap(), encode_velocity(v, max));
    }

    #[test]
    fn decoders_never_panic(data in prop::collection::vec(any::<u8>(), 0..16), max in -10.0f32..10.0) {
        let _ = decode_vector(&data);
        let _ = decode_quaternion(&data);
        let _ = decode_velocity(&data, max);
        let _ = decode_relative_position(&data);
    }
}
