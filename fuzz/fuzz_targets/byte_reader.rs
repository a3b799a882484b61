#![no_main]

use libfuzzer_sys::fuzz_target;
use packing::ByteReader;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of reads.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 5;
        idx += 1;

        let before = reader.position();
        let ok = match op {
            0 => reader.read_u8().is_ok(),
            1 => reader.read_u16().is_ok(),
            2 => reader.read_i16().is_ok(),
            3 => reader.read_f32().is_ok(),
            _ => reader.read_array::<7>().is_ok(),
        };
        if !ok {
            assert_eq!(reader.position(), before);
        }
        assert_eq!(reader.position() + reader.bytes_remaining(), data.len());
    }
});
