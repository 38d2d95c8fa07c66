#![no_main]

use buffer::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 9;
        idx += 1;

        match op {
            0 => {
                let _ = reader.read_bool();
            }
            1 => {
                let _ = reader.read_u8();
            }
            2 => {
                let _ = reader.read_i32();
            }
            3 => {
                let _ = reader.read_i64();
            }
            4 => {
                let _ = reader.read_f64();
            }
            5 => {
                let _ = reader.read_var_i32();
            }
            6 => {
                let _ = reader.read_var_i64();
            }
            7 => {
                let max = usize::from(data[idx.saturating_sub(1)]).saturating_add(1);
                let _ = reader.read_string(max);
            }
            _ => {
                let len = usize::from(data[idx.saturating_sub(1)] % 64);
                let _ = reader.read_bytes(len);
            }
        }
    }
});
