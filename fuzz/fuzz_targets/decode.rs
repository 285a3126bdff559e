#![no_main]
use idte_rs::Codec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let codec = Codec::default();
    let input = String::from_utf8_lossy(data);
    let _ = codec.decode(&input);
    let _ = codec.decode_fixed(&input);
});
