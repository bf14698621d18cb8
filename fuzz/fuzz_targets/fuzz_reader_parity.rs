#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpnm::*;

fuzz_target!(|data: &[u8]| {
    // Slice and io::Read sources must agree on the result and on how many
    // bytes the decode consumed.
    let limits = Limits::with_max_memory(16 << 20);

    let mut slice = SliceSource::new(data);
    let from_slice = DecodeRequest::from_source(&mut slice)
        .with_limits(&limits)
        .decode(enough::Unstoppable);

    let mut reader = ReadSource::new(data);
    let from_reader = DecodeRequest::from_source(&mut reader)
        .with_limits(&limits)
        .decode(enough::Unstoppable);

    match (from_slice, from_reader) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a, b);
            assert_eq!(slice.position(), reader.position());
        }
        (Err(a), Err(b)) => assert_eq!(
            core::mem::discriminant(&a),
            core::mem::discriminant(&b),
            "{a} vs {b}"
        ),
        (a, b) => panic!("slice {a:?} vs reader {b:?}"),
    }
});
