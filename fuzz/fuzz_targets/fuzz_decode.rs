#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic, with or without limits
    let _ = zenpnm::decode(data, enough::Unstoppable);
    let _ = zenpnm::ImageInfo::from_bytes(data);

    let limits = zenpnm::Limits::with_max_memory(16 << 20);
    if let Ok(raster) = zenpnm::decode_with_limits(data, &limits, enough::Unstoppable) {
        assert_eq!(
            raster.pixels().len(),
            raster.width() as usize * raster.height() as usize
        );
    }
});
