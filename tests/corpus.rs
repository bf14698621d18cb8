//! Test corpus: generated images of various patterns, sizes and variants.

use std::sync::atomic::{AtomicUsize, Ordering};

use enough::{StopReason, Unstoppable};
use zenpnm::*;

fn checkerboard(w: usize, h: usize) -> Vec<RGB8> {
    let mut pixels = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            if (x + y) % 2 == 0 {
                pixels.push(RGB8::new(200, 220, 240));
            } else {
                pixels.push(RGB8::new(10, 40, 70));
            }
        }
    }
    pixels
}

fn noise_pattern(w: usize, h: usize) -> Vec<RGB8> {
    let mut state: u32 = 0xDEAD_BEEF;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as u8
    };
    (0..w * h)
        .map(|_| RGB8::new(next(), next(), next()))
        .collect()
}

// ── Writers (test-only; the crate does not encode) ───────────────────

fn write_p1(bits: &[bool], w: usize, h: usize) -> Vec<u8> {
    let mut out = format!("P1\n# bitmap {w}x{h}\n{w} {h}\n").into_bytes();
    for row in bits.chunks(w) {
        let line: Vec<&str> = row.iter().map(|&b| if b { "1" } else { "0" }).collect();
        out.extend_from_slice(line.join(" ").as_bytes());
        out.push(b'\n');
    }
    out
}

fn write_p2(grey: &[u32], w: usize, h: usize, max: u32) -> Vec<u8> {
    let mut out = format!("P2\n{w} {h}\n{max}\n").into_bytes();
    for row in grey.chunks(w) {
        let line: Vec<String> = row.iter().map(u32::to_string).collect();
        out.extend_from_slice(line.join(" ").as_bytes());
        out.push(b'\n');
    }
    out
}

fn write_p3(pixels: &[RGB8], w: usize, h: usize) -> Vec<u8> {
    let mut out = format!("P3\n{w} {h}\n255\n").into_bytes();
    for row in pixels.chunks(w) {
        let line: Vec<String> = row
            .iter()
            .map(|p| format!("{} {} {}", p.r, p.g, p.b))
            .collect();
        out.extend_from_slice(line.join("  ").as_bytes());
        out.push(b'\n');
    }
    out
}

fn write_p6(pixels: &[RGB8], w: usize, h: usize) -> Vec<u8> {
    let mut out = format!("P6 {w} {h} 255\n").into_bytes();
    for p in pixels {
        out.extend_from_slice(&[p.r, p.g, p.b]);
    }
    out
}

// ── Pattern decodes ──────────────────────────────────────────────────

#[test]
fn checkerboard_p3_and_p6_agree() {
    let pixels = checkerboard(8, 6);
    let text = decode(&write_p3(&pixels, 8, 6), Unstoppable).unwrap();
    let binary = decode(&write_p6(&pixels, 8, 6), Unstoppable).unwrap();
    assert_eq!(text.pixels(), &pixels[..]);
    assert_eq!(binary, text);
}

#[test]
fn noise_p6() {
    let pixels = noise_pattern(33, 17);
    let decoded = decode(&write_p6(&pixels, 33, 17), Unstoppable).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (33, 17));
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn noise_p3() {
    let pixels = noise_pattern(5, 7);
    let decoded = decode(&write_p3(&pixels, 5, 7), Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn bitmap_pattern_p1() {
    let (w, h) = (9, 4);
    let bits: Vec<bool> = (0..w * h).map(|i| i % 3 == 0).collect();
    let decoded = decode(&write_p1(&bits, w, h), Unstoppable).unwrap();
    for (bit, px) in bits.iter().zip(decoded.pixels()) {
        let expected = if *bit { 0 } else { 255 };
        assert_eq!(*px, RGB8::new(expected, expected, expected));
    }
}

#[test]
fn greyscale_ramp_16bit_max() {
    let (w, h) = (16, 2);
    let grey: Vec<u32> = (0..(w * h) as u32).map(|i| i * 2114).collect();
    let decoded = decode(&write_p2(&grey, w, h, 65535), Unstoppable).unwrap();
    for (g, px) in grey.iter().zip(decoded.pixels()) {
        let expected = (u64::from(*g) * 255 / 65535) as u8;
        assert_eq!(px.r, expected);
        assert_eq!(px.g, expected);
        assert_eq!(px.b, expected);
    }
}

#[test]
fn single_pixel_each_variant() {
    let cases: [(&[u8], RGB8); 4] = [
        (b"P1 1 1 1\n", RGB8::new(0, 0, 0)),
        (b"P2 1 1 1\n1\n", RGB8::new(255, 255, 255)),
        (b"P3 1 1 2\n1 2 0\n", RGB8::new(127, 255, 0)),
        (b"P6 1 1 2\n\x01\x02\x00", RGB8::new(127, 255, 0)),
    ];
    for (data, expected) in cases {
        let decoded = decode(data, Unstoppable).unwrap();
        assert_eq!(decoded.pixels(), &[expected]);
    }
}

#[test]
fn wide_image_p6() {
    let pixels = checkerboard(5000, 1);
    let decoded = decode(&write_p6(&pixels, 5000, 1), Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn tall_image_p2() {
    let grey: Vec<u32> = (0..300).map(|i| i % 256).collect();
    let decoded = decode(&write_p2(&grey, 1, 300, 255), Unstoppable).unwrap();
    assert_eq!(decoded.height(), 300);
    let col: Vec<u32> = decoded.pixels().iter().map(|p| u32::from(p.r)).collect();
    assert_eq!(col, grey);
}

// ── Truncation sweep ─────────────────────────────────────────────────

#[test]
fn every_truncation_fails_cleanly() {
    let pixels = noise_pattern(3, 2);
    for encoded in [write_p3(&pixels, 3, 2), write_p6(&pixels, 3, 2)] {
        let full = decode(&encoded, Unstoppable).unwrap();
        assert_eq!(full.pixels(), &pixels[..]);
        // The final text token may end at EOF, so only cut up to the space
        // before the last sample of the text encoding.
        let last_cut = if encoded.starts_with(b"P3") {
            encoded.iter().rposition(|&b| b == b' ').unwrap() + 1
        } else {
            encoded.len() - 1
        };
        for len in 0..=last_cut {
            let err = decode(&encoded[..len], Unstoppable).unwrap_err();
            assert!(
                matches!(err, PnmError::UnexpectedEof),
                "len {len}: {err}"
            );
        }
    }
}

// ── Reader parity ────────────────────────────────────────────────────

#[test]
fn reader_matches_slice() {
    let pixels = noise_pattern(12, 9);
    for encoded in [write_p3(&pixels, 12, 9), write_p6(&pixels, 12, 9)] {
        let from_slice = decode(&encoded, Unstoppable).unwrap();
        let from_reader =
            decode_reader(std::io::BufReader::new(&encoded[..]), Unstoppable).unwrap();
        assert_eq!(from_slice, from_reader);
    }
}

// ── Limits ───────────────────────────────────────────────────────────

#[test]
fn limits_max_width() {
    let encoded = write_p6(&checkerboard(2, 2), 2, 2);
    let limits = Limits {
        max_width: Some(1),
        ..Default::default()
    };
    assert!(matches!(
        decode_with_limits(&encoded, &limits, Unstoppable),
        Err(PnmError::LimitExceeded(_))
    ));
}

#[test]
fn limits_max_height() {
    let encoded = write_p6(&checkerboard(2, 2), 2, 2);
    let limits = Limits {
        max_height: Some(1),
        ..Default::default()
    };
    assert!(decode_with_limits(&encoded, &limits, Unstoppable).is_err());
}

#[test]
fn limits_max_pixels() {
    let encoded = write_p3(&checkerboard(4, 4), 4, 4);
    let limits = Limits {
        max_pixels: Some(15),
        ..Default::default()
    };
    assert!(decode_with_limits(&encoded, &limits, Unstoppable).is_err());
    let limits = Limits {
        max_pixels: Some(16),
        ..Default::default()
    };
    assert!(decode_with_limits(&encoded, &limits, Unstoppable).is_ok());
}

#[test]
fn limits_max_memory() {
    let encoded = write_p6(&checkerboard(2, 2), 2, 2);
    assert!(decode_with_limits(&encoded, &Limits::with_max_memory(11), Unstoppable).is_err());
    assert!(decode_with_limits(&encoded, &Limits::with_max_memory(12), Unstoppable).is_ok());
}

#[test]
fn limits_reject_before_reading_pixels() {
    // Header claims a huge image; only the header is present.
    let limits = Limits::with_max_memory(1 << 20);
    assert!(matches!(
        decode_with_limits(b"P6\n100000 100000\n255\n", &limits, Unstoppable),
        Err(PnmError::LimitExceeded(_))
    ));
}

#[test]
fn huge_header_without_data_is_eof() {
    assert!(matches!(
        decode(b"P6\n4000 4000\n255\n\x00\x00\x00", Unstoppable),
        Err(PnmError::UnexpectedEof)
    ));
}

#[test]
fn unlimited_huge_header_is_eof_not_limit() {
    // No limits set: the overstated size must surface as truncation.
    let cases: [&[u8]; 3] = [
        b"P6\n100000 100000\n255\n",
        b"P3\n60000 60000\n255\n1 2 3\n",
        b"P2\n65536 65536\n255\n",
    ];
    for data in cases {
        let err = decode(data, Unstoppable).unwrap_err();
        assert!(matches!(err, PnmError::UnexpectedEof), "{err}");
    }
}

// ── Cancellation ─────────────────────────────────────────────────────

/// Allows `budget` checks, then reports cancellation.
struct CancelAfter {
    budget: usize,
    checks: AtomicUsize,
}

impl CancelAfter {
    fn new(budget: usize) -> Self {
        Self {
            budget,
            checks: AtomicUsize::new(0),
        }
    }

    fn checks(&self) -> usize {
        self.checks.load(Ordering::Relaxed)
    }
}

impl Stop for CancelAfter {
    fn check(&self) -> Result<(), StopReason> {
        if self.checks.fetch_add(1, Ordering::Relaxed) >= self.budget {
            Err(StopReason::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[test]
fn cancelled_before_pixels() {
    let encoded = write_p6(&checkerboard(4, 4), 4, 4);
    let stop = CancelAfter::new(0);
    let mut src = SliceSource::new(&encoded);
    assert!(matches!(
        decode_from(&mut src, &stop),
        Err(PnmError::Cancelled(StopReason::Cancelled))
    ));
    assert_eq!(stop.checks(), 1);
    // Only the header was read.
    assert_eq!(src.position(), b"P6 4 4 255\n".len() as u64);
}

#[test]
fn cancelled_mid_rows_p2() {
    // 1x64, each row "7\n". Checks: before pixels, then rows 0, 16, 32.
    let encoded = write_p2(&[7; 64], 1, 64, 255);
    let header_len = b"P2\n1 64\n255\n".len() as u64;
    let stop = CancelAfter::new(3);
    let mut src = SliceSource::new(&encoded);
    assert!(matches!(
        decode_from(&mut src, &stop),
        Err(PnmError::Cancelled(StopReason::Cancelled))
    ));
    assert_eq!(stop.checks(), 4);
    assert_eq!(src.position(), header_len + 32 * 2);
}

#[test]
fn cancelled_mid_rows_p6() {
    let pixels = noise_pattern(1, 64);
    let encoded = write_p6(&pixels, 1, 64);
    let header_len = b"P6 1 64 255\n".len() as u64;
    let stop = CancelAfter::new(3);
    let mut src = SliceSource::new(&encoded);
    assert!(matches!(
        decode_from(&mut src, &stop),
        Err(PnmError::Cancelled(StopReason::Cancelled))
    ));
    assert_eq!(stop.checks(), 4);
    assert_eq!(src.position(), header_len + 32 * 3);

    // Same image, enough budget for every check: decodes in full.
    let stop = CancelAfter::new(5);
    let decoded = decode(&encoded, &stop).unwrap();
    assert_eq!(decoded.pixels(), &pixels[..]);
    assert_eq!(stop.checks(), 5);
}

#[test]
fn cancellation_via_request() {
    let encoded = write_p3(&checkerboard(2, 2), 2, 2);
    assert!(matches!(
        DecodeRequest::new(&encoded).decode(CancelAfter::new(0)),
        Err(PnmError::Cancelled(_))
    ));
}

// ── External files ───────────────────────────────────────────────────

#[test]
fn decode_external_ppm_if_available() {
    let Ok(path) = std::env::var("ZENPNM_TEST_PPM") else {
        return;
    };
    if let Ok(file) = std::fs::File::open(&path) {
        let reader = std::io::BufReader::new(file);
        let decoded = decode_reader(reader, Unstoppable).unwrap();
        assert!(decoded.width() > 0);
        let data = std::fs::read(&path).unwrap();
        assert_eq!(decode(&data, Unstoppable).unwrap(), decoded);
    }
}
