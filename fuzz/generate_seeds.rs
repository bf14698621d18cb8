#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    for dir in ["fuzz/corpus/fuzz_decode", "fuzz/corpus/fuzz_reader_parity"] {
        fs::create_dir_all(dir).unwrap();

        // PBM text 2x2 checker
        fs::write(format!("{dir}/pbm_2x2.pbm"), b"P1\n2 2\n0 1\n1 0\n").unwrap();

        // PGM text with comment and non-255 maxval
        fs::write(
            format!("{dir}/pgm_comment.pgm"),
            b"P2\n# ramp\n3 1\n15\n0 7 15\n",
        )
        .unwrap();

        // PPM text, CRLF line endings
        fs::write(
            format!("{dir}/ppm_crlf.ppm"),
            b"P3\r\n2 1\r\n255\r\n255 0 128\r\n0 64 255\r\n",
        )
        .unwrap();

        // PPM binary 2x2
        let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
        fs::write(format!("{dir}/ppm_2x2.ppm"), ppm).unwrap();

        // PPM binary with maxval 100
        fs::write(format!("{dir}/ppm_max100.ppm"), b"P6 1 1 100\n\x00\x32\x64").unwrap();

        // Truncated/malformed seeds for edge coverage
        fs::write(format!("{dir}/empty.bin"), b"").unwrap();
        fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
        fs::write(format!("{dir}/zero_max.bin"), b"P2\n1 1\n0\n0\n").unwrap();
        fs::write(format!("{dir}/p6_short.bin"), b"P6\n4 4\n255\n\x00\x00").unwrap();
        fs::write(format!("{dir}/bad_token.bin"), b"P3\n1 1\n255\n1 2x 3\n").unwrap();
    }

    println!("Generated seed corpus in fuzz/corpus/");
}
