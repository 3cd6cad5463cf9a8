#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(image_type: u8, w: u16, h: u16, depth: u8, descriptor: u8) -> Vec<u8> {
    let mut out = vec![0u8, 0, image_type, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    out.extend_from_slice(&w.to_le_bytes());
    out.extend_from_slice(&h.to_le_bytes());
    out.push(depth);
    out.push(descriptor);
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Type 2, 2x2 BGR, top-left origin
    let mut tc24 = header(2, 2, 2, 24, 0x20);
    tc24.extend_from_slice(&[0xff, 0, 0, 0, 0xff, 0, 0, 0, 0xff, 0x80, 0x80, 0x80]);
    fs::write(format!("{dir}/truecolor_2x2.tga"), tc24).unwrap();

    // Type 2, 1x2 BGRA, bottom-left origin
    let mut tc32 = header(2, 1, 2, 32, 0x08);
    tc32.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
    fs::write(format!("{dir}/truecolor_alpha_1x2.tga"), tc32).unwrap();

    // Type 3, 3x2 gray
    let mut gray = header(3, 3, 2, 8, 0x20);
    gray.extend_from_slice(&[0x00, 0x40, 0x80, 0xc0, 0xff, 0x64]);
    fs::write(format!("{dir}/gray_3x2.tga"), gray).unwrap();

    // Type 10, 4x1: run of 3, raw of 1
    let mut rle = header(10, 4, 1, 24, 0x20);
    rle.extend_from_slice(&[0x82, 1, 2, 3, 0x00, 9, 9, 9]);
    fs::write(format!("{dir}/rle_4x1.tga"), rle).unwrap();

    // Type 11, 8x8: one run packet covers all 64 pixels
    let mut rle_gray = header(11, 8, 8, 8, 0);
    rle_gray.extend_from_slice(&[0xbf, 0x7f]);
    fs::write(format!("{dir}/rle_gray_8x8.tga"), rle_gray).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/short_header.bin"), &header(2, 1, 1, 24, 0)[..10]).unwrap();
    fs::write(format!("{dir}/colormapped.bin"), header(1, 1, 1, 8, 0)).unwrap();
    let mut overrun = header(10, 1, 1, 24, 0);
    overrun.extend_from_slice(&[0xff, 0, 0, 0]);
    fs::write(format!("{dir}/rle_overrun.bin"), overrun).unwrap();

    println!("Generated seed corpus in {dir}/");
}
