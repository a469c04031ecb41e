use criterion::{Criterion, criterion_group, criterion_main};
use rkg_ghost_module::bit_read::BitRead;
use rkg_ghost_module::bit_write::BitWrite;
use rkg_ghost_module::checksum;
use rkg_ghost_module::types::{GHOST_MAGIC, MILLIS_SPAN, MINUTES_SPAN, SECONDS_SPAN};
use std::hint::black_box;
use std::io::Cursor;

// ─── Fixture ────────────────────────────────────────────────────────────────

/// Synthetic ghost of `len` bytes with a valid magic and trailer. Real race
/// ghosts run a few KiB to a few tens of KiB.
fn make_ghost(len: usize) -> Vec<u8> {
    let mut buf: Vec<u8> = (0..len).map(|i| (i * 31 + 7) as u8).collect();
    buf[0..4].copy_from_slice(&GHOST_MAGIC.to_be_bytes());
    let crc = checksum::crc32(&buf[..len - 4]);
    buf[len - 4..].copy_from_slice(&crc.to_be_bytes());
    buf
}

fn bench_crc32_compute(c: &mut Criterion) {
    let ghost = make_ghost(64 * 1024);
    c.bench_function("crc32_compute_64k", |b| {
        b.iter(|| {
            let mut cur = Cursor::new(black_box(ghost.as_slice()));
            checksum::compute(&mut cur).unwrap()
        })
    });
}

fn bench_read_finish_time_fields(c: &mut Criterion) {
    let ghost = make_ghost(4096);
    c.bench_function("read_finish_time_fields", |b| {
        b.iter(|| {
            let mut cur = Cursor::new(black_box(ghost.as_slice()));
            let m = cur.read_span(MINUTES_SPAN).unwrap();
            let s = cur.read_span(SECONDS_SPAN).unwrap();
            let ms = cur.read_span(MILLIS_SPAN).unwrap();
            (m, s, ms)
        })
    });
}

fn bench_patch_finish_time_fields(c: &mut Criterion) {
    let ghost = make_ghost(4096);
    c.bench_function("patch_finish_time_fields", |b| {
        b.iter(|| {
            let mut cur = Cursor::new(black_box(ghost.clone()));
            cur.write_span(MINUTES_SPAN, 1).unwrap();
            cur.write_span(SECONDS_SPAN, 30).unwrap();
            cur.write_span(MILLIS_SPAN, 999).unwrap();
            cur.into_inner()
        })
    });
}

criterion_group!(
    benches,
    bench_crc32_compute,
    bench_read_finish_time_fields,
    bench_patch_finish_time_fields
);
criterion_main!(benches);
