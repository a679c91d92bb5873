use bencher::{benchmark_group, benchmark_main, Bencher};

use bitmask::BitMask;

/// A row-sized mask: a few dozen columns, every third one set.
fn row_mask(columns: usize) -> BitMask {
    (0 .. columns).filter(|c| c % 3 == 0).collect()
}

fn set_ascending(bencher: &mut Bencher) {
    bencher.iter(|| {
        let mut mask = BitMask::new();
        for bit in 0 .. 64 { mask.set(bit); }
        mask
    });
}

fn set_sparse(bencher: &mut Bencher) {
    bencher.iter(|| {
        let mut mask = BitMask::new();
        for bit in (0 .. 4096).step_by(97) { mask.set(bit); }
        mask
    });
}

fn or_row(bencher: &mut Bencher) {
    let a = row_mask(40);
    let b = row_mask(48);
    bencher.iter(|| a.or(&b));
}

fn or_with_row(bencher: &mut Bencher) {
    let a = row_mask(40);
    let b = row_mask(48);
    bencher.iter(|| {
        let mut c = a.clone();
        c.or_with(&b);
        c
    });
}

fn to_array_row(bencher: &mut Bencher) {
    let mask = row_mask(48);
    bencher.iter(|| mask.to_array());
}

fn to_array_wide(bencher: &mut Bencher) {
    let mask = row_mask(4096);
    bencher.iter(|| mask.to_array());
}

benchmark_group!(row, set_ascending, or_row, or_with_row, to_array_row);
benchmark_group!(wide, set_sparse, to_array_wide);
benchmark_main!(row, wide);
