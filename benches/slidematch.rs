use criterion::{criterion_group, criterion_main, Criterion};
use slidematch::{MatchConfig, Matcher, OwnedImage, Rgba, SearchMode};
use std::hint::black_box;

fn make_image(width: usize, height: usize) -> OwnedImage {
    OwnedImage::from_fn(width, height, |x, y| {
        let r = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
        let g = ((x * 5) ^ (y * 11)) & 0xFF;
        let b = (x + y * 3) & 0xFF;
        Rgba::opaque(r as u8, g as u8, b as u8)
    })
    .expect("non-empty image")
}

/// Crop with a transparent frame, like a real puzzle piece.
fn make_piece(background: &OwnedImage, x0: usize, y0: usize, size: usize) -> OwnedImage {
    let crop = background.crop(x0, y0, size, size).expect("crop inside background");
    let border = size / 8;
    OwnedImage::from_fn(size, size, |x, y| {
        let inside = x >= border && y >= border && x < size - border && y < size - border;
        let px = crop.view().get(x, y).expect("pixel inside crop");
        if inside {
            px
        } else {
            Rgba { a: 0, ..px }
        }
    })
    .expect("non-empty piece")
}

fn bench_matcher(c: &mut Criterion) {
    let background = make_image(320, 160);
    let piece = make_piece(&background, 180, 55, 48);

    let exhaustive = Matcher::new(piece.clone());
    c.bench_function("stride5_exhaustive", |b| {
        b.iter(|| black_box(exhaustive.match_image(background.view()).unwrap()));
    });

    let refined = Matcher::new(piece.clone()).with_config(MatchConfig {
        mode: SearchMode::CoarseToFine,
        ..MatchConfig::default()
    });
    c.bench_function("stride5_coarse_to_fine", |b| {
        b.iter(|| black_box(refined.match_image(background.view()).unwrap()));
    });

    let dense = Matcher::new(piece.clone()).with_config(MatchConfig {
        step: 1,
        ..MatchConfig::default()
    });
    c.bench_function("stride1_exhaustive", |b| {
        b.iter(|| black_box(dense.match_image(background.view()).unwrap()));
    });

    #[cfg(feature = "rayon")]
    {
        let parallel = Matcher::new(piece).with_config(MatchConfig {
            step: 1,
            parallel: true,
            ..MatchConfig::default()
        });
        c.bench_function("stride1_exhaustive_parallel", |b| {
            b.iter(|| black_box(parallel.match_image(background.view()).unwrap()));
        });
    }
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
