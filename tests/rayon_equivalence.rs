#![cfg(feature = "rayon")]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slidematch::lowlevel::{scan_stride, scan_stride_par, PiecePlan, ToleranceScalar};
use slidematch::{MatchConfig, Matcher, OwnedImage, Rgba, SearchMode};

/// Two-colour noise so many placements tie on score.
fn two_tone(width: usize, height: usize, seed: u64) -> OwnedImage {
    let mut rng = StdRng::seed_from_u64(seed);
    OwnedImage::from_fn(width, height, |_, _| {
        if rng.random_bool(0.5) {
            Rgba::opaque(10, 10, 10)
        } else {
            Rgba::opaque(240, 240, 240)
        }
    })
    .unwrap()
}

#[test]
fn parallel_scan_matches_sequential_with_ties() {
    let kernel = ToleranceScalar::default();
    for seed in 0..6u64 {
        let background = two_tone(64, 48, seed);
        let piece = two_tone(4, 3, 100 + seed);
        let plan = PiecePlan::from_view(piece.view(), 128);
        for step in 1..=6 {
            let seq = scan_stride(&kernel, background.view(), &plan, step).unwrap();
            let par = scan_stride_par(&kernel, background.view(), &plan, step).unwrap();
            assert_eq!(seq, par, "seed {seed}, step {step}");
            assert_eq!(seq.confidence.to_bits(), par.confidence.to_bits());
        }
    }
}

#[test]
fn parallel_matcher_matches_sequential() {
    let background = two_tone(120, 90, 9);
    let piece = background.crop(35, 40, 16, 16).unwrap();

    for mode in [SearchMode::Exhaustive, SearchMode::CoarseToFine] {
        let base = MatchConfig {
            mode,
            ..MatchConfig::default()
        };
        let seq = Matcher::new(piece.clone())
            .with_config(MatchConfig {
                parallel: false,
                ..base.clone()
            })
            .match_image(background.view())
            .unwrap();
        let par = Matcher::new(piece.clone())
            .with_config(MatchConfig {
                parallel: true,
                ..base
            })
            .match_image(background.view())
            .unwrap();
        assert_eq!(seq, par);
        assert_eq!((seq.x, seq.y, seq.confidence), (35, 40, 1.0));
    }
}

#[test]
fn parallel_scan_reports_invalid_dimensions() {
    let background = two_tone(10, 10, 1);
    let piece = two_tone(11, 4, 2);
    let plan = PiecePlan::from_view(piece.view(), 128);
    assert!(scan_stride_par(&ToleranceScalar::default(), background.view(), &plan, 5).is_err());
}

#[test]
fn parallel_scan_covers_last_column_off_the_step_grid() {
    let kernel = ToleranceScalar::default();
    // Last placement column is x = 63, off the grid for most steps below.
    let background = two_tone(67, 20, 21);
    let piece = two_tone(4, 4, 22);
    let plan = PiecePlan::from_view(piece.view(), 128);
    for step in [1, 2, 3, 4, 5, 6, 7, 63, 64, 100] {
        let seq = scan_stride(&kernel, background.view(), &plan, step).unwrap();
        let par = scan_stride_par(&kernel, background.view(), &plan, step).unwrap();
        assert_eq!(seq, par, "step {step}");
    }
}

#[test]
fn parallel_matcher_handles_single_placement_and_transparent_piece() {
    let tiny = OwnedImage::filled(1, 1, Rgba::opaque(7, 8, 9)).unwrap();
    let clear = OwnedImage::filled(3, 3, Rgba::transparent()).unwrap();
    let background = two_tone(12, 12, 5);

    for mode in [SearchMode::Exhaustive, SearchMode::CoarseToFine] {
        let cfg = MatchConfig {
            mode,
            parallel: true,
            ..MatchConfig::default()
        };
        let single = Matcher::new(tiny.clone())
            .with_config(cfg.clone())
            .match_image(tiny.view())
            .unwrap();
        assert_eq!((single.x, single.y, single.confidence), (0, 0, 1.0));

        let empty = Matcher::new(clear.clone())
            .with_config(cfg)
            .match_image(background.view())
            .unwrap();
        assert_eq!((empty.x, empty.y, empty.confidence), (0, 0, 0.0));
    }
}
