use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slidematch::{Match, MatchConfig, Matcher, OwnedImage, Rgba, SearchMode};

/// Random colours in `block`-sized squares, so near-miss placements still
/// overlap the right colours partially.
fn block_image(width: usize, height: usize, block: usize, seed: u64) -> OwnedImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let cols = width.div_ceil(block);
    let rows = height.div_ceil(block);
    let palette: Vec<Rgba> = (0..cols * rows)
        .map(|_| Rgba::opaque(rng.random(), rng.random(), rng.random()))
        .collect();
    OwnedImage::from_fn(width, height, |x, y| palette[(y / block) * cols + x / block]).unwrap()
}

#[test]
fn refinement_recovers_off_grid_placement() {
    let background = block_image(120, 80, 6, 3);
    let (x0, y0) = (23, 17);
    let piece = background.crop(x0, y0, 30, 24).unwrap();

    let coarse = Matcher::new(piece.clone())
        .match_image(background.view())
        .unwrap();
    assert!(coarse.confidence < 1.0);

    let refined = Matcher::new(piece)
        .with_config(MatchConfig {
            mode: SearchMode::CoarseToFine,
            ..MatchConfig::default()
        })
        .match_image(background.view())
        .unwrap();
    assert_eq!(
        refined,
        Match {
            x: x0,
            y: y0,
            confidence: 1.0,
        }
    );
}

#[test]
fn refinement_never_lowers_confidence() {
    for seed in 0..8u64 {
        let background = block_image(70, 50, 4, 10 + seed);
        let piece = block_image(12, 9, 3, 50 + seed);
        for step in [1usize, 3, 5, 7] {
            let base = MatchConfig {
                step,
                ..MatchConfig::default()
            };
            let coarse = Matcher::new(piece.clone())
                .with_config(base.clone())
                .match_image(background.view())
                .unwrap();
            let refined = Matcher::new(piece.clone())
                .with_config(MatchConfig {
                    mode: SearchMode::CoarseToFine,
                    ..base
                })
                .match_image(background.view())
                .unwrap();
            assert!(refined.confidence >= coarse.confidence);
            if step == 1 {
                assert_eq!(refined, coarse);
            }
        }
    }
}

#[test]
fn refinement_on_grid_placement_keeps_coarse_result() {
    let background = block_image(100, 60, 5, 77);
    let piece = background.crop(40, 20, 25, 20).unwrap();
    let refined = Matcher::new(piece)
        .with_config(MatchConfig {
            mode: SearchMode::CoarseToFine,
            ..MatchConfig::default()
        })
        .match_image(background.view())
        .unwrap();
    assert_eq!((refined.x, refined.y), (40, 20));
    assert_eq!(refined.confidence, 1.0);
}
