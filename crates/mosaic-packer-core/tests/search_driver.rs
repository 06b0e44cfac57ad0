use mosaic_packer_core::error::MosaicError;
use mosaic_packer_core::model::Part;
use mosaic_packer_core::prelude::*;

fn disjoint(frames: &[MosaicFrame]) -> bool {
    for i in 0..frames.len() {
        for j in (i + 1)..frames.len() {
            if frames[i].rect.overlaps(&frames[j].rect) {
                return false;
            }
        }
    }
    true
}

#[test]
fn tie_break_selects_the_smallest_trial_width() {
    // Widths 10, 15, 20. Width 10 cannot hold a 15-wide part; widths 15 and 20
    // both produce a 15x20 = 300 px layout. The first (smallest) must win.
    let cfg = MosaicConfig::builder()
        .with_max_dimensions(20, 20)
        .max_pixels(10_000)
        .min_width(10)
        .num_width_trials(3)
        .take_all_images(true)
        .build();
    let mut parts = vec![Part::new("a", 15, 10), Part::new("b", 15, 10)];

    let layout = pack_mosaic(&mut parts, &cfg).expect("feasible");
    assert_eq!(layout.trial_width, 15);
    assert_eq!(layout.pixels, 300);
    assert_eq!(layout.width, 15);
    assert_eq!(layout.height, 20);
}

#[test]
fn search_prefers_the_cheapest_feasible_trial() {
    // Widths 20, 30, 40 give areas 400, 600, 400; the tie at 400 resolves to
    // the earlier trial, width 20.
    let cfg = MosaicConfig::builder()
        .with_max_dimensions(40, 40)
        .max_pixels(10_000)
        .min_width(20)
        .num_width_trials(3)
        .take_all_images(true)
        .build();
    let mut parts: Vec<Part> = (0..4).map(|i| Part::new(format!("p{}", i), 10, 10)).collect();

    let layout = pack_mosaic(&mut parts, &cfg).expect("feasible");
    assert_eq!(layout.trial_width, 20);
    assert_eq!(layout.pixels, 400);
}

#[test]
fn pixel_budget_rejects_geometrically_feasible_trials() {
    // Every feasible trial costs 300 px; a 250 px budget fails the whole run.
    let cfg = MosaicConfig::builder()
        .with_max_dimensions(20, 20)
        .max_pixels(250)
        .min_width(10)
        .num_width_trials(3)
        .take_all_images(true)
        .build();
    let mut parts = vec![Part::new("a", 15, 10), Part::new("b", 15, 10)];

    match pack_mosaic(&mut parts, &cfg) {
        Err(MosaicError::NoFeasiblePacking { trials, parts }) => {
            assert_eq!(trials, 3);
            assert_eq!(parts, 2);
        }
        other => panic!("expected NoFeasiblePacking, got {:?}", other.map(|l| l.pixels)),
    }
}

#[test]
fn leftovers_are_dropped_when_not_taking_all_images() {
    // Same shape as the budget test, but dropping is allowed: the later of the
    // two equal-area parts is set aside and the rest packs within budget.
    let cfg = MosaicConfig::builder()
        .with_max_dimensions(20, 20)
        .max_pixels(250)
        .min_width(10)
        .num_width_trials(3)
        .take_all_images(false)
        .build();
    let mut parts = vec![Part::new("a", 15, 10), Part::new("b", 15, 10)];

    let layout = pack_mosaic(&mut parts, &cfg).expect("feasible after dropping");
    assert_eq!(layout.leftovers, vec!["b".to_string()]);
    assert_eq!(layout.frames.len(), 1);
    assert_eq!(layout.frames[0].key, "a");
    assert_eq!(layout.pixels, 150);
    assert!(layout.pixels <= cfg.max_pixels);
}

#[test]
fn committed_positions_match_the_reported_frames() {
    let cfg = MosaicConfig::builder()
        .with_max_dimensions(64, 64)
        .max_pixels(4096)
        .min_width(16)
        .num_width_trials(4)
        .take_all_images(true)
        .build();
    let mut parts = vec![
        Part::new("a", 20, 10),
        Part::new("b", 12, 8),
        Part::new("c", 7, 15),
    ];

    let layout = pack_mosaic(&mut parts, &cfg).expect("feasible");
    assert!(disjoint(&layout.frames));
    assert_eq!(layout.frames.len(), parts.len());
    for (part, frame) in parts.iter().zip(layout.frames.iter()) {
        assert_eq!(part.key(), frame.key);
        assert_eq!(part.placement(), frame.rect);
        assert!(frame.rect.x + frame.rect.w <= layout.width);
        assert!(frame.rect.y + frame.rect.h <= layout.height);
    }
    assert_eq!(layout.pixels, (layout.width as u64) * (layout.height as u64));
    assert!(layout.pixels <= cfg.max_pixels);
}

#[test]
fn unplaceable_part_fails_the_run_either_way() {
    // Taller than the shared height bound, so no trial width can hold it.
    let take_all = MosaicConfig::builder()
        .with_max_dimensions(100, 20)
        .max_pixels(100_000)
        .min_width(10)
        .num_width_trials(4)
        .take_all_images(true)
        .build();
    let mut parts = vec![Part::new("tall", 10, 50)];
    assert!(matches!(
        pack_mosaic(&mut parts, &take_all),
        Err(MosaicError::NoFeasiblePacking { .. })
    ));

    // Without take_all the only part is set aside, which still leaves nothing
    // to pack: the run fails rather than returning an empty layout.
    let drop_allowed = MosaicConfigBuilder::new()
        .with_max_dimensions(100, 20)
        .max_pixels(100_000)
        .min_width(10)
        .num_width_trials(4)
        .take_all_images(false)
        .build();
    let mut parts = vec![Part::new("tall", 10, 50)];
    assert!(matches!(
        pack_mosaic(&mut parts, &drop_allowed),
        Err(MosaicError::NoFeasiblePacking { .. })
    ));
}

#[test]
fn empty_input_is_an_error_for_the_driver() {
    let cfg = MosaicConfig::default();
    let mut parts: Vec<Part> = Vec::new();
    assert!(matches!(
        pack_mosaic(&mut parts, &cfg),
        Err(MosaicError::Empty)
    ));
}

#[test]
fn trial_widths_are_evenly_spaced_and_ascending() {
    let cfg = MosaicConfig::builder()
        .with_max_dimensions(20, 20)
        .min_width(10)
        .num_width_trials(3)
        .build();
    assert_eq!(trial_widths(&cfg), vec![10, 15, 20]);
}

#[test]
fn single_trial_uses_the_maximum_width() {
    let cfg = MosaicConfig::builder()
        .with_max_dimensions(100, 100)
        .min_width(10)
        .num_width_trials(1)
        .build();
    assert_eq!(trial_widths(&cfg), vec![100]);

    let degenerate = MosaicConfig::builder()
        .with_max_dimensions(64, 64)
        .min_width(64)
        .num_width_trials(5)
        .build();
    assert_eq!(trial_widths(&degenerate), vec![64]);
}

#[test]
fn duplicate_trial_widths_are_collapsed() {
    let cfg = MosaicConfig::builder()
        .with_max_dimensions(12, 12)
        .min_width(10)
        .num_width_trials(5)
        .build();
    assert_eq!(trial_widths(&cfg), vec![10, 11, 12]);
}

#[test]
fn pack_mosaic_sizes_clamps_and_packs() {
    let cfg = MosaicConfig::builder()
        .with_max_dimensions(32, 32)
        .max_pixels(1024)
        .min_width(8)
        .num_width_trials(4)
        .take_all_images(true)
        .build();

    // 100x10 is clipped to the 32-wide cap at construction, so it packs.
    let layout = pack_mosaic_sizes(vec![("banner", 100, 10), ("icon", 8, 8)], &cfg)
        .expect("feasible after clamping");
    let banner = &layout.frames[0];
    assert_eq!(banner.rect.w, 32);
    assert_eq!(banner.rect.h, 10);
    assert!(layout.pixels <= 1024);
}

#[test]
fn full_grid_has_unit_occupancy() {
    let cfg = MosaicConfig::builder()
        .with_max_dimensions(20, 20)
        .max_pixels(400)
        .min_width(20)
        .num_width_trials(1)
        .take_all_images(true)
        .build();
    let mut parts: Vec<Part> = (0..4).map(|i| Part::new(format!("p{}", i), 10, 10)).collect();

    let layout = pack_mosaic(&mut parts, &cfg).expect("feasible");
    let stats = layout.stats();
    assert_eq!(stats.num_parts, 4);
    assert_eq!(stats.num_leftovers, 0);
    assert_eq!(stats.used_part_area, 400);
    assert_eq!(stats.mosaic_area, 400);
    assert!((stats.occupancy - 1.0).abs() < 1e-9);
    assert_eq!(stats.wasted_area(), 0);
}
