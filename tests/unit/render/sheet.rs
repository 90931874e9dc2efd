use super::*;

#[test]
fn default_sheet_dimensions() {
    let sheet = compose(&SheetConfig::default()).unwrap();
    assert_eq!((sheet.width(), sheet.height()), (512, 32));
}

#[test]
fn each_slot_holds_its_frame() {
    let cfg = SheetConfig::default();
    let sheet = compose(&cfg).unwrap();
    for i in [0u32, 3, 8, 15] {
        let frame = render_frame(&cfg, FrameIndex(i)).unwrap();
        for y in 0..cfg.frame_height {
            for x in 0..cfg.frame_width {
                assert_eq!(
                    sheet.pixel(i * cfg.frame_width + x, y),
                    frame.pixel(x, y),
                    "frame {i} at ({x},{y})"
                );
            }
        }
    }
}

#[test]
fn parallel_matches_sequential() {
    let cfg = SheetConfig::default();
    let seq = compose(&cfg).unwrap();
    let par = compose_with(
        &cfg,
        &ComposeOpts {
            parallel: true,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq.as_raw(), par.as_raw());
}

#[test]
fn zero_threads_is_rejected() {
    let err = compose_with(
        &SheetConfig::default(),
        &ComposeOpts {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, SpriteError::Validation(_)));
}

#[test]
fn invalid_config_fails_before_rendering() {
    let cfg = SheetConfig {
        frame_count: 0,
        ..SheetConfig::default()
    };
    assert!(compose(&cfg).is_err());
}

#[test]
fn shorter_sheets_use_leading_frames() {
    let cfg = SheetConfig {
        frame_count: 4,
        ..SheetConfig::default()
    };
    let sheet = compose(&cfg).unwrap();
    assert_eq!(sheet.width(), 128);
    let full = compose(&SheetConfig::default()).unwrap();
    for y in 0..32 {
        for x in 0..128 {
            assert_eq!(sheet.pixel(x, y), full.pixel(x, y));
        }
    }
}
