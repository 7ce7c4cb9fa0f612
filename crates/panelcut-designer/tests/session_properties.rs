//! Property tests over random cut sequences.

use panelcut_core::Polygon;
use panelcut_designer::{CutOutcome, EditorKey, EditorSession, InputEvent};
use panelcut_settings::{EditorConfig, ModeKind};
use proptest::prelude::*;

fn config() -> EditorConfig {
    EditorConfig {
        res_dpi: 25.4,
        panel_margin_mm: 2.0,
        mode: ModeKind::Knife,
        ..EditorConfig::default()
    }
}

fn total_area(session: &EditorSession) -> f64 {
    session.panels().map(|p| p.signed_area().abs()).sum()
}

prop_compose! {
    fn cut_step()(
        x in 0.0..210.0f64,
        y in 0.0..297.0f64,
        angle in -180.0..180.0f64,
    ) -> (f64, f64, f64) {
        (x, y, angle)
    }
}

proptest! {
    #[test]
    fn cuts_only_remove_area(steps in prop::collection::vec(cut_step(), 1..12)) {
        let mut session = EditorSession::new(config()).unwrap();
        let original: Vec<Polygon> = session.panels().cloned().collect();
        let mut area = total_area(&session);
        let mut applied = 0;

        for (x, y, angle) in steps {
            session.handle_event(InputEvent::SetAngle { degrees: angle }).unwrap();
            session.handle_event(InputEvent::PointerMove { x, y }).unwrap();
            let outcome = session.handle_event(InputEvent::Key { key: EditorKey::Apply }).unwrap();

            let new_area = total_area(&session);
            prop_assert!(new_area <= area + 1e-6);
            if outcome == CutOutcome::Applied {
                applied += 1;
            } else {
                prop_assert!((new_area - area).abs() < 1e-9);
            }
            area = new_area;

            for panel in session.panels() {
                prop_assert!(panel.len() >= 3);
                prop_assert!(panel.signed_area().abs() > 0.0);
            }
        }
        prop_assert_eq!(session.store().len(), 1 + applied);

        while session.can_undo() {
            session.handle_event(InputEvent::Key { key: EditorKey::Undo }).unwrap();
        }
        let restored: Vec<Polygon> = session.panels().cloned().collect();
        prop_assert_eq!(restored, original);
    }
}
