//! Main bar arbitration tests.
//!
//! Drives the arbiter through `StatusBars` with providers whose visibility
//! is switched directly.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use hudbars_bars::{
    BarFrame, RecordingHost, SlotAssignment, StatusBars, VisibilityFlags, resolve_slots,
};
use hudbars_core::event::PLAYER_ENTERING_WORLD;
use hudbars_core::{
    AnchorPoint, BarSettings, BarValues, DataProvider, FillDirection, GameEvent, MainBarRole,
};
use hudbars_providers::ProviderRegistry;

// ============================================================================
// Fixtures
// ============================================================================

struct ToggleProvider {
    name: &'static str,
    visible: AtomicBool,
    updates: AtomicUsize,
}

impl ToggleProvider {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            visible: AtomicBool::new(false),
            updates: AtomicUsize::new(0),
        }
    }

    fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::SeqCst);
    }

    fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

impl DataProvider for ToggleProvider {
    fn name(&self) -> &str {
        self.name
    }

    fn should_be_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    fn update(&self, _event: &GameEvent, values: &mut BarValues) {
        self.updates.fetch_add(1, Ordering::SeqCst);
        *values = BarValues::new(0.0, 50.0, 200.0);
    }

    fn data_text(&self) -> String {
        self.name.to_string()
    }
}

struct Fixture {
    bars: StatusBars,
    experience: Arc<ToggleProvider>,
    reputation: Arc<ToggleProvider>,
    honor: Arc<ToggleProvider>,
    azerite: Arc<ToggleProvider>,
}

impl Fixture {
    fn new(settings: BarSettings) -> Self {
        let experience = Arc::new(ToggleProvider::new("experience"));
        let reputation = Arc::new(ToggleProvider::new("reputation"));
        let honor = Arc::new(ToggleProvider::new("honor"));
        let azerite = Arc::new(ToggleProvider::new("azerite"));

        let mut providers = ProviderRegistry::new();
        providers.register(experience.clone());
        providers.register(reputation.clone());
        providers.register(honor.clone());
        providers.register(azerite.clone());

        Self {
            bars: StatusBars::new(providers, settings).unwrap(),
            experience,
            reputation,
            honor,
            azerite,
        }
    }

    fn set(&self, exp: bool, ap: bool, honor: bool, rep: bool) {
        self.experience.set_visible(exp);
        self.azerite.set_visible(ap);
        self.honor.set_visible(honor);
        self.reputation.set_visible(rep);
    }

    fn arbitrate(&mut self) -> SlotAssignment {
        self.bars
            .update_main_bar_visibility(&GameEvent::new(PLAYER_ENTERING_WORLD))
            .unwrap()
    }

    fn frame(&self, role: MainBarRole) -> &BarFrame {
        self.bars.bars().main_bar(role).unwrap().frame()
    }

    fn shown(&self) -> Vec<MainBarRole> {
        MainBarRole::all()
            .iter()
            .copied()
            .filter(|role| self.frame(*role).shown)
            .collect()
    }
}

/// The documented cascade, written out branch by branch.
fn expected(exp: bool, ap: bool, honor: bool, rep: bool) -> SlotAssignment {
    use MainBarRole::{Azerite, Experience, Honor, Reputation};

    let (right, left) = if exp {
        let left = if ap {
            Some(Azerite)
        } else if honor {
            Some(Honor)
        } else if rep {
            Some(Reputation)
        } else {
            None
        };
        (Some(Experience), left)
    } else if ap {
        let left = if honor {
            Some(Honor)
        } else if rep {
            Some(Reputation)
        } else {
            None
        };
        (Some(Azerite), left)
    } else if honor {
        (Some(Honor), if rep { Some(Reputation) } else { None })
    } else if rep {
        (Some(Reputation), None)
    } else {
        (None, None)
    };

    SlotAssignment { right, left }
}

fn all_combinations() -> impl Iterator<Item = (bool, bool, bool, bool)> {
    (0..16u8).map(|bits| (bits & 8 != 0, bits & 4 != 0, bits & 2 != 0, bits & 1 != 0))
}

// ============================================================================
// Slot Selection
// ============================================================================

#[test]
fn test_all_sixteen_combinations() {
    let mut fixture = Fixture::new(BarSettings::default());

    for (exp, ap, honor, rep) in all_combinations() {
        fixture.set(exp, ap, honor, rep);
        let slots = fixture.arbitrate();
        assert_eq!(
            slots,
            expected(exp, ap, honor, rep),
            "exp={exp} ap={ap} honor={honor} rep={rep}"
        );

        let pure = resolve_slots(&VisibilityFlags {
            experience: exp,
            reputation: rep,
            honor,
            azerite: ap,
        });
        assert_eq!(pure, slots);
    }
}

#[test]
fn test_documented_example() {
    let mut fixture = Fixture::new(BarSettings::default());
    fixture.set(true, false, true, true);
    let slots = fixture.arbitrate();
    assert_eq!(slots.right, Some(MainBarRole::Experience));
    assert_eq!(slots.left, Some(MainBarRole::Honor));
}

#[test]
fn test_experience_never_left() {
    let mut fixture = Fixture::new(BarSettings::default());
    for (exp, ap, honor, rep) in all_combinations() {
        fixture.set(exp, ap, honor, rep);
        let slots = fixture.arbitrate();
        assert_ne!(slots.left, Some(MainBarRole::Experience));
        if exp {
            assert_eq!(slots.right, Some(MainBarRole::Experience));
        }
    }
}

#[test]
fn test_at_most_two_shown() {
    let mut fixture = Fixture::new(BarSettings::default());
    for (exp, ap, honor, rep) in all_combinations() {
        fixture.set(exp, ap, honor, rep);
        let slots = fixture.arbitrate();

        let shown = fixture.shown();
        assert!(shown.len() <= 2);
        assert_eq!(shown.len(), slots.len());
        for role in MainBarRole::all() {
            assert_eq!(fixture.frame(*role).shown, slots.contains(*role));
        }
        if slots.right.is_some() && slots.left.is_some() {
            assert_ne!(slots.right, slots.left);
        }
    }
}

#[test]
fn test_third_visible_provider_is_hidden() {
    let mut fixture = Fixture::new(BarSettings::default());
    fixture.set(true, true, true, true);
    fixture.arbitrate();

    assert!(fixture.honor.should_be_visible());
    assert!(!fixture.frame(MainBarRole::Honor).shown);
    assert!(!fixture.frame(MainBarRole::Reputation).shown);
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_split_widths() {
    let settings = BarSettings {
        width: 500.0,
        spacing: 4.0,
        ..BarSettings::default()
    };
    let mut fixture = Fixture::new(settings);
    fixture.set(true, true, false, false);
    fixture.arbitrate();

    let right = fixture.frame(MainBarRole::Experience);
    let left = fixture.frame(MainBarRole::Azerite);
    assert_eq!(right.width, 248.0);
    assert_eq!(left.width, 248.0);
    assert_eq!(right.fill, FillDirection::Forward);
    assert_eq!(left.fill, FillDirection::Reversed);
    assert_eq!(right.point.as_ref().unwrap().point, AnchorPoint::Right);
    assert_eq!(left.point.as_ref().unwrap().point, AnchorPoint::Left);
}

#[test]
fn test_single_bar_full_width() {
    let mut fixture = Fixture::new(BarSettings::default());
    fixture.set(false, false, false, true);
    fixture.arbitrate();

    let frame = fixture.frame(MainBarRole::Reputation);
    assert!(frame.shown);
    assert_eq!(frame.width, 500.0);
    assert_eq!(frame.fill, FillDirection::Forward);
}

#[test]
fn test_slot_change_resets_fill_direction() {
    let mut fixture = Fixture::new(BarSettings::default());

    fixture.set(true, false, true, false);
    fixture.arbitrate();
    assert_eq!(fixture.frame(MainBarRole::Honor).fill, FillDirection::Reversed);

    fixture.set(false, false, true, false);
    fixture.arbitrate();
    let honor = fixture.frame(MainBarRole::Honor);
    assert_eq!(honor.fill, FillDirection::Forward);
    assert_eq!(honor.width, 500.0);
    assert_eq!(honor.text_point.as_ref().unwrap().point, AnchorPoint::Left);
}

// ============================================================================
// Resource Guard & Idempotence
// ============================================================================

#[test]
fn test_only_slotted_providers_are_updated() {
    let mut fixture = Fixture::new(BarSettings::default());
    fixture.set(true, true, true, true);
    fixture.arbitrate();

    assert_eq!(fixture.experience.updates(), 1);
    assert_eq!(fixture.azerite.updates(), 1);
    assert_eq!(fixture.honor.updates(), 0);
    assert_eq!(fixture.reputation.updates(), 0);
}

#[test]
fn test_arbitration_is_idempotent() {
    let mut fixture = Fixture::new(BarSettings::default());
    fixture.set(false, true, false, true);

    let first = fixture.arbitrate();
    let mut host = RecordingHost::new();
    fixture.bars.render(&mut host);
    let frames: Vec<BarFrame> = MainBarRole::all()
        .iter()
        .map(|r| host.bar(r.bar_name()).unwrap().clone())
        .collect();

    let second = fixture.arbitrate();
    let mut host = RecordingHost::new();
    fixture.bars.render(&mut host);

    assert_eq!(first, second);
    for (role, before) in MainBarRole::all().iter().zip(&frames) {
        assert_eq!(host.bar(role.bar_name()).unwrap(), before);
    }
}
