//! Vibe level cycle and the timed flag writes that follow each click

use crate::constants::{PHOTOS, PULSE_DURATION, QUOTES, QUOTE_DURATION};
use crate::types::VibeState;
use egui::Color32;
use rand::Rng;
use std::time::Instant;
use tracing::debug;

pub const VIBE_STATES: [VibeState; 6] = [
    VibeState {
        label: "START",
        color: Color32::from_rgb(0x33, 0x33, 0x33),
        glow: Color32::TRANSPARENT,
    },
    VibeState {
        label: "FLOW",
        color: Color32::from_rgb(0x63, 0x66, 0xf1),
        glow: Color32::from_rgba_premultiplied(30, 31, 73, 77), // indigo-500 @ 30%
    },
    VibeState {
        label: "ZONE",
        color: Color32::from_rgb(0x8b, 0x5c, 0xf6),
        glow: Color32::from_rgba_premultiplied(56, 37, 98, 102), // violet-500 @ 40%
    },
    VibeState {
        label: "DEEP",
        color: Color32::from_rgb(0xa8, 0x55, 0xf7),
        glow: Color32::from_rgba_premultiplied(84, 43, 124, 128), // purple-500 @ 50%
    },
    VibeState {
        label: "PEAK",
        color: Color32::from_rgb(0xd9, 0x46, 0xef),
        glow: Color32::from_rgba_premultiplied(130, 42, 143, 153), // fuchsia-500 @ 60%
    },
    VibeState {
        label: "TRANSCEND",
        color: Color32::from_rgb(0xf4, 0x3f, 0x5e),
        glow: Color32::from_rgba_premultiplied(171, 44, 66, 179), // rose-500 @ 70%
    },
];

/// Everything the view reads. Only `VibeController` mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub level: usize,
    pub is_animating: bool,
    pub is_quote_visible: bool,
    pub quote: &'static str,
    pub photo: &'static str,
    pub user_name: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            level: 0,
            is_animating: false,
            is_quote_visible: false,
            quote: QUOTES[0],
            photo: PHOTOS[0],
            user_name: None,
        }
    }
}

impl ViewState {
    pub fn current_vibe(&self) -> &'static VibeState {
        &VIBE_STATES[self.level]
    }

    /// 0, 20, 40, 60, 80, 100 for levels 0..=5
    pub fn progress_percent(&self) -> u32 {
        (self.level * 100 / (VIBE_STATES.len() - 1)) as u32
    }

    pub fn is_flow_mode(&self) -> bool {
        self.level >= 1
    }

    /// Greeting line, only when a non-empty name was loaded
    pub fn greeting(&self) -> Option<String> {
        self.user_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| format!("Hello {}", name))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FlagWrite {
    StopAnimating,
    HideQuote,
}

#[derive(Clone, Copy, Debug)]
struct PendingWrite {
    due: Instant,
    write: FlagWrite,
    click: u64,
}

/// Owns the view state and the delayed writes scheduled by clicks.
///
/// Scheduled writes are never cancelled: each one lands when its deadline
/// passes, so for overlapping clicks the latest write to a flag wins. With
/// `supersede_stale` set, writes from an earlier click are dropped instead.
pub struct VibeController {
    state: ViewState,
    pending: Vec<PendingWrite>,
    clicks: u64,
    supersede_stale: bool,
}

impl VibeController {
    pub fn new(supersede_stale: bool) -> Self {
        Self {
            state: ViewState::default(),
            pending: Vec::new(),
            clicks: 0,
            supersede_stale,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_user_name(&mut self, name: Option<String>) {
        self.state.user_name = name;
    }

    /// Handle one click on the indicator
    pub fn on_vibe_activated<R: Rng>(&mut self, now: Instant, rng: &mut R) {
        self.clicks += 1;

        self.state.is_animating = true;
        self.state.level = (self.state.level + 1) % VIBE_STATES.len();
        self.state.quote = QUOTES[rng.random_range(0..QUOTES.len())];
        self.state.photo = PHOTOS[rng.random_range(0..PHOTOS.len())];
        self.state.is_quote_visible = true;

        self.pending.push(PendingWrite {
            due: now + PULSE_DURATION,
            write: FlagWrite::StopAnimating,
            click: self.clicks,
        });
        self.pending.push(PendingWrite {
            due: now + QUOTE_DURATION,
            write: FlagWrite::HideQuote,
            click: self.clicks,
        });

        debug!(
            level = self.state.level,
            label = self.state.current_vibe().label,
            photo = self.state.photo,
            pending = self.pending.len(),
            "Vibe activated"
        );
    }

    /// Apply every write due at `now`. Returns true if anything was applied.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.pending.iter().all(|p| p.due > now) {
            return false;
        }

        // Stable sort keeps scheduling order for equal deadlines
        self.pending.sort_by_key(|p| p.due);
        let split = self.pending.partition_point(|p| p.due <= now);
        let due: Vec<PendingWrite> = self.pending.drain(..split).collect();

        for p in due {
            if self.supersede_stale && p.click != self.clicks {
                debug!(write = ?p.write, click = p.click, latest = self.clicks, "Dropping stale write");
                continue;
            }
            match p.write {
                FlagWrite::StopAnimating => self.state.is_animating = false,
                FlagWrite::HideQuote => self.state.is_quote_visible = false,
            }
        }
        true
    }

    /// Earliest pending deadline, for scheduling the next repaint
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn click_n(ctrl: &mut VibeController, n: usize, now: Instant, rng: &mut StdRng) {
        for _ in 0..n {
            ctrl.on_vibe_activated(now, rng);
        }
    }

    #[test]
    fn initial_state() {
        let ctrl = VibeController::new(false);
        let s = ctrl.state();
        assert_eq!(s.level, 0);
        assert!(!s.is_animating);
        assert!(!s.is_quote_visible);
        assert_eq!(s.quote, QUOTES[0]);
        assert_eq!(s.photo, PHOTOS[0]);
        assert_eq!(s.current_vibe().label, "START");
        assert_eq!(s.progress_percent(), 0);
        assert!(!s.is_flow_mode());
        assert_eq!(s.greeting(), None);
        assert_eq!(ctrl.next_deadline(), None);
    }

    #[test]
    fn level_follows_click_count_mod_six() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctrl = VibeController::new(false);
        let t0 = Instant::now();
        for n in 1..=20 {
            ctrl.on_vibe_activated(t0, &mut rng);
            assert_eq!(ctrl.state().level, n % 6);
        }
    }

    #[test]
    fn six_clicks_complete_the_cycle() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut ctrl = VibeController::new(false);
        click_n(&mut ctrl, 6, Instant::now(), &mut rng);
        assert_eq!(ctrl.state().level, 0);
        assert_eq!(ctrl.state().current_vibe().label, "START");
        assert!(!ctrl.state().is_flow_mode());
    }

    #[test]
    fn one_click_is_flow_five_clicks_transcend() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctrl = VibeController::new(false);
        let t0 = Instant::now();

        ctrl.on_vibe_activated(t0, &mut rng);
        assert_eq!(ctrl.state().current_vibe().label, "FLOW");
        assert_eq!(ctrl.state().progress_percent(), 20);
        assert!(ctrl.state().is_flow_mode());

        click_n(&mut ctrl, 4, t0, &mut rng);
        assert_eq!(ctrl.state().current_vibe().label, "TRANSCEND");
        assert_eq!(ctrl.state().progress_percent(), 100);
    }

    #[test]
    fn progress_steps_by_twenty() {
        let expected = [0, 20, 40, 60, 80, 100];
        for (level, pct) in expected.iter().enumerate() {
            let state = ViewState {
                level,
                ..ViewState::default()
            };
            assert_eq!(state.progress_percent(), *pct);
            assert_eq!(state.is_flow_mode(), level >= 1);
        }
    }

    #[test]
    fn pulse_clears_after_300ms() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut ctrl = VibeController::new(false);
        let t0 = Instant::now();

        ctrl.on_vibe_activated(t0, &mut rng);
        assert!(ctrl.state().is_animating);

        assert!(!ctrl.tick(t0 + ms(299)));
        assert!(ctrl.state().is_animating);

        assert!(ctrl.tick(t0 + ms(300)));
        assert!(!ctrl.state().is_animating);
        assert!(ctrl.state().is_quote_visible);
        assert_eq!(ctrl.next_deadline(), Some(t0 + QUOTE_DURATION));
    }

    #[test]
    fn quote_hides_after_7000ms() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut ctrl = VibeController::new(false);
        let t0 = Instant::now();

        ctrl.on_vibe_activated(t0, &mut rng);
        assert!(ctrl.state().is_quote_visible);

        ctrl.tick(t0 + ms(6999));
        assert!(ctrl.state().is_quote_visible);

        ctrl.tick(t0 + ms(7000));
        assert!(!ctrl.state().is_quote_visible);
        assert!(!ctrl.state().is_animating);
        assert_eq!(ctrl.next_deadline(), None);
    }

    #[test]
    fn late_tick_applies_both_writes() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut ctrl = VibeController::new(false);
        let t0 = Instant::now();

        ctrl.on_vibe_activated(t0, &mut rng);
        ctrl.tick(t0 + ms(10_000));
        assert!(!ctrl.state().is_animating);
        assert!(!ctrl.state().is_quote_visible);
    }

    #[test]
    fn selections_stay_in_pools_and_vary() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ctrl = VibeController::new(false);
        let t0 = Instant::now();
        let mut quotes = HashSet::new();
        let mut photos = HashSet::new();

        for _ in 0..500 {
            ctrl.on_vibe_activated(t0, &mut rng);
            assert!(QUOTES.contains(&ctrl.state().quote));
            assert!(PHOTOS.contains(&ctrl.state().photo));
            quotes.insert(ctrl.state().quote);
            photos.insert(ctrl.state().photo);
        }

        assert_eq!(quotes.len(), QUOTES.len());
        assert_eq!(photos.len(), PHOTOS.len());
    }

    #[test]
    fn seeded_rng_gives_repeatable_picks() {
        let t0 = Instant::now();
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut ctrl = VibeController::new(false);
            (0..10)
                .map(|_| {
                    ctrl.on_vibe_activated(t0, &mut rng);
                    (ctrl.state().quote, ctrl.state().photo)
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn stale_hide_lands_on_later_click_by_default() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut ctrl = VibeController::new(false);
        let t0 = Instant::now();

        ctrl.on_vibe_activated(t0, &mut rng);
        ctrl.on_vibe_activated(t0 + ms(5000), &mut rng);

        // First click's hide fires while the second quote is showing
        ctrl.tick(t0 + ms(7000));
        assert!(!ctrl.state().is_quote_visible);

        // Second click's hide is still pending and writes false again
        assert_eq!(ctrl.next_deadline(), Some(t0 + ms(12_000)));
        ctrl.tick(t0 + ms(12_000));
        assert!(!ctrl.state().is_quote_visible);
    }

    #[test]
    fn stale_pulse_clear_cuts_later_pulse_short_by_default() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut ctrl = VibeController::new(false);
        let t0 = Instant::now();

        ctrl.on_vibe_activated(t0, &mut rng);
        ctrl.on_vibe_activated(t0 + ms(200), &mut rng);

        ctrl.tick(t0 + ms(300));
        assert!(!ctrl.state().is_animating);
    }

    #[test]
    fn supersede_stale_keeps_latest_click_visible() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut ctrl = VibeController::new(true);
        let t0 = Instant::now();

        ctrl.on_vibe_activated(t0, &mut rng);
        ctrl.on_vibe_activated(t0 + ms(200), &mut rng);

        ctrl.tick(t0 + ms(300));
        assert!(ctrl.state().is_animating);
        ctrl.tick(t0 + ms(500));
        assert!(!ctrl.state().is_animating);

        ctrl.tick(t0 + ms(7000));
        assert!(ctrl.state().is_quote_visible);
        ctrl.tick(t0 + ms(7200));
        assert!(!ctrl.state().is_quote_visible);
    }

    #[test]
    fn greeting_requires_non_empty_name() {
        let mut ctrl = VibeController::new(false);
        ctrl.set_user_name(Some(String::new()));
        assert_eq!(ctrl.state().greeting(), None);

        ctrl.set_user_name(Some("TestUser".to_string()));
        assert_eq!(ctrl.state().greeting().as_deref(), Some("Hello TestUser"));
    }
}
