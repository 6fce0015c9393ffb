//! Placeholder rotation for empty article inputs
//!
//! While an input is empty its placeholder shows a random article title and
//! switches to another one every period. The timer is a deadline owned by the
//! rotator and polled by the event loop, so stopping it or dropping the input
//! leaves nothing running.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Well-known articles used as placeholder examples
pub const PLACEHOLDER_TITLES: &[&str] = &[
    "Albert Einstein",
    "Ancient Egypt",
    "Apollo 11",
    "Ada Lovelace",
    "Basketball",
    "Beyoncé",
    "Black hole",
    "Charles Darwin",
    "Chess",
    "Coffee",
    "Frida Kahlo",
    "Great Wall of China",
    "Jazz",
    "Leonardo da Vinci",
    "Marie Curie",
    "Mount Everest",
    "Nelson Mandela",
    "Octopus",
    "Pizza",
    "Roman Empire",
    "Shakespeare",
    "Solar System",
    "The Beatles",
    "Tokyo",
    "Volcano",
];

/// Pick a random title, avoiding `previous` so consecutive labels differ
pub fn random_title<R: Rng + ?Sized>(rng: &mut R, previous: Option<&str>) -> &'static str {
    let candidates: Vec<&'static str> = PLACEHOLDER_TITLES
        .iter()
        .copied()
        .filter(|title| Some(*title) != previous)
        .collect();

    candidates
        .choose(rng)
        .copied()
        .unwrap_or(PLACEHOLDER_TITLES[0])
}

/// Rotating placeholder label for one input
pub struct PlaceholderRotator {
    text: &'static str,
    period: Duration,
    next_rotation: Option<Instant>,
    rng: StdRng,
}

impl PlaceholderRotator {
    /// Start rotating with a freshly chosen label
    pub fn new(period: Duration, now: Instant) -> Self {
        Self::with_rng(period, now, StdRng::from_entropy())
    }

    pub fn with_rng(period: Duration, now: Instant, mut rng: StdRng) -> Self {
        let text = random_title(&mut rng, None);
        Self {
            text,
            period,
            next_rotation: Some(now + period),
            rng,
        }
    }

    pub fn text(&self) -> &str {
        self.text
    }

    pub fn is_running(&self) -> bool {
        self.next_rotation.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_rotation
    }

    /// Stop while the field has text, restart once it is empty again
    pub fn set_field_empty(&mut self, empty: bool, now: Instant) {
        if !empty {
            self.next_rotation = None;
        } else if self.next_rotation.is_none() {
            self.next_rotation = Some(now + self.period);
        }
    }

    /// Rotate the label if the period has elapsed
    ///
    /// Returns true when the label changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.next_rotation {
            Some(due) if now >= due => {
                self.text = random_title(&mut self.rng, Some(self.text));
                self.next_rotation = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}
