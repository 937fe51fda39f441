//! Card presets - what the gallery puts on screen
//!
//! A preset is rendered as markup: its config becomes `data-*` attributes
//! and the tilt runtime reads them back on discovery.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::primitives::{Easing, Scale, Transition};
use crate::tilt::TiltConfig;

const TITLES: &[&str] = &[
    "Aurora", "Basalt", "Cobalt", "Dune", "Ember", "Fjord", "Glacier", "Harbor",
    "Indigo", "Juniper", "Kelp", "Lumen", "Mesa", "Nimbus", "Onyx", "Prism",
];

const BACKGROUNDS: &[&str] = &[
    "linear-gradient(135deg, #3b82f6, #6366f1)",
    "linear-gradient(135deg, #22c55e, #16a34a)",
    "linear-gradient(135deg, #f97316, #db2777)",
    "linear-gradient(135deg, #0891b2, #164e63)",
    "linear-gradient(135deg, #7c3aed, #4c1d95)",
    "linear-gradient(135deg, #d4ac0d, #a93226)",
    "linear-gradient(135deg, #1e3a5f, #0f172a)",
];

/// Tilt ranges worth showing, in degrees
const MAX_TILTS: &[f64] = &[8.0, 10.0, 15.0, 15.0, 20.0, 25.0, 35.0];

#[derive(Debug, Clone, PartialEq)]
pub struct CardPreset {
    pub title: String,
    pub background: &'static str,
    pub config: TiltConfig,
    pub shadow: bool,
    pub parallax: bool,
}

impl CardPreset {
    pub fn new(title: impl Into<String>, background: &'static str, config: TiltConfig) -> Self {
        Self {
            title: title.into(),
            background,
            config,
            shadow: false,
            parallax: false,
        }
    }

    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn with_parallax(mut self, parallax: bool) -> Self {
        self.parallax = parallax;
        self
    }

    pub fn class(&self) -> &'static str {
        if self.shadow { "tilt-card tilt-shadow" } else { "tilt-card" }
    }

    /// `data-*` attribute values, in the order the runtime reads them
    pub fn max_tilt_attr(&self) -> String {
        format!("{}", self.config.max_tilt)
    }

    pub fn speed_attr(&self) -> String {
        format!("{}", self.config.speed_ms)
    }

    pub fn scale_attr(&self) -> String {
        format!("{}", self.config.scale.value())
    }

    pub fn glare_attr(&self) -> &'static str {
        bool_attr(self.config.glare)
    }

    pub fn reverse_attr(&self) -> &'static str {
        bool_attr(self.config.reverse)
    }

    pub fn describe(&self) -> String {
        let mut desc = self.config.describe();
        if self.shadow {
            desc.push_str(", shadow");
        }
        if self.parallax {
            desc.push_str(", parallax");
        }
        desc
    }
}

fn bool_attr(flag: bool) -> &'static str {
    if flag { "true" } else { "false" }
}

/// Random decks of presets
pub struct PresetSampler;

impl PresetSampler {
    pub fn random_config<R: Rng>(rng: &mut R) -> TiltConfig {
        let scales = Scale::VOCABULARY;
        let easings = Easing::VOCABULARY;
        let durations = Transition::DURATIONS;
        TiltConfig::default()
            .with_max_tilt(MAX_TILTS[rng.random_range(0..MAX_TILTS.len())])
            .with_speed(durations[rng.random_range(0..durations.len())])
            .with_scale(scales[rng.random_range(0..scales.len())])
            .with_glare(rng.random_bool(0.5))
            .with_reverse(rng.random_bool(0.2))
            .with_easing(easings[rng.random_range(0..easings.len())].clone())
    }

    pub fn random_preset<R: Rng>(rng: &mut R, title: &str) -> CardPreset {
        let background = BACKGROUNDS[rng.random_range(0..BACKGROUNDS.len())];
        CardPreset::new(title, background, Self::random_config(rng))
            .with_shadow(rng.random_bool(0.5))
            .with_parallax(rng.random_bool(0.6))
    }

    /// `count` presets with distinct titles (titles repeat past the list)
    pub fn deck<R: Rng>(rng: &mut R, count: usize) -> Vec<CardPreset> {
        let offset = rng.random_range(0..TITLES.len());
        (0..count)
            .map(|i| {
                let title = TITLES[(offset + i) % TITLES.len()];
                Self::random_preset(rng, title)
            })
            .collect()
    }
}

/// Entropy-seeded rng; falls back to the clock if the platform source fails
pub fn fresh_rng() -> SmallRng {
    let mut buf = [0u8; 32];
    match getrandom::fill(&mut buf) {
        Ok(()) => SmallRng::from_seed(buf),
        Err(e) => {
            log::warn!("getrandom failed ({e}), seeding from clock");
            SmallRng::seed_from_u64(js_sys::Date::now().to_bits())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn deck_has_distinct_titles() {
        let deck = PresetSampler::deck(&mut seeded(), 6);
        assert_eq!(deck.len(), 6);
        let mut titles: Vec<&str> = deck.iter().map(|p| p.title.as_str()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn same_seed_same_deck() {
        let a = PresetSampler::deck(&mut seeded(), 4);
        let b = PresetSampler::deck(&mut seeded(), 4);
        assert_eq!(a, b);
    }

    #[test]
    fn sampled_configs_come_from_vocabulary() {
        let mut rng = seeded();
        for _ in 0..50 {
            let c = PresetSampler::random_config(&mut rng);
            assert!(MAX_TILTS.contains(&c.max_tilt));
            assert!(Transition::DURATIONS.contains(&c.speed_ms));
            assert!(Scale::VOCABULARY.contains(&c.scale));
        }
    }

    #[test]
    fn attributes_round_trip_through_config() {
        let preset = CardPreset::new(
            "Test",
            BACKGROUNDS[0],
            TiltConfig::default()
                .with_max_tilt(25.0)
                .with_speed(500)
                .with_scale(Scale::new(1.05))
                .with_glare(true),
        );
        let attrs = [
            ("data-max-tilt", preset.max_tilt_attr()),
            ("data-speed", preset.speed_attr()),
            ("data-scale", preset.scale_attr()),
            ("data-glare", preset.glare_attr().to_string()),
            ("data-reverse", preset.reverse_attr().to_string()),
        ];
        // Programmatic options that the markup must override
        let options = TiltConfig::default().with_reverse(true).with_max_tilt(5.0);
        let read = options.with_attributes(|name| {
            attrs.iter().find(|(k, _)| *k == name).map(|(_, v)| v.clone())
        });
        assert_eq!(read, preset.config);
    }

    #[test]
    fn class_and_describe() {
        let preset = CardPreset::new("X", BACKGROUNDS[1], TiltConfig::default())
            .with_shadow(true)
            .with_parallax(true);
        assert_eq!(preset.class(), "tilt-card tilt-shadow");
        assert_eq!(preset.describe(), "15° range, smooth, shadow, parallax");
    }
}
