//! Mood stickers: a sticker from the configured set whose file unique id matches a mood gets that
//! mood's reaction instead of the default.

use std::env;

use poop_core::{Sticker, POOP_EMOJI};

pub const DEFAULT_STICKER_SET: &str = "Poopers2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Struggle,
    Esnoopi,
    Jurassic,
    Girly,
    Scared,
    Sus,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Struggle,
        Mood::Esnoopi,
        Mood::Jurassic,
        Mood::Girly,
        Mood::Scared,
        Mood::Sus,
    ];

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Struggle => "😢",
            Mood::Esnoopi => "🎉",
            Mood::Jurassic => "🏆",
            Mood::Girly => "💅",
            Mood::Scared => "🫡",
            Mood::Sus => "🤨",
        }
    }

    /// Env var holding this mood's sticker file unique id.
    pub fn env_key(self) -> &'static str {
        match self {
            Mood::Struggle => "STICKER_STRUGGLE",
            Mood::Esnoopi => "STICKER_ESNOOPI",
            Mood::Jurassic => "STICKER_JURASSIC",
            Mood::Girly => "STICKER_GIRLY",
            Mood::Scared => "STICKER_SCARED",
            Mood::Sus => "STICKER_SUS",
        }
    }

    pub fn default_sticker_id(self) -> &'static str {
        match self {
            Mood::Struggle => "AgADOxkAAgTYWVE",
            Mood::Esnoopi => "AgADRhoAAhq7WVE",
            Mood::Jurassic => "AgADQRcAAu99WVE",
            Mood::Girly => "AgADrxkAAtHnYFE",
            Mood::Scared => "AgADfBkAAgwIYVE",
            Mood::Sus => "AgADcxgAAvVG0FE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerMoods {
    pub set_name: String,
    pub stickers: Vec<(Mood, String)>,
}

impl Default for StickerMoods {
    fn default() -> Self {
        Self {
            set_name: DEFAULT_STICKER_SET.to_string(),
            stickers: Mood::ALL
                .iter()
                .map(|&mood| (mood, mood.default_sticker_id().to_string()))
                .collect(),
        }
    }
}

impl StickerMoods {
    /// STICKER_SET and STICKER_<MOOD>, each falling back to the built-in default.
    pub fn from_env() -> Self {
        let set_name = env::var("STICKER_SET").unwrap_or_else(|_| DEFAULT_STICKER_SET.to_string());
        let stickers = Mood::ALL
            .iter()
            .map(|&mood| {
                let id = env::var(mood.env_key())
                    .unwrap_or_else(|_| mood.default_sticker_id().to_string());
                (mood, id)
            })
            .collect();
        Self { set_name, stickers }
    }

    pub fn mood_of(&self, sticker: &Sticker) -> Option<Mood> {
        if sticker.emoji.as_deref() != Some(POOP_EMOJI) {
            return None;
        }
        if sticker.set_name.as_deref() != Some(self.set_name.as_str()) {
            return None;
        }
        self.stickers
            .iter()
            .find(|(_, id)| *id == sticker.file_unique_id)
            .map(|(mood, _)| *mood)
    }

    /// Reaction for a qualifying message: the mood emoji, or the poop emoji.
    pub fn reaction_for(&self, sticker: Option<&Sticker>) -> &'static str {
        sticker
            .and_then(|s| self.mood_of(s))
            .map_or(POOP_EMOJI, Mood::emoji)
    }
}
