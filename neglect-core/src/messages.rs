//! Popup text selection.
//!
//! Each category owns a fixed bank of templates, optionally keyed by the
//! emotion the plant is in. Selection is uniform within the bank; when the
//! emotion has no dedicated entries, the category's generic bank is used.
//! `{name}` in a template is replaced with the plant's name.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::types::PlantEmotion;

/// What a message is responding to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    /// The user gave attention.
    Attention,
    /// The user watered the plant.
    Watering,
    /// The plant died of neglect.
    Death,
    /// Unprompted chatter from a healthy plant.
    IdleChatter,
    /// The plant was given a new name.
    RenameConfirmation,
}

type Bank = &'static [&'static str];

const ATTENTION_LOVED: Bank = &[
    "{name} feels so incredibly loved right now! You're amazing! 💖",
    "{name}'s heart is overflowing with plant love! 🥰",
    "Best feeling in the whole greenhouse. Thank you! - {name} ✨",
];
const ATTENTION_GRATEFUL: Bank = &[
    "{name} is so grateful for your care! 🙏",
    "Thank you for always being there for {name}! 💚",
    "Your attention means everything to {name}! 🌟",
];
const ATTENTION_EXCITED: Bank = &[
    "YES! More attention for {name}! 🎉",
    "This is the BEST! {name} is practically bouncing! 🤩",
    "You make {name} so happy it could dance! 💃",
];
const ATTENTION_HAPPY: Bank = &[
    "Aww, thank you! {name} feels so loved! 💚",
    "You actually care! {name}'s faith in humanity is restored! ✨",
    "This is the attention {name} deserves. More please! 🥰",
];
const ATTENTION_GENERIC: Bank = &[
    "Finally, someone who understands {name}'s needs! 🌟",
    "Best plant parent ever! (For now...) - {name} 😊",
    "{name}'s leaves are glowing with happiness! 🌿",
];

const WATERING_LOVED: Bank = &[
    "{name} is absolutely refreshed! Liquid love! 💧💖",
    "Ahhh! {name} feels so hydrated and happy! 🌊",
    "Exactly what {name} needed. You're the best! 💦",
];
const WATERING_GRATEFUL: Bank = &[
    "{name} is so grateful for this drink! 🙏💧",
    "Thank you for remembering {name} needs water! 🌊",
    "This water is giving {name} life. Literally! 💦🌿",
];
const WATERING_EXCITED: Bank = &[
    "WATER! {name} is so excited! Glub glub glub! 💧🎉",
    "Best water ever! {name} is practically sparkling! ✨💦",
    "Perfect hydration! {name} is thrilled! 🌊😊",
];
const WATERING_HAPPY: Bank = &[
    "Mmm, delicious water! {name} feels refreshed! 💧😊",
    "You remembered {name} needs water! Faith restored! 🌊",
    "The hydration {name} deserves. More please! 💦🥰",
];
const WATERING_GENERIC: Bank = &[
    "Finally, someone who knows {name} needs proper hydration! 💧",
    "This water is perfect! - {name} 😊",
    "{name}'s roots are dancing with joy! 🌿💦",
];

const DEATH_DEVASTATED: Bank = &[
    "I can't believe you let {name} die... I trusted you... 💔",
    "This is the worst day of {name}'s plant life... 😭",
    "{name} is emotionally destroyed. Literally. 🥀",
];
const DEATH_BETRAYED: Bank = &[
    "I thought we had something special... {name} is heartbroken... 😢",
    "You've broken {name}'s little plant heart... 💔",
    "{name} feels so betrayed right now... 😞",
];
const DEATH_ANGRY: Bank = &[
    "{name} is FURIOUS! How could you do this?! 😡",
    "This is plant abuse and {name} is MAD! 🤬",
    "{name} is so angry it could wilt. Oh wait. 😤",
];
const DEATH_GENERIC: Bank = &[
    "Wow, you left {name}... again. 🥀",
    "I see how it is. {name} is just pixels to you.",
    "Another day, another abandonment. Classic human behavior, says {name}.",
];

const IDLE_CHATTER: Bank = &[
    "Hi! I'm {name} and I'm feeling so vibrant today! ✨",
    "{name} here! Life is beautiful when you're a plant! 🌸",
    "It's me, {name}! I love being alive! 💚",
    "{name} speaking. Good day to photosynthesize! ☀️",
];

const RENAME_CONFIRMATION: Bank = &[
    "Yay! I love my new name {name}! ✨",
    "{name} is such a beautiful name! Thank you! 💚",
    "I feel like a new plant with the name {name}! 🌿",
    "{name}... I'm going to practice saying that! 😊",
];

/// The template bank for a category and emotion, after fallback.
#[must_use]
pub fn bank_for(category: MessageCategory, emotion: PlantEmotion) -> &'static [&'static str] {
    use MessageCategory as C;
    use PlantEmotion as E;

    match (category, emotion) {
        (C::Attention, E::Loved) => ATTENTION_LOVED,
        (C::Attention, E::Grateful) => ATTENTION_GRATEFUL,
        (C::Attention, E::Excited) => ATTENTION_EXCITED,
        (C::Attention, E::Happy) => ATTENTION_HAPPY,
        (C::Attention, _) => ATTENTION_GENERIC,

        (C::Watering, E::Loved) => WATERING_LOVED,
        (C::Watering, E::Grateful) => WATERING_GRATEFUL,
        (C::Watering, E::Excited) => WATERING_EXCITED,
        (C::Watering, E::Happy) => WATERING_HAPPY,
        (C::Watering, _) => WATERING_GENERIC,

        (C::Death, E::Devastated) => DEATH_DEVASTATED,
        (C::Death, E::Betrayed) => DEATH_BETRAYED,
        (C::Death, E::Angry) => DEATH_ANGRY,
        (C::Death, _) => DEATH_GENERIC,

        (C::IdleChatter, _) => IDLE_CHATTER,
        (C::RenameConfirmation, _) => RENAME_CONFIRMATION,
    }
}

/// Pick a message uniformly from the matching bank and fill in the name.
pub fn select_message<R: Rng + ?Sized>(
    category: MessageCategory,
    emotion: PlantEmotion,
    name: &str,
    rng: &mut R,
) -> String {
    bank_for(category, emotion)
        .choose(rng)
        .map(|template| template.replace("{name}", name))
        .unwrap_or_default()
}
