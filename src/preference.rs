// Client preferences used to judge whether a destination is acceptable

use crate::destination::Destination;

/// The sub-preference an alternating preference currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Calm,
    Fun,
}

impl Mood {
    pub fn flipped(self) -> Self {
        match self {
            Mood::Calm => Mood::Fun,
            Mood::Fun => Mood::Calm,
        }
    }

    fn accepts(self, destination: &Destination) -> bool {
        match self {
            Mood::Calm => destination.is_calm(),
            Mood::Fun => destination.is_fun(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Preference {
    /// Accepts every destination.
    #[default]
    None,
    Calm,
    Fun,
    /// Behaves like the held mood until toggled.
    Alternating(Mood),
    /// Accepts a destination if any member does.
    CombinedOr(Vec<Preference>),
}

impl Preference {
    pub fn is_suitable(&self, destination: &Destination) -> bool {
        match self {
            Preference::None => true,
            Preference::Calm => Mood::Calm.accepts(destination),
            Preference::Fun => Mood::Fun.accepts(destination),
            Preference::Alternating(mood) => mood.accepts(destination),
            Preference::CombinedOr(members) => {
                members.iter().any(|member| member.is_suitable(destination))
            }
        }
    }

    /// Switches an alternating preference between calm and fun.
    /// Returns false, leaving the preference untouched, for every other variant.
    pub fn toggle(&mut self) -> bool {
        match self {
            Preference::Alternating(mood) => {
                *mood = mood.flipped();
                true
            }
            _ => false,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Preference::None => "none",
            Preference::Calm => "calm",
            Preference::Fun => "fun",
            Preference::Alternating(_) => "alternating",
            Preference::CombinedOr(_) => "combined-or",
        }
    }
}
