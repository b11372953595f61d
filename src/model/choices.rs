use serde::{Deserialize, Serialize};

/// A fixed option list offered by the entry form and stored as a text code.
pub trait Choice: Copy + Eq + 'static {
    const ALL: &'static [Self];

    /// Value written to the `approach_logs` table and posted by the form.
    fn code(self) -> &'static str;

    /// Text shown next to the radio button.
    fn label(self) -> &'static str;
}

#[must_use]
pub fn parse_choice<T: Choice>(code: &str) -> Option<T> {
    T::ALL.iter().copied().find(|c| c.code() == code)
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DistRange {
    #[serde(rename = "under_100")]
    Under100,
    #[serde(rename = "100-120")]
    From100,
    #[default]
    #[serde(rename = "120-140")]
    From120,
    #[serde(rename = "140-160")]
    From140,
    #[serde(rename = "160-180")]
    From160,
    #[serde(rename = "over_180")]
    Over180,
}

impl Choice for DistRange {
    const ALL: &'static [Self] = &[
        Self::Under100,
        Self::From100,
        Self::From120,
        Self::From140,
        Self::From160,
        Self::Over180,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Under100 => "under_100",
            Self::From100 => "100-120",
            Self::From120 => "120-140",
            Self::From140 => "140-160",
            Self::From160 => "160-180",
            Self::Over180 => "over_180",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Under100 => "~100",
            Self::From100 => "100~",
            Self::From120 => "120~",
            Self::From140 => "140~",
            Self::From160 => "160~",
            Self::Over180 => "180~",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Club {
    #[serde(rename = "DR")]
    Driver,
    #[serde(rename = "5W")]
    Wood5,
    #[serde(rename = "7W")]
    Wood7,
    #[serde(rename = "5U")]
    Utility5,
    #[serde(rename = "6U")]
    Utility6,
    #[serde(rename = "6I")]
    Iron6,
    #[default]
    #[serde(rename = "7I")]
    Iron7,
    #[serde(rename = "8I")]
    Iron8,
    #[serde(rename = "9I")]
    Iron9,
    #[serde(rename = "PW")]
    PitchingWedge,
    #[serde(rename = "50")]
    Wedge50,
    #[serde(rename = "56")]
    Wedge56,
    #[serde(rename = "58")]
    Wedge58,
    #[serde(rename = "PT")]
    Putter,
}

impl Choice for Club {
    const ALL: &'static [Self] = &[
        Self::Driver,
        Self::Wood5,
        Self::Wood7,
        Self::Utility5,
        Self::Utility6,
        Self::Iron6,
        Self::Iron7,
        Self::Iron8,
        Self::Iron9,
        Self::PitchingWedge,
        Self::Wedge50,
        Self::Wedge56,
        Self::Wedge58,
        Self::Putter,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Driver => "DR",
            Self::Wood5 => "5W",
            Self::Wood7 => "7W",
            Self::Utility5 => "5U",
            Self::Utility6 => "6U",
            Self::Iron6 => "6I",
            Self::Iron7 => "7I",
            Self::Iron8 => "8I",
            Self::Iron9 => "9I",
            Self::PitchingWedge => "PW",
            Self::Wedge50 => "50",
            Self::Wedge56 => "56",
            Self::Wedge58 => "58",
            Self::Putter => "PT",
        }
    }

    fn label(self) -> &'static str {
        self.code()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MissDir {
    #[default]
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "SHORT")]
    Short,
    #[serde(rename = "OVER")]
    Over,
    #[serde(rename = "RIGHT")]
    Right,
    #[serde(rename = "LEFT")]
    Left,
}

impl MissDir {
    /// Options offered once the green was missed, in form order.
    pub const MISSED: &'static [Self] = &[Self::Left, Self::Short, Self::Over, Self::Right];
}

impl Choice for MissDir {
    const ALL: &'static [Self] = &[
        Self::None,
        Self::Short,
        Self::Over,
        Self::Right,
        Self::Left,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Short => "SHORT",
            Self::Over => "OVER",
            Self::Right => "RIGHT",
            Self::Left => "LEFT",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::None => "-",
            Self::Short => "Short",
            Self::Over => "Long",
            Self::Right => "Right",
            Self::Left => "Left",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LieType {
    #[default]
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "FAIRWAY")]
    Fairway,
    #[serde(rename = "ROUGH_LIGHT")]
    RoughLight,
    #[serde(rename = "ROUGH_DEEP")]
    RoughDeep,
    #[serde(rename = "BUNKER")]
    Bunker,
}

impl LieType {
    pub const MISSED: &'static [Self] = &[
        Self::Fairway,
        Self::RoughLight,
        Self::RoughDeep,
        Self::Bunker,
    ];
}

impl Choice for LieType {
    const ALL: &'static [Self] = &[
        Self::None,
        Self::Fairway,
        Self::RoughLight,
        Self::RoughDeep,
        Self::Bunker,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Fairway => "FAIRWAY",
            Self::RoughLight => "ROUGH_LIGHT",
            Self::RoughDeep => "ROUGH_DEEP",
            Self::Bunker => "BUNKER",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::None => "-",
            Self::Fairway => "Fairway",
            Self::RoughLight => "Light rough",
            Self::RoughDeep => "Deep rough",
            Self::Bunker => "Bunker",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GreenType {
    #[default]
    A,
    B,
}

impl Choice for GreenType {
    const ALL: &'static [Self] = &[Self::A, Self::B];

    fn code(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }

    fn label(self) -> &'static str {
        self.code()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StartSide {
    #[default]
    #[serde(rename = "OUT")]
    Out,
    #[serde(rename = "IN")]
    In,
}

impl Choice for StartSide {
    const ALL: &'static [Self] = &[Self::Out, Self::In];

    fn code(self) -> &'static str {
        match self {
            Self::Out => "OUT",
            Self::In => "IN",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Out => "OUT (1\u{2192}18)",
            Self::In => "IN (10\u{2192}9)",
        }
    }
}
