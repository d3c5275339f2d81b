use serde::Serialize;

/// A sample sentence offered as a one-click button
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Preset {
    pub label: &'static str,
    pub text: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        label: "Nepali example",
        text: "म आज धेरै खुशी छु",
    },
    Preset {
        label: "Sinhala example",
        text: "මම පරිගණක විද්‍යාව ඉගෙන ගන්නවා",
    },
];
