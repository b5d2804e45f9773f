/// Eight chip colors, cycled by token id so neighbours never share a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Blue,
    Green,
    Purple,
    Pink,
    Yellow,
    Indigo,
    Orange,
    Teal,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 8] = [
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Purple,
        PaletteColor::Pink,
        PaletteColor::Yellow,
        PaletteColor::Indigo,
        PaletteColor::Orange,
        PaletteColor::Teal,
    ];

    pub fn for_id(id: crate::TokenId) -> Self {
        Self::ALL[id % Self::ALL.len()]
    }
}
