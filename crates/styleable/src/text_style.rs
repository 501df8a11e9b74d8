//! Text decoration flags for text elements.

use bitflags::bitflags;

bitflags! {
    /// Bold / italic / underline / strike-through flags. The empty set is the
    /// regular style.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TextStyle: u8 {
        const BOLD = 1;
        const ITALIC = 1 << 1;
        const UNDERLINED = 1 << 2;
        const STRIKE_THROUGH = 1 << 3;
    }
}

impl TextStyle {
    /// Build flags from a `font-style` / `text-decoration` value.
    ///
    /// Each flag is set when its keyword (`bold`, `italic`, `underline`,
    /// `strike`) appears anywhere in the value, so `"bold italic"` and
    /// `"line-through strikethrough"` both work.
    pub fn from_value(value: &str) -> Self {
        let lower = value.to_ascii_lowercase();
        [
            ("bold", Self::BOLD),
            ("italic", Self::ITALIC),
            ("underline", Self::UNDERLINED),
            ("strike", Self::STRIKE_THROUGH),
        ]
        .into_iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .fold(Self::empty(), |style, (_, flag)| style | flag)
    }
}
