/// Viewport width at or below which the compact layout applies. Pixels for a
/// browser page; front ends with other units pass their own breakpoint.
pub const DEFAULT_BREAKPOINT: u32 = 768;

/// Presentation mode derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    Compact,
    #[default]
    Wide,
}

impl Layout {
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width <= breakpoint { Layout::Compact } else { Layout::Wide }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, Layout::Compact)
    }
}
