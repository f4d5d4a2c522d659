/// State of a collapsible panel as seen from its header toggle.
///
/// The transitional states belong to the panel widget. They are only read
/// here so bulk commands don't flip a panel that is already on its way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Collapsed,
    Expanding,
    Expanded,
    Collapsing,
}

impl PanelState {
    /// Collapsed, or heading there.
    pub fn is_collapsed_like(&self) -> bool {
        matches!(self, PanelState::Collapsed | PanelState::Collapsing)
    }

    /// The widget is still animating toward the other state.
    pub fn is_transitioning(&self) -> bool {
        matches!(self, PanelState::Expanding | PanelState::Collapsing)
    }

    /// Whether a command heading in `direction` still has work to do.
    pub fn needs(&self, direction: Direction) -> bool {
        match direction {
            Direction::Expand => self.is_collapsed_like(),
            Direction::Collapse => !self.is_collapsed_like(),
        }
    }
}

/// Target of a bulk command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Expand,
    Collapse,
}

impl Direction {
    pub fn code(&self) -> &'static str {
        match self {
            Direction::Expand => "expand",
            Direction::Collapse => "collapse",
        }
    }
}

/// Text of an arrow indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Expanded,
    Collapsed,
    /// Sections that cannot be collapsed show no arrow.
    Blank,
}

impl Glyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Expanded => "▼",
            Glyph::Collapsed => "▶",
            Glyph::Blank => "",
        }
    }

    pub fn for_shown(shown: bool) -> Self {
        if shown {
            Glyph::Expanded
        } else {
            Glyph::Collapsed
        }
    }
}
