//! Toolbar commands.
//!
//! The toolbar renders twelve buttons: expand and collapse for everything, for
//! one section category, or for one nesting depth. Each button id maps to a
//! single [`ToolbarCommand`], so the browser layer needs one handler for all.

use crate::enums::panel_state::Direction;
use crate::enums::section_category::SectionCategory;
use crate::shared::error::MarkupError;

/// Which toggles a command visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    All,
    Category(SectionCategory),
    /// Toggles tagged with this `data-object-depth`.
    Depth(u32),
}

impl Scope {
    /// Filter applied to a toggle's category and depth.
    pub fn matches(&self, category: Option<SectionCategory>, depth: Option<u32>) -> bool {
        match self {
            Scope::All => true,
            Scope::Category(wanted) => category == Some(*wanted),
            Scope::Depth(wanted) => depth == Some(*wanted),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToolbarCommand {
    pub direction: Direction,
    pub scope: Scope,
}

/// Button ids rendered by the toolbar template.
pub const CONTROLS: [(&str, ToolbarCommand); 12] = [
    ("expand-all", ToolbarCommand::new(Direction::Expand, Scope::All)),
    ("expand-types", ToolbarCommand::new(Direction::Expand, Scope::Category(SectionCategory::Type))),
    ("expand-attrs", ToolbarCommand::new(Direction::Expand, Scope::Category(SectionCategory::Attr))),
    ("expand-funcs", ToolbarCommand::new(Direction::Expand, Scope::Category(SectionCategory::Func))),
    ("expand-1st-lvl", ToolbarCommand::new(Direction::Expand, Scope::Depth(1))),
    ("expand-2nd-lvl", ToolbarCommand::new(Direction::Expand, Scope::Depth(2))),
    ("collapse-all", ToolbarCommand::new(Direction::Collapse, Scope::All)),
    ("collapse-types", ToolbarCommand::new(Direction::Collapse, Scope::Category(SectionCategory::Type))),
    ("collapse-attrs", ToolbarCommand::new(Direction::Collapse, Scope::Category(SectionCategory::Attr))),
    ("collapse-funcs", ToolbarCommand::new(Direction::Collapse, Scope::Category(SectionCategory::Func))),
    ("collapse-1st-lvl", ToolbarCommand::new(Direction::Collapse, Scope::Depth(1))),
    ("collapse-2nd-lvl", ToolbarCommand::new(Direction::Collapse, Scope::Depth(2))),
];

impl ToolbarCommand {
    pub const fn new(direction: Direction, scope: Scope) -> Self {
        Self { direction, scope }
    }

    pub fn from_control_id(id: &str) -> Result<Self, MarkupError> {
        CONTROLS
            .iter()
            .find(|(control, _)| *control == id)
            .map(|(_, command)| *command)
            .ok_or_else(|| MarkupError::UnknownControl(id.to_string()))
    }
}

/// Parse `data-object-depth`.
pub fn parse_depth(raw: &str) -> Result<u32, MarkupError> {
    raw.trim()
        .parse()
        .map_err(|_| MarkupError::InvalidDepth(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_control_parses_to_a_distinct_command() {
        let mut seen = std::collections::HashSet::new();
        for (id, command) in CONTROLS {
            assert_eq!(ToolbarCommand::from_control_id(id).unwrap(), command);
            assert!(seen.insert(command), "{id} duplicates another control");
        }
    }

    #[test]
    fn test_from_control_id() {
        assert_eq!(
            ToolbarCommand::from_control_id("collapse-funcs").unwrap(),
            ToolbarCommand::new(Direction::Collapse, Scope::Category(SectionCategory::Func))
        );
        assert_eq!(
            ToolbarCommand::from_control_id("expand-2nd-lvl").unwrap(),
            ToolbarCommand::new(Direction::Expand, Scope::Depth(2))
        );
        assert_eq!(
            ToolbarCommand::from_control_id("expand-3rd-lvl"),
            Err(MarkupError::UnknownControl("expand-3rd-lvl".to_string()))
        );
        assert_eq!(
            ToolbarCommand::from_control_id(""),
            Err(MarkupError::UnknownControl(String::new()))
        );
    }

    #[test]
    fn test_scope_matches() {
        assert!(Scope::All.matches(None, None));
        assert!(Scope::Category(SectionCategory::Attr).matches(Some(SectionCategory::Attr), None));
        assert!(!Scope::Category(SectionCategory::Attr).matches(Some(SectionCategory::Func), Some(1)));
        assert!(Scope::Depth(1).matches(Some(SectionCategory::Type), Some(1)));
        assert!(!Scope::Depth(1).matches(Some(SectionCategory::Type), Some(2)));
        assert!(!Scope::Depth(1).matches(Some(SectionCategory::Type), None));
    }

    #[test]
    fn test_parse_depth() {
        assert_eq!(parse_depth("1"), Ok(1));
        assert_eq!(parse_depth(" 2 "), Ok(2));
        assert_eq!(parse_depth("x"), Err(MarkupError::InvalidDepth("x".to_string())));
    }
}
