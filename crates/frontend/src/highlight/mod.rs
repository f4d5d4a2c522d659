//! Duplicate reference highlighting.
//!
//! Every dumped value is rendered with an identity token. When the same token
//! shows up more than once on the page, all of its occurrences are grouped and
//! hovering any one of them inverts the colors of the whole group.
//!
//! Grouping is page-wide rather than per dump call: dumping the same object
//! twice, or reaching it through two different parents, links both places.

pub mod dom;

use std::collections::HashMap;

/// Occurrences of one token that appears at least twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub token: String,
    /// Positions in the scanned token list, in document order.
    pub members: Vec<usize>,
}

/// Group the tokens that occur more than once.
///
/// Groups come out in order of first occurrence. The first occurrence is a
/// member like every other one.
pub fn group_duplicates<S: AsRef<str>>(tokens: &[S]) -> Vec<DuplicateGroup> {
    let mut order: Vec<&str> = Vec::new();
    let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();

    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        positions
            .entry(token)
            .or_insert_with(|| {
                order.push(token);
                Vec::new()
            })
            .push(index);
    }

    order
        .into_iter()
        .filter_map(|token| {
            let members = positions.remove(token)?;
            (members.len() > 1).then(|| DuplicateGroup {
                token: token.to_string(),
                members,
            })
        })
        .collect()
}

/// Foreground/background pair, as CSS color strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colors {
    pub foreground: String,
    pub background: String,
}

impl Colors {
    pub fn swapped(&self) -> Colors {
        Colors {
            foreground: self.background.clone(),
            background: self.foreground.clone(),
        }
    }
}

/// Something whose inline colors can be overridden.
pub trait Paint {
    /// `None` removes the override so theme colors apply again.
    fn paint(&self, colors: Option<&Colors>);
}

/// Hover behavior shared by every member of one duplicate group.
///
/// Colors are captured once when the group is built. Reading them again on a
/// later hover would pick up the swapped inline style.
pub struct HoverGroup<T> {
    members: Vec<T>,
    highlight: Colors,
}

impl<T: Paint> HoverGroup<T> {
    pub fn new(members: Vec<T>, captured: &Colors) -> Self {
        Self {
            members,
            highlight: captured.swapped(),
        }
    }

    pub fn enter(&self) {
        for member in &self.members {
            member.paint(Some(&self.highlight));
        }
    }

    pub fn leave(&self) {
        for member in &self.members {
            member.paint(None);
        }
    }

    pub fn members(&self) -> &[T] {
        &self.members
    }
}
