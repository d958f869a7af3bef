use crate::html::is_blank_text;

use super::{
    kinds::{ListKind, ListMarker},
    types::List,
};

/// The list accumulator as an explicit state.
///
/// A list stays open across blank lines. It closes when the marker family
/// changes, when any other line arrives, or at end of input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    NoList,
    InUnordered(Vec<String>),
    InOrdered { start: u64, items: Vec<String> },
}

/// What the list state machine sees of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent<'a> {
    Item(ListMarker<'a>),
    Blank,
    Other,
}

impl ListState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ListState::NoList)
    }

    /// Applies one line to the state, returning the list closed by the
    /// transition, if any.
    pub fn step(&mut self, event: ListEvent<'_>) -> Option<List> {
        match event {
            ListEvent::Blank => None,
            ListEvent::Other => std::mem::take(self).finish(),
            ListEvent::Item(marker) => {
                let content = marker.content.to_string();
                let continues = matches!(
                    (marker.kind, &*self),
                    (ListKind::Unordered, ListState::InUnordered(_))
                        | (ListKind::Ordered, ListState::InOrdered { .. })
                );
                if continues {
                    if let ListState::InUnordered(items) | ListState::InOrdered { items, .. } = self {
                        items.push(content);
                    }
                    return None;
                }
                let next = match marker.kind {
                    ListKind::Unordered => ListState::InUnordered(vec![content]),
                    ListKind::Ordered => ListState::InOrdered {
                        start: marker.number.unwrap_or(1),
                        items: vec![content],
                    },
                };
                std::mem::replace(self, next).finish()
            }
        }
    }

    /// Closes the accumulator, dropping blank items. Yields nothing when no
    /// item survives.
    pub fn finish(self) -> Option<List> {
        match self {
            ListState::NoList => None,
            ListState::InUnordered(items) => wrap_list(ListKind::Unordered, None, items),
            ListState::InOrdered { start, items } => {
                wrap_list(ListKind::Ordered, (start != 1).then_some(start), items)
            }
        }
    }
}

/// Builds a [`List`] from raw items, filtering out those whose content is
/// empty once non-breaking spaces and whitespace are discounted.
pub fn wrap_list(kind: ListKind, start: Option<u64>, items: Vec<String>) -> Option<List> {
    let items: Vec<String> = items
        .into_iter()
        .filter(|item| !is_blank_text(item))
        .collect();
    if items.is_empty() {
        return None;
    }
    Some(List { kind, start, items })
}
