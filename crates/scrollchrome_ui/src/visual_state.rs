//! Visual states and state-indexed tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// The interaction mode of a control, used to pick themed visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualState {
    #[default]
    Normal,
    Hovered,
    Pressed,
    Disabled,
    Focused,
    Selected,
}

impl VisualState {
    pub const COUNT: usize = 6;

    pub const ALL: [VisualState; Self::COUNT] = [
        VisualState::Normal,
        VisualState::Hovered,
        VisualState::Pressed,
        VisualState::Disabled,
        VisualState::Focused,
        VisualState::Selected,
    ];

    /// Position of the state inside a [`StateArray`].
    pub const fn index(self) -> usize {
        match self {
            VisualState::Normal => 0,
            VisualState::Hovered => 1,
            VisualState::Pressed => 2,
            VisualState::Disabled => 3,
            VisualState::Focused => 4,
            VisualState::Selected => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VisualState::Normal => "normal",
            VisualState::Hovered => "hovered",
            VisualState::Pressed => "pressed",
            VisualState::Disabled => "disabled",
            VisualState::Focused => "focused",
            VisualState::Selected => "selected",
        }
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VisualState {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        VisualState::ALL
            .into_iter()
            .find(|state| state.name() == lower)
            .ok_or_else(|| ThemeError::UnknownVisualState(s.to_string()))
    }
}

/// A fixed-size table with one slot per [`VisualState`].
#[derive(Debug, Clone, PartialEq)]
pub struct StateArray<T> {
    items: [T; VisualState::COUNT],
}

impl<T: Default> Default for StateArray<T> {
    fn default() -> Self {
        Self {
            items: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Clone> StateArray<T> {
    /// Table with `value` in every slot.
    pub fn filled(value: T) -> Self {
        Self {
            items: std::array::from_fn(|_| value.clone()),
        }
    }

    /// Assign `value` to each of `states`.
    pub fn set_states(&mut self, states: &[VisualState], value: T) {
        for state in states {
            self.items[state.index()] = value.clone();
        }
    }
}

impl<T> StateArray<T> {
    pub fn get(&self, state: VisualState) -> &T {
        &self.items[state.index()]
    }

    pub fn get_mut(&mut self, state: VisualState) -> &mut T {
        &mut self.items[state.index()]
    }

    pub fn set(&mut self, state: VisualState, value: T) {
        self.items[state.index()] = value;
    }

    /// Build a new table by mapping every slot.
    pub fn map<U>(&self, mut f: impl FnMut(VisualState, &T) -> U) -> StateArray<U> {
        StateArray {
            items: std::array::from_fn(|i| f(VisualState::ALL[i], &self.items[i])),
        }
    }
}

impl<T> StateArray<Option<T>> {
    /// The entry for `state`, falling back to the `Normal` entry when the
    /// state has no override.
    pub fn get_or_normal(&self, state: VisualState) -> Option<&T> {
        self.get(state)
            .as_ref()
            .or_else(|| self.get(VisualState::Normal).as_ref())
    }

    /// True when no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.items.iter().all(Option::is_none)
    }
}
