//! Interaction states and colors that resolve against them.
//!
//! A [`ColorStateList`] is an ordered table of `(StateSpec, Color)` entries. Resolution
//! walks the table and returns the color of the first entry whose spec matches the
//! active [`StateSet`], falling back to the list's default color.
//!
//! ```
//! use cardshadow::{Color, ColorStateList, StateSet, StateSpec, ViewState};
//!
//! let list = ColorStateList::new(Color::WHITE)
//!     .with(StateSpec::all_of([ViewState::Pressed]), Color::rgb(200, 200, 200))
//!     .with(StateSpec::none_of([ViewState::Enabled]), Color::rgb(120, 120, 120));
//!
//! let pressed = StateSet::from_iter([ViewState::Enabled, ViewState::Pressed]);
//! assert_eq!(list.resolve(&pressed), Color::rgb(200, 200, 200));
//! assert_eq!(list.resolve(&StateSet::EMPTY), Color::rgb(120, 120, 120));
//! assert_eq!(list.resolve(&StateSet::from_iter([ViewState::Enabled])), Color::WHITE);
//! ```

use crate::Color;
use smallvec::SmallVec;

/// A single interaction state of the host view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewState {
    Pressed,
    Focused,
    Enabled,
    Selected,
    Checked,
    Activated,
    Hovered,
    WindowFocused,
}

impl ViewState {
    #[inline]
    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// A set of [`ViewState`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StateSet(u16);

impl StateSet {
    pub const EMPTY: Self = Self(0);

    pub fn with(mut self, state: ViewState) -> Self {
        self.insert(state);
        self
    }

    pub fn insert(&mut self, state: ViewState) {
        self.0 |= state.bit();
    }

    pub fn remove(&mut self, state: ViewState) {
        self.0 &= !state.bit();
    }

    pub fn contains(&self, state: ViewState) -> bool {
        self.0 & state.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_superset(&self, other: &StateSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersects(&self, other: &StateSet) -> bool {
        self.0 & other.0 != 0
    }
}

impl FromIterator<ViewState> for StateSet {
    fn from_iter<I: IntoIterator<Item = ViewState>>(iter: I) -> Self {
        iter.into_iter().fold(StateSet::EMPTY, StateSet::with)
    }
}

/// States an entry of a [`ColorStateList`] requires, and states it must not see.
/// An empty spec matches every state set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateSpec {
    pub required: StateSet,
    pub excluded: StateSet,
}

impl StateSpec {
    pub const WILDCARD: Self = Self {
        required: StateSet::EMPTY,
        excluded: StateSet::EMPTY,
    };

    pub fn all_of(states: impl IntoIterator<Item = ViewState>) -> Self {
        Self {
            required: states.into_iter().collect(),
            excluded: StateSet::EMPTY,
        }
    }

    pub fn none_of(states: impl IntoIterator<Item = ViewState>) -> Self {
        Self {
            required: StateSet::EMPTY,
            excluded: states.into_iter().collect(),
        }
    }

    pub fn excluding(mut self, state: ViewState) -> Self {
        self.excluded.insert(state);
        self
    }

    pub fn matches(&self, states: &StateSet) -> bool {
        states.is_superset(&self.required) && !states.intersects(&self.excluded)
    }
}

/// An ordered state → color table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStateList {
    entries: SmallVec<[(StateSpec, Color); 4]>,
    default_color: Color,
}

impl ColorStateList {
    pub fn new(default_color: Color) -> Self {
        Self {
            entries: SmallVec::new(),
            default_color,
        }
    }

    /// Appends an entry. Entries are matched in insertion order.
    pub fn with(mut self, spec: StateSpec, color: Color) -> Self {
        self.entries.push((spec, color));
        self
    }

    pub fn default_color(&self) -> Color {
        self.default_color
    }

    pub fn resolve(&self, states: &StateSet) -> Color {
        self.entries
            .iter()
            .find(|(spec, _)| spec.matches(states))
            .map(|(_, color)| *color)
            .unwrap_or(self.default_color)
    }

    /// True if any entry can resolve to something other than the default color.
    pub fn is_stateful(&self) -> bool {
        self.entries
            .iter()
            .any(|(spec, color)| *spec != StateSpec::WILDCARD || *color != self.default_color)
    }
}

/// A flat color or a state-dependent color table.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSource {
    Solid(Color),
    States(ColorStateList),
}

impl ColorSource {
    pub fn resolve(&self, states: &StateSet) -> Color {
        match self {
            ColorSource::Solid(color) => *color,
            ColorSource::States(list) => list.resolve(states),
        }
    }

    pub fn is_stateful(&self) -> bool {
        match self {
            ColorSource::Solid(_) => false,
            ColorSource::States(list) => list.is_stateful(),
        }
    }
}

impl Default for ColorSource {
    fn default() -> Self {
        ColorSource::Solid(Color::TRANSPARENT)
    }
}

impl From<Color> for ColorSource {
    fn from(color: Color) -> Self {
        ColorSource::Solid(color)
    }
}

impl From<ColorStateList> for ColorSource {
    fn from(list: ColorStateList) -> Self {
        ColorSource::States(list)
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorSource, ColorStateList, StateSet, StateSpec, ViewState};
    use crate::Color;

    #[test]
    fn state_set_membership() {
        let mut states = StateSet::from_iter([ViewState::Pressed, ViewState::Focused]);
        assert!(states.contains(ViewState::Pressed));
        assert!(!states.contains(ViewState::Enabled));
        states.remove(ViewState::Pressed);
        assert!(!states.contains(ViewState::Pressed));
        assert!(states.is_superset(&StateSet::EMPTY));
        assert!(!StateSet::EMPTY.intersects(&states));
    }

    #[test]
    fn first_matching_entry_wins() {
        let list = ColorStateList::new(Color::BLACK)
            .with(StateSpec::all_of([ViewState::Pressed]), Color::WHITE)
            .with(
                StateSpec::all_of([ViewState::Pressed, ViewState::Focused]),
                Color::GRAY,
            );
        let states = StateSet::from_iter([ViewState::Pressed, ViewState::Focused]);

        assert_eq!(list.resolve(&states), Color::WHITE);
    }

    #[test]
    fn excluded_states_reject_entry() {
        let spec = StateSpec::all_of([ViewState::Focused]).excluding(ViewState::Pressed);
        assert!(spec.matches(&StateSet::EMPTY.with(ViewState::Focused)));
        assert!(!spec.matches(
            &StateSet::EMPTY
                .with(ViewState::Focused)
                .with(ViewState::Pressed)
        ));
    }

    #[test]
    fn wildcard_entry_matches_everything() {
        let list = ColorStateList::new(Color::BLACK).with(StateSpec::WILDCARD, Color::WHITE);
        assert_eq!(list.resolve(&StateSet::EMPTY), Color::WHITE);
        assert_eq!(
            list.resolve(&StateSet::EMPTY.with(ViewState::Hovered)),
            Color::WHITE
        );
    }

    #[test]
    fn statefulness() {
        assert!(!ColorSource::Solid(Color::WHITE).is_stateful());
        assert!(!ColorSource::from(ColorStateList::new(Color::WHITE)).is_stateful());
        let list = ColorStateList::new(Color::WHITE)
            .with(StateSpec::all_of([ViewState::Pressed]), Color::BLACK);
        assert!(ColorSource::from(list).is_stateful());
    }
}
