// Navigation cursor over the filtered question sequence.
// A single index clamped to the current sequence length.

use rand::Rng;

/// Navigation action from the button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Previous,
    Next,
    Last,
    Random,
}

impl NavAction {
    pub const ALL: [NavAction; 5] = [
        NavAction::First,
        NavAction::Previous,
        NavAction::Next,
        NavAction::Last,
        NavAction::Random,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavAction::First => "First",
            NavAction::Previous => "Previous",
            NavAction::Next => "Next",
            NavAction::Last => "Last",
            NavAction::Random => "Random",
        }
    }

    pub fn key_hint(&self) -> &'static str {
        match self {
            NavAction::First => "g",
            NavAction::Previous => "←",
            NavAction::Next => "→",
            NavAction::Last => "G",
            NavAction::Random => "r",
        }
    }
}

/// Index into a sequence of `len` items.
///
/// With `len == 0` every transition is a no-op and the stored index is left
/// alone until the sequence is non-empty and [`clamp`](Self::clamp) runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationCursor {
    index: usize,
}

impl NavigationCursor {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Raw stored index. Only meaningful after `clamp` for a non-empty sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Pull the index back inside `0..len` when the sequence has shrunk.
    pub fn clamp(&mut self, len: usize) {
        if len > 0 && self.index >= len {
            self.index = len - 1;
        }
    }

    /// Index to read for a sequence of `len` items, or None when empty.
    pub fn position(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.index.min(len - 1))
        }
    }

    pub fn apply<R: Rng>(&mut self, action: NavAction, len: usize, rng: &mut R) {
        if len == 0 {
            return;
        }
        self.clamp(len);
        self.index = match action {
            NavAction::First => 0,
            NavAction::Previous => self.index.saturating_sub(1),
            NavAction::Next => (self.index + 1).min(len - 1),
            NavAction::Last => len - 1,
            NavAction::Random => rng.random_range(0..len),
        };
    }
}
