// State management module.
// Navigation, filtering, and per-tab UI state.

#![allow(dead_code, unused_imports)]

pub mod cursor;
pub mod filter;
pub mod glossary;
pub mod loading;
pub mod session;
pub mod status;
pub mod viva;

pub use cursor::{NavAction, NavigationCursor};
pub use filter::{distinct_sections, filter_and_order};
pub use glossary::GlossaryTabState;
pub use loading::LoadingState;
pub use session::SessionNavigationState;
pub use status::{StatusLevel, StatusLog, StatusMessage};
pub use viva::{QuestionView, SectionPicker, SelectionStats, VivaTabState};
