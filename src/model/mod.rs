//! Records exchanged with the backend and the form validation that guards them.

pub mod goal;
pub mod profile;
pub mod quote;
pub mod reflection;

pub use goal::{Goal, GoalCategory, GoalDraft, GoalPriority, GoalStatus};
pub use profile::{CreatedProfile, Profile, ProfileDraft};
pub use quote::Quote;
pub use reflection::{Reflection, ReflectionDraft, ReflectionType, Score};
