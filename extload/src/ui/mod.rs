//! UI-side collaborator contracts
//!
//! Message formatting and error presentation stay outside the core. The
//! coordinator funnels every load failure through these two seams instead of
//! raising it back to whichever caller happened to trigger the load.

use crate::loader::LoadError;

/// Translates fixed advisory strings before they reach the user
pub trait Localizer: Send + Sync {
    fn translate(&self, text: &str) -> String;
}

/// Localizer that returns strings unchanged
///
/// For hosts without an i18n layer, and for tests.
pub struct PassthroughLocalizer;

impl Localizer for PassthroughLocalizer {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Surfaces a load failure to the user
///
/// Fire-and-forget: implementations must swallow their own failures. Called
/// at most once per failed load attempt, with the localized advisory message
/// and the underlying error detail.
pub trait ErrorPresenter: Send + Sync {
    fn present_error(&self, message: &str, error: &LoadError);
}
