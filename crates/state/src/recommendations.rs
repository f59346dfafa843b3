//! Recommendation result, visibility and loading flags.

use model::{Movie, RecommendationSet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationState {
    movies: Vec<Movie>,
    reason: Option<String>,
    visible: bool,
    loading: bool,
    /// Blocking user-visible message from the last failed request
    alert: Option<String>,
}

impl RecommendationState {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Replace any prior result and show it
    pub fn complete(&mut self, set: RecommendationSet) {
        self.movies = set.recommendations;
        self.reason = set.reason;
        self.visible = true;
        self.loading = false;
    }

    /// Keep the prior result and visibility untouched
    pub fn fail(&mut self, alert: impl Into<String>) {
        self.alert = Some(alert.into());
        self.loading = false;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_keeps_previous_result() {
        let mut state = RecommendationState::default();
        state.begin();
        state.complete(RecommendationSet {
            recommendations: vec![Movie::new(1, "Heat")],
            reason: None,
        });
        assert!(state.is_visible());

        state.begin();
        assert!(state.is_loading());
        state.fail("Failed to get recommendations");

        assert!(!state.is_loading());
        assert!(state.is_visible());
        assert_eq!(state.movies().len(), 1);
        assert_eq!(state.take_alert().as_deref(), Some("Failed to get recommendations"));
        assert!(state.alert().is_none());
    }
}
