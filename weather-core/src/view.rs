//! View state owned by a single front end.
//!
//! All lookup-derived fields (error, weather, background, image) change
//! together: they are cleared when a lookup begins and populated, or left
//! cleared with an error set, when it finishes.

use crate::{
    error::{Capability, LookupError},
    layout::{DEFAULT_BREAKPOINT, Layout},
    model::{ImageInfo, LookupPayload, WeatherResult},
};

pub const FLAT_BACKGROUND: &str = "#eaf6fb";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Flat(&'static str),
    Photo(String),
}

impl Default for Background {
    fn default() -> Self {
        Background::Flat(FLAT_BACKGROUND)
    }
}

/// Identifies one lookup attempt. Only the most recently issued ticket can
/// publish into the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket(u64);

#[derive(Debug, Clone)]
pub struct ViewState {
    query: String,
    weather: Option<WeatherResult>,
    error: Option<String>,
    background: Background,
    image: Option<ImageInfo>,
    info_open: bool,
    layout: Layout,
    breakpoint: u32,
    generation: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT)
    }
}

impl ViewState {
    pub fn new(breakpoint: u32) -> Self {
        Self {
            query: String::new(),
            weather: None,
            error: None,
            background: Background::default(),
            image: None,
            info_open: false,
            layout: Layout::default(),
            breakpoint,
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn weather(&self) -> Option<&WeatherResult> {
        self.weather.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn image(&self) -> Option<&ImageInfo> {
        self.image.as_ref()
    }

    pub fn info_open(&self) -> bool {
        self.info_open
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Clear every lookup-derived field. Query, layout and popover survive.
    pub fn reset(&mut self) {
        self.error = None;
        self.weather = None;
        self.background = Background::default();
        self.image = None;
    }

    /// Start a lookup for the current query.
    ///
    /// Always resets first. Returns the ticket and the trimmed location to
    /// fetch, or records the validation error and returns `None`.
    pub fn begin_lookup(&mut self) -> Option<(LookupTicket, String)> {
        self.reset();
        self.generation += 1;

        let location = self.query.trim();
        if location.is_empty() {
            self.error = Some(LookupError::EmptyQuery.user_message());
            return None;
        }

        Some((LookupTicket(self.generation), location.to_string()))
    }

    /// Publish the outcome of the lookup identified by `ticket`.
    ///
    /// Returns `false` and leaves the view untouched when a newer lookup has
    /// been started since.
    pub fn finish_lookup(
        &mut self,
        ticket: LookupTicket,
        outcome: Result<LookupPayload, LookupError>,
    ) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(ticket = ticket.0, current = self.generation, "dropping stale lookup");
            return false;
        }

        match outcome {
            Ok(LookupPayload { weather, image }) => {
                self.error = None;
                self.background = Background::Photo(image.url.clone());
                self.weather = Some(weather);
                self.image = Some(image);
            }
            Err(err) => {
                if matches!(err, LookupError::Transport(_) | LookupError::Decode(_)) {
                    tracing::error!(error = %err, "lookup failed");
                }
                self.reset();
                self.error = Some(err.user_message());
            }
        }

        true
    }

    pub fn toggle_info(&mut self) -> bool {
        self.info_open = !self.info_open;
        self.info_open
    }

    /// Recompute the layout for a new viewport width.
    pub fn resize(&mut self, width: u32) -> Layout {
        self.layout = Layout::for_width(width, self.breakpoint);
        self.layout
    }

    /// The weekly forecast is only offered under a result and is not
    /// implemented by the endpoint.
    pub fn weekly_forecast(&self) -> Result<(), LookupError> {
        Err(LookupError::Unsupported(Capability::WeeklyForecast))
    }

    pub fn weekly_forecast_offered(&self) -> bool {
        self.weather.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EMPTY_QUERY_MESSAGE, STATUS_MESSAGE};
    use crate::model::{Current, Photographer, Place};

    fn payload(name: &str, url: &str) -> LookupPayload {
        LookupPayload {
            weather: WeatherResult {
                location: Place { name: name.into(), region: None, country: "Ireland".into() },
                current: Current {
                    temp_c: 12.0,
                    feelslike_c: None,
                    humidity: None,
                    wind_kph: None,
                    condition: None,
                },
            },
            image: ImageInfo {
                url: url.into(),
                photographer: Photographer { name: "A".into(), link: "https://a".into() },
                location: None,
                name: None,
            },
        }
    }

    #[test]
    fn whitespace_query_sets_validation_error() {
        let mut view = ViewState::default();
        view.set_query("   \t");

        assert!(view.begin_lookup().is_none());
        assert_eq!(view.error(), Some(EMPTY_QUERY_MESSAGE));
        assert_eq!(view.query(), "   \t");
    }

    #[test]
    fn begin_lookup_clears_previous_result() {
        let mut view = ViewState::default();
        view.set_query("Dublin");
        let (ticket, _) = view.begin_lookup().expect("valid query");
        view.finish_lookup(ticket, Ok(payload("Dublin", "https://img/1.jpg")));
        assert!(view.weather().is_some());

        view.set_query("Cork");
        let (_, location) = view.begin_lookup().expect("valid query");

        assert_eq!(location, "Cork");
        assert!(view.weather().is_none());
        assert!(view.image().is_none());
        assert!(view.error().is_none());
        assert_eq!(view.background(), &Background::Flat(FLAT_BACKGROUND));
    }

    #[test]
    fn begin_lookup_clears_validation_error() {
        let mut view = ViewState::default();
        view.set_query("  ");
        assert!(view.begin_lookup().is_none());
        assert_eq!(view.error(), Some(EMPTY_QUERY_MESSAGE));

        view.set_query("Cork");
        assert!(view.begin_lookup().is_some());

        assert!(view.error().is_none());
    }

    #[test]
    fn begin_lookup_clears_application_error() {
        let mut view = ViewState::default();
        view.set_query("Atlantis");
        let (ticket, _) = view.begin_lookup().expect("valid query");
        let not_found = LookupError::Application("No matching location found.".into());
        view.finish_lookup(ticket, Err(not_found));
        assert_eq!(view.error(), Some("No matching location found."));

        view.set_query("Cork");
        assert!(view.begin_lookup().is_some());

        assert!(view.error().is_none());
        assert!(view.weather().is_none());
        assert_eq!(view.background(), &Background::default());
    }

    #[test]
    fn begin_lookup_trims_location() {
        let mut view = ViewState::default();
        view.set_query("  Dublin \n");
        let (_, location) = view.begin_lookup().expect("valid query");
        assert_eq!(location, "Dublin");
    }

    #[test]
    fn success_sets_weather_image_and_background() {
        let mut view = ViewState::default();
        view.set_query("Dublin");
        let (ticket, _) = view.begin_lookup().expect("valid query");

        assert!(view.finish_lookup(ticket, Ok(payload("Dublin", "https://img/1.jpg"))));

        assert!(view.error().is_none());
        assert_eq!(view.weather().map(|w| w.location.name.as_str()), Some("Dublin"));
        assert_eq!(view.image().map(|i| i.url.as_str()), Some("https://img/1.jpg"));
        assert_eq!(view.background(), &Background::Photo("https://img/1.jpg".into()));
        assert!(view.weekly_forecast_offered());
    }

    #[test]
    fn failure_leaves_result_state_cleared() {
        let mut view = ViewState::default();
        view.set_query("Dublin");
        let (ticket, _) = view.begin_lookup().expect("valid query");

        view.finish_lookup(ticket, Err(LookupError::Status { status: 404, body: String::new() }));

        assert_eq!(view.error(), Some(STATUS_MESSAGE));
        assert!(view.weather().is_none());
        assert!(view.image().is_none());
        assert_eq!(view.background(), &Background::default());
        assert!(!view.weekly_forecast_offered());
    }

    #[test]
    fn application_error_message_is_verbatim() {
        let mut view = ViewState::default();
        view.set_query("Atlantis");
        let (ticket, _) = view.begin_lookup().expect("valid query");

        let not_found = LookupError::Application("No matching location found.".into());
        view.finish_lookup(ticket, Err(not_found));

        assert_eq!(view.error(), Some("No matching location found."));
        assert!(view.weather().is_none());
    }

    #[test]
    fn stale_lookup_is_dropped() {
        let mut view = ViewState::default();
        view.set_query("Dublin");
        let (first, _) = view.begin_lookup().expect("valid query");
        view.set_query("Cork");
        let (second, _) = view.begin_lookup().expect("valid query");

        assert!(view.finish_lookup(second, Ok(payload("Cork", "https://img/cork.jpg"))));
        assert!(!view.finish_lookup(first, Ok(payload("Dublin", "https://img/1.jpg"))));

        assert_eq!(view.weather().map(|w| w.location.name.as_str()), Some("Cork"));
        assert_eq!(view.background(), &Background::Photo("https://img/cork.jpg".into()));
    }

    #[test]
    fn empty_query_invalidates_in_flight_lookup() {
        let mut view = ViewState::default();
        view.set_query("Dublin");
        let (ticket, _) = view.begin_lookup().expect("valid query");
        view.set_query("");
        assert!(view.begin_lookup().is_none());

        assert!(!view.finish_lookup(ticket, Ok(payload("Dublin", "https://img/1.jpg"))));
        assert_eq!(view.error(), Some(EMPTY_QUERY_MESSAGE));
    }

    #[test]
    fn resize_only_touches_layout() {
        let mut view = ViewState::default();
        view.set_query("Dublin");
        let (ticket, _) = view.begin_lookup().expect("valid query");
        view.finish_lookup(ticket, Ok(payload("Dublin", "https://img/1.jpg")));
        let before = (view.weather().cloned(), view.image().cloned(), view.background().clone());

        assert_eq!(view.resize(500), Layout::Compact);
        assert_eq!(view.resize(1200), Layout::Wide);

        let after = (view.weather().cloned(), view.image().cloned(), view.background().clone());
        assert_eq!(before, after);
        assert!(view.error().is_none());
    }

    #[test]
    fn toggle_info_flips_flag() {
        let mut view = ViewState::default();
        assert!(view.toggle_info());
        assert!(!view.toggle_info());
    }

    #[test]
    fn weekly_forecast_is_unsupported() {
        let view = ViewState::default();
        let err = view.weekly_forecast().unwrap_err();
        assert!(matches!(err, LookupError::Unsupported(Capability::WeeklyForecast)));
    }
}
