use crate::{provider::LookupProvider, view::ViewState};

/// Run one lookup for the view's current query.
///
/// Returns `true` when the view ended up holding a weather result.
pub async fn run_lookup(view: &mut ViewState, provider: &dyn LookupProvider) -> bool {
    let Some((ticket, location)) = view.begin_lookup() else {
        return false;
    };

    let outcome = provider.fetch(&location).await;
    view.finish_lookup(ticket, outcome);

    view.weather().is_some()
}
