//! Tool comparison route handlers.
//!
//! The comparison tray lives in the session. Add and remove are plain form
//! posts that redirect back to the comparison page, so the whole flow works
//! without any client-side scripting.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::Tool;
use crate::comparison::{ComparisonSelection, MAX_COMPARE, MIN_COMPARE_TABLE};
use crate::error::add_breadcrumb;
use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

/// A filled comparison slot.
#[derive(Clone)]
pub struct CompareSlotView {
    pub slug: String,
    pub name: String,
    pub logo_url: String,
    pub rating: String,
    pub pricing_label: &'static str,
    pub pricing_class: &'static str,
}

impl CompareSlotView {
    fn new(tool: &Tool) -> Self {
        Self {
            slug: tool.slug.to_string(),
            name: tool.name.clone(),
            logo_url: tool.logo_url.clone(),
            rating: format!("{:.1}", tool.rating),
            pricing_label: tool.pricing.label(),
            pricing_class: tool.pricing.as_str(),
        }
    }
}

/// One column of the comparison table.
#[derive(Clone)]
pub struct CompareColumnView {
    pub slug: String,
    pub name: String,
    pub rating: String,
    /// Pricing row; the detail string when one exists, the tier otherwise.
    pub price_display: String,
    pub pricing_class: &'static str,
    /// Capped feature list for the Key Features row.
    pub features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub official_url: String,
}

/// How many features the comparison table shows per tool.
const TABLE_FEATURE_COUNT: usize = 4;

impl CompareColumnView {
    fn new(tool: &Tool) -> Self {
        Self {
            slug: tool.slug.to_string(),
            name: tool.name.clone(),
            rating: format!("{:.1}", tool.rating),
            price_display: tool
                .price_details
                .clone()
                .unwrap_or_else(|| tool.pricing.label().to_string()),
            pricing_class: tool.pricing.as_str(),
            features: tool.features.iter().take(TABLE_FEATURE_COUNT).cloned().collect(),
            pros: tool.pros.clone(),
            cons: tool.cons.clone(),
            official_url: tool.official_url.clone(),
        }
    }
}

/// Entry in the add-a-tool picker.
#[derive(Clone)]
pub struct PickerOptionView {
    pub slug: String,
    pub name: String,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the comparison selection from the session.
async fn get_selection(session: &Session) -> ComparisonSelection {
    session
        .get::<ComparisonSelection>(session_keys::COMPARE_SELECTION)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Set the comparison selection in the session.
async fn set_selection(
    session: &Session,
    selection: &ComparisonSelection,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::COMPARE_SELECTION, selection)
        .await
}

/// Add to comparison form data.
#[derive(Debug, Deserialize)]
pub struct AddToCompareForm {
    pub slug: String,
}

/// Remove from comparison form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCompareForm {
    pub slug: String,
}

/// Comparison page template.
#[derive(Template, WebTemplate)]
#[template(path = "compare/show.html")]
pub struct CompareTemplate {
    /// One entry per slot; `None` renders the picker.
    pub slots: Vec<Option<CompareSlotView>>,
    /// Tools not yet selected, offered by the pickers.
    pub available: Vec<PickerOptionView>,
    /// Table columns; empty until two tools are selected.
    pub columns: Vec<CompareColumnView>,
}

/// Display the comparison page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let catalog = state.catalog();
    let mut selection = get_selection(&session).await;

    // Drop slugs that no longer resolve so a stale session heals itself
    let resolved = selection.resolve(catalog);
    if resolved.len() != selection.len() {
        let mut pruned = ComparisonSelection::default();
        for tool in &resolved {
            pruned.add(catalog, tool.slug.as_str());
        }
        if let Err(e) = set_selection(&session, &pruned).await {
            tracing::error!("Failed to save pruned comparison selection: {e}");
        }
        selection = pruned;
    }

    let slots = (0..MAX_COMPARE)
        .map(|i| resolved.get(i).map(|tool| CompareSlotView::new(tool)))
        .collect();

    let available = catalog
        .tools()
        .iter()
        .filter(|tool| !selection.contains(tool.slug.as_str()))
        .map(|tool| PickerOptionView {
            slug: tool.slug.to_string(),
            name: tool.name.clone(),
        })
        .collect();

    let columns = if resolved.len() >= MIN_COMPARE_TABLE {
        resolved.iter().map(|tool| CompareColumnView::new(tool)).collect()
    } else {
        Vec::new()
    };

    CompareTemplate {
        slots,
        available,
        columns,
    }
}

/// Add a tool to the comparison.
///
/// Full selections, duplicates, and unknown slugs are ignored; either way the
/// browser lands back on the comparison page.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCompareForm>,
) -> Redirect {
    let mut selection = get_selection(&session).await;

    if selection.add(state.catalog(), &form.slug) {
        add_breadcrumb(
            "comparison",
            "Added tool to comparison",
            Some(&[("slug", &form.slug)]),
        );
        if let Err(e) = set_selection(&session, &selection).await {
            tracing::error!("Failed to save comparison selection: {e}");
        }
    } else {
        tracing::debug!(slug = %form.slug, "Comparison add rejected");
    }

    Redirect::to("/compare")
}

/// Remove a tool from the comparison.
#[instrument(skip(_state, session))]
pub async fn remove(
    State(_state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCompareForm>,
) -> Redirect {
    let mut selection = get_selection(&session).await;

    if selection.remove(&form.slug) {
        add_breadcrumb(
            "comparison",
            "Removed tool from comparison",
            Some(&[("slug", &form.slug)]),
        );
        if let Err(e) = set_selection(&session, &selection).await {
            tracing::error!("Failed to save comparison selection: {e}");
        }
    }

    Redirect::to("/compare")
}
