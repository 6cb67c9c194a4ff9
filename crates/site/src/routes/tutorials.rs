//! Tutorial route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::Tutorial;
use crate::content::render_markdown;
use crate::directory::{ALL, filter_tutorials};
use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::tools::CategoryOptionView;
use crate::state::AppState;

/// Tutorial card display data for templates.
///
/// Shared by the tutorial grid and the home page section.
#[derive(Clone)]
pub struct TutorialCardView {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    /// Category slug; capitalized in the template badge.
    pub category: String,
    pub excerpt: String,
    pub author: String,
    pub read_time_minutes: u32,
}

impl From<&Tutorial> for TutorialCardView {
    fn from(tutorial: &Tutorial) -> Self {
        Self {
            id: tutorial.id.to_string(),
            title: tutorial.title.clone(),
            thumbnail_url: tutorial.thumbnail_url.clone(),
            category: tutorial.category.to_string(),
            excerpt: tutorial.excerpt.clone(),
            author: tutorial.author.clone(),
            read_time_minutes: tutorial.read_time_minutes,
        }
    }
}

/// Full tutorial display data with the rendered article body.
#[derive(Clone)]
pub struct TutorialView {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub category: String,
    pub author: String,
    pub read_time_minutes: u32,
    pub published_display: String,
    pub body_html: String,
}

impl From<&Tutorial> for TutorialView {
    fn from(tutorial: &Tutorial) -> Self {
        Self {
            id: tutorial.id.to_string(),
            title: tutorial.title.clone(),
            thumbnail_url: tutorial.thumbnail_url.clone(),
            category: tutorial.category.to_string(),
            author: tutorial.author.clone(),
            read_time_minutes: tutorial.read_time_minutes,
            published_display: tutorial.published_at.format("%B %-d, %Y").to_string(),
            body_html: render_markdown(&tutorial.body_markdown),
        }
    }
}

/// Tutorial listing query parameters.
#[derive(Debug, Deserialize)]
pub struct TutorialsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Tutorial listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "tutorials/index.html")]
pub struct TutorialsIndexTemplate {
    pub tutorials: Vec<TutorialCardView>,
    pub search_value: String,
    pub selected_category: String,
    /// Category pill row; the first few categories beside the All pill.
    pub category_pills: Vec<CategoryOptionView>,
}

/// Tutorial detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "tutorials/show.html")]
pub struct TutorialShowTemplate {
    pub tutorial: TutorialView,
}

/// How many category pills the listing page offers.
const CATEGORY_PILL_COUNT: usize = 5;

/// Display the tutorial listing with search and category pills.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<TutorialsQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog();
    let search = query.search.as_deref().unwrap_or("").trim().to_string();
    let category = query.category.clone().unwrap_or_else(|| ALL.to_string());

    let tutorials = filter_tutorials(catalog.tutorials(), &search, &category)
        .into_iter()
        .map(TutorialCardView::from)
        .collect();

    TutorialsIndexTemplate {
        tutorials,
        search_value: search,
        selected_category: category,
        category_pills: catalog
            .categories()
            .iter()
            .take(CATEGORY_PILL_COUNT)
            .map(Into::into)
            .collect(),
    }
}

/// Display a single tutorial with its rendered article body.
///
/// # Errors
///
/// Returns 404 if no tutorial has the given id.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let tutorial = state
        .catalog()
        .tutorial(&id)
        .ok_or_else(|| AppError::NotFound(format!("/tutorials/{id}")))?;

    Ok(TutorialShowTemplate {
        tutorial: TutorialView::from(tutorial),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_tutorial_view_renders_body() {
        let catalog = Catalog::new();
        let tutorial = catalog.tutorial("1").unwrap();
        let view = TutorialView::from(tutorial);

        assert!(view.body_html.contains("<h2"));
        assert_eq!(view.published_display, "January 15, 2024");
    }

    #[test]
    fn test_card_view_carries_read_time() {
        let catalog = Catalog::new();
        let card = TutorialCardView::from(catalog.tutorial("2").unwrap());
        assert_eq!(card.read_time_minutes, 12);
        assert_eq!(card.category, "image");
    }
}
