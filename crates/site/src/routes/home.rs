//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::catalog::{Catalog, Category, Tool};
use crate::filters;
use crate::routes::tools::ToolCardView;
use crate::routes::tutorials::TutorialCardView;
use crate::state::AppState;

/// Search shortcuts shown under the hero search box.
const POPULAR_SEARCHES: [&str; 4] = ["ChatGPT", "Midjourney", "GitHub Copilot", "Claude"];

/// Category tile display data for the home grid.
#[derive(Clone)]
pub struct CategoryCardView {
    pub slug: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub count: u32,
    pub color: String,
}

impl From<&Category> for CategoryCardView {
    fn from(category: &Category) -> Self {
        Self {
            slug: category.slug.to_string(),
            name: category.name.clone(),
            icon: category.icon.clone(),
            description: category.description.clone(),
            count: category.count,
            color: category.color.clone(),
        }
    }
}

/// Featured tool display data for the editor's choice cards.
///
/// Larger than the regular card: full description and three feature badges.
#[derive(Clone)]
pub struct FeaturedToolView {
    pub slug: String,
    pub name: String,
    pub logo_url: String,
    pub rating: String,
    pub review_count: String,
    pub description: String,
    pub lead_features: Vec<String>,
    pub extra_features: usize,
    pub pricing_label: &'static str,
    pub pricing_class: &'static str,
}

impl FeaturedToolView {
    fn new(tool: &Tool) -> Self {
        Self {
            slug: tool.slug.to_string(),
            name: tool.name.clone(),
            logo_url: tool.logo_url.clone(),
            rating: format!("{:.1}", tool.rating),
            review_count: format_count(tool.review_count),
            description: tool.description.clone(),
            lead_features: tool.features.iter().take(3).cloned().collect(),
            extra_features: tool.features.len().saturating_sub(3),
            pricing_label: tool.pricing.label(),
            pricing_class: tool.pricing.as_str(),
        }
    }
}

/// Format a review count with thousands separators ("12,453").
fn format_count(count: u32) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Category tiles linking into the filtered directory.
    pub categories: Vec<CategoryCardView>,
    /// Trending section (first four trending tools).
    pub trending: Vec<ToolCardView>,
    /// Editor's choice section (first three featured tools).
    pub featured: Vec<FeaturedToolView>,
    /// Latest tutorials section.
    pub tutorials: Vec<TutorialCardView>,
    /// Search shortcuts under the hero search box.
    pub popular_searches: [&'static str; 4],
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let catalog: &Catalog = state.catalog();

    HomeTemplate {
        categories: catalog.categories().iter().map(Into::into).collect(),
        trending: catalog
            .trending_tools()
            .into_iter()
            .map(|tool| ToolCardView::new(tool, catalog))
            .collect(),
        featured: catalog
            .featured_tools()
            .into_iter()
            .map(FeaturedToolView::new)
            .collect(),
        tutorials: catalog
            .latest_tutorials()
            .into_iter()
            .map(TutorialCardView::from)
            .collect(),
        popular_searches: POPULAR_SEARCHES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_sections_are_capped() {
        let catalog = Catalog::new();

        assert_eq!(catalog.trending_tools().len(), 4);
        assert_eq!(catalog.featured_tools().len(), 3);
        assert_eq!(catalog.latest_tutorials().len(), 4);
    }

    #[test]
    fn test_featured_view_shows_three_feature_badges() {
        let catalog = Catalog::new();
        let featured = catalog.featured_tools();
        let first = featured.first().map(|tool| FeaturedToolView::new(tool));

        // ChatGPT leads the featured section with six features
        let view = first.expect("featured tools are never empty");
        assert_eq!(view.name, "ChatGPT");
        assert_eq!(view.lead_features.len(), 3);
        assert_eq!(view.extra_features, 3);
        assert_eq!(view.review_count, "12,500");
    }
}
