//! Tool directory route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::{Catalog, Category, Tool};
use crate::directory::{ALL, DirectoryCriteria, FlagFilter, SortKey, filter_tools};
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Tool card display data for templates.
///
/// Shared by the directory grid and the home page sections.
#[derive(Clone)]
pub struct ToolCardView {
    pub slug: String,
    pub name: String,
    pub logo_url: String,
    pub rating: String,
    pub category_name: String,
    pub short_description: String,
    /// First two feature badges.
    pub lead_features: Vec<String>,
    /// How many features the `+N` badge stands for.
    pub extra_features: usize,
    pub pricing_label: &'static str,
    pub pricing_class: &'static str,
}

impl ToolCardView {
    pub fn new(tool: &Tool, catalog: &Catalog) -> Self {
        Self {
            slug: tool.slug.to_string(),
            name: tool.name.clone(),
            logo_url: tool.logo_url.clone(),
            rating: format_rating(tool.rating),
            category_name: catalog.category_name(&tool.category).to_string(),
            short_description: tool.short_description.clone(),
            lead_features: tool.features.iter().take(2).cloned().collect(),
            extra_features: tool.features.len().saturating_sub(2),
            pricing_label: tool.pricing.label(),
            pricing_class: tool.pricing.as_str(),
        }
    }
}

/// Tool detail display data for templates.
#[derive(Clone)]
pub struct ToolDetailView {
    pub slug: String,
    pub name: String,
    pub logo_url: String,
    pub rating: String,
    pub review_count: String,
    pub category_slug: String,
    pub category_name: String,
    pub short_description: String,
    pub description: String,
    pub features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// Sidebar price line; falls back when no detail string is set.
    pub price_display: String,
    pub official_url: String,
    pub affiliate_url: Option<String>,
    pub pricing_label: &'static str,
    pub pricing_class: &'static str,
}

impl ToolDetailView {
    fn new(tool: &Tool, catalog: &Catalog) -> Self {
        Self {
            slug: tool.slug.to_string(),
            name: tool.name.clone(),
            logo_url: tool.logo_url.clone(),
            rating: format_rating(tool.rating),
            review_count: format_count(tool.review_count),
            category_slug: tool.category.to_string(),
            category_name: catalog.category_name(&tool.category).to_string(),
            short_description: tool.short_description.clone(),
            description: tool.description.clone(),
            features: tool.features.clone(),
            pros: tool.pros.clone(),
            cons: tool.cons.clone(),
            price_display: tool
                .price_details
                .clone()
                .unwrap_or_else(|| "Visit website".to_string()),
            official_url: tool.official_url.clone(),
            affiliate_url: tool.affiliate_url.clone(),
            pricing_label: tool.pricing.label(),
            pricing_class: tool.pricing.as_str(),
        }
    }
}

/// Compact entry for the "Similar Tools" sidebar.
#[derive(Clone)]
pub struct RelatedToolView {
    pub slug: String,
    pub name: String,
    pub logo_url: String,
    pub rating: String,
    pub pricing_label: &'static str,
}

impl RelatedToolView {
    fn new(tool: &Tool) -> Self {
        Self {
            slug: tool.slug.to_string(),
            name: tool.name.clone(),
            logo_url: tool.logo_url.clone(),
            rating: format_rating(tool.rating),
            pricing_label: tool.pricing.label(),
        }
    }
}

/// Category entry for the filter dropdown.
#[derive(Clone)]
pub struct CategoryOptionView {
    pub slug: String,
    pub name: String,
}

impl From<&Category> for CategoryOptionView {
    fn from(category: &Category) -> Self {
        Self {
            slug: category.slug.to_string(),
            name: category.name.clone(),
        }
    }
}

/// An active filter badge with a link that clears just that filter.
#[derive(Clone)]
pub struct ActiveFilterView {
    pub label: String,
    pub clear_url: String,
}

/// Directory query parameters.
#[derive(Debug, Deserialize)]
pub struct DirectoryQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub pricing: Option<String>,
    pub sort: Option<String>,
    pub filter: Option<String>,
}

impl DirectoryQuery {
    /// Normalize raw query parameters into directory criteria.
    fn criteria(&self) -> DirectoryCriteria {
        DirectoryCriteria {
            search: self.search.as_deref().unwrap_or("").trim().to_string(),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| ALL.to_string()),
            pricing: self.pricing.clone().unwrap_or_else(|| ALL.to_string()),
            sort: self.sort.as_deref().map(SortKey::parse).unwrap_or_default(),
            flag: self.filter.as_deref().and_then(FlagFilter::parse),
        }
    }
}

/// Directory listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "tools/index.html")]
pub struct ToolsIndexTemplate {
    pub total_tools: usize,
    pub total_categories: usize,
    pub shown_count: usize,
    pub tools: Vec<ToolCardView>,
    pub categories: Vec<CategoryOptionView>,
    pub search_value: String,
    pub selected_category: String,
    pub selected_pricing: String,
    pub selected_sort: SortKey,
    pub sort_options: [SortKey; 4],
    pub flag_value: String,
    pub active_filters: Vec<ActiveFilterView>,
}

/// Tool detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "tools/show.html")]
pub struct ToolShowTemplate {
    pub tool: ToolDetailView,
    pub related: Vec<RelatedToolView>,
}

/// Display the directory listing with filters applied.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog();
    let criteria = query.criteria();

    let matches = filter_tools(catalog.tools(), &criteria);
    let tools: Vec<ToolCardView> = matches
        .iter()
        .map(|tool| ToolCardView::new(tool, catalog))
        .collect();

    ToolsIndexTemplate {
        total_tools: catalog.tools().len(),
        total_categories: catalog.categories().len(),
        shown_count: tools.len(),
        tools,
        categories: catalog.categories().iter().map(Into::into).collect(),
        search_value: criteria.search.clone(),
        selected_category: criteria.category.clone(),
        selected_pricing: criteria.pricing.clone(),
        selected_sort: criteria.sort,
        sort_options: SortKey::VALUES,
        flag_value: criteria.flag.map(FlagFilter::as_str).unwrap_or("").to_string(),
        active_filters: active_filters(catalog, &criteria),
    }
}

/// Display a tool detail page.
///
/// # Errors
///
/// Returns 404 if no tool has the given slug.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let catalog = state.catalog();
    let tool = catalog
        .tool(&slug)
        .ok_or_else(|| AppError::NotFound(format!("/tools/{slug}")))?;

    let related = catalog
        .related_tools(tool)
        .into_iter()
        .map(RelatedToolView::new)
        .collect();

    Ok(ToolShowTemplate {
        tool: ToolDetailView::new(tool, catalog),
        related,
    })
}

/// Build the active filter badges with per-filter clear links.
fn active_filters(catalog: &Catalog, criteria: &DirectoryCriteria) -> Vec<ActiveFilterView> {
    if criteria.active_filter_count() == 0 {
        return Vec::new();
    }

    let mut cleared = criteria.clone();
    let mut badges = Vec::new();

    if criteria.category != ALL && !criteria.category.is_empty() {
        let label = catalog
            .category(&criteria.category)
            .map_or_else(|| criteria.category.clone(), |c| c.name.clone());
        cleared.category = ALL.to_string();
        badges.push(ActiveFilterView {
            label,
            clear_url: directory_url(&cleared),
        });
        cleared.category.clone_from(&criteria.category);
    }

    if criteria.pricing != ALL && !criteria.pricing.is_empty() {
        cleared.pricing = ALL.to_string();
        badges.push(ActiveFilterView {
            label: capitalize(&criteria.pricing),
            clear_url: directory_url(&cleared),
        });
        cleared.pricing.clone_from(&criteria.pricing);
    }

    if !criteria.search.is_empty() {
        cleared.search = String::new();
        badges.push(ActiveFilterView {
            label: format!("\"{}\"", criteria.search),
            clear_url: directory_url(&cleared),
        });
    }

    badges
}

/// Build a `/tools` URL carrying the non-default parts of the criteria.
fn directory_url(criteria: &DirectoryCriteria) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;

    if !criteria.search.is_empty() {
        serializer.append_pair("search", &criteria.search);
        any = true;
    }
    if criteria.category != ALL && !criteria.category.is_empty() {
        serializer.append_pair("category", &criteria.category);
        any = true;
    }
    if criteria.pricing != ALL && !criteria.pricing.is_empty() {
        serializer.append_pair("pricing", &criteria.pricing);
        any = true;
    }
    if criteria.sort != SortKey::default() {
        serializer.append_pair("sort", criteria.sort.as_str());
        any = true;
    }
    if let Some(flag) = criteria.flag {
        serializer.append_pair("filter", flag.as_str());
        any = true;
    }

    if any {
        format!("/tools?{}", serializer.finish())
    } else {
        "/tools".to_string()
    }
}

/// Format a rating with one decimal place ("4.8").
fn format_rating(rating: f32) -> String {
    format!("{rating:.1}")
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

/// Uppercase the first character ("freemium" -> "Freemium").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
