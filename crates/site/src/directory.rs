//! Directory filter/sort engine.
//!
//! Pure functions over the fixture collections. Given the full tool list and
//! a set of criteria, produce the filtered, ordered sequence the directory
//! page renders. There are no error cases: empty criteria and empty results
//! are both valid.

use crate::catalog::{Tool, Tutorial};

/// Sentinel selector value that disables the category or pricing filter.
pub const ALL: &str = "all";

/// Directory sort order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Descending review count.
    #[default]
    MostPopular,
    /// Descending rating.
    HighestRated,
    /// Descending creation date.
    Latest,
    /// Ascending name.
    Name,
}

impl SortKey {
    /// All sort keys in display order, for building the sort selector.
    pub const VALUES: [Self; 4] = [
        Self::MostPopular,
        Self::HighestRated,
        Self::Latest,
        Self::Name,
    ];

    /// Parse from URL parameter value. Unknown values fall back to the default.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "rating" => Self::HighestRated,
            "latest" => Self::Latest,
            "name" => Self::Name,
            _ => Self::MostPopular,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MostPopular => "popular",
            Self::HighestRated => "rating",
            Self::Latest => "latest",
            Self::Name => "name",
        }
    }

    /// Human-readable label for the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MostPopular => "Most Popular",
            Self::HighestRated => "Highest Rated",
            Self::Latest => "Latest",
            Self::Name => "Name",
        }
    }
}

/// Restriction to flagged tools via the `filter` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagFilter {
    Featured,
    Trending,
}

impl FlagFilter {
    /// Parse from URL parameter value. Unknown values disable the filter.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "featured" => Some(Self::Featured),
            "trending" => Some(Self::Trending),
            _ => None,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Trending => "trending",
        }
    }

    const fn matches(self, tool: &Tool) -> bool {
        match self {
            Self::Featured => tool.featured,
            Self::Trending => tool.trending,
        }
    }
}

/// Filter and sort criteria for the tool directory.
///
/// `category` and `pricing` are kept as raw selector strings: the `all`
/// sentinel (or an empty string) disables the filter, and an unknown value
/// simply matches nothing.
#[derive(Debug, Clone)]
pub struct DirectoryCriteria {
    pub search: String,
    pub category: String,
    pub pricing: String,
    pub sort: SortKey,
    pub flag: Option<FlagFilter>,
}

impl Default for DirectoryCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL.to_string(),
            pricing: ALL.to_string(),
            sort: SortKey::default(),
            flag: None,
        }
    }
}

impl DirectoryCriteria {
    /// Number of active filters (search, category, pricing).
    ///
    /// The sort order and flag restriction are not counted; the badge row
    /// shows only the three clearable filters.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.search.is_empty())
            + usize::from(selector_is_active(&self.category))
            + usize::from(selector_is_active(&self.pricing))
    }
}

/// Apply all active filters, then sort.
///
/// Every predicate must hold for a tool to appear. Ties in every sort mode
/// preserve fixture order (stable sort).
#[must_use]
pub fn filter_tools<'a>(tools: &'a [Tool], criteria: &DirectoryCriteria) -> Vec<&'a Tool> {
    let query = criteria.search.to_lowercase();

    let mut result: Vec<&Tool> = tools
        .iter()
        .filter(|tool| matches_search(tool, &query))
        .filter(|tool| matches_selector(tool.category.as_str(), &criteria.category))
        .filter(|tool| matches_selector(tool.pricing.as_str(), &criteria.pricing))
        .filter(|tool| criteria.flag.is_none_or(|flag| flag.matches(tool)))
        .collect();

    sort_tools(&mut result, criteria.sort);
    result
}

/// Filter the tutorial list by title/excerpt substring and category.
#[must_use]
pub fn filter_tutorials<'a>(
    tutorials: &'a [Tutorial],
    search: &str,
    category: &str,
) -> Vec<&'a Tutorial> {
    let query = search.to_lowercase();

    tutorials
        .iter()
        .filter(|tutorial| {
            query.is_empty()
                || tutorial.title.to_lowercase().contains(&query)
                || tutorial.excerpt.to_lowercase().contains(&query)
        })
        .filter(|tutorial| matches_selector(tutorial.category.as_str(), category))
        .collect()
}

/// Case-insensitive substring match against name, description, or any feature.
///
/// `query` must already be lowercased.
fn matches_search(tool: &Tool, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    tool.name.to_lowercase().contains(query)
        || tool.description.to_lowercase().contains(query)
        || tool
            .features
            .iter()
            .any(|feature| feature.to_lowercase().contains(query))
}

/// Exact-equality selector with the `all` sentinel disabling the filter.
fn matches_selector(value: &str, selected: &str) -> bool {
    !selector_is_active(selected) || value == selected
}

fn selector_is_active(selected: &str) -> bool {
    !selected.is_empty() && selected != ALL
}

fn sort_tools(tools: &mut [&Tool], sort: SortKey) {
    match sort {
        SortKey::MostPopular => tools.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
        SortKey::HighestRated => tools.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Latest => tools.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Name => tools.sort_by(|a, b| a.name.cmp(&b.name)),
    }
}
