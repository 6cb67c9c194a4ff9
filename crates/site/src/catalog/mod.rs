//! In-memory catalog of tools, categories, and tutorials.
//!
//! The entire dataset is compiled into the binary and built once at startup.
//! Nothing here is ever mutated: every page read, filter, and comparison
//! operates on this fixed collection. The admin dashboard additionally shows
//! fixture submissions and subscribers, which no public form appends to.

use chrono::NaiveDate;

use ai_tools_hub_core::{CategorySlug, Email, Pricing, ToolSlug, TutorialId};

mod fixtures;

/// An AI tool listing.
#[derive(Debug, Clone)]
pub struct Tool {
    pub slug: ToolSlug,
    pub name: String,
    pub logo_url: String,
    /// Full description shown on the detail page and searched by the directory.
    pub description: String,
    /// One-line description shown on cards.
    pub short_description: String,
    pub category: CategorySlug,
    pub pricing: Pricing,
    /// Human-readable pricing breakdown, e.g. "Free tier, Pro at $20/month".
    pub price_details: Option<String>,
    pub features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub official_url: String,
    pub affiliate_url: Option<String>,
    pub screenshots: Vec<String>,
    /// Average rating, one decimal, 0.0 to 5.0.
    pub rating: f32,
    pub review_count: u32,
    pub created_at: NaiveDate,
    pub trending: bool,
    pub featured: bool,
}

/// A tutorial article.
#[derive(Debug, Clone)]
pub struct Tutorial {
    pub id: TutorialId,
    pub title: String,
    pub thumbnail_url: String,
    pub category: CategorySlug,
    pub excerpt: String,
    /// Markdown body, rendered to HTML on the detail page.
    pub body_markdown: String,
    pub author: String,
    pub read_time_minutes: u32,
    pub published_at: NaiveDate,
}

/// A browsing category.
///
/// `count` is the advertised tool total for the category across the whole
/// ecosystem, not the number of fixture tools in this catalog. It is display
/// copy and is never recomputed.
#[derive(Debug, Clone)]
pub struct Category {
    pub slug: CategorySlug,
    pub name: String,
    /// Icon token consumed by the stylesheet (e.g. "pen-tool").
    pub icon: String,
    pub description: String,
    pub count: u32,
    /// Color token consumed by the stylesheet (e.g. "writing").
    pub color: String,
}

/// A pending tool submission shown on the admin dashboard.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: String,
    pub company_name: String,
    pub tool_name: String,
    pub email: Email,
    pub status: String,
}

/// A newsletter subscriber shown on the admin dashboard.
#[derive(Debug, Clone)]
pub struct Subscriber {
    pub id: String,
    pub email: Email,
    pub subscribed_at: NaiveDate,
}

/// Number of trending tools shown on the home page.
const TRENDING_COUNT: usize = 4;

/// Number of featured tools shown on the home page.
const FEATURED_COUNT: usize = 3;

/// Number of tutorials shown in the latest-tutorials section.
const LATEST_TUTORIALS_COUNT: usize = 4;

/// Number of related tools shown on a tool detail page.
const RELATED_COUNT: usize = 3;

/// The read-only fixture catalog.
///
/// Built once at startup and shared behind the application state. All
/// accessors return references into the fixture collections in their
/// original order.
#[derive(Debug)]
pub struct Catalog {
    tools: Vec<Tool>,
    categories: Vec<Category>,
    tutorials: Vec<Tutorial>,
    submissions: Vec<Submission>,
    subscribers: Vec<Subscriber>,
}

impl Catalog {
    /// Build the catalog from the compiled-in fixtures.
    #[must_use]
    pub fn new() -> Self {
        let catalog = Self {
            tools: fixtures::tools(),
            categories: fixtures::categories(),
            tutorials: fixtures::tutorials(),
            submissions: fixtures::submissions(),
            subscribers: fixtures::subscribers(),
        };

        // Fixture data is compiled in, so uniqueness violations are
        // programming errors caught in debug builds.
        debug_assert!(
            has_unique_keys(catalog.tools.iter().map(|t| t.slug.as_str())),
            "tool slugs must be unique"
        );
        debug_assert!(
            has_unique_keys(catalog.categories.iter().map(|c| c.slug.as_str())),
            "category slugs must be unique"
        );
        debug_assert!(
            has_unique_keys(catalog.tutorials.iter().map(|t| t.id.as_str())),
            "tutorial ids must be unique"
        );

        catalog
    }

    /// All tools in fixture order.
    #[must_use]
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// All categories in fixture order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All tutorials in fixture order.
    #[must_use]
    pub fn tutorials(&self) -> &[Tutorial] {
        &self.tutorials
    }

    /// All pending submissions in fixture order.
    #[must_use]
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// All subscribers in fixture order.
    #[must_use]
    pub fn subscribers(&self) -> &[Subscriber] {
        &self.subscribers
    }

    /// Look up a tool by slug.
    #[must_use]
    pub fn tool(&self, slug: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.slug.as_str() == slug)
    }

    /// Look up a category by slug.
    #[must_use]
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug.as_str() == slug)
    }

    /// Look up a tutorial by id.
    #[must_use]
    pub fn tutorial(&self, id: &str) -> Option<&Tutorial> {
        self.tutorials.iter().find(|t| t.id.as_str() == id)
    }

    /// Display name for a category slug, falling back to the raw slug.
    ///
    /// Tools reference categories by slug; a dangling reference renders as
    /// the slug itself rather than breaking the page.
    #[must_use]
    pub fn category_name<'a>(&'a self, slug: &'a CategorySlug) -> &'a str {
        self.category(slug.as_str())
            .map_or_else(|| slug.as_str(), |c| c.name.as_str())
    }

    /// The first four tools flagged as trending, in fixture order.
    #[must_use]
    pub fn trending_tools(&self) -> Vec<&Tool> {
        self.tools
            .iter()
            .filter(|t| t.trending)
            .take(TRENDING_COUNT)
            .collect()
    }

    /// The first three tools flagged as featured, in fixture order.
    #[must_use]
    pub fn featured_tools(&self) -> Vec<&Tool> {
        self.tools
            .iter()
            .filter(|t| t.featured)
            .take(FEATURED_COUNT)
            .collect()
    }

    /// The first four tutorials, in fixture order.
    #[must_use]
    pub fn latest_tutorials(&self) -> Vec<&Tutorial> {
        self.tutorials.iter().take(LATEST_TUTORIALS_COUNT).collect()
    }

    /// Up to three tools sharing a category with `tool`, excluding it.
    #[must_use]
    pub fn related_tools(&self, tool: &Tool) -> Vec<&Tool> {
        self.tools
            .iter()
            .filter(|t| t.category == tool.category && t.slug != tool.slug)
            .take(RELATED_COUNT)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that every key produced by the iterator is distinct.
fn has_unique_keys<'a>(keys: impl Iterator<Item = &'a str>) -> bool {
    let mut seen = std::collections::HashSet::new();
    keys.into_iter().all(|key| seen.insert(key))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_counts() {
        let catalog = Catalog::new();
        assert_eq!(catalog.tools().len(), 8);
        assert_eq!(catalog.categories().len(), 8);
        assert_eq!(catalog.tutorials().len(), 4);
        assert_eq!(catalog.submissions().len(), 2);
        assert_eq!(catalog.subscribers().len(), 3);
    }

    #[test]
    fn test_slugs_are_unique() {
        let catalog = Catalog::new();
        assert!(has_unique_keys(
            catalog.tools().iter().map(|t| t.slug.as_str())
        ));
        assert!(has_unique_keys(
            catalog.categories().iter().map(|c| c.slug.as_str())
        ));
        assert!(has_unique_keys(
            catalog.tutorials().iter().map(|t| t.id.as_str())
        ));
    }

    #[test]
    fn test_tool_lookup() {
        let catalog = Catalog::new();

        let tool = catalog.tool("chatgpt").unwrap();
        assert_eq!(tool.name, "ChatGPT");
        assert_eq!(tool.category.as_str(), "chat");
        assert_eq!(tool.pricing, Pricing::Freemium);
        assert_eq!(tool.review_count, 12500);

        assert!(catalog.tool("no-such-tool").is_none());
    }

    #[test]
    fn test_category_lookup() {
        let catalog = Catalog::new();

        let category = catalog.category("writing").unwrap();
        assert_eq!(category.name, "Writing");
        assert_eq!(category.count, 45);

        assert!(catalog.category("cooking").is_none());
    }

    #[test]
    fn test_tutorial_lookup() {
        let catalog = Catalog::new();

        let tutorial = catalog.tutorial("1").unwrap();
        assert!(tutorial.title.starts_with("Getting Started with ChatGPT"));
        assert_eq!(tutorial.author, "Sarah Johnson");
        assert_eq!(tutorial.read_time_minutes, 8);

        assert!(catalog.tutorial("99").is_none());
    }

    #[test]
    fn test_category_name_falls_back_to_slug() {
        let catalog = Catalog::new();
        assert_eq!(catalog.category_name(&CategorySlug::from("chat")), "Chatbots");
        assert_eq!(
            catalog.category_name(&CategorySlug::from("dangling")),
            "dangling"
        );
    }

    #[test]
    fn test_trending_tools() {
        let catalog = Catalog::new();
        let trending: Vec<&str> = catalog
            .trending_tools()
            .iter()
            .map(|t| t.slug.as_str())
            .collect();
        assert_eq!(trending, ["chatgpt", "midjourney", "claude", "runway"]);
    }

    #[test]
    fn test_featured_tools() {
        let catalog = Catalog::new();
        let featured: Vec<&str> = catalog
            .featured_tools()
            .iter()
            .map(|t| t.slug.as_str())
            .collect();
        assert_eq!(featured, ["chatgpt", "github-copilot", "elevenlabs"]);
    }

    #[test]
    fn test_latest_tutorials() {
        let catalog = Catalog::new();
        let ids: Vec<&str> = catalog
            .latest_tutorials()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_related_tools_share_category_and_exclude_self() {
        let catalog = Catalog::new();

        let chatgpt = catalog.tool("chatgpt").unwrap();
        let related: Vec<&str> = catalog
            .related_tools(chatgpt)
            .iter()
            .map(|t| t.slug.as_str())
            .collect();
        assert_eq!(related, ["claude"]);

        // Midjourney is the only image tool, so nothing is related.
        let midjourney = catalog.tool("midjourney").unwrap();
        assert!(catalog.related_tools(midjourney).is_empty());
    }

    #[test]
    fn test_category_counts_are_static_copy() {
        let catalog = Catalog::new();

        // The writing category advertises 45 tools while the fixture set
        // contains exactly one. The displayed count must stay the fixture
        // integer.
        let writing_fixtures = catalog
            .tools()
            .iter()
            .filter(|t| t.category.as_str() == "writing")
            .count();
        assert_eq!(writing_fixtures, 1);
        assert_eq!(catalog.category("writing").unwrap().count, 45);
    }

    #[test]
    fn test_tutorials_carry_markdown_bodies() {
        let catalog = Catalog::new();
        for tutorial in catalog.tutorials() {
            assert!(!tutorial.body_markdown.trim().is_empty());
        }
    }
}
