//! Static descriptive record attached to a page at authoring time.

use crate::frontmatter::{FrontmatterError, extract_frontmatter};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Link to a neighbouring page in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    /// Title of the linked page.
    pub title: String,
    /// Served URL of the linked page.
    pub permalink: String,
}

/// Page metadata, passed through rendering unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Document id, usually the source path without extension (`homepage/alert`).
    pub id: String,
    /// Page title.
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Route slug (`/homepage/alert`).
    pub slug: String,
    /// Served URL including the site base path.
    #[serde(default)]
    pub permalink: String,
    /// Authoring source path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Position inside the sidebar category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_position: Option<f64>,
    /// Sidebar and neighbour-link label, when it differs from the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_label: Option<String>,
    /// Draft pages.
    #[serde(default)]
    pub draft: bool,
    /// Hidden from navigation.
    #[serde(default)]
    pub unlisted: bool,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Previous page in reading order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<NavLink>,
    /// Next page in reading order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NavLink>,
    /// Raw front matter mapping.
    #[serde(default)]
    pub front_matter: JsonValue,
}

impl PageMetadata {
    /// Builds metadata for a document from its id and YAML front matter.
    ///
    /// `base_path` is the site prefix used for the permalink (`/docs/`). The
    /// title falls back to `fallback_title` (typically the first level-1
    /// heading), and the slug falls back to `/` + `id`.
    pub fn from_markdown(
        id: &str,
        source: &str,
        base_path: &str,
        fallback_title: &str,
    ) -> Result<Self, FrontmatterError> {
        let extraction = extract_frontmatter(source)?;
        let front_matter = extraction.front_matter;

        let slug = match front_matter.slug {
            Some(slug) if slug.starts_with('/') => slug,
            Some(slug) => format!("/{slug}"),
            None => format!("/{}", id.trim_start_matches('/')),
        };
        let permalink = format!("{}{}", base_path.trim_end_matches('/'), slug);

        Ok(Self {
            id: id.to_string(),
            title: front_matter
                .title
                .unwrap_or_else(|| fallback_title.to_string()),
            description: front_matter.description.unwrap_or_default(),
            slug,
            permalink,
            source: None,
            sidebar_position: front_matter.sidebar_position,
            sidebar_label: front_matter.sidebar_label,
            draft: front_matter.draft,
            unlisted: front_matter.unlisted,
            tags: front_matter.tags,
            previous: None,
            next: None,
            front_matter: extraction.raw,
        })
    }

    /// Title used in the sidebar and in neighbour links.
    pub fn nav_title(&self) -> &str {
        self.sidebar_label.as_deref().unwrap_or(&self.title)
    }
}

/// Links each page to its neighbours in sidebar order.
///
/// Pages are ordered by `sidebar_position` (pages without one go last, in
/// their given order). Draft and unlisted pages are skipped as link targets
/// and lose any links they held. Links carry the sidebar label when set.
pub fn link_neighbours(pages: &mut [PageMetadata]) {
    for page in pages.iter_mut().filter(|p| p.draft || p.unlisted) {
        page.previous = None;
        page.next = None;
    }

    let mut order: Vec<usize> = (0..pages.len())
        .filter(|&i| !pages[i].draft && !pages[i].unlisted)
        .collect();
    order.sort_by(|&a, &b| {
        let key = |i: usize| pages[i].sidebar_position.unwrap_or(f64::INFINITY);
        key(a).total_cmp(&key(b))
    });

    let links: Vec<NavLink> = order
        .iter()
        .map(|&i| NavLink {
            title: pages[i].nav_title().to_string(),
            permalink: pages[i].permalink.clone(),
        })
        .collect();

    for (rank, &i) in order.iter().enumerate() {
        pages[i].previous = rank.checked_sub(1).map(|prev| links[prev].clone());
        pages[i].next = links.get(rank + 1).cloned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_frontmatter() {
        let source = "---\nsidebar_position: 3\ndescription: POST /api/widgets/alert\n---\n# Alert API\n";
        let meta = PageMetadata::from_markdown(
            "homepage/alert",
            source,
            "/slc-document/docs/",
            "Alert API",
        )
        .unwrap();
        assert_eq!(meta.title, "Alert API");
        assert_eq!(meta.slug, "/homepage/alert");
        assert_eq!(meta.permalink, "/slc-document/docs/homepage/alert");
        assert_eq!(meta.description, "POST /api/widgets/alert");
        assert_eq!(meta.sidebar_position, Some(3.0));
        assert_eq!(meta.front_matter["sidebar_position"], 3);
    }

    #[test]
    fn explicit_slug_and_title_win() {
        let source = "---\ntitle: Alerts\nslug: alerts\n---\nBody";
        let meta = PageMetadata::from_markdown("homepage/alert", source, "/docs", "Alert API")
            .unwrap();
        assert_eq!(meta.title, "Alerts");
        assert_eq!(meta.slug, "/alerts");
        assert_eq!(meta.permalink, "/docs/alerts");
    }

    fn page(title: &str, position: Option<f64>) -> PageMetadata {
        PageMetadata {
            title: title.to_string(),
            permalink: format!("/docs/{}", title.to_lowercase()),
            sidebar_position: position,
            ..Default::default()
        }
    }

    #[test]
    fn neighbours_follow_sidebar_position() {
        let mut pages = vec![
            page("Alert", Some(3.0)),
            page("Daily", Some(1.0)),
            page("Team", Some(2.0)),
            page("Misc", None),
        ];
        link_neighbours(&mut pages);

        assert_eq!(pages[1].previous, None);
        assert_eq!(pages[1].next.as_ref().map(|l| l.title.as_str()), Some("Team"));
        assert_eq!(pages[0].previous.as_ref().map(|l| l.title.as_str()), Some("Team"));
        assert_eq!(pages[0].next.as_ref().map(|l| l.title.as_str()), Some("Misc"));
        assert_eq!(pages[3].next, None);
    }

    #[test]
    fn drafts_are_not_linked() {
        let mut pages = vec![page("A", Some(1.0)), page("B", Some(2.0)), page("C", Some(3.0))];
        pages[1].draft = true;
        link_neighbours(&mut pages);
        assert_eq!(pages[0].next.as_ref().map(|l| l.title.as_str()), Some("C"));
        assert_eq!(pages[2].previous.as_ref().map(|l| l.title.as_str()), Some("A"));
        assert_eq!(pages[1].next, None);
    }

    #[test]
    fn relinking_clears_links_of_hidden_pages() {
        let mut pages = vec![page("A", Some(1.0)), page("B", Some(2.0)), page("C", Some(3.0))];
        link_neighbours(&mut pages);
        assert!(pages[1].previous.is_some() && pages[1].next.is_some());

        pages[1].unlisted = true;
        link_neighbours(&mut pages);
        assert_eq!(pages[1].previous, None);
        assert_eq!(pages[1].next, None);
        assert_eq!(pages[0].next.as_ref().map(|l| l.title.as_str()), Some("C"));
    }

    #[test]
    fn sidebar_label_names_neighbour_links() {
        let source = "---\nsidebar_position: 1\nsidebar_label: Alerts\n---\n# Alert API\n";
        let alert = PageMetadata::from_markdown("homepage/alert", source, "/docs/", "Alert API")
            .unwrap();
        assert_eq!(alert.sidebar_label.as_deref(), Some("Alerts"));
        assert_eq!(alert.nav_title(), "Alerts");

        let mut pages = vec![alert, page("Team", Some(2.0))];
        link_neighbours(&mut pages);
        assert_eq!(pages[1].previous.as_ref().map(|l| l.title.as_str()), Some("Alerts"));
        assert_eq!(pages[0].title, "Alert API");
    }
}
