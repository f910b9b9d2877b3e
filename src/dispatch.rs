use crate::route::{NOT_FOUND_TITLE, Params, RouteConfig, RouteEntry, RouteTable};

/// outcome of dispatching a path; never an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<'table> {
    Found {
        entry: &'table RouteEntry,
        params: Params,
    },
    NotFound,
}

impl Resolved<'_> {
    pub fn title(&self) -> &str {
        match self {
            Resolved::Found { entry, .. } => &entry.title,
            Resolved::NotFound => NOT_FOUND_TITLE,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolved::Found { .. })
    }
}

/// a link in the navigation sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

/// a run of links, optionally under a group heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub heading: Option<String>,
    pub links: Vec<NavLink>,
}

/// Selects the view for a path with a linear first-match scan.
///
/// Fine for small static tables; anything past a few dozen entries would
/// want an indexed matcher.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    entries: Vec<RouteEntry>,
    nav: Vec<NavSection>,
}

impl Dispatcher {
    pub fn new(table: &RouteTable) -> Self {
        let entries = table.flatten();
        let nav = build_nav(table);

        tracing::debug!(routes = entries.len(), "built dispatcher");

        Dispatcher { entries, nav }
    }

    pub fn dispatch(&self, path: &str) -> Resolved<'_> {
        self.entries
            .iter()
            .find_map(|entry| {
                entry
                    .matches(path)
                    .map(|params| Resolved::Found { entry, params })
            })
            .unwrap_or(Resolved::NotFound)
    }

    pub fn nav(&self) -> &[NavSection] {
        &self.nav
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

fn nav_link(entry: &RouteEntry) -> Option<NavLink> {
    entry.label.as_ref().map(|label| NavLink {
        label: label.clone(),
        path: entry.path.clone(),
    })
}

fn build_nav(table: &RouteTable) -> Vec<NavSection> {
    let mut sections: Vec<NavSection> = Vec::new();

    for route in table.configs() {
        match route {
            RouteConfig::Entry(entry) => {
                let Some(link) = nav_link(entry) else {
                    continue;
                };
                match sections.last_mut() {
                    Some(section) if section.heading.is_none() => section.links.push(link),
                    _ => sections.push(NavSection {
                        heading: None,
                        links: vec![link],
                    }),
                }
            }
            RouteConfig::Group { label, routes } => sections.push(NavSection {
                heading: Some(label.clone()),
                links: routes.iter().filter_map(nav_link).collect(),
            }),
        }
    }

    sections
}
