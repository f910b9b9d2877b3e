//! The route table: path patterns bound to views.
//!
//! Grouping only affects the navigation sidebar. Dispatch always works on
//! [`RouteTable::flatten`], which keeps declaration order.

use crate::view::View;

/// prefix shared by every page title
pub const TITLE_PREFIX: &str = "PatternFly Seed";

/// title used when nothing in the table matches
pub const NOT_FOUND_TITLE: &str = "404 Page Not Found";

/// a single path-to-view binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    /// when false, sub-paths of `path` also match
    pub exact: bool,
    pub title: String,
    pub view: View,
    /// entries without a label are left out of the navigation sidebar
    pub label: Option<String>,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, view: View, title: impl Into<String>) -> Self {
        RouteEntry {
            path: path.into(),
            exact: true,
            title: title.into(),
            view,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn inexact(mut self) -> Self {
        self.exact = false;
        self
    }

    /// match `path` against this entry's pattern, returning captured params
    pub fn matches(&self, path: &str) -> Option<Params> {
        let mut pattern = segments(&self.path);
        let mut target = segments(path);
        let mut params = Params::default();

        loop {
            match (pattern.next(), target.next()) {
                (None, None) => return Some(params),
                (None, Some(_)) if !self.exact => return Some(params),
                (None, Some(_)) | (Some(_), None) => return None,
                (Some(expected), Some(actual)) => {
                    if let Some(name) = expected.strip_prefix(':') {
                        params.push(name, actual);
                    } else if !expected.eq_ignore_ascii_case(actual) {
                        return None;
                    }
                }
            }
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// parameters captured from `:name` segments, in pattern order
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::IntoIterator)]
pub struct Params(Vec<(String, String)>);

impl Params {
    fn push(&mut self, name: &str, value: &str) {
        self.0.push((name.to_string(), value.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteConfig {
    Entry(RouteEntry),
    Group {
        label: String,
        routes: Vec<RouteEntry>,
    },
}

impl From<RouteEntry> for RouteConfig {
    fn from(entry: RouteEntry) -> Self {
        RouteConfig::Entry(entry)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::IntoIterator)]
pub struct RouteTable(Vec<RouteConfig>);

impl RouteTable {
    pub fn new(routes: Vec<RouteConfig>) -> Self {
        RouteTable(routes)
    }

    /// entries with grouping removed, in declaration order
    pub fn flatten(&self) -> Vec<RouteEntry> {
        self.0
            .iter()
            .flat_map(|route| match route {
                RouteConfig::Entry(entry) => std::slice::from_ref(entry),
                RouteConfig::Group { routes, .. } => routes.as_slice(),
            })
            .cloned()
            .collect()
    }

    pub fn configs(&self) -> &[RouteConfig] {
        &self.0
    }
}

fn product_route(path: &str, view: View, label: &str) -> RouteEntry {
    RouteEntry::new(path, view, format!("{TITLE_PREFIX} | {label}")).with_label(label)
}

/// the application's route table
pub fn app_routes() -> RouteTable {
    RouteTable::new(vec![
        product_route("/", View::Ansible, "Ansible").into(),
        product_route("/ocp", View::Ocp, "OpenShift Container Platform").into(),
        product_route("/rhel", View::Rhel, "Red Hat Enterprise Linux").into(),
        product_route("/rhoai", View::Rhoai, "Red Hat OpenShift AI").into(),
        product_route("/rho", View::Rho, "RHO 2025 FAQ").into(),
    ])
}
