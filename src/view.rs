//! HTML rendering for every view the route table can point at

use askama::Template;

use crate::{
    content::{self, Faq, PageContent},
    dispatch::{NavSection, Resolved},
    error::Error,
    focus::{FOCUS_DELAY, PRIMARY_CONTAINER_ID},
    runtime_config::RuntimeConfig,
};

/// renderable units referenced by route entries
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum View {
    Ansible,
    Ocp,
    Rhel,
    Rhoai,
    Rho,
}

impl View {
    pub fn content(&self) -> &'static PageContent {
        match self {
            View::Ansible => &content::ANSIBLE,
            View::Ocp => &content::OCP,
            View::Rhel => &content::RHEL,
            View::Rhoai => &content::RHOAI,
            View::Rho => &content::RHO,
        }
    }
}

/// parts of the page shared by every view
#[derive(Debug, Clone)]
pub struct Chrome {
    pub title: String,
    pub nav: Vec<NavSection>,
    pub current_path: String,
    pub primary_container_id: &'static str,
    pub focus_delay_ms: u128,
}

impl Chrome {
    fn new(title: &str, nav: &[NavSection], current_path: &str) -> Self {
        Chrome {
            title: title.to_string(),
            nav: nav.to_vec(),
            current_path: current_path.to_string(),
            primary_container_id: PRIMARY_CONTAINER_ID,
            focus_delay_ms: FOCUS_DELAY.as_millis(),
        }
    }
}

#[derive(Debug, Clone, Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub chrome: Chrome,
    pub view: View,
    pub heading: &'static str,
    pub intro: &'static str,
    pub faqs: Vec<Faq>,
    pub params: Vec<(String, String)>,
    /// empty when no runtime config has been loaded
    pub base_url: String,
}

#[derive(Debug, Clone, Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub chrome: Chrome,
}

/// render the page for a dispatch result using the current config snapshot
pub fn render(
    resolved: &Resolved<'_>,
    path: &str,
    nav: &[NavSection],
    config: &RuntimeConfig,
) -> Result<String, Error> {
    let chrome = Chrome::new(resolved.title(), nav, path);

    let html = match resolved {
        Resolved::Found { entry, params } => {
            let content = entry.view.content();
            PageTemplate {
                chrome,
                view: entry.view,
                heading: content.heading,
                intro: content.intro,
                faqs: content.faqs.to_vec(),
                params: params
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                base_url: config.base_url.clone().unwrap_or_default(),
            }
            .render()?
        }
        Resolved::NotFound => NotFoundTemplate { chrome }.render()?,
    };

    Ok(html)
}
