/// The surface navigation writes to: title, rendered body, keyboard focus.
pub trait Document {
    fn set_title(&mut self, title: &str);

    fn set_body(&mut self, html: String);

    /// focus the element with `element_id`, returning false when it is not
    /// part of the rendered body
    fn focus(&mut self, element_id: &str) -> bool;
}

/// a focus move that actually happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusEvent {
    pub element_id: String,
    /// document title at the time focus moved
    pub title: String,
}

/// in-memory document, used by headless sessions and tests
#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
    title: String,
    body: String,
    focused: Option<String>,
    focus_log: Vec<FocusEvent>,
}

impl HtmlDocument {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn focus_log(&self) -> &[FocusEvent] {
        &self.focus_log
    }

    fn contains_element(&self, element_id: &str) -> bool {
        self.body.contains(&format!(r#"id="{element_id}""#))
    }
}

impl Document for HtmlDocument {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_body(&mut self, html: String) {
        if self
            .focused
            .as_deref()
            .is_some_and(|id| !html.contains(&format!(r#"id="{id}""#)))
        {
            self.focused = None;
        }
        self.body = html;
    }

    fn focus(&mut self, element_id: &str) -> bool {
        if !self.contains_element(element_id) {
            return false;
        }

        self.focused = Some(element_id.to_string());
        self.focus_log.push(FocusEvent {
            element_id: element_id.to_string(),
            title: self.title.clone(),
        });
        true
    }
}
