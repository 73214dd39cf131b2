use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Anchored sections reachable from the hero and footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Projects,
    Services,
    Consultation,
    About,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::Services => "services",
            Section::Consultation => "consultation",
            Section::About => "about-section",
        }
    }

    pub fn link_label(&self) -> &'static str {
        match self {
            Section::Projects => "Our Projects",
            Section::Services => "Services",
            Section::Consultation => "Book Consultation",
            Section::About => "About Us",
        }
    }
}

pub fn scroll_to_section(section: Section) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.id()));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("Section #{} is not on the page", section.id()),
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_anchor_keeps_legacy_id() {
        assert_eq!(Section::About.id(), "about-section");
        assert_eq!(Section::Consultation.id(), "consultation");
    }
}
