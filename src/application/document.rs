//! Page shell around the rendered sections

use crate::application::markup::Markup;
use crate::application::render::Section;
use crate::config::PageConfig;

#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    page: PageConfig,
}

impl DocumentAssembler {
    pub fn new(page: PageConfig) -> Self {
        Self { page }
    }

    /// Wrap `sections`, in emission order, into a complete HTML document.
    pub fn assemble(&self, sections: &[Section]) -> String {
        let mut markup = Markup::new();
        markup.raw("<!DOCTYPE html>");
        markup.element("html", &[("lang", self.page.lang.as_str())], |m| {
            m.element("head", &[], |m| {
                m.void("meta", &[("charset", "utf-8")]);
                m.line("title", &[], &self.page.title);
                // raw text element, emitted unescaped
                m.raw(&format!("<style>{}</style>", self.page.style));
            });
            m.element("body", &[], |m| {
                for section in sections {
                    m.fragment(&section.markup);
                }
                if let Some(url) = &self.page.repository_url {
                    m.line(
                        "a",
                        &[
                            ("href", url.as_str()),
                            ("target", "_blank"),
                            ("rel", "noopener noreferrer"),
                        ],
                        "repository",
                    );
                }
            });
        });
        markup.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str) -> Section {
        Section {
            id: id.into(),
            markup: format!("<div id=\"{id}\">\n</div>\n"),
        }
    }

    #[test]
    fn given_sections_when_assembling_then_wraps_them_in_order() {
        let html = DocumentAssembler::new(PageConfig::default())
            .assemble(&[section("root"), section("root-no")]);

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"ja\">\n"));
        assert!(html.contains("<meta charset=\"utf-8\" />"));
        assert!(html.contains("<title>acornle</title>"));
        assert!(html.contains("<style>h2, h3, a, td {font-family: monospace;}</style>"));
        let first = html.find("<div id=\"root\">").unwrap();
        let second = html.find("<div id=\"root-no\">").unwrap();
        assert!(first < second);
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn given_no_repository_url_when_assembling_then_omits_link() {
        let page = PageConfig {
            repository_url: None,
            ..PageConfig::default()
        };

        let html = DocumentAssembler::new(page).assemble(&[section("root")]);

        assert!(!html.contains("repository"));
    }

    #[test]
    fn given_repository_url_when_assembling_then_link_opens_in_new_tab() {
        let html = DocumentAssembler::new(PageConfig::default()).assemble(&[]);

        assert!(html.contains(
            "<a href=\"https://github.com/hand-accident/acornle\" target=\"_blank\" rel=\"noopener noreferrer\">repository</a>"
        ));
    }
}
