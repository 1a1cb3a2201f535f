use crate::catalog::docs::{CSHARP_EXAMPLE, JSON_EXAMPLE, PYTHON_EXAMPLE};
use crate::common::{TabKey, TabSwitch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTab {
    Api,
    Tutorials,
    Code,
    Faq,
}

impl TabKey for DocTab {
    const ALL: &'static [Self] = &[DocTab::Api, DocTab::Tutorials, DocTab::Code, DocTab::Faq];

    fn key(self) -> &'static str {
        match self {
            DocTab::Api => "api",
            DocTab::Tutorials => "tutorials",
            DocTab::Code => "code",
            DocTab::Faq => "faq",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DocTab::Api => "API Reference",
            DocTab::Tutorials => "Tutorials",
            DocTab::Code => "Code Examples",
            DocTab::Faq => "FAQ",
        }
    }
}

impl DocTab {
    /// Tabs for a `/docs/<key>` link. Unknown keys open the API reference.
    pub fn switch_for(key: Option<&str>) -> TabSwitch<DocTab> {
        let mut tabs = TabSwitch::new(DocTab::Api);
        if let Some(key) = key {
            tabs.select_key(key);
        }
        tabs
    }

    pub fn heading(self) -> &'static str {
        match self {
            DocTab::Faq => "Frequently Asked Questions",
            other => other.label(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DocTab::Api => "Explore our comprehensive API documentation",
            DocTab::Tutorials => "Step-by-step guides to help you get started",
            DocTab::Code => "Ready-to-use code snippets for common tasks",
            DocTab::Faq => "Answers to commonly asked questions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLanguage {
    CSharp,
    Python,
    Json,
}

impl TabKey for CodeLanguage {
    const ALL: &'static [Self] = &[CodeLanguage::CSharp, CodeLanguage::Python, CodeLanguage::Json];

    fn key(self) -> &'static str {
        match self {
            CodeLanguage::CSharp => "csharp",
            CodeLanguage::Python => "python",
            CodeLanguage::Json => "json",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CodeLanguage::CSharp => "C#",
            CodeLanguage::Python => "Python",
            CodeLanguage::Json => "JSON Config",
        }
    }
}

impl CodeLanguage {
    pub fn source(self) -> &'static str {
        match self {
            CodeLanguage::CSharp => CSHARP_EXAMPLE,
            CodeLanguage::Python => PYTHON_EXAMPLE,
            CodeLanguage::Json => JSON_EXAMPLE,
        }
    }
}

/// FAQ accordion: at most one answer open, clicking the open one closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
