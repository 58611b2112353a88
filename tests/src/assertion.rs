//! Assertions on rendered pages.

use graphdoc_render::{class, Fragment, RenderError};

/// What a rendered page is expected to look like.
#[derive(Debug, Default)]
pub struct PageAssertion {
    titles: Option<Vec<String>>,
    constraints: Option<Vec<String>>,
    arguments: Option<Vec<String>>,
    description: Option<String>,
    contains: Vec<String>,
    class_counts: Vec<(&'static str, usize)>,
    error: Option<String>,
    error_pattern: Option<String>,
}

impl PageAssertion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Category titles, in order.
    pub fn titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.titles = Some(titles.into_iter().map(Into::into).collect());
        self
    }

    /// Text of every rendered constraint, in order. Empty means none.
    pub fn constraints<I, S>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints = Some(constraints.into_iter().map(Into::into).collect());
        self
    }

    /// Text of every rendered argument, in order.
    pub fn arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments = Some(arguments.into_iter().map(Into::into).collect());
        self
    }

    /// Source of the leading description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Plain-text output contains `text`.
    pub fn contains(mut self, text: impl Into<String>) -> Self {
        self.contains.push(text.into());
        self
    }

    /// Exactly `count` fragments carry `marker`.
    pub fn class_count(mut self, marker: &'static str, count: usize) -> Self {
        self.class_counts.push((marker, count));
        self
    }

    /// Rendering fails with an error whose message contains `message`.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Rendering fails with an error matching the regex `pattern`.
    pub fn error_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.error_pattern = Some(pattern.into());
        self
    }

    /// Check a render result, describing the first mismatch.
    pub fn verify(&self, result: Result<&Fragment, &RenderError>) -> Result<(), String> {
        if let Some(pattern) = &self.error_pattern {
            let re = regex_lite::Regex::new(pattern)
                .map_err(|e| format!("invalid regex pattern: {}", e))?;
            return match result {
                Err(e) if re.is_match(&e.to_string()) => Ok(()),
                Err(e) => Err(format!("expected error matching '{}', got: {}", pattern, e)),
                Ok(_) => Err(format!("expected error matching '{}', page rendered", pattern)),
            };
        }

        let page = match (result, &self.error) {
            (Err(e), Some(expected)) if e.to_string().contains(expected.as_str()) => return Ok(()),
            (Err(e), Some(expected)) => {
                return Err(format!("expected error containing '{}', got '{}'", expected, e))
            }
            (Err(e), None) => return Err(format!("unexpected error: {}", e)),
            (Ok(_), Some(expected)) => {
                return Err(format!("expected error containing '{}', page rendered", expected))
            }
            (Ok(page), None) => page,
        };

        if let Some(expected) = &self.titles {
            expect_list("titles", expected, texts(page, class::DOC_CATEGORY_TITLE))?;
        }
        if let Some(expected) = &self.constraints {
            let found = page
                .find_by_class(class::DOC_CATEGORY_ITEM)
                .into_iter()
                .flat_map(|item| item.children().iter())
                .filter(|child| child.class() == Some(class::CONSTRAINT))
                .map(Fragment::text_content)
                .collect();
            expect_list("constraints", expected, found)?;
        }
        if let Some(expected) = &self.arguments {
            expect_list("arguments", expected, texts(page, class::ARG))?;
        }
        if let Some(expected) = &self.description {
            let found = page
                .children()
                .first()
                .map(Fragment::text_content)
                .unwrap_or_default();
            if &found != expected {
                return Err(format!("description: expected '{}', found '{}'", expected, found));
            }
        }
        if !self.contains.is_empty() {
            let text = page.to_text();
            for needle in &self.contains {
                if !text.contains(needle.as_str()) {
                    return Err(format!("text does not contain '{}':\n{}", needle, text));
                }
            }
        }
        for (marker, count) in &self.class_counts {
            let found = page.count_class(marker);
            if found != *count {
                return Err(format!(
                    "expected {} '{}' fragments, found {}",
                    count, marker, found
                ));
            }
        }
        Ok(())
    }
}

fn texts(page: &Fragment, marker: &str) -> Vec<String> {
    page.find_by_class(marker)
        .into_iter()
        .map(Fragment::text_content)
        .collect()
}

fn expect_list(what: &str, expected: &[String], found: Vec<String>) -> Result<(), String> {
    if expected == found.as_slice() {
        Ok(())
    } else {
        Err(format!("{}: expected {:?}, found {:?}", what, expected, found))
    }
}
