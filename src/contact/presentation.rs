// src/contact/presentation.rs
//! Headless view of the contact form.
//!
//! Owns the form values, asks the validators for feedback on every edit and
//! on submit, and renders the outcome as tagged text nodes that tests can
//! query without a browser.

use std::collections::BTreeMap;
use tracing::{debug, info};

use super::models::{ContactForm, FormField};
use super::validators::{validate_all, validate_field};
use crate::common::{safe_email_log, ValidationResult};

pub const HEADER_TEXT: &str = "Contact Form";
pub const ERROR_TEST_ID: &str = "error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub test_id: Option<String>,
    pub text: String,
}

impl TextNode {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            test_id: None,
            text: text.into(),
        }
    }

    fn tagged(test_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            test_id: Some(test_id.into()),
            text: text.into(),
        }
    }
}

/// Snapshot of everything the form currently shows, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedForm {
    pub nodes: Vec<TextNode>,
}

impl RenderedForm {
    pub fn find_all_by_test_id(&self, test_id: &str) -> Vec<&TextNode> {
        self.nodes
            .iter()
            .filter(|node| node.test_id.as_deref() == Some(test_id))
            .collect()
    }

    /// First node whose text contains `needle`, ignoring case.
    pub fn get_by_text(&self, needle: &str) -> Option<&TextNode> {
        let needle = needle.to_lowercase();
        self.nodes
            .iter()
            .find(|node| node.text.to_lowercase().contains(&needle))
    }

    pub fn get_all_by_text(&self, text: &str) -> Vec<&TextNode> {
        self.nodes.iter().filter(|node| node.text == text).collect()
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.find_all_by_test_id(ERROR_TEST_ID)
            .into_iter()
            .map(|node| node.text.as_str())
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct ContactFormView {
    form: ContactForm,
    visible_errors: BTreeMap<FormField, String>,
    submitted: Option<ContactForm>,
}

impl ContactFormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn submitted(&self) -> Option<&ContactForm> {
        self.submitted.as_ref()
    }

    /// Replaces the value of one input and refreshes that field's error only.
    pub fn input(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
        match validate_field(field, self.form.value(field)) {
            Some(message) => {
                debug!(field = %field, "Live validation failed");
                self.visible_errors.insert(field, message.to_string());
            }
            None => {
                self.visible_errors.remove(&field);
            }
        }
    }

    pub fn submit(&mut self) -> ValidationResult {
        let result = validate_all(&self.form);

        self.visible_errors.clear();
        for field in FormField::ALL {
            if let Some(message) = result.error_for(field.as_str()) {
                self.visible_errors.insert(field, message.to_string());
            }
        }

        if result.is_valid {
            info!(
                email = %safe_email_log(&self.form.email),
                "Contact form submitted"
            );
            self.submitted = Some(self.form.clone());
        } else {
            debug!(errors = result.error_count(), "Contact form submission rejected");
            self.submitted = None;
        }

        result
    }

    pub fn render(&self) -> RenderedForm {
        let mut nodes = vec![TextNode::plain(HEADER_TEXT)];

        for field in FormField::ALL {
            nodes.push(TextNode::plain(label_for(field)));
            if let Some(message) = self.visible_errors.get(&field) {
                nodes.push(TextNode::tagged(ERROR_TEST_ID, format!("Error: {}", message)));
            }
        }

        if let Some(submitted) = &self.submitted {
            nodes.push(TextNode::plain("You submitted:"));
            for field in FormField::ALL {
                nodes.push(TextNode::tagged(
                    format!("{}Display", field.as_str()),
                    submitted.value(field),
                ));
            }
        }

        RenderedForm { nodes }
    }
}

fn label_for(field: FormField) -> &'static str {
    match field {
        FormField::FirstName => "First Name*",
        FormField::LastName => "Last Name*",
        FormField::Email => "Email*",
    }
}
