//! Template schema and the read-only store the renderer is constructed with.
//!
//! One `DocumentTemplate` exists per legal form. The built-in definitions are
//! embedded at compile time; a directory of JSON/YAML overrides can replace
//! any of them so the article wording can be adjusted without rebuilding.

use crate::data::LegalForm;
use log::{info, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

const EURL_TEMPLATE: &str = include_str!("../templates/eurl.json");
const SARL_TEMPLATE: &str = include_str!("../templates/sarl.json");
const SASU_TEMPLATE: &str = include_str!("../templates/sasu.json");

/// One conditional variant of an article's text. The first variant whose
/// condition evaluates true wins.
#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    pub condition: String,
    pub text: String,
}

/// An article definition: either fixed text, a list of conditional variants,
/// or both direct content and nested sub-sections (same recursive shape).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleNode {
    /// Authoring-time number; the renderer renumbers sequentially and only
    /// counts emitted articles, so this is documentation only.
    #[serde(default)]
    pub number: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub sub_sections: Vec<ArticleNode>,
}

/// Conclusion of the document: fixed text or a variant list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Conclusion {
    Text(String),
    Variants(Vec<Variant>),
}

/// The complete per-legal-form template.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentTemplate {
    pub preamble: Vec<Variant>,
    pub title: String,
    pub articles: Vec<ArticleNode>,
    pub conclusion: Conclusion,
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read template file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse JSON template: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse YAML template: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Read-only lookup of templates by legal form, passed into the renderer at
/// construction time.
pub struct TemplateStore {
    templates: HashMap<LegalForm, DocumentTemplate>,
}

impl TemplateStore {
    /// The built-in definitions. SAS has no template of its own yet and
    /// falls back to the SASU one; the mismatch (a multi-shareholder form
    /// rendered with a sole-shareholder template) is logged so it is never
    /// silent.
    pub fn builtin() -> Self {
        let mut templates = HashMap::new();
        templates.insert(LegalForm::Eurl, parse_embedded(EURL_TEMPLATE));
        templates.insert(LegalForm::Sarl, parse_embedded(SARL_TEMPLATE));
        let sasu = parse_embedded(SASU_TEMPLATE);
        warn!("No dedicated SAS template; aliasing the SASU template");
        templates.insert(LegalForm::Sas, sasu.clone());
        templates.insert(LegalForm::Sasu, sasu);
        Self { templates }
    }

    /// Builds a store from the built-ins plus per-form overrides found in
    /// `dir` (`eurl.json`, `sarl.yaml`, ...).
    pub fn load_dir(dir: &Path) -> Result<Self, TemplateError> {
        let mut store = Self::builtin();
        for form in [
            LegalForm::Eurl,
            LegalForm::Sarl,
            LegalForm::Sasu,
            LegalForm::Sas,
        ] {
            let stem = form.label().to_lowercase();
            for extension in ["json", "yaml", "yml"] {
                let path = dir.join(format!("{}.{}", stem, extension));
                if !path.exists() {
                    continue;
                }
                let content = std::fs::read_to_string(&path)?;
                let template: DocumentTemplate = if extension == "json" {
                    serde_json::from_str(&content)?
                } else {
                    serde_yaml::from_str(&content)?
                };
                info!("Loaded template override for {} from {:?}", form, path);
                store.templates.insert(form, template);
                break;
            }
        }
        Ok(store)
    }

    pub fn get(&self, form: LegalForm) -> Option<&DocumentTemplate> {
        self.templates.get(&form)
    }

    /// Replaces one form's template, mainly useful in tests.
    pub fn insert(&mut self, form: LegalForm, template: DocumentTemplate) {
        self.templates.insert(form, template);
    }
}

// Embedded templates are static assets validated by the test suite; a parse
// failure here is a packaging bug, not a runtime condition.
fn parse_embedded(content: &str) -> DocumentTemplate {
    serde_json::from_str(content).expect("embedded template is valid JSON")
}
