//! Walks a [`DocumentTemplate`] against the variable dictionary and
//! assembles the final statuts text.
//!
//! The renderer never fails: missing data surfaces as a visible
//! "[À compléter]" placeholder, an unmatched article is silently skipped,
//! and article numbering stays gapless. The same inputs always produce the
//! same document.

use crate::condition::{evaluate, is_truthy, value_to_string};
use crate::data::{Civility, DossierContext, LegalForm, StatutsData};
use crate::template::{ArticleNode, Conclusion, TemplateStore};
use crate::variables::{build_variables, check_allocation, VarMap};
use log::{debug, warn};
use regex::{Captures, Regex};
use serde_json::Value;

/// Substituted in place of any variable the dictionary cannot resolve, so
/// the reviewer sees exactly what is still missing.
pub const PLACEHOLDER: &str = "[À compléter]";

/// Sentinel an article variant can resolve to in order to be dropped from
/// the document.
pub const NOT_AVAILABLE: &str = "[Non disponible]";

const MISSING_PREAMBLE: &str = "[Préambule à compléter]";
const MISSING_TEMPLATE: &str = "[Modèle de statuts indisponible]";

const IF_BLOCK_PATTERN: &str =
    r"(?s)\{\{#if\s+(?P<var>[A-Za-z0-9_]+)\s*\}\}(?P<then>.*?)(?:\{\{else\}\}(?P<other>.*?))?\{\{/if\}\}";
const VARIABLE_PATTERN: &str = r"\{\{\s*(?P<name>[A-Za-z0-9_]+)\s*\}\}";

/// Resolves `{{#if var}}...{{else}}...{{/if}}` blocks, then substitutes
/// every `{{name}}` token, then rewrites whatever is left unresolved to
/// [`PLACEHOLDER`].
pub fn replace_variables(text: &str, vars: &VarMap) -> String {
    let if_block = Regex::new(IF_BLOCK_PATTERN).unwrap();
    let resolved = if_block.replace_all(text, |caps: &Captures| {
        if is_truthy(vars.get(&caps["var"])) {
            caps["then"].to_string()
        } else {
            caps.name("other")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        }
    });

    let variable = Regex::new(VARIABLE_PATTERN).unwrap();
    variable
        .replace_all(&resolved, |caps: &Captures| match vars.get(&caps["name"]) {
            Some(Value::Null) | None => PLACEHOLDER.to_string(),
            Some(value) => value_to_string(value),
        })
        .into_owned()
}

/// Renders statuts documents from a read-only template store.
pub struct DocumentRenderer {
    store: TemplateStore,
}

impl DocumentRenderer {
    pub fn new(store: TemplateStore) -> Self {
        Self { store }
    }

    /// Produces the complete document for one legal form. Pure: no I/O, no
    /// mutation, deterministic for fixed inputs.
    pub fn render(&self, form: LegalForm, data: &StatutsData, fallback: &DossierContext) -> String {
        let template = match self.store.get(form) {
            Some(template) => template,
            None => {
                warn!("No template registered for {}", form);
                return MISSING_TEMPLATE.to_string();
            }
        };

        if let Some(warning) = check_allocation(&data.associes) {
            warn!(
                "Shareholder percentages sum to {} instead of 100; amounts are allocated as entered",
                warning.total_pourcentage
            );
        }

        let vars = build_variables(form, data, fallback);
        let civility = document_civility(&vars);
        let mut sections: Vec<String> = Vec::new();

        let preamble = template
            .preamble
            .iter()
            .find(|variant| evaluate(&variant.condition, &vars));
        match preamble {
            Some(variant) => sections.push(finalize(&variant.text, &vars, civility)),
            None => {
                warn!("No preamble variant matched for {}", form);
                sections.push(MISSING_PREAMBLE.to_string());
            }
        }

        sections.push(finalize(&template.title, &vars, civility));

        // The counter only advances for articles that actually emit text, so
        // skipped articles leave no numbering gap.
        let mut number = 0;
        for article in &template.articles {
            match resolve_article(article, &vars) {
                Some(content) => {
                    number += 1;
                    sections.push(format!(
                        "ARTICLE {} - {}\n\n{}",
                        number,
                        article.title,
                        finalize(&content, &vars, civility)
                    ));
                }
                None => debug!("Skipping article '{}': no applicable content", article.title),
            }
        }

        match &template.conclusion {
            Conclusion::Text(text) => sections.push(finalize(text, &vars, civility)),
            Conclusion::Variants(variants) => {
                if let Some(variant) = variants
                    .iter()
                    .find(|variant| evaluate(&variant.condition, &vars))
                {
                    sections.push(finalize(&variant.text, &vars, civility));
                }
            }
        }

        sections.join("\n\n")
    }
}

/// The whole document agrees with the sole shareholder's civility; absent
/// one (roster, draft), the masculine base forms stay as written.
fn document_civility(vars: &VarMap) -> Civility {
    match vars.get("civiliteAssocie").and_then(Value::as_str) {
        Some("Mme") => Civility::Mme,
        _ => Civility::M,
    }
}

fn finalize(text: &str, vars: &VarMap, civility: Civility) -> String {
    crate::text::apply_gender_agreement(&replace_variables(text, vars), civility)
}

/// Resolves one article node: direct content, else the first variant whose
/// condition holds; sub-sections are resolved recursively, each emitted
/// under its own sequential "<n> - <title>" heading and appended after the
/// direct content. Returns `None` when nothing applies, which drops the
/// article from the document.
fn resolve_article(node: &ArticleNode, vars: &VarMap) -> Option<String> {
    let direct = node.content.clone().or_else(|| {
        node.variants
            .iter()
            .find(|variant| evaluate(&variant.condition, vars))
            .map(|variant| variant.text.clone())
    });

    let mut parts: Vec<String> = Vec::new();
    if let Some(direct) = direct {
        if !direct.trim().is_empty() && direct != NOT_AVAILABLE {
            parts.push(direct);
        }
    }

    let mut sub_number = 0;
    for sub_section in &node.sub_sections {
        if let Some(content) = resolve_article(sub_section, vars) {
            sub_number += 1;
            parts.push(format!("{} - {}\n\n{}", sub_number, sub_section.title, content));
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n\n"))
    }
}
