//! Generation engine for French statuts (articles of incorporation).
//!
//! Takes the structured data captured by an incorporation wizard for an
//! EURL, SARL, SASU or SAS and produces the full legal document: numbered
//! articles, amounts spelled out in words, gender agreement applied to the
//! legal vocabulary. Generation never fails on missing data; holes surface
//! as "[À compléter]" placeholders so a reviewer can finish the document by
//! hand.

pub mod condition;
pub mod data;
pub mod progress;
pub mod render;
pub mod template;
pub mod text;
pub mod variables;

pub use data::{DossierContext, LegalForm, StatutsData};
pub use progress::compute_progress;
pub use render::DocumentRenderer;
pub use template::{TemplateError, TemplateStore};

/// Renders a document with the built-in templates. Callers who need
/// template overrides build a [`DocumentRenderer`] from a custom
/// [`TemplateStore`] instead.
pub fn generate_statuts(form: LegalForm, data: &StatutsData, fallback: &DossierContext) -> String {
    DocumentRenderer::new(TemplateStore::builtin()).render(form, data, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use data::{Apport, AssocieUnique, Civility, Direction, PersonneMorale, PersonnePhysique};

    #[test]
    fn test_generate_statuts_all_builtin_forms() {
        let data = StatutsData::default();
        let fallback = DossierContext::default();
        for form in [
            LegalForm::Eurl,
            LegalForm::Sarl,
            LegalForm::Sasu,
            LegalForm::Sas,
        ] {
            let document = generate_statuts(form, &data, &fallback);
            assert!(document.contains("ARTICLE 1"), "{} has no articles", form);
        }
    }

    #[test]
    fn test_sasu_document_with_corporate_shareholder() {
        let data = StatutsData {
            forme: Some(LegalForm::Sasu),
            denomination: Some("HOLDING LEFEVRE".to_string()),
            capital: Some(5000),
            associe_unique: Some(AssocieUnique::PersonneMorale(PersonneMorale {
                denomination: Some("LEFEVRE INVEST".to_string()),
                forme_juridique: Some("SAS".to_string()),
                capital: Some(100000),
                siege_social: Some("2 rue de la Bourse, 75002 Paris".to_string()),
                rcs_ville: Some("Paris".to_string()),
                rcs_numero: Some("512 345 678".to_string()),
                representant: Some(PersonnePhysique {
                    civilite: Civility::M,
                    prenom: Some("Paul".to_string()),
                    nom: Some("Lefèvre".to_string()),
                    ..Default::default()
                }),
            })),
            apport: Some(Apport::NumeraireTotal { montant: 5000 }),
            direction: Some(Direction {
                est_associe_unique: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        let document = generate_statuts(LegalForm::Sasu, &data, &DossierContext::default());
        assert!(document.contains("LEFEVRE INVEST"));
        assert!(document.contains("actions"));
        assert!(document.contains("5 000 € (CINQ MILLE EUROS)"));
        // the tax election never applies to a SASU
        assert!(!document.contains("OPTION FISCALE"));
    }

    #[test]
    fn test_dossier_fallback_fills_identity() {
        let fallback = DossierContext {
            civilite: Some(Civility::Mme),
            prenom: Some("Claire".to_string()),
            nom: Some("Moreau".to_string()),
            adresse: Some("4 avenue Foch, 69006 Lyon".to_string()),
            date_naissance: Some("1990-11-02".to_string()),
            lieu_naissance: Some("Lyon".to_string()),
            nationalite: Some("française".to_string()),
        };
        let document = generate_statuts(LegalForm::Eurl, &StatutsData::default(), &fallback);
        assert!(document.contains("Madame Claire MOREAU"));
        assert!(document.contains("La soussignée"));
    }
}
