//! Completion percentage for a draft, shown by the wizard while the client
//! fills in the form.

use crate::data::{LegalForm, StatutsData};

/// Returns how complete the draft is, as a rounded percentage.
///
/// Each checklist item weighs the same. The tax-election item only counts
/// for forms where the election exists, so a SASU draft is not penalised
/// for a field it will never have.
pub fn compute_progress(data: &StatutsData) -> u8 {
    let tax_election_applies = data.forme != Some(LegalForm::Sasu);

    let checks: Vec<bool> = {
        let mut checks = vec![
            data.denomination.is_some(),
            data.siege_social.is_some(),
            data.objet_social.is_some(),
            data.duree.is_some(),
            data.capital.is_some() && data.apport.is_some(),
            data.associe_unique.is_some() || !data.associes.is_empty(),
            data.direction.is_some(),
            data.nombre_parts.is_some(),
            data.exercice_social.is_some(),
            data.signature.as_ref().is_some_and(|signature| {
                signature.lieu.is_some() && signature.date.is_some()
            }),
        ];
        if tax_election_applies {
            checks.push(data.option_fiscale.is_some());
        }
        checks
    };

    let filled = checks.iter().filter(|&&done| done).count();
    ((filled as f64 / checks.len() as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Apport, Direction, OptionFiscale, Signature};

    #[test]
    fn test_empty_draft_is_zero() {
        assert_eq!(compute_progress(&StatutsData::default()), 0);
    }

    #[test]
    fn test_partial_draft() {
        let data = StatutsData {
            denomination: Some("ATELIER ROUX".to_string()),
            siege_social: Some("8 quai de la Fosse, 44000 Nantes".to_string()),
            ..Default::default()
        };
        // 2 of 11 items
        assert_eq!(compute_progress(&data), 18);
    }

    #[test]
    fn test_capital_needs_both_amount_and_apport() {
        let amount_only = StatutsData {
            capital: Some(1000),
            ..Default::default()
        };
        assert_eq!(compute_progress(&amount_only), 0);
        let both = StatutsData {
            capital: Some(1000),
            apport: Some(Apport::NumeraireTotal { montant: 1000 }),
            ..Default::default()
        };
        assert_eq!(compute_progress(&both), 9);
    }

    #[test]
    fn test_sasu_denominator_excludes_tax_election() {
        let base = StatutsData {
            denomination: Some("HOLDING LEFEVRE".to_string()),
            duree: Some(99),
            ..Default::default()
        };
        let eurl = StatutsData {
            forme: Some(LegalForm::Eurl),
            ..base.clone()
        };
        let sasu = StatutsData {
            forme: Some(LegalForm::Sasu),
            ..base
        };
        // same filled fields, smaller denominator for the SASU
        assert_eq!(compute_progress(&eurl), 18);
        assert_eq!(compute_progress(&sasu), 20);
    }

    #[test]
    fn test_complete_draft_reaches_100() {
        let data = StatutsData {
            forme: Some(LegalForm::Eurl),
            denomination: Some("MENUISERIE DUPONT".to_string()),
            siege_social: Some("12 rue des Ateliers, 44000 Nantes".to_string()),
            objet_social: Some("la menuiserie".to_string()),
            duree: Some(99),
            capital: Some(1000),
            nombre_parts: Some(100),
            associes: vec![Default::default()],
            apport: Some(Apport::NumeraireTotal { montant: 1000 }),
            direction: Some(Direction::default()),
            option_fiscale: Some(OptionFiscale::Is),
            exercice_social: Some(Default::default()),
            signature: Some(Signature {
                lieu: Some("Nantes".to_string()),
                date: Some("2024-06-15".to_string()),
                nombre_exemplaires: Some(3),
            }),
            ..Default::default()
        };
        assert_eq!(compute_progress(&data), 100);
    }
}
