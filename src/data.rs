use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four supported legal forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LegalForm {
    Eurl,
    Sarl,
    Sasu,
    Sas,
}

impl LegalForm {
    /// Short label as it appears in the document ("EURL", "SARL", ...).
    pub fn label(&self) -> &'static str {
        match self {
            LegalForm::Eurl => "EURL",
            LegalForm::Sarl => "SARL",
            LegalForm::Sasu => "SASU",
            LegalForm::Sas => "SAS",
        }
    }

    /// Full legal denomination of the form.
    pub fn long_label(&self) -> &'static str {
        match self {
            LegalForm::Eurl => "Entreprise Unipersonnelle à Responsabilité Limitée",
            LegalForm::Sarl => "Société à Responsabilité Limitée",
            LegalForm::Sasu => "Société par Actions Simplifiée Unipersonnelle",
            LegalForm::Sas => "Société par Actions Simplifiée",
        }
    }

    /// Forms managed by a president rather than a manager (gérant).
    pub fn has_president(&self) -> bool {
        matches!(self, LegalForm::Sasu | LegalForm::Sas)
    }

    /// Shares are "actions" for joint-stock forms, "parts sociales" otherwise.
    pub fn share_noun(&self) -> &'static str {
        if self.has_president() {
            "actions"
        } else {
            "parts sociales"
        }
    }
}

#[derive(Error, Debug)]
#[error("Unknown legal form: {0} (expected EURL, SARL, SASU or SAS)")]
pub struct ParseLegalFormError(String);

impl FromStr for LegalForm {
    type Err = ParseLegalFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EURL" => Ok(LegalForm::Eurl),
            "SARL" => Ok(LegalForm::Sarl),
            "SASU" => Ok(LegalForm::Sasu),
            "SAS" => Ok(LegalForm::Sas),
            other => Err(ParseLegalFormError(other.to_string())),
        }
    }
}

impl fmt::Display for LegalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Civility of a physical person, drives gender agreement in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Civility {
    #[default]
    M,
    Mme,
}

impl Civility {
    pub fn label(&self) -> &'static str {
        match self {
            Civility::M => "Monsieur",
            Civility::Mme => "Madame",
        }
    }
}

/// A physical person (shareholder, manager, representative).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonnePhysique {
    pub civilite: Civility,
    pub prenom: Option<String>,
    pub nom: Option<String>,
    pub adresse: Option<String>,
    /// ISO date "YYYY-MM-DD".
    pub date_naissance: Option<String>,
    pub lieu_naissance: Option<String>,
    pub nationalite: Option<String>,
}

impl PersonnePhysique {
    /// "Prénom NOM", skipping missing parts.
    pub fn full_name(&self) -> String {
        let mut parts = Vec::new();
        if let Some(p) = &self.prenom {
            parts.push(p.clone());
        }
        if let Some(n) = &self.nom {
            parts.push(n.to_uppercase());
        }
        parts.join(" ")
    }
}

/// A corporate person acting as sole shareholder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonneMorale {
    pub denomination: Option<String>,
    pub forme_juridique: Option<String>,
    pub capital: Option<u64>,
    pub siege_social: Option<String>,
    pub rcs_ville: Option<String>,
    pub rcs_numero: Option<String>,
    pub representant: Option<PersonnePhysique>,
}

/// Sole shareholder: either an individual or a legal entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AssocieUnique {
    #[serde(rename = "PERSONNE_PHYSIQUE")]
    PersonnePhysique(PersonnePhysique),
    #[serde(rename = "PERSONNE_MORALE")]
    PersonneMorale(PersonneMorale),
}

/// One row of the multi-shareholder roster. Share count and contribution
/// amount are always derived from the percentage, never entered directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Associe {
    pub civilite: Civility,
    pub prenom: Option<String>,
    pub nom: Option<String>,
    pub adresse: Option<String>,
    pub date_naissance: Option<String>,
    pub lieu_naissance: Option<String>,
    /// Capital percentage, expected to sum to 100 across the roster.
    pub pourcentage: f64,
}

impl Associe {
    pub fn full_name(&self) -> String {
        let mut parts = Vec::new();
        if let Some(p) = &self.prenom {
            parts.push(p.clone());
        }
        if let Some(n) = &self.nom {
            parts.push(n.to_uppercase());
        }
        parts.join(" ")
    }
}

/// Capital contribution, a tagged union over the seven supported variants.
/// The `type` discriminant decides which sibling fields are meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Apport {
    /// Cash, fully paid up at subscription.
    #[serde(rename = "NUMERAIRE_TOTAL")]
    NumeraireTotal { montant: u64 },
    /// Cash, partially paid up (at least the legal minimum).
    #[serde(rename = "NUMERAIRE_PARTIEL")]
    NumerairePartiel { montant: u64, montant_libere: u64 },
    /// In-kind contribution (equipment, vehicle, ...).
    #[serde(rename = "NATURE")]
    Nature {
        description: String,
        valeur: u64,
        #[serde(default)]
        commissaire_aux_apports: bool,
    },
    /// Mixed cash + in-kind.
    #[serde(rename = "MIXTE")]
    Mixte {
        montant_numeraire: u64,
        description_nature: String,
        valeur_nature: u64,
        #[serde(default)]
        commissaire_aux_apports: bool,
    },
    /// Contribution of a business (fonds de commerce).
    #[serde(rename = "FONDS_DE_COMMERCE")]
    FondsDeCommerce {
        description: String,
        valeur: u64,
        #[serde(default)]
        commissaire_aux_apports: bool,
    },
    /// Cash drawn from jointly-owned marital property; the spouse must have
    /// been notified and may claim half the shares.
    #[serde(rename = "BIEN_COMMUN")]
    BienCommun {
        montant: u64,
        conjoint_prenom: Option<String>,
        conjoint_nom: Option<String>,
        /// ISO date of the notification to the spouse.
        date_notification: Option<String>,
        #[serde(default)]
        renonciation_conjoint: bool,
    },
    /// Cash held in indivision with a civil-union partner.
    #[serde(rename = "BIEN_INDIVIS")]
    BienIndivis {
        montant: u64,
        partenaire_prenom: Option<String>,
        partenaire_nom: Option<String>,
        /// ISO date of the partner's written agreement.
        date_accord: Option<String>,
    },
}

impl Apport {
    /// Total capital value carried by this contribution.
    pub fn total_value(&self) -> u64 {
        match self {
            Apport::NumeraireTotal { montant } => *montant,
            Apport::NumerairePartiel { montant, .. } => *montant,
            Apport::Nature { valeur, .. } => *valeur,
            Apport::Mixte {
                montant_numeraire,
                valeur_nature,
                ..
            } => montant_numeraire + valeur_nature,
            Apport::FondsDeCommerce { valeur, .. } => *valeur,
            Apport::BienCommun { montant, .. } => *montant,
            Apport::BienIndivis { montant, .. } => *montant,
        }
    }
}

/// Compensation arrangement for the manager/president.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Remuneration {
    #[default]
    Aucune,
    Fixe,
    DecisionCollective,
}

/// The company's management: a gérant (EURL/SARL) or a président (SASU/SAS).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Direction {
    /// When true, identity fields are copied from the sole shareholder and
    /// need not be re-entered.
    pub est_associe_unique: bool,
    pub civilite: Civility,
    pub prenom: Option<String>,
    pub nom: Option<String>,
    pub adresse: Option<String>,
    /// Free-text mandate duration ("la durée de la Société", "3 ans", ...).
    pub duree_mandat: Option<String>,
    pub remuneration: Remuneration,
    pub remuneration_montant: Option<u64>,
    /// Manager only: description of powers.
    pub pouvoirs: Option<String>,
    /// President only: revocation terms.
    pub modalites_revocation: Option<String>,
}

/// Tax regime election.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptionFiscale {
    /// Impôt sur le revenu.
    Ir,
    /// Impôt sur les sociétés.
    Is,
}

/// Share-transfer regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegimeCession {
    /// Free transfer between shareholders, approval needed for third parties.
    LibreEntreAssocies,
    /// Every transfer requires prior approval.
    Agrement,
    /// Fully free transfer.
    Libre,
}

/// Majority rule applied to collective decisions (SARL nomination and
/// revocation paragraphs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MajorityRule {
    /// Legal majority, with a second consultation at relative majority.
    LegaleSecondeConsultation,
    /// Legal majority, no second consultation.
    LegaleSansSecondeConsultation,
    /// Reinforced majority (threshold in `seuil_majorite_renforcee`).
    Renforcee,
}

/// Fiscal year boundaries, "DD-MM" day/month pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciceSocial {
    pub debut: Option<String>,
    pub fin: Option<String>,
    /// ISO date of the first fiscal-year closing.
    pub premiere_cloture: Option<String>,
}

/// Statutory auditor, when one is designated at incorporation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommissaireAuxComptes {
    pub nom: Option<String>,
    pub suppleant: Option<String>,
}

/// Signature block metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Signature {
    pub lieu: Option<String>,
    /// ISO date "YYYY-MM-DD".
    pub date: Option<String>,
    pub nombre_exemplaires: Option<u32>,
}

/// The complete structured description of one entity's founding document.
///
/// Every field tolerates absence: the wizard saves partial drafts and the
/// renderer must always produce a document, flagging holes instead of
/// failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatutsData {
    pub forme: Option<LegalForm>,
    pub denomination: Option<String>,
    pub siege_social: Option<String>,
    pub objet_social: Option<String>,
    /// Duration of the company in years (legal maximum 99).
    pub duree: Option<u32>,
    /// Share capital in euros.
    pub capital: Option<u64>,
    pub nombre_parts: Option<u64>,
    pub associe_unique: Option<AssocieUnique>,
    pub associes: Vec<Associe>,
    pub apport: Option<Apport>,
    pub direction: Option<Direction>,
    pub option_fiscale: Option<OptionFiscale>,
    pub clause_arbitrage: bool,
    pub arbitrage_modalites: Option<String>,
    pub regime_cession: Option<RegimeCession>,
    /// Related-party agreements article; always included in practice.
    pub conventions_reglementees: bool,
    pub actes_formation: Vec<String>,
    pub exercice_social: Option<ExerciceSocial>,
    pub commissaire_aux_comptes: Option<CommissaireAuxComptes>,
    pub regle_majorite: Option<MajorityRule>,
    /// Percentage threshold when `regle_majorite` is `Renforcee`.
    pub seuil_majorite_renforcee: Option<u8>,
    pub signature: Option<Signature>,
}

impl Default for StatutsData {
    fn default() -> Self {
        Self {
            forme: None,
            denomination: None,
            siege_social: None,
            objet_social: None,
            duree: None,
            capital: None,
            nombre_parts: None,
            associe_unique: None,
            associes: Vec::new(),
            apport: None,
            direction: None,
            option_fiscale: None,
            clause_arbitrage: false,
            arbitrage_modalites: None,
            regime_cession: None,
            // every generated statuts carries the related-party article
            conventions_reglementees: true,
            actes_formation: Vec::new(),
            exercice_social: None,
            commissaire_aux_comptes: None,
            regle_majorite: None,
            seuil_majorite_renforcee: None,
            signature: None,
        }
    }
}

impl StatutsData {
    /// True when the multi-shareholder roster is the populated branch.
    pub fn is_multi_shareholder(&self) -> bool {
        !self.associes.is_empty()
    }
}

/// Identity data captured on the client file before the statuts wizard is
/// opened; used as fallback when the wizard fields are still empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DossierContext {
    pub civilite: Option<Civility>,
    pub prenom: Option<String>,
    pub nom: Option<String>,
    pub adresse: Option<String>,
    pub date_naissance: Option<String>,
    pub lieu_naissance: Option<String>,
    pub nationalite: Option<String>,
}
