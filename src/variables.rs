//! Builds the flat variable dictionary consumed by the template renderer.
//!
//! Every generation call starts from a fresh dictionary: the builder reads a
//! `StatutsData` snapshot (possibly a half-filled draft) plus the dossier
//! fallback identity, and never mutates either.

use crate::data::{
    Apport, Associe, AssocieUnique, Civility, Direction, DossierContext, LegalForm, MajorityRule,
    PersonneMorale, PersonnePhysique, Remuneration, StatutsData,
};
use crate::text::{
    format_amount_with_words, format_day_month, format_french_date, format_french_number,
    number_to_french_words,
};
use serde_json::{json, Value};
use std::collections::HashMap;

/// The flat variable dictionary. Rebuilt from scratch on every generation.
pub type VarMap = HashMap<String, Value>;

/// Default duration of the company, in years (the legal maximum).
const DEFAULT_DUREE: u32 = 99;

/// One shareholder's computed slice of the capital.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub nom: String,
    pub pourcentage: f64,
    pub parts: u64,
    pub montant: u64,
}

/// Raised (as a warning, never an error) when the roster percentages do not
/// sum to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationWarning {
    pub total_pourcentage: f64,
}

/// Proportional capital split: each shareholder gets
/// `round(pct/100 × total)` shares and euros, independently rounded.
/// Idempotent; the stored percentages are never touched.
pub fn allocate_capital(associes: &[Associe], capital: u64, total_parts: u64) -> Vec<Allocation> {
    associes
        .iter()
        .map(|associe| Allocation {
            nom: associe.full_name(),
            pourcentage: associe.pourcentage,
            parts: ((associe.pourcentage / 100.0) * total_parts as f64).round() as u64,
            montant: ((associe.pourcentage / 100.0) * capital as f64).round() as u64,
        })
        .collect()
}

/// Checks that roster percentages sum to 100 (±0.01). The core never fails
/// on a bad sum; callers decide what to do with the warning.
pub fn check_allocation(associes: &[Associe]) -> Option<AllocationWarning> {
    if associes.is_empty() {
        return None;
    }
    let total: f64 = associes.iter().map(|a| a.pourcentage).sum();
    if (total - 100.0).abs() > 0.01 {
        Some(AllocationWarning {
            total_pourcentage: total,
        })
    } else {
        None
    }
}

/// Natural-language label for a paid-up fraction of the capital, used by the
/// partial-liberation article. Falls back to the raw percentage when no
/// idiomatic fraction matches.
fn fraction_label(pourcentage: u64) -> String {
    match pourcentage {
        20 => "un cinquième".to_string(),
        25 => "un quart".to_string(),
        50 => "la moitié".to_string(),
        _ => format!("{} %", pourcentage),
    }
}

fn set(vars: &mut VarMap, key: &str, value: impl Into<Value>) {
    vars.insert(key.to_string(), value.into());
}

/// Inserts the value only when present and non-empty, so that unset wizard
/// fields stay falsy for conditions and surface as "[À compléter]" in the
/// text.
fn set_opt(vars: &mut VarMap, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        if !v.is_empty() {
            vars.insert(key.to_string(), json!(v));
        }
    }
}

/// Like [`set_opt`] but falls back to a second optional source (the dossier
/// context) when the first is empty.
fn set_opt_or(vars: &mut VarMap, key: &str, value: &Option<String>, fallback: &Option<String>) {
    match value {
        Some(v) if !v.is_empty() => set(vars, key, v.clone()),
        _ => set_opt(vars, key, fallback),
    }
}

/// Builds the complete variable dictionary for one generation call. `form`
/// is the resolved legal form the document is rendered as; the renderer
/// decides it, so a caller-side override of `data.forme` carries through to
/// every derived variable.
pub fn build_variables(form: LegalForm, data: &StatutsData, fallback: &DossierContext) -> VarMap {
    let mut vars = VarMap::new();

    identity_vars(&mut vars, data, form);
    capital_vars(&mut vars, data, form);
    if let Some(apport) = &data.apport {
        apport_vars(&mut vars, apport);
    }
    shareholder_vars(&mut vars, data, fallback, form);
    direction_vars(&mut vars, data, fallback, form);
    option_vars(&mut vars, data, form);
    signature_vars(&mut vars, data);

    vars
}

fn identity_vars(vars: &mut VarMap, data: &StatutsData, form: LegalForm) {
    set(vars, "formeJuridique", form.label());
    set(vars, "formeJuridiqueComplete", form.long_label());
    set_opt(vars, "denomination", &data.denomination);
    set_opt(vars, "siegeSocial", &data.siege_social);
    set_opt(vars, "objetSocial", &data.objet_social);
    let duree = data.duree.unwrap_or(DEFAULT_DUREE);
    set(vars, "duree", duree);
    set(
        vars,
        "dureeLettres",
        number_to_french_words(duree as u64).to_lowercase(),
    );
    set(vars, "pluraliteAssocies", data.is_multi_shareholder());
    set(vars, "associeUnique", !data.is_multi_shareholder());
}

fn capital_vars(vars: &mut VarMap, data: &StatutsData, form: LegalForm) {
    set(vars, "partsOuActions", form.share_noun());
    if let Some(capital) = data.capital {
        set(vars, "capital", capital);
        set(vars, "capitalLettres", format_amount_with_words(capital, "EUROS"));
    }
    if let Some(parts) = data.nombre_parts {
        set(vars, "nombreParts", parts);
        set(
            vars,
            "nombrePartsLettres",
            number_to_french_words(parts).to_lowercase(),
        );
        if let Some(capital) = data.capital {
            if parts > 0 {
                let nominale = capital as f64 / parts as f64;
                let label = if nominale.fract() == 0.0 {
                    format!("{} €", format_french_number(nominale as u64))
                } else {
                    format!("{:.2} €", nominale).replace('.', ",")
                };
                set(vars, "valeurNominale", label);
            }
        }
    }
}

/// The exhaustive branch over the contribution tagged union. Adding an
/// eighth `Apport` variant fails to compile until it is handled here.
fn apport_vars(vars: &mut VarMap, apport: &Apport) {
    set(
        vars,
        "montantTotalApports",
        format_amount_with_words(apport.total_value(), "EUROS"),
    );
    match apport {
        Apport::NumeraireTotal { montant } => {
            set(vars, "typeApport", "NUMERAIRE_TOTAL");
            set(vars, "apportNumeraire", true);
            set(vars, "liberationIntegrale", true);
            set(
                vars,
                "montantApportNumeraire",
                format_amount_with_words(*montant, "EUROS"),
            );
        }
        Apport::NumerairePartiel {
            montant,
            montant_libere,
        } => {
            set(vars, "typeApport", "NUMERAIRE_PARTIEL");
            set(vars, "apportNumeraire", true);
            set(vars, "liberationPartielle", true);
            set(
                vars,
                "montantApportNumeraire",
                format_amount_with_words(*montant, "EUROS"),
            );
            set(
                vars,
                "montantLibere",
                format_amount_with_words(*montant_libere, "EUROS"),
            );
            let pourcentage = if *montant > 0 {
                ((*montant_libere as f64 / *montant as f64) * 100.0).round() as u64
            } else {
                0
            };
            set(vars, "pourcentageLibere", pourcentage);
            set(vars, "fractionLiberee", fraction_label(pourcentage));
            set(
                vars,
                "montantRestant",
                format_amount_with_words(montant.saturating_sub(*montant_libere), "EUROS"),
            );
        }
        Apport::Nature {
            description,
            valeur,
            commissaire_aux_apports,
        } => {
            set(vars, "typeApport", "NATURE");
            set(vars, "apportNature", true);
            set(vars, "descriptionApportNature", description.clone());
            set(
                vars,
                "valeurApportNature",
                format_amount_with_words(*valeur, "EUROS"),
            );
            set(vars, "commissaireAuxApports", *commissaire_aux_apports);
        }
        Apport::Mixte {
            montant_numeraire,
            description_nature,
            valeur_nature,
            commissaire_aux_apports,
        } => {
            set(vars, "typeApport", "MIXTE");
            set(vars, "apportMixte", true);
            set(vars, "apportNumeraire", true);
            set(vars, "apportNature", true);
            set(vars, "liberationIntegrale", true);
            set(
                vars,
                "montantApportNumeraire",
                format_amount_with_words(*montant_numeraire, "EUROS"),
            );
            set(vars, "descriptionApportNature", description_nature.clone());
            set(
                vars,
                "valeurApportNature",
                format_amount_with_words(*valeur_nature, "EUROS"),
            );
            set(vars, "commissaireAuxApports", *commissaire_aux_apports);
        }
        Apport::FondsDeCommerce {
            description,
            valeur,
            commissaire_aux_apports,
        } => {
            set(vars, "typeApport", "FONDS_DE_COMMERCE");
            set(vars, "apportFondsCommerce", true);
            set(vars, "descriptionFondsCommerce", description.clone());
            set(
                vars,
                "valeurFondsCommerce",
                format_amount_with_words(*valeur, "EUROS"),
            );
            set(vars, "commissaireAuxApports", *commissaire_aux_apports);
        }
        Apport::BienCommun {
            montant,
            conjoint_prenom,
            conjoint_nom,
            date_notification,
            renonciation_conjoint,
        } => {
            set(vars, "typeApport", "BIEN_COMMUN");
            set(vars, "apportNumeraire", true);
            set(vars, "apportBienCommun", true);
            set(vars, "liberationIntegrale", true);
            set(
                vars,
                "montantApportNumeraire",
                format_amount_with_words(*montant, "EUROS"),
            );
            let conjoint = full_name(conjoint_prenom, conjoint_nom);
            set_opt(vars, "conjointNom", &conjoint);
            if let Some(date) = date_notification {
                set(vars, "dateNotificationConjoint", format_french_date(date));
            }
            set(vars, "renonciationConjoint", *renonciation_conjoint);
            set(
                vars,
                "texteConsentementConjoint",
                spousal_consent_paragraph(&conjoint, date_notification, *renonciation_conjoint),
            );
        }
        Apport::BienIndivis {
            montant,
            partenaire_prenom,
            partenaire_nom,
            date_accord,
        } => {
            set(vars, "typeApport", "BIEN_INDIVIS");
            set(vars, "apportNumeraire", true);
            set(vars, "apportBienIndivis", true);
            set(vars, "liberationIntegrale", true);
            set(
                vars,
                "montantApportNumeraire",
                format_amount_with_words(*montant, "EUROS"),
            );
            let partenaire = full_name(partenaire_prenom, partenaire_nom);
            set_opt(vars, "partenaireNom", &partenaire);
            if let Some(date) = date_accord {
                set(vars, "dateAccordPartenaire", format_french_date(date));
            }
            set(
                vars,
                "texteAccordIndivision",
                indivision_paragraph(&partenaire, date_accord),
            );
        }
    }
}

fn full_name(prenom: &Option<String>, nom: &Option<String>) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(p) = prenom {
        if !p.is_empty() {
            parts.push(p.clone());
        }
    }
    if let Some(n) = nom {
        if !n.is_empty() {
            parts.push(n.to_uppercase());
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Notice required by article 1832-2 of the Code civil when common marital
/// funds are contributed.
fn spousal_consent_paragraph(
    conjoint: &Option<String>,
    date_notification: &Option<String>,
    renonciation: bool,
) -> String {
    let conjoint = conjoint.as_deref().unwrap_or("[À compléter]");
    let date = date_notification
        .as_deref()
        .map(format_french_date)
        .unwrap_or_else(|| "[À compléter]".to_string());
    let mut paragraph = format!(
        "Le conjoint de l'apporteur, {}, a été averti de cet apport de deniers communs \
         par lettre recommandée avec demande d'avis de réception reçue le {}, conformément \
         aux dispositions de l'article 1832-2 du Code civil.",
        conjoint, date
    );
    if renonciation {
        paragraph.push_str(" Le conjoint a déclaré renoncer expressément à la qualité d'associé.");
    } else {
        paragraph.push_str(
            " Le conjoint n'a pas notifié son intention de devenir personnellement associé.",
        );
    }
    paragraph
}

fn indivision_paragraph(partenaire: &Option<String>, date_accord: &Option<String>) -> String {
    let partenaire = partenaire.as_deref().unwrap_or("[À compléter]");
    let date = date_accord
        .as_deref()
        .map(format_french_date)
        .unwrap_or_else(|| "[À compléter]".to_string());
    format!(
        "Les fonds apportés dépendent d'une indivision entre l'apporteur et {}, qui a donné \
         son accord exprès à cet apport par acte en date du {}.",
        partenaire, date
    )
}

fn shareholder_vars(
    vars: &mut VarMap,
    data: &StatutsData,
    fallback: &DossierContext,
    form: LegalForm,
) {
    if data.is_multi_shareholder() {
        roster_vars(vars, data, form);
        return;
    }
    match &data.associe_unique {
        Some(AssocieUnique::PersonnePhysique(personne)) => {
            set(vars, "typeAssocie", "PERSONNE_PHYSIQUE");
            physical_person_vars(vars, personne, fallback);
        }
        Some(AssocieUnique::PersonneMorale(societe)) => {
            set(vars, "typeAssocie", "PERSONNE_MORALE");
            corporate_person_vars(vars, societe);
        }
        None => {
            // Draft without the shareholder section: fall back entirely on
            // the dossier identity so the preamble still reads naturally.
            set(vars, "typeAssocie", "PERSONNE_PHYSIQUE");
            let from_dossier = PersonnePhysique {
                civilite: fallback.civilite.unwrap_or_default(),
                prenom: fallback.prenom.clone(),
                nom: fallback.nom.clone(),
                adresse: fallback.adresse.clone(),
                date_naissance: fallback.date_naissance.clone(),
                lieu_naissance: fallback.lieu_naissance.clone(),
                nationalite: fallback.nationalite.clone(),
            };
            physical_person_vars(vars, &from_dossier, fallback);
        }
    }
}

fn physical_person_vars(vars: &mut VarMap, personne: &PersonnePhysique, fallback: &DossierContext) {
    let civilite = personne.civilite;
    set(vars, "civiliteAssocie", civilite_tag(civilite));
    set(vars, "civiliteAssocieLabel", civilite.label());
    set_opt_or(vars, "associePrenom", &personne.prenom, &fallback.prenom);
    let nom = personne
        .nom
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| fallback.nom.clone());
    if let Some(nom) = nom {
        set(vars, "associeNom", nom.to_uppercase());
    }
    set_opt_or(vars, "associeAdresse", &personne.adresse, &fallback.adresse);
    let date_naissance = personne
        .date_naissance
        .clone()
        .filter(|d| !d.is_empty())
        .or_else(|| fallback.date_naissance.clone());
    if let Some(date) = date_naissance {
        set(vars, "associeDateNaissance", format_french_date(&date));
    }
    set_opt_or(
        vars,
        "associeLieuNaissance",
        &personne.lieu_naissance,
        &fallback.lieu_naissance,
    );
    set_opt_or(
        vars,
        "associeNationalite",
        &personne.nationalite,
        &fallback.nationalite,
    );
}

fn corporate_person_vars(vars: &mut VarMap, societe: &PersonneMorale) {
    set_opt(vars, "associeSocieteNom", &societe.denomination);
    set_opt(vars, "associeSocieteForme", &societe.forme_juridique);
    if let Some(capital) = societe.capital {
        set(
            vars,
            "associeSocieteCapital",
            format_amount_with_words(capital, "EUROS"),
        );
    }
    set_opt(vars, "associeSocieteSiege", &societe.siege_social);
    if let (Some(ville), Some(numero)) = (&societe.rcs_ville, &societe.rcs_numero) {
        set(vars, "associeSocieteRcs", format!("RCS {} {}", ville, numero));
    }
    if let Some(representant) = &societe.representant {
        set(
            vars,
            "associeSocieteRepresentant",
            format!(
                "{} {}",
                representant.civilite.label(),
                representant.full_name()
            ),
        );
        set(
            vars,
            "civiliteRepresentant",
            civilite_tag(representant.civilite),
        );
    }
}

fn civilite_tag(civilite: Civility) -> &'static str {
    match civilite {
        Civility::M => "M",
        Civility::Mme => "Mme",
    }
}

/// Multi-shareholder roster: preamble listing, repartition table, and the
/// derived per-shareholder allocation.
fn roster_vars(vars: &mut VarMap, data: &StatutsData, form: LegalForm) {
    let capital = data.capital.unwrap_or(0);
    let total_parts = data.nombre_parts.unwrap_or(0);
    let allocations = allocate_capital(&data.associes, capital, total_parts);
    let share_noun = form.share_noun();

    set(vars, "nombreAssocies", data.associes.len());

    let roster: Vec<String> = data
        .associes
        .iter()
        .map(|associe| {
            let mut line = format!("{} {}", associe.civilite.label(), associe.full_name());
            if let Some(adresse) = &associe.adresse {
                if !adresse.is_empty() {
                    line.push_str(&format!(", demeurant {}", adresse));
                }
            }
            if let Some(date) = &associe.date_naissance {
                if !date.is_empty() {
                    let suffix = match associe.civilite {
                        Civility::M => "né",
                        Civility::Mme => "née",
                    };
                    line.push_str(&format!(", {} le {}", suffix, format_french_date(date)));
                    if let Some(lieu) = &associe.lieu_naissance {
                        if !lieu.is_empty() {
                            line.push_str(&format!(" à {}", lieu));
                        }
                    }
                }
            }
            line
        })
        .collect();
    set(vars, "listeAssocies", roster.join(",\n\n"));

    let mut table: Vec<String> = allocations
        .iter()
        .map(|allocation| {
            format!(
                "- {} : {} {}, soit un apport de {}",
                allocation.nom,
                format_french_number(allocation.parts),
                share_noun,
                format_amount_with_words(allocation.montant, "EUROS")
            )
        })
        .collect();
    table.push(format!(
        "Total : {} {}, soit {}",
        format_french_number(total_parts),
        share_noun,
        format_amount_with_words(capital, "EUROS")
    ));
    set(vars, "tableauRepartition", table.join("\n"));
}

fn direction_vars(
    vars: &mut VarMap,
    data: &StatutsData,
    fallback: &DossierContext,
    form: LegalForm,
) {
    let role = if form.has_president() {
        "Président"
    } else {
        "Gérant"
    };
    set(vars, "roleDirection", role);

    let direction = match &data.direction {
        Some(d) => d.clone(),
        None => Direction::default(),
    };

    // "Is the sole shareholder" copies identity from the shareholder record
    // instead of requiring duplicate entry.
    let identity: PersonnePhysique = if direction.est_associe_unique {
        match &data.associe_unique {
            Some(AssocieUnique::PersonnePhysique(p)) => p.clone(),
            Some(AssocieUnique::PersonneMorale(m)) => {
                m.representant.clone().unwrap_or_default()
            }
            None => PersonnePhysique {
                civilite: fallback.civilite.unwrap_or_default(),
                prenom: fallback.prenom.clone(),
                nom: fallback.nom.clone(),
                adresse: fallback.adresse.clone(),
                ..Default::default()
            },
        }
    } else {
        PersonnePhysique {
            civilite: direction.civilite,
            prenom: direction.prenom.clone(),
            nom: direction.nom.clone(),
            adresse: direction.adresse.clone(),
            ..Default::default()
        }
    };

    set(vars, "directionEstAssocie", direction.est_associe_unique);
    set(vars, "civiliteDirection", civilite_tag(identity.civilite));
    set(vars, "civiliteDirectionLabel", identity.civilite.label());
    set_opt(vars, "directionPrenom", &identity.prenom);
    if let Some(nom) = &identity.nom {
        if !nom.is_empty() {
            set(vars, "directionNom", nom.to_uppercase());
        }
    }
    set_opt(vars, "directionAdresse", &identity.adresse);

    set(
        vars,
        "dureeMandat",
        direction
            .duree_mandat
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "la durée de la Société".to_string()),
    );

    set(vars, "remunerationType", remuneration_tag(direction.remuneration));
    if let Some(montant) = direction.remuneration_montant {
        set(
            vars,
            "remunerationMontant",
            format_amount_with_words(montant, "EUROS"),
        );
    }
    if form.has_president() {
        set(
            vars,
            "modalitesRevocation",
            direction
                .modalites_revocation
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| {
                    "décision collective des associés prise à la majorité simple, sans qu'il \
                     soit besoin d'un juste motif"
                        .to_string()
                }),
        );
    } else {
        set(
            vars,
            "pouvoirsDirection",
            direction
                .pouvoirs
                .clone()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| {
                    "les pouvoirs les plus étendus pour agir en toute circonstance au nom de \
                     la Société, dans la limite de l'objet social"
                        .to_string()
                }),
        );
    }

    // Collective-decision paragraphs only make sense with a roster.
    if data.is_multi_shareholder() && !form.has_president() {
        let rule = data
            .regle_majorite
            .unwrap_or(MajorityRule::LegaleSecondeConsultation);
        let seuil = data.seuil_majorite_renforcee.unwrap_or(66);
        set(
            vars,
            "texteMajoriteNomination",
            majority_paragraph("nommé", rule, seuil),
        );
        set(
            vars,
            "texteMajoriteRevocation",
            majority_paragraph("révoqué", rule, seuil),
        );
    }
}

fn remuneration_tag(remuneration: Remuneration) -> &'static str {
    match remuneration {
        Remuneration::Aucune => "AUCUNE",
        Remuneration::Fixe => "FIXE",
        Remuneration::DecisionCollective => "DECISION_COLLECTIVE",
    }
}

/// One of the three canned majority-rule paragraphs, with the action verb
/// ("nommé"/"révoqué") interpolated.
fn majority_paragraph(action: &str, rule: MajorityRule, seuil: u8) -> String {
    match rule {
        MajorityRule::LegaleSecondeConsultation => format!(
            "Le gérant est {} par un ou plusieurs associés représentant plus de la moitié \
             des parts sociales. Si cette majorité n'est pas obtenue, les associés sont, \
             selon les cas, convoqués ou consultés une seconde fois, et la décision est \
             prise à la majorité des votes émis, quelle que soit la portion du capital \
             représentée.",
            action
        ),
        MajorityRule::LegaleSansSecondeConsultation => format!(
            "Le gérant est {} par un ou plusieurs associés représentant plus de la moitié \
             des parts sociales. Si cette majorité n'est pas obtenue, la décision n'est \
             pas adoptée et aucune seconde consultation n'est organisée.",
            action
        ),
        MajorityRule::Renforcee => format!(
            "Le gérant est {} par un ou plusieurs associés représentant au moins {} % des \
             parts sociales.",
            action, seuil
        ),
    }
}

fn option_vars(vars: &mut VarMap, data: &StatutsData, form: LegalForm) {
    if let Some(option) = data.option_fiscale {
        let tag = match option {
            crate::data::OptionFiscale::Ir => "IR",
            crate::data::OptionFiscale::Is => "IS",
        };
        set(vars, "optionFiscale", tag);
        set(vars, "optionIs", tag == "IS");
    }

    set(vars, "clauseArbitrage", data.clause_arbitrage);
    if data.clause_arbitrage {
        set(
            vars,
            "arbitrageModalites",
            data.arbitrage_modalites
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| {
                    "un arbitre unique désigné d'un commun accord entre les parties ou, à \
                     défaut, par le Président du Tribunal de commerce du siège social"
                        .to_string()
                }),
        );
    }

    if let Some(regime) = data.regime_cession {
        let tag = match regime {
            crate::data::RegimeCession::LibreEntreAssocies => "LIBRE_ENTRE_ASSOCIES",
            crate::data::RegimeCession::Agrement => "AGREMENT",
            crate::data::RegimeCession::Libre => "LIBRE",
        };
        set(vars, "regimeCession", tag);
    }

    set(vars, "conventionsReglementees", data.conventions_reglementees);

    if !data.actes_formation.is_empty() {
        let liste: Vec<String> = data
            .actes_formation
            .iter()
            .map(|acte| format!("- {}", acte))
            .collect();
        set(vars, "actesFormation", liste.join("\n"));
        set(vars, "actesFormationPresents", true);
    }

    let exercice = data.exercice_social.clone().unwrap_or_default();
    set(
        vars,
        "exerciceDebut",
        exercice
            .debut
            .as_deref()
            .map(format_day_month)
            .unwrap_or_else(|| "1er janvier".to_string()),
    );
    set(
        vars,
        "exerciceFin",
        exercice
            .fin
            .as_deref()
            .map(format_day_month)
            .unwrap_or_else(|| "31 décembre".to_string()),
    );
    if let Some(cloture) = &exercice.premiere_cloture {
        set(vars, "premiereCloture", format_french_date(cloture));
    }

    if let Some(cac) = &data.commissaire_aux_comptes {
        set(vars, "commissaireAuxComptes", true);
        set_opt(vars, "cacNom", &cac.nom);
        set_opt(vars, "cacSuppleant", &cac.suppleant);
    } else {
        set(vars, "commissaireAuxComptes", false);
    }

    // Tax-regime election is only offered to non-SASU forms.
    set(vars, "optionFiscaleApplicable", form != LegalForm::Sasu);
}

fn signature_vars(vars: &mut VarMap, data: &StatutsData) {
    let signature = data.signature.clone().unwrap_or_default();
    set_opt(vars, "lieuSignature", &signature.lieu);
    if let Some(date) = &signature.date {
        if !date.is_empty() {
            set(vars, "dateSignature", format_french_date(date));
        }
    }
    if let Some(exemplaires) = signature.nombre_exemplaires {
        set(vars, "nombreExemplaires", exemplaires);
        set(
            vars,
            "nombreExemplairesLettres",
            number_to_french_words(exemplaires as u64).to_lowercase(),
        );
    }
}
