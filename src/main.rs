use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use statuts::data::{DossierContext, StatutsData};
use statuts::{compute_progress, DocumentRenderer, LegalForm, TemplateStore};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the JSON dossier file
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Legal form (EURL, SARL, SASU, SAS); overrides the dossier
    #[arg(short, long, global = true)]
    form: Option<String>,

    /// Directory of template overrides (JSON or YAML per legal form)
    #[arg(short, long, global = true)]
    templates: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a dossier skeleton to fill in
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Generate the statuts document (default command)
    Generate,
    /// Show how complete the dossier is
    Progress,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path }) => init_dossier(&path),
        Some(Commands::Progress) => progress(cli),
        Some(Commands::Generate) | None => generate(cli),
    }
}

fn init_dossier(path: &Path) -> Result<()> {
    info!("Initializing dossier at {:?}", path);

    std::fs::create_dir_all(path).context("Failed to create target directory")?;

    let dossier_content = r#"{
  "forme": "EURL",
  "denomination": "MA SOCIETE",
  "siege_social": "1 rue de l'Exemple, 75001 Paris",
  "objet_social": "toutes activités de conseil",
  "duree": 99,
  "capital": 1000,
  "nombre_parts": 100,
  "associe_unique": {
    "type": "PERSONNE_PHYSIQUE",
    "civilite": "M",
    "prenom": "Jean",
    "nom": "Dupont",
    "adresse": "1 rue de l'Exemple, 75001 Paris",
    "date_naissance": "1985-04-12",
    "lieu_naissance": "Paris",
    "nationalite": "française"
  },
  "apport": {
    "type": "NUMERAIRE_TOTAL",
    "montant": 1000
  },
  "direction": {
    "est_associe_unique": true
  },
  "signature": {
    "lieu": "Paris",
    "date": "2024-01-01",
    "nombre_exemplaires": 3
  }
}
"#;
    let dossier_path = path.join("dossier.json");
    std::fs::write(&dossier_path, dossier_content).context("Failed to write dossier file")?;

    info!("✓ Dossier skeleton written to {:?}", dossier_path);
    info!("  Run: statuts generate -d dossier.json");

    Ok(())
}

fn load_dossier(cli: &Cli) -> Result<(StatutsData, LegalForm)> {
    let data_path = cli
        .data
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("--data is required"))?;

    info!("Loading dossier from {:?}", data_path);
    let content = std::fs::read_to_string(data_path).context("Failed to read dossier file")?;
    let data: StatutsData =
        serde_json::from_str(&content).context("Failed to parse JSON dossier")?;

    let form = match &cli.form {
        Some(raw) => LegalForm::from_str(raw)?,
        None => data
            .forme
            .ok_or_else(|| anyhow::anyhow!("No legal form: set \"forme\" in the dossier or pass --form"))?,
    };

    Ok((data, form))
}

fn generate(cli: Cli) -> Result<()> {
    let (data, form) = load_dossier(&cli)?;

    let store = match &cli.templates {
        Some(dir) => {
            info!("Loading template overrides from {:?}", dir);
            TemplateStore::load_dir(dir).context("Failed to load template overrides")?
        }
        None => TemplateStore::builtin(),
    };

    let renderer = DocumentRenderer::new(store);
    let document = renderer.render(form, &data, &DossierContext::default());

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &document).context("Failed to write output file")?;
            info!("✓ Statuts written to {:?}", path);
        }
        None => println!("{}", document),
    }

    Ok(())
}

fn progress(cli: Cli) -> Result<()> {
    let (data, form) = load_dossier(&cli)?;
    println!("{} : dossier complété à {} %", form, compute_progress(&data));
    Ok(())
}
