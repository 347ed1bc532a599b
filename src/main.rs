//! `molexhibit` command-line viewer.
//!
//! Usage: `molexhibit [--options <toml>] [--json] [molecule-id]`
//!
//! Without a molecule id, lists every registered molecule. With one, prints
//! its summary, or its sphere/cylinder scene as JSON with `--json`.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use molexhibit::chem::{element, Molecule};
use molexhibit::error::ExhibitError;
use molexhibit::molecules::MoleculeRegistry;
use molexhibit::options::Options;
use molexhibit::scene::MoleculeScene;

/// Procedural molecule exhibit: list molecules, summarize one, or dump its
/// render scene.
#[derive(Debug, Parser)]
#[command(name = "molexhibit", version, about)]
struct Cli {
    /// Options TOML (helix, geometry, display, colors, cycle)
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Print JSON instead of text: the molecule list, or the scene of
    /// MOLECULE
    #[arg(long)]
    json: bool,

    /// Registry id (water, glucose, dna, hemoglobin)
    #[arg(value_name = "MOLECULE")]
    molecule: Option<String>,
}

fn write_listing(
    out: &mut impl Write,
    registry: &MoleculeRegistry,
) -> io::Result<()> {
    for mol in registry {
        writeln!(
            out,
            "{:<12} {:<28} {:>4} atoms {:>4} bonds  [{}]",
            mol.id,
            mol.name,
            mol.atom_count,
            mol.bond_count,
            mol.category.label()
        )?;
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, mol: &Molecule) -> io::Result<()> {
    writeln!(out, "{} ({})", mol.name, mol.category.label())?;
    writeln!(out, "Formula: {}", mol.display_formula())?;
    writeln!(out, "Atoms: {}  Bonds: {}", mol.atom_count, mol.bond_count)?;
    for (symbol, count) in mol.composition() {
        writeln!(out, "  {:<2} {:<10} {count}", symbol, element::element_name(symbol))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", mol.description)
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), ExhibitError> {
    let options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let registry = options.build_registry()?;

    match &cli.molecule {
        None if cli.json => {
            let json = serde_json::to_string_pretty(registry.molecules())?;
            writeln!(out, "{json}")?;
        }
        None => write_listing(out, &registry)?,
        Some(id) => {
            let mol = registry.require(id)?;
            if cli.json {
                writeln!(out, "{}", MoleculeScene::build(mol, &options).to_json()?)?;
            } else {
                write_summary(out, mol)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli, &mut io::stdout().lock()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn run_to_string(args: &[&str]) -> Result<String, ExhibitError> {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut buf = Vec::new();
        run(&cli, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags_and_positional() {
        let cli =
            Cli::try_parse_from(["molexhibit", "--options", "a.toml", "--json", "dna"])
                .unwrap();
        assert_eq!(cli.options, Some(PathBuf::from("a.toml")));
        assert!(cli.json);
        assert_eq!(cli.molecule.as_deref(), Some("dna"));

        let bare = Cli::try_parse_from(["molexhibit"]).unwrap();
        assert!(bare.options.is_none() && !bare.json && bare.molecule.is_none());
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["molexhibit", "--colour"]).is_err());
        assert!(Cli::try_parse_from(["molexhibit", "--options"]).is_err());
        assert!(Cli::try_parse_from(["molexhibit", "water", "dna"]).is_err());
    }

    #[test]
    fn listing_and_summary() {
        let listing = run_to_string(&["molexhibit"]).unwrap();
        assert_eq!(listing.lines().count(), 4);
        assert!(listing.contains("hemoglobin"));

        let summary = run_to_string(&["molexhibit", "water"]).unwrap();
        assert!(summary.starts_with("Water (H₂O) (small-molecule)"));
        assert!(summary.contains("Oxygen"));
    }

    #[test]
    fn json_scene_and_unknown_id() {
        let json = run_to_string(&["molexhibit", "--json", "water"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["spheres"].as_array().unwrap().len(), 3);

        assert!(matches!(
            run_to_string(&["molexhibit", "caffeine"]),
            Err(ExhibitError::UnknownMolecule(_))
        ));
    }
}
