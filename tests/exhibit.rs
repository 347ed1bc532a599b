//! End-to-end checks over the default molecule set: DNA topology, registry
//! integrity, and scene assembly.

use std::collections::HashSet;

use molexhibit::chem::{BondOrder, Molecule};
use molexhibit::molecules::{
    build_dna_helix, registry, BasePair, HelixParams, MoleculeRegistry, Nucleobase,
    MOLECULE_IDS,
};
use molexhibit::options::Options;
use molexhibit::scene::MoleculeScene;

/// Backbone atom ids of one strand, bottom to top.
fn strand_backbone(mol: &Molecule, strand: usize) -> Vec<usize> {
    let mut ids = Vec::new();
    let mut next = strand;
    for rung in 0..HelixParams::DEFAULT.total_base_pairs() {
        ids.push(next);
        next += BasePair::for_rung(rung).atom_count();
    }
    assert!(ids.iter().all(|&id| mol.atoms[id].element == "P"));
    ids
}

#[test]
fn default_dna_has_twelve_rungs() {
    let dna = registry().require("dna").unwrap();
    assert_eq!(dna.atom_count, 84);
    assert_eq!(dna.bond_count, 94);
    assert_eq!(dna.atoms.iter().filter(|a| a.element == "P").count(), 24);
    assert!(dna.atoms.iter().all(|a| a.simplified));
    assert_eq!(dna.display_formula(), "Complex Polymer (84 atoms shown)");
}

#[test]
fn each_strand_is_an_unbroken_chain() {
    let dna = registry().require("dna").unwrap();
    for strand in 0..2 {
        let backbone = strand_backbone(dna, strand);
        for pair in backbone.windows(2) {
            assert!(
                dna.bonds
                    .iter()
                    .any(|b| b.connects(pair[0], pair[1]) && b.order == BondOrder::Single),
                "strand {strand}: {} and {} not linked",
                pair[0],
                pair[1]
            );
        }
        // 11 links per strand, and no backbone atom bonds to a third
        // backbone atom
        let members: HashSet<usize> = backbone.iter().copied().collect();
        let links = dna
            .bonds
            .iter()
            .filter(|b| members.contains(&b.atom1) && members.contains(&b.atom2))
            .count();
        assert_eq!(links, 11);
    }
}

#[test]
fn sequence_cycles_every_four_rungs() {
    let expected = [
        (Nucleobase::A, Nucleobase::T),
        (Nucleobase::G, Nucleobase::C),
        (Nucleobase::T, Nucleobase::A),
        (Nucleobase::C, Nucleobase::G),
    ];
    let dna = registry().require("dna").unwrap();
    let mut start = 0;
    for rung in 0..12 {
        let pair = BasePair::for_rung(rung);
        assert_eq!((pair.strand1, pair.strand2), expected[rung % 4]);

        // backbone, backbone, fragment 1, fragment 2
        let len1 = pair.strand1.fragment_len();
        let first_base = &dna.atoms[start + 2..start + 2 + len1];
        let elements: Vec<&str> = first_base.iter().map(|a| a.element.as_str()).collect();
        assert_eq!(elements, pair.strand1.elements());

        // the pairing bond is the only double bond on the rung
        let anchor1 = start + 2;
        let anchor2 = start + 2 + len1;
        assert!(dna
            .bonds
            .iter()
            .any(|b| b.connects(anchor1, anchor2) && b.order == BondOrder::Double));

        start += pair.atom_count();
    }
    assert_eq!(start, dna.atom_count);
}

#[test]
fn generation_is_deterministic() {
    let a = build_dna_helix(1.5, 8.0, 3.5, 1.2).unwrap();
    let b = HelixParams::DEFAULT.build();
    assert_eq!(a, b);
    for (x, y) in a.atoms.iter().zip(&b.atoms) {
        assert_eq!(x.position.to_array().map(f32::to_bits), y.position.to_array().map(f32::to_bits));
    }
    assert_eq!(&a, registry().require("dna").unwrap());
}

#[test]
fn larger_helix_scales_counts() {
    let params = HelixParams::new(2.0, 10.0, 4.0, 1.0).unwrap();
    let mol = params.build();
    assert_eq!(params.total_base_pairs(), 20);
    assert_eq!(mol.atom_count, 140);
    assert_eq!(mol.bond_count, 20 * 6 + 2 * 19);
    assert!(mol.validate().is_ok());
}

#[test]
fn registry_molecules_are_consistent() {
    let reg = registry();
    assert_eq!(reg.ids().collect::<Vec<_>>(), MOLECULE_IDS);
    assert!(reg.validate().is_ok());
    for mol in reg {
        assert_eq!(mol.atom_count, mol.atoms.len(), "{}", mol.id);
        assert_eq!(mol.bond_count, mol.bonds.len(), "{}", mol.id);
        for (i, atom) in mol.atoms.iter().enumerate() {
            assert_eq!(atom.id, i, "{}", mol.id);
        }
        assert!(mol.bonds.iter().all(|b| b.atom1 != b.atom2), "{}", mol.id);
    }

    let counts: Vec<(usize, usize)> =
        reg.iter().map(|m| (m.atom_count, m.bond_count)).collect();
    assert_eq!(counts, [(3, 2), (24, 24), (84, 94), (45, 49)]);
}

#[test]
fn registry_json_uses_camel_case_counts() {
    let json = serde_json::to_value(registry().require("water").unwrap()).unwrap();
    assert_eq!(json["atomCount"], 3);
    assert_eq!(json["bondCount"], 2);
    assert_eq!(json["category"], "small-molecule");
    assert_eq!(json["bonds"][0]["order"], 1);
}

#[test]
fn every_molecule_builds_a_full_scene() {
    let options = Options::default();
    let reg = MoleculeRegistry::default();
    for mol in &reg {
        let scene = MoleculeScene::build(mol, &options);
        assert_eq!(scene.spheres.len(), mol.atom_count, "{}", mol.id);
        assert_eq!(scene.cylinders.len(), mol.bond_count, "{}", mol.id);
        assert_eq!(scene.skipped_bonds, 0, "{}", mol.id);
        assert!(scene.radius > 0.0);
        for c in &scene.cylinders {
            assert!(c.position[3] > 0.0);
            assert!(c.rotation.iter().all(|v| v.is_finite()));
        }
    }
}
