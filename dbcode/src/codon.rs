//! Translation of a transcript into amino-acid symbols using the standard
//! codon table.

use itertools::Itertools;
use log::{debug, warn};

use crate::nucleotide::Nucleotide;
use crate::strand::{Protein, Transcript};

/// Number of nucleotides per codon.
pub const CODON_LEN: usize = 3;

/// Output symbol for the three stop codons.
pub const STOP_SENTINEL: char = 'X';

/// Output symbol for a triplet that is not in [`CODON_TABLE`]; only possible
/// for transcripts containing symbols other than `A`, `C`, `G`, `T`.
pub const UNMAPPED_SENTINEL: char = '-';

/// The codon table. Every one of the 64 triplets over `{A, C, G, T}` appears
/// exactly once; entries with the same symbol are adjacent.
pub const CODON_TABLE: [(&[u8; CODON_LEN], char); 64] = [
    (b"ATT", 'I'),
    (b"ATC", 'I'),
    (b"ATA", 'I'),
    (b"CTT", 'L'),
    (b"CTC", 'L'),
    (b"CTA", 'L'),
    (b"CTG", 'L'),
    (b"TTA", 'L'),
    (b"TTG", 'L'),
    (b"GTT", 'V'),
    (b"GTC", 'V'),
    (b"GTA", 'V'),
    (b"GTG", 'V'),
    (b"TTT", 'F'),
    (b"TTC", 'F'),
    (b"ATG", 'M'),
    (b"TGT", 'C'),
    (b"TGC", 'C'),
    (b"GCT", 'A'),
    (b"GCC", 'A'),
    (b"GCA", 'A'),
    (b"GCG", 'A'),
    (b"GGT", 'G'),
    (b"GGC", 'G'),
    (b"GGA", 'G'),
    (b"GGG", 'G'),
    (b"CCT", 'P'),
    (b"CCC", 'P'),
    (b"CCA", 'P'),
    (b"CCG", 'P'),
    (b"ACT", 'T'),
    (b"ACC", 'T'),
    (b"ACA", 'T'),
    (b"ACG", 'T'),
    (b"TCT", 'S'),
    (b"TCC", 'S'),
    (b"TCA", 'S'),
    (b"TCG", 'S'),
    (b"AGT", 'S'),
    (b"AGC", 'S'),
    (b"TAT", 'Y'),
    (b"TAC", 'Y'),
    (b"TGG", 'W'),
    (b"CAA", 'Q'),
    (b"CAG", 'Q'),
    (b"AAT", 'N'),
    (b"AAC", 'N'),
    (b"CAT", 'H'),
    (b"CAC", 'H'),
    (b"GAA", 'E'),
    (b"GAG", 'E'),
    (b"GAT", 'D'),
    (b"GAC", 'D'),
    (b"AAA", 'K'),
    (b"AAG", 'K'),
    (b"CGT", 'R'),
    (b"CGC", 'R'),
    (b"CGA", 'R'),
    (b"CGG", 'R'),
    (b"AGA", 'R'),
    (b"AGG", 'R'),
    (b"TAA", STOP_SENTINEL),
    (b"TAG", STOP_SENTINEL),
    (b"TGA", STOP_SENTINEL),
];

const AMINO_ACID_NAMES: [(char, &str); 21] = [
    ('I', "Isoleucine"),
    ('L', "Leucine"),
    ('V', "Valine"),
    ('F', "Phenylalanine"),
    ('M', "Methionine"),
    ('C', "Cysteine"),
    ('A', "Alanine"),
    ('G', "Glycine"),
    ('P', "Proline"),
    ('T', "Threonine"),
    ('S', "Serine"),
    ('Y', "Tyrosine"),
    ('W', "Tryptophan"),
    ('Q', "Glutamine"),
    ('N', "Asparagine"),
    ('H', "Histidine"),
    ('E', "Glutamic Acid"),
    ('D', "Aspartic Acid"),
    ('K', "Lysine"),
    ('R', "Arginine"),
    (STOP_SENTINEL, "Stop Codon"),
];

const fn nucleotide_index(byte: u8) -> Option<usize> {
    match Nucleotide::from_byte(byte) {
        Some(nucleotide) => Some(nucleotide.index()),
        None => None,
    }
}

/// Position of a codon in [`CODON_LOOKUP`], or `None` if any byte is not a
/// nucleotide.
const fn codon_index(codon: &[u8; CODON_LEN]) -> Option<usize> {
    match (
        nucleotide_index(codon[0]),
        nucleotide_index(codon[1]),
        nucleotide_index(codon[2]),
    ) {
        (Some(first), Some(second), Some(third)) => Some(first * 16 + second * 4 + third),
        _ => None,
    }
}

/// [`CODON_TABLE`] indexed by [`codon_index`].
const CODON_LOOKUP: [u8; 64] = {
    let mut lookup = [0; 64];

    let mut i = 0;
    while i < CODON_TABLE.len() {
        let (codon, amino_acid) = CODON_TABLE[i];
        match codon_index(codon) {
            Some(index) => lookup[index] = amino_acid as u8,
            None => panic!("Codon table contains an invalid nucleotide"),
        }
        i += 1;
    }

    lookup
};

/// Returns the output symbol for a single codon.
///
/// # Examples
/// ```
/// use dbcode::codon::{translate_codon, STOP_SENTINEL, UNMAPPED_SENTINEL};
///
/// assert_eq!(translate_codon(b"ATG"), 'M');
/// assert_eq!(translate_codon(b"TGA"), STOP_SENTINEL);
/// assert_eq!(translate_codon(b"ANG"), UNMAPPED_SENTINEL);
/// ```
#[inline]
#[must_use]
pub fn translate_codon(codon: &[u8; CODON_LEN]) -> char {
    match codon_index(codon) {
        Some(index) => CODON_LOOKUP[index] as char,
        None => UNMAPPED_SENTINEL,
    }
}

/// Translates `transcript` codon by codon, starting at offset 0. A trailing
/// group shorter than [`CODON_LEN`] is ignored.
///
/// # Examples
/// ```
/// use dbcode::codon::translate;
/// use dbcode::strand::Transcript;
///
/// let protein = translate(&Transcript::from("ATGAAATAGCA"));
/// assert_eq!(protein.str(), "MKX");
/// ```
#[must_use]
pub fn translate(transcript: &Transcript) -> Protein {
    let codons = transcript.as_bytes().chunks_exact(CODON_LEN);
    let mut protein = String::with_capacity(codons.len());
    let mut unmapped = 0;

    for codon in codons {
        let amino_acid = match <&[u8; CODON_LEN]>::try_from(codon) {
            Ok(codon) => translate_codon(codon),
            Err(_) => UNMAPPED_SENTINEL,
        };
        if amino_acid == UNMAPPED_SENTINEL {
            unmapped += 1;
        }
        protein.push(amino_acid);
    }

    if unmapped > 0 {
        warn!("{} codon(s) could not be mapped to an amino acid", unmapped);
    }
    debug!("Translated {} codons", protein.len());

    Protein::from(protein)
}

/// Full name of an output symbol, e.g. `Methionine` for `M`.
#[must_use]
pub fn amino_acid_name(symbol: char) -> Option<&'static str> {
    AMINO_ACID_NAMES
        .iter()
        .find(|(amino_acid, _)| *amino_acid == symbol)
        .map(|(_, name)| *name)
}

/// The codon table grouped by output symbol, in table order.
#[must_use]
pub fn codons_by_amino_acid() -> Vec<(char, Vec<&'static str>)> {
    let mut groups = Vec::new();
    for (amino_acid, group) in &CODON_TABLE.iter().group_by(|(_, amino_acid)| *amino_acid) {
        let codons = group
            .map(|(codon, _)| std::str::from_utf8(*codon).unwrap_or_default())
            .collect();
        groups.push((amino_acid, codons));
    }

    groups
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::iproduct;

    use crate::codon::{
        amino_acid_name, codons_by_amino_acid, translate, translate_codon, CODON_LOOKUP,
        CODON_TABLE, STOP_SENTINEL, UNMAPPED_SENTINEL,
    };
    use crate::nucleotide::Nucleotide;
    use crate::strand::Transcript;

    #[test]
    fn test_table_covers_all_codons() {
        let codons: HashSet<_> = CODON_TABLE.iter().map(|(codon, _)| **codon).collect();
        assert_eq!(codons.len(), 64);
        assert!(CODON_LOOKUP.iter().all(|&symbol| symbol != 0));

        for (first, second, third) in
            iproduct!(Nucleotide::VALUES, Nucleotide::VALUES, Nucleotide::VALUES)
        {
            let codon = [first.as_byte(), second.as_byte(), third.as_byte()];
            assert_ne!(translate_codon(&codon), UNMAPPED_SENTINEL);
        }
    }

    #[test]
    fn test_table_counts() {
        let stops = CODON_TABLE
            .iter()
            .filter(|(_, amino_acid)| *amino_acid == STOP_SENTINEL)
            .count();
        assert_eq!(stops, 3);

        let groups = codons_by_amino_acid();
        assert_eq!(groups.len(), 21);
        assert_eq!(groups[0], ('I', vec!["ATT", "ATC", "ATA"]));
        assert_eq!(groups[20], ('X', vec!["TAA", "TAG", "TGA"]));
        assert!(groups
            .iter()
            .all(|(amino_acid, _)| amino_acid_name(*amino_acid).is_some()));
    }

    #[test]
    fn test_translate_example() {
        let protein = translate(&Transcript::from("ATGAAATAG"));
        assert_eq!(protein.str(), "MKX");
    }

    #[test]
    fn test_translate_drops_partial_codon() {
        assert_eq!(translate(&Transcript::from("GCTG")).str(), "A");
        assert_eq!(translate(&Transcript::from("GCTGG")).str(), "A");
        assert!(translate(&Transcript::from("GC")).is_empty());
        assert!(translate(&Transcript::default()).is_empty());
    }

    #[test]
    fn test_translate_unmapped() {
        let protein = translate(&Transcript::from("ATGNNNTGG"));
        assert_eq!(protein.str(), "M-W");
        assert_ne!(UNMAPPED_SENTINEL, STOP_SENTINEL);
    }

    #[test]
    fn test_known_codons() {
        assert_eq!(translate_codon(b"TTT"), 'F');
        assert_eq!(translate_codon(b"TGG"), 'W');
        assert_eq!(translate_codon(b"AGG"), 'R');
        assert_eq!(translate_codon(b"GAC"), 'D');
        assert_eq!(translate_codon(b"taa"), UNMAPPED_SENTINEL);
    }

    #[test]
    fn test_amino_acid_name() {
        assert_eq!(amino_acid_name('M'), Some("Methionine"));
        assert_eq!(amino_acid_name('X'), Some("Stop Codon"));
        assert_eq!(amino_acid_name('-'), None);
    }
}
