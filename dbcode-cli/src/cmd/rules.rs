use dbcode::classifier::BAND_RULES;
use dbcode::codon::{amino_acid_name, codons_by_amino_acid, STOP_SENTINEL, UNMAPPED_SENTINEL};
use dbcode::strand::INTERLEAVE_RULE;
use itertools::Itertools;

use crate::PROGRESS_BAR;

pub(crate) fn rules() {
    PROGRESS_BAR.finish();

    for line in rule_lines() {
        println!("{}", line);
    }
}

fn rule_lines() -> Vec<String> {
    let mut lines = vec!["Classification (x = sample - R):".to_owned()];
    lines.extend(
        BAND_RULES
            .iter()
            .map(|(nucleotide, rule)| format!("  {}: {}", nucleotide, rule)),
    );

    lines.push(String::new());
    lines.push("Interleaving (DNA1, DNA2, DNA3 -> mRNA):".to_owned());
    lines.push(format!("  {}", INTERLEAVE_RULE));

    lines.push(String::new());
    lines.push("Codon table:".to_owned());
    for (amino_acid, codons) in codons_by_amino_acid() {
        lines.push(format!(
            "  {} ({}): {}",
            amino_acid,
            amino_acid_name(amino_acid).unwrap_or_default(),
            codons.iter().join(", ")
        ));
    }
    lines.push(format!(
        "Stop codons are written as `{}`, unknown codons as `{}`",
        STOP_SENTINEL, UNMAPPED_SENTINEL
    ));

    lines
}

#[cfg(test)]
mod tests {
    use crate::cmd::rules::rule_lines;

    #[test]
    fn test_rule_lines() {
        let lines = rule_lines();

        assert_eq!(lines[1], "  A: c < x < b");
        assert!(lines.contains(&"  mRNA[i] = DNA1[i] + DNA2[i] + DNA3[i]".to_owned()));
        assert!(lines.contains(&"  M (Methionine): ATG".to_owned()));
        assert!(lines.contains(&"  X (Stop Codon): TAA, TAG, TGA".to_owned()));
        assert_eq!(lines.len(), 1 + 4 + 3 + 2 + 21 + 1);
    }
}
