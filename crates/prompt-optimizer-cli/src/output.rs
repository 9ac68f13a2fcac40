use colored::Colorize;

use prompt_optimizer_core::{
    keyword_matches, score_all, ClassificationResult, HintSet, OptimizationResult,
    CATEGORY_CATALOG,
};

/// "1 character" / "N characters"
pub fn char_count(n: usize) -> String {
    format!("{} character{}", n, if n == 1 { "" } else { "s" })
}

fn mark(set: bool) -> colored::ColoredString {
    if set {
        "✓".green()
    } else {
        "✗".dimmed()
    }
}

pub fn print_metadata(result: &OptimizationResult) {
    let meta = &result.metadata;
    let detected = meta.hints.detected();

    eprintln!();
    eprintln!("{} {}", "Category:".cyan(), result.category.to_string().bold());
    eprintln!(
        "{} {} → {} ({:.1}x)",
        "Length:".cyan(),
        char_count(meta.original_length),
        char_count(meta.optimized_length),
        result.expansion_ratio()
    );
    eprintln!(
        "{} {}",
        "Hints:".cyan(),
        if detected.is_empty() {
            "none".dimmed().to_string()
        } else {
            detected.join(", ")
        }
    );
}

pub fn print_classification(result: &ClassificationResult) {
    println!(
        "{} {}",
        result.category.to_string().bold(),
        format!("(score {})", result.score).dimmed()
    );
}

pub fn print_explanation(text: &str) {
    println!();
    for (id, score) in score_all(text) {
        let matched = keyword_matches(text, id);
        let score_str = format!("{:>2}", score);
        println!(
            "  {:<12} {} {}",
            id.as_str(),
            if score > 0 {
                score_str.yellow()
            } else {
                score_str.dimmed()
            },
            matched.join(", ").dimmed()
        );
    }
    println!();
}

pub fn print_hints(hints: &HintSet) {
    println!("  {} length specified", mark(hints.length_specified));
    println!("  {} tone specified", mark(hints.tone_specified));
    println!("  {} format specified", mark(hints.format_specified));
    println!("  {} example given", mark(hints.example_given));
}

pub fn print_categories() {
    println!();
    for profile in CATEGORY_CATALOG {
        println!("{}", profile.id.as_str().cyan().bold());
        println!("  {} {}", "role:".dimmed(), profile.role);
        println!("  {} {}", "domain:".dimmed(), profile.domain);
        println!("  {} {}", "keywords:".dimmed(), profile.keywords.join(", "));
        println!();
    }
    println!(
        "{} {}",
        "general".cyan().bold(),
        "(fallback when no keyword matches)".dimmed()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_plural() {
        assert_eq!(char_count(0), "0 characters");
        assert_eq!(char_count(1), "1 character");
        assert_eq!(char_count(42), "42 characters");
    }
}
