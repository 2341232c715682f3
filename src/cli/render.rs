//! Console Rendering
//!
//! Human-readable output for variants and metrics. JSON output is handled by
//! the commands directly.

use console::style;

use crate::types::{Metrics, Variant, VariantSet};

/// Print a whole variant set.
pub fn print_variant_set(set: &VariantSet) {
    for (idx, variant) in set.variants.iter().enumerate() {
        if set.variants.len() > 1 {
            let label = if variant.is_primary {
                "Variant A (primary)"
            } else {
                "Variant B"
            };
            println!("\n{}", style(label).bold().underlined());
        } else if idx == 0 {
            println!();
        }
        print_variant(variant);
    }
}

fn print_variant(variant: &Variant) {
    println!(
        "{} {} {} temperature {:.2}",
        style("generated by").dim(),
        style(&variant.provider_used).cyan().bold(),
        style("at").dim(),
        variant.temperature_used,
    );
    println!("\n{}\n", variant.text);
    print_metrics(&variant.metrics);
}

/// Print one metrics block.
pub fn print_metrics(metrics: &Metrics) {
    println!("{}", style("Quality metrics").bold());
    println!("  readability  {:>5.2} / 10", metrics.readability);
    println!("  clarity      {:>5.2} / 10", metrics.clarity);
    println!("  platform fit {:>5} / 100", metrics.platform_optimization);
    println!(
        "  engagement   {:>5} / 100",
        style(metrics.engagement).green().bold()
    );
    println!("{}", style("Tips").bold());
    for line in metrics.tips.lines() {
        println!("  {}", line);
    }
}
