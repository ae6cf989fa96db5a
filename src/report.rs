// src/report.rs

//! Console presentation of supplier results.
//!
//! Human-facing output, kept separate from the diagnostic log stream.

use crate::models::Supplier;
use crate::storage::SaveOutcome;

const BORDER_WIDTH: usize = 60;

/// Print the opening banner.
pub fn print_banner() {
    let border = "=".repeat(BORDER_WIDTH);
    println!("{border}");
    println!("Searching for shoe material suppliers in Bucharest");
    println!("Source: OpenStreetMap (OSM) Database");
    println!("{border}");
}

/// Print a numbered block per supplier, or a notice when none matched.
pub fn print_results(suppliers: &[Supplier]) {
    if suppliers.is_empty() {
        println!("\nNo potential suppliers found with the current query.");
        println!("Try broadening the search or checking other sources.");
        return;
    }

    println!(
        "\nFound {} potential suppliers/warehouses:\n",
        suppliers.len()
    );
    println!("{}", "=".repeat(BORDER_WIDTH));

    for (i, supplier) in suppliers.iter().enumerate() {
        println!("{}. {}", i + 1, supplier.name);

        let location = supplier.location_line();
        if !location.is_empty() {
            println!("   📍 {location}");
        }
        if !supplier.shop.is_empty() {
            println!("   🏪 Shop type: {}", supplier.shop);
        }
        if !supplier.craft.is_empty() {
            println!("   🛠 Craft: {}", supplier.craft);
        }
        if !supplier.phone.is_empty() {
            println!("   📞 {}", supplier.phone);
        }
        println!();
    }
}

/// Print the save confirmation or the nothing-to-save notice.
pub fn print_save_outcome(outcome: &SaveOutcome) {
    match outcome {
        SaveOutcome::Written { path, record_count } => {
            println!(
                "✓ Data for {} locations saved to '{}'.",
                record_count,
                path.display()
            );
        }
        SaveOutcome::Skipped => println!("No data to save."),
    }
}

/// Print follow-up research tips after a successful save.
pub fn print_tips() {
    println!("\n💡 Tips for better results:");
    println!("• Visit the locations found; suppliers might not be fully listed online.");
    println!("• Search Romanian B2B platforms (e.g., Romania-Export.ro, Bizoo.ro).");
    println!("• Contact professional shoemaker associations in Romania.");
}
