use clap::Parser;
use std::path::Path;
use tracing::error;

use gz_simplifier::constants;
use gz_simplifier::logging;
use gz_simplifier::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "gz-simplifier")]
#[command(about = "Derives simplified morphology labels from the Galaxy Zoo 2 catalog")]
#[command(version = "0.1.0")]
struct Cli {}

fn main() {
    // Initialize logging
    logging::init_logging();

    let _cli = Cli::parse();

    println!("🔄 Simplifying Galaxy Zoo 2 morphology labels...");

    let result = match Pipeline::run(
        Path::new(constants::INPUT_CSV_PATH),
        Path::new(constants::OUTPUT_CSV_PATH),
    ) {
        Ok(result) => result,
        Err(e) => {
            error!("Pipeline failed: {}", e);
            println!("❌ Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("\n--- Simplified Class Distribution ---");
    for (class, count) in &result.distribution {
        println!("{:<12} {}", class, count);
    }
    println!("------------------------------------");

    println!(
        "\n✅ Processing complete. {} simplified labels saved to {}.",
        result.rows_written, result.output_file
    );
}
