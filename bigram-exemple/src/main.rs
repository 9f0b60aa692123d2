use bigram_core::io::build_output_path;
use bigram_core::model::bigram_stats::BigramStats;
use bigram_core::model::heatmap_config::HeatmapConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // One name per line, the whole file is counted
    let corpus = "./data/names.txt";
    let stats = BigramStats::new(corpus)?;

    println!(
        "{} names, {} characters (boundary included), {} bigrams",
        stats.word_count(),
        stats.vocabulary().size(),
        stats.table().total()
    );

    // Default rendering: 48px cells, white to blue
    let mut config = HeatmapConfig::default();

    // Test invalid cell size
    match config.set_cell_size(0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Cell size 0 is invalid, must be greater than 0"),
    }
    config.set_font_size(10.0)?;

    // The heatmap is written next to the corpus: ./data/names.svg
    let output = build_output_path(corpus, "svg")?;
    stats.render(&output, &config)?;
    println!("Heatmap written to {}", output.display());

    // Probability of each character to start a name
    // The sum of all probabilities should be 1.0
    let distribution = stats.start_distribution()?;
    for (c, p) in &distribution {
        println!("{}: {:.4}", c, p);
    }
    let total: f32 = distribution.iter().map(|(_, p)| p).sum();
    log::debug!("Start distribution sums to {}", total);

    Ok(())
}
