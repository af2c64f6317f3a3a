/// Пакетная предобработка датасета wine quality

use wine_prep::types::PrepConfig;

fn main() -> anyhow::Result<()> {
    // Инициализация логирования
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = PrepConfig::default();
    let summary = wine_prep::pipeline::run(&config)?;

    println!("Preprocessing complete.");
    println!("  - Train set: {} samples", summary.n_train);
    println!("  - Test set : {} samples", summary.n_test);
    println!("  - Features : {} columns", summary.n_features);
    println!("  - Saved to : {}", config.out_dir.display());
    Ok(())
}
