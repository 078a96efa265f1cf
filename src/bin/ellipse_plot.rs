use std::error::Error;
use std::fs::create_dir_all;
use std::path::Path;

use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};

use corrmat::cli::Args;
use corrmat::config::AppConfig;
use corrmat::core::matrix::CorrelationMatrix;
use corrmat::core::table::Table;
use corrmat::plot::ellipse::{ellipse_plot, ColorScale, EllipseStyle};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = AppConfig::load_or_default(&args.config);

    let out_dir = Path::new(&args.out_dir);
    create_dir_all(out_dir)?;

    // Ten-variable random dataset, reduced to its correlation matrix.
    let labels: Vec<String> = (b'A'..=b'J').map(|c| (c as char).to_string()).collect();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let columns: Vec<Vec<f64>> = (0..labels.len())
        .map(|_| (0..100).map(|_| rng.random_range(0..100) as f64).collect())
        .collect();
    let dataset = Table::from_columns(&labels, &columns)?;
    let derived = CorrelationMatrix::from_observations(&dataset)?;

    let derived_path = out_dir.join("correlation_random.png");
    ellipse_plot(&derived, &config.plot.style(), &derived_path)?;

    // Fixed four-variable matrix, thresholded around the target.
    let abcd = ["A", "B", "C", "D"];
    let values = vec![
        vec![1.0, -0.9, 0.5, 0.8],
        vec![-0.9, 1.0, 0.6, 0.4],
        vec![0.5, 0.6, 1.0, -0.4],
        vec![0.8, 0.4, -0.4, 1.0],
    ];
    let fixed = CorrelationMatrix::from_table(&Table::new(&abcd, &abcd, &values)?)?;

    let mut opts = config.extract.options();
    if let Some(threshold) = args.threshold {
        opts.threshold = threshold;
    }
    if let Some(skip) = args.skip_negatives {
        opts.skip_negatives = skip;
    }
    let sub = fixed.submatrix(&args.target, &opts)?;
    println!("Sub-matrix around {}:", args.target);
    println!("{sub}");

    let sub_style = EllipseStyle {
        cmap: ColorScale::RdGy,
        clim: None,
        ..config.plot.style()
    };
    let sub_path = out_dir.join("correlation_submatrix.png");
    ellipse_plot(&sub, &sub_style, &sub_path)?;

    println!("Saved plots to {}", out_dir.display());
    Ok(())
}
