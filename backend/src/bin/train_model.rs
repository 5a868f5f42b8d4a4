//! Offline AQI model trainer
//!
//! Fits an ordinary-least-squares regression of AQI on (temperature,
//! humidity, pm25, pm10) and writes the artifact the server loads at
//! startup. Rows missing the target or any feature are dropped; the last
//! fifth of the data (every 5th row) is held out for evaluation.
//!
//! Usage: train-model [readings.csv] [model.json]

use anyhow::{bail, Context, Result};
use nalgebra::{DMatrix, DVector};

use shared::{AqiModel, Reading};

/// One complete training example: the 4 features plus the AQI target
struct Example {
    features: [f64; 4],
    target: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "train_model=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let readings_path = args
        .next()
        .unwrap_or_else(|| "data/environment_data.csv".to_string());
    let model_path = args.next().unwrap_or_else(|| "data/model.json".to_string());

    tracing::info!("Loading dataset from {}", readings_path);
    let examples = load_examples(&readings_path)?;
    tracing::info!("Usable training rows: {}", examples.len());

    let (train, test) = split_examples(&examples);
    if train.len() < 5 {
        bail!("Not enough complete rows to fit a model (need at least 5)");
    }

    let model = fit_ols(train)?;
    tracing::info!(
        intercept = model.intercept,
        coefficients = ?model.coefficients,
        "Model fitted"
    );

    if !test.is_empty() {
        let (mae, r2) = evaluate(&model, test);
        tracing::info!("Holdout MAE: {:.4}", mae);
        tracing::info!("Holdout R2: {:.4}", r2);
    }

    let json = serde_json::to_string_pretty(&model)?;
    std::fs::write(&model_path, json)
        .with_context(|| format!("Cannot write model artifact {}", model_path))?;
    tracing::info!("Model saved to {}", model_path);

    Ok(())
}

/// Read the CSV and keep only rows where the target and all 4 features are
/// present.
fn load_examples(path: &str) -> Result<Vec<Example>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("Cannot open {}", path))?;

    let mut examples = Vec::new();
    for record in reader.deserialize::<Reading>() {
        let reading = record.context("Malformed row in dataset")?;
        if let (Some(t), Some(h), Some(pm25), Some(pm10), Some(aqi)) = (
            reading.temperature,
            reading.humidity,
            reading.pm25,
            reading.pm10,
            reading.aqi,
        ) {
            examples.push(Example {
                features: [t, h, pm25, pm10],
                target: aqi,
            });
        }
    }
    Ok(examples)
}

/// Deterministic 80/20 split: every 5th row goes to the holdout set.
fn split_examples(examples: &[Example]) -> (Vec<&Example>, Vec<&Example>) {
    let mut train = Vec::new();
    let mut test = Vec::new();
    for (i, example) in examples.iter().enumerate() {
        if i % 5 == 4 {
            test.push(example);
        } else {
            train.push(example);
        }
    }
    (train, test)
}

/// Solve the normal equations for the intercept + 4 coefficients.
fn fit_ols(train: Vec<&Example>) -> Result<AqiModel> {
    let n = train.len();
    let mut x = DMatrix::<f64>::zeros(n, 5);
    let mut y = DVector::<f64>::zeros(n);

    for (row, example) in train.iter().enumerate() {
        x[(row, 0)] = 1.0;
        for (col, value) in example.features.iter().enumerate() {
            x[(row, col + 1)] = *value;
        }
        y[row] = example.target;
    }

    let xt = x.transpose();
    let xtx = &xt * &x;
    let xty = &xt * &y;
    let beta = xtx
        .lu()
        .solve(&xty)
        .context("Normal equations are singular; features may be collinear")?;

    Ok(AqiModel::new(
        beta[0],
        [beta[1], beta[2], beta[3], beta[4]],
    ))
}

/// Mean absolute error and R2 on the holdout set.
fn evaluate(model: &AqiModel, test: Vec<&Example>) -> (f64, f64) {
    let n = test.len() as f64;
    let mean_target = test.iter().map(|e| e.target).sum::<f64>() / n;

    let mut abs_error_sum = 0.0;
    let mut residual_sq_sum = 0.0;
    let mut total_sq_sum = 0.0;
    for example in &test {
        let predicted = model.predict(&example.features);
        abs_error_sum += (predicted - example.target).abs();
        residual_sq_sum += (predicted - example.target).powi(2);
        total_sq_sum += (example.target - mean_target).powi(2);
    }

    let mae = abs_error_sum / n;
    let r2 = if total_sq_sum > 0.0 {
        1.0 - residual_sq_sum / total_sq_sum
    } else {
        0.0
    };
    (mae, r2)
}
