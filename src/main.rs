/*
 * File: /main.rs
 * Created Date: Tuesday November 21st 2023
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 15th October 2026 4:20:31 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-15		Zihan	Run spectral biclustering on a .npy matrix
 */

use std::env;
use std::error::Error;
use std::time::Instant;

use log::{info, LevelFilter};
use spectral_bicluster::config::Config;

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()?;

    let config = Config::new(env::args())?;
    let mut model = config.estimator()?;
    let method = config.get_method();

    let start_time = Instant::now();
    let matrix = config.load_matrix()?;
    info!(
        "[method: {}] Dataset {} ({}x{}) loaded in {:?}",
        method,
        config.get_matrix_path().display(),
        matrix.nrows(),
        matrix.ncols(),
        start_time.elapsed()
    );

    let start_time = Instant::now();
    let result = model.fit(&matrix)?;
    info!(
        "[method: {}] {} biclusters found in {:?}",
        method,
        result.biclusters.len(),
        start_time.elapsed()
    );

    for (i, (rows, cols)) in result.biclusters.iter().enumerate() {
        info!(
            "[method: {}] bicluster {}: {} rows x {} columns",
            method,
            i,
            rows.count(),
            cols.count()
        );
    }
    if let (Some(row_labels), Some(column_labels)) = (&result.row_labels, &result.column_labels) {
        info!("[method: {}] row labels: {}", method, row_labels);
        info!("[method: {}] column labels: {}", method, column_labels);
    }
    Ok(())
}
