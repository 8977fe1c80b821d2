/*
 * File: /src/config.rs
 * Created Date: Friday, January 26th 2024
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 15th October 2026 4:02:47 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-15		Zihan	Command line arguments for spectral biclustering runs
 */
use std::fs::File;
use std::path::{Path, PathBuf};

use ndarray::Array2;
use ndarray_npy::ReadNpyExt;

use crate::error::{BiclusterError, Result};
use crate::estimator::{SpectralBiclustering, SpectralBiclusteringBuilder};
use crate::params::{Method, NClusters};

const USAGE: &str = "usage: spectral_bicluster <matrix.npy> <method> <n_clusters | rows,cols> [n_init] [seed]";

pub struct Config {
    // path to a 2-d f64 .npy file
    matrix_path: PathBuf,
    method:      Method,
    n_clusters:  NClusters,
    n_init:      Option<usize>,
    seed:        Option<u64>,
}

fn required(arg: Option<String>, name: &str) -> Result<String> {
    arg.ok_or_else(|| BiclusterError::InvalidArgument(format!("missing <{}>; {}", name, USAGE)))
}

fn parse_number<T: std::str::FromStr>(value: &str, name: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| BiclusterError::InvalidArgument(format!("{} must be a non-negative integer, got {:?}", name, value)))
}

/// "3" for both axes, "3,4" for (rows, columns)
fn parse_n_clusters(value: &str) -> Result<NClusters> {
    if !value.contains(',') {
        return Ok(NClusters::Single(parse_number(value, "n_clusters")?));
    }
    let counts = value
        .split(',')
        .map(|part| parse_number::<usize>(part, "n_clusters"))
        .collect::<Result<Vec<_>>>()?;
    NClusters::try_from(counts.as_slice())
}

impl Config {
    /// constructor
    ///
    /// # Examples
    /// ```bash
    /// $ cargo run -- data/matrix.npy bistochastic 3,4 10 0
    /// ```
    pub fn new(mut args: impl Iterator<Item = String>) -> Result<Config> {
        // args:
        // 0: program name
        // 1: matrix path
        // 2: method
        // 3: n_clusters
        // 4: n_init (optional)
        // 5: seed (optional)
        args.next();
        let matrix_path = PathBuf::from(required(args.next(), "matrix.npy")?);
        let method = required(args.next(), "method")?.parse::<Method>()?;
        let n_clusters = parse_n_clusters(&required(args.next(), "n_clusters")?)?;
        let n_init = args.next().map(|v| parse_number(&v, "n_init")).transpose()?;
        let seed = args.next().map(|v| parse_number(&v, "seed")).transpose()?;
        if let Some(extra) = args.next() {
            return Err(BiclusterError::InvalidArgument(format!(
                "unexpected argument {:?}; {}",
                extra, USAGE
            )));
        }

        Ok(Config {
            matrix_path,
            method,
            n_clusters,
            n_init,
            seed,
        })
    }

    pub fn load_matrix(&self) -> Result<Array2<f64>> {
        let reader = File::open(&self.matrix_path)?;
        Ok(Array2::<f64>::read_npy(reader)?)
    }

    /// Validated estimator for the parsed arguments.
    pub fn estimator(&self) -> Result<SpectralBiclustering> {
        let mut builder = SpectralBiclusteringBuilder::new()
            .method(self.method)
            .n_clusters(self.n_clusters);
        if let Some(n_init) = self.n_init {
            builder = builder.n_init(n_init);
        }
        if let Some(seed) = self.seed {
            builder = builder.random_state(seed);
        }
        builder.build()
    }

    pub fn get_matrix_path(&self) -> &Path {
        &self.matrix_path
    }

    pub fn get_method(&self) -> Method {
        self.method
    }

    pub fn get_n_clusters(&self) -> NClusters {
        self.n_clusters
    }

    pub fn get_n_init(&self) -> Option<usize> {
        self.n_init
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }
}
