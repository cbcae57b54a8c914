use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::asset::Asset;
use crate::error::DatasetError;

#[derive(Serialize)]
struct PriceRow {
    time: f64,
    price: f64,
}

/// Writes the asset as `time,price` rows.
pub fn write_asset<W: io::Write>(asset: &Asset, writer: W) -> Result<(), DatasetError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (time, price) in asset.time_grid().points().iter().zip(asset.prices().iter()) {
        wtr.serialize(PriceRow {
            time: *time,
            price: *price,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// `<dir>/<name>_data.csv`, spaces in the name replaced by underscores.
pub fn export_path(dir: &Path, file_name: &str) -> PathBuf {
    dir.join(format!("{}_data.csv", file_name.replace(' ', "_")))
}

/// Exports the asset into `dir`, named after its type unless `file_name` is given.
pub fn export_asset(
    asset: &Asset,
    dir: &Path,
    file_name: Option<&str>,
) -> Result<PathBuf, DatasetError> {
    let path = export_path(dir, file_name.unwrap_or(asset.asset_type()));
    fs::create_dir_all(dir)?;
    write_asset(asset, File::create(&path)?)?;
    debug!(path = %path.display(), asset_type = asset.asset_type(), "exported asset");
    Ok(path)
}
