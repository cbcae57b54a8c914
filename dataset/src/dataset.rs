use std::io;
use std::ops::Range;

use synth_pricing::common::{ContractSpec, PricePath, RiskFreeRate, TimeGrid};
use tracing::debug;

use crate::asset::Asset;
use crate::error::DatasetError;

/// Option prices side by side with the stock they were derived from.
/// Columns: `time`, `option_001` .. `option_NNN`, `stock`; one row per grid point.
#[derive(Clone, Debug)]
pub struct OptionDataset {
    time_grid: TimeGrid,
    options: Vec<Asset>,
    stock: PricePath,
}

impl OptionDataset {
    pub fn build(
        stock: &Asset,
        contracts: &[ContractSpec],
        rate: RiskFreeRate,
    ) -> Result<Self, DatasetError> {
        let options = stock.derive_options(contracts, rate)?;
        Self::from_assets(stock, options)
    }

    /// Assembles already priced options. Every option must sit on the stock's grid.
    pub fn from_assets(stock: &Asset, options: Vec<Asset>) -> Result<Self, DatasetError> {
        if stock.contract().is_some() {
            return Err(DatasetError::NotAnUnderlying(stock.asset_type()));
        }
        let time_grid = stock.time_grid().clone();
        check_column(&time_grid, stock.prices())?;
        for (i, option) in options.iter().enumerate() {
            if option.time_grid() != &time_grid {
                return Err(DatasetError::GridMismatch(format!(
                    "column {}",
                    column_name(i)
                )));
            }
            check_column(&time_grid, option.prices())?;
        }
        debug!(
            rows = time_grid.len(),
            options = options.len(),
            "assembled option dataset"
        );
        Ok(Self {
            time_grid,
            options,
            stock: stock.prices().clone(),
        })
    }

    pub fn rows(&self) -> usize {
        self.time_grid.len()
    }

    pub fn time_grid(&self) -> &TimeGrid {
        &self.time_grid
    }

    pub fn options(&self) -> &[Asset] {
        &self.options
    }

    pub fn stock(&self) -> &PricePath {
        &self.stock
    }

    pub fn column_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.options.len() + 2);
        names.push("time".to_string());
        names.extend((0..self.options.len()).map(column_name));
        names.push("stock".to_string());
        names
    }

    /// Values of one row in column order.
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.rows() {
            return None;
        }
        let mut row = Vec::with_capacity(self.options.len() + 2);
        row.push(self.time_grid.points()[index]);
        for option in &self.options {
            row.push(option.prices().get(index)?);
        }
        row.push(self.stock.get(index)?);
        Some(row)
    }

    /// Leading rows for training, the rest for testing.
    /// The training range holds `floor(rows * train_fraction)` rows.
    pub fn split(
        &self,
        train_fraction: f64,
    ) -> Result<(Range<usize>, Range<usize>), DatasetError> {
        if !(train_fraction > 0.0 && train_fraction < 1.0) {
            return Err(DatasetError::InvalidSplit(train_fraction));
        }
        let train_rows = (self.rows() as f64 * train_fraction).floor() as usize;
        Ok((0..train_rows, train_rows..self.rows()))
    }

    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), DatasetError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(self.column_names())?;
        for index in 0..self.rows() {
            let row = self.row(index).ok_or(DatasetError::IncompleteRow(index))?;
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn check_column(time_grid: &TimeGrid, prices: &PricePath) -> Result<(), DatasetError> {
    if prices.len() != time_grid.len() {
        return Err(DatasetError::LengthMismatch {
            expected: time_grid.len(),
            found: prices.len(),
        });
    }
    Ok(())
}

fn column_name(index: usize) -> String {
    format!("option_{:03}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_pricing::common::OptionClass;

    fn stock(n_points: usize) -> Asset {
        let time_grid = TimeGrid::uniform(1.0, n_points - 1).unwrap();
        let prices: Vec<f64> = (0..n_points).map(|i| 10.0 + i as f64 * 0.1).collect();
        Asset::stock(time_grid, PricePath::from(prices)).unwrap()
    }

    fn contracts() -> Vec<ContractSpec> {
        vec![
            ContractSpec::new(10.0, 0.5, 0.2, OptionClass::Call).unwrap(),
            ContractSpec::new(10.0, 0.5, 0.2, OptionClass::Put).unwrap(),
        ]
    }

    #[test]
    fn columns_and_rows() {
        let stock = stock(5);
        let dataset = OptionDataset::build(&stock, &contracts(), RiskFreeRate::default()).unwrap();
        assert_eq!(dataset.rows(), 5);
        assert_eq!(
            dataset.column_names(),
            vec!["time", "option_001", "option_002", "stock"]
        );

        let row = dataset.row(0).unwrap();
        assert_eq!(row.len(), 4);
        assert_eq!(row[0], 0.0);
        assert_eq!(row[3], 10.0);
        assert!(dataset.row(5).is_none());
    }

    #[test]
    fn split_rows() {
        let stock = stock(1001);
        let dataset = OptionDataset::build(&stock, &contracts(), RiskFreeRate::default()).unwrap();
        let (train, test) = dataset.split(0.8).unwrap();
        assert_eq!(train, 0..800);
        assert_eq!(test, 800..1001);

        for bad in [0.0, 1.0, -0.5, f64::NAN] {
            assert!(matches!(dataset.split(bad), Err(DatasetError::InvalidSplit(_))));
        }
    }

    #[test]
    fn rejects_foreign_grid() {
        let stock = stock(5);
        let other = Asset::option(
            TimeGrid::uniform(2.0, 4).unwrap(),
            PricePath::from(vec![1.0; 5]),
            contracts()[0],
        )
        .unwrap();
        assert!(matches!(
            OptionDataset::from_assets(&stock, vec![other]),
            Err(DatasetError::GridMismatch(_))
        ));
    }

    #[test]
    fn csv_layout() {
        let stock = stock(3);
        let dataset = OptionDataset::build(&stock, &contracts(), RiskFreeRate::default()).unwrap();
        let mut buffer = Vec::new();
        dataset.write_csv(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "time,option_001,option_002,stock");
        assert!(lines[1].starts_with("0.0,"));
        assert!(lines[1].ends_with(",10.0"));
        assert!(lines[3].starts_with("1.0,"));
    }

    #[test]
    fn rejects_short_option_column() {
        let stock = stock(4);
        let short = Asset::CallOption {
            time_grid: stock.time_grid().clone(),
            prices: PricePath::from(vec![1.0, 1.0]),
            contract: contracts()[0],
        };
        assert!(matches!(
            OptionDataset::from_assets(&stock, vec![short]),
            Err(DatasetError::LengthMismatch {
                expected: 4,
                found: 2
            })
        ));
    }

    #[test]
    fn incomplete_row_is_an_error() {
        let stock = stock(4);
        let dataset = OptionDataset {
            time_grid: stock.time_grid().clone(),
            options: vec![],
            stock: PricePath::from(vec![10.0, 10.1]),
        };
        let mut buffer = Vec::new();
        assert!(matches!(
            dataset.write_csv(&mut buffer),
            Err(DatasetError::IncompleteRow(2))
        ));
    }
}
