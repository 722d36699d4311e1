use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;

use super::error::Error;
use super::types::{EdgeSource, RawEdge};

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_node: String,

    #[serde(rename = "to")]
    pub to_node: String,

    #[serde(rename = "weight", alias = "probability", alias = "rate")]
    pub weight_value: f64,
}

/// Reads edges from a headed CSV file with `from`, `to` and `weight` columns.
/// Extra columns are ignored and row order is kept.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: PathBuf) -> Self {
        CsvLoader { path }
    }

    fn parse_csv_to_edges(&self) -> Result<Vec<RawEdge>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to open edge file");
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut edges = Vec::new();

        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            edges.push((record.from_node, record.to_node, record.weight_value));
        }
        Ok(edges)
    }
}

#[async_trait::async_trait]
impl EdgeSource for CsvLoader {
    async fn load_edges(self) -> Result<Vec<RawEdge>, Error> {
        let path = self.path.clone();
        let edges = tokio::task::spawn_blocking(move || self.parse_csv_to_edges()).await??;

        tracing::info!(path = %path.display(), edges = edges.len(), "CsvLoader: edges loaded");
        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MOCK_CSV_CONTENT: &str = "\
id,from,to,weight,note
1,KTM,JA,0.9,ring road
2,JA,PH,0.95,bridge
3,KTM,PH,0.5,old town
4,BKT,PH,1.0,highway
";

    fn write_temp(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(content.as_bytes())
            .expect("Failed to write mock content");
        temp_file
    }

    #[test]
    fn test_parse_csv_to_edges_success() {
        let temp_file = write_temp(MOCK_CSV_CONTENT);

        let loader = CsvLoader::new(temp_file.path().to_path_buf());
        let result = loader.parse_csv_to_edges();

        assert!(
            result.is_ok(),
            "Parsing failed with error: {:?}",
            result.err()
        );

        let edges = result.unwrap();

        let expected_edges: Vec<RawEdge> = vec![
            ("KTM".to_string(), "JA".to_string(), 0.9),
            ("JA".to_string(), "PH".to_string(), 0.95),
            ("KTM".to_string(), "PH".to_string(), 0.5),
            ("BKT".to_string(), "PH".to_string(), 1.0),
        ];

        assert_eq!(edges, expected_edges, "Parsed edges do not match expected data.");
    }

    #[test]
    fn test_parse_csv_accepts_probability_header() {
        let temp_file = write_temp("from,to,probability\n A , B ,0.25\n");

        let edges = CsvLoader::new(temp_file.path().to_path_buf())
            .parse_csv_to_edges()
            .unwrap();

        assert_eq!(edges, vec![("A".to_string(), "B".to_string(), 0.25)]);
    }

    #[test]
    fn test_parse_csv_rejects_non_numeric_weight() {
        let temp_file = write_temp("from,to,weight\nA,B,high\n");

        let result = CsvLoader::new(temp_file.path().to_path_buf()).parse_csv_to_edges();

        assert!(matches!(result, Err(Error::CsvError(_))));
    }

    #[test]
    fn test_parse_csv_to_edges_file_not_found() {
        let loader = CsvLoader::new(PathBuf::from("non_existent_file.csv"));
        let result = loader.parse_csv_to_edges();

        if let Err(Error::IoError(e)) = result {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        } else {
            panic!("Expected IoError, got: {:?}", result);
        }
    }

    #[tokio::test]
    async fn test_load_edges_runs_off_the_async_thread() {
        let temp_file = write_temp(MOCK_CSV_CONTENT);

        let edges = CsvLoader::new(temp_file.path().to_path_buf())
            .load_edges()
            .await
            .unwrap();

        assert_eq!(edges.len(), 4);
    }
}
