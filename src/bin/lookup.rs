use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use clap::Parser;
use itertools::Itertools;
use parquet::arrow::arrow_writer::ArrowWriter;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use yubin_client::{postal_code, Address, Client, ClientConfig};

const COLUMNS: [&str; 9] = [
    "postal_code",
    "prefecture_id",
    "prefecture",
    "city",
    "suburb",
    "street_address",
    "office",
    "address",
    "full_address",
];

#[derive(Parser)]
struct Args {
    /// Postal codes, `NNNNNNN` or `NNN-NNNN`
    #[arg(required = true)]
    codes: Vec<String>,
    /// Write the resolved addresses to this Parquet file
    #[arg(long)]
    output_path: Option<String>,
    #[arg(long)]
    base_url: Option<String>,
}

/// One row in `COLUMNS` order.
fn address_row(code: &str, address: Address) -> Vec<String> {
    vec![
        postal_code::normalize(code),
        address.prefecture_id.to_string(),
        address.prefecture,
        address.city,
        address.suburb,
        address.street_address,
        address.office,
        address.address,
        address.full_address,
    ]
}

/// Transpose rows to columns.
fn to_columns(rows: &[Vec<String>]) -> Vec<ArrayRef> {
    (0..COLUMNS.len())
        .map(|i| rows.iter().map(|row| row[i].clone()).collect_vec())
        .map(|column| Arc::new(StringArray::from(column)) as ArrayRef)
        .collect_vec()
}

fn to_record_batch(rows: &[Vec<String>]) -> Result<RecordBatch, ArrowError> {
    let fields = COLUMNS
        .iter()
        .map(|name| Field::new(*name, DataType::Utf8, false))
        .collect_vec();
    RecordBatch::try_new(Arc::new(Schema::new(fields)), to_columns(rows))
}

/// Resolves every code, printing each result. Returns the rows and the number of failures.
async fn resolve_all(client: &Client, codes: &[String]) -> (Vec<Vec<String>>, usize) {
    let mut rows = Vec::new();
    let mut failures = 0;
    for code in codes {
        match client.yubin(code).await {
            Ok(address) => {
                println!("{}\t{}", code, address.full_address);
                rows.push(address_row(code, address));
            }
            Err(e) => {
                eprintln!("{}\t{}", code, e);
                failures += 1;
            }
        }
    }
    (rows, failures)
}

#[tokio::main]
pub async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = match &args.base_url {
        None => ClientConfig::default(),
        Some(url) => ClientConfig::default().with_base_url(url.as_str()),
    };
    let client = Client::new(config);

    let (rows, failures) = resolve_all(&client, &args.codes).await;
    let status = if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    let output_path = match &args.output_path {
        Some(p) => p,
        None => return status,
    };
    if rows.is_empty() {
        eprintln!("No address resolved, nothing written to {}", output_path);
        return status;
    }

    let batch = to_record_batch(&rows).expect("Failed to generate RecordBatch");
    let file =
        File::create(output_path).expect(&format!("Failed to create file at {}", output_path));
    let props = WriterProperties::builder().build();
    let mut writer =
        ArrowWriter::try_new(file, batch.schema(), Some(props)).expect("Failed to create writer!");
    writer.write(&batch).expect("Failed to write RecordBatch");
    writer.close().expect("Failed to close writer");
    println!("Saved {} addresses to {}", rows.len(), output_path);
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use yubin_client::schema::RawAddress;

    fn chiyoda() -> Address {
        Address::from(RawAddress {
            prefecture: Some("東京都".to_string()),
            city: Some("千代田区".to_string()),
            suburb: Some("千代田".to_string()),
            ..Default::default()
        })
    }

    fn value(column: &ArrayRef, row: usize) -> &str {
        column
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap()
            .value(row)
    }

    #[test]
    fn row_follows_column_order() {
        let row = address_row("100-0001", chiyoda());
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[0], "1000001");
        assert_eq!(row[1], "13");
        assert_eq!(row[2], "東京都");
        assert_eq!(row[7], "千代田区 千代田");
        assert_eq!(row[8], "東京都 千代田区 千代田");
    }

    #[test]
    fn columns_are_transposed_rows() {
        let rows = vec![
            address_row("100-0001", chiyoda()),
            vec![
                "0600000".to_string(),
                "1".to_string(),
                "北海道".to_string(),
                "札幌市中央区".to_string(),
                String::new(),
                String::new(),
                String::new(),
                "札幌市中央区".to_string(),
                "北海道 札幌市中央区".to_string(),
            ],
        ];
        let columns = to_columns(&rows);
        assert_eq!(columns.len(), COLUMNS.len());
        assert!(columns.iter().all(|c| c.len() == 2));
        assert_eq!(value(&columns[0], 0), "1000001");
        assert_eq!(value(&columns[0], 1), "0600000");
        assert_eq!(value(&columns[2], 1), "北海道");
        assert_eq!(value(&columns[8], 0), "東京都 千代田区 千代田");
    }

    #[test]
    fn batch_schema_matches_columns() {
        let batch = to_record_batch(&[address_row("1000001", chiyoda())]).unwrap();
        assert_eq!(batch.num_rows(), 1);
        let names = batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect_vec();
        assert_eq!(names, COLUMNS);
        assert_eq!(value(batch.column(3), 0), "千代田区");
    }

    #[tokio::test]
    async fn failed_codes_are_counted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1000001.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "prefecture": "東京都",
                "city": "千代田区",
                "suburb": "千代田"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/9999999.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        let client = Client::new(ClientConfig::default().with_base_url(server.uri()));

        let codes = ["100-0001", "999-9999", "12-34567"].map(String::from);
        let (rows, failures) = resolve_all(&client, &codes).await;
        assert_eq!(failures, 2);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "1000001");

        let (rows, failures) = resolve_all(&client, &codes[..1]).await;
        assert_eq!(failures, 0);
        assert_eq!(rows.len(), 1);
    }
}
