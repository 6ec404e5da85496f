//! Example matching the README: nested named types, unions, arrays, enums
//! and a second namespace.
//!
//! Contains only the input Avro schema and the conversion logic; generated
//! TypeScript is written to stdout.

use std::io;

const SCHEMA_JSON: &str = r#"{
  "type": "record",
  "namespace": "shop",
  "name": "Order",
  "doc": "A customer order.",
  "fields": [
    { "name": "id", "type": "long" },
    { "name": "note", "type": ["null", "string"], "doc": "Free text from the customer." },
    {
      "name": "status",
      "type": { "type": "enum", "name": "Status", "symbols": ["OPEN", "SHIPPED"] }
    },
    {
      "name": "lines",
      "type": {
        "type": "array",
        "items": {
          "type": "record",
          "name": "OrderLine",
          "namespace": "shop.lines",
          "fields": [
            { "name": "sku", "type": "string" },
            { "name": "quantity", "type": "int" }
          ]
        }
      }
    }
  ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout: io::Stdout = io::stdout();
    let options = avro_tsc::Options {
        export_schema: false,
        ..avro_tsc::Options::default()
    };
    avro_tsc::generate_to_writer(SCHEMA_JSON, &mut stdout, options)?;
    Ok(())
}
