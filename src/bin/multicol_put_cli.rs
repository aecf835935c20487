use anyhow::Context;
use bytes::Bytes;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::info;

use multicol_put::engine::errors::{CodecError, EvaluateError, TableError};
use multicol_put::engine::put::{BufferPolicy, ColumnBatch, SketchSetCodec};
use multicol_put::engine::table::memory_table::CellKey;
use multicol_put::engine::table::{BufferedTableFactory, MemoryTable, MemoryTableFactory};
use multicol_put::engine::udf::{
    ArgShape, MulticolumnPut, MulticolumnPutSketchset, PrimitiveKind, PutRow, SketchSetColumn,
    SketchsetRow,
};
use multicol_put::logging;
use multicol_put::shared::config::CONFIG;

#[derive(Parser)]
#[command(name = "multicol-put")]
#[command(about = "Apply multi-column puts from JSON rows to an in-memory table", long_about = None)]
struct Args {
    /// Function configuration as a JSON object, e.g.
    /// '{"table_name":"metrics","hbase.zookeeper.quorum":"zk1","family":"m"}'
    #[arg(short, long)]
    config: String,

    /// Use hbase_put_sketchset; rows carry a `sketch_set` array
    #[arg(long)]
    sketchset: bool,

    /// Bind the optional double batch
    #[arg(long)]
    doubles: bool,

    /// JSON-lines input; reads stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct InputRow {
    key: String,
    #[serde(default)]
    long_qualifiers: Vec<String>,
    #[serde(default)]
    long_values: Vec<Option<i64>>,
    double_qualifiers: Option<Vec<String>>,
    double_values: Option<Vec<Option<f64>>>,
    #[serde(default)]
    sketch_set: Vec<String>,
}

impl InputRow {
    /// The double batch is present when either of its arrays is given.
    fn into_rows(self) -> (PutRow, Vec<String>) {
        let mut put = PutRow::new(
            self.key,
            ColumnBatch::new(self.long_qualifiers, self.long_values),
        );
        if self.double_qualifiers.is_some() || self.double_values.is_some() {
            put = put.with_doubles(ColumnBatch::new(
                self.double_qualifiers.unwrap_or_default(),
                self.double_values.unwrap_or_default(),
            ));
        }
        (put, self.sketch_set)
    }
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
enum RenderedValue {
    Text(String),
    Ids(Vec<String>),
}

#[derive(Debug, PartialEq, Serialize)]
struct Cell {
    row: String,
    family: String,
    qualifier: String,
    value: RenderedValue,
}

/// Decodes the sketch column back into identifiers; every other cell is text.
fn render_cell(
    (row, family, qualifier): CellKey,
    value: Bytes,
    sketch_column: Option<&SketchSetColumn>,
) -> Result<Cell, CodecError> {
    let family = String::from_utf8_lossy(&family).into_owned();
    let qualifier = String::from_utf8_lossy(&qualifier).into_owned();
    let is_sketch =
        sketch_column.is_some_and(|c| c.family == family && c.qualifier == qualifier);
    let value = if is_sketch {
        RenderedValue::Ids(SketchSetCodec::decode(&value)?)
    } else {
        RenderedValue::Text(String::from_utf8_lossy(&value).into_owned())
    };

    Ok(Cell {
        row: String::from_utf8_lossy(&row).into_owned(),
        family,
        qualifier,
        value,
    })
}

type Factory = BufferedTableFactory<MemoryTableFactory>;

enum Evaluator {
    Put(MulticolumnPut<Factory>),
    Sketchset(MulticolumnPutSketchset<Factory>),
}

impl Evaluator {
    fn evaluate(&mut self, row: InputRow) -> Result<String, EvaluateError> {
        let (put, sketch_set) = row.into_rows();
        match self {
            Evaluator::Put(udf) => udf.evaluate(&put),
            Evaluator::Sketchset(udf) => udf.evaluate(&SketchsetRow::new(put, sketch_set)),
        }
    }

    fn close(&mut self) -> Result<(), TableError> {
        match self {
            Evaluator::Put(udf) => udf.close(),
            Evaluator::Sketchset(udf) => udf.close(),
        }
    }

    fn sketch_column(&self) -> Option<&SketchSetColumn> {
        match self {
            Evaluator::Put(_) => None,
            Evaluator::Sketchset(udf) => Some(udf.column()),
        }
    }
}

fn arg_shapes(config: BTreeMap<String, String>, sketchset: bool, doubles: bool) -> Vec<ArgShape> {
    let mut shapes = vec![
        ArgShape::Map {
            constant: Some(config),
        },
        ArgShape::string(),
        ArgShape::list_of(PrimitiveKind::String),
        ArgShape::list_of(PrimitiveKind::Long),
    ];
    if sketchset {
        shapes.push(ArgShape::list_of(PrimitiveKind::String));
    }
    if doubles {
        shapes.push(ArgShape::list_of(PrimitiveKind::String));
        shapes.push(ArgShape::list_of(PrimitiveKind::Double));
    }
    shapes
}

fn main() -> anyhow::Result<()> {
    logging::init()?;
    let args = Args::parse();

    let config: BTreeMap<String, String> = serde_json::from_str(&args.config)
        .context("--config must be a JSON object of string values")?;
    let table = MemoryTable::new(config.get("table_name").map(String::as_str).unwrap_or_default());
    let factory = BufferedTableFactory::new(
        MemoryTableFactory::new(table.clone()),
        BufferPolicy::from_settings(&CONFIG.client),
    );

    let shapes = arg_shapes(config, args.sketchset, args.doubles);
    let mut evaluator = if args.sketchset {
        Evaluator::Sketchset(MulticolumnPutSketchset::initialize(&shapes, factory)?)
    } else {
        Evaluator::Put(MulticolumnPut::initialize(&shapes, factory)?)
    };

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row: InputRow = serde_json::from_str(&line)
            .with_context(|| format!("line {}: invalid row", line_no + 1))?;
        let result = evaluator
            .evaluate(row)
            .with_context(|| format!("line {}", line_no + 1))?;
        info!(target: "multicol_put::cli", "{}", result);
    }
    evaluator.close()?;

    let sketch_column = evaluator.sketch_column();
    for (key, value) in table.cells() {
        let cell = render_cell(key, value, sketch_column)?;
        println!("{}", serde_json::to_string(&cell)?);
    }

    Ok(())
}
