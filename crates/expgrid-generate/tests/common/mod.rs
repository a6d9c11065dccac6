#![allow(dead_code)]

use expgrid_core::{Experiment, FieldKind, IntWidth, Result, Shape, Value, unknown_field};

/// Request benchmark with a mix of domain and result fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordBenchmark {
    pub name: String,
    pub nreq: i64,
    pub nsender: i32,
    pub get_ratio: f32,
    pub req_type: String,
    pub record: bool,
    pub result: Option<f64>,
    pub private_data: i32,
}

impl Experiment for RecordBenchmark {
    fn shape() -> Shape {
        Shape::builder("RecordBenchmark")
            .opaque("name", FieldKind::String)
            .domain("Nreq", FieldKind::Int(IntWidth::I64), "\t30\t00")
            .domain("Nsender", FieldKind::Int(IntWidth::I32), "1, 5")
            .domain("GetRatio", FieldKind::Float32, " 0, 4.3")
            .domain("ReqType", FieldKind::String, " GET me,\t POST, PUT")
            .flag("Record")
            .opaque("result", FieldKind::Float64)
            .opaque("privateData", FieldKind::Int(IntWidth::I32))
            .build()
    }

    fn get(&self, field: &str) -> Option<Value> {
        let value = match field {
            "name" => self.name.clone().into(),
            "Nreq" => self.nreq.into(),
            "Nsender" => self.nsender.into(),
            "GetRatio" => self.get_ratio.into(),
            "ReqType" => self.req_type.clone().into(),
            "Record" => self.record.into(),
            "result" => self.result.into(),
            "privateData" => self.private_data.into(),
            _ => return None,
        };
        Some(value)
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "Nreq" => self.nreq = value.try_into()?,
            "Nsender" => self.nsender = value.try_into()?,
            "GetRatio" => self.get_ratio = value.try_into()?,
            "ReqType" => self.req_type = value.try_into()?,
            "Record" => self.record = value.try_into()?,
            other => return Err(unknown_field(other)),
        }
        Ok(())
    }
}

/// Benchmark whose result is a list of samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordArrayBenchmark {
    pub nreq: u16,
    pub result: Vec<String>,
}

impl Experiment for RecordArrayBenchmark {
    fn shape() -> Shape {
        Shape::builder("RecordArrayBenchmark")
            .domain("Nreq", FieldKind::Uint(expgrid_core::UintWidth::U16), "1,2,3")
            .opaque("result", FieldKind::List)
            .build()
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "Nreq" => Some(self.nreq.into()),
            "result" => Some(self.result.clone().into()),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "Nreq" => self.nreq = value.try_into()?,
            other => return Err(unknown_field(other)),
        }
        Ok(())
    }
}

/// Record with only result fields and nothing to expand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsOnly {
    pub elapsed: Option<f64>,
}

impl Experiment for ResultsOnly {
    fn shape() -> Shape {
        Shape::builder("ResultsOnly")
            .opaque("elapsed", FieldKind::Float64)
            .build()
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "elapsed" => Some(self.elapsed.into()),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, _value: Value) -> Result<()> {
        Err(unknown_field(field))
    }
}

pub fn temp_out_dir(label: &str) -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("expgrid_{label}_{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}
