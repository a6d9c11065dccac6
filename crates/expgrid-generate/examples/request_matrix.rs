use std::env;
use std::path::PathBuf;

use expgrid_core::{Experiment, FieldKind, IntWidth, Result, Shape, Value, unknown_field};
use expgrid_generate::logging::init_logging;
use expgrid_generate::{ExportOptions, export_csv_to_dir, template_default};

#[derive(Debug, Clone, Default)]
struct RequestMatrix {
    senders: i32,
    method: String,
    keep_alive: bool,
    latencies_ms: Vec<u64>,
}

impl Experiment for RequestMatrix {
    fn shape() -> Shape {
        Shape::builder("RequestMatrix")
            .domain("senders", FieldKind::Int(IntWidth::I32), "1, 4, 16")
            .domain("method", FieldKind::String, "GET, POST")
            .flag("keep_alive")
            .opaque("latencies_ms", FieldKind::List)
            .build()
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "senders" => Some(self.senders.into()),
            "method" => Some(self.method.clone().into()),
            "keep_alive" => Some(self.keep_alive.into()),
            "latencies_ms" => Some(self.latencies_ms.clone().into()),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "senders" => self.senders = value.try_into()?,
            "method" => self.method = value.try_into()?,
            "keep_alive" => self.keep_alive = value.try_into()?,
            other => return Err(unknown_field(other)),
        }
        Ok(())
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    init_logging("info")?;

    let mut options = match env::args().nth(1) {
        Some(path) => ExportOptions::load(&PathBuf::from(path))?,
        None => ExportOptions::default(),
    };
    if options.out_dir == PathBuf::from(".") {
        options.out_dir = env::temp_dir().join("expgrid");
    }

    let mut runs = template_default::<RequestMatrix>()?;
    for run in &mut runs {
        let base = if run.keep_alive { 2 } else { 5 };
        run.latencies_ms = (0..3).map(|i| base * run.senders as u64 + i).collect();
    }

    let (path, content) = export_csv_to_dir(&runs, &options)?;
    println!("wrote {}\n{content}", path.display());
    Ok(())
}
