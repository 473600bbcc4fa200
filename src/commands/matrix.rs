use std::path::PathBuf;

use anyhow::Result;
use depgen::application::MatrixOptions;
use depgen::domain::entities::{Combination, MatrixFilter};
use depgen::domain::value_objects::AxisValue;
use depgen::presentation::factory::create_matrix_use_case;
use serde::Serialize;

use super::session::Session;
use super::Globals;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;
use crate::ui::views::matrix::{render_matrix, render_matrix_header};

#[derive(Serialize)]
struct AxisData<'a> {
    name: &'a str,
    values: &'a [AxisValue],
}

#[derive(Serialize)]
struct CombinationData<'a> {
    index: usize,
    combination: &'a Combination,
}

pub fn cmd_matrix(
    config: PathBuf,
    file_key: Option<String>,
    matrix: Option<MatrixFilter>,
    globals: Globals,
) -> Result<bool> {
    let session = Session::start("matrix", &config, globals)?;
    let outcome = run(&session, config, file_key, matrix);
    session.finish(outcome)
}

fn run(
    session: &Session,
    manifest: PathBuf,
    file_key: Option<String>,
    matrix: Option<MatrixFilter>,
) -> Result<bool> {
    let ui = &session.ui;
    if !ui.json && !ui.quiet(&session.config) {
        print!(
            "{}",
            render_matrix_header(&manifest, file_key.as_deref(), ui.color, ui.unicode)
        );
    }

    let mut options = MatrixOptions::new(manifest);
    options.file_key = file_key;
    options.matrix = matrix;
    options.policy = session.config.policy();

    let report = create_matrix_use_case().execute(&options)?;

    if ui.json {
        for (name, values) in &report.axes {
            emit_event(&DataEvent::named(
                "axis",
                session.command,
                AxisData { name, values },
            ))?;
        }
        for (index, combination) in report.combinations.iter().enumerate() {
            emit_event(&DataEvent::named(
                "combination",
                session.command,
                CombinationData { index, combination },
            ))?;
        }
    } else {
        print!("{}", render_matrix(&report, ui.color));
    }

    Ok(true)
}
