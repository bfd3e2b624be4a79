use sqlsteps_types::{Param, ParamKind};

use super::StepRegistry;
use super::convert::{parse_boolean, parse_double, parse_integer, parse_long};
use crate::driver::Connection;
use crate::engine::ExecutionEngine;
use crate::error::{Result, StepError};

/// The named SQL directives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedSqlStep {
    ExecuteNamedQuery,
    ExecuteNamedUpdate,
    FetchNamedQuery,
    AddParameter(ParamKind),
    AddNullParameter(ParamKind),
    ExecuteQuery,
    ExecuteUpdate,
}

/// What a step did, for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A query ran; the rows are in the result holder
    Queried(usize),
    /// An update ran and affected this many rows
    Updated(usize),
    /// A statement was staged
    Staged,
    /// A parameter was bound at this 1-based position
    Bound { position: usize },
}

fn arg<'a>(step: NamedSqlStep, args: &[&'a str]) -> Result<&'a str> {
    args.first()
        .copied()
        .ok_or(StepError::MissingArgument(step))
}

fn convert(kind: ParamKind, raw: &str) -> Result<Param> {
    Ok(match kind {
        ParamKind::String => Param::from(raw),
        ParamKind::Integer => Param::from(parse_integer(raw)?),
        ParamKind::Boolean => Param::from(parse_boolean(raw)?),
        ParamKind::Double => Param::from(parse_double(raw)?),
        ParamKind::Long => Param::from(parse_long(raw)?),
    })
}

impl NamedSqlStep {
    /// Run this directive against `engine` with the captured `args`
    pub fn run<'conn, C: Connection + 'conn>(
        self,
        engine: &mut ExecutionEngine<'conn, C>,
        args: &[&str],
    ) -> Result<StepOutcome> {
        match self {
            NamedSqlStep::ExecuteNamedQuery => {
                engine.execute_named_query(arg(self, args)?).map(StepOutcome::Queried)
            }
            NamedSqlStep::ExecuteNamedUpdate => {
                engine.execute_named_update(arg(self, args)?).map(StepOutcome::Updated)
            }
            NamedSqlStep::FetchNamedQuery => {
                engine.fetch_named_query(arg(self, args)?)?;
                Ok(StepOutcome::Staged)
            }
            NamedSqlStep::AddParameter(kind) => {
                let param = convert(kind, arg(self, args)?)?;
                crate::sqlsteps_debug!("Adding {} parameter {}", kind, param);
                let position = engine.add_parameter(param)?;
                Ok(StepOutcome::Bound { position })
            }
            NamedSqlStep::AddNullParameter(kind) => {
                crate::sqlsteps_debug!("Adding null {} parameter", kind);
                let position = engine.add_parameter(Param::null(kind))?;
                Ok(StepOutcome::Bound { position })
            }
            NamedSqlStep::ExecuteQuery => engine.execute_query().map(StepOutcome::Queried),
            NamedSqlStep::ExecuteUpdate => engine.execute_update().map(StepOutcome::Updated),
        }
    }
}

/// The standard registry of named SQL directives
pub fn named_sql_steps() -> Result<StepRegistry<NamedSqlStep>> {
    use NamedSqlStep::*;

    StepRegistry::new()
        .with(r#"ExecuteNamedQuery "([^"]*)""#, ExecuteNamedQuery)?
        .with(r#"ExecuteNamedUpdate "([^"]*)""#, ExecuteNamedUpdate)?
        .with(r#"FetchNamedQuery "([^"]*)""#, FetchNamedQuery)?
        .with(r#"AddStringParameter value="([^"]*)""#, AddParameter(ParamKind::String))?
        .with("AddStringParameter value=null", AddNullParameter(ParamKind::String))?
        .with("AddIntegerParameter value=([0-9]*)", AddParameter(ParamKind::Integer))?
        .with("AddIntegerParameter value=null", AddNullParameter(ParamKind::Integer))?
        .with("AddBooleanParameter value=(true|false)", AddParameter(ParamKind::Boolean))?
        .with("AddBooleanParameter value=null", AddNullParameter(ParamKind::Boolean))?
        .with("AddDoubleParameter value=([0-9,.]*)", AddParameter(ParamKind::Double))?
        .with("AddDoubleParameter value=null", AddNullParameter(ParamKind::Double))?
        .with("AddLongParameter value=([0-9,.]*)", AddParameter(ParamKind::Long))?
        .with("AddLongParameter value=null", AddNullParameter(ParamKind::Long))?
        .with("ExecuteQuery", ExecuteQuery)?
        .with("ExecuteUpdate", ExecuteUpdate)
}

/// Match `line` against `registry` and run it
pub fn run_step<'conn, C: Connection + 'conn>(
    registry: &StepRegistry<NamedSqlStep>,
    engine: &mut ExecutionEngine<'conn, C>,
    line: &str,
) -> Result<StepOutcome> {
    let step = registry.find(line.trim())?;
    step.handler.run(engine, &step.args)
}
