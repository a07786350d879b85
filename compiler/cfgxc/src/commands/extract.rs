//! The `extract` command: evaluate one declaration and emit it as JSON.

use std::path::PathBuf;

use crate::{
    extract_value, load_database_config, load_models, write_snapshot, Error, ExtractOptions,
};

/// Shape check applied before output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputShape {
    /// Any value.
    #[default]
    Any,
    /// `--models`: a list of records.
    Models,
    /// `--config`: a single record.
    Config,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractArgs {
    pub file: PathBuf,
    pub symbol: String,
    pub shape: OutputShape,
    /// Snapshot path; stdout when absent.
    pub output: Option<PathBuf>,
    pub options: ExtractOptions,
}

/// Parse the arguments following `cfgx extract`.
pub fn parse_extract_args(args: &[String]) -> Result<ExtractArgs, String> {
    let mut positional = Vec::new();
    let mut shape = OutputShape::Any;
    let mut output = None;
    let mut options = ExtractOptions::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--models" => shape = OutputShape::Models,
            "--config" => shape = OutputShape::Config,
            "-o" | "--output" => {
                let Some(path) = args.get(i + 1) else {
                    return Err(format!("missing path after '{arg}'"));
                };
                output = Some(PathBuf::from(path));
                i += 1;
            }
            _ => {
                if let Some(depth) = arg.strip_prefix("--max-depth=") {
                    options.max_depth = depth
                        .parse()
                        .map_err(|_| format!("invalid --max-depth value '{depth}'"))?;
                } else if arg.starts_with('-') {
                    return Err(format!("unknown option '{arg}'"));
                } else {
                    positional.push(arg);
                }
            }
        }
        i += 1;
    }

    match positional.as_slice() {
        [file, symbol] => Ok(ExtractArgs {
            file: PathBuf::from(file),
            symbol: (*symbol).to_string(),
            shape,
            output,
            options,
        }),
        [] | [_] => Err("expected <file> and <symbol>".to_string()),
        [_, _, extra, ..] => Err(format!("unexpected argument '{extra}'")),
    }
}

/// Run `cfgx extract`, printing the JSON or writing it to `args.output`.
pub fn run_extract(args: &ExtractArgs) -> Result<(), Error> {
    let json = match args.shape {
        OutputShape::Any => {
            let project = cfgx_syntax::Project::load(&args.file)?;
            for warning in project.warnings() {
                eprintln!("warning: {warning}");
            }
            extract_value(&project, &args.file, &args.symbol, &args.options)?
        }
        OutputShape::Models => {
            let models = load_models(&args.file, &args.symbol, &args.options)?;
            serde_json::Value::Array(models.into_iter().map(serde_json::Value::Object).collect())
        }
        OutputShape::Config => serde_json::Value::Object(load_database_config(
            &args.file,
            &args.symbol,
            &args.options,
        )?),
    };

    match &args.output {
        Some(path) => write_snapshot(path, &json),
        None => {
            println!("{}", serde_json::to_string_pretty(&json)?);
            Ok(())
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn positional_and_flags() {
        let parsed = parse_extract_args(&args(&[
            "models.ts",
            "--models",
            "rawModels",
            "-o",
            "out.json",
            "--max-depth=64",
        ]));
        assert_eq!(
            parsed,
            Ok(ExtractArgs {
                file: PathBuf::from("models.ts"),
                symbol: "rawModels".into(),
                shape: OutputShape::Models,
                output: Some(PathBuf::from("out.json")),
                options: ExtractOptions { max_depth: 64 },
            })
        );
    }

    #[test]
    fn defaults() {
        let parsed = parse_extract_args(&args(&["db.ts", "databaseConfig"])).unwrap();
        assert_eq!(parsed.shape, OutputShape::Any);
        assert_eq!(parsed.output, None);
        assert_eq!(parsed.options, ExtractOptions::default());
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_extract_args(&args(&["only-file.ts"])).is_err());
        assert!(parse_extract_args(&args(&["a.ts", "b", "c"])).is_err());
        assert!(parse_extract_args(&args(&["a.ts", "b", "-o"])).is_err());
        assert!(parse_extract_args(&args(&["a.ts", "b", "--max-depth=deep"])).is_err());
        assert!(parse_extract_args(&args(&["a.ts", "b", "--verbose"])).is_err());
    }
}
