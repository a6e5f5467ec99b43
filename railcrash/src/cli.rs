//! Command-line argument handling.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use crate::collision::{DetectorConfig, PolicySelection};
use crate::domain::Strictness;
use crate::loader::load_file;

/// Exit code for a completed run.
pub const EXIT_OK: u8 = 0;

/// Exit code for an invalid input document, or a failure writing output.
pub const EXIT_CONFIG: u8 = 1;

/// Exit code for a malformed command line.
pub const EXIT_USAGE: u8 = 2;

/// Usage summary printed on argument errors.
pub const USAGE: &str = "\
usage: railcrash <FILE> [--policy head-on|station|both] [--strict] [--include-stationary] [--json]

  --policy <NAME>        collision policy to run (default: head-on)
  --strict               require every station to have an outgoing and an incoming branch
  --include-stationary   let single-station routes take part in station collisions
  --json                 print the report as JSON";

/// Error from parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing input file")]
    MissingFile,

    #[error("unexpected argument '{0}'")]
    Unexpected(String),

    #[error("--policy needs a value")]
    MissingPolicy,

    #[error(transparent)]
    Policy(#[from] crate::collision::UnknownPolicy),
}

/// Parsed command line.
#[derive(Debug, Clone)]
pub struct Args {
    pub input: PathBuf,
    pub strictness: Strictness,
    pub detector: DetectorConfig,
    pub json: bool,
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut input = None;
        let mut strictness = Strictness::Lenient;
        let mut policy = PolicySelection::default();
        let mut include_stationary = false;
        let mut json = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--policy" => {
                    let value = args.next().ok_or(UsageError::MissingPolicy)?;
                    policy = value.parse()?;
                }
                "--strict" => strictness = Strictness::Strict,
                "--include-stationary" => include_stationary = true,
                "--json" => json = true,
                flag if flag.starts_with("--") => {
                    return Err(UsageError::Unexpected(flag.to_string()));
                }
                path if input.is_none() => input = Some(PathBuf::from(path)),
                other => return Err(UsageError::Unexpected(other.to_string())),
            }
        }

        Ok(Self {
            input: input.ok_or(UsageError::MissingFile)?,
            strictness,
            detector: DetectorConfig::new(policy, include_stationary),
            json,
        })
    }
}

/// Run the simulator for the command line `args` (program name excluded).
///
/// The report, or a single `Error: <message>` line for an invalid input
/// document, goes to `out`; usage errors go to `err`. Returns the process
/// exit code.
pub fn run<I, W, E>(args: I, out: &mut W, err: &mut E) -> u8
where
    I: IntoIterator<Item = String>,
    W: Write,
    E: Write,
{
    match try_run(args, out, err) {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(err, "Failed to write report: {e}");
            EXIT_CONFIG
        }
    }
}

fn try_run<I, W, E>(args: I, out: &mut W, err: &mut E) -> io::Result<u8>
where
    I: IntoIterator<Item = String>,
    W: Write,
    E: Write,
{
    let args = match Args::parse(args) {
        Ok(args) => args,
        Err(e) => {
            writeln!(err, "{e}")?;
            writeln!(err, "{USAGE}")?;
            return Ok(EXIT_USAGE);
        }
    };

    let scenario = match load_file(&args.input, args.strictness) {
        Ok(scenario) => scenario,
        Err(e) => {
            writeln!(out, "Error: {e}")?;
            return Ok(EXIT_CONFIG);
        }
    };

    let report = scenario.detect(&args.detector);
    info!(
        policy = %args.detector.policy,
        collisions = report.len(),
        "detection complete"
    );

    if args.json {
        let json = report.to_json().map_err(io::Error::other)?;
        writeln!(out, "{json}")?;
    } else {
        writeln!(out, "{}", report.summary_line())?;
        write!(out, "{report}")?;
    }

    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, UsageError> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        let args = parse(&["net.xml"]).unwrap();

        assert_eq!(args.input, PathBuf::from("net.xml"));
        assert_eq!(args.strictness, Strictness::Lenient);
        assert_eq!(args.detector.policy, PolicySelection::HeadOn);
        assert!(!args.detector.include_stationary);
        assert!(!args.json);
    }

    #[test]
    fn all_flags() {
        let args = parse(&[
            "--strict",
            "--policy",
            "both",
            "net.xml",
            "--include-stationary",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.strictness, Strictness::Strict);
        assert_eq!(args.detector.policy, PolicySelection::Both);
        assert!(args.detector.include_stationary);
        assert!(args.json);
    }

    #[test]
    fn errors() {
        assert_eq!(parse(&[]).unwrap_err(), UsageError::MissingFile);
        assert_eq!(
            parse(&["a.xml", "b.xml"]).unwrap_err(),
            UsageError::Unexpected("b.xml".into())
        );
        assert_eq!(
            parse(&["a.xml", "--fast"]).unwrap_err(),
            UsageError::Unexpected("--fast".into())
        );
        assert_eq!(
            parse(&["a.xml", "--policy"]).unwrap_err(),
            UsageError::MissingPolicy
        );
        assert!(matches!(
            parse(&["a.xml", "--policy", "diagonal"]),
            Err(UsageError::Policy(_))
        ));
    }

    /// Run with `args` and return (exit code, stdout, stderr).
    fn run_with(args: &[&str]) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().map(|s| s.to_string()), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn write_document(xml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(xml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn valid_document_prints_summary_then_lines() {
        let file = write_document(
            r#"<network stationCount="3" engineCount="2">
                 <branch from="0" to="1" length="1"/>
                 <branch from="1" to="2" length="1"/>
                 <route engine="0"><track station="0"/><track station="1"/><track station="2"/></route>
                 <route engine="1"><track station="2"/><track station="1"/><track station="0"/></route>
               </network>"#,
        );
        let path = file.path().to_str().unwrap();

        let (code, out, err) = run_with(&[path]);
        assert_eq!(code, EXIT_OK);
        assert_eq!(
            out,
            "2 crashes detected\n\
             Crash 1: stations: 0<->1 engines: 0, 1 time: 1.0\n\
             Crash 2: stations: 1<->2 engines: 0, 1 time: 1.0\n"
        );
        assert!(err.is_empty());

        let (code, out, _) = run_with(&[path, "--json"]);
        assert_eq!(code, EXIT_OK);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["count"], 2);
    }

    #[test]
    fn invalid_document_prints_single_error_line() {
        let file = write_document(
            r#"<network stationCount="2" engineCount="2">
                 <branch from="0" to="1" length="1"/>
                 <route engine="0"><track station="0"/><track station="1"/></route>
               </network>"#,
        );

        let (code, out, _) = run_with(&[file.path().to_str().unwrap()]);
        assert_eq!(code, EXIT_CONFIG);
        assert_eq!(out, "Error: engine 1 has no route\n");
        assert!(!out.contains("Crash"));
    }

    #[test]
    fn huge_engine_count_is_a_config_error() {
        let file = write_document(
            r#"<network stationCount="2" engineCount="4000000000">
                 <branch from="0" to="1" length="1"/>
                 <route engine="0"><track station="0"/><track station="1"/></route>
               </network>"#,
        );

        let (code, out, _) = run_with(&[file.path().to_str().unwrap()]);
        assert_eq!(code, EXIT_CONFIG);
        assert_eq!(out, "Error: engine 1 has no route\n");
    }

    #[test]
    fn unreadable_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.xml");

        let (code, out, _) = run_with(&[missing.to_str().unwrap()]);
        assert_eq!(code, EXIT_CONFIG);
        assert!(out.starts_with("Error: cannot read "));
    }

    #[test]
    fn usage_error_exits_with_usage_code() {
        let (code, out, err) = run_with(&["--policy", "diagonal", "net.xml"]);

        assert_eq!(code, EXIT_USAGE);
        assert!(out.is_empty());
        assert!(err.starts_with("unknown collision policy 'diagonal'"));
        assert!(err.contains("usage: railcrash"));

        let (code, _, err) = run_with(&[]);
        assert_eq!(code, EXIT_USAGE);
        assert!(err.starts_with("missing input file"));
    }
}
