//! CLI parsing and program loading tests.
//!
//! The CLI is a binary crate, so these tests mirror its argument definitions
//! and loading logic on top of the library crates.

mod load_tests {
    use qgen_emit::{Dialect, Render};
    use qgen_ir::Program;
    use std::fs;

    /// Equivalent to commands::common::load_program
    fn load_program(path: &std::path::Path) -> anyhow::Result<Program> {
        let source = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Ok(serde_yaml_ng::from_str(&source)?),
            _ => Ok(serde_json::from_str(&source)?),
        }
    }

    #[test]
    fn test_load_json_program() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.json");
        fs::write(
            &path,
            r#"{"operations": [
                {"op": "simple", "name": "X", "qubits": [1]},
                {"op": "measure", "qubit": 1, "clbit": 2}
            ]}"#,
        )
        .unwrap();

        let program = load_program(&path).unwrap();
        assert_eq!(
            program.render(Dialect::Quil).unwrap(),
            "X 1\nMEASURE 1 ro[2]"
        );
    }

    #[test]
    fn test_load_yaml_program() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bell.yaml");
        fs::write(
            &path,
            "operations:\n\
             - op: simple\n  name: H\n  qubits: [0]\n\
             - op: extended\n  gate: CNOT\n  qubits: [0, 1]\n\
             - op: phase\n  gate: Rz\n  qubits: [1]\n  angle: pi/2\n",
        )
        .unwrap();

        let program = load_program(&path).unwrap();
        assert_eq!(
            program.render(Dialect::QSharp).unwrap(),
            "H(0);\nCNOT(0, 1);\nRz(1.571, 1);"
        );
    }

    #[test]
    fn test_unknown_gate_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"{"operations": [{"op": "extended", "gate": "TOFFOLI", "qubits": [0, 1, 2]}]}"#,
        )
        .unwrap();

        let err = load_program(&path).unwrap_err();
        assert!(err.to_string().contains("Unknown gate: TOFFOLI"));
    }

    #[test]
    fn test_empty_operations_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "{}").unwrap();

        let program = load_program(&path).unwrap();
        assert!(program.is_empty());
    }
}

mod config_tests {
    use qgen_emit::Dialect;
    use serde::Deserialize;
    use std::path::PathBuf;

    /// Mirror of config::CliConfig
    #[derive(Debug, Deserialize)]
    struct CliConfig {
        #[serde(default = "default_dialect")]
        default_dialect: Dialect,
        #[serde(default)]
        output_dir: Option<PathBuf>,
    }

    fn default_dialect() -> Dialect {
        Dialect::Quil
    }

    #[test]
    fn test_config_defaults() {
        let config: CliConfig = serde_yaml_ng::from_str("{}").unwrap();
        assert_eq!(config.default_dialect, Dialect::Quil);
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_config_values() {
        let config: CliConfig =
            serde_yaml_ng::from_str("default_dialect: q#\noutput_dir: /tmp/qgen\n").unwrap();
        assert_eq!(config.default_dialect, Dialect::QSharp);
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/qgen")));
    }

    #[test]
    fn test_config_rejects_unknown_dialect() {
        let result: Result<CliConfig, _> = serde_yaml_ng::from_str("default_dialect: cirq\n");
        assert!(result.is_err());
    }
}

mod parse_tests {
    use clap::{Parser, Subcommand};

    #[derive(Parser)]
    #[command(name = "qgen")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[arg(long, global = true)]
        config: Option<String>,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        Render {
            #[arg(short, long)]
            input: String,

            #[arg(short, long)]
            output: Option<String>,

            #[arg(short, long)]
            dialect: Option<String>,
        },
        Gates,
        Version,
    }

    #[test]
    fn test_parse_render_minimal() {
        let cli = TestCli::try_parse_from(["qgen", "render", "-i", "bell.json"]).unwrap();
        match cli.command {
            TestCommands::Render {
                input,
                output,
                dialect,
            } => {
                assert_eq!(input, "bell.json");
                assert!(output.is_none());
                assert!(dialect.is_none());
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_parse_render_all_args() {
        let cli = TestCli::try_parse_from([
            "qgen", "-vv", "render", "--input", "bell.yaml", "-o", "bell.qasm", "-d", "qasm",
            "--config", "cfg.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some("cfg.yaml"));
        match cli.command {
            TestCommands::Render {
                output, dialect, ..
            } => {
                assert_eq!(output.as_deref(), Some("bell.qasm"));
                assert_eq!(dialect.as_deref(), Some("qasm"));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_parse_render_missing_input() {
        assert!(TestCli::try_parse_from(["qgen", "render"]).is_err());
    }

    #[test]
    fn test_parse_gates_and_version() {
        assert!(matches!(
            TestCli::try_parse_from(["qgen", "gates"]).unwrap().command,
            TestCommands::Gates
        ));
        assert!(matches!(
            TestCli::try_parse_from(["qgen", "version"]).unwrap().command,
            TestCommands::Version
        ));
    }

    #[test]
    fn test_parse_unknown_subcommand() {
        assert!(TestCli::try_parse_from(["qgen", "simulate"]).is_err());
    }
}
