//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum program code generation",
        style("qgen").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qgen-ir    Operation model");
    println!("  qgen-emit  Quil, OpenQASM 2.0 and Q# emitters");
    println!("  qgen-cli   Command-line interface");
    println!();
    println!("Dialects:   quil, qasm, q#");
    println!("License:    {}", style("Apache-2.0").dim());
}
