//! Gates command implementation.

use console::style;
use qgen_emit::{Dialect, Emitter, emitter_for};
use qgen_ir::ExtendedGate;

/// Execute the gates command.
pub fn execute() {
    println!("{} Extended gates:\n", style("qgen").cyan().bold());

    print!("  {:<16}", "Gate");
    for dialect in Dialect::ALL {
        print!("{:<6}", dialect.to_string());
    }
    println!();

    for gate in ExtendedGate::ALL {
        print!("  {:<16}", gate.name());
        for dialect in Dialect::ALL {
            let emitter = emitter_for(dialect);
            let mark = match (emitter.supports(gate), emitter.supports_phase(gate)) {
                (true, true) => style("●").green(),
                (false, false) => style("○").red(),
                _ => style("◐").yellow(),
            };
            print!("{mark}     ");
        }
        println!();
    }

    println!(
        "\n  {} supported  {} extended or phase only  {} unsupported",
        style("●").green(),
        style("◐").yellow(),
        style("○").red()
    );
}
