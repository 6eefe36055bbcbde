use std::fmt;

use crate::table::LookupTable;
use crate::utils::TABLE_SLOTS;

/// A Rust module defining `SOLUTIONS`, one slice per key `0..=9999`.
///
/// Index it with the canonical key of the digits; unused slots are `&[]`.
pub struct RustSource<'a>(pub &'a LookupTable);

impl fmt::Display for RustSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let table = self.0;

        writeln!(
            f,
            "// Generated by make10 (target {}, {:?} shapes). Do not edit.",
            table.target(),
            table.shapes()
        )?;
        writeln!(f)?;
        writeln!(f, "pub static SOLUTIONS: [&[&str]; {}] = [", TABLE_SLOTS)?;
        for index in 0..TABLE_SLOTS {
            let solutions = table.slot(index);
            if solutions.is_empty() {
                writeln!(f, "    &[],")?;
                continue;
            }

            write!(f, "    &[")?;
            for (n, expr) in solutions.iter().enumerate() {
                if n > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?}", expr)?;
            }
            writeln!(f, "], // {}", index)?;
        }
        writeln!(f, "];")
    }
}

pub fn emit_rust(table: &LookupTable) -> String {
    RustSource(table).to_string()
}
