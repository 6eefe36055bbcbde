use std::fmt;

use crate::table::LookupTable;
use crate::utils::SORTING_NETWORK;

/// A standalone AWK program embedding the table.
///
/// Each input record holds four digits; the program sorts them with the
/// same comparator network as [`crate::utils::sort4`] and prints
/// `<record> -> [<solutions>]`.
pub struct AwkScript<'a>(pub &'a LookupTable);

fn escape_awk(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

impl fmt::Display for AwkScript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let table = self.0;

        writeln!(
            f,
            "# make10 lookup: target {}, {:?} shapes, {} keys",
            table.target(),
            table.shapes(),
            table.populated()
        )?;
        writeln!(f, "BEGIN {{")?;
        writeln!(f, "    FS = \"\"")?;
        writeln!(f, "    OFS = \", \"")?;
        writeln!(f)?;
        for (key, solutions) in table.entries() {
            writeln!(f, "    S[{}] = \"{}\"", key, escape_awk(&solutions.join(", ")))?;
        }
        writeln!(f, "}}")?;
        writeln!(f)?;

        writeln!(f, "{{")?;
        writeln!(f, "    if (NF < 4) next")?;
        writeln!(f, "    n1 = $1 + 0; n2 = $2 + 0; n3 = $3 + 0; n4 = $4 + 0")?;
        writeln!(f)?;
        for (i, j) in SORTING_NETWORK {
            let (a, b) = (i + 1, j + 1);
            writeln!(f, "    if (n{a} > n{b}) {{ t=n{a}; n{a}=n{b}; n{b}=t }}")?;
        }
        writeln!(f)?;
        writeln!(f, "    key = n1*1000 + n2*100 + n3*10 + n4")?;
        writeln!(f, "    if (key in S) {{")?;
        writeln!(f, "        print $0 \" -> [\" S[key] \"]\"")?;
        writeln!(f, "    }} else {{")?;
        writeln!(f, "        print $0 \" -> []\"")?;
        writeln!(f, "    }}")?;
        writeln!(f, "}}")
    }
}

pub fn emit_awk(table: &LookupTable) -> String {
    AwkScript(table).to_string()
}
