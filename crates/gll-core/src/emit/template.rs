//! Text templates for the generated artifacts.

use crate::symbols::ExtractMode;
use crate::types::SymbolSet;

/// Column the slot type is aligned to in the storage struct.
const FIELD_COLUMN: usize = 48;

const PROC_ADDRESS: &str = "::gll_core::types::ProcAddress";
const PROC_TABLE: &str = "::gll_core::loader::ProcTable";

pub(super) fn banner(source_name: &str, mode: ExtractMode) -> String
{
    let scope = if mode.includes_extensions() {
        "core and extension entry points"
    } else {
        "core entry points"
    };
    format!("// Generated by gll from {source_name} ({scope}). Do not edit.\n")
}

pub(super) fn declarations(banner: &str, symbols: &SymbolSet) -> String
{
    let mut out = String::new();
    out.push_str(banner);
    out.push_str(&format!(
        "//\n// Typed accessors for {} entry points. `PFN*PROC` types must be in scope.\n\n",
        symbols.len()
    ));

    out.push_str("#[allow(non_snake_case, clippy::missing_safety_doc)]\nimpl GllProcs\n{\n");
    for (index, symbol) in symbols.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let name = symbol.name();
        let pointer_type = symbol.pointer_type();
        out.push_str(&format!(
            "    /// `{name}`, or `None` when the entry point is unavailable.\n    \
             #[inline]\n    \
             pub fn {name}(&self) -> Option<{pointer_type}>\n    \
             {{\n        \
             // SAFETY: the slot only ever holds the address resolved for `{name}`.\n        \
             unsafe {{ self.{name}.cast::<{pointer_type}>() }}\n    \
             }}\n"
        ));
    }
    out.push_str("}\n");
    out
}

pub(super) fn definitions(banner: &str, symbols: &SymbolSet) -> String
{
    let mut out = String::new();
    out.push_str(banner);
    out.push_str(&format!(
        "//\n// Slot storage and bulk resolution for {} entry points. Paths into gll_core\n// are absolute so this file can be included into any module.\n\n",
        symbols.len()
    ));

    out.push_str("/// Number of entry points in [`GllProcs`].\n");
    out.push_str(&format!("pub const GLL_PROC_COUNT: usize = {};\n\n", symbols.len()));

    out.push_str("/// Entry-point names, in slot order.\n");
    out.push_str("pub const GLL_PROC_NAMES: [&str; GLL_PROC_COUNT] = [\n");
    for symbol in symbols {
        out.push_str(&format!("    \"{}\",\n", symbol.name()));
    }
    out.push_str("];\n\n");

    out.push_str("/// One slot per entry point, null until loaded.\n");
    out.push_str("#[allow(non_snake_case)]\n#[derive(Debug, Clone, Default)]\npub struct GllProcs\n{\n");
    for symbol in symbols {
        let field = format!("{}:", symbol.name());
        out.push_str(&format!("    {field:<FIELD_COLUMN$} {PROC_ADDRESS},\n"));
    }
    out.push_str("}\n\n");

    out.push_str(&format!("impl {PROC_TABLE} for GllProcs\n{{\n"));
    out.push_str(&format!(
        "    fn load_with(&mut self, loader: &mut dyn FnMut(&str) -> {PROC_ADDRESS})\n    {{\n"
    ));
    if symbols.is_empty() {
        out.push_str("        let _ = loader;\n");
    }
    for symbol in symbols {
        let name = symbol.name();
        out.push_str(&format!("        self.{name} = loader(\"{name}\");\n"));
    }
    out.push_str("    }\n\n");

    out.push_str(&format!(
        "    fn for_each_slot(&self, visit: &mut dyn FnMut(&str, {PROC_ADDRESS}))\n    {{\n"
    ));
    if symbols.is_empty() {
        out.push_str("        let _ = visit;\n");
    }
    for symbol in symbols {
        let name = symbol.name();
        out.push_str(&format!("        visit(\"{name}\", self.{name});\n"));
    }
    out.push_str("    }\n}\n");
    out
}
