use std::fmt::Write;

/// Generates a query with `depth` nested selection sets, each selecting an
/// `id` next to the `child` that holds the next level.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let field = if level == 0 { "root" } else { "child" };
        let _ = writeln!(out, "{indent}{field} {{");
        let _ = writeln!(out, "{indent}  id");
    }
    let _ = writeln!(out, "{}name", "  ".repeat(depth + 1));
    for level in (0..depth).rev() {
        let _ = writeln!(out, "{}}}", "  ".repeat(level + 1));
    }
    out.push_str("}\n");
    out
}

/// Generates a document with `count` named queries and one fragment per
/// query.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 140);
    for i in 0..count {
        let _ = writeln!(out, "query Operation{i}($id: ID! $verbose: Boolean) {{");
        let _ = writeln!(out, "  node(id: $id, kind: ITEM) {{");
        let _ = writeln!(out, "    id");
        let _ = writeln!(out, "    field{i}: description @include(if: $verbose)");
        let _ = writeln!(out, "    ...Details{i}");
        let _ = writeln!(out, "  }}");
        let _ = writeln!(out, "}}");
        let _ = writeln!(out, "fragment Details{i} on Node {{ name createdAt }}\n");
    }
    out
}

/// Generates a single field with `count` comma-separated arguments of mixed
/// literal kinds.
pub fn wide_arguments(count: usize) -> String {
    let mut out = String::from("{ search(");
    for i in 0..count {
        if i > 0 {
            out.push_str(", ");
        }
        match i % 4 {
            0 => { let _ = write!(out, "int{i}: {i}"); },
            1 => { let _ = write!(out, "str{i}: \"value {i}\""); },
            2 => { let _ = write!(out, "var{i}: $v{i}"); },
            _ => { let _ = write!(out, "enum{i}: VALUE_{i}"); },
        }
    }
    out.push_str(") { id } }\n");
    out
}
