use erdgen_core::NAMESPACE_DELIMITER;

/// Schema whose tables get no namespace prefix.
pub const DEFAULT_SCHEMA: &str = "public";

/// How table names become model names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingStyle {
    /// Singular CamelCase class names (`line_items` -> `LineItem`).
    #[default]
    Class,
    /// Raw table names.
    Table,
}

/// Model name for a table, namespaced by schema outside `public`.
pub fn model_name(schema: &str, table: &str, style: NamingStyle) -> String {
    let base = match style {
        NamingStyle::Class => classify(table),
        NamingStyle::Table => table.to_string(),
    };

    if schema == DEFAULT_SCHEMA {
        return base;
    }

    let namespace = match style {
        NamingStyle::Class => Some(camelize(schema)).filter(|name| !name.is_empty()),
        NamingStyle::Table => None,
    }
    .unwrap_or_else(|| schema.to_string());
    format!("{namespace}{NAMESPACE_DELIMITER}{base}")
}

/// Singularize the last word of a table name and camelize it.
///
/// Names made only of underscores have no words and are returned unchanged.
pub fn classify(table: &str) -> String {
    let class_name = match table.rsplit_once('_') {
        Some((head, last)) => camelize(&format!("{head}_{}", singularize(last))),
        None => camelize(&singularize(table)),
    };
    if class_name.is_empty() {
        return table.to_string();
    }
    class_name
}

fn camelize(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

const IRREGULAR: &[(&str, &str)] = &[
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("mice", "mouse"),
];

const UNCOUNTABLE: &[&str] = &["data", "equipment", "information", "metadata", "news", "series"];

fn singularize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == lower) {
        return (*singular).to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "shes", "ches", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}
