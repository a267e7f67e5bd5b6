//! Output formatting for CLI

use crate::mapping::{GeneratedMapping, MappingResult};

/// Format the header comment printed before the first document
pub fn render_banner(now: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "// build via es-mapping-cli, version: {}\n",
        env!("CARGO_PKG_VERSION")
    ));
    output.push_str(&format!("// time: {now}\n"));
    output.push('\n');
    output
}

/// Format one generated mapping as a `PUT` block
pub fn render_mapping(item: &GeneratedMapping) -> MappingResult<String> {
    let body = item.document.to_json_pretty()?;
    Ok(format!("PUT /{}\n{}\n\n", item.target_index, body))
}
