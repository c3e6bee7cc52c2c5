//! C rendering of interface tables
//!
//! Produces the two generated documents: a header with one `extern`
//! declaration per interface and a source file with the mapping arrays and
//! `astarte_interface_t` constants. Output depends only on the interfaces and
//! their order, so re-rendering unchanged input is byte-identical.

use crate::config::GeneratorConfig;
use crate::interface::{Interface, Mapping};
use crate::naming::{c_string_literal, include_guard, interface_symbol, mappings_symbol};

/// The generated header and source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub header: String,
    pub source: String,
}

/// Renders interfaces using the file names and banner of a configuration
pub struct Renderer<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Render both documents, keeping the given interface order
    pub fn render(&self, interfaces: &[Interface]) -> RenderedOutput {
        let mut declarations = Vec::with_capacity(interfaces.len());
        let mut definitions = Vec::with_capacity(interfaces.len());

        for interface in interfaces {
            tracing::debug!(
                "Rendering {} as {}",
                interface.name,
                interface_symbol(&interface.name)
            );
            declarations.push(render_declaration(interface));
            definitions.push(render_definition(interface));
        }

        RenderedOutput {
            header: self.render_header(&declarations),
            source: self.render_source(&definitions),
        }
    }

    /// Wrap declarations in the include-guarded header document
    pub fn render_header(&self, declarations: &[String]) -> String {
        let guard = include_guard(&self.config.header_file_name);
        let mut output = String::new();

        output.push_str(&self.config.license_banner);
        output.push_str("\n\n");
        output.push_str("/**\n");
        output.push_str(&format!(" * @file {}\n", self.config.header_file_name));
        output.push_str(" * @brief Contains automatically generated interfaces.\n");
        output.push_str(" *\n");
        output.push_str(
            " * @details The generated structures contain all information regarding each interface\n",
        );
        output.push_str(" * and are automatically generated from the json interfaces definitions.\n");
        output.push_str(" */\n\n");
        output.push_str(&format!("#ifndef {guard}\n"));
        output.push_str(&format!("#define {guard}\n\n"));
        output.push_str(&format!("#include \"{}\"\n\n", self.config.base_header));

        if !declarations.is_empty() {
            output.push_str(&declarations.join("\n"));
            output.push_str("\n\n");
        }

        output.push_str(&format!("#endif /* {guard} */\n"));
        output
    }

    /// Prefix definitions with the banner and the include of the generated header
    pub fn render_source(&self, definitions: &[String]) -> String {
        let mut output = String::new();

        output.push_str(&self.config.license_banner);
        output.push_str("\n\n");
        output.push_str("/**\n");
        output.push_str(&format!(" * @file {}\n", self.config.source_file_name));
        output.push_str(" * @brief Contains automatically generated interfaces.\n");
        output.push_str(" */\n\n");
        output.push_str(&format!("#include \"{}\"\n", self.config.header_file_name));

        for definition in definitions {
            output.push('\n');
            output.push_str(definition);
        }

        output
    }
}

/// `extern` declaration of an interface constant
pub fn render_declaration(interface: &Interface) -> String {
    format!(
        "extern const astarte_interface_t {};",
        interface_symbol(&interface.name)
    )
}

/// Mapping array and interface constant of one interface
pub fn render_definition(interface: &Interface) -> String {
    let mappings = mappings_symbol(&interface.name);
    let mut output = String::new();

    output.push_str(&format!(
        "static const astarte_mapping_t {mappings}[{}] = {{\n",
        interface.mappings.len()
    ));
    for mapping in &interface.mappings {
        output.push_str(&render_mapping(mapping));
    }
    output.push_str("};\n\n");

    output.push_str(&format!(
        "const astarte_interface_t {} = {{\n",
        interface_symbol(&interface.name)
    ));
    output.push_str(&format!(
        "    .name = {},\n",
        c_string_literal(&interface.name)
    ));
    output.push_str(&format!(
        "    .major_version = {},\n",
        interface.version_major
    ));
    output.push_str(&format!(
        "    .minor_version = {},\n",
        interface.version_minor
    ));
    output.push_str(&format!(
        "    .type = {},\n",
        interface.interface_type.c_symbol()
    ));
    output.push_str(&format!(
        "    .ownership = {},\n",
        interface.ownership.c_symbol()
    ));
    output.push_str(&format!(
        "    .aggregation = {},\n",
        interface.aggregation.c_symbol()
    ));
    output.push_str(&format!("    .mappings = {mappings},\n"));
    output.push_str("};\n");

    output
}

/// Initializer of one `astarte_mapping_t` array element
pub fn render_mapping(mapping: &Mapping) -> String {
    let mut output = String::new();

    output.push_str("    {\n");
    output.push_str(&format!(
        "        .endpoint = {},\n",
        c_string_literal(&mapping.endpoint)
    ));
    output.push_str(&format!(
        "        .type = {},\n",
        mapping.mapping_type.c_symbol()
    ));
    output.push_str(&format!(
        "        .reliability = {},\n",
        mapping.reliability.c_symbol()
    ));
    output.push_str(&format!(
        "        .explicit_timestamp = {},\n",
        c_bool(mapping.explicit_timestamp)
    ));
    output.push_str(&format!(
        "        .allow_unset = {},\n",
        c_bool(mapping.allow_unset)
    ));
    output.push_str("    },\n");

    output
}

fn c_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
